use shared::domain::{Matrix, Plan, PlanPrices, Term};

/// The pair of matrices the form works against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatrixState {
    /// Current editable value.
    pub matrix: Matrix,
    /// Last server-confirmed value; rollback target for cancel. Updated only
    /// after a confirmed successful save.
    pub original_matrix: Matrix,
}

#[derive(Debug, Clone)]
pub enum MatrixAction {
    /// Replace the working matrix. With `reset_to_empty` it becomes all-zero
    /// regardless of payload. A payload is required when not resetting; an
    /// action carrying neither leaves the matrix untouched.
    SetMatrix {
        payload: Option<Matrix>,
        reset_to_empty: bool,
    },
    /// Replace the server-confirmed matrix; all-zero when absent.
    SetOriginalMatrix { payload: Option<Matrix> },
    /// Single-cell edit. A lite price rewrites its whole row through the
    /// derived-pricing cascade.
    UpdatePrice { term: Term, plan: Plan, price: f64 },
    /// Revert the working matrix to the caller-supplied value.
    CancelPrice { payload: Matrix },
}

/// Pure transition function. Never fails; invalid prices (NaN from unparsed
/// input) propagate untouched and are caught by validation on save.
pub fn reduce(mut state: MatrixState, action: MatrixAction) -> MatrixState {
    match action {
        MatrixAction::SetMatrix {
            payload,
            reset_to_empty,
        } => {
            if reset_to_empty {
                state.matrix = Matrix::zeroed();
            } else if let Some(payload) = payload {
                state.matrix = payload;
            }
            state
        }
        MatrixAction::SetOriginalMatrix { payload } => {
            state.original_matrix = payload.unwrap_or_else(Matrix::zeroed);
            state
        }
        MatrixAction::UpdatePrice { term, plan, price } => {
            if plan == Plan::Lite {
                *state.matrix.row_mut(term) = PlanPrices::from_lite(price);
            } else {
                state.matrix.row_mut(term).set_price(plan, price);
            }
            state
        }
        MatrixAction::CancelPrice { payload } => {
            state.matrix = payload;
            state
        }
    }
}

/// Explicit state holder passed to the form by handle; all mutation goes
/// through [`MatrixStore::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct MatrixStore {
    state: MatrixState,
}

impl MatrixStore {
    /// Seeds both matrices from `initial`, falling back to all-zero.
    pub fn new(initial: Option<Matrix>) -> Self {
        let seed = initial.unwrap_or_else(Matrix::zeroed);
        Self {
            state: MatrixState {
                matrix: seed,
                original_matrix: seed,
            },
        }
    }

    pub fn dispatch(&mut self, action: MatrixAction) {
        self.state = reduce(self.state, action);
    }

    pub fn state(&self) -> &MatrixState {
        &self.state
    }

    pub fn matrix(&self) -> &Matrix {
        &self.state.matrix
    }

    pub fn original_matrix(&self) -> &Matrix {
        &self.state.original_matrix
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
