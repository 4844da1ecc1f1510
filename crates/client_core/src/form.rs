use shared::domain::{Matrix, Plan, Term};
use thiserror::Error;
use tracing::warn;

use crate::store::{MatrixAction, MatrixStore};
use crate::{GatewayError, PricingGateway};

/// The two-state machine behind the Edit/Cancel toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Read,
    Edit,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("the form is read-only; enter edit mode first")]
    ReadOnly,
    #[error("a save is already in flight")]
    SaveInFlight,
    #[error("{0}")]
    Save(#[from] GatewayError),
}

/// Snapshot handed out by [`EditForm::begin_save`]: the matrix to send while
/// the save is in flight.
#[derive(Debug, Clone, Copy)]
pub struct SaveTicket {
    matrix: Matrix,
}

impl SaveTicket {
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

/// The pricing form controller: a matrix store plus read/edit mode plus a
/// single-flight guard around save.
pub struct EditForm<G> {
    store: MatrixStore,
    mode: FormMode,
    saving: bool,
    gateway: G,
}

impl<G: PricingGateway> EditForm<G> {
    /// Seeds the form from `initial` (the server-confirmed matrix when one
    /// was fetched), falling back to all-zero.
    pub fn new(gateway: G, initial: Option<Matrix>) -> Self {
        Self {
            store: MatrixStore::new(initial),
            mode: FormMode::default(),
            saving: false,
            gateway,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Busy capability for the save control: while true, a further save is
    /// rejected with [`FormError::SaveInFlight`].
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn matrix(&self) -> &Matrix {
        self.store.matrix()
    }

    pub fn original_matrix(&self) -> &Matrix {
        self.store.original_matrix()
    }

    /// Read → Edit. No other effect.
    pub fn edit(&mut self) {
        self.mode = FormMode::Edit;
    }

    /// Edit → Read, reverting unsaved edits to the server-confirmed matrix.
    /// No effect in read mode.
    pub fn cancel(&mut self) {
        if self.mode != FormMode::Edit {
            return;
        }
        let original = *self.store.original_matrix();
        self.store
            .dispatch(MatrixAction::CancelPrice { payload: original });
        self.mode = FormMode::Read;
    }

    /// The single Edit/Cancel button: edit in read mode, cancel in edit mode.
    pub fn toggle(&mut self) {
        match self.mode {
            FormMode::Read => self.edit(),
            FormMode::Edit => self.cancel(),
        }
    }

    /// Zeroes every cell. The server-confirmed matrix stays untouched and the
    /// form stays in edit mode.
    pub fn clear(&mut self) -> Result<(), FormError> {
        if self.mode != FormMode::Edit {
            return Err(FormError::ReadOnly);
        }
        let original = *self.store.original_matrix();
        self.store.dispatch(MatrixAction::SetMatrix {
            payload: Some(original),
            reset_to_empty: true,
        });
        Ok(())
    }

    /// Per-keystroke cell edit. Raw field text is forwarded as typed: text
    /// that does not parse as a number becomes NaN and is rejected at save
    /// time. Lite edits recompute the derived cells immediately.
    pub fn input_cell(&mut self, term: Term, plan: Plan, raw: &str) -> Result<(), FormError> {
        if self.mode != FormMode::Edit {
            return Err(FormError::ReadOnly);
        }
        let price = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.store
            .dispatch(MatrixAction::UpdatePrice { term, plan, price });
        Ok(())
    }

    /// First half of a save: checks mode and the in-flight guard, marks the
    /// form busy and snapshots the matrix to send.
    pub fn begin_save(&mut self) -> Result<SaveTicket, FormError> {
        if self.mode != FormMode::Edit {
            return Err(FormError::ReadOnly);
        }
        if self.saving {
            return Err(FormError::SaveInFlight);
        }
        self.saving = true;
        Ok(SaveTicket {
            matrix: *self.store.matrix(),
        })
    }

    /// Second half of a save: clears the busy flag and applies the outcome.
    /// Success adopts the canonical stored matrix as the new rollback target
    /// and returns to read mode; failure keeps the form in edit mode with the
    /// edits intact and surfaces the error.
    pub fn complete_save(&mut self, outcome: Result<Matrix, GatewayError>) -> Result<(), FormError> {
        self.saving = false;
        match outcome {
            Ok(canonical) => {
                self.store.dispatch(MatrixAction::SetOriginalMatrix {
                    payload: Some(canonical),
                });
                self.mode = FormMode::Read;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "pricing save failed");
                Err(FormError::Save(err))
            }
        }
    }

    /// Full save round trip, single-flight per the busy guard.
    pub async fn save(&mut self) -> Result<(), FormError> {
        let ticket = self.begin_save()?;
        let outcome = self.gateway.save_pricing(ticket.matrix()).await;
        self.complete_save(outcome)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
