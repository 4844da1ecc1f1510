use super::*;

fn seeded_state() -> MatrixState {
    let mut matrix = Matrix::zeroed();
    for term in Term::ALL {
        *matrix.row_mut(term) = PlanPrices::from_lite(10.0);
    }
    MatrixState {
        matrix,
        original_matrix: matrix,
    }
}

#[test]
fn lite_update_cascades_standard_and_unlimited() {
    let state = reduce(
        seeded_state(),
        MatrixAction::UpdatePrice {
            term: Term::Months36,
            plan: Plan::Lite,
            price: 50.0,
        },
    );
    let row = state.matrix.row(Term::Months36);
    assert_eq!(row.lite, 50.0);
    assert_eq!(row.standard, 100.0);
    assert_eq!(row.unlimited, 150.0);
}

#[test]
fn lite_update_leaves_other_terms_unchanged() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::UpdatePrice {
            term: Term::Months36,
            plan: Plan::Lite,
            price: 50.0,
        },
    );
    for term in [Term::Months24, Term::Months12, Term::MonthToMonth] {
        assert_eq!(state.matrix.row(term), before.matrix.row(term));
    }
}

#[test]
fn standard_update_changes_only_the_targeted_cell() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::UpdatePrice {
            term: Term::Months24,
            plan: Plan::Standard,
            price: 77.0,
        },
    );
    let row = state.matrix.row(Term::Months24);
    assert_eq!(row.standard, 77.0);
    assert_eq!(row.lite, before.matrix.row(Term::Months24).lite);
    assert_eq!(row.unlimited, before.matrix.row(Term::Months24).unlimited);
}

#[test]
fn unlimited_update_changes_only_the_targeted_cell() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::UpdatePrice {
            term: Term::MonthToMonth,
            plan: Plan::Unlimited,
            price: 3.5,
        },
    );
    let row = state.matrix.row(Term::MonthToMonth);
    assert_eq!(row.unlimited, 3.5);
    assert_eq!(row.lite, before.matrix.row(Term::MonthToMonth).lite);
    assert_eq!(row.standard, before.matrix.row(Term::MonthToMonth).standard);
}

#[test]
fn updates_never_touch_the_original_matrix() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::UpdatePrice {
            term: Term::Months12,
            plan: Plan::Lite,
            price: 99.0,
        },
    );
    assert_eq!(state.original_matrix, before.original_matrix);
}

#[test]
fn reset_to_empty_wins_over_any_payload() {
    let mut payload = Matrix::zeroed();
    *payload.row_mut(Term::Months36) = PlanPrices::from_lite(500.0);
    let state = reduce(
        seeded_state(),
        MatrixAction::SetMatrix {
            payload: Some(payload),
            reset_to_empty: true,
        },
    );
    assert_eq!(state.matrix, Matrix::zeroed());
}

#[test]
fn reset_to_empty_does_not_touch_the_original_matrix() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::SetMatrix {
            payload: None,
            reset_to_empty: true,
        },
    );
    assert_eq!(state.original_matrix, before.original_matrix);
}

#[test]
fn set_matrix_replaces_the_working_matrix() {
    let mut payload = Matrix::zeroed();
    *payload.row_mut(Term::Months12) = PlanPrices::from_lite(8.0);
    let state = reduce(
        seeded_state(),
        MatrixAction::SetMatrix {
            payload: Some(payload),
            reset_to_empty: false,
        },
    );
    assert_eq!(state.matrix, payload);
}

// Payload is required unless reset_to_empty; the reducer refuses to invent a
// default for the missing-payload case and leaves the state alone.
#[test]
fn set_matrix_without_payload_or_reset_is_a_no_op() {
    let before = seeded_state();
    let state = reduce(
        before,
        MatrixAction::SetMatrix {
            payload: None,
            reset_to_empty: false,
        },
    );
    assert_eq!(state, before);
}

#[test]
fn set_original_matrix_defaults_to_all_zero() {
    let state = reduce(
        seeded_state(),
        MatrixAction::SetOriginalMatrix { payload: None },
    );
    assert_eq!(state.original_matrix, Matrix::zeroed());
}

#[test]
fn cancel_price_restores_the_supplied_matrix_exactly() {
    let before = seeded_state();
    let edited = reduce(
        before,
        MatrixAction::UpdatePrice {
            term: Term::Months36,
            plan: Plan::Lite,
            price: 123.0,
        },
    );
    let original = edited.original_matrix;
    let state = reduce(edited, MatrixAction::CancelPrice { payload: original });
    assert_eq!(state.matrix, before.original_matrix);
}

#[test]
fn store_seeds_both_matrices_from_the_initial_value() {
    let initial = seeded_state().matrix;
    let store = MatrixStore::new(Some(initial));
    assert_eq!(*store.matrix(), initial);
    assert_eq!(*store.original_matrix(), initial);
}

#[test]
fn store_without_initial_value_starts_all_zero() {
    let store = MatrixStore::new(None);
    assert_eq!(*store.matrix(), Matrix::zeroed());
    assert_eq!(*store.original_matrix(), Matrix::zeroed());
}
