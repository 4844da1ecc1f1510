use super::*;

use shared::domain::{PlanPrices, Term};

fn test_context() -> (tempfile::TempDir, ApiContext) {
    let root = tempfile::tempdir().expect("tempdir");
    let store = PricingStore::new(
        root.path().join("pricing.json"),
        root.path().join("public").join("pricing.json"),
    )
    .expect("store");
    (root, ApiContext { store })
}

fn valid_matrix() -> Matrix {
    let mut matrix = Matrix::zeroed();
    for term in Term::ALL {
        *matrix.row_mut(term) = PlanPrices::from_lite(30.0);
    }
    matrix
}

#[tokio::test]
async fn save_returns_the_exact_validated_payload() {
    let (_root, ctx) = test_context();
    let matrix = valid_matrix();
    let stored = save_pricing(&ctx, matrix).await.expect("save");
    assert_eq!(stored, matrix);
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let (_root, ctx) = test_context();
    let matrix = valid_matrix();
    save_pricing(&ctx, matrix).await.expect("save");
    assert_eq!(load_pricing(&ctx).await.expect("load"), matrix);
}

#[tokio::test]
async fn load_defaults_to_the_all_zero_matrix() {
    let (_root, ctx) = test_context();
    assert_eq!(load_pricing(&ctx).await.expect("load"), Matrix::zeroed());
}

#[tokio::test]
async fn invalid_matrix_is_rejected_without_touching_storage() {
    let (_root, ctx) = test_context();
    let mut matrix = valid_matrix();
    matrix.row_mut(Term::Months36).lite = 0.0;
    let err = save_pricing(&ctx, matrix).await.expect_err("rejection");
    assert!(matches!(err, SavePricingError::Validation(_)));
    assert!(!ctx.store.data_path().exists(), "rejected save must not persist");
}

#[tokio::test]
async fn first_violation_message_reports_the_first_bad_cell() {
    let (_root, ctx) = test_context();
    let mut matrix = valid_matrix();
    matrix.row_mut(Term::Months36).lite = 0.0;
    matrix.row_mut(Term::MonthToMonth).unlimited = -1.0;
    let err = save_pricing(&ctx, matrix).await.expect_err("rejection");
    let message = err.first_violation_message().expect("detail");
    assert!(message.starts_with("36months.lite"));
}
