use shared::domain::Matrix;
use storage::PricingStore;
use thiserror::Error;
use tracing::warn;

pub mod validate;

use validate::{validate_matrix, Violation};

#[derive(Clone)]
pub struct ApiContext {
    pub store: PricingStore,
}

#[derive(Debug, Error)]
pub enum SavePricingError {
    /// One or more cells violate the pricing schema. All violations are
    /// collected; callers surface the first one.
    #[error("invalid pricing matrix: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("pricing storage failure")]
    Storage(#[source] anyhow::Error),
}

impl SavePricingError {
    /// Message of the first collected violation, when any detail is available.
    pub fn first_violation_message(&self) -> Option<&str> {
        match self {
            SavePricingError::Validation(violations) => {
                violations.first().map(|violation| violation.message.as_str())
            }
            SavePricingError::Storage(_) => None,
        }
    }
}

/// Validates `matrix` against the pricing schema and persists it, returning
/// the canonical stored value (the exact validated payload).
pub async fn save_pricing(ctx: &ApiContext, matrix: Matrix) -> Result<Matrix, SavePricingError> {
    let violations = validate_matrix(&matrix);
    if !violations.is_empty() {
        for violation in &violations {
            warn!(cell = %violation.cell, "pricing validation failed: {}", violation.message);
        }
        return Err(SavePricingError::Validation(violations));
    }

    ctx.store
        .save(&matrix)
        .await
        .map_err(SavePricingError::Storage)?;
    Ok(matrix)
}

/// Returns the stored matrix, falling back to the all-zero matrix before any
/// save has happened.
pub async fn load_pricing(ctx: &ApiContext) -> Result<Matrix, SavePricingError> {
    let stored = ctx
        .store
        .load()
        .await
        .map_err(SavePricingError::Storage)?;
    Ok(stored.unwrap_or_else(Matrix::zeroed))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
