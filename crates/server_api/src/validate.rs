use shared::domain::Matrix;

pub const MIN_PRICE: f64 = 0.01;
pub const MAX_PRICE: f64 = 999_999.99;

/// A single schema violation, addressed by its `term.plan` cell path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub cell: String,
    pub message: String,
}

/// Checks every one of the 12 cells against the price bounds and returns all
/// violations in term-major cell order. Collection never aborts early, so a
/// caller can report every invalid cell at once.
pub fn validate_matrix(matrix: &Matrix) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (term, plan, price) in matrix.cells() {
        let cell = format!("{term}.{plan}");
        let message = if !price.is_finite() {
            format!("{cell} must be a number")
        } else if price < MIN_PRICE {
            format!("{cell} must be greater than or equal to {MIN_PRICE}")
        } else if price > MAX_PRICE {
            format!("{cell} must be less than or equal to {MAX_PRICE}")
        } else {
            continue;
        };
        violations.push(Violation { cell, message });
    }
    violations
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
