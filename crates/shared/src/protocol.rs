//! Wire contract between the pricing form and the server.
//!
//! The save request body and the success response body are both the full
//! [`Matrix`](crate::domain::Matrix); failures carry an
//! [`ApiError`](crate::error::ApiError) body instead.

/// Route accepting the full matrix as a JSON POST body.
pub const SAVE_PRICING_ROUTE: &str = "/api/save-pricing";

/// Route returning the last stored matrix (all-zero before any save).
pub const GET_PRICING_ROUTE: &str = "/api/pricing";

/// Static-asset path at which the public mirror of the stored matrix is served.
pub const PRICING_ASSET_ROUTE: &str = "/pricing.json";

/// Liveness probe.
pub const HEALTHZ_ROUTE: &str = "/healthz";
