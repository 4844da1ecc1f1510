//! Client-side core for the pricing form: the matrix store (reducer), the
//! edit form controller, and the HTTP gateway used to load and save pricing.

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Matrix, error::ApiError, protocol};
use thiserror::Error;

pub mod form;
pub mod store;

pub use form::{EditForm, FormError, FormMode, SaveTicket};
pub use store::{reduce, MatrixAction, MatrixState, MatrixStore};

/// Failure of a round trip to the pricing endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server refused the payload; carries the server's error message.
    #[error("{0}")]
    Rejected(String),
    /// Transport or protocol failure, surfaced raw to the user.
    #[error("pricing request failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait PricingGateway: Send + Sync {
    /// Persists `matrix`, returning the canonical stored value.
    async fn save_pricing(&self, matrix: &Matrix) -> Result<Matrix, GatewayError>;

    /// Fetches the last stored matrix, used to seed the form.
    async fn fetch_pricing(&self) -> Result<Matrix, GatewayError>;
}

/// reqwest-backed gateway talking to the pricing server.
pub struct HttpPricingGateway {
    http: Client,
    server_url: String,
}

impl HttpPricingGateway {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url: String = server_url.into();
        Self {
            http: Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.server_url)
    }
}

#[async_trait]
impl PricingGateway for HttpPricingGateway {
    async fn save_pricing(&self, matrix: &Matrix) -> Result<Matrix, GatewayError> {
        let response = self
            .http
            .post(self.url(protocol::SAVE_PRICING_ROUTE))
            .json(matrix)
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            return response.json::<Matrix>().await.map_err(transport);
        }

        // Error message from the body, or the status line when there is none.
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(body) => Err(GatewayError::Rejected(body.error)),
            Err(_) => Err(GatewayError::Rejected(status.to_string())),
        }
    }

    async fn fetch_pricing(&self) -> Result<Matrix, GatewayError> {
        let response = self
            .http
            .get(self.url(protocol::GET_PRICING_ROUTE))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(GatewayError::Transport(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        response.json::<Matrix>().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
