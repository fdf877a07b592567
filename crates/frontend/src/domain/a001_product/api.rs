use contracts::domain::a001_product::Product;
use gloo_net::http::Request;
use thiserror::Error;

/// Why the catalog could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("catalog endpoint answered with status {status}")]
    Status { status: u16 },
    #[error("failed to decode catalog: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown to the user; the details go to the log.
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch products"
    }
}

/// Fetch the whole catalog. The endpoint takes no paging parameters.
pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, FetchError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_products(&body)
}

/// Decode a catalog response body (a JSON array of products)
pub fn decode_products(body: &str) -> Result<Vec<Product>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
