#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
