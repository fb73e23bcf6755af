/// Failures at the configuration and IO boundary. Style resolution itself
/// never fails; it falls back to documented defaults.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
