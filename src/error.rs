use thiserror::Error;

/// Failures surfaced by the core operations. All of these are terminal
/// for the operation that raised them; the caller offers a manual
/// "try again" rather than retrying automatically.
#[derive(Error, Debug)]
pub enum HrError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected payload shape: {0}")]
    Decode(String),

    #[error("Employee #{0} not found")]
    NotFound(u64),
}

impl From<reqwest::Error> for HrError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HrError::Decode(err.to_string())
        } else {
            HrError::Network(err.to_string())
        }
    }
}
