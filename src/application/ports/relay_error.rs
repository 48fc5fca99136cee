#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("reading staged audio failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
