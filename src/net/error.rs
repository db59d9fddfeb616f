//! Request failure type shared by every endpoint call.

/// Errors produced while talking to the posts endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be assembled.
    #[error("request body build failed: {0}")]
    Body(String),
}

#[cfg(feature = "browser")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
