use crate::session::LinkPhase;

/// Errors returned by link send operations.
///
/// On the asynchronous path protocol failures are reported as
/// [`crate::ResponseOutcome`] values, not errors; the blocking path maps
/// them to [`LinkError::Timeout`] and [`LinkError::InvalidResponse`] so
/// callers can use `?`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    /// The link has not been initialized with [`crate::Link::begin`].
    #[error("link not initialized")]
    NotInitialized,

    /// A transaction is already in flight or the settle interval has not
    /// elapsed. The send is rejected, not queued; retry once the link
    /// returns to ready.
    #[error("link not ready to send (phase: {0})")]
    NotReady(LinkPhase),

    /// No valid response arrived within the response timeout.
    #[error("response timeout")]
    Timeout,

    /// A response arrived but failed framing or validity checks.
    #[error("invalid response")]
    InvalidResponse,
}

pub type Result<T> = std::result::Result<T, LinkError>;
