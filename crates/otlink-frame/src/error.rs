/// Errors that can occur when constructing frames from external input.
///
/// Decoding a received frame itself is total — every field is masked to its
/// declared bit width — so these only arise at the API edges (parsing CLI
/// input, resolving a raw data-item byte to a known identifier).
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The data-item identifier is not a known protocol data point.
    #[error("unknown data id {0}")]
    UnknownDataId(u8),

    /// The message-type name is not recognized.
    #[error("unknown message type '{0}'")]
    UnknownMessageType(String),

    /// The textual frame value is not a 32-bit hexadecimal number.
    #[error("invalid frame value '{0}' (expected up to 8 hex digits)")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
