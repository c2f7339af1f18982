use thiserror::Error;

use crate::format::Format;

/// Error type for the format-generic codec entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown floating-point format: {0:?}")]
    UnknownFormat(String),
    #[error("bit pattern {bits:#x} does not fit in {format}")]
    BitsOutOfRange { format: Format, bits: u64 },
}
