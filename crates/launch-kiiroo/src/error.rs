//! Error types for the Kiiroo codec

use thiserror::Error;

/// Kiiroo codec errors
///
/// Both variants are user-input rejections. They carry no payload; the
/// reason for a rejection is reported through `tracing` at debug level.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KiirooError {
    /// Text does not match the event or collection grammar
    #[error("invalid event format")]
    EventFormat,

    /// Text parsed cleanly but contains no events
    #[error("no events found")]
    NoEvents,
}

/// Result type for Kiiroo operations
pub type KiirooResult<T> = Result<T, KiirooError>;
