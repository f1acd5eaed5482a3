use thiserror::Error;

use takeoff_lite_core::ElementId;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a recompute
///
/// Any of these leaves the model untouched as long as the caller wraps
/// the recompute in a transaction and rolls back on error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no rooms found in the model")]
    NoRoomsFound,

    #[error("no finishing elements found in the model")]
    NoFinishElementsFound,

    #[error("room {room} has no \"{attribute}\" attribute")]
    MissingRoomIdentifier { room: ElementId, attribute: String },

    #[error("model write failed: {0}")]
    Write(#[from] takeoff_lite_core::Error),
}
