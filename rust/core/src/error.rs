use thiserror::Error;

use crate::model::ElementId;

/// Result type for model-boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the model boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("element {0} not found in the model")]
    ElementNotFound(ElementId),

    #[error("attribute \"{name}\" is not bound on element {element}")]
    AttributeNotFound { element: ElementId, name: String },
}
