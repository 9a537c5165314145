use thiserror::Error;

use crate::model::ArtifactKind;

/// Failures surfaced to the HTTP caller. Client-caused variants map to 400,
/// dependency-caused ones to 500.
#[derive(Debug, Error)]
pub enum Error {
    /// One of the submitted JSON schemas failed the shape check.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// The request body deserialized but carries an unusable value.
    #[error("{0}")]
    InvalidRequest(String),

    /// The completion provider failed while producing one artifact. The
    /// whole request fails; artifacts generated before this one are dropped.
    #[error("failed to generate {kind}: {message}")]
    Generation {
        kind: ArtifactKind,
        message: String,
    },
}
