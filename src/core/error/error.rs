use thiserror::Error;

/// Failures the entity model can report. Construction and mutation
/// reject bad parameters instead of clamping them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A kind tag outside the supported set reached a factory.
    #[error("unknown shape kind \"{0}\"")]
    UnknownShapeKind(String),

    /// A parameter value the model refuses to hold.
    #[error("invalid parameter \"{name}\": {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Serialized shape data that does not parse.
    #[error("malformed shape data: {0}")]
    MalformedData(String),
}

impl From<serde_json::Error> for GeomError {
    fn from(value: serde_json::Error) -> Self {
        return GeomError::MalformedData(value.to_string());
    }
}
