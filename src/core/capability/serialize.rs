use crate::core::error::GeomError;

/// Round-trips a shape's parameters and position through an opaque text
/// payload. Identity and attached capabilities are not part of the
/// payload; a shape deserialized into keeps both.
pub trait Serializable {
    fn serialize(&self) -> Result<String, GeomError>;

    /// Replaces parameters and position from a payload produced by
    /// `serialize`. Input that does not parse fails with MalformedData;
    /// parseable input with values the shape refuses fails through the
    /// ordinary setters.
    fn deserialize(&mut self, data: &str) -> Result<(), GeomError>;
}
