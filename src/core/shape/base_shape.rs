use crate::core::base::*;
use crate::core::capability::CapabilitySet;
use crate::core::error::GeomError;

use super::entity_id::EntityId;

/// State shared by every concrete shape: identity, planar position and
/// the capability records attached to the instance.
#[derive(Debug, PartialEq, Clone)]
pub struct BaseShape {
    pub id: EntityId,
    pub position: Point2f,
    pub capabilities: CapabilitySet,
}

impl BaseShape {
    pub fn new(position: Point2f) -> Self {
        BaseShape {
            id: EntityId::new(),
            position,
            capabilities: CapabilitySet::new(),
        }
    }
}

/// Gate for linear dimensions. Negative and non-finite values are
/// rejected, zero is legal.
pub fn validate_dimension(name: &str, value: Float) -> Result<Float, GeomError> {
    if !value.is_finite() {
        return Err(GeomError::InvalidParameter {
            name: String::from(name),
            reason: format!("value {} is not finite", value),
        });
    }
    if value < 0.0 {
        return Err(GeomError::InvalidParameter {
            name: String::from(name),
            reason: format!("value {} is negative", value),
        });
    }
    return Ok(value);
}

//-------------------------------------------------------------
