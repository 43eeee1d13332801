//! Location error types
//!
//! Errors raised when a location or region cannot be used as asked.

use std::fmt;

use crate::WorldRef;

/// Error type for location and region operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// A location has no world attached
    MissingWorld,
    /// Two locations that must share a world do not
    WorldMismatch {
        first: WorldRef,
        second: WorldRef,
    },
    /// A coordinate or angle is NaN or infinite and cannot be written as a key
    NonFinite,
    /// A bounded operation was asked to touch more cells than allowed
    VolumeExceeded {
        volume: usize,
        limit: usize,
    },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::MissingWorld => write!(f, "World of the location cannot be empty"),
            LocationError::WorldMismatch { first, second } => {
                write!(f, "Worlds do not match: {} and {}", first, second)
            }
            LocationError::NonFinite => write!(f, "Location has a non-finite coordinate or angle"),
            LocationError::VolumeExceeded { volume, limit } => {
                write!(f, "Region volume {} exceeds limit {}", volume, limit)
            }
        }
    }
}

impl std::error::Error for LocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_world_display() {
        let msg = format!("{}", LocationError::MissingWorld);
        assert!(msg.contains("cannot be empty"));
    }

    #[test]
    fn test_world_mismatch_display() {
        let err = LocationError::WorldMismatch {
            first: WorldRef::new("world"),
            second: WorldRef::new("world_nether"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("world"));
        assert!(msg.contains("world_nether"));
    }

    #[test]
    fn test_volume_exceeded_display() {
        let err = LocationError::VolumeExceeded { volume: 27, limit: 8 };
        let msg = format!("{}", err);
        assert!(msg.contains("27"));
        assert!(msg.contains("8"));
    }

    #[test]
    fn test_non_finite_display() {
        let msg = format!("{}", LocationError::NonFinite);
        assert!(msg.contains("non-finite"));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        assert!(LocationError::MissingWorld.source().is_none());
    }
}
