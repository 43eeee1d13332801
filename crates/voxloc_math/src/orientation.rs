//! Facing angles (yaw and pitch, in degrees)

use serde::{Serialize, Deserialize};

/// Yaw and pitch in degrees
///
/// Yaw has no required range; consumers that need a bounded angle
/// normalize it with [`wrap_degrees`]. Pitch is usually in [-90, 90]
/// but this is not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    /// No rotation: yaw 0, pitch 0
    pub const ZERO: Self = Self { yaw: 0.0, pitch: 0.0 };

    /// Create a new orientation
    #[inline]
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// True if both yaw and pitch are exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0
    }
}

/// Anything that faces somewhere: an orientation, a location, a host player
pub trait FacingSource {
    /// Current facing
    fn orientation(&self) -> Orientation;

    /// Current yaw in degrees
    fn yaw(&self) -> f32 {
        self.orientation().yaw
    }
}

impl FacingSource for Orientation {
    fn orientation(&self) -> Orientation {
        *self
    }
}

impl<T: FacingSource + ?Sized> FacingSource for &T {
    fn orientation(&self) -> Orientation {
        (**self).orientation()
    }
}

/// Wrap an angle in degrees into `[0, 360)`
///
/// Uses a euclidean remainder, so negative yaw lands on the positive side.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(100.0), 100.0);
        assert_eq!(wrap_degrees(460.0), 100.0);
        assert_eq!(wrap_degrees(-80.0), 280.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }

    #[test]
    fn test_wrap_degrees_tiny_negative() {
        let wrapped = wrap_degrees(-1e-20);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn test_is_zero() {
        assert!(Orientation::ZERO.is_zero());
        assert!(Orientation::default().is_zero());
        assert!(!Orientation::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_facing_source_by_reference() {
        let o = Orientation::new(45.0, -10.0);
        let r = &o;
        assert_eq!(r.yaw(), 45.0);
        assert_eq!(FacingSource::orientation(&r), o);
    }
}
