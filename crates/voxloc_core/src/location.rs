//! Worlds and locations
//!
//! A [`Location`] is a point plus a facing, optionally tied to a world.

use std::fmt;
use std::sync::Arc;

use voxloc_math::{FacingSource, Orientation, Vec3};

use crate::LocationError;

/// Opaque handle to a host world, identified by name
///
/// Cloning is cheap; two handles are equal when their names are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorldRef(Arc<str>);

impl WorldRef {
    /// Create a handle for the named world
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The world's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A position and facing in a world
///
/// The world is optional because hosts can hand out detached locations
/// (for example a decoded key naming a world that is not loaded).
/// Operations that need a world go through [`Location::valid_world`].
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// World this location lives in
    pub world: Option<WorldRef>,
    /// Coordinates
    pub position: Vec3,
    /// Yaw and pitch in degrees
    pub orientation: Orientation,
}

impl Location {
    /// Create a location in a world with zero orientation
    pub fn new(world: WorldRef, x: f64, y: f64, z: f64) -> Self {
        Self::at(world, Vec3::new(x, y, z))
    }

    /// Create a location from a position with zero orientation
    pub fn at(world: WorldRef, position: Vec3) -> Self {
        Self {
            world: Some(world),
            position,
            orientation: Orientation::ZERO,
        }
    }

    /// Create a location that belongs to no world
    pub fn detached(position: Vec3) -> Self {
        Self {
            world: None,
            position,
            orientation: Orientation::ZERO,
        }
    }

    /// Set the facing
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.orientation = Orientation::new(yaw, pitch);
        self
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.orientation.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.orientation.pitch
    }

    /// The world of this location, or [`LocationError::MissingWorld`]
    pub fn valid_world(&self) -> Result<&WorldRef, LocationError> {
        self.world.as_ref().ok_or(LocationError::MissingWorld)
    }

    /// Center of the block this location names: +0.5 on every axis
    pub fn centered_in(&self) -> Self {
        self.offset(Vec3::new(0.5, 0.5, 0.5))
    }

    /// Standing spot on top of the block this location names: +0.5 on x and z, +0.1 on y
    pub fn centered_on(&self) -> Self {
        self.offset(Vec3::new(0.5, 0.1, 0.5))
    }

    fn offset(&self, delta: Vec3) -> Self {
        Self {
            world: self.world.clone(),
            position: self.position + delta,
            orientation: self.orientation,
        }
    }
}

impl FacingSource for Location {
    fn orientation(&self) -> Orientation {
        self.orientation
    }
}
