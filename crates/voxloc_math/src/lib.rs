//! 3D Mathematics for voxel world geometry
//!
//! This crate provides the coordinate, facing, and rotation types used by `voxloc_core`.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector / world coordinate with x, y, z components
//! - [`Orientation`] - yaw and pitch in degrees
//! - [`FacingSource`] - anything that can report an orientation
//! - [`Direction`] - 4-way and 8-way compass classification
//!
//! ## Rotation
//!
//! The [`rotation`] module rotates vectors around the coordinate axes (radians)
//! and reorients them by yaw/pitch (degrees).

mod vec3;
mod orientation;
pub mod rotation;
pub mod direction;

pub use vec3::Vec3;
pub use orientation::{Orientation, FacingSource, wrap_degrees};
pub use rotation::{Axis, rotate_around, rotate_around_x, rotate_around_y, rotate_around_z, rotate_xyz};
pub use rotation::{rotate_by_orientation, rotate_by_facing};
pub use direction::Direction;
