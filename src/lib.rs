//! voxloc - spatial geometry for voxel world hosts
//!
//! Re-exports the math and core crates and adds the configuration layer.

pub mod config;

pub use voxloc_core::*;
pub use voxloc_math::{
    rotate_around, rotate_around_x, rotate_around_y, rotate_around_z, rotate_by_facing,
    rotate_by_orientation, rotate_xyz, wrap_degrees, Axis,
};

pub use config::{ConfigError, ToolkitConfig};
