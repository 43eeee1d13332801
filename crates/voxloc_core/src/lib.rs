//! Core types for voxel world geometry
//!
//! This crate provides the world-aware building blocks:
//!
//! - [`WorldRef`] - Opaque handle to a host world
//! - [`Location`] - Position and facing in a world
//! - [`Region`] - Axis-aligned cuboid between two locations of one world
//! - [`SamplingEngine`] - Random choice of k elements, with or without repeats
//! - [`codec`] - Location to string key and back
//! - [`host`] - Capabilities the host supplies (world lookup, block access)
//!
//! Nothing here reads or writes host state directly.

mod error;
mod location;
mod region;
pub mod sampling;
pub mod codec;
pub mod host;

pub use error::LocationError;
pub use location::{Location, WorldRef};
pub use region::{Region, RegionIter};
pub use sampling::{SamplingEngine, SamplingOptions, choose_random_with};
pub use host::{WorldLookup, BlockLookup, BlockMutator};

// Re-export commonly used types from voxloc_math for convenience
pub use voxloc_math::{Vec3, Orientation, FacingSource, Direction};
