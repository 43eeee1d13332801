//! Capabilities supplied by the host world
//!
//! The core never reads or writes host state on its own. Anything that needs
//! the host (resolving a world by name, looking at a block, changing a block)
//! goes through one of these traits, implemented by the caller's adapter.

use voxloc_math::Vec3;

use crate::WorldRef;

/// Resolve world names to handles
///
/// Implemented for any `Fn(&str) -> Option<WorldRef>`.
pub trait WorldLookup {
    fn lookup_world(&self, name: &str) -> Option<WorldRef>;
}

impl<F> WorldLookup for F
where
    F: Fn(&str) -> Option<WorldRef>,
{
    fn lookup_world(&self, name: &str) -> Option<WorldRef> {
        self(name)
    }
}

/// Read access to host blocks
pub trait BlockLookup {
    /// Host handle for one block
    type Block;

    /// The block at a cell of a world
    fn block_at(&self, world: &WorldRef, at: Vec3) -> Self::Block;
}

/// Write access to host blocks
pub trait BlockMutator {
    /// Host material identifier
    type Material;

    /// Set the material of the block at a cell of a world
    fn set_material(&mut self, world: &WorldRef, at: Vec3, material: &Self::Material);

    /// The material that means "nothing here" (air)
    fn empty_material(&self) -> Self::Material;
}
