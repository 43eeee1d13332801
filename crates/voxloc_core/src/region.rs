//! Axis-aligned cuboid regions
//!
//! A [`Region`] is the box spanned by two corner locations in one world.
//! Its cells are visited by a plain triple loop: x outermost, then y,
//! then z innermost, stepping by 1.0 from the minimum corner while the
//! value stays within the maximum. Every axis yields at least one value.

use voxloc_math::Vec3;

use crate::host::{BlockLookup, BlockMutator};
use crate::sampling::SamplingEngine;
use crate::{Location, LocationError, WorldRef};

/// Cuboid between two corners of the same world
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    world: WorldRef,
    minimum_location: Location,
    maximum_location: Location,
    /// Per-axis minimum of the two corners
    min: Vec3,
    /// Per-axis maximum of the two corners
    max: Vec3,
}

impl Region {
    /// Build a region from two corners, in any order
    ///
    /// Fails with [`LocationError::MissingWorld`] if either corner has no
    /// world, or [`LocationError::WorldMismatch`] if they differ.
    pub fn new(minimum_location: Location, maximum_location: Location) -> Result<Self, LocationError> {
        let first = minimum_location.valid_world()?;
        let second = maximum_location.valid_world()?;
        if first != second {
            return Err(LocationError::WorldMismatch {
                first: first.clone(),
                second: second.clone(),
            });
        }
        let world = first.clone();

        // Each axis is reduced with its own components
        let min = minimum_location.position.min_components(maximum_location.position);
        let max = minimum_location.position.max_components(maximum_location.position);

        log::debug!("Region in '{}' from {:?} to {:?}", world, min, max);

        Ok(Self {
            world,
            minimum_location,
            maximum_location,
            min,
            max,
        })
    }

    /// The world this region lives in
    #[inline]
    pub fn world(&self) -> &WorldRef {
        &self.world
    }

    /// Smallest x, y and z of the region
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Largest x, y and z of the region
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// First corner as given to [`Region::new`]
    pub fn minimum_location(&self) -> &Location {
        &self.minimum_location
    }

    /// Second corner as given to [`Region::new`]
    pub fn maximum_location(&self) -> &Location {
        &self.maximum_location
    }

    /// True if the location is in this region's world and inside the box (bounds inclusive)
    pub fn contains(&self, location: &Location) -> bool {
        location.world.as_ref() == Some(&self.world) && self.contains_point(location.position)
    }

    /// True if the point is inside the box, ignoring worlds
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.min.x <= p.x && p.x <= self.max.x
            && self.min.y <= p.y && p.y <= self.max.y
            && self.min.z <= p.z && p.z <= self.max.z
    }

    /// Number of enumerated values along x, y and z
    pub fn dimensions(&self) -> [usize; 3] {
        [
            axis_steps(self.min.x, self.max.x),
            axis_steps(self.min.y, self.max.y),
            axis_steps(self.min.z, self.max.z),
        ]
    }

    /// Number of enumerated cells (saturates on overflow)
    pub fn volume(&self) -> usize {
        let [nx, ny, nz] = self.dimensions();
        nx.saturating_mul(ny).saturating_mul(nz)
    }

    /// Midpoint of the box
    pub fn center(&self) -> Vec3 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Midpoint of x and z, at the bottom of the box
    pub fn center_bottom(&self) -> Vec3 {
        Vec3::new(
            self.min.x + (self.max.x - self.min.x) / 2.0,
            self.min.y,
            self.min.z + (self.max.z - self.min.z) / 2.0,
        )
    }

    /// Iterate every cell coordinate in canonical order
    ///
    /// Each call starts a fresh pass.
    pub fn coordinates(&self) -> RegionIter {
        RegionIter::new(self.min, self.dimensions())
    }

    /// Iterate every cell as a location in this world with zero orientation
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.coordinates().map(move |p| Location::at(self.world.clone(), p))
    }

    /// Host block for every cell, in canonical order
    pub fn blocks<L: BlockLookup>(&self, lookup: &L) -> Vec<L::Block> {
        self.coordinates()
            .map(|p| lookup.block_at(&self.world, p))
            .collect()
    }

    /// Random cell coordinates drawn with the shared engine
    pub fn random_coordinates(&self, count: usize, allow_repeats: bool) -> Vec<Vec3> {
        self.random_coordinates_with(SamplingEngine::shared(), count, allow_repeats)
    }

    /// Random cell coordinates drawn with the given engine
    pub fn random_coordinates_with(
        &self,
        engine: &SamplingEngine,
        count: usize,
        allow_repeats: bool,
    ) -> Vec<Vec3> {
        let cells: Vec<Vec3> = self.coordinates().collect();
        engine.choose_random(&cells, count, allow_repeats)
    }

    /// Random cell locations drawn with the shared engine
    pub fn random_locations(&self, count: usize, allow_repeats: bool) -> Vec<Location> {
        self.random_locations_with(SamplingEngine::shared(), count, allow_repeats)
    }

    /// Random cell locations drawn with the given engine
    pub fn random_locations_with(
        &self,
        engine: &SamplingEngine,
        count: usize,
        allow_repeats: bool,
    ) -> Vec<Location> {
        self.random_coordinates_with(engine, count, allow_repeats)
            .into_iter()
            .map(|p| Location::at(self.world.clone(), p))
            .collect()
    }

    /// Random host blocks drawn with the shared engine
    pub fn random_blocks<L>(&self, lookup: &L, count: usize, allow_repeats: bool) -> Vec<L::Block>
    where
        L: BlockLookup,
        L::Block: Clone + PartialEq,
    {
        self.random_blocks_with(SamplingEngine::shared(), lookup, count, allow_repeats)
    }

    /// Random host blocks drawn with the given engine
    pub fn random_blocks_with<L>(
        &self,
        engine: &SamplingEngine,
        lookup: &L,
        count: usize,
        allow_repeats: bool,
    ) -> Vec<L::Block>
    where
        L: BlockLookup,
        L::Block: Clone + PartialEq,
    {
        engine.choose_random(&self.blocks(lookup), count, allow_repeats)
    }

    /// Call `f` for every cell in canonical order, returning the number of calls
    ///
    /// This is the only path by which a region touches the host. Cost grows
    /// with volume; see [`Region::apply_within`] for a bounded variant.
    pub fn apply_to_all<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&WorldRef, Vec3),
    {
        let mut applied = 0;
        for p in self.coordinates() {
            f(&self.world, p);
            applied += 1;
        }
        applied
    }

    /// Like [`Region::apply_to_all`], but refuses regions larger than `limit` cells
    ///
    /// Nothing is called when the limit is exceeded.
    pub fn apply_within<F>(&self, limit: usize, f: F) -> Result<usize, LocationError>
    where
        F: FnMut(&WorldRef, Vec3),
    {
        let volume = self.volume();
        if volume > limit {
            log::warn!("Refusing to apply to {} cells (limit {})", volume, limit);
            return Err(LocationError::VolumeExceeded { volume, limit });
        }
        Ok(self.apply_to_all(f))
    }

    /// Set every cell to `material`
    pub fn fill<M: BlockMutator>(&self, mutator: &mut M, material: &M::Material) -> usize {
        self.apply_to_all(|world, p| mutator.set_material(world, p, material))
    }

    /// Set every cell to the host's empty material
    pub fn clear<M: BlockMutator>(&self, mutator: &mut M) -> usize {
        let empty = mutator.empty_material();
        self.fill(mutator, &empty)
    }
}

/// Values visited on one axis: `min, min + 1, ...` while `<= max`
fn axis_steps(min: f64, max: f64) -> usize {
    ((max - min).floor() as usize).saturating_add(1)
}

/// Iterator over the cells of a [`Region`]
///
/// x outermost, z innermost.
#[derive(Clone, Debug)]
pub struct RegionIter {
    origin: Vec3,
    dims: [usize; 3],
    index: usize,
    total: usize,
}

impl RegionIter {
    fn new(origin: Vec3, dims: [usize; 3]) -> Self {
        let total = dims[0].saturating_mul(dims[1]).saturating_mul(dims[2]);
        Self {
            origin,
            dims,
            index: 0,
            total,
        }
    }
}

impl Iterator for RegionIter {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.index >= self.total {
            return None;
        }
        let [_, ny, nz] = self.dims;
        let i = self.index;
        self.index += 1;

        let z = i % nz;
        let y = (i / nz) % ny;
        let x = i / nz.saturating_mul(ny);
        Some(Vec3::new(
            self.origin.x + x as f64,
            self.origin.y + y as f64,
            self.origin.z + z as f64,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegionIter {}
