//! Session-wide world state shared by every pipe.

use glam::IVec3;

use crate::grid::{GridBounds, OccupancyMap};
use crate::material::TextureCache;
use crate::pipe::PipeId;

/// The grid the pipes grow through, plus caches that outlive single pipes.
///
/// Built when a session starts and [`reset`](World::reset) whenever the
/// scene is cleared.
#[derive(Debug, Clone, Default)]
pub struct World {
    bounds: GridBounds,
    occupancy: OccupancyMap,
    textures: TextureCache,
}

impl World {
    /// Creates an empty world with the given bounds.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            occupancy: OccupancyMap::new(),
            textures: TextureCache::new(),
        }
    }

    /// Returns the grid bounds.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Returns the occupancy map.
    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    /// Returns the occupancy map for writing.
    pub fn occupancy_mut(&mut self) -> &mut OccupancyMap {
        &mut self.occupancy
    }

    /// Returns the texture cache.
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Returns the texture cache for writing.
    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    /// Returns whether `cell` is inside the bounds and unclaimed.
    pub fn is_free(&self, cell: IVec3) -> bool {
        self.bounds.contains(cell) && !self.occupancy.is_occupied(cell)
    }

    /// Claims `cell` for `pipe` if it is inside the bounds and unclaimed.
    ///
    /// Returns whether the claim was made.
    pub fn try_claim(&mut self, cell: IVec3, pipe: PipeId) -> bool {
        if !self.is_free(cell) {
            return false;
        }
        self.occupancy.set(cell, pipe);
        true
    }

    /// Forgets every claimed cell. Cached textures are kept.
    pub fn reset(&mut self) {
        log::debug!("clearing {} claimed cells", self.occupancy.len());
        self.occupancy.clear();
    }
}
