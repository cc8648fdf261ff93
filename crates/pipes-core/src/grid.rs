//! Integer grid geometry: bounds, unit directions and the occupancy map.
//!
//! Every pipe lives on the integer lattice. A cell is an [`IVec3`], which is
//! hashable and compares exactly, so it serves as the occupancy key as-is.

use std::collections::HashMap;

use glam::{I64Vec3, IVec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PipesError, Result};
use crate::pipe::PipeId;

/// An axis-aligned box of grid cells, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    min: IVec3,
    max: IVec3,
}

impl GridBounds {
    /// Creates bounds spanning `min..=max` on every axis.
    pub fn new(min: IVec3, max: IVec3) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Creates the cube `[-half_extent, half_extent]^3`.
    pub fn cube(half_extent: i32) -> Result<Self> {
        Self::new(IVec3::splat(-half_extent), IVec3::splat(half_extent))
    }

    /// Checks `min <= max` component-wise.
    ///
    /// Deserialized bounds skip [`GridBounds::new`], so option loading calls
    /// this explicitly.
    pub fn validate(&self) -> Result<()> {
        if self.min.cmpgt(self.max).any() {
            return Err(PipesError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> IVec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> IVec3 {
        self.max
    }

    /// Returns whether `cell` lies inside the box (edges included).
    pub fn contains(&self, cell: IVec3) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }

    /// Returns the number of cells in the box, saturating at `u64::MAX`.
    pub fn cell_count(&self) -> u64 {
        let extent = self.max.as_i64vec3() - self.min.as_i64vec3() + I64Vec3::ONE;
        extent
            .to_array()
            .into_iter()
            .map(i64::unsigned_abs)
            .fold(1, u64::saturating_mul)
    }

    /// Picks a uniformly random cell inside the box.
    pub fn random_cell(&self, rng: &mut impl Rng) -> IVec3 {
        IVec3::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min: IVec3::splat(-10),
            max: IVec3::splat(10),
        }
    }
}

/// A coordinate axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the unit vector along the positive side of this axis.
    pub fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }
}

/// A unit step along exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    axis: Axis,
    positive: bool,
}

impl Direction {
    pub const POS_X: Direction = Direction::new(Axis::X, true);
    pub const NEG_X: Direction = Direction::new(Axis::X, false);
    pub const POS_Y: Direction = Direction::new(Axis::Y, true);
    pub const NEG_Y: Direction = Direction::new(Axis::Y, false);
    pub const POS_Z: Direction = Direction::new(Axis::Z, true);
    pub const NEG_Z: Direction = Direction::new(Axis::Z, false);

    /// Creates a direction along `axis`, toward positive coordinates if
    /// `positive` is set.
    pub const fn new(axis: Axis, positive: bool) -> Self {
        Self { axis, positive }
    }

    /// Picks a uniformly random axis and a uniformly random sign.
    pub fn random(rng: &mut impl Rng) -> Self {
        let axis = Axis::ALL[rng.gen_range(0..Axis::ALL.len())];
        Self::new(axis, rng.gen_bool(0.5))
    }

    /// Recovers the direction of a unit-axis delta.
    ///
    /// Returns `None` unless exactly one component is `±1` and the rest are 0.
    pub fn from_delta(delta: IVec3) -> Option<Self> {
        if delta.abs().element_sum() != 1 {
            return None;
        }
        let axis = if delta.x != 0 {
            Axis::X
        } else if delta.y != 0 {
            Axis::Y
        } else {
            Axis::Z
        };
        Some(Self::new(axis, delta.element_sum() > 0))
    }

    /// Returns the axis this direction moves along.
    pub fn axis(self) -> Axis {
        self.axis
    }

    /// Returns whether this direction moves toward positive coordinates.
    pub fn is_positive(self) -> bool {
        self.positive
    }

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.axis, !self.positive)
    }

    /// Returns the neighbor of `cell` in this direction, or `None` past the
    /// edge of the `i32` lattice.
    pub fn offset(self, cell: IVec3) -> Option<IVec3> {
        let step = if self.positive { 1 } else { -1 };
        let mut next = cell;
        match self.axis {
            Axis::X => next.x = cell.x.checked_add(step)?,
            Axis::Y => next.y = cell.y.checked_add(step)?,
            Axis::Z => next.z = cell.z.checked_add(step)?,
        }
        Some(next)
    }

    /// Returns the unit grid delta for this direction.
    pub fn delta(self) -> IVec3 {
        if self.positive {
            self.axis.unit()
        } else {
            -self.axis.unit()
        }
    }
}

/// Returns whether two cells differ by one unit along exactly one axis.
pub fn is_adjacent(a: IVec3, b: IVec3) -> bool {
    (b.as_i64vec3() - a.as_i64vec3()).abs().element_sum() == 1
}

/// Sparse map from grid cell to the pipe that claimed it.
///
/// The map does no bounds checking and [`OccupancyMap::set`] overwrites any
/// previous owner; callers check [`OccupancyMap::get`] first.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    cells: HashMap<IVec3, PipeId>,
}

impl OccupancyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `cell` for `pipe`, replacing any previous owner.
    pub fn set(&mut self, cell: IVec3, pipe: PipeId) {
        self.cells.insert(cell, pipe);
    }

    /// Returns the owner of `cell`, if any.
    pub fn get(&self, cell: IVec3) -> Option<PipeId> {
        self.cells.get(&cell).copied()
    }

    /// Returns whether any pipe has claimed `cell`.
    pub fn is_occupied(&self, cell: IVec3) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Removes every claim.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is claimed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over `(cell, owner)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, PipeId)> + '_ {
        self.cells.iter().map(|(cell, pipe)| (*cell, *pipe))
    }

    /// Returns the number of cells claimed by `pipe`.
    pub fn count_owned_by(&self, pipe: PipeId) -> usize {
        self.cells.values().filter(|owner| **owner == pipe).count()
    }
}
