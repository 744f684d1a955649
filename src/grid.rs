//! The sparse grid store and the geometric queries built on top of it.

use crate::{
    coord::{self, convert, Coordinate, CoordinateSystem, CubePoint, Direction, HexagonType},
    error::GridError,
    path,
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::debug;
use std::{
    cmp,
    collections::{HashMap, HashSet},
    fmt,
};
use strum::IntoEnumIterator;

/// A set of coordinates
pub type CoordinateSet = HashSet<Coordinate, FnvBuildHasher>;
/// A map of coordinates to some `T`
pub type CoordinateMap<T> = HashMap<Coordinate, T, FnvBuildHasher>;
/// An ORDERED map of coordinates to some `T`. This has some extra memory
/// overhead, so it's only worth it when the ordering actually matters.
pub type CoordinateIndexMap<T> = IndexMap<Coordinate, T, FnvBuildHasher>;

/// A sparse hexagonal grid: a mapping from coordinates to arbitrary cell
/// payloads, configured with a hexagon orientation and a coordinate system at
/// construction. Keys are validated against the active coordinate system on
/// every access; all geometric queries accept and produce coordinates in that
/// same system.
///
/// The grid is deliberately sparse: cells exist only where something was
/// inserted, and queries with `validate = true` filter their output down to
/// populated cells.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    hexagon_type: HexagonType,
    coordinate_system: CoordinateSystem,
    cells: CoordinateIndexMap<T>,
}

impl<T> Grid<T> {
    /// Construct an empty grid. The `offset` alias resolves to odd-rows
    /// (pointy-topped) or odd-columns (flat-topped); contradictory pairs like
    /// flat-topped + row-offset are rejected.
    pub fn new(
        hexagon_type: HexagonType,
        coordinate_system: CoordinateSystem,
    ) -> Result<Self, GridError> {
        let coordinate_system = coordinate_system.resolve(hexagon_type);
        if !coordinate_system.compatible_with(hexagon_type) {
            return Err(GridError::IncompatibleSystem {
                hexagon_type,
                system: coordinate_system,
            });
        }
        Ok(Self {
            hexagon_type,
            coordinate_system,
            cells: CoordinateIndexMap::default(),
        })
    }

    pub fn hexagon_type(&self) -> HexagonType {
        self.hexagon_type
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is there a cell stored at this coordinate?
    pub fn contains(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.cells.contains_key(&coordinate.into())
    }

    /// All populated coordinates, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Coordinate> {
        self.cells.keys()
    }

    /// All stored payloads, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    /// All `(coordinate, payload)` entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &T)> {
        self.cells.iter()
    }

    /// Store a payload at the given coordinate, returning the previous
    /// payload if the cell was already populated.
    pub fn insert(
        &mut self,
        coordinate: impl Into<Coordinate>,
        value: T,
    ) -> Result<Option<T>, GridError> {
        let coordinate = self.validate_key(coordinate.into())?;
        Ok(self.cells.insert(coordinate, value))
    }

    /// Look up the payload at a coordinate. Fails with
    /// [GridError::NotFound] for an unpopulated cell.
    pub fn get(&self, coordinate: impl Into<Coordinate>) -> Result<&T, GridError> {
        let coordinate = self.validate_key(coordinate.into())?;
        self.cells
            .get(&coordinate)
            .ok_or(GridError::NotFound(coordinate))
    }

    /// Mutable variant of [Self::get].
    pub fn get_mut(
        &mut self,
        coordinate: impl Into<Coordinate>,
    ) -> Result<&mut T, GridError> {
        let coordinate = self.validate_key(coordinate.into())?;
        self.cells
            .get_mut(&coordinate)
            .ok_or(GridError::NotFound(coordinate))
    }

    /// Remove and return the payload at a coordinate. Fails with
    /// [GridError::NotFound] for an unpopulated cell. Insertion order of the
    /// remaining cells is preserved.
    pub fn remove(&mut self, coordinate: impl Into<Coordinate>) -> Result<T, GridError> {
        let coordinate = self.validate_key(coordinate.into())?;
        self.cells
            .shift_remove(&coordinate)
            .ok_or(GridError::NotFound(coordinate))
    }

    /// Re-key the entire grid into a new coordinate system. Every existing
    /// key is converted from the old system to the new one; the conversions
    /// are bijective, so no two cells can collide. The `offset` alias is
    /// resolved against the *current* orientation, and the orientation itself
    /// follows the new system's convention: row-offset systems force
    /// pointy-topped, column-offset systems force flat-topped, axial and
    /// cubic leave it alone.
    ///
    /// All keys are converted before anything is mutated, so a failure leaves
    /// the grid untouched.
    pub fn set_coordinate_system(
        &mut self,
        coordinate_system: CoordinateSystem,
    ) -> Result<(), GridError> {
        let old_system = self.coordinate_system;
        let new_system = coordinate_system.resolve(self.hexagon_type);
        let new_type = if new_system.is_row_offset() {
            HexagonType::Pointy
        } else if new_system.is_column_offset() {
            HexagonType::Flat
        } else {
            self.hexagon_type
        };

        let mut keys = Vec::with_capacity(self.cells.len());
        for coordinate in self.cells.keys() {
            keys.push(convert(*coordinate, old_system, new_system)?);
        }

        let mut cells = CoordinateIndexMap::with_capacity_and_hasher(
            self.cells.len(),
            FnvBuildHasher::default(),
        );
        for (key, (_, value)) in keys.into_iter().zip(self.cells.drain(..)) {
            cells.insert(key, value);
        }
        self.cells = cells;
        self.coordinate_system = new_system;
        self.hexagon_type = new_type;
        debug!(
            "re-keyed {} cells from {} to {}",
            self.cells.len(),
            old_system,
            new_system
        );
        Ok(())
    }

    /// The six coordinates adjacent to the given one, in the fixed canonical
    /// direction order, excluding the input itself. With `validate` the list
    /// is filtered down to populated cells; without it, all six come back
    /// whether populated or not.
    pub fn neighbor_coordinates(
        &self,
        coordinate: impl Into<Coordinate>,
        validate: bool,
    ) -> Result<Vec<Coordinate>, GridError> {
        let center = self.to_cube(coordinate)?;
        let mut coordinates = Vec::with_capacity(6);
        for adjacent in center.adjacents() {
            self.emit(&mut coordinates, adjacent, validate);
        }
        Ok(coordinates)
    }

    /// Payloads of the populated cells adjacent to the given coordinate, in
    /// neighbor order.
    pub fn neighbors(&self, coordinate: impl Into<Coordinate>) -> Result<Vec<&T>, GridError> {
        let coordinates = self.neighbor_coordinates(coordinate, true)?;
        Ok(self.lookup(&coordinates))
    }

    /// Number of side-to-side steps between two coordinates.
    pub fn distance(
        &self,
        a: impl Into<Coordinate>,
        b: impl Into<Coordinate>,
    ) -> Result<u64, GridError> {
        Ok(self.to_cube(a)?.distance_to(self.to_cube(b)?))
    }

    /// The cells a straight line from `a` to `b` passes through, endpoints
    /// included. The segment is sampled at even intervals in cube space and
    /// each sample is rounded to its nearest cell.
    pub fn line_coordinates(
        &self,
        a: impl Into<Coordinate>,
        b: impl Into<Coordinate>,
        validate: bool,
    ) -> Result<Vec<Coordinate>, GridError> {
        let start = self.to_cube(a)?;
        let end = self.to_cube(b)?;
        let steps = start.distance_to(end);

        let mut coordinates = Vec::with_capacity(steps as usize + 1);
        if steps == 0 {
            // A line from a cell to itself; sampling would divide by zero
            self.emit(&mut coordinates, start, validate);
            return Ok(coordinates);
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let point = coord::cube_round(
                lerp(start.x(), end.x(), t),
                lerp(start.y(), end.y(), t),
                lerp(start.z(), end.z(), t),
            );
            self.emit(&mut coordinates, point, validate);
        }
        Ok(coordinates)
    }

    /// Payloads along the line from `a` to `b`, populated cells only.
    pub fn line(
        &self,
        a: impl Into<Coordinate>,
        b: impl Into<Coordinate>,
    ) -> Result<Vec<&T>, GridError> {
        let coordinates = self.line_coordinates(a, b, true)?;
        Ok(self.lookup(&coordinates))
    }

    /// All coordinates within `radius` steps of `center`, center included.
    /// Unvalidated, this is always `3r² + 3r + 1` cells.
    pub fn within_coordinates(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
        validate: bool,
    ) -> Result<Vec<Coordinate>, GridError> {
        let center = self.to_cube(center)?;
        let r = i64::from(radius);
        let mut coordinates = Vec::with_capacity(disk_len(radius));
        for dx in -r..=r {
            // Clamping dy keeps the enumeration hexagonal; a plain [-r, r]
            // square would produce a diamond of cells instead
            let dy_min = cmp::max(-r, -dx - r);
            let dy_max = cmp::min(r, -dx + r);
            for dy in dy_min..=dy_max {
                let dz = -dx - dy;
                self.emit(&mut coordinates, center + coord::CubeVector::new(dx, dy, dz), validate);
            }
        }
        Ok(coordinates)
    }

    /// Payloads of all populated cells within `radius` steps of `center`.
    pub fn within(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
    ) -> Result<Vec<&T>, GridError> {
        let coordinates = self.within_coordinates(center, radius, true)?;
        Ok(self.lookup(&coordinates))
    }

    /// All coordinates exactly `radius` steps from `center`: `6r` cells for
    /// a positive radius, just the center itself for radius zero. The walk
    /// starts `radius` steps to the south-west and proceeds through the six
    /// directions in canonical order.
    pub fn ring_coordinates(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
        validate: bool,
    ) -> Result<Vec<Coordinate>, GridError> {
        let center = self.to_cube(center)?;
        let mut coordinates = Vec::with_capacity(cmp::max(1, 6 * radius as usize));
        if radius == 0 {
            // The ring walk is singular at radius 0
            self.emit(&mut coordinates, center, validate);
            return Ok(coordinates);
        }

        let mut current = center + Direction::SouthWest.vec() * i64::from(radius);
        for direction in Direction::iter() {
            for _ in 0..radius {
                self.emit(&mut coordinates, current, validate);
                current = current + direction.vec();
            }
        }
        Ok(coordinates)
    }

    /// Payloads of the populated cells exactly `radius` steps from `center`.
    pub fn ring(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
    ) -> Result<Vec<&T>, GridError> {
        let coordinates = self.ring_coordinates(center, radius, true)?;
        Ok(self.lookup(&coordinates))
    }

    /// All coordinates within `radius` steps of `center`, ordered spiralling
    /// outward: the center first, then each ring from 1 to `radius` in its
    /// walk order. Same cell set as [Self::within_coordinates], different
    /// ordering.
    pub fn spiral_coordinates(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
        validate: bool,
    ) -> Result<Vec<Coordinate>, GridError> {
        let center = center.into();
        let mut coordinates = Vec::with_capacity(disk_len(radius));
        for r in 0..=radius {
            coordinates.extend(self.ring_coordinates(center, r, validate)?);
        }
        Ok(coordinates)
    }

    /// Payloads of populated cells spiralling outward from `center`.
    pub fn spiral(
        &self,
        center: impl Into<Coordinate>,
        radius: u32,
    ) -> Result<Vec<&T>, GridError> {
        let coordinates = self.spiral_coordinates(center, radius, true)?;
        Ok(self.lookup(&coordinates))
    }

    /// A shortest path of populated cells from `src` to `dest`, both
    /// endpoints included, stepping only between populated adjacent cells.
    /// Returns an empty vector when no such path exists, including when
    /// either endpoint is itself unpopulated. Unreachability is an answer,
    /// not an error.
    pub fn shortest_path_coordinates(
        &self,
        src: impl Into<Coordinate>,
        dest: impl Into<Coordinate>,
    ) -> Result<Vec<Coordinate>, GridError> {
        let src = self.validate_key(src.into())?;
        let dest = self.validate_key(dest.into())?;
        path::shortest_path(self, src, dest)
    }

    /// Payloads along the shortest path from `src` to `dest`, in path order.
    pub fn shortest_path(
        &self,
        src: impl Into<Coordinate>,
        dest: impl Into<Coordinate>,
    ) -> Result<Vec<&T>, GridError> {
        let coordinates = self.shortest_path_coordinates(src, dest)?;
        Ok(self.lookup(&coordinates))
    }

    /// Check a coordinate's shape against the active coordinate system:
    /// triples iff cubic (and on the zero-sum plane), pairs otherwise.
    fn validate_key(&self, coordinate: Coordinate) -> Result<Coordinate, GridError> {
        let system = self.coordinate_system;
        let valid = match coordinate {
            Coordinate::Pair(..) => system != CoordinateSystem::Cubic,
            Coordinate::Triple(x, y, z) => {
                system == CoordinateSystem::Cubic && x + y + z == 0
            }
        };
        if valid {
            Ok(coordinate)
        } else {
            Err(GridError::InvalidCoordinate { coordinate, system })
        }
    }

    fn to_cube(&self, coordinate: impl Into<Coordinate>) -> Result<CubePoint, GridError> {
        coord::to_cube(coordinate.into(), self.coordinate_system)
    }

    /// Convert a cube point back to the grid's system and push it, unless
    /// `validate` is set and the cell is unpopulated.
    fn emit(&self, out: &mut Vec<Coordinate>, point: CubePoint, validate: bool) {
        let coordinate = coord::from_cube(point, self.coordinate_system);
        if !validate || self.cells.contains_key(&coordinate) {
            out.push(coordinate);
        }
    }

    /// Resolve a list of coordinates to their stored payloads, skipping any
    /// unpopulated ones.
    fn lookup(&self, coordinates: &[Coordinate]) -> Vec<&T> {
        coordinates
            .iter()
            .filter_map(|coordinate| self.cells.get(coordinate))
            .collect()
    }
}

/// Pointy-topped hexagons addressed by odd-row offsets, the most common
/// configuration.
impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            hexagon_type: HexagonType::Pointy,
            coordinate_system: CoordinateSystem::OffsetOddRows,
            cells: CoordinateIndexMap::default(),
        }
    }
}

impl<T> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Grid {}, {}>", self.hexagon_type, self.coordinate_system)
    }
}

fn lerp(a: i64, b: i64, t: f64) -> f64 {
    a as f64 + (b - a) as f64 * t
}

/// Cell count of a disk: `3r² + 3r + 1` (1, then +6r per extra ring:
/// 1, 7, 19, 37, ...).
fn disk_len(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
