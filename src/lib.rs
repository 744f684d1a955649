//! Hexgrid is a configurable, sparse hexagonal grid. A [Grid] maps coordinate
//! keys to arbitrary cell payloads and supports several interchangeable
//! coordinate systems (axial, cubic, and four offset variants) on top of two
//! hexagon orientations (pointy-topped and flat-topped). All the geometric
//! operations (neighbor lookup, distance, line rasterization, disks, rings,
//! spirals, shortest-path search) are computed in the cube coordinate system
//! and converted back to whatever system the grid was configured with.
//!
//! ```
//! use hexgrid::{CoordinateSystem, Grid, HexagonType};
//!
//! let mut grid: Grid<&str> = Grid::new(
//!     HexagonType::Pointy,
//!     CoordinateSystem::Offset,
//! )?;
//! grid.insert((0, 0), "center")?;
//! grid.insert((1, 0), "east")?;
//!
//! assert_eq!(grid.get((1, 0))?, &"east");
//! assert_eq!(grid.neighbors((0, 0))?, vec![&"east"]);
//! # Ok::<(), hexgrid::GridError>(())
//! ```
//!
//! Rendering is deliberately left to consumers: a drawing layer can iterate
//! [Grid::keys], look up payloads, and use [convert] to project the grid's
//! native coordinates into whatever space it draws in.

mod coord;
mod error;
mod grid;
mod path;

pub use crate::{
    coord::{convert, Coordinate, CoordinateSystem, HexagonType},
    error::GridError,
    grid::{CoordinateIndexMap, CoordinateMap, CoordinateSet, Grid},
};
