use crate::coord::{Coordinate, CoordinateSystem, HexagonType};
use thiserror::Error;

/// Any error that a [Grid](crate::Grid) operation can surface. Every fallible
/// operation validates its arguments up front and returns before touching any
/// state, so a returned error never leaves a grid partially modified.
///
/// An unreachable destination in path search is *not* an error; it is an
/// empty path.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The `offset` alias was used somewhere that requires a concrete
    /// coordinate system. Call [CoordinateSystem::resolve] first.
    #[error(
        "`offset` is an alias, not a concrete coordinate system; resolve it \
         against a hexagon type first"
    )]
    UnresolvedOffset,

    /// The requested orientation/system pair is contradictory: offsetting by
    /// row only makes sense for pointy-topped hexagons, and offsetting by
    /// column only for flat-topped ones.
    #[error("cannot use {system} coordinates with {hexagon_type} hexagons")]
    IncompatibleSystem {
        hexagon_type: HexagonType,
        system: CoordinateSystem,
    },

    /// The coordinate does not fit the coordinate system: wrong arity (cubic
    /// keys are triples, everything else is a pair), or a cubic triple whose
    /// components don't sum to zero.
    #[error("{coordinate} is not a valid {system} coordinate")]
    InvalidCoordinate {
        coordinate: Coordinate,
        system: CoordinateSystem,
    },

    /// Lookup or removal of a coordinate with no stored cell.
    #[error("no cell at {0}")]
    NotFound(Coordinate),
}
