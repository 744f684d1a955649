//! Conversions between coordinate systems. Every conversion routes through
//! cube space: a per-system forward transform in, a per-system inverse
//! transform out. The transforms are exact inverses of each other, so any
//! round trip over the integer lattice is lossless.
//!
//! Formulas follow <https://www.redblobgames.com/grids/hexagons/#conversions>.
//! The offset variants hinge on row/column parity, which must be a floor
//! modulo: Rust's `%` is a truncating remainder and would flip the shift
//! direction for negative rows and columns, hence `rem_euclid` throughout.

use crate::{
    coord::{
        system::CoordinateSystem,
        unit::{Coordinate, CubePoint},
    },
    error::GridError,
};

/// Convert a coordinate from one concrete system to another.
///
/// The `offset` alias is rejected on either side: it only means something
/// relative to a hexagon orientation, which a standalone conversion doesn't
/// have. If `from` and `to` are equal the input is returned untouched.
///
/// This is a stateless utility; renderers typically use it to project a
/// grid's native keys into axial space before going to pixels.
///
/// ```
/// use hexgrid::{convert, Coordinate, CoordinateSystem};
///
/// let axial = convert((2, -6, 4), CoordinateSystem::Cubic, CoordinateSystem::Axial)?;
/// assert_eq!(axial, Coordinate::Pair(2, 4));
/// # Ok::<(), hexgrid::GridError>(())
/// ```
pub fn convert(
    coordinate: impl Into<Coordinate>,
    from: CoordinateSystem,
    to: CoordinateSystem,
) -> Result<Coordinate, GridError> {
    if from == CoordinateSystem::Offset || to == CoordinateSystem::Offset {
        return Err(GridError::UnresolvedOffset);
    }
    let coordinate = coordinate.into();
    if from == to {
        return Ok(coordinate);
    }
    Ok(from_cube(to_cube(coordinate, from)?, to))
}

/// Forward transform: a coordinate in the given system, into cube space.
/// Fails if the coordinate's arity doesn't match the system, or if a cubic
/// triple is off the `x + y + z = 0` plane.
pub(crate) fn to_cube(
    coordinate: Coordinate,
    system: CoordinateSystem,
) -> Result<CubePoint, GridError> {
    use CoordinateSystem::*;

    match (system, coordinate) {
        (Axial, Coordinate::Pair(q, r)) => Ok(CubePoint::new_xz(q, r)),
        (OffsetOddRows, Coordinate::Pair(col, row)) => {
            let parity = row.rem_euclid(2);
            Ok(CubePoint::new_xz(col - (row - parity) / 2, row))
        }
        (OffsetEvenRows, Coordinate::Pair(col, row)) => {
            let parity = row.rem_euclid(2);
            Ok(CubePoint::new_xz(col - (row + parity) / 2, row))
        }
        (OffsetOddColumns, Coordinate::Pair(col, row)) => {
            let parity = col.rem_euclid(2);
            Ok(CubePoint::new_xz(col, row - (col - parity) / 2))
        }
        (OffsetEvenColumns, Coordinate::Pair(col, row)) => {
            let parity = col.rem_euclid(2);
            Ok(CubePoint::new_xz(col, row - (col + parity) / 2))
        }
        (Cubic, Coordinate::Triple(x, y, z)) if x + y + z == 0 => {
            Ok(CubePoint::new_xz(x, z))
        }
        _ => Err(GridError::InvalidCoordinate { coordinate, system }),
    }
}

/// Inverse transform: a cube point, out into the given system. Total for
/// every concrete system; only the unresolved alias has no inverse.
pub(crate) fn from_cube(point: CubePoint, system: CoordinateSystem) -> Coordinate {
    use CoordinateSystem::*;

    let (x, z) = (point.x(), point.z());
    match system {
        Axial => Coordinate::Pair(x, z),
        OffsetOddRows => {
            let parity = z.rem_euclid(2);
            Coordinate::Pair(x + (z - parity) / 2, z)
        }
        OffsetEvenRows => {
            let parity = z.rem_euclid(2);
            Coordinate::Pair(x + (z + parity) / 2, z)
        }
        OffsetOddColumns => {
            let parity = x.rem_euclid(2);
            Coordinate::Pair(x, z + (x - parity) / 2)
        }
        OffsetEvenColumns => {
            let parity = x.rem_euclid(2);
            Coordinate::Pair(x, z + (x + parity) / 2)
        }
        Cubic => Coordinate::Triple(x, point.y(), z),
        Offset => unreachable!("offset alias is rejected before any transform"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CoordinateSystem::*;

    const PAIR_SYSTEMS: [CoordinateSystem; 5] = [
        Axial,
        OffsetOddRows,
        OffsetEvenRows,
        OffsetOddColumns,
        OffsetEvenColumns,
    ];

    #[test]
    fn test_cubic_axial() {
        let out = convert((2, -6, 4), Cubic, Axial).unwrap();
        assert_eq!(out, Coordinate::Pair(2, 4));
        assert_eq!(convert(out, Axial, Cubic).unwrap(), Coordinate::Triple(2, -6, 4));
    }

    #[test]
    fn test_round_trip_pairs() {
        let coordinates =
            [(0, 0), (1, 1), (2, 3), (-2, 2), (2, 15), (20, 2), (2, -2), (-13, 237)];
        for c in coordinates {
            for from in PAIR_SYSTEMS {
                for to in PAIR_SYSTEMS {
                    let out = convert(c, from, to).unwrap();
                    assert_eq!(
                        convert(out, to, from).unwrap(),
                        Coordinate::from(c),
                        "{:?} -> {} -> {}",
                        c,
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_triples() {
        let coordinates = [(0, 0, 0), (1, -2, 1), (1, 2, -3), (-4, 10, -6)];
        for c in coordinates {
            for to in [Cubic, Axial, OffsetOddRows, OffsetEvenRows, OffsetOddColumns,
                OffsetEvenColumns]
            {
                let out = convert(c, Cubic, to).unwrap();
                assert_eq!(convert(out, to, Cubic).unwrap(), Coordinate::from(c));
            }
        }
    }

    #[test]
    fn test_identity() {
        for system in PAIR_SYSTEMS {
            assert_eq!(
                convert((3, -4), system, system).unwrap(),
                Coordinate::Pair(3, -4)
            );
        }
        assert_eq!(
            convert((1, -2, 1), Cubic, Cubic).unwrap(),
            Coordinate::Triple(1, -2, 1)
        );
    }

    #[test]
    fn test_cubic_invariant() {
        for c in [(0, 0), (3, -4), (-1, 2), (7, 5)] {
            for from in PAIR_SYSTEMS {
                match convert(c, from, Cubic).unwrap() {
                    Coordinate::Triple(x, y, z) => assert_eq!(x + y + z, 0),
                    pair => panic!("expected a triple, got {}", pair),
                }
            }
        }
    }

    #[test]
    fn test_offset_fixtures() {
        let inputs = [(0, 0), (0, 1), (0, 2), (-1, 2), (3, -4)];

        let even_rows = [(0, 0), (1, 1), (0, 2), (-1, 2), (3, -4)];
        for (c, e) in inputs.iter().zip(even_rows) {
            assert_eq!(
                convert(*c, OffsetOddRows, OffsetEvenRows).unwrap(),
                Coordinate::from(e)
            );
        }

        let odd_columns = [(0, 0), (0, 1), (-1, 1), (-2, 1), (5, -2)];
        for (c, e) in inputs.iter().zip(odd_columns) {
            assert_eq!(
                convert(*c, OffsetOddRows, OffsetOddColumns).unwrap(),
                Coordinate::from(e)
            );
        }

        let even_columns = [(0, 0), (0, 1), (-1, 2), (-2, 1), (5, -1)];
        for (c, e) in inputs.iter().zip(even_columns) {
            assert_eq!(
                convert(*c, OffsetOddRows, OffsetEvenColumns).unwrap(),
                Coordinate::from(e)
            );
        }
    }

    #[test]
    fn test_rejects_offset_alias() {
        assert_eq!(
            convert((0, 0), Offset, Axial),
            Err(GridError::UnresolvedOffset)
        );
        assert_eq!(
            convert((0, 0), Axial, Offset),
            Err(GridError::UnresolvedOffset)
        );
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert_eq!(
            convert((0, 0, 0), Axial, Cubic),
            Err(GridError::InvalidCoordinate {
                coordinate: Coordinate::Triple(0, 0, 0),
                system: Axial,
            })
        );
        assert_eq!(
            convert((0, 0), Cubic, Axial),
            Err(GridError::InvalidCoordinate {
                coordinate: Coordinate::Pair(0, 0),
                system: Cubic,
            })
        );
    }

    #[test]
    fn test_rejects_unbalanced_triple() {
        assert_eq!(
            convert((1, 1, 1), Cubic, Axial),
            Err(GridError::InvalidCoordinate {
                coordinate: Coordinate::Triple(1, 1, 1),
                system: Cubic,
            })
        );
    }

    #[test]
    fn test_negative_rows_use_floor_parity() {
        // (0, -2) in odd-rows must land at x = 1, not x = 0: -2 is an even
        // row, so the formula needs parity 0 even though -2 % 2 could be -0
        // or the remainder of a negative division in other conventions
        assert_eq!(
            convert((0, -2), OffsetOddRows, Cubic).unwrap(),
            Coordinate::Triple(1, 1, -2)
        );
        // Odd negative row
        assert_eq!(
            convert((0, -3), OffsetOddRows, Cubic).unwrap(),
            Coordinate::Triple(2, 1, -3)
        );
    }
}
