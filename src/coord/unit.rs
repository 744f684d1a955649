//! The basic value types of the coordinate algebra: storage keys, cube-space
//! points and vectors, and the fixed direction table.

use derive_more::{Add, AddAssign, Display, Mul, MulAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, ops};
use strum::{EnumIter, IntoEnumIterator};

/// A cell key: an ordered pair for every coordinate system except cubic,
/// which uses ordered triples. Components are plain integers, so keys are
/// cheap to copy, compare and hash.
///
/// Tuples convert implicitly at call sites:
///
/// ```
/// use hexgrid::Coordinate;
///
/// assert_eq!(Coordinate::from((1, 2)), Coordinate::Pair(1, 2));
/// assert_eq!(Coordinate::from((1, 2, -3)), Coordinate::Triple(1, 2, -3));
/// ```
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    /// `(col, row)` for offset systems, `(q, r)` for axial.
    #[display(fmt = "({}, {})", _0, _1)]
    Pair(i64, i64),
    /// `(x, y, z)` for cubic, with `x + y + z = 0`.
    #[display(fmt = "({}, {}, {})", _0, _1, _2)]
    Triple(i64, i64, i64),
}

impl From<(i64, i64)> for Coordinate {
    fn from((a, b): (i64, i64)) -> Self {
        Self::Pair(a, b)
    }
}

impl From<(i64, i64, i64)> for Coordinate {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::Triple(x, y, z)
    }
}

/// A point in cube space, the hub every conversion routes through. Since
/// `x + y + z = 0` for all valid points, only `x` and `z` are stored and `y`
/// is derived, which keeps the invariant unbreakable by construction.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub(crate) struct CubePoint {
    x: i64,
    z: i64,
}

impl CubePoint {
    /// Construct from the x and z components; y is implied.
    pub const fn new_xz(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    pub fn x(self) -> i64 {
        self.x
    }

    pub fn y(self) -> i64 {
        -self.x - self.z
    }

    pub fn z(self) -> i64 {
        self.z
    }

    /// The six points sharing a side with this one, in the canonical
    /// direction order.
    pub fn adjacents(self) -> impl Iterator<Item = CubePoint> {
        Direction::iter().map(move |direction| self + direction.vec())
    }

    /// Number of side-to-side steps between two points:
    /// `max(|Δx|, |Δy|, |Δz|)`. Zero for equal points, one for adjacent
    /// ones.
    pub fn distance_to(self, other: CubePoint) -> u64 {
        let dx = (self.x() - other.x()).unsigned_abs();
        let dy = (self.y() - other.y()).unsigned_abs();
        let dz = (self.z() - other.z()).unsigned_abs();
        cmp::max(dx, cmp::max(dy, dz))
    }
}

impl ops::Add<CubeVector> for CubePoint {
    type Output = CubePoint;

    fn add(self, rhs: CubeVector) -> Self::Output {
        CubePoint::new_xz(self.x + rhs.x, self.z + rhs.z)
    }
}

/// A translation in cube space. Unlike [CubePoint] this stores all three
/// components explicitly, because a direction table reads better spelled out
/// in full. Scalar multiplication comes from derive_more.
#[derive(Copy, Clone, Debug, Display, Add, AddAssign, Mul, MulAssign)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub(crate) struct CubeVector {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl CubeVector {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// The six unit steps between adjacent cells, named for their heading on a
/// pointy-topped axial grid. Declaration order is the canonical emission
/// order for neighbor lists, and ring walks start at [SouthWest]
/// (`(-1, 0, +1)`). Both orders are observable in query output, so they
/// must not change.
///
/// [SouthWest]: Self::SouthWest
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// The vector that moves a point one cell in this direction.
    pub fn vec(self) -> CubeVector {
        match self {
            Self::East => CubeVector::new(1, -1, 0),
            Self::NorthEast => CubeVector::new(1, 0, -1),
            Self::NorthWest => CubeVector::new(0, 1, -1),
            Self::West => CubeVector::new(-1, 1, 0),
            Self::SouthWest => CubeVector::new(-1, 0, 1),
            Self::SouthEast => CubeVector::new(0, -1, 1),
        }
    }
}

/// Round a fractional cube point to the nearest lattice cell. Each component
/// is rounded independently, then the component that rounded worst is
/// recomputed from the other two so the result lands back on the
/// `x + y + z = 0` plane. Ties fall through to the later axis.
pub(crate) fn cube_round(x: f64, y: f64, z: f64) -> CubePoint {
    let rx = x.round();
    let ry = y.round();
    let rz = z.round();

    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    let (x, z) = if dx > dy && dx > dz {
        (-ry - rz, rz)
    } else if dy > dz {
        // y absorbs the error; it's the derived component anyway
        (rx, rz)
    } else {
        (rx, -rx - ry)
    };
    CubePoint::new_xz(x as i64, z as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let p0 = CubePoint::new_xz(0, 0);
        let p1 = CubePoint::new_xz(-1, 0);
        let p2 = CubePoint::new_xz(2, -1);
        let p3 = CubePoint::new_xz(2, 1);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p2.distance_to(p3), 2);

        // Symmetry
        assert_eq!(p1.distance_to(p3), p3.distance_to(p1));
    }

    #[test]
    fn test_adjacents_order() {
        let adjacents: Vec<_> = CubePoint::new_xz(0, 0).adjacents().collect();
        assert_eq!(
            adjacents,
            vec![
                CubePoint::new_xz(1, 0),
                CubePoint::new_xz(1, -1),
                CubePoint::new_xz(0, -1),
                CubePoint::new_xz(-1, 0),
                CubePoint::new_xz(-1, 1),
                CubePoint::new_xz(0, 1),
            ]
        );
        // Every neighbor is exactly one step away
        for adjacent in CubePoint::new_xz(0, 0).adjacents() {
            assert_eq!(adjacent.distance_to(CubePoint::new_xz(0, 0)), 1);
        }
    }

    #[test]
    fn test_direction_vectors_sum_to_zero() {
        for direction in Direction::iter() {
            let v = direction.vec();
            assert_eq!(v.x + v.y + v.z, 0, "{:?}", direction);
        }
    }

    #[test]
    fn test_vector_scaling() {
        let v = Direction::SouthWest.vec() * 3;
        assert_eq!((v.x, v.y, v.z), (-3, 0, 3));
    }

    #[test]
    fn test_cube_round_exact() {
        assert_eq!(cube_round(2.0, -1.0, -1.0), CubePoint::new_xz(2, -1));
        assert_eq!(cube_round(0.0, 0.0, 0.0), CubePoint::new_xz(0, 0));
    }

    #[test]
    fn test_cube_round_corrects_largest_error() {
        // x drifted furthest, so it gets recomputed from y and z
        let rounded = cube_round(1.4, -1.05, -0.35);
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (1, -1, 0));

        // z drifted furthest
        let rounded = cube_round(1.05, -0.35, -0.7);
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (1, 0, -1));
    }

    #[test]
    fn test_cube_round_preserves_invariant() {
        let samples = [
            (0.5, -0.25, -0.25),
            (1.5, -0.5, -1.0),
            (-2.2, 1.1, 1.1),
            (0.1, 0.2, -0.3),
        ];
        for (x, y, z) in samples {
            let rounded = cube_round(x, y, z);
            assert_eq!(rounded.x() + rounded.y() + rounded.z(), 0);
        }
    }
}
