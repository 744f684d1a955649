use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The two ways a hexagon can sit on a grid: with a vertex pointing up, or
/// with a flat side up. Orientation decides which offset axis makes sense:
/// pointy-topped grids shift alternating *rows*, flat-topped grids shift
/// alternating *columns*.
#[derive(
    Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexagonType {
    #[strum(serialize = "pointy-topped")]
    Pointy,
    #[strum(serialize = "flat-topped")]
    Flat,
}

/// The coordinate systems a [Grid](crate::Grid) can be keyed by.
///
/// All systems use `(i64, i64)` pairs as keys except [Cubic], which uses
/// `(x, y, z)` triples summing to zero. [Offset] is a convenience alias that
/// resolves to [OffsetOddRows] or [OffsetOddColumns] based on orientation; it
/// is accepted at grid construction and re-keying but nowhere else.
///
/// [Cubic]: Self::Cubic
/// [Offset]: Self::Offset
/// [OffsetOddRows]: Self::OffsetOddRows
/// [OffsetOddColumns]: Self::OffsetOddColumns
#[derive(
    Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Alias for the orientation's default offset variant.
    #[strum(serialize = "offset")]
    Offset,
    /// Offset coordinates where odd rows are shifted right.
    #[strum(serialize = "offset-odd-rows")]
    OffsetOddRows,
    /// Offset coordinates where even rows are shifted right.
    #[strum(serialize = "offset-even-rows")]
    OffsetEvenRows,
    /// Offset coordinates where odd columns are shifted down.
    #[strum(serialize = "offset-odd-columns")]
    OffsetOddColumns,
    /// Offset coordinates where even columns are shifted down.
    #[strum(serialize = "offset-even-columns")]
    OffsetEvenColumns,
    /// Axial `(q, r)` coordinates.
    #[strum(serialize = "axial")]
    Axial,
    /// Cube `(x, y, z)` coordinates with `x + y + z = 0`.
    #[strum(serialize = "cubic")]
    Cubic,
}

impl CoordinateSystem {
    /// Resolve the [Offset](Self::Offset) alias to the concrete variant for
    /// the given orientation. Concrete systems pass through unchanged.
    pub fn resolve(self, hexagon_type: HexagonType) -> Self {
        match (self, hexagon_type) {
            (Self::Offset, HexagonType::Pointy) => Self::OffsetOddRows,
            (Self::Offset, HexagonType::Flat) => Self::OffsetOddColumns,
            _ => self,
        }
    }

    /// Does this system offset alternating rows?
    pub fn is_row_offset(self) -> bool {
        matches!(self, Self::OffsetOddRows | Self::OffsetEvenRows)
    }

    /// Does this system offset alternating columns?
    pub fn is_column_offset(self) -> bool {
        matches!(self, Self::OffsetOddColumns | Self::OffsetEvenColumns)
    }

    /// Row offsets require pointy-topped hexagons, column offsets require
    /// flat-topped ones. Everything else is orientation-agnostic (orientation
    /// just rotates how axial/cubic grids get drawn).
    pub(crate) fn compatible_with(self, hexagon_type: HexagonType) -> bool {
        match hexagon_type {
            HexagonType::Pointy => !self.is_column_offset(),
            HexagonType::Flat => !self.is_row_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resolve_offset_alias() {
        assert_eq!(
            CoordinateSystem::Offset.resolve(HexagonType::Pointy),
            CoordinateSystem::OffsetOddRows
        );
        assert_eq!(
            CoordinateSystem::Offset.resolve(HexagonType::Flat),
            CoordinateSystem::OffsetOddColumns
        );

        // Concrete systems never change, regardless of orientation
        for system in CoordinateSystem::iter() {
            if system == CoordinateSystem::Offset {
                continue;
            }
            assert_eq!(system.resolve(HexagonType::Pointy), system);
            assert_eq!(system.resolve(HexagonType::Flat), system);
        }
    }

    #[test]
    fn test_compatibility() {
        assert!(!CoordinateSystem::OffsetOddRows.compatible_with(HexagonType::Flat));
        assert!(!CoordinateSystem::OffsetEvenRows.compatible_with(HexagonType::Flat));
        assert!(!CoordinateSystem::OffsetOddColumns.compatible_with(HexagonType::Pointy));
        assert!(!CoordinateSystem::OffsetEvenColumns.compatible_with(HexagonType::Pointy));

        for system in [
            CoordinateSystem::Axial,
            CoordinateSystem::Cubic,
            CoordinateSystem::Offset,
        ] {
            assert!(system.compatible_with(HexagonType::Pointy));
            assert!(system.compatible_with(HexagonType::Flat));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CoordinateSystem::OffsetOddRows.to_string(), "offset-odd-rows");
        assert_eq!(CoordinateSystem::Cubic.to_string(), "cubic");
        assert_eq!(HexagonType::Pointy.to_string(), "pointy-topped");
        assert_eq!(HexagonType::Flat.to_string(), "flat-topped");
    }
}
