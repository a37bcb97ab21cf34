use serde::{Deserialize, Serialize};
use std::fmt;

pub mod ids;
pub mod point;

// Re-export public types
pub use ids::ItemId;
pub use point::{PointXyz, PointXyzNormal, PointXyzRgb, PointXyzRgbNormal};

use crate::selection::PointIndices;

/// Tag identifying the concrete representation a point collection uses.
///
/// The set is closed: every `PointCloud` variant maps to exactly one tag, and
/// every match over this enum is written without a wildcard arm so that adding
/// a representation without its dispatch path fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    Xyz,
    XyzRgb,
    XyzNormal,
    XyzRgbNormal,
}

impl PointKind {
    /// All known representations, for menus and exhaustiveness tests.
    pub fn all() -> &'static [PointKind] {
        &[
            PointKind::Xyz,
            PointKind::XyzRgb,
            PointKind::XyzNormal,
            PointKind::XyzRgbNormal,
        ]
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointKind::Xyz => "XYZ",
            PointKind::XyzRgb => "XYZ+RGB",
            PointKind::XyzNormal => "XYZ+Normal",
            PointKind::XyzRgbNormal => "XYZ+RGB+Normal",
        };
        write!(f, "{}", name)
    }
}

/// Typed point storage, one variant per representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointCloud {
    Xyz(Vec<PointXyz>),
    XyzRgb(Vec<PointXyzRgb>),
    XyzNormal(Vec<PointXyzNormal>),
    XyzRgbNormal(Vec<PointXyzRgbNormal>),
}

impl PointCloud {
    /// The tag for this collection's concrete representation.
    pub fn kind(&self) -> PointKind {
        match self {
            PointCloud::Xyz(_) => PointKind::Xyz,
            PointCloud::XyzRgb(_) => PointKind::XyzRgb,
            PointCloud::XyzNormal(_) => PointKind::XyzNormal,
            PointCloud::XyzRgbNormal(_) => PointKind::XyzRgbNormal,
        }
    }

    /// Number of points in the collection.
    pub fn len(&self) -> usize {
        match self {
            PointCloud::Xyz(points) => points.len(),
            PointCloud::XyzRgb(points) => points.len(),
            PointCloud::XyzNormal(points) => points.len(),
            PointCloud::XyzRgbNormal(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy out the points at `indices` into a new collection of the same
    /// representation, preserving the order the indices are listed in.
    ///
    /// Panics if an index is out of range for this collection, which means a
    /// selection snapshot outlived a mutation of the item it points into.
    pub fn extract(&self, indices: &PointIndices) -> PointCloud {
        match self {
            PointCloud::Xyz(points) => PointCloud::Xyz(extract_points(points, indices)),
            PointCloud::XyzRgb(points) => PointCloud::XyzRgb(extract_points(points, indices)),
            PointCloud::XyzNormal(points) => {
                PointCloud::XyzNormal(extract_points(points, indices))
            }
            PointCloud::XyzRgbNormal(points) => {
                PointCloud::XyzRgbNormal(extract_points(points, indices))
            }
        }
    }
}

/// Copy the points at `indices` out of a typed slice, in listed order.
fn extract_points<P: Clone>(points: &[P], indices: &PointIndices) -> Vec<P> {
    indices
        .iter()
        .map(|index| {
            assert!(
                index < points.len(),
                "selection index {} out of range for cloud of {} points (stale selection snapshot)",
                index,
                points.len()
            );
            points[index].clone()
        })
        .collect()
}
