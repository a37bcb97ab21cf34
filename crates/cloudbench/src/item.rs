use crate::cloud::{ItemId, PointCloud, PointKind};
use serde::{Deserialize, Serialize};

/// A scene node holding one point collection.
///
/// Items live in a [`Project`](crate::Project) and are compared by identity.
/// Tools receive borrowed items and hand back newly owned ones; they never
/// mutate an item in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Human-readable label shown in the project tree.
    pub label: String,
    /// The point data.
    pub cloud: PointCloud,
    /// Where the item came from.
    pub source: ItemSource,
}

/// Source information for an item, indicating where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemSource {
    /// Built in memory.
    Synthetic,
    /// Brought in from disk. The path is a provenance record only; nothing is
    /// re-read from it.
    Loaded {
        /// Path to the originating file.
        path: String,
    },
    /// Produced by a tool run.
    Derived {
        /// Name of the tool that produced the item.
        tool: String,
        /// The input items the tool derived this one from.
        parents: Vec<ItemId>,
    },
}

impl CloudItem {
    /// Create a synthetic item.
    pub fn new(label: impl Into<String>, cloud: PointCloud) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            cloud,
            source: ItemSource::Synthetic,
        }
    }

    /// Create an item recording the file it was loaded from.
    pub fn loaded(label: impl Into<String>, cloud: PointCloud, path: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            cloud,
            source: ItemSource::Loaded { path: path.into() },
        }
    }

    /// Create an item produced by a tool from the given parents.
    pub fn derived(
        label: impl Into<String>,
        cloud: PointCloud,
        tool: impl Into<String>,
        parents: Vec<ItemId>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            cloud,
            source: ItemSource::Derived {
                tool: tool.into(),
                parents,
            },
        }
    }

    /// The representation tag of this item's point data.
    pub fn kind(&self) -> PointKind {
        self.cloud.kind()
    }

    /// Number of points the item holds.
    pub fn point_count(&self) -> usize {
        self.cloud.len()
    }
}
