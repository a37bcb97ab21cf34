use crate::cloud::{ItemId, PointKind};
use crate::error::{ActionError, ActionResult};
use crate::item::CloudItem;
use crate::selection::{PointIndices, SelectionMap};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::debug;

/// Increment when the on-disk layout changes.
pub const PROJECT_FILE_VERSION: u32 = 1;

/// High-level representation of a composer project: an ordered tree of cloud
/// items plus the live selection state over them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    items: Vec<CloudItem>,
    /// Live selection state, keyed by item in selection order. UI state, not
    /// part of the persisted document.
    #[serde(skip)]
    selection: Vec<(ItemId, PointIndices)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub description: Option<String>,
    pub created_at_epoch_ms: u64,
    pub updated_at_epoch_ms: u64,
    pub file_version: u32,
}

impl Project {
    /// Create a new, empty project.
    pub fn new(name: impl Into<String>) -> Self {
        let now = current_epoch_ms();
        Self {
            meta: ProjectMeta {
                name: name.into(),
                description: None,
                created_at_epoch_ms: now,
                updated_at_epoch_ms: now,
                file_version: PROJECT_FILE_VERSION,
            },
            items: Vec::new(),
            selection: Vec::new(),
        }
    }

    /// Items in tree order.
    pub fn items(&self) -> &[CloudItem] {
        &self.items
    }

    /// Look up an item by identity.
    pub fn item(&self, id: ItemId) -> Option<&CloudItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Take ownership of `items`, appending them to the tree. Returns the ids
    /// in insertion order.
    pub fn insert_items(&mut self, items: Vec<CloudItem>) -> Vec<ItemId> {
        let ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        debug!(count = items.len(), "inserting items into project");
        self.items.extend(items);
        ids
    }

    /// Take ownership of a single item, appending it to the tree.
    pub fn insert_item(&mut self, item: CloudItem) -> ItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove an item from the tree, returning it. Any selection recorded for
    /// the item is dropped with it.
    pub fn remove_item(&mut self, id: ItemId) -> Option<CloudItem> {
        self.selection.retain(|(selected, _)| *selected != id);
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    /// Borrow the items at `ids`, in the given order.
    ///
    /// Panics if any id is not live in the tree: a stale handle means the
    /// caller is working from a snapshot that outlived a tree mutation.
    pub fn items_at(&self, ids: &[ItemId]) -> Vec<&CloudItem> {
        ids.iter()
            .map(|&id| {
                self.item(id)
                    .unwrap_or_else(|| panic!("stale item id {} not in project tree", id))
            })
            .collect()
    }

    /// Record a sub-selection of points on a live item.
    ///
    /// Fails if the item is not in the tree or any index is out of range for
    /// its current point count. Selecting an already-selected item replaces
    /// its recorded indices.
    pub fn select_points(&mut self, id: ItemId, indices: PointIndices) -> ActionResult<()> {
        let item = self.item(id).ok_or(ActionError::UnknownItem { id })?;
        if let Some(max) = indices.max_index() {
            let points = item.point_count();
            if max >= points {
                return Err(ActionError::IndexOutOfRange { index: max, points });
            }
        }
        self.upsert_selection(id, indices);
        Ok(())
    }

    /// Select a live item as a whole (no sub-selection).
    pub fn select_item(&mut self, id: ItemId) -> ActionResult<()> {
        if self.item(id).is_none() {
            return Err(ActionError::UnknownItem { id });
        }
        self.upsert_selection(id, PointIndices::whole_item());
        Ok(())
    }

    /// Drop any selection recorded for `id`.
    pub fn deselect(&mut self, id: ItemId) {
        self.selection.retain(|(selected, _)| *selected != id);
    }

    /// Drop all selection state.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Snapshot the current selection state.
    ///
    /// The returned map is frozen at this call: mutating the project or its
    /// selection afterwards does not change it.
    pub fn current_selection(&self) -> SelectionMap {
        let mut map = SelectionMap::new();
        for (id, indices) in &self.selection {
            map.insert(*id, indices.clone());
        }
        map
    }

    fn upsert_selection(&mut self, id: ItemId, indices: PointIndices) {
        if let Some(entry) = self
            .selection
            .iter_mut()
            .find(|(selected, _)| *selected == id)
        {
            entry.1 = indices;
        } else {
            self.selection.push((id, indices));
        }
    }

    /// Provide a compact summary for UIs.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            name: self.meta.name.clone(),
            items: self.items.len(),
            points: self.items.iter().map(CloudItem::point_count).sum(),
            selected_items: self.selection.len(),
            kinds: self
                .items
                .iter()
                .map(CloudItem::kind)
                .fold(Vec::new(), |mut kinds, kind| {
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                    kinds
                }),
        }
    }

    /// Persist the project to disk as prettified JSON.
    pub fn save_to_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.touch_updated_timestamp();
        let data = serde_json::to_vec_pretty(self).context("serialize project")?;
        fs::write(path, data).context("write project file")
    }

    /// Load a project from disk. The selection state starts empty.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(&path).with_context(|| {
            format!("read project file from {}", path.as_ref().to_string_lossy())
        })?;
        let project: Project =
            serde_json::from_slice(&bytes).context("deserialize project file")?;
        Ok(project)
    }

    /// Update the project's updated timestamp.
    pub fn touch_updated_timestamp(&mut self) {
        self.meta.updated_at_epoch_ms = current_epoch_ms();
    }

    /// Resolve the default project directory (`~/.cloudbench/projects`),
    /// creating it if needed.
    pub fn default_project_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
        let path = home.join(".cloudbench").join("projects");
        fs::create_dir_all(&path)
            .with_context(|| format!("create project directory {}", path.display()))?;
        Ok(path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub items: usize,
    pub points: usize,
    pub selected_items: usize,
    /// Distinct point representations present, in tree order.
    pub kinds: Vec<PointKind>,
}

fn current_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis() as u64)
        .unwrap_or_default()
}
