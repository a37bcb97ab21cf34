use crate::cloud::ItemId;

/// Ordered list of point indices into exactly one item's collection.
///
/// An empty list is the whole-item sentinel: the item is selected as a whole,
/// with no sub-selection recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointIndices {
    indices: Vec<usize>,
}

impl PointIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// The whole-item sentinel.
    pub fn whole_item() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices in the order they were listed.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Largest index in the set, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.indices.iter().copied().max()
    }
}

impl From<Vec<usize>> for PointIndices {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl FromIterator<usize> for PointIndices {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Snapshot of which points, in which items, are currently selected.
///
/// Built once from the project's selection state before a tool runs; it is not
/// updated if the project mutates afterwards. Keys are unique and kept in
/// insertion order. Looking up an identity that was never inserted returns
/// `None`; there is no silent sentinel fallback, callers iterate `keys()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    entries: Vec<(ItemId, PointIndices)>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection for `item`. Inserting the same item again replaces
    /// its indices in place, keeping the original position in key order.
    pub fn insert(&mut self, item: ItemId, indices: PointIndices) {
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == item) {
            entry.1 = indices;
        } else {
            self.entries.push((item, indices));
        }
    }

    /// Selected item identities, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// The index set recorded for `item`, or `None` if the item is not part
    /// of this selection.
    pub fn indices_for(&self, item: ItemId) -> Option<&PointIndices> {
        self.entries
            .iter()
            .find(|(id, _)| *id == item)
            .map(|(_, indices)| indices)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.entries.iter().any(|(id, _)| *id == item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &PointIndices)> + '_ {
        self.entries.iter().map(|(id, indices)| (*id, indices))
    }
}
