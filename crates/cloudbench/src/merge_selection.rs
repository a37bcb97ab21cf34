use crate::cloud::{ItemId, PointKind};
use crate::error::ActionResult;
use crate::executor::resolve_point_kind;
use crate::item::CloudItem;
use crate::selection::SelectionMap;
use crate::tool::Tool;
use tracing::debug;

/// Extracts the selected subset of each input item into a new item.
///
/// Merging is specifically "extract the selected subset": inputs that carry
/// the whole-item sentinel (or no selection entry at all) contribute nothing.
/// The tool never reconciles its input list against the snapshot's keys; an
/// entry whose item is not passed in is simply never visited.
pub struct MergeSelection {
    selection: SelectionMap,
}

impl MergeSelection {
    pub const NAME: &'static str = "Merge Selection";

    /// Construct the tool around a selection snapshot.
    pub fn new(selection: SelectionMap) -> Self {
        Self { selection }
    }

    /// The items designated by the selection snapshot, in construction order.
    pub fn selected_items(&self) -> Vec<ItemId> {
        self.selection.keys().collect()
    }
}

impl Tool for MergeSelection {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(
        &self,
        inputs: &[&CloudItem],
        hint: Option<PointKind>,
    ) -> ActionResult<Vec<CloudItem>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        let kind = resolve_point_kind(inputs, hint)?;
        debug!(tool = Self::NAME, %kind, inputs = inputs.len(), "merging selection");

        let mut outputs = Vec::new();
        for item in inputs {
            let Some(indices) = self.selection.indices_for(item.id) else {
                // Not designated by this selection.
                continue;
            };
            if indices.is_empty() {
                // Whole-item sentinel: nothing to extract.
                continue;
            }
            let cloud = item.cloud.extract(indices);
            let label = format!("{} (selection)", item.label);
            outputs.push(CloudItem::derived(label, cloud, Self::NAME, vec![item.id]));
        }
        debug!(tool = Self::NAME, outputs = outputs.len(), "merge finished");
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{PointCloud, PointXyz};
    use crate::selection::PointIndices;

    fn item_of(n: usize) -> CloudItem {
        CloudItem::new(
            "cloud",
            PointCloud::Xyz((0..n).map(|i| PointXyz::new(i as f32, 0.0, 0.0)).collect()),
        )
    }

    #[test]
    fn test_selected_items_returns_keys_in_order() {
        let a = item_of(3);
        let b = item_of(4);
        let mut selection = SelectionMap::new();
        selection.insert(b.id, PointIndices::new(vec![0]));
        selection.insert(a.id, PointIndices::whole_item());
        let tool = MergeSelection::new(selection);
        assert_eq!(tool.selected_items(), vec![b.id, a.id]);
    }

    #[test]
    fn test_empty_inputs_is_a_no_op() {
        let tool = MergeSelection::new(SelectionMap::new());
        let outputs = tool.perform(&[], None).expect("no-op");
        assert!(outputs.is_empty());
    }
}
