use crate::cloud::PointKind;
use crate::error::ActionResult;
use crate::item::CloudItem;
use crate::merge_selection::MergeSelection;
use crate::selection::SelectionMap;
use serde::{Deserialize, Serialize};

/// A unit of work over selected items.
///
/// A tool is constructed per invocation with its configuration (for selection
/// tools, a [`SelectionMap`] snapshot), holds no state across invocations, and
/// is dropped after use. It borrows its inputs read-only and produces newly
/// owned output items; inserting those into the project is the caller's job.
pub trait Tool {
    /// Human-readable name, constant for the variant. Used for menu and log
    /// display.
    fn name(&self) -> &'static str;

    /// Run the action over `inputs`, producing new items.
    ///
    /// `hint` pins the expected point representation; `None` means resolve it
    /// from the inputs. An explicit hint that disagrees with the inputs fails
    /// the call. An empty input list is a no-op, not an error.
    fn perform(
        &self,
        inputs: &[&CloudItem],
        hint: Option<PointKind>,
    ) -> ActionResult<Vec<CloudItem>>;
}

/// The closed set of tool variants a menu can offer.
///
/// Matches over this enum are written without wildcard arms, so a new variant
/// without its construction path fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    MergeSelection,
}

impl ToolKind {
    /// All available tools, for menu enumeration.
    pub fn all() -> &'static [ToolKind] {
        &[ToolKind::MergeSelection]
    }

    /// The name the instantiated tool will report.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::MergeSelection => MergeSelection::NAME,
        }
    }

    /// Construct the tool with a freshly captured selection snapshot.
    pub fn instantiate(&self, selection: SelectionMap) -> Box<dyn Tool> {
        match self {
            ToolKind::MergeSelection => Box::new(MergeSelection::new(selection)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_instantiates_with_its_name() {
        for kind in ToolKind::all() {
            let tool = kind.instantiate(SelectionMap::new());
            assert_eq!(tool.name(), kind.display_name());
        }
    }

    #[test]
    fn test_kind_serialization() {
        let serialized = serde_json::to_string(&ToolKind::MergeSelection).expect("serialize");
        let deserialized: ToolKind = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(deserialized, ToolKind::MergeSelection);
    }
}
