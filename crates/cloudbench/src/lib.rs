mod cloud;
mod error;
mod executor;
mod item;
mod merge_selection;
mod project;
mod selection;
mod tool;

pub use cloud::*;
pub use error::{ActionError, ActionResult};
pub use executor::{resolve_point_kind, run_tool, ActionReport};
pub use item::{CloudItem, ItemSource};
pub use merge_selection::MergeSelection;
pub use project::{Project, ProjectMeta, ProjectSummary, PROJECT_FILE_VERSION};
pub use selection::{PointIndices, SelectionMap};
pub use tool::{Tool, ToolKind};

/// High-level function: snapshot the current selection, run the given tool
/// over exactly the items the selection designates, and return the new items
/// for the caller to insert.
pub fn run_on_current_selection(
    project: &Project,
    kind: ToolKind,
) -> ActionResult<(Vec<CloudItem>, ActionReport)> {
    let selection = project.current_selection();
    let input_ids: Vec<ItemId> = selection.keys().collect();
    let tool = kind.instantiate(selection);
    run_tool(project, tool.as_ref(), &input_ids, None)
}
