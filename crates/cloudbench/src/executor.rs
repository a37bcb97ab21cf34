use crate::cloud::{ItemId, PointKind};
use crate::error::{ActionError, ActionResult};
use crate::item::{CloudItem, ItemSource};
use crate::project::Project;
use crate::tool::Tool;
use tracing::info;

/// Determine the single point representation for a batch of inputs.
///
/// Every tool action dispatches to one typed routine per call, so the batch
/// must agree on a representation. An empty batch or a mixed one is a caller
/// error; an explicit `hint` must match the inputs' actual tag. The policy is
/// whole-batch abort: nothing is processed once a disagreement is found.
pub fn resolve_point_kind(
    inputs: &[&CloudItem],
    hint: Option<PointKind>,
) -> ActionResult<PointKind> {
    let mut items = inputs.iter();
    let first = items.next().ok_or(ActionError::EmptyBatch)?;
    let actual = first.kind();

    for item in items {
        if item.kind() != actual {
            return Err(ActionError::MixedPointKinds {
                first: actual,
                other: item.kind(),
            });
        }
    }
    if let Some(hint) = hint {
        if hint != actual {
            return Err(ActionError::HintMismatch { hint, actual });
        }
    }
    Ok(actual)
}

/// Outcome of one tool run, for UIs and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    /// Name of the tool that ran.
    pub tool: String,
    /// Number of input items handed to the tool.
    pub inputs: usize,
    /// Number of output items the tool produced.
    pub outputs: usize,
    /// Input items that contributed to no output (skipped by the tool).
    pub skipped: Vec<ItemId>,
}

/// Run `tool` over the project items at `input_ids`, in the given order.
///
/// Gathers borrowed inputs from the tree (a stale id is a hard fault, matching
/// [`Project::items_at`]), invokes the tool, and hands back the newly owned
/// outputs with a report. The outputs are NOT inserted into the project;
/// that handoff stays with the caller.
pub fn run_tool(
    project: &Project,
    tool: &dyn Tool,
    input_ids: &[ItemId],
    hint: Option<PointKind>,
) -> ActionResult<(Vec<CloudItem>, ActionReport)> {
    let inputs = project.items_at(input_ids);
    let outputs = tool.perform(&inputs, hint)?;

    let contributed: Vec<ItemId> = outputs
        .iter()
        .flat_map(|item| match &item.source {
            ItemSource::Derived { parents, .. } => parents.clone(),
            ItemSource::Synthetic | ItemSource::Loaded { .. } => Vec::new(),
        })
        .collect();
    let skipped = input_ids
        .iter()
        .copied()
        .filter(|id| !contributed.contains(id))
        .collect();

    let report = ActionReport {
        tool: tool.name().to_string(),
        inputs: input_ids.len(),
        outputs: outputs.len(),
        skipped,
    };
    info!(
        tool = %report.tool,
        inputs = report.inputs,
        outputs = report.outputs,
        "tool run complete"
    );
    Ok((outputs, report))
}
