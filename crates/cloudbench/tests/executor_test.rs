use cloudbench::*;
use glam::Vec3;

fn cloud_of_kind(kind: PointKind, n: usize) -> PointCloud {
    match kind {
        PointKind::Xyz => {
            PointCloud::Xyz((0..n).map(|i| PointXyz::new(i as f32, 0.0, 0.0)).collect())
        }
        PointKind::XyzRgb => PointCloud::XyzRgb(
            (0..n)
                .map(|i| PointXyzRgb::new(i as f32, 0.0, 0.0, [128, 64, 32]))
                .collect(),
        ),
        PointKind::XyzNormal => PointCloud::XyzNormal(
            (0..n)
                .map(|i| PointXyzNormal::new(i as f32, 0.0, 0.0, Vec3::Z))
                .collect(),
        ),
        PointKind::XyzRgbNormal => PointCloud::XyzRgbNormal(
            (0..n)
                .map(|i| PointXyzRgbNormal::new(i as f32, 0.0, 0.0, [128, 64, 32], Vec3::Z))
                .collect(),
        ),
    }
}

#[test]
fn test_merge_dispatches_for_every_known_kind() {
    for &kind in PointKind::all() {
        let item = CloudItem::new("cloud", cloud_of_kind(kind, 6));
        let mut selection = SelectionMap::new();
        selection.insert(item.id, PointIndices::new(vec![1, 3]));

        let tool = MergeSelection::new(selection);
        let outputs = tool
            .perform(&[&item], Some(kind))
            .unwrap_or_else(|e| panic!("merge failed for {}: {}", kind, e));

        assert_eq!(outputs.len(), 1, "kind {}", kind);
        assert_eq!(outputs[0].kind(), kind, "output keeps the representation");
        assert_eq!(outputs[0].point_count(), 2);
    }
}

#[test]
fn test_mixed_batch_aborts_whole_call() {
    let a = CloudItem::new("a", cloud_of_kind(PointKind::Xyz, 4));
    let b = CloudItem::new("b", cloud_of_kind(PointKind::XyzRgb, 4));
    let mut selection = SelectionMap::new();
    selection.insert(a.id, PointIndices::new(vec![0]));
    selection.insert(b.id, PointIndices::new(vec![0]));

    let tool = MergeSelection::new(selection);
    let err = tool.perform(&[&a, &b], None).expect_err("mixed batch");
    assert_eq!(
        err,
        ActionError::MixedPointKinds {
            first: PointKind::Xyz,
            other: PointKind::XyzRgb,
        }
    );
}

#[test]
fn test_wrong_hint_fails_instead_of_coercing() {
    let item = CloudItem::new("a", cloud_of_kind(PointKind::XyzNormal, 4));
    let mut selection = SelectionMap::new();
    selection.insert(item.id, PointIndices::new(vec![2]));

    let tool = MergeSelection::new(selection);
    let err = tool
        .perform(&[&item], Some(PointKind::Xyz))
        .expect_err("hint disagrees with inputs");
    assert_eq!(
        err,
        ActionError::HintMismatch {
            hint: PointKind::Xyz,
            actual: PointKind::XyzNormal,
        }
    );
}

#[test]
fn test_run_tool_reports_outputs_and_skips() {
    let mut project = Project::new("Report");
    let picked = project.insert_item(CloudItem::new("picked", cloud_of_kind(PointKind::Xyz, 8)));
    let whole = project.insert_item(CloudItem::new("whole", cloud_of_kind(PointKind::Xyz, 8)));
    project
        .select_points(picked, PointIndices::new(vec![0, 7]))
        .expect("select");
    project.select_item(whole).expect("select");

    let selection = project.current_selection();
    let input_ids: Vec<ItemId> = selection.keys().collect();
    let tool = MergeSelection::new(selection);

    let (outputs, report) =
        run_tool(&project, &tool, &input_ids, None).expect("run succeeds");

    assert_eq!(report.tool, "Merge Selection");
    assert_eq!(report.inputs, 2);
    assert_eq!(report.outputs, 1);
    assert_eq!(report.skipped, vec![whole]);
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].point_count(), 2);
}

#[test]
fn test_run_tool_with_empty_selection_reports_nothing() {
    let project = Project::new("Empty");
    let tool = MergeSelection::new(SelectionMap::new());
    let (outputs, report) = run_tool(&project, &tool, &[], None).expect("no-op run");
    assert!(outputs.is_empty());
    assert_eq!(report.inputs, 0);
    assert_eq!(report.outputs, 0);
    assert!(report.skipped.is_empty());
}
