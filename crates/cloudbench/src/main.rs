use cloudbench::*;
use glam::Vec3;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let demo = args.get(1).map(|s| s.as_str()).unwrap_or("merge");

    match demo {
        "merge" => demo_merge(),
        "merge-color" => demo_merge_color(),
        "project" => demo_project(),
        _ => {
            println!("Usage: cloudbench [merge|merge-color|project]");
            println!("  merge        - Merge a sub-selection out of two XYZ clouds (default)");
            println!("  merge-color  - Merge a sub-selection out of a colored cloud");
            println!("  project      - Build, save and reload a project");
        }
    }
}

fn demo_merge() {
    println!("cloudbench - Merge Selection");
    println!("============================\n");

    let mut project = Project::new("Merge Demo");
    let ramp = project.insert_item(CloudItem::new(
        "ramp",
        PointCloud::Xyz((0..10).map(|i| PointXyz::new(i as f32, 0.0, 0.0)).collect()),
    ));
    let wall = project.insert_item(CloudItem::new(
        "wall",
        PointCloud::Xyz((0..5).map(|i| PointXyz::new(0.0, i as f32, 0.0)).collect()),
    ));

    // Pick three points of the ramp; the wall is selected as a whole and
    // therefore contributes nothing to a merge.
    project
        .select_points(ramp, PointIndices::new(vec![2, 5, 7]))
        .expect("ramp is live and the indices are in range");
    project.select_item(wall).expect("wall is live");

    match run_on_current_selection(&project, ToolKind::MergeSelection) {
        Ok((outputs, report)) => {
            println!(
                "{}: {} input(s), {} output(s), {} skipped",
                report.tool,
                report.inputs,
                report.outputs,
                report.skipped.len()
            );
            for item in &outputs {
                println!("  {} - {} points ({})", item.label, item.point_count(), item.kind());
            }
            let ids = project.insert_items(outputs);
            println!("Inserted {} new item(s) into the project", ids.len());
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn demo_merge_color() {
    println!("cloudbench - Merge Selection (colored cloud)");
    println!("============================================\n");

    let mut project = Project::new("Color Demo");
    let scan = project.insert_item(CloudItem::new(
        "scan",
        PointCloud::XyzRgb(
            (0..8)
                .map(|i| PointXyzRgb::new(i as f32, i as f32, 0.0, [i as u8 * 30, 0, 255]))
                .collect(),
        ),
    ));

    project
        .select_points(scan, PointIndices::new(vec![1, 4, 6]))
        .expect("scan is live and the indices are in range");

    match run_on_current_selection(&project, ToolKind::MergeSelection) {
        Ok((outputs, report)) => {
            println!("{}: produced {} item(s)", report.tool, report.outputs);
            for item in &outputs {
                println!("  {} - {} points ({})", item.label, item.point_count(), item.kind());
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn demo_project() {
    println!("cloudbench - Project round trip");
    println!("===============================\n");

    let mut project = Project::new("Demo Project");
    project.insert_item(CloudItem::new(
        "floor",
        PointCloud::XyzNormal(
            (0..6)
                .map(|i| PointXyzNormal::new(i as f32, 0.0, 0.0, Vec3::Z))
                .collect(),
        ),
    ));

    let path = std::env::temp_dir().join("cloudbench-demo.json");
    if let Err(e) = project.save_to_path(&path) {
        eprintln!("Error: {}", e);
        return;
    }
    println!("Saved project to {}", path.display());

    match Project::load_from_path(&path) {
        Ok(restored) => {
            let summary = restored.summary();
            println!(
                "Reloaded '{}': {} item(s), {} point(s)",
                summary.name, summary.items, summary.points
            );
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
