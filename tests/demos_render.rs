//! Every scene in `demos/` must load, lay out within its viewport and render
//! to well-formed SVG.

use std::fs;
use std::path::Path;

use flexline::{layout_scene, render, RenderConfig, Scene};

#[test]
fn test_all_demos_render() {
    let demos_dir = Path::new("demos");

    if !demos_dir.exists() {
        panic!("Demos directory not found at {:?}", demos_dir);
    }

    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map_or(false, |ext| ext == "toml") {
            let source = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));

            match render(&source) {
                Ok(svg) => {
                    if !svg.contains("<svg") {
                        failures.push(format!("Invalid SVG in {}: missing <svg> tag", path.display()));
                    }
                    if !svg.ends_with("</svg>") {
                        failures.push(format!("Invalid SVG in {}: missing </svg> tag", path.display()));
                    }
                    tested += 1;
                }
                Err(e) => {
                    failures.push(format!("Failed to render {}: {:?}", path.display(), e));
                }
            }
        }
    }

    println!("Demo rendering: {} tested, {} failures", tested, failures.len());

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  - {}", failure);
        }
        panic!("{} demo(s) failed. See output above.", failures.len());
    }

    assert!(tested > 0, "No .toml files found in demos directory");
}

#[test]
fn test_demos_fit_their_viewport() {
    for entry in fs::read_dir("demos").expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.extension().map_or(true, |ext| ext != "toml") {
            continue;
        }
        let scene = Scene::from_file(&path).unwrap();
        let viewport = scene.viewport.expect("demos declare a viewport");
        let source = fs::read_to_string(&path).unwrap();
        let frame = layout_scene(&source, &RenderConfig::new()).unwrap();
        let size = frame.dimensions.size;
        assert!(
            size.x <= viewport.width && size.y <= viewport.height,
            "{} is {} but the viewport is {}x{}",
            path.display(),
            size,
            viewport.width,
            viewport.height
        );
        if viewport.exact {
            assert_eq!((size.x, size.y), (viewport.width, viewport.height));
        }
    }
}

#[test]
fn test_spacing_demo_rows() {
    let source = fs::read_to_string("demos/spacing.toml").unwrap();
    let frame = layout_scene(&source, &RenderConfig::new()).unwrap();
    // Four rows of three 40x20 boxes in 300 units: 180 units to spare per row.
    let origins: Vec<(i32, i32)> = frame
        .ops
        .iter()
        .filter_map(|op| match op {
            flexline::layout::DrawOp::Fill { rect, .. } => Some((rect.min.x, rect.min.y)),
            _ => None,
        })
        .collect();
    let xs: Vec<i32> = origins.iter().map(|&(x, _)| x).collect();
    let ys: Vec<i32> = origins.iter().map(|&(_, y)| y).collect();
    assert_eq!(
        xs,
        vec![
            180, 220, 260, // space-start
            90, 130, 170, // space-sides
            0, 130, 260, // space-between
            45, 130, 215, // space-evenly
        ]
    );
    // The column spaces its rows around: 120 units spare over four rows of
    // 20 puts 15 at each end and 30 between.
    assert_eq!(
        ys,
        vec![15, 15, 15, 65, 65, 65, 115, 115, 115, 165, 165, 165]
    );
}
