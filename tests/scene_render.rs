//! End-to-end tests: scene source in, ops and SVG out

use std::path::Path;

use flexline::layout::DrawOp;
use flexline::{
    layout_scene, render, render_file, render_with_config, LayoutConfig, RenderConfig,
    RenderError, Scene, SceneError, SvgConfig,
};

const DASHBOARD: &str = r##"
[viewport]
width = 200
height = 100
exact = true

[root]
kind = "flex"
axis = "vertical"

[[root.children]]
kind = "flex"
spacing = "space-between"
alignment = "baseline"

[[root.children.children]]
kind = "label"
text = "Hi"
font_size = 20

[[root.children.children]]
kind = "label"
text = "ok"
font_size = 10

[[root.children]]
kind = "fill"
height = 10
color = "#cccccc"

[[root.children]]
kind = "flex"
weight = 1

[[root.children.children]]
kind = "fill"
color = "#e3f2fd"
weight = 1

[[root.children.children]]
kind = "fill"
color = "#1565c0"
weight = 3
"##;

#[test]
fn test_nested_column_of_rows() {
    let frame = layout_scene(DASHBOARD, &RenderConfig::default()).unwrap();
    assert_eq!(frame.dimensions.size.x, 200);
    assert_eq!(frame.dimensions.size.y, 100);
    insta::assert_snapshot!(frame.ops.to_string().trim_end(), @r###"
    text (0,16) "Hi" size=20 #333333
    text (188,16) "ok" size=10 #333333
    fill (0,20)-(200,30) #cccccc
    fill (0,30)-(50,100) #e3f2fd
    fill (50,30)-(200,100) #1565c0
    "###);
}

#[test]
fn test_render_scaled_svg() {
    let config = RenderConfig::new().with_svg(SvgConfig::new().with_content_scale(2.0));
    let svg = render_with_config(DASHBOARD, config).unwrap();
    assert!(svg.contains(r#"width="400" height="200" viewBox="0 0 200 100""#));
    assert!(svg.contains(
        r##"<rect class="fl-fill" x="50" y="30" width="150" height="70" fill="#1565c0"/>"##
    ));
    assert!(svg.contains(r##"<text class="fl-label" x="188" y="16" font-size="10" fill="#333333">ok</text>"##));
}

#[test]
fn test_config_viewport_overrides_scene() {
    let config = RenderConfig::new().with_layout(
        LayoutConfig::new()
            .with_viewport(300, 60)
            .with_exact_viewport(true)
            .with_override_scene_viewport(true),
    );
    let frame = layout_scene(DASHBOARD, &config).unwrap();
    assert_eq!(frame.dimensions.size.x, 300);
    assert_eq!(frame.dimensions.size.y, 60);
}

#[test]
fn test_scene_without_viewport_uses_config() {
    let source = "[root]\nkind = \"fill\"\nwidth = 5000\nheight = 10\n";
    let frame = layout_scene(source, &RenderConfig::new()).unwrap();
    // Clamped to the default 800x600 viewport.
    assert_eq!(frame.dimensions.size.x, 800);
    match frame.ops.iter().next() {
        Some(DrawOp::Fill { rect, .. }) => assert_eq!(rect.width(), 800),
        other => panic!("expected fill, got {:?}", other),
    };
}

#[test]
fn test_syntax_error_report_points_at_source() {
    let source = "[root\nkind = \"flex\"\n";
    let err = Scene::parse(source).unwrap_err();
    assert!(err.span().is_some());
    let report = err.format(source, "broken.toml");
    assert!(report.contains("broken.toml"));
    assert!(report.contains("invalid scene"));
}

#[test]
fn test_unknown_alignment_is_rejected() {
    let source = "[root]\nkind = \"flex\"\nalignment = \"justify\"\n";
    match render(source).unwrap_err() {
        RenderError::Scene(SceneError::Parse { message, .. }) => {
            assert!(message.contains("justify"), "{}", message);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_node_names_its_path() {
    let source = r#"
[root]
kind = "flex"

[[root.children]]
kind = "flex"
weight = 1

[[root.children.children]]
kind = "fill"
width = -4
"#;
    let err = render(source).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid node 'root.children[0].children[0]': size must not be negative, got -4x0"
    );
}

#[test]
fn test_huge_exact_viewport_lays_out() {
    let source = "[viewport]\nwidth = 2000000000\nheight = 10\nexact = true\n[root]\nkind = \"flex\"\nspacing = \"space-evenly\"\n";
    let frame = layout_scene(source, &RenderConfig::new()).unwrap();
    assert_eq!(frame.dimensions.size.x, 2_000_000_000);
    assert_eq!(frame.dimensions.size.y, 10);
    assert!(frame.ops.is_empty());
}

#[test]
fn test_render_file_reads_demo() {
    let svg = render_file(Path::new("demos/toolbar.toml"), RenderConfig::new()).unwrap();
    assert!(svg.contains(">Inbox</text>"));
}
