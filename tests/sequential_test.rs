//! End-to-end tests for the sequential renderer and the SVG canvas.

use tempfile::tempdir;

use strata::{
    RenderOptions, SequentialRenderer, StrataError,
    export::{Surface, svg::SvgCanvas},
    layer::{Block, FeatureMaps, NeuronColumn},
    op::{Arrow, Conv, Dense, Gap, Link},
};

fn three_block_renderer() -> SequentialRenderer {
    let mut renderer = SequentialRenderer::new();
    renderer.add_layer(Block::new(50.0, 50.0).unwrap());
    renderer.add_layer(Block::new(10.0, 50.0).unwrap());
    renderer.add_layer(Block::new(50.0, 10.0).unwrap());
    renderer
}

#[test]
fn three_layers_two_arrows_produce_five_collections() {
    let mut renderer = three_block_renderer();
    renderer.add_operation(Arrow::new());
    renderer.add_operation(Arrow::new());

    let scene = renderer.scene().expect("scene assembly failed");
    // 3 layer primitive sets + 2 arrow primitive sets
    assert_eq!(scene.collections().len(), 5);
}

#[test]
fn missing_operations_leave_pairs_unconnected() {
    let mut renderer = three_block_renderer();
    renderer.add_operation(Arrow::new());

    let scene = renderer.scene().unwrap();
    // 3 layers, 1 connection, nothing for the second pair
    assert_eq!(scene.collections().len(), 4);
}

#[test]
fn excess_operations_are_ignored_not_fatal() {
    let mut renderer = three_block_renderer();
    for _ in 0..4 {
        renderer.add_operation(Arrow::new());
    }

    let scene = renderer.scene().unwrap();
    assert_eq!(scene.collections().len(), 5);
}

#[test]
fn scene_assembly_is_repeatable() {
    let mut renderer = three_block_renderer();
    renderer.add_operation(Arrow::new());
    renderer.add_operation(Arrow::new());

    let first = renderer.scene().unwrap();
    let second = renderer.scene().unwrap();

    assert_eq!(first.collections().len(), second.collections().len());
    assert_eq!(first.bounds().min_x(), second.bounds().min_x());
    assert_eq!(first.bounds().max_x(), second.bounds().max_x());
}

#[test]
fn render_writes_svg_file_when_auto_displaying() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chain.svg");

    let mut renderer = SequentialRenderer::new();
    renderer.add_layer(
        FeatureMaps::new(3, 100.0, 100.0)
            .unwrap()
            .with_label("Input"),
    );
    renderer.add_operation(Conv::new((8.0, 8.0), 2).with_label("Conv2d"));
    renderer.add_layer(FeatureMaps::new(8, 50.0, 50.0).unwrap().with_label("Maps"));
    renderer.add_operation(Link::new().with_label("Flatten"));
    renderer.add_layer(NeuronColumn::new(6, 12.0).unwrap().with_label("Hidden"));
    renderer.add_operation(Dense::new(6, 3).with_label("Dense"));
    renderer.add_layer(Block::new(40.0, 60.0).unwrap().with_label("Output"));

    let mut canvas = SvgCanvas::new(path.to_str().unwrap());
    renderer.render(&mut canvas, true).expect("render failed");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("</svg>"));
    // Layer and operation labels made it into the output
    assert!(content.contains("Conv2d"));
    assert!(content.contains("Hidden"));
}

#[test]
fn render_without_auto_display_returns_control() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.svg");

    let mut renderer = three_block_renderer();
    renderer.add_operation(Gap::new().with_label("pass"));

    let mut canvas = SvgCanvas::new(path.to_str().unwrap());
    renderer.render(&mut canvas, false).unwrap();

    // Nothing written yet, but the document is available for customization
    assert!(!path.exists());
    canvas
        .add(svg::node::element::Title::new("custom title"))
        .unwrap();
    canvas.display().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("custom title"));
}

#[test]
fn manual_positions_must_cover_every_layer() {
    let mut renderer = three_block_renderer();
    renderer.set_positions(vec![0.0, 100.0]);
    assert!(matches!(renderer.scene(), Err(StrataError::Layout(_))));
}

#[test]
fn custom_options_respected() {
    let options = RenderOptions::new()
        .with_horizontal_spacing(40.0)
        .with_margins(0.0, 0.0)
        .with_background_color("white");

    let mut renderer = SequentialRenderer::with_options(options);
    renderer.add_layer(Block::new(50.0, 50.0).unwrap());
    renderer.add_layer(Block::new(50.0, 50.0).unwrap());

    let scene = renderer.scene().unwrap();
    assert!(scene.background().is_some());
    // Zero margins: limits equal the content bounds, which start at x = 0
    assert_eq!(scene.bounds().min_x(), 0.0);
}
