//! End-to-end tests for the free-form renderer.

use tempfile::tempdir;

use strata::{
    FreeformRenderer, StrataError,
    export::svg::SvgCanvas,
    layer::{Block, FeatureMaps},
    op::{Arrow, Dense, Skip},
};

#[test]
fn omitted_y_uses_auto_centering_not_caller_default() {
    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer_at("A", Block::new(50.0, 50.0).unwrap(), 0.0, Some(0.0))
        .unwrap();
    renderer
        .add_layer_at("B", Block::new(50.0, 50.0).unwrap(), 150.0, None)
        .unwrap();
    renderer.add_operation(Arrow::new(), "A", "B");

    // B keeps the centering rule's output: extent centered about 0 puts the
    // bottom-left anchor at -25
    let b = renderer.layer("B").unwrap();
    assert_eq!(b.position().y(), -25.0);
    // While A sits where the caller put it
    assert_eq!(renderer.layer("A").unwrap().position().y(), 0.0);

    let scene = renderer.scene().unwrap();
    assert_eq!(scene.collections().len(), 3);
}

#[test]
fn unknown_endpoint_fails_before_any_drawing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aborted.svg");

    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer("A", Block::new(50.0, 50.0).unwrap())
        .unwrap();
    renderer.add_operation(Arrow::new(), "A", "Z");

    let mut canvas = SvgCanvas::new(path.to_str().unwrap());
    let result = renderer.render(&mut canvas, true);

    match result {
        Err(StrataError::UnresolvedEndpoint(id)) => assert_eq!(id, "Z"),
        other => panic!("expected UnresolvedEndpoint, got {other:?}"),
    }
    // No partial diagram was emitted
    assert!(canvas.document().is_none());
    assert!(!path.exists());
}

#[test]
fn operations_between_same_pair_overlay_independently() {
    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer_at("A", Block::new(50.0, 50.0).unwrap(), 0.0, None)
        .unwrap();
    renderer
        .add_layer_at("B", Block::new(50.0, 50.0).unwrap(), 200.0, None)
        .unwrap();

    renderer.add_operation(Arrow::new(), "A", "B");
    renderer.add_operation(Dense::new(2, 2), "A", "B");
    renderer.add_operation(Skip::new().with_drop(30.0), "A", "B");

    let scene = renderer.scene().unwrap();
    // 2 layers + 3 overlaid connection collections
    assert_eq!(scene.collections().len(), 5);
}

#[test]
fn residual_chain_renders_to_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("residual.svg");

    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer_at("input", FeatureMaps::new(4, 60.0, 60.0).unwrap(), 0.0, None)
        .unwrap();
    renderer
        .add_layer_at("block1", Block::new(80.0, 80.0).unwrap(), 160.0, None)
        .unwrap();
    renderer
        .add_layer_at("block2", Block::new(80.0, 80.0).unwrap(), 320.0, None)
        .unwrap();

    renderer.add_operation(Arrow::new(), "input", "block1");
    renderer.add_operation(Arrow::new(), "block1", "block2");
    renderer.add_operation(Skip::new().with_drop(50.0), "input", "block2");

    let mut canvas = SvgCanvas::new(path.to_str().unwrap());
    renderer.render(&mut canvas, true).expect("render failed");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("<path"));
}

#[test]
fn duplicate_ids_are_rejected_until_replaced() {
    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer("A", Block::new(10.0, 10.0).unwrap())
        .unwrap();

    assert!(matches!(
        renderer.add_layer("A", Block::new(20.0, 20.0).unwrap()),
        Err(StrataError::DuplicateLayer(_))
    ));

    renderer.replace_layer("A", Block::new(20.0, 20.0).unwrap());
    assert_eq!(renderer.layer("A").unwrap().extent().width(), 20.0);
}

#[test]
fn removed_layer_breaks_its_connections() {
    let mut renderer = FreeformRenderer::new();
    renderer
        .add_layer("A", Block::new(10.0, 10.0).unwrap())
        .unwrap();
    renderer
        .add_layer_at("B", Block::new(10.0, 10.0).unwrap(), 50.0, None)
        .unwrap();
    renderer.add_operation(Arrow::new(), "A", "B");

    renderer.remove_layer("B");
    assert!(matches!(
        renderer.scene(),
        Err(StrataError::UnresolvedEndpoint(_))
    ));
}
