//! End-to-end view-model tests: feed a real selection through the
//! sequencer and check the nav, overlay, and drawer track the stages.

use folio_stage_core::{StageDelays, StageSequencer, StageTime};
use folio_ui_core::{
    parse_project_library, BottomDrawer, DrawerTab, InspirationImagesConfig, NavView, OverlayView,
    ProjectLibrary, RadialButton, TopNav,
};

fn portfolio() -> ProjectLibrary {
    let json = folio_test_fixtures::projects::json("portfolio").unwrap();
    parse_project_library(&json).unwrap()
}

#[test]
fn portfolio_fixture_parses_and_resolves_all_nodes() {
    let lib = portfolio();
    assert_eq!(lib.len(), 6);
    for node in lib.node_map.keys() {
        assert!(lib.resolve_node(node).is_some());
    }
}

#[test]
fn records_without_urls_drop_their_radial_buttons() {
    let lib = portfolio();
    let images = InspirationImagesConfig::default();

    let portrait = lib.resolve_node("node-3").unwrap();
    let view = OverlayView::derive(
        folio_stage_core::AnimationStage::NodeDetails,
        Some(portrait),
        &images,
    );
    assert_eq!(view.buttons, vec![RadialButton::Lightbulb]);

    let cloth = lib.resolve_node("node-1").unwrap();
    let view = OverlayView::derive(
        folio_stage_core::AnimationStage::NodeDetails,
        Some(cloth),
        &images,
    );
    assert_eq!(view.buttons.len(), 3);
}

#[test]
fn regions_follow_a_full_selection_lifecycle() {
    let lib = portfolio();
    let delays: StageDelays = folio_test_fixtures::delays::config("default").unwrap();
    let mut seq = StageSequencer::new(delays);
    let mut nav = TopNav::new();
    let mut drawer = BottomDrawer::new();
    let images = InspirationImagesConfig::default();

    // Select node-1 and step to completion in 50ms ticks.
    seq.on_selection_changed(lib.selection_for(Some("node-1")));
    let mut now = 0u64;
    while now < 2000 {
        seq.update(StageTime::from_millis(50));
        now += 50;
        let stage = seq.stage();
        nav.sync(stage);
        drawer.sync(stage, StageTime::from_millis(now));
        drawer.update(StageTime::from_millis(now));
    }

    assert_eq!(nav.view(), NavView::Line);
    assert!(drawer.visible());
    assert!(drawer.tabs_revealed());
    assert!(drawer.content_revealed());
    assert_eq!(drawer.selected_tab(), DrawerTab::Overview);

    let record = seq.project().and_then(|id| lib.get(id));
    let overlay = OverlayView::derive(seq.stage(), record, &images);
    assert!(overlay.visible);
    assert_eq!(overlay.inspiration_images.len(), 3);

    // Deselect: everything returns to its idle form at once.
    seq.on_selection_changed(lib.selection_for(None));
    let stage = seq.stage();
    nav.sync(stage);
    drawer.sync(stage, StageTime::from_millis(now));
    assert_eq!(nav.view(), NavView::Normal);
    assert!(!drawer.visible());
    assert!(!OverlayView::derive(stage, record, &images).visible);
}

#[test]
fn slow_zoom_fixture_reaches_the_drawer_later() {
    let lib = portfolio();
    let default: StageDelays = folio_test_fixtures::delays::config("default").unwrap();
    let slow: StageDelays = folio_test_fixtures::delays::config("slow-zoom").unwrap();
    assert!(slow.to_zoom > default.to_zoom);

    let mut seq = StageSequencer::new(slow);
    seq.on_selection_changed(lib.selection_for(Some("node-2")));
    seq.update(StageTime::from_millis(599));
    assert!(!seq.stage().zooms_camera());
    seq.update(StageTime::from_millis(1));
    assert!(seq.stage().zooms_camera());
}
