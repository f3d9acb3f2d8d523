use gymfloor_core::{default_layout, FloorRect, Layout, Zone, ZoneType};
use gymfloor_designer::{full_view, ViewerOverlay, ViewerState, ViewportConfig};

/// Long enough for any focus transition to have finished.
const SETTLED: u64 = 10_000;

fn layout_with_corridor() -> Layout {
    default_layout().with_zone_added(Zone::new(
        "corridor-1",
        "Corridor",
        ZoneType::Corridor,
        FloorRect::new(50.0, 250.0, 200.0, 40.0),
        "#64748b",
    ))
}

#[test]
fn structural_zones_never_take_focus() {
    let layout = layout_with_corridor();
    let mut viewer = ViewerState::new(ViewportConfig::default());
    assert!(!viewer.click_zone(&layout, "corridor-1", SETTLED));
    assert_eq!(viewer.focused_zone(), None);
    assert!(viewer.transition().is_none());
}

#[test]
fn unknown_zone_is_ignored() {
    let layout = default_layout();
    let mut viewer = ViewerState::new(ViewportConfig::default());
    assert!(!viewer.click_zone(&layout, "nope", SETTLED));
    assert_eq!(viewer.overlay(), &ViewerOverlay::None);
}

#[test]
fn focus_moves_between_zones() {
    let layout = default_layout();
    let mut viewer = ViewerState::new(ViewportConfig::default());
    viewer.click_zone(&layout, "zone-racks", SETTLED);
    let racks = viewer.window(&layout);
    viewer.click_zone(&layout, "zone-bench", SETTLED);
    assert_eq!(viewer.focused_zone(), Some("zone-bench"));
    assert_eq!(viewer.frame(&layout, 0), racks);
    let bench = layout.zone("zone-bench").unwrap().rect;
    assert!(viewer.window(&layout).contains(&bench));
}

#[test]
fn deleted_focus_falls_back_to_full_view() {
    let layout = default_layout();
    let config = ViewportConfig::default();
    let mut viewer = ViewerState::new(config);
    viewer.click_zone(&layout, "zone-turf", SETTLED);

    let edited = layout.without_zone("zone-turf").unwrap();
    assert_eq!(viewer.window(&edited), full_view(&edited, &config));
}

#[test]
fn transition_is_monotone_in_box_size() {
    let layout = default_layout();
    let config = ViewportConfig::default();
    let mut viewer = ViewerState::new(config);
    viewer.click_zone(&layout, "zone-machines-2", SETTLED);
    let mut last = f64::INFINITY;
    for ms in (0..=config.transition_ms).step_by(50) {
        let width = viewer.frame(&layout, ms).box_width;
        assert!(width <= last + 1e-9);
        last = width;
    }
}
