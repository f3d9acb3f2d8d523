use gymfloor_core::{Annex, Delta, DeviceSize, FloorRect, Layout, Zone, ZoneType};
use gymfloor_designer::{focused_view, full_view, LockedView, ViewportConfig};
use proptest::prelude::*;

fn rect() -> impl Strategy<Value = FloorRect> {
    (-300i32..1500, -300i32..1500, 1i32..500, 1i32..500)
        .prop_map(|(x, y, w, h)| FloorRect::new(x as f64, y as f64, w as f64, h as f64))
}

fn layout_with(zones: &[FloorRect], annexes: &[FloorRect]) -> Layout {
    let mut layout = Layout::new("g", "G");
    for (i, r) in zones.iter().enumerate() {
        layout = layout.with_zone_added(Zone::new(
            format!("z{}", i),
            "Zone",
            ZoneType::Functional,
            *r,
            "#fff",
        ));
    }
    for (i, r) in annexes.iter().enumerate() {
        layout = layout.with_annex_added(Annex::new(format!("a{}", i), *r));
    }
    layout
}

// =========================================================================
// Full view
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn full_view_frames_everything(
        zones in proptest::collection::vec(rect(), 0..6),
        annexes in proptest::collection::vec(rect(), 0..4)
    ) {
        let layout = layout_with(&zones, &annexes);
        let config = ViewportConfig::default();
        let view = full_view(&layout, &config);

        prop_assert!(view.contains(&layout.room_rect()));
        for zone in &layout.zones {
            prop_assert!(view.contains(&zone.rect), "zone {} outside {}", zone.rect, view);
        }
        for annex in &layout.annexes {
            prop_assert!(view.contains(&annex.rect), "annex {} outside {}", annex.rect, view);
        }
    }

    #[test]
    fn full_view_respects_minimums(w in 200u32..2000, h in 200u32..2000) {
        let mut layout = Layout::new("g", "G");
        layout.dimensions.width = w as f64;
        layout.dimensions.height = h as f64;
        let config = ViewportConfig::default();
        let view = full_view(&layout, &config);
        prop_assert!(view.box_width >= config.min_width);
        prop_assert!(view.box_height >= config.min_height);
        prop_assert!(view.box_width >= w as f64 + config.full_padding);
    }
}

// =========================================================================
// Focused view
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn focused_view_contains_zone(zone in rect()) {
        let config = ViewportConfig::default();
        let view = focused_view(&zone, &config);
        prop_assert!(view.contains(&zone));
        prop_assert!(view.box_width >= config.focus_min_size);
        prop_assert!(view.box_height >= config.focus_min_size);
    }

    #[test]
    fn focused_view_centers_zone(zone in rect()) {
        let view = focused_view(&zone, &ViewportConfig::default());
        let left = zone.x + view.offset_x;
        let right = view.box_width - (left + zone.width);
        prop_assert!((left - right).abs() < 1e-9);
    }
}

// =========================================================================
// Locked view
// =========================================================================

#[test]
fn locked_view_converts_with_frozen_scale() {
    let layout = Layout::new("g", "G");
    let locked = LockedView::freeze(full_view(&layout, &ViewportConfig::default()));
    // 930 floor units rendered into 465 pixels: one pixel is two units.
    let delta = locked.to_floor_delta(Delta::new(10.0, 10.0), DeviceSize::new(465.0, 365.0));
    assert_eq!((delta.dx, delta.dy), (20.0, 20.0));
}

#[test]
fn zero_sized_canvas_falls_back_to_unit_scale() {
    let locked = LockedView::freeze(full_view(&Layout::new("g", "G"), &ViewportConfig::default()));
    let delta = locked.to_floor_delta(Delta::new(7.0, 3.0), DeviceSize::new(0.0, 0.0));
    assert_eq!((delta.dx, delta.dy), (7.0, 3.0));
}
