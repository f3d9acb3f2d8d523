use gymfloor_core::{Delta, FloorRect, Layout, ZoneRect};
use gymfloor_designer::snapping::{
    aspect_locked_resize, snap_machine_move, snap_machine_resize, snap_move_axis, snap_resize,
};
use gymfloor_designer::{snap_to_grid, ReferenceLines, SnapConfig};
use proptest::prelude::*;

fn grid_only() -> SnapConfig {
    SnapConfig {
        edge_snap_enabled: false,
        ..SnapConfig::default()
    }
}

// =========================================================================
// Grid
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn grid_snap_is_idempotent(value in -5000.0f64..5000.0, grid in 1u32..50) {
        let grid = grid as f64;
        let once = snap_to_grid(value, grid);
        prop_assert_eq!(snap_to_grid(once, grid), once);
    }

    #[test]
    fn grid_snap_moves_at_most_half_a_cell(value in -5000.0f64..5000.0) {
        let snapped = snap_to_grid(value, 10.0);
        prop_assert!((snapped - value).abs() <= 5.0 + 1e-9);
    }

    #[test]
    fn grid_move_is_idempotent(pos in -500.0f64..1500.0, size in 10.0f64..400.0) {
        let config = grid_only();
        let once = snap_move_axis(pos, size, &[0.0, 780.0], &config);
        prop_assert_eq!(snap_move_axis(once, size, &[0.0, 780.0], &config), once);
    }
}

// =========================================================================
// Edge snapping
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn edge_on_a_line_stays_put(
        lines in proptest::collection::vec(-200.0f64..1200.0, 1..8),
        pick in any::<proptest::sample::Index>(),
        size in 10.0f64..400.0
    ) {
        let line = lines[pick.index(lines.len())];
        let config = SnapConfig::default();
        prop_assert_eq!(snap_move_axis(line, size, &lines, &config), line);
    }

    #[test]
    fn edge_snap_lands_within_threshold(pos in -100.0f64..900.0, size in 10.0f64..300.0) {
        let config = SnapConfig::default();
        let lines = [0.0, 780.0];
        let snapped = snap_move_axis(pos, size, &lines, &config);
        let moved = (snapped - pos).abs();
        // Either an edge snapped (bounded by the threshold) or the grid did.
        prop_assert!(moved <= config.edge_threshold.max(config.grid_size / 2.0) + 1e-9);
    }
}

// =========================================================================
// Resize minimums
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resize_never_below_minimum(
        w in 40.0f64..400.0,
        h in 40.0f64..400.0,
        dx in -800.0f64..800.0,
        dy in -800.0f64..800.0
    ) {
        let initial = FloorRect::new(100.0, 100.0, w, h);
        let lines = ReferenceLines::for_layout(&Layout::new("g", "G"), None);
        let r = snap_resize(initial, Delta::new(dx, dy), &lines, &SnapConfig::default(), 40.0);
        prop_assert!(r.width >= 40.0);
        prop_assert!(r.height >= 40.0);
        prop_assert_eq!((r.x, r.y), (100.0, 100.0));
    }

    #[test]
    fn aspect_lock_keeps_ratio_without_grid(
        w in 50.0f64..300.0,
        h in 50.0f64..300.0,
        dx in 0.0f64..200.0,
        dy in 0.0f64..200.0
    ) {
        let initial = FloorRect::new(0.0, 0.0, w, h);
        let r = aspect_locked_resize(initial, Delta::new(dx, dy), 0.0, 40.0);
        let ratio = w / h;
        prop_assert!((r.width / r.height - ratio).abs() <= 1e-9 * ratio.max(1.0));
    }

    #[test]
    fn aspect_lock_with_grid_stays_close(
        w in 10u32..30,
        h in 10u32..30,
        grow in 0.0f64..200.0
    ) {
        let (w, h) = (w as f64 * 10.0, h as f64 * 10.0);
        let initial = FloorRect::new(0.0, 0.0, w, h);
        let r = aspect_locked_resize(initial, Delta::new(grow, 0.0), 10.0, 40.0);
        // Each side is off by at most half a grid cell.
        let exact_height = r.width * h / w;
        prop_assert!((r.height - exact_height).abs() <= 5.0 + 5.0 * h / w + 1e-9);
    }
}

// =========================================================================
// Machines
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn machine_move_stays_in_zone(
        zone_w in 60.0f64..400.0,
        zone_h in 60.0f64..400.0,
        mw in 10.0f64..60.0,
        mh in 10.0f64..60.0,
        dx in -600.0f64..600.0,
        dy in -600.0f64..600.0
    ) {
        let initial = ZoneRect::new(0.0, 0.0, mw, mh);
        let moved = snap_machine_move(initial, Delta::new(dx, dy), zone_w, zone_h, 10.0);
        prop_assert!(moved.x >= 0.0 && moved.x + mw <= zone_w + 1e-9);
        prop_assert!(moved.y >= 0.0 && moved.y + mh <= zone_h + 1e-9);
        prop_assert_eq!((moved.width, moved.height), (mw, mh));
    }

    #[test]
    fn machine_resize_respects_minimum_then_zone(
        zone_w in 60.0f64..400.0,
        x in 0.0f64..50.0,
        dw in -300.0f64..600.0
    ) {
        let initial = ZoneRect::new(x, 0.0, 10.0, 10.0);
        let r = snap_machine_resize(initial, Delta::new(dw, 0.0), zone_w, 100.0, 10.0, 10.0);
        prop_assert!(r.width >= 10.0);
        if zone_w - x >= 10.0 {
            prop_assert!(r.x + r.width <= zone_w + 1e-9);
        }
    }
}

#[test]
fn machine_resize_minimum_beats_containment() {
    let initial = ZoneRect::new(95.0, 0.0, 10.0, 10.0);
    let r = snap_machine_resize(initial, Delta::new(50.0, 0.0), 100.0, 100.0, 10.0, 10.0);
    assert_eq!(r.width, 10.0);
}
