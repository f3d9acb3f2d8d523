//! End-to-end editing scenarios through the `Editor` façade.

use gymfloor_core::{Annex, DevicePoint, DeviceSize, FloorRect, Layout, Machine, Zone, ZoneRect, ZoneType};
use gymfloor_designer::{
    full_view, DragHandle, EditMode, Editor, EditorConfig, LayoutAction, Modifiers, SizeLimits,
};

/// The full view of a 780×580 room is 930×730, so a 930×730 pixel canvas
/// gives one floor unit per pixel.
fn unit_canvas() -> DeviceSize {
    DeviceSize::new(930.0, 730.0)
}

fn empty_editor() -> Editor {
    Editor::new(Layout::new("gym-1", "Test Gym"), EditorConfig::default())
}

#[test]
fn add_zone_then_undo_redo() {
    let mut editor = empty_editor();
    let id = editor.add_zone();

    let layout = editor.layout();
    assert_eq!(layout.zones.len(), 1);
    assert_eq!(layout.zones[0].rect, FloorRect::new(100.0, 100.0, 100.0, 100.0));
    assert_eq!(layout.zones[0].name, "New Area");
    assert_eq!(editor.selection().zone_id(), Some(id.as_str()));

    assert!(editor.undo());
    assert!(editor.layout().zones.is_empty());
    assert_eq!(editor.selection().zone_id(), None);

    assert!(editor.redo());
    assert_eq!(editor.layout().zones.len(), 1);
    assert_eq!(editor.layout().zones[0].id, id);
}

#[test]
fn annex_widens_full_view() {
    let layout = Layout::new("g", "G")
        .with_annex_added(Annex::new("a", FloorRect::new(780.0, 0.0, 200.0, 200.0)));
    let view = full_view(&layout, &EditorConfig::default().viewport);
    assert_eq!(view.box_width, 1130.0);
    assert_eq!(view.box_height, 730.0);
}

#[test]
fn resize_zone_by_drag() {
    let layout = Layout::new("g", "G").with_zone_added(Zone::new(
        "z",
        "Zone",
        ZoneType::Cardio,
        FloorRect::new(100.0, 100.0, 200.0, 150.0),
        "#fff",
    ));
    let mut editor = Editor::new(layout, EditorConfig::default());

    assert!(editor.begin_drag(DragHandle::ZoneResize("z".into()), DevicePoint::new(300.0, 250.0)));
    assert!(editor.pointer_move(
        DevicePoint::new(503.0, 448.0),
        unit_canvas(),
        Modifiers::default()
    ));
    assert!(editor.pointer_up());

    let rect = editor.layout().zones[0].rect;
    assert_eq!((rect.width, rect.height), (400.0, 350.0));
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn delete_zone_with_machines_is_one_step() {
    let layout = Layout::new("g", "G").with_zone_added(
        Zone::new(
            "z",
            "Racks",
            ZoneType::Rack,
            FloorRect::new(0.0, 0.0, 200.0, 200.0),
            "#f87171",
        )
        .with_machines(vec![
            Machine::new("r1", "Rack 1", ZoneRect::new(20.0, 20.0, 60.0, 60.0)),
            Machine::new("r2", "Rack 2", ZoneRect::new(120.0, 20.0, 60.0, 60.0)),
        ]),
    );
    let original = layout.clone();
    let mut editor = Editor::new(layout, EditorConfig::default());

    let pending = editor.request_delete_zone("z").unwrap();
    assert_eq!(pending.label(), "Racks");
    assert!(editor.confirm_delete(pending));
    assert!(editor.layout().zones.is_empty());
    assert_eq!(editor.history().undo_depth(), 1);

    assert!(editor.undo());
    assert_eq!(editor.layout(), &original);
    assert_eq!(editor.layout().zones[0].machines.len(), 2);
}

#[test]
fn declined_delete_leaves_no_history() {
    let mut editor = empty_editor();
    editor.add_zone();
    let depth = editor.history().undo_depth();
    let id = editor.layout().zones[0].id.clone();

    let pending = editor.request_delete_zone(&id).unwrap();
    drop(pending);

    assert_eq!(editor.layout().zones.len(), 1);
    assert_eq!(editor.history().undo_depth(), depth);
}

#[test]
fn confirm_after_undo_is_a_no_op() {
    let mut editor = empty_editor();
    let id = editor.add_zone();
    let pending = editor.request_delete_zone(&id).unwrap();
    editor.undo();
    assert!(!editor.confirm_delete(pending));
    assert!(!editor.can_undo());
}

#[test]
fn room_resize_keeps_scale_locked() {
    let mut editor = empty_editor();
    editor.set_mode(EditMode::Room);
    let locked = editor.view_window();

    assert!(editor.begin_drag(
        DragHandle::Room(gymfloor_designer::RoomHandle::Right),
        DevicePoint::new(855.0, 300.0)
    ));
    editor.pointer_move(DevicePoint::new(1255.0, 300.0), unit_canvas(), Modifiers::default());
    assert_eq!(editor.layout().dimensions.width, 1180.0);
    // The window is still the one frozen at pointer-down.
    assert_eq!(editor.view_window(), locked);

    editor.pointer_move(DevicePoint::new(1355.0, 300.0), unit_canvas(), Modifiers::default());
    assert_eq!(editor.layout().dimensions.width, 1280.0);
    editor.pointer_up();
    assert_ne!(editor.view_window(), locked);
}

#[test]
fn reducer_is_usable_without_editor() {
    let layout = Layout::new("g", "G");
    let next = gymfloor_designer::apply(
        &layout,
        &LayoutAction::AddAnnex(Annex::new("a", FloorRect::new(780.0, 0.0, 200.0, 200.0))),
        &SizeLimits::default(),
    )
    .unwrap();
    assert_eq!(next.annexes.len(), 1);
    assert!(layout.annexes.is_empty());
}
