use gymfloor_core::{
    default_layout, DevicePoint, DeviceSize, FloorRect, Layout, LayoutEvent, Zone, ZoneType,
};
use gymfloor_designer::{
    DeleteTarget, DragHandle, EditMode, Editor, EditorConfig, FieldEdit, Key, KeyOutcome,
    LayoutField, Modifiers, ZoneField,
};

fn editor() -> Editor {
    Editor::new(default_layout(), EditorConfig::default())
}

fn ctrl() -> Modifiers {
    Modifiers {
        ctrl: true,
        ..Modifiers::default()
    }
}

#[test]
fn test_zone_handles_only_in_layout_mode() {
    let mut editor = editor();
    editor.set_mode(EditMode::Room);
    assert!(!editor.begin_drag(
        DragHandle::ZoneBody("zone-turf".into()),
        DevicePoint::new(0.0, 0.0)
    ));
    assert!(!editor.interaction().is_dragging());

    editor.set_mode(EditMode::Layout);
    assert!(editor.begin_drag(
        DragHandle::ZoneBody("zone-turf".into()),
        DevicePoint::new(0.0, 0.0)
    ));
    assert!(editor.interaction().is_dragging());
    assert_eq!(editor.selection().zone_id(), Some("zone-turf"));
}

#[test]
fn test_machine_handles_need_selected_zone() {
    let mut editor = editor();
    editor.set_mode(EditMode::Machine);
    let handle = DragHandle::MachineBody {
        zone_id: "zone-racks".into(),
        machine_id: "rack-1".into(),
    };
    assert!(!editor.can_drag(&handle));

    assert!(editor.select_zone("zone-racks"));
    assert!(editor.can_drag(&handle));
    assert!(editor.begin_drag(handle, DevicePoint::new(0.0, 0.0)));
    assert_eq!(editor.selection().machine_id(), Some("rack-1"));
}

#[test]
fn test_machine_mode_uses_focused_view() {
    let mut editor = editor();
    editor.set_mode(EditMode::Machine);
    editor.select_zone("zone-racks");
    let window = editor.view_window();
    assert_eq!(window.box_width, 500.0);
    assert_eq!(window.offset_x, 150.0 - 540.0);
}

#[test]
fn test_switching_mode_clears_selection() {
    let mut editor = editor();
    editor.select_zone("zone-turf");
    editor.set_mode(EditMode::Machine);
    assert_eq!(editor.selection().zone_id(), None);
}

#[test]
fn test_click_without_move_leaves_no_undo_step() {
    let mut editor = editor();
    assert!(editor.begin_drag(
        DragHandle::ZoneBody("zone-turf".into()),
        DevicePoint::new(10.0, 10.0)
    ));
    assert_eq!(editor.history().undo_depth(), 1);
    editor.pointer_up();
    assert_eq!(editor.history().undo_depth(), 0);
}

#[test]
fn test_drag_records_a_single_step() {
    let mut editor = editor();
    let before = editor.layout().clone();
    let canvas = DeviceSize::new(930.0, 730.0);
    editor.begin_drag(
        DragHandle::ZoneBody("zone-machines-1".into()),
        DevicePoint::new(0.0, 0.0),
    );
    for step in 1..=5 {
        editor.pointer_move(
            DevicePoint::new(-(step as f64) * 7.0, 0.0),
            canvas,
            Modifiers::default(),
        );
    }
    editor.pointer_up();
    assert_eq!(editor.history().undo_depth(), 1);
    assert_ne!(editor.layout(), &before);
    editor.undo();
    assert_eq!(editor.layout(), &before);
}

#[test]
fn test_pointer_move_without_drag_is_ignored() {
    let mut editor = editor();
    assert!(!editor.pointer_move(
        DevicePoint::new(10.0, 10.0),
        DeviceSize::new(100.0, 100.0),
        Modifiers::default()
    ));
    assert!(!editor.pointer_up());
}

#[test]
fn test_field_edit_is_one_undo_step() {
    let mut editor = editor();
    editor.begin_edit();
    for name in ["T", "Tr", "Tre", "Tread"] {
        editor.apply_edit(FieldEdit::Zone {
            zone_id: "zone-cardio-1".into(),
            field: ZoneField::Name(name.into()),
        });
    }
    editor.end_edit();
    assert_eq!(editor.layout().zone("zone-cardio-1").unwrap().name, "Tread");
    assert_eq!(editor.history().undo_depth(), 1);
    editor.undo();
    assert_eq!(
        editor.layout().zone("zone-cardio-1").unwrap().name,
        "Treadmills"
    );
}

#[test]
fn test_focus_without_typing_leaves_no_step() {
    let mut editor = editor();
    editor.begin_edit();
    editor.end_edit();
    assert!(!editor.can_undo());
}

#[test]
fn test_edit_outside_focus_records_itself() {
    let mut editor = editor();
    assert!(editor.apply_edit(FieldEdit::Layout(LayoutField::Name("Downtown".into()))));
    assert_eq!(editor.layout().name, "Downtown");
    assert_eq!(editor.history().undo_depth(), 1);
}

#[test]
fn test_delete_key_requests_confirmation() {
    let mut editor = editor();
    editor.select_zone("zone-bench");
    let outcome = editor.handle_key(Key::Delete, Modifiers::default());
    let KeyOutcome::ConfirmDelete(pending) = outcome else {
        panic!("expected a pending delete, got {:?}", outcome);
    };
    assert_eq!(pending.target(), &DeleteTarget::Zone("zone-bench".into()));
    assert!(editor.layout().has_zone("zone-bench"));
    assert!(editor.confirm_delete(pending));
    assert!(!editor.layout().has_zone("zone-bench"));
    assert_eq!(editor.selection().zone_id(), None);
}

#[test]
fn test_backspace_ignored_while_typing() {
    let mut editor = editor();
    editor.select_zone("zone-bench");
    editor.begin_edit();
    assert_eq!(
        editor.handle_key(Key::Backspace, Modifiers::default()),
        KeyOutcome::Ignored
    );
}

#[test]
fn test_delete_key_in_machine_mode_targets_machine() {
    let mut editor = editor();
    editor.set_mode(EditMode::Machine);
    editor.select_machine("zone-racks", "rack-2");
    match editor.handle_key(Key::Backspace, Modifiers::default()) {
        KeyOutcome::ConfirmDelete(pending) => assert_eq!(
            pending.target(),
            &DeleteTarget::Machine {
                zone_id: "zone-racks".into(),
                machine_id: "rack-2".into()
            }
        ),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_undo_redo_shortcuts() {
    let mut editor = editor();
    editor.add_corridor();
    assert_eq!(editor.handle_key(Key::Char('z'), ctrl()), KeyOutcome::Undone);
    let redo = Modifiers {
        shift: true,
        ..ctrl()
    };
    assert_eq!(editor.handle_key(Key::Char('Z'), redo), KeyOutcome::Redone);
    assert_eq!(editor.handle_key(Key::Char('y'), ctrl()), KeyOutcome::Ignored);
    assert_eq!(
        editor.handle_key(Key::Char('z'), Modifiers::default()),
        KeyOutcome::Ignored
    );
}

#[test]
fn test_add_machine_fits_small_zone() {
    let mut editor = editor();
    let id = editor.add_machine("zone-cardio-2").unwrap();
    let zone = editor.layout().zone("zone-cardio-2").unwrap();
    let machine = zone.machine(&id).unwrap();
    assert!(zone.local_bounds().contains_rect(&machine.rect));
    assert!(editor.add_machine("missing").is_none());
}

#[test]
fn test_add_annex_at_room_edge() {
    let mut editor = editor();
    let id = editor.add_annex();
    let annex = editor.layout().annex(&id).unwrap();
    assert_eq!((annex.rect.x, annex.rect.y), (780.0, 0.0));
    assert_eq!((annex.rect.width, annex.rect.height), (200.0, 200.0));
}

#[test]
fn test_corridor_is_structural() {
    let mut editor = editor();
    let id = editor.add_corridor();
    let zone = editor.layout().zone(&id).unwrap();
    assert!(zone.is_structural());
    assert_eq!(zone.description, "Main walkway");
}

#[test]
fn test_events_published() {
    let mut editor = editor();
    let mut rx = editor.events().subscribe();
    editor.add_zone();
    let first = rx.try_recv().unwrap();
    assert!(matches!(first, LayoutEvent::DocumentReplaced { .. }));
    let second = rx.try_recv().unwrap();
    assert!(matches!(second, LayoutEvent::SelectionChanged { zone_id: Some(_), .. }));
}

#[test]
fn test_load_resets_history() {
    let mut editor = editor();
    editor.add_zone();
    editor.load(gymfloor_core::Layout::new_location());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert!(editor.layout().zones.is_empty());
}

#[test]
fn test_zero_height_zone_is_repaired_on_load() {
    let flat = Layout::new("g", "G").with_zone_added(Zone::new(
        "flat",
        "Flat",
        ZoneType::Cardio,
        FloorRect::new(100.0, 100.0, 100.0, 0.0),
        "#fff",
    ));
    let mut editor = Editor::new(flat.clone(), EditorConfig::default());
    assert_eq!(
        editor.layout().zone("flat").unwrap().rect,
        FloorRect::new(100.0, 100.0, 100.0, 40.0)
    );

    assert!(editor.begin_drag(
        DragHandle::ZoneResize("flat".into()),
        DevicePoint::new(0.0, 0.0)
    ));
    editor.pointer_move(
        DevicePoint::new(0.0, 50.0),
        DeviceSize::new(930.0, 730.0),
        Modifiers::shift(),
    );
    editor.pointer_up();
    assert!(editor.layout().validate().is_ok());
    let window = editor.view_window();
    assert!(window.box_width.is_finite() && window.offset_x.is_finite());

    editor.load(flat);
    assert!(editor.layout().validate().is_ok());
}

#[test]
fn test_click_at_history_cap_keeps_oldest_step() {
    let config = EditorConfig {
        history_depth: 2,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(Layout::new("g", "G"), config);
    let zone_id = editor.add_zone();
    editor.add_annex();
    assert_eq!(editor.history().undo_depth(), 2);

    assert!(editor.begin_drag(DragHandle::ZoneBody(zone_id), DevicePoint::new(5.0, 5.0)));
    editor.pointer_up();
    assert_eq!(editor.history().undo_depth(), 2);

    while editor.undo() {}
    assert!(editor.layout().zones.is_empty());
    assert!(editor.layout().annexes.is_empty());
}

#[test]
fn test_mode_switch_ends_field_edit() {
    let mut editor = editor();
    editor.begin_edit();
    editor.set_mode(EditMode::Room);
    assert!(!editor.is_editing_field());
    editor.set_mode(EditMode::Layout);
    editor.select_zone("zone-bench");
    assert!(matches!(
        editor.handle_key(Key::Delete, Modifiers::default()),
        KeyOutcome::ConfirmDelete(_)
    ));
}

#[test]
fn test_annex_selection_is_published() {
    let mut editor = editor();
    editor.set_mode(EditMode::Room);
    let annex_id = editor.add_annex();
    let mut rx = editor.events().subscribe();
    editor.clear_selection();
    assert!(editor.select_annex(&annex_id));
    let mut last = None;
    while let Ok(event) = rx.try_recv() {
        last = Some(event);
    }
    assert_eq!(
        last,
        Some(LayoutEvent::SelectionChanged {
            zone_id: None,
            machine_id: None,
            annex_id: Some(annex_id),
        })
    );
}
