use gymfloor_designer::History;
use proptest::prelude::*;

// =========================================================================
// Undo/redo laws
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn undo_all_restores_initial(
        initial in any::<i32>(),
        steps in proptest::collection::vec(any::<i32>(), 0..40)
    ) {
        let mut history = History::with_max_depth(initial, 100);
        for &value in &steps {
            history.update(value, true);
        }
        let last = *history.present();

        for _ in 0..steps.len() {
            prop_assert!(history.undo());
        }
        prop_assert_eq!(*history.present(), initial);
        prop_assert!(!history.undo());

        for _ in 0..steps.len() {
            prop_assert!(history.redo());
        }
        prop_assert_eq!(*history.present(), last);
        prop_assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_is_identity(
        steps in proptest::collection::vec(any::<u8>(), 1..20),
        back in 0usize..20
    ) {
        let mut history = History::new(0u8);
        for &value in &steps {
            history.update(value, true);
        }
        let before = (history.past().to_vec(), *history.present());
        let back = back.min(steps.len());
        for _ in 0..back {
            history.undo();
        }
        for _ in 0..back {
            history.redo();
        }
        prop_assert_eq!((history.past().to_vec(), *history.present()), before);
    }

    #[test]
    fn unrecorded_updates_never_grow_history(
        steps in proptest::collection::vec(any::<i64>(), 0..30)
    ) {
        let mut history = History::new(0i64);
        history.snapshot();
        for &value in &steps {
            history.update(value, false);
        }
        prop_assert_eq!(history.undo_depth(), 1);
        history.undo();
        prop_assert_eq!(*history.present(), 0);
    }

    #[test]
    fn depth_is_bounded(
        max_depth in 1usize..10,
        count in 0usize..40
    ) {
        let mut history = History::with_max_depth(0usize, max_depth);
        for value in 1..=count {
            history.update(value, true);
        }
        prop_assert_eq!(history.undo_depth(), count.min(max_depth));
        while history.undo() {}
        // The oldest surviving snapshot is the one recorded max_depth steps ago.
        prop_assert_eq!(*history.present(), count.saturating_sub(max_depth));
    }
}

// =========================================================================
// Branching
// =========================================================================

#[test]
fn new_step_after_undo_drops_redo() {
    let mut history = History::new("a");
    history.update("b", true);
    history.update("c", true);
    history.undo();
    assert!(history.can_redo());
    history.update("d", true);
    assert!(!history.can_redo());
    assert_eq!(history.past(), &["a", "b"]);
    assert_eq!(*history.present(), "d");
}

#[test]
fn discard_only_when_unchanged() {
    let mut history = History::new(1);
    history.snapshot();
    assert!(history.discard_if_unchanged());
    assert!(!history.can_undo());

    history.snapshot();
    history.update(2, false);
    assert!(!history.discard_if_unchanged());
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn reset_clears_both_stacks() {
    let mut history = History::new(1);
    history.update(2, true);
    history.update(3, true);
    history.undo();
    history.reset(10);
    assert_eq!(*history.present(), 10);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
