use super::*;

use heapless::Vec;

#[derive(Default)]
struct RecordingSink {
    selections: Vec<usize, 32>,
}

impl RotationSink for RecordingSink {
    fn selection_changed(&mut self, index: usize) {
        let _ = self.selections.push(index);
    }
}

fn controller(
    item_count: usize,
    interval_ms: u32,
    resume_delay_ms: u32,
) -> RotationController<RecordingSink> {
    let config = RotationConfig {
        interval_ms,
        resume_delay_ms,
    };
    RotationController::new(item_count, config, RecordingSink::default())
        .expect("valid test config")
}

#[test]
fn zero_interval_is_rejected() {
    let config = RotationConfig {
        interval_ms: 0,
        resume_delay_ms: 1_000,
    };
    let result = RotationController::new(3, config, RecordingSink::default());
    assert!(matches!(result, Err(RotationConfigError::ZeroInterval)));
}

#[test]
fn start_selects_first_item_and_is_idempotent() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);

    assert_eq!(rotation.selected_index(), Some(0));
    assert_eq!(rotation.sink().selections.as_slice(), &[0]);
    assert_eq!(rotation.next_deadline_ms(), Some(1_000));

    rotation.start(400);
    assert_eq!(rotation.sink().selections.as_slice(), &[0]);
    assert_eq!(rotation.next_deadline_ms(), Some(1_000));
}

#[test]
fn advances_once_per_interval_and_wraps() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);

    rotation.tick(999);
    assert_eq!(rotation.selected_index(), Some(0));

    rotation.tick(1_000);
    assert_eq!(rotation.selected_index(), Some(1));
    rotation.tick(2_000);
    assert_eq!(rotation.selected_index(), Some(2));
    rotation.tick(3_000);
    assert_eq!(rotation.selected_index(), Some(0));

    assert_eq!(rotation.sink().selections.as_slice(), &[0, 1, 2, 0]);
}

#[test]
fn late_tick_catches_up_one_step_per_elapsed_interval() {
    let mut rotation = controller(4, 1_000, 500);
    rotation.start(0);

    rotation.tick(3_100);

    assert_eq!(rotation.sink().selections.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(rotation.next_deadline_ms(), Some(4_000));
}

#[test]
fn select_validates_range_and_reports_changes() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);

    assert_eq!(rotation.select(3), Err(SelectError::OutOfRange));

    assert_eq!(rotation.select(2), Ok(()));
    assert_eq!(rotation.selected_index(), Some(2));

    // Re-selecting the current index stays silent.
    assert_eq!(rotation.select(2), Ok(()));
    assert_eq!(rotation.sink().selections.as_slice(), &[0, 2]);
}

#[test]
fn suspension_freezes_selection_across_intervals() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);
    rotation.tick(1_000);

    rotation.notify_interaction_start();
    assert!(rotation.is_suspended());
    assert_eq!(rotation.next_deadline_ms(), None);

    rotation.tick(2_000);
    rotation.tick(5_000);
    rotation.tick(60_000);
    assert_eq!(rotation.selected_index(), Some(1));
    assert_eq!(rotation.sink().selections.as_slice(), &[0, 1]);
}

#[test]
fn repeated_interaction_start_coalesces() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);

    rotation.notify_interaction_start();
    rotation.notify_interaction_start();
    rotation.notify_interaction_start();

    assert!(rotation.is_suspended());
    assert_eq!(rotation.next_deadline_ms(), None);
}

#[test]
fn resume_is_debounced_last_call_wins() {
    let mut rotation = controller(3, 5_000, 3_000);
    rotation.start(0);
    rotation.tick(5_000);

    rotation.notify_interaction_start();
    rotation.notify_interaction_end(6_000);
    assert_eq!(rotation.next_deadline_ms(), Some(9_000));

    // Interaction returns before the cooldown elapses: the pending resume is
    // superseded and the window restarts from the later end.
    rotation.notify_interaction_start();
    assert_eq!(rotation.next_deadline_ms(), None);
    rotation.notify_interaction_end(8_000);
    assert_eq!(rotation.next_deadline_ms(), Some(11_000));

    rotation.tick(9_000);
    assert!(rotation.is_suspended());
    assert_eq!(rotation.selected_index(), Some(1));

    rotation.tick(11_000);
    assert!(!rotation.is_suspended());
    assert_eq!(rotation.selected_index(), Some(1));

    rotation.tick(16_000);
    assert_eq!(rotation.selected_index(), Some(2));
}

#[test]
fn resume_waits_a_full_interval_before_advancing() {
    let mut rotation = controller(4, 5_000, 3_000);
    rotation.start(0);
    rotation.tick(5_000);
    assert_eq!(rotation.selected_index(), Some(1));

    rotation.notify_interaction_start();
    rotation.notify_interaction_end(6_000);

    rotation.tick(9_000);
    assert_eq!(rotation.selected_index(), Some(1));
    rotation.tick(13_999);
    assert_eq!(rotation.selected_index(), Some(1));
    rotation.tick(14_000);
    assert_eq!(rotation.selected_index(), Some(2));
}

#[test]
fn interaction_end_without_start_is_ignored() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);

    rotation.notify_interaction_end(100);
    assert_eq!(rotation.next_deadline_ms(), Some(1_000));

    rotation.tick(1_000);
    assert_eq!(rotation.selected_index(), Some(1));
}

#[test]
fn dispose_silences_previously_scheduled_deadlines() {
    let mut rotation = controller(3, 1_000, 500);
    rotation.start(0);
    rotation.dispose();

    assert_eq!(rotation.next_deadline_ms(), None);

    rotation.tick(10_000);
    rotation.notify_interaction_start();
    rotation.notify_interaction_end(10_000);
    rotation.start(10_000);
    assert_eq!(rotation.sink().selections.as_slice(), &[0]);
    assert!(!rotation.is_running());
}

#[test]
fn empty_collection_is_inert() {
    let mut rotation = controller(0, 1_000, 500);

    rotation.start(0);
    assert!(!rotation.is_running());
    assert_eq!(rotation.selected_index(), None);
    assert_eq!(rotation.select(0), Err(SelectError::OutOfRange));

    rotation.notify_interaction_start();
    rotation.notify_interaction_end(100);
    rotation.tick(10_000);
    assert!(rotation.sink().selections.is_empty());
}
