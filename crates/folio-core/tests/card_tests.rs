// Host-side tests for the card interaction state machine. Time-dependent
// behavior is driven with explicit `now_sec` values instead of a real clock.

use folio_core::card::{CardConfig, ContainerRect, DeviceClass, FlipCard};

fn desktop_card() -> FlipCard {
    FlipCard::new(CardConfig::for_device(DeviceClass::Desktop))
}

fn mobile_card() -> FlipCard {
    FlipCard::new(CardConfig::for_device(DeviceClass::Mobile))
}

// 200x300 container with its top-left corner at (100, 50)
fn rect() -> ContainerRect {
    ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 300.0,
    }
}

#[test]
fn tilt_is_zero_at_container_center() {
    let mut card = desktop_card();
    card.pointer_moved(200.0, 200.0, rect(), 0.0);

    let snap = card.snapshot(0.0);
    assert!(snap.tilt_x.abs() < 1e-6);
    assert!(snap.tilt_y.abs() < 1e-6);
}

#[test]
fn tilt_never_exceeds_configured_maxima() {
    let mut card = desktop_card();
    let max_x = card.config().max_tilt_x;
    let max_y = card.config().max_tilt_y;

    // Sweep a grid of positions inside the container
    for ix in 0..=10 {
        for iy in 0..=10 {
            let x = 100.0 + 200.0 * (ix as f32) / 10.0;
            let y = 50.0 + 300.0 * (iy as f32) / 10.0;
            card.pointer_moved(x, y, rect(), 0.0);
            let snap = card.snapshot(0.0);
            assert!(snap.tilt_x.abs() <= max_x + 1e-4);
            assert!(snap.tilt_y.abs() <= max_y + 1e-4);
        }
    }
}

#[test]
fn tilt_clamps_coordinates_outside_the_container() {
    let mut card = desktop_card();
    let max_x = card.config().max_tilt_x;
    let max_y = card.config().max_tilt_y;

    // Fast movement can report positions past the rect before the leave
    // event fires; the tilt must saturate, not overshoot.
    card.pointer_moved(10_000.0, -10_000.0, rect(), 0.0);
    let snap = card.snapshot(0.0);
    assert!((snap.tilt_y - max_y).abs() < 1e-4);
    assert!((snap.tilt_x - max_x).abs() < 1e-4); // above center tips top toward viewer
}

#[test]
fn tilt_direction_follows_pointer_offset() {
    let mut card = desktop_card();

    // Right of center: positive Y-axis rotation
    card.pointer_moved(300.0, 200.0, rect(), 0.0);
    assert!(card.snapshot(0.0).tilt_y > 0.0);

    // Below center: negative X-axis rotation
    card.pointer_moved(200.0, 350.0, rect(), 0.0);
    assert!(card.snapshot(0.0).tilt_x < 0.0);
}

#[test]
fn pointer_leave_resets_tilt_immediately() {
    let mut card = desktop_card();
    card.pointer_moved(290.0, 320.0, rect(), 0.0);
    let before = card.snapshot(0.0);
    assert!(before.tilt_x != 0.0 || before.tilt_y != 0.0);

    card.pointer_left();
    let after = card.snapshot(0.0);
    assert_eq!(after.tilt_x, 0.0);
    assert_eq!(after.tilt_y, 0.0);
}

#[test]
fn degenerate_rect_skips_the_tilt_update() {
    let mut card = desktop_card();
    card.pointer_moved(290.0, 320.0, rect(), 0.0);
    let before = card.snapshot(0.0);

    let flat = ContainerRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 300.0,
    };
    card.pointer_moved(50.0, 50.0, flat, 0.0);

    // No NaN, no change
    let after = card.snapshot(0.0);
    assert_eq!(after.tilt_x, before.tilt_x);
    assert_eq!(after.tilt_y, before.tilt_y);
    assert!(after.tilt_x.is_finite() && after.tilt_y.is_finite());
}

#[test]
fn mobile_ignores_tilt_tracking_entirely() {
    let mut card = mobile_card();

    card.pointer_moved(290.0, 320.0, rect(), 0.0);
    let snap = card.snapshot(0.0);
    assert_eq!(snap.tilt_x, 0.0);
    assert_eq!(snap.tilt_y, 0.0);

    // Still zero after a flip
    card.clicked(0.0);
    card.pointer_moved(290.0, 320.0, rect(), 10.0);
    let snap = card.snapshot(10.0);
    assert_eq!(snap.tilt_x, 0.0);
    assert_eq!(snap.tilt_y, 0.0);
}

#[test]
fn click_toggles_and_engages_the_animation_lock() {
    let mut card = desktop_card();
    let duration = card.config().flip_duration;

    // (FRONT, idle) -> click -> (BACK, locked)
    card.clicked(1.0);
    let snap = card.snapshot(1.0);
    assert!(snap.flipped);
    assert!(snap.animating);

    // Lock clears once the duration elapses, flip state stays
    let snap = card.snapshot(1.0 + duration + 0.01);
    assert!(snap.flipped);
    assert!(!snap.animating);
}

#[test]
fn click_resets_tilt_in_the_same_update() {
    let mut card = desktop_card();
    card.pointer_moved(290.0, 320.0, rect(), 0.0);

    card.clicked(0.0);
    let snap = card.snapshot(0.0);
    assert_eq!(snap.tilt_x, 0.0);
    assert_eq!(snap.tilt_y, 0.0);
}

#[test]
fn tilt_input_is_ignored_while_the_flip_is_in_flight() {
    let mut card = desktop_card();
    card.clicked(0.0);

    card.pointer_moved(290.0, 320.0, rect(), 0.1);
    let snap = card.snapshot(0.1);
    assert_eq!(snap.tilt_x, 0.0);
    assert_eq!(snap.tilt_y, 0.0);

    // Tracking resumes after the window
    let later = card.config().flip_duration + 0.1;
    card.pointer_moved(290.0, 320.0, rect(), later);
    let snap = card.snapshot(later);
    assert!(snap.tilt_x != 0.0 || snap.tilt_y != 0.0);
}

#[test]
fn retrigger_before_clear_supersedes_the_deadline() {
    let mut card = desktop_card();
    let duration = card.config().flip_duration;

    card.clicked(0.0);
    // Second click mid-animation toggles back and re-arms a full window
    card.clicked(duration / 2.0);
    let snap = card.snapshot(duration / 2.0);
    assert!(!snap.flipped);
    assert!(snap.animating);

    // Still locked where the first deadline would have cleared
    assert!(card.snapshot(duration + 0.01).animating);
    // Clear relative to the second trigger
    assert!(!card.snapshot(duration / 2.0 + duration + 0.01).animating);
}

#[test]
fn swipe_beyond_threshold_flips_in_either_direction() {
    let mut card = desktop_card();

    card.pointer_down(100.0);
    card.pointer_up(151.0, 0.0); // distance 51
    assert!(card.snapshot(0.0).flipped);

    let mut card = desktop_card();
    card.pointer_down(100.0);
    card.pointer_up(49.0, 0.0); // distance -51
    assert!(card.snapshot(0.0).flipped);
}

#[test]
fn swipe_at_or_below_threshold_does_not_flip() {
    let mut card = desktop_card();

    card.pointer_down(100.0);
    card.pointer_up(149.0, 0.0); // distance 49
    assert!(!card.snapshot(0.0).flipped);

    card.pointer_down(100.0);
    card.pointer_up(150.0, 0.0); // distance exactly 50 is not a swipe
    assert!(!card.snapshot(0.0).flipped);
}

#[test]
fn swipe_scenario_from_the_gesture_contract() {
    // down at x=100, up at x=200: flips
    let mut card = desktop_card();
    card.pointer_down(100.0);
    card.pointer_up(200.0, 0.0);
    assert!(card.snapshot(0.0).flipped);

    // down at x=100, up at x=130: unchanged by the swipe path
    card.pointer_down(100.0);
    card.pointer_up(130.0, 5.0);
    assert!(card.snapshot(5.0).flipped);
}

#[test]
fn click_following_a_swipe_release_does_not_double_toggle() {
    let mut card = desktop_card();

    // One physical gesture: down, up past the threshold, then the host's
    // click event for the same release
    card.pointer_down(100.0);
    card.pointer_up(200.0, 0.0);
    card.clicked(0.0);
    assert!(card.snapshot(0.0).flipped);
}

#[test]
fn click_after_a_short_gesture_still_flips() {
    let mut card = desktop_card();

    card.pointer_down(100.0);
    card.pointer_up(130.0, 0.0); // below threshold, swipe path idle
    card.clicked(0.0);
    assert!(card.snapshot(0.0).flipped);
}

#[test]
fn fresh_pointer_down_reseeds_the_gesture() {
    let mut card = desktop_card();

    card.pointer_down(0.0);
    card.pointer_up(30.0, 0.0);
    // New gesture measures from its own origin, not the previous one
    card.pointer_down(500.0);
    card.pointer_up(530.0, 1.0);
    assert!(!card.snapshot(1.0).flipped);
}

#[test]
fn pointer_up_without_a_down_is_a_no_op() {
    let mut card = desktop_card();
    card.pointer_up(1_000.0, 0.0);
    assert!(!card.snapshot(0.0).flipped);
}

#[test]
fn swipe_resets_tilt_and_locks_like_the_click_path() {
    let mut card = desktop_card();
    card.pointer_moved(290.0, 320.0, rect(), 0.0);

    card.pointer_down(100.0);
    card.pointer_up(200.0, 0.0);

    let snap = card.snapshot(0.0);
    assert!(snap.flipped);
    assert!(snap.animating);
    assert_eq!(snap.tilt_x, 0.0);
    assert_eq!(snap.tilt_y, 0.0);
}

#[test]
fn rotate_y_composes_flip_and_tilt() {
    let mut card = desktop_card();

    // Front face: the render angle is the tilt itself
    card.pointer_moved(300.0, 200.0, rect(), 0.0);
    let snap = card.snapshot(0.0);
    assert_eq!(snap.rotate_y(), snap.tilt_y);
    assert_eq!(snap.rotate_x(), snap.tilt_x);

    // Back face: the same tilt rides on top of the half-turn
    card.clicked(1.0);
    let after = card.config().flip_duration + 1.1;
    card.pointer_moved(300.0, 200.0, rect(), after);
    let snap = card.snapshot(after);
    assert!(snap.flipped);
    assert_eq!(snap.rotate_y(), -180.0 + snap.tilt_y);
}

#[test]
fn mobile_uses_the_shorter_flip_duration() {
    let mobile = CardConfig::for_device(DeviceClass::Mobile);
    let desktop = CardConfig::for_device(DeviceClass::Desktop);
    assert!(mobile.flip_duration < desktop.flip_duration);

    // Mobile can still flip by click and by swipe
    let mut card = mobile_card();
    card.clicked(0.0);
    assert!(card.snapshot(0.0).flipped);
    card.pointer_down(0.0);
    card.pointer_up(100.0, 10.0);
    assert!(!card.snapshot(10.0).flipped);
}
