use story_wasm::schedule::FrameGate;

#[test]
fn burst_of_events_schedules_once() {
    let gate = FrameGate::new();
    // First event in the frame wins the scheduling slot.
    assert!(gate.try_schedule());
    // The rest of the burst coalesces into the already-pending update.
    for _ in 0..100 {
        assert!(!gate.try_schedule());
    }
    assert!(gate.is_pending());
}

#[test]
fn next_frame_reopens_the_gate() {
    let gate = FrameGate::new();
    assert!(gate.try_schedule());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.try_schedule());
}

#[test]
fn complete_without_pending_is_harmless() {
    let gate = FrameGate::new();
    gate.complete();
    assert!(gate.try_schedule());
}
