use story_wasm::fade::{FadePlan, FADE_STEPS};

#[test]
fn fade_out_reaches_zero_exactly() {
    let plan = FadePlan::new(0.3, 0.0);
    assert_eq!(plan.volume_at(FADE_STEPS), 0.0);
}

#[test]
fn fade_out_is_monotonic() {
    let plan = FadePlan::new(0.3, 0.0);
    let mut prev = plan.volume_at(0);
    assert_eq!(prev, 0.3);
    for step in 1..=FADE_STEPS {
        let v = plan.volume_at(step);
        assert!(v <= prev, "volume rose at step {step}: {v} > {prev}");
        prev = v;
    }
}

#[test]
fn fade_in_endpoints() {
    let plan = FadePlan::new(0.0, 0.3);
    assert_eq!(plan.volume_at(0), 0.0);
    assert_eq!(plan.volume_at(FADE_STEPS), 0.3);
    // Halfway through a 0 -> 0.3 ramp.
    assert!((plan.volume_at(FADE_STEPS / 2) - 0.15).abs() < 1e-12);
}

#[test]
fn volume_clamped_to_media_range() {
    let plan = FadePlan::new(0.9, 1.5);
    assert_eq!(plan.volume_at(FADE_STEPS), 1.0);
    let plan = FadePlan::new(0.1, -0.5);
    assert_eq!(plan.volume_at(FADE_STEPS), 0.0);
}

#[test]
fn steps_past_the_end_hold_the_target() {
    let plan = FadePlan::new(0.3, 0.0);
    assert_eq!(plan.volume_at(FADE_STEPS + 5), 0.0);
}

#[test]
fn interval_partitions_duration() {
    let plan = FadePlan::new(0.3, 0.0);
    assert_eq!(plan.step_interval_ms(500.0), 25.0);
    assert_eq!(plan.step_interval_ms(500.0) * FADE_STEPS as f64, 500.0);
}
