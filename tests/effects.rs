use rstest::rstest;
use waves_wasm::counter::CounterAnimation;
use waves_wasm::scroll::{hero_offset, indicator_opacity, ScrollThrottle};
use waves_wasm::WaveError;

fn run(counter: &mut CounterAnimation) -> Vec<String> {
    let mut labels = Vec::new();
    while !counter.is_finished() {
        labels.push(counter.tick());
        assert!(labels.len() < 10_000, "counter never finished");
    }
    labels
}

#[test]
fn counter_counts_up_with_plus() {
    let mut counter = CounterAnimation::from_attribute("1500").unwrap();
    let labels = run(&mut counter);

    assert_eq!(labels.len(), 125);
    assert_eq!(labels[0], "12+");
    assert_eq!(labels.last().unwrap(), "1500+");
    assert!(labels.iter().all(|label| label.ends_with('+')));
}

#[test]
fn counter_of_one_hundred_has_no_suffix() {
    let mut counter = CounterAnimation::from_attribute("100").unwrap();
    let labels = run(&mut counter);

    assert_eq!(labels[0], "1");
    assert_eq!(labels.last().unwrap(), "100");
    assert!(labels.iter().all(|label| !label.ends_with('+')));
}

#[test]
fn counter_labels_never_decrease() {
    let mut counter = CounterAnimation::from_attribute(" 37 ").unwrap();
    let values: Vec<u32> = run(&mut counter)
        .iter()
        .map(|label| label.trim_end_matches('+').parse().unwrap())
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(*values.last().unwrap(), 37);
}

#[test]
fn finished_counter_stays_on_target() {
    let mut counter = CounterAnimation::new(5, 0.0, 16.0);
    assert_eq!(counter.tick(), "5+");
    assert!(counter.is_finished());
    assert_eq!(counter.tick(), "5+");
}

#[test]
fn zero_target_finishes_immediately() {
    let mut counter = CounterAnimation::from_attribute("0").unwrap();
    assert_eq!(counter.tick(), "0+");
    assert!(counter.is_finished());
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("-5")]
#[case("12.5")]
#[case("12px")]
fn counter_rejects_bad_targets(#[case] raw: &str) {
    assert_eq!(
        CounterAnimation::from_attribute(raw).unwrap_err(),
        WaveError::InvalidCounterTarget(raw.to_string())
    );
}

#[rstest]
#[case(0.0, 800.0, Some(0.0))]
#[case(100.0, 800.0, Some(-15.0))]
#[case(799.0, 800.0, Some(-119.85))]
#[case(800.0, 800.0, None)]
#[case(2000.0, 800.0, None)]
fn hero_parallax(#[case] scrolled: f64, #[case] viewport: f64, #[case] expected: Option<f64>) {
    match (hero_offset(scrolled, viewport), expected) {
        (Some(actual), Some(expected)) => assert!((actual - expected).abs() < 1e-9),
        (actual, expected) => assert_eq!(actual, expected),
    }
}

#[rstest]
#[case(0.0, Some(1.0))]
#[case(25.0, Some(0.75))]
#[case(99.0, Some(0.01))]
#[case(100.0, None)]
#[case(400.0, None)]
fn indicator_fades(#[case] scrolled: f64, #[case] expected: Option<f64>) {
    match (indicator_opacity(scrolled), expected) {
        (Some(actual), Some(expected)) => assert!((actual - expected).abs() < 1e-9),
        (actual, expected) => assert_eq!(actual, expected),
    }
}

#[test]
fn scroll_updates_coalesce_per_frame() {
    let mut throttle = ScrollThrottle::default();
    assert!(throttle.on_scroll());
    assert!(!throttle.on_scroll());
    assert!(!throttle.on_scroll());
    throttle.on_frame();
    assert!(throttle.on_scroll());
}

#[test]
fn failed_frame_request_does_not_block_later_scrolls() {
    let mut throttle = ScrollThrottle::default();
    assert_eq!(throttle.request(|| Err("no frame")), Err("no frame"));
    assert_eq!(throttle.request(|| Ok::<(), &str>(())), Ok(true));
    assert_eq!(throttle.request(|| Ok::<(), &str>(())), Ok(false));
    throttle.on_frame();
    assert_eq!(throttle.request(|| Ok::<(), &str>(())), Ok(true));
}
