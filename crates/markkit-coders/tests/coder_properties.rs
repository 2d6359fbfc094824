use chrono::NaiveDate;
use markkit_coders::{
    seeded_rng, Coder, CoderRegistry, CoderStrategy, CoderType, DateTimeCoder, FixedClock,
    NoCodeCoder, RandomNumberCoder, SerialNumberCoder, VinCoder, VIN_LENGTH,
};
use markkit_core::CoderConfiguration;
use proptest::prelude::*;
use std::sync::Arc;

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap(),
    ))
}

fn serial(reset_on_max: bool, repeat_count: i64) -> SerialNumberCoder {
    let mut coder = SerialNumberCoder::default();
    coder
        .set_configuration(
            &CoderConfiguration::new()
                .with("startValue", 1000)
                .with("stepValue", 1)
                .with("maxValue", 1002)
                .with("repeatCount", repeat_count)
                .with("resetOnMax", reset_on_max),
        )
        .unwrap();
    coder
}

#[test]
fn test_vin_is_always_17_chars() {
    let mut coder = VinCoder::with_rng(seeded_rng(5));
    for prefix in ["", "1", "JH", "WVW", "sal1234"] {
        for sequential in [false, true] {
            coder
                .set_configuration(
                    &CoderConfiguration::new()
                        .with("wmiPrefix", prefix)
                        .with("useSequential", sequential),
                )
                .unwrap();
            for _ in 0..100 {
                assert_eq!(coder.generate_code().chars().count(), VIN_LENGTH);
            }
        }
    }
}

#[test]
fn test_serial_wraps_after_max() {
    let mut coder = serial(true, 1);
    let codes: Vec<String> = (0..4).map(|_| coder.generate_code()).collect();
    assert_eq!(codes, vec!["01000", "01001", "01002", "01000"]);
}

#[test]
fn test_serial_saturates_at_max() {
    let mut coder = serial(false, 1);
    let codes = coder.generate_batch(3);
    assert_eq!(codes, vec!["01000", "01001", "01002"]);
    for _ in 0..20 {
        assert_eq!(coder.generate_code(), "01002");
    }
}

#[test]
fn test_serial_repeats_each_value() {
    let mut coder = serial(true, 3);
    let first: Vec<String> = coder.generate_batch(3);
    assert!(first.iter().all(|c| c == "01000"));
    assert_eq!(coder.generate_code(), "01001");
}

#[test]
fn test_random_degenerate_range() {
    let mut coder = RandomNumberCoder::with_rng(seeded_rng(8));
    coder
        .set_configuration(
            &CoderConfiguration::new()
                .with("fixedLength", false)
                .with("minValue", 5)
                .with("maxValue", 5),
        )
        .unwrap();
    for _ in 0..100 {
        assert_eq!(coder.generate_code(), "5");
    }
}

#[test]
fn test_random_fixed_length_10000_samples() {
    let mut coder = RandomNumberCoder::with_rng(seeded_rng(2024));
    coder
        .set_configuration(
            &CoderConfiguration::new()
                .with("fixedLength", true)
                .with("length", 4),
        )
        .unwrap();
    for _ in 0..10_000 {
        let code = coder.generate_code();
        assert_eq!(code.len(), 4);
        assert!(code.as_str() >= "1000" && code.as_str() <= "9999", "{}", code);
    }
}

#[test]
fn test_no_code_passthrough() {
    let mut coder = NoCodeCoder::default();
    coder
        .set_configuration(&CoderConfiguration::new().with("userText", "ABC"))
        .unwrap();
    assert_eq!(coder.generate_code(), "ABC");
}

#[test]
fn test_date_time_with_fixed_clock() {
    let mut coder = DateTimeCoder::with_clock(fixed_clock());
    coder
        .set_configuration(&CoderConfiguration::new().with("format", "YYYYMMDD"))
        .unwrap();
    assert_eq!(coder.generate_code(), "20240305");

    coder
        .set_configuration(&CoderConfiguration::new().with("format", "HHMMSS"))
        .unwrap();
    assert_eq!(coder.generate_code(), "140709");
}

#[test]
fn test_validation_keeps_prior_configuration() {
    let mut coder = RandomNumberCoder::with_rng(seeded_rng(1));
    coder
        .set_configuration(
            &CoderConfiguration::new()
                .with("minValue", 1)
                .with("maxValue", 50),
        )
        .unwrap();
    let before = coder.configuration();

    let err = coder
        .set_configuration(
            &CoderConfiguration::new()
                .with("minValue", 10)
                .with("maxValue", 5),
        )
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(coder.configuration(), before);
}

#[test]
fn test_round_trip_preserves_output_for_every_coder() {
    let registry = CoderRegistry::deterministic(fixed_clock(), 77);
    for coder_type in CoderType::ALL {
        let mut original = registry.create_by_type(coder_type).unwrap();
        original.generate_batch(3);

        let mut round_tripped = original.clone();
        let config = round_tripped.configuration();
        round_tripped.set_configuration(&config).unwrap();

        assert_eq!(
            original.generate_batch(10),
            round_tripped.generate_batch(10),
            "{}",
            coder_type
        );
    }
}

#[test]
fn test_restored_counters_continue_sequence() {
    let registry = CoderRegistry::with_defaults();
    let mut live = registry.create_coder("Serial Number").unwrap();
    live.set_configuration(
        &CoderConfiguration::new()
            .with("startValue", 10)
            .with("repeatCount", 2),
    )
    .unwrap();
    live.generate_batch(3);
    let saved = live.configuration();

    let json = serde_json::to_string(&saved).unwrap();
    let loaded: CoderConfiguration = serde_json::from_str(&json).unwrap();

    let mut restored = registry.create_coder("Serial Number").unwrap();
    restored.set_configuration(&loaded).unwrap();
    assert_eq!(restored.generate_batch(4), live.generate_batch(4));
}

#[test]
fn test_preview_never_changes_next_code() {
    let registry = CoderRegistry::deterministic(fixed_clock(), 3);
    for coder_type in CoderType::ALL {
        let mut with_preview: Coder = registry.create_by_type(coder_type).unwrap();
        let mut without_preview = with_preview.clone();

        for _ in 0..5 {
            let _ = with_preview.preview();
            let _ = with_preview.preview();
            assert_eq!(
                with_preview.generate_code(),
                without_preview.generate_code(),
                "{}",
                coder_type
            );
        }
    }
}

proptest! {
    #[test]
    fn prop_fixed_length_random_has_exact_digits(length in 1u32..=18, seed in any::<u64>()) {
        let mut coder = RandomNumberCoder::with_rng(seeded_rng(seed));
        coder.set_configuration(&CoderConfiguration::new().with("length", length)).unwrap();
        for _ in 0..20 {
            let code = coder.generate_code();
            prop_assert_eq!(code.len(), length as usize);
            prop_assert!(code.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn prop_range_random_stays_in_bounds(
        min in -1_000_000i64..1_000_000,
        span in 0i64..1_000_000,
        seed in any::<u64>(),
    ) {
        let max = min + span;
        let mut coder = RandomNumberCoder::with_rng(seeded_rng(seed));
        coder.set_configuration(
            &CoderConfiguration::new()
                .with("fixedLength", false)
                .with("minValue", min)
                .with("maxValue", max),
        ).unwrap();
        for _ in 0..20 {
            let value: i64 = coder.generate_code().parse().unwrap();
            prop_assert!(value >= min && value <= max);
        }
    }

    #[test]
    fn prop_serial_stays_within_bounds(
        start in 0i64..1000,
        span in 0i64..1000,
        step in 1i64..50,
        repeat in 1i64..4,
        reset_on_max in any::<bool>(),
    ) {
        let max = start + span;
        let mut coder = SerialNumberCoder::default();
        coder.set_configuration(
            &CoderConfiguration::new()
                .with("startValue", start)
                .with("stepValue", step)
                .with("maxValue", max)
                .with("repeatCount", repeat)
                .with("resetOnMax", reset_on_max),
        ).unwrap();
        for _ in 0..100 {
            let value: i64 = coder.generate_code().parse().unwrap();
            prop_assert!(value >= start && value <= max);
        }
    }

    #[test]
    fn prop_vin_prefix_round_trip(prefix in "[A-HJ-NPR-Z0-9]{0,5}", seed in any::<u64>()) {
        let mut coder = VinCoder::with_rng(seeded_rng(seed));
        coder.set_configuration(&CoderConfiguration::new().with("wmiPrefix", prefix.as_str())).unwrap();
        let vin = coder.generate_code();
        prop_assert_eq!(vin.len(), VIN_LENGTH);
        let expected: String = prefix.chars().take(3).collect();
        prop_assert!(vin.starts_with(&expected));
    }
}
