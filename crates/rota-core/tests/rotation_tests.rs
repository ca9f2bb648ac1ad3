//! Tests for base schedule generation: window tiling, round-robin order,
//! clipping, and input validation.

use chrono::{DateTime, TimeZone, Utc};
use rota_core::{generate_base_schedule, RotaError, Rotation, Window};

fn day(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, 0, 0, 0).unwrap()
}

fn weekly_pair() -> Rotation {
    Rotation {
        users: vec!["alice".to_string(), "bob".to_string()],
        handover_start_at: day(2024, 1, 1),
        handover_interval_days: 7,
    }
}

#[test]
fn two_user_weekly_rotation_tiles_window() {
    // Window covers exactly two periods: alice then bob.
    let window = Window {
        from: day(2024, 1, 1),
        until: day(2024, 1, 15),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].user, "alice");
    assert_eq!(entries[0].start_at, day(2024, 1, 1));
    assert_eq!(entries[0].end_at, day(2024, 1, 8));
    assert_eq!(entries[1].user, "bob");
    assert_eq!(entries[1].start_at, day(2024, 1, 8));
    assert_eq!(entries[1].end_at, day(2024, 1, 15));
}

#[test]
fn rotation_wraps_around_round_robin() {
    let rotation = Rotation {
        users: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        handover_start_at: day(2024, 1, 1),
        handover_interval_days: 1,
    };
    let window = Window {
        from: day(2024, 1, 1),
        until: day(2024, 1, 6),
    };

    let entries = generate_base_schedule(&rotation, &window).unwrap();

    let users: Vec<&str> = entries.iter().map(|e| e.user.as_str()).collect();
    assert_eq!(users, ["a", "b", "c", "a", "b"]);
}

#[test]
fn window_clips_partial_periods() {
    // Window starts mid-period and ends mid-period.
    let window = Window {
        from: day(2024, 1, 3),
        until: day(2024, 1, 10),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].user, "alice");
    assert_eq!(entries[0].start_at, day(2024, 1, 3));
    assert_eq!(entries[0].end_at, day(2024, 1, 8));
    assert_eq!(entries[1].user, "bob");
    assert_eq!(entries[1].start_at, day(2024, 1, 8));
    assert_eq!(entries[1].end_at, day(2024, 1, 10));
}

#[test]
fn window_starting_at_handover_boundary_picks_next_user() {
    let window = Window {
        from: day(2024, 1, 8),
        until: day(2024, 1, 15),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "bob");
    assert_eq!(entries[0].start_at, day(2024, 1, 8));
    assert_eq!(entries[0].end_at, day(2024, 1, 15));
}

#[test]
fn from_before_anchor_starts_coverage_at_anchor() {
    // Nothing precedes the first handover; the first entry starts at the
    // anchor, not at `from`.
    let window = Window {
        from: day(2023, 12, 25),
        until: day(2024, 1, 8),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "alice");
    assert_eq!(entries[0].start_at, day(2024, 1, 1));
    assert_eq!(entries[0].end_at, day(2024, 1, 8));
}

#[test]
fn window_entirely_before_anchor_is_empty() {
    let window = Window {
        from: day(2023, 11, 1),
        until: day(2023, 12, 1),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert!(entries.is_empty());
}

#[test]
fn far_future_window_lands_on_correct_participant() {
    // 2020-01-01 to 2030-01-01 is 3653 days (leap years 2020, 2024, 2028).
    // 3653 % 3 == 2, so the window falls in carol's period.
    let rotation = Rotation {
        users: vec!["alice".to_string(), "bob".to_string(), "carol".to_string()],
        handover_start_at: day(2020, 1, 1),
        handover_interval_days: 1,
    };
    let window = Window {
        from: day(2030, 1, 1),
        until: day(2030, 1, 2),
    };

    let entries = generate_base_schedule(&rotation, &window).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "carol");
    assert_eq!(entries[0].start_at, day(2030, 1, 1));
    assert_eq!(entries[0].end_at, day(2030, 1, 2));
}

#[test]
fn sub_day_window_yields_single_clipped_entry() {
    let window = Window {
        from: Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
        until: Utc.with_ymd_and_hms(2024, 1, 2, 17, 0, 0).unwrap(),
    };

    let entries = generate_base_schedule(&weekly_pair(), &window).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "alice");
    assert_eq!(entries[0].start_at, window.from);
    assert_eq!(entries[0].end_at, window.until);
}

#[test]
fn single_user_rotation_emits_one_entry_per_period() {
    let rotation = Rotation {
        users: vec!["solo".to_string()],
        handover_start_at: day(2024, 1, 1),
        handover_interval_days: 1,
    };
    let window = Window {
        from: day(2024, 1, 1),
        until: day(2024, 1, 4),
    };

    let entries = generate_base_schedule(&rotation, &window).unwrap();

    // The generator does not coalesce; that is the compositor's job.
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.user == "solo"));
}

#[test]
fn empty_participant_list_is_rejected() {
    let rotation = Rotation {
        users: vec![],
        handover_start_at: day(2024, 1, 1),
        handover_interval_days: 7,
    };
    let window = Window {
        from: day(2024, 1, 1),
        until: day(2024, 1, 15),
    };

    let err = generate_base_schedule(&rotation, &window).unwrap_err();
    assert!(matches!(err, RotaError::InvalidRotation(_)));
}

#[test]
fn non_positive_interval_is_rejected() {
    for days in [0, -7] {
        let rotation = Rotation {
            users: vec!["alice".to_string()],
            handover_start_at: day(2024, 1, 1),
            handover_interval_days: days,
        };
        let window = Window {
            from: day(2024, 1, 1),
            until: day(2024, 1, 15),
        };

        let err = generate_base_schedule(&rotation, &window).unwrap_err();
        assert!(
            matches!(err, RotaError::InvalidRotation(_)),
            "interval of {} days must be rejected",
            days
        );
    }
}

#[test]
fn inverted_window_is_rejected() {
    let window = Window {
        from: day(2024, 1, 15),
        until: day(2024, 1, 1),
    };

    let err = generate_base_schedule(&weekly_pair(), &window).unwrap_err();
    assert!(matches!(err, RotaError::InvalidWindow { .. }));
}

#[test]
fn empty_window_is_rejected() {
    let window = Window {
        from: day(2024, 1, 1),
        until: day(2024, 1, 1),
    };

    let err = generate_base_schedule(&weekly_pair(), &window).unwrap_err();
    assert!(matches!(err, RotaError::InvalidWindow { .. }));
}
