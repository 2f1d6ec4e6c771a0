// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateKey, DomainError};
use time::macros::{date, datetime, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

#[test]
fn test_key_format_is_zero_padded() {
    let key: DateKey = DateKey::of(date!(2025 - 01 - 02));
    assert_eq!(key.as_str(), "2025-01-02");
    assert_eq!(key.to_string(), "2025-01-02");
}

#[test]
fn test_same_day_different_times_share_a_key() {
    let morning: PrimitiveDateTime = datetime!(2025 - 06 - 15 00:00:01);
    let night: PrimitiveDateTime = datetime!(2025 - 06 - 15 23:59:59);

    assert_eq!(DateKey::from(morning), DateKey::from(night));
    assert_eq!(DateKey::from(morning), DateKey::of(date!(2025 - 06 - 15)));
}

#[test]
fn test_offset_datetime_uses_its_own_calendar_day() {
    // 23:30 at +05:30 is still June 15 locally, although it is 18:00 UTC.
    let local: OffsetDateTime = datetime!(2025 - 06 - 15 23:30 +05:30);
    let utc_evening: OffsetDateTime = datetime!(2025 - 06 - 15 18:00 UTC);
    let far_east: OffsetDateTime = local.to_offset(offset!(+14:00));

    assert_eq!(DateKey::from(local).as_str(), "2025-06-15");
    assert_eq!(DateKey::from(utc_evening).as_str(), "2025-06-15");
    assert_eq!(DateKey::from(far_east).as_str(), "2025-06-16");
}

#[test]
fn test_different_days_have_different_keys() {
    let first: DateKey = DateKey::of(date!(2025 - 06 - 15));
    let second: DateKey = DateKey::of(date!(2025 - 06 - 16));
    assert_ne!(first, second);
    assert!(first < second);
}

#[test]
fn test_keys_order_chronologically() {
    let mut keys: Vec<DateKey> = vec![
        DateKey::of(date!(2025 - 10 - 01)),
        DateKey::of(date!(2025 - 02 - 14)),
        DateKey::of(date!(2024 - 12 - 31)),
    ];
    keys.sort();
    let texts: Vec<&str> = keys.iter().map(DateKey::as_str).collect();
    assert_eq!(texts, vec!["2024-12-31", "2025-02-14", "2025-10-01"]);
}

#[test]
fn test_parse_round_trips_to_same_key() {
    let parsed: DateKey = "2025-06-20".parse().unwrap();
    assert_eq!(parsed, DateKey::of(date!(2025 - 06 - 20)));
    let day: Date = parsed.date();
    assert_eq!(day, date!(2025 - 06 - 20));
}

#[test]
fn test_parse_rejects_malformed_text() {
    for input in ["2025-13-01", "2025-02-30", "June 20", "", "2025/06/20"] {
        let result: Result<DateKey, DomainError> = input.parse();
        assert!(
            matches!(result, Err(DomainError::InvalidDateKey { .. })),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_serializes_as_plain_string() {
    let key: DateKey = DateKey::of(date!(2025 - 03 - 08));
    let json: String = serde_json::to_string(&key).unwrap();
    assert_eq!(json, "\"2025-03-08\"");

    let back: DateKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);

    let bad: Result<DateKey, serde_json::Error> = serde_json::from_str("\"not-a-date\"");
    assert!(bad.is_err());
}

#[test]
fn test_negative_year_key_parses_back() {
    let key: DateKey = DateKey::of(date!(-0001 - 01 - 01));
    assert_eq!(key.as_str(), "-0001-01-01");

    let json: String = serde_json::to_string(&key).unwrap();
    let back: DateKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
}
