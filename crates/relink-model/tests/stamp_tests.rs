use super::*;
use chrono::{NaiveDate, NaiveDateTime};

fn local(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn clear_timezone_drops_only_the_designator() {
    let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let mut stamp = Stamp::zoned(local(9, 30), offset);
    assert!(stamp.has_timezone());

    stamp.clear_timezone();

    assert!(!stamp.has_timezone());
    assert_eq!(stamp.offset(), None);
    // Local components are untouched; no instant conversion happens.
    assert_eq!(stamp.datetime(), local(9, 30));
}

#[test]
fn clear_timezone_on_naive_stamp_is_a_no_op() {
    let mut stamp = Stamp::naive(local(23, 59));
    stamp.clear_timezone();
    assert_eq!(stamp, Stamp::naive(local(23, 59)));
}
