use chrono::Weekday::{self, *};
use rat_weekview::weekview::{full_week, rotate_to, WeekError};

#[test]
fn test_full_week() {
    assert_eq!(full_week(Sun), [Sun, Mon, Tue, Wed, Thu, Fri, Sat]);
    assert_eq!(full_week(Mon), [Mon, Tue, Wed, Thu, Fri, Sat, Sun]);
    assert_eq!(full_week(Sat), [Sat, Sun, Mon, Tue, Wed, Thu, Fri]);
}

#[test]
fn test_rotate_noop() {
    let days = [Wed, Thu, Fri];
    assert_eq!(rotate_to(&days, Wed).expect("rotated"), vec![Wed, Thu, Fri]);
}

#[test]
fn test_rotate_wraps() {
    let days = full_week(Sun);
    assert_eq!(
        rotate_to(&days, Wed).expect("rotated"),
        vec![Wed, Thu, Fri, Sat, Sun, Mon, Tue]
    );
}

#[test]
fn test_rotate_all_starts() {
    let days = full_week(Sun);
    for start in [Mon, Tue, Wed, Thu, Fri, Sat, Sun] {
        let rotated = rotate_to(&days, start).expect("rotated");
        assert_eq!(rotated.len(), 7);
        assert_eq!(rotated[0], start);
        for day in [Mon, Tue, Wed, Thu, Fri, Sat, Sun] {
            assert_eq!(rotated.iter().filter(|v| **v == day).count(), 1);
        }
    }
}

#[test]
fn test_rotate_subset() {
    let days = [Mon, Tue, Wed, Thu, Fri];
    assert_eq!(
        rotate_to(&days, Wed).expect("rotated"),
        vec![Wed, Thu, Fri, Mon, Tue]
    );
}

#[test]
fn test_rotate_empty() {
    let days: [Weekday; 0] = [];
    assert_eq!(
        rotate_to(&days, Wed).expect("rotated"),
        vec![Wed, Thu, Fri, Sat, Sun, Mon, Tue]
    );
}

#[test]
fn test_rotate_missing() {
    let days = [Mon, Tue, Wed, Thu, Fri];
    assert_eq!(rotate_to(&days, Sat), Err(WeekError::StartDayNotInDays(Sat)));
}
