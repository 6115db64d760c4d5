//! Local-time formatting and day-boundary helpers.

use chrono::{Local, LocalResult, TimeZone};

pub const FORMAT_DATE: &str = "%Y-%m-%d";
pub const FORMAT_TIME: &str = "%H:%M:%S";
pub const FORMAT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
pub const FORMAT_DATE8: &str = "%Y%m%d";
pub const FORMAT_TIME6: &str = "%H%M%S";
pub const FORMAT_DATETIME14: &str = "%Y%m%d%H%M%S";

/// Current unix timestamp in seconds.
pub fn timestamp() -> i64 {
    Local::now().timestamp()
}

/// Current local date, `YYYY-MM-DD`.
pub fn date() -> String {
    Local::now().format(FORMAT_DATE).to_string()
}

/// Current local time, `HH:MM:SS`.
pub fn time() -> String {
    Local::now().format(FORMAT_TIME).to_string()
}

/// Current local date and time, `YYYY-MM-DD HH:MM:SS`.
pub fn datetime() -> String {
    Local::now().format(FORMAT_DATETIME).to_string()
}

/// Current local date as eight digits, `YYYYMMDD`.
pub fn date8() -> String {
    Local::now().format(FORMAT_DATE8).to_string()
}

/// Current local time as six digits, `HHMMSS`.
pub fn time6() -> String {
    Local::now().format(FORMAT_TIME6).to_string()
}

/// Current local date and time as fourteen digits, `YYYYMMDDHHMMSS`.
pub fn datetime14() -> String {
    Local::now().format(FORMAT_DATETIME14).to_string()
}

/// Unix timestamp of 00:00:00 on the local day containing `unix`.
///
/// Unresolvable local times (DST gaps) fall back to the input timestamp.
pub fn day_first(unix: i64) -> i64 {
    day_bound(unix, 0, 0, 0)
}

/// Unix timestamp of 23:59:59 on the local day containing `unix`.
pub fn day_last(unix: i64) -> i64 {
    day_bound(unix, 23, 59, 59)
}

/// First second of today, local time.
pub fn today_first() -> i64 {
    day_first(timestamp())
}

/// Last second of today, local time.
pub fn today_last() -> i64 {
    day_last(timestamp())
}

/// First second of yesterday, local time.
pub fn yesterday_first() -> i64 {
    day_first(timestamp() - 86_400)
}

/// Last second of yesterday, local time.
pub fn yesterday_last() -> i64 {
    day_last(timestamp() - 86_400)
}

fn day_bound(unix: i64, hour: u32, min: u32, sec: u32) -> i64 {
    let Some(at) = Local.timestamp_opt(unix, 0).single() else {
        return unix;
    };
    let Some(naive) = at.date_naive().and_hms_opt(hour, min, sec) else {
        return unix;
    };
    match naive.and_local_timezone(Local) {
        LocalResult::Single(bound) => bound.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => unix,
    }
}
