// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Genitive month names as printed on the redesigned site
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Moscow time, UTC+3 without DST
pub fn moscow() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).expect("+03:00 is in range")
}

/// Fallback date for episodes without a usable one: 1970-01-01T00:00:00+03:00
pub fn sentinel() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(at_moscow)
        .expect("epoch exists in every zone")
}

/// Whether a date is still the fallback value
pub fn is_sentinel(date: &DateTime<FixedOffset>) -> bool {
    *date == sentinel()
}

/// Current time in Moscow
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&moscow())
}

/// Build a timestamp from day, month, year, hour and minute fragments.
///
/// Fewer than four fragments or a fragment that is not an integer give the
/// [`sentinel`]. Out-of-range values roll over into the next unit, so
/// 31.02.2019 is 3 March and hour 24 is midnight of the following day.
pub fn parse_date(fragments: &[&str]) -> DateTime<FixedOffset> {
    if fragments.len() < 4 {
        return sentinel();
    }

    let mut date = [0i64; 5];
    for (slot, fragment) in date.iter_mut().zip(fragments) {
        match fragment.trim().parse() {
            Ok(n) => *slot = n,
            Err(_) => return sentinel(),
        }
    }
    let [day, month, year, hour, minute] = date;

    normalized(day, month, year, hour, minute)
        .and_then(at_moscow)
        .unwrap_or_else(sentinel)
}

// None only when the result falls outside the representable range
fn normalized(day: i64, month: i64, year: i64, hour: i64, minute: i64) -> Option<NaiveDateTime> {
    let months = month.checked_sub(1)?;
    let year = i32::try_from(year.checked_add(months.div_euclid(12))?).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?
        .checked_add_signed(TimeDelta::try_hours(hour)?)?
        .checked_add_signed(TimeDelta::try_minutes(minute)?)
}

/// Parse dates like "24 ноября 2019, 14:10" from episode pages
pub fn parse_localized_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let numeric = MONTHS
        .iter()
        .enumerate()
        .fold(s.trim().to_string(), |acc, (i, name)| {
            acc.replace(*name, &(i + 1).to_string())
        });

    NaiveDateTime::parse_from_str(&numeric, "%d %m %Y, %H:%M")
        .ok()
        .and_then(at_moscow)
}

fn at_moscow(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    moscow().from_local_datetime(&naive).single()
}
