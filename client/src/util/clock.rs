//! Wall-clock helpers for message timestamps and the footer year.
//!
//! The browser build reads `js_sys::Date`; SSR and tests read the system clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour `hours:minutes` pair as a two-digit 12-hour label, e.g. `09:05 AM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let hours = hours % 24;
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let display = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display:02}:{:02} {suffix}", minutes % 60)
}

/// Civil year for a Unix timestamp in milliseconds (proleptic Gregorian, UTC).
pub fn year_from_unix_millis(millis: i64) -> i32 {
    let days = millis.div_euclid(86_400_000);
    // Days-to-civil conversion over 400-year eras.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    i32::try_from(year).unwrap_or(i32::MAX)
}

fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Current local time as a message timestamp label.
pub fn current_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let minutes_of_day = now_millis().rem_euclid(86_400_000) / 60_000;
        let hours = u32::try_from(minutes_of_day / 60).unwrap_or(0);
        let minutes = u32::try_from(minutes_of_day % 60).unwrap_or(0);
        format_clock(hours, minutes)
    }
}

pub fn current_year() -> i32 {
    year_from_unix_millis(now_millis())
}
