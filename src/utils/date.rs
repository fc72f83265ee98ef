//! Date utilities: multi-format timestamp recognition and the local clock.

use chrono::{Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Accepted date layouts, tried in this order. Each layout is also accepted
/// with a trailing ` HH:MM:SS` time part.
pub const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", // yyyy-MM-dd
    "%Y/%m/%d", // yyyy/MM/dd
    "%m/%d/%Y", // MM/dd/yyyy
    "%d-%m-%Y", // dd-MM-yyyy
    "%d/%m/%Y", // dd/MM/yyyy
    "%d.%m.%Y", // dd.MM.yyyy
];

const TIME_SUFFIX: &str = " %H:%M:%S";

/// chrono accepts one-digit months, days and hours and signed years of any
/// length, so each layout gets a fixed-width shape checked first.
static LAYOUT_SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DATE_FORMATS
        .iter()
        .map(|fmt| {
            let date = regex::escape(fmt)
                .replace("%Y", r"\d{4}")
                .replace("%m", r"\d{2}")
                .replace("%d", r"\d{2}");
            Regex::new(&format!(r"^{date}( \d{{2}}:\d{{2}}:\d{{2}})?$"))
                .expect("date layout shape is valid")
        })
        .collect()
});

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses `s` with the first layout of [`DATE_FORMATS`] that matches the whole
/// input, digit widths included. A missing time part means midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .zip(LAYOUT_SHAPES.iter())
        .filter(|(_, shape)| shape.is_match(s))
        .find_map(|(fmt, _)| parse_with(s, fmt))
}

fn parse_with(s: &str, date_fmt: &str) -> Option<NaiveDateTime> {
    let with_time = format!("{date_fmt}{TIME_SUFFIX}");
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, &with_time) {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, date_fmt)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn every_layout_is_recognized() {
        let expected = ts(2021, 3, 14, 0, 0, 0);
        for input in [
            "2021-03-14",
            "2021/03/14",
            "03/14/2021",
            "14-03-2021",
            "14/03/2021",
            "14.03.2021",
        ] {
            assert_eq!(parse_timestamp(input), Some(expected), "input {input}");
        }
    }

    #[test]
    fn optional_time_part_is_honoured() {
        assert_eq!(
            parse_timestamp("2021-03-14 08:30:15"),
            Some(ts(2021, 3, 14, 8, 30, 15))
        );
        assert_eq!(
            parse_timestamp("14.03.2021 23:59:59"),
            Some(ts(2021, 3, 14, 23, 59, 59))
        );
    }

    #[test]
    fn month_first_wins_when_ambiguous() {
        // 03/04/2021 matches both MM/dd/yyyy and dd/MM/yyyy
        assert_eq!(parse_timestamp("03/04/2021"), Some(ts(2021, 3, 4, 0, 0, 0)));
        // 25/04/2021 can only be dd/MM/yyyy
        assert_eq!(parse_timestamp("25/04/2021"), Some(ts(2021, 4, 25, 0, 0, 0)));
    }

    #[test]
    fn unknown_layouts_are_rejected() {
        assert_eq!(parse_timestamp("2021%01%01 00:00:00"), None);
        assert_eq!(parse_timestamp("2021-01-01T00:00:00"), None);
        assert_eq!(parse_timestamp("2021-01-01 00:00"), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        assert_eq!(parse_timestamp("2021-02-30"), None);
        assert_eq!(parse_timestamp("2021-13-01"), None);
    }

    #[test]
    fn short_fields_are_rejected() {
        assert_eq!(parse_timestamp("1/2/2021"), None);
        assert_eq!(parse_timestamp("2021-1-5"), None);
        assert_eq!(parse_timestamp("5.1.2021"), None);
        assert_eq!(parse_timestamp("2021-01-05 1:2:3"), None);
        assert_eq!(parse_timestamp("21-01-05"), None);
    }

    #[test]
    fn signed_or_long_years_are_rejected() {
        assert_eq!(parse_timestamp("-200000-01-01"), None);
        assert_eq!(parse_timestamp("+2021-01-01"), None);
        assert_eq!(parse_timestamp("20210-01-01"), None);
        assert_eq!(parse_timestamp("01-01-20210"), None);
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert_eq!(parse_timestamp(" 2021-01-01"), None);
        assert_eq!(parse_timestamp("2021-01-01  00:00:00"), None);
    }
}
