use chrono::{DateTime, Datelike, TimeZone, Timelike};
use log::debug;

mod selector;
mod weekday;

pub use selector::{Selector, UnknownSelector};
pub use weekday::{WeekdayNamer, ZhCnWeekdays};

use crate::common::constants::LOCALE_ZH_CN;
use crate::common::time_utils::to_iso_string;

/// Format `at` with the built-in zh-CN weekday names.
///
/// Unrecognized selectors, including the empty string, produce the UTC
/// timestamp from [`to_iso_string`] instead of an error.
pub fn format_date<Tz: TimeZone>(at: &DateTime<Tz>, selector: &str) -> String {
    DateFormatter::zh_cn().format(at, selector)
}

#[derive(Debug, Clone)]
pub struct DateFormatter<W = ZhCnWeekdays> {
    namer: W,
}

impl DateFormatter<ZhCnWeekdays> {
    pub fn zh_cn() -> Self {
        Self::new(ZhCnWeekdays)
    }
}

impl Default for DateFormatter<ZhCnWeekdays> {
    fn default() -> Self {
        Self::zh_cn()
    }
}

impl<W: WeekdayNamer> DateFormatter<W> {
    pub fn new(namer: W) -> Self {
        Self { namer }
    }

    pub fn format<Tz: TimeZone>(&self, at: &DateTime<Tz>, selector: &str) -> String {
        match Selector::from_literal(selector) {
            Some(selector) => self.format_selector(at, selector),
            None => {
                debug!("Unrecognized format '{}', using ISO fallback", selector);
                to_iso_string(at)
            }
        }
    }

    pub fn format_selector<Tz: TimeZone>(&self, at: &DateTime<Tz>, selector: Selector) -> String {
        let weekday = if selector.uses_weekday() {
            self.namer.long_weekday(at.date_naive(), LOCALE_ZH_CN)
        } else {
            String::new()
        };

        match selector {
            Selector::Time => format!("{:02}:{:02}", at.hour(), at.minute()),
            Selector::IsoDateWeekday => format!(
                "{}-{:02}-{:02} {}",
                full_year(at.year()),
                at.month(),
                at.day(),
                weekday
            ),
            Selector::PaddedMonthDayWeekday => {
                format!("{:02}月{:02}日 {}", at.month(), at.day(), weekday)
            }
            Selector::MonthDayWeekday => {
                format!("{}月{:02}日 {}", at.month(), at.day(), weekday)
            }
        }
    }
}

/// Four digits for years 0..=9999; anything else is printed as-is (`-5`, `10000`).
fn full_year(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else {
        year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use std::cell::Cell;

    fn cst(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(format_date(&cst(2024, 3, 7, 9, 5), "HH:mm"), "09:05");
        assert_eq!(format_date(&cst(2024, 3, 7, 23, 59), "HH:mm"), "23:59");
        assert_eq!(format_date(&cst(2024, 3, 7, 0, 0), "HH:mm"), "00:00");
    }

    #[test]
    fn test_iso_date_with_weekday() {
        assert_eq!(
            format_date(&cst(2024, 3, 7, 9, 5), "yyyy-MM-dd EEEE"),
            "2024-03-07 星期四"
        );
        assert_eq!(
            format_date(&cst(2023, 12, 31, 12, 0), "yyyy-MM-dd EEEE"),
            "2023-12-31 星期日"
        );
    }

    #[test]
    fn test_padded_month_day() {
        assert_eq!(
            format_date(&cst(2024, 3, 7, 9, 5), "M月d日 EEEE"),
            "03月07日 星期四"
        );
        assert_eq!(
            format_date(&cst(2024, 11, 25, 9, 5), "M月d日 EEEE"),
            "11月25日 星期一"
        );
    }

    #[test]
    fn test_unpadded_month_day() {
        assert_eq!(
            format_date(&cst(2024, 3, 7, 9, 5), "m月d日 EEEE"),
            "3月07日 星期四"
        );
        assert_eq!(
            format_date(&cst(2024, 10, 1, 9, 5), "m月d日 EEEE"),
            "10月01日 星期二"
        );
    }

    #[test]
    fn test_fields_come_from_local_calendar() {
        // 2024-03-07 00:30 at +08:00 is still 2024-03-06 in UTC
        let at = cst(2024, 3, 7, 0, 30);
        assert_eq!(format_date(&at, "yyyy-MM-dd EEEE"), "2024-03-07 星期四");
        assert_eq!(format_date(&at, "HH:mm"), "00:30");
        assert_eq!(format_date(&at, "unknown"), "2024-03-06T16:30:00.000Z");
    }

    #[test]
    fn test_unknown_selector_falls_back_to_iso() {
        let at = cst(2024, 3, 7, 9, 5);
        for selector in ["", "hh:mm", "yyyy/MM/dd", "EEEE", "HH:mm:ss"] {
            assert_eq!(format_date(&at, selector), "2024-03-07T01:05:00.000Z");
            assert_eq!(format_date(&at, selector), to_iso_string(&at));
        }
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let at = cst(2024, 3, 7, 9, 5);
        for selector in Selector::ALL {
            assert_eq!(
                format_date(&at, selector.as_str()),
                format_date(&at, selector.as_str())
            );
        }
    }

    #[test]
    fn test_small_years_are_padded() {
        let at = Utc.with_ymd_and_hms(987, 6, 5, 4, 3, 0).unwrap();
        assert!(format_date(&at, "yyyy-MM-dd EEEE").starts_with("0987-06-05 "));
    }

    #[test]
    fn test_custom_namer_is_used_for_weekday_selectors_only() {
        let calls = Cell::new(0);
        let namer = |date: NaiveDate, locale: &str| {
            calls.set(calls.get() + 1);
            format!("<{} {}>", date, locale)
        };
        let formatter = DateFormatter::new(namer);
        let at = cst(2024, 3, 7, 9, 5);

        assert_eq!(formatter.format(&at, "HH:mm"), "09:05");
        assert_eq!(formatter.format(&at, "bogus"), "2024-03-07T01:05:00.000Z");
        assert_eq!(calls.get(), 0);

        assert_eq!(
            formatter.format(&at, "yyyy-MM-dd EEEE"),
            "2024-03-07 <2024-03-07 zh-CN>"
        );
        assert_eq!(
            formatter.format(&at, "m月d日 EEEE"),
            "3月07日 <2024-03-07 zh-CN>"
        );
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_years_outside_four_digits_print_in_full() {
        let bc = Utc.with_ymd_and_hms(-5, 1, 2, 3, 4, 0).unwrap();
        assert!(format_date(&bc, "yyyy-MM-dd EEEE").starts_with("-5-01-02 "));

        let far = Utc.with_ymd_and_hms(10000, 1, 2, 3, 4, 0).unwrap();
        assert!(format_date(&far, "yyyy-MM-dd EEEE").starts_with("10000-01-02 "));
    }

    #[test]
    fn test_format_selector_matches_string_form() {
        let formatter = DateFormatter::zh_cn();
        let at = cst(2024, 3, 7, 9, 5);
        for selector in Selector::ALL {
            assert_eq!(
                formatter.format_selector(&at, selector),
                formatter.format(&at, selector.as_str())
            );
        }
    }
}
