use chrono::{Datelike, NaiveDate};

use crate::common::constants::ZH_CN_WEEKDAYS;

/// Maps a calendar date and a locale tag to a long-form weekday name.
pub trait WeekdayNamer {
    fn long_weekday(&self, date: NaiveDate, locale: &str) -> String;
}

impl<F> WeekdayNamer for F
where
    F: Fn(NaiveDate, &str) -> String,
{
    fn long_weekday(&self, date: NaiveDate, locale: &str) -> String {
        self(date, locale)
    }
}

/// Built-in zh-CN weekday table. The locale tag is not consulted; other
/// locales need their own `WeekdayNamer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhCnWeekdays;

impl WeekdayNamer for ZhCnWeekdays {
    fn long_weekday(&self, date: NaiveDate, _locale: &str) -> String {
        let index = date.weekday().num_days_from_monday() as usize;
        ZH_CN_WEEKDAYS[index].to_string()
    }
}
