use std::fmt;
use std::str::FromStr;

use crate::common::constants::{
    SELECTOR_ISO_DATE_WEEKDAY, SELECTOR_MONTH_DAY_WEEKDAY, SELECTOR_PADDED_MONTH_DAY_WEEKDAY,
    SELECTOR_TIME,
};

/// The closed set of output templates the formatter knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `HH:mm`, e.g. `09:05`
    Time,
    /// `yyyy-MM-dd EEEE`, e.g. `2024-03-07 星期四`
    IsoDateWeekday,
    /// `M月d日 EEEE`, e.g. `03月07日 星期四`
    PaddedMonthDayWeekday,
    /// `m月d日 EEEE`, e.g. `3月07日 星期四`
    MonthDayWeekday,
}

impl Selector {
    pub const ALL: [Selector; 4] = [
        Selector::Time,
        Selector::IsoDateWeekday,
        Selector::PaddedMonthDayWeekday,
        Selector::MonthDayWeekday,
    ];

    /// Match a selector string exactly. Anything else is `None`.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            SELECTOR_TIME => Some(Selector::Time),
            SELECTOR_ISO_DATE_WEEKDAY => Some(Selector::IsoDateWeekday),
            SELECTOR_PADDED_MONTH_DAY_WEEKDAY => Some(Selector::PaddedMonthDayWeekday),
            SELECTOR_MONTH_DAY_WEEKDAY => Some(Selector::MonthDayWeekday),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Selector::Time => SELECTOR_TIME,
            Selector::IsoDateWeekday => SELECTOR_ISO_DATE_WEEKDAY,
            Selector::PaddedMonthDayWeekday => SELECTOR_PADDED_MONTH_DAY_WEEKDAY,
            Selector::MonthDayWeekday => SELECTOR_MONTH_DAY_WEEKDAY,
        }
    }

    pub fn uses_weekday(self) -> bool {
        !matches!(self, Selector::Time)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `Selector::from_str` for input outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelector(pub String);

impl fmt::Display for UnknownSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Selector::ALL.iter().map(|s| s.as_str()).collect();
        write!(
            f,
            "unknown format '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownSelector {}

impl FromStr for Selector {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::from_literal(s).ok_or_else(|| UnknownSelector(s.to_string()))
    }
}
