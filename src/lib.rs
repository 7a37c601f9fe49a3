pub mod common;
pub mod formatter;
pub mod settings;

pub use common::time_utils::{current_timestamp, parse_instant, to_iso_string};
pub use formatter::{
    format_date, DateFormatter, Selector, UnknownSelector, WeekdayNamer, ZhCnWeekdays,
};
pub use settings::Settings;
