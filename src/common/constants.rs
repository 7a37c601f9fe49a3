/// Selector literals understood by the formatter
pub const SELECTOR_TIME: &str = "HH:mm";
pub const SELECTOR_ISO_DATE_WEEKDAY: &str = "yyyy-MM-dd EEEE";
pub const SELECTOR_PADDED_MONTH_DAY_WEEKDAY: &str = "M月d日 EEEE";
pub const SELECTOR_MONTH_DAY_WEEKDAY: &str = "m月d日 EEEE";

/// The only locale the formatter renders weekdays for
pub const LOCALE_ZH_CN: &str = "zh-CN";

/// Long-form weekday names for zh-CN, Monday first
pub const ZH_CN_WEEKDAYS: [&str; 7] = [
    "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
];

/// Settings lookup
pub const SETTINGS_ENV_VAR: &str = "ZH_DATEFMT_SETTINGS";
pub const SETTINGS_DIR_NAME: &str = "zh-datefmt";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
