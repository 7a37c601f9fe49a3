pub mod constants;
pub mod time_utils;
