pub mod app_time;
pub mod time_utils;
