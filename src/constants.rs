//! Application constants and configuration

pub const APP_NAME: &str = "Student Aid Navigator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SIDEBAR_TITLE: &str = "Student Aid Nav";
pub const LOG_FILE_NAME: &str = "student-aid-navigator.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [960.0, 640.0];
