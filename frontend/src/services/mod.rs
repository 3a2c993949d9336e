pub mod clipboard;
pub mod data;
pub mod date_utils;
pub mod logging;
