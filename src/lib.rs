pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod utils;
pub mod validator;

pub use scanner::scan_str;
pub use validator::validate_str;
