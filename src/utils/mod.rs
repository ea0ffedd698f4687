// Utilities module

pub mod file;

pub use file::FileUtils;
