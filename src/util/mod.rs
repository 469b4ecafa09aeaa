pub mod colors;
pub mod debounce;
pub mod format;
pub mod hook;
pub mod log;
pub mod task;
