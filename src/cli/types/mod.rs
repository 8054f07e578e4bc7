//! Type-safe wrappers used by the CLI and the library.

pub mod time;

pub use time::Season;
