//! Mock filesystem for testing collectors without a real `/proc`.

mod filesystem;
pub mod scenarios;

pub use filesystem::MockFs;
