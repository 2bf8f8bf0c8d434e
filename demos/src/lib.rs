//! Runnable front end for huepath: built-in scenarios, a text renderer for
//! grids with a path drawn over them, and the console report.

pub mod cli;
pub mod render;
pub mod report;
pub mod scenarios;

pub use cli::{Args, run};
pub use scenarios::Scenario;
