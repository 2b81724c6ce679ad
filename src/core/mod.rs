pub mod calendar;
pub mod course;
pub mod detail;
pub mod grouper;
pub mod schedule;
pub mod session;

pub use grouper::{DateIndex, GroupedEvents, group};
