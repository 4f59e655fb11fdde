pub mod dispatch;
pub mod job;
pub mod schedule;
pub mod shared;
