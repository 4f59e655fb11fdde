mod job;
mod schedule;

pub use job::JobCommands;
pub use schedule::ScheduleCommands;
