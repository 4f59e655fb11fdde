use chrono::NaiveDate;

use tempo_core::enums::ScheduleStatus;
use tempo_store::schedules::ScheduleTarget;

/// Parse a schedule status, accepting hyphen or underscore form.
pub fn parse_status(raw: &str) -> anyhow::Result<ScheduleStatus> {
    raw.parse::<ScheduleStatus>().map_err(Into::into)
}

/// Parse a date-only bound for list filters.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Resolve the id-or-index pair every schedule mutation accepts.
pub fn schedule_target(id: Option<u64>, index: Option<usize>) -> anyhow::Result<ScheduleTarget> {
    match (id, index) {
        (Some(id), None) => Ok(ScheduleTarget::Id(id)),
        (None, Some(index)) => Ok(ScheduleTarget::Index(index)),
        (Some(_), Some(_)) => anyhow::bail!("give either an id or --index, not both"),
        (None, None) => anyhow::bail!("an id or --index is required"),
    }
}

/// Turn literal `\n` sequences from shell arguments into real newlines.
#[must_use]
pub fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
