use crate::calc::sort_by_calendar;
use crate::cmd::Query;
use crate::data::Holiday;
use anyhow::{Context, Result};

pub fn run(query: &Query, json: bool, sorted: bool) -> Result<()> {
    let mut holidays = query.holidays()?;
    if sorted {
        sort_by_calendar(&mut holidays);
    }
    let mut out = std::io::stdout();
    if json {
        write_json(&holidays, &mut out)
    } else {
        write_holidays(query, &holidays, &mut out)
    }
}

pub(crate) fn write_holidays<W: std::io::Write>(
    query: &Query,
    holidays: &[Holiday],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{} holidays, {}", query.scope(), query.year)?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<4} {:<8} {:<44} {}", "#", "Date", "Name", "Status")?;
    for h in holidays {
        writeln!(out, "  {:<4} {:<8} {:<44} {}", h.id, h.date, h.name, h.status_label())?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} holiday(s)", holidays.len())?;
    Ok(())
}

pub(crate) fn write_json<W: std::io::Write>(holidays: &[Holiday], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, holidays).context("failed to serialize holidays")?;
    writeln!(out)?;
    Ok(())
}
