use crate::calc::holiday_calc::format_holiday_date;
use crate::calc::{next_upcoming, year_progress};
use crate::cmd::Query;
use crate::data::Holiday;
use anyhow::Result;

pub fn run(query: &Query) -> Result<()> {
    let holidays = query.holidays()?;
    write_summary(query, &holidays, &mut std::io::stdout())
}

pub(crate) fn write_summary<W: std::io::Write>(
    query: &Query,
    holidays: &[Holiday],
    out: &mut W,
) -> Result<()> {
    let progress = year_progress(holidays, query.year, query.today);
    writeln!(out, "{} Holiday Tracker ({})", query.year, query.scope())?;
    writeln!(out, "---")?;
    writeln!(out, "  Today: {}", format_holiday_date(query.today))?;
    writeln!(out, "  {}/{} completed", progress.completed, progress.total)?;
    writeln!(out, "  {}% of year", progress.percent_of_year)?;
    match next_upcoming(holidays) {
        Some(h) => writeln!(out, "  Next: {} ({}), {}", h.name, h.date, h.status_label())?,
        None => writeln!(out, "  Next: none left this year")?,
    }
    Ok(())
}
