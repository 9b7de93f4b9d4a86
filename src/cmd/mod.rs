pub mod countries;
pub mod holidays;
pub mod init;
pub mod root;
pub mod summary;
pub mod themes;

use crate::calc::{get_holidays_by_country, get_holidays_for_year};
use crate::data::{Country, Holiday};
use anyhow::Result;
use chrono::NaiveDate;

/// What to compute: the year, the requested country (if any) and the date
/// everything is measured from.
#[derive(Clone, Debug)]
pub struct Query {
    pub year: i32,
    pub country: Option<String>,
    pub today: NaiveDate,
}

impl Query {
    pub fn holidays(&self) -> Result<Vec<Holiday>> {
        match &self.country {
            Some(code) => get_holidays_by_country(code, self.year, self.today),
            None => get_holidays_for_year(self.year, self.today),
        }
    }

    /// The recognized country, `None` for the default list or an unknown code.
    pub fn resolved_country(&self) -> Option<Country> {
        self.country.as_deref().and_then(Country::lookup)
    }

    /// Heading label: the country name or "All".
    pub fn scope(&self) -> &'static str {
        self.resolved_country().map(|c| c.name()).unwrap_or("All")
    }
}
