pub mod holiday_calc;
pub mod progress;

pub use holiday_calc::{
    get_holidays, get_holidays_by_country, get_holidays_for_year, sort_by_calendar, today,
    validate_tables,
};
pub use progress::{next_upcoming, year_progress};
