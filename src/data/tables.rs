use crate::data::country::Country;
use crate::data::holiday::HolidayDefinition as H;

/// Mixed North American list shown when no country is selected.
pub const DEFAULT_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Orthodox Christmas", "Jan 7"),
    H::new(3, "Martin Luther King Jr. Day", "Jan 20"),
    H::new(4, "Chinese New Year", "Jan 29"),
    H::new(5, "Valentine's Day", "Feb 14"),
    H::new(6, "Family Day", "Feb 19"),
    H::new(7, "St. Patrick's Day", "Mar 17"),
    H::new(8, "Good Friday", "Apr 18"),
    H::new(9, "Easter Monday", "Apr 21"),
    H::new(10, "Earth Day", "Apr 22"),
    H::new(11, "Victoria Day", "May 20"),
    H::new(12, "Memorial Day", "May 26"),
    H::new(13, "Canada Day", "Jul 1"),
    H::new(14, "Independence Day", "Jul 4"),
    H::new(15, "Civic Holiday", "Aug 4"),
    H::new(16, "Labor Day", "Sep 1"),
    H::new(17, "National Day for Truth and Reconciliation", "Sep 30"),
    H::new(18, "Thanksgiving", "Oct 13"),
    H::new(19, "Halloween", "Oct 31"),
    H::new(20, "Remembrance Day", "Nov 11"),
    H::new(21, "US Thanksgiving", "Nov 27"),
    H::new(22, "Christmas Eve", "Dec 24"),
    H::new(23, "Christmas Day", "Dec 25"),
    H::new(24, "Boxing Day", "Dec 26"),
    H::new(25, "New Year's Eve", "Dec 31"),
];

pub const CANADA_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Family Day", "Feb 17"),
    H::new(3, "Good Friday", "Apr 18"),
    H::new(4, "Easter Monday", "Apr 21"),
    H::new(5, "Victoria Day", "May 19"),
    H::new(6, "Canada Day", "Jul 1"),
    H::new(7, "Civic Holiday", "Aug 4"),
    H::new(8, "Labour Day", "Sep 1"),
    H::new(9, "National Day for Truth and Reconciliation", "Sep 30"),
    H::new(10, "Thanksgiving", "Oct 13"),
    H::new(11, "Remembrance Day", "Nov 11"),
    H::new(12, "Christmas Day", "Dec 25"),
    H::new(13, "Boxing Day", "Dec 26"),
];

pub const UNITED_STATES_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Martin Luther King Jr. Day", "Jan 20"),
    H::new(3, "Presidents' Day", "Feb 17"),
    H::new(4, "Memorial Day", "May 26"),
    H::new(5, "Juneteenth", "Jun 19"),
    H::new(6, "Independence Day", "Jul 4"),
    H::new(7, "Labor Day", "Sep 1"),
    H::new(8, "Columbus Day", "Oct 13"),
    H::new(9, "Veterans Day", "Nov 11"),
    H::new(10, "Thanksgiving", "Nov 27"),
    H::new(11, "Christmas Day", "Dec 25"),
];

pub const JAPAN_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Coming of Age Day", "Jan 13"),
    H::new(3, "National Foundation Day", "Feb 11"),
    H::new(4, "Emperor's Birthday", "Feb 23"),
    H::new(5, "Vernal Equinox Day", "Mar 20"),
    H::new(6, "Showa Day", "Apr 29"),
    H::new(7, "Constitution Memorial Day", "May 3"),
    H::new(8, "Greenery Day", "May 4"),
    H::new(9, "Children's Day", "May 5"),
    H::new(10, "Marine Day", "Jul 21"),
    H::new(11, "Mountain Day", "Aug 11"),
    H::new(12, "Respect for the Aged Day", "Sep 15"),
    H::new(13, "Autumnal Equinox Day", "Sep 23"),
    H::new(14, "Sports Day", "Oct 13"),
    H::new(15, "Culture Day", "Nov 3"),
    H::new(16, "Labour Thanksgiving Day", "Nov 23"),
];

pub const SOUTH_KOREA_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Seollal", "Jan 29"),
    H::new(3, "Independence Movement Day", "Mar 1"),
    H::new(4, "Children's Day", "May 5"),
    H::new(5, "Buddha's Birthday", "May 5"),
    H::new(6, "Memorial Day", "Jun 6"),
    H::new(7, "Liberation Day", "Aug 15"),
    H::new(8, "National Foundation Day", "Oct 3"),
    H::new(9, "Chuseok", "Oct 6"),
    H::new(10, "Hangul Day", "Oct 9"),
    H::new(11, "Christmas Day", "Dec 25"),
];

pub const CHINA_HOLIDAYS: &[H] = &[
    H::new(1, "New Year's Day", "Jan 1"),
    H::new(2, "Spring Festival", "Jan 29"),
    H::new(3, "Lantern Festival", "Feb 12"),
    H::new(4, "Qingming Festival", "Apr 4"),
    H::new(5, "Labour Day", "May 1"),
    H::new(6, "Dragon Boat Festival", "May 31"),
    H::new(7, "National Day", "Oct 1"),
    H::new(8, "Mid-Autumn Festival", "Oct 6"),
    H::new(9, "Double Ninth Festival", "Oct 29"),
];

/// The static table for `country`, or the default list for `None`.
pub fn definitions_for(country: Option<Country>) -> &'static [H] {
    match country {
        None => DEFAULT_HOLIDAYS,
        Some(Country::Canada) => CANADA_HOLIDAYS,
        Some(Country::UnitedStates) => UNITED_STATES_HOLIDAYS,
        Some(Country::Japan) => JAPAN_HOLIDAYS,
        Some(Country::SouthKorea) => SOUTH_KOREA_HOLIDAYS,
        Some(Country::China) => CHINA_HOLIDAYS,
    }
}

/// Every table with a label, for validation and listings.
pub fn all_tables() -> Vec<(&'static str, &'static [H])> {
    let mut tables = vec![("default", DEFAULT_HOLIDAYS)];
    for c in Country::ALL {
        tables.push((c.name(), definitions_for(Some(c))));
    }
    tables
}
