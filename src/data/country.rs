#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Country {
    Canada,
    UnitedStates,
    Japan,
    SouthKorea,
    China,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Canada,
        Country::Japan,
        Country::SouthKorea,
        Country::UnitedStates,
        Country::China,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Country::Canada => "CA",
            Country::UnitedStates => "US",
            Country::Japan => "JP",
            Country::SouthKorea => "KR",
            Country::China => "CN",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Canada => "Canada",
            Country::UnitedStates => "United States",
            Country::Japan => "Japan",
            Country::SouthKorea => "South Korea",
            Country::China => "China",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Country::Canada => "🇨🇦",
            Country::UnitedStates => "🇺🇸",
            Country::Japan => "🇯🇵",
            Country::SouthKorea => "🇰🇷",
            Country::China => "🇨🇳",
        }
    }

    /// Lowercase aliases accepted by [`Country::lookup`] besides code and name.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Country::UnitedStates => &["usa", "united states of america"],
            Country::SouthKorea => &["korea"],
            _ => &[],
        }
    }

    /// Case-insensitive match on code, name or alias. Surrounding whitespace is ignored.
    pub fn lookup(code: &str) -> Option<Country> {
        let needle = code.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Country::ALL.into_iter().find(|c| {
            c.code().to_lowercase() == needle
                || c.name().to_lowercase() == needle
                || c.aliases().contains(&needle.as_str())
        })
    }

    /// Selector order used by the board: default list, then each country, then back.
    pub fn cycle(current: Option<Country>) -> Option<Country> {
        match current {
            None => Some(Country::ALL[0]),
            Some(c) => {
                let idx = Country::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Country::ALL.get(idx + 1).copied()
            }
        }
    }
}
