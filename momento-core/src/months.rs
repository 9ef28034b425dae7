use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Calendar number of the month, `1..=12`.
    pub fn number(self) -> u32 {
        self as u32
    }
}

pub struct Months;

impl Months {
    /// Returns the **month name table** (lowercased name → month).
    ///
    /// Built once on first access from [`Month::iter`] and never written to afterwards.
    /// Each month is reachable by its full English name (`"august"`) and by its
    /// three letter abbreviation (`"aug"`).
    fn table() -> &'static HashMap<String, Month> {
        static TABLE: Lazy<HashMap<String, Month>> = Lazy::new(|| {
            let mut m = HashMap::new();
            for month in Month::iter() {
                let name = month.as_ref().to_ascii_lowercase();
                m.insert(name[..3].to_string(), month);
                m.insert(name, month);
            }
            m
        });
        &TABLE
    }

    /// Looks up a month by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<Month> {
        Self::table().get(&name.to_ascii_lowercase()).copied()
    }

    /// Calendar number for a month name, or `None` when the name is unknown.
    pub fn number(name: &str) -> Option<u32> {
        Self::find(name).map(Month::number)
    }
}
