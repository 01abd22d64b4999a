/// Day of the Gregorian year on which Chaitra, the first Saka month, begins.
pub const CHAITRA_START: u32 = 81;

/// A Saka month and the Gregorian day-of-year on which it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthEntry {
    /// Month name (e.g., "Chaitra", "Magha")
    pub name: &'static str,
    /// 1-indexed Gregorian day-of-year on which the month begins
    pub start_day_of_year: u32,
}

impl MonthEntry {
    /// Synthetic entry used when a date before Chaitra matches no table entry.
    ///
    /// Starts at day 0.
    pub const PAUSHA_FALLBACK: MonthEntry = MonthEntry::new("Pausha", 0);

    pub const fn new(name: &'static str, start_day_of_year: u32) -> Self {
        Self {
            name,
            start_day_of_year,
        }
    }

    /// Whether this entry begins before Chaitra, i.e. in January–March
    pub fn starts_before_chaitra(&self) -> bool {
        self.start_day_of_year < CHAITRA_START
    }
}

/// The twelve Saka months in Saka-year order.
///
/// Magha and Phalguna come last: they start early in the Gregorian year but
/// close out the Saka year.
static CALENDAR_TABLE: [MonthEntry; 12] = [
    MonthEntry::new("Chaitra", 81),
    MonthEntry::new("Vaisakha", 112),
    MonthEntry::new("Jyaistha", 143),
    MonthEntry::new("Asadha", 174),
    MonthEntry::new("Shravana", 205),
    MonthEntry::new("Bhadra", 236),
    MonthEntry::new("Ashvina", 267),
    MonthEntry::new("Kartika", 298),
    MonthEntry::new("Agrahayana", 328),
    MonthEntry::new("Pausha", 358),
    MonthEntry::new("Magha", 21),
    MonthEntry::new("Phalguna", 51),
];

/// Read-only view of the calendar table, in Saka-year order
pub fn calendar_table() -> &'static [MonthEntry] {
    &CALENDAR_TABLE
}
