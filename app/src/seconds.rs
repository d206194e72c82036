#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(pub i64);

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3600;

impl Seconds {
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whole hours contained in this duration.
    pub fn hours(&self) -> i64 {
        self.0.div_euclid(SECS_PER_HOUR)
    }

    /// Whole minutes left over after removing the hours.
    pub fn minutes(&self) -> i64 {
        (self.0 - self.hours() * SECS_PER_HOUR).div_euclid(SECS_PER_MINUTE)
    }

    /// Seconds left over after removing the hours and minutes.
    pub fn seconds(&self) -> i64 {
        self.0 - self.hours() * SECS_PER_HOUR - self.minutes() * SECS_PER_MINUTE
    }
}
