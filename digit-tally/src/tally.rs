//! Digit tally data model
//!
//! Classifies raw input lines into entries and keeps the per-digit counters
//! together with the running sum.

use std::fmt;

/// Number of distinct digits that can be tallied
pub const DIGIT_COUNT: usize = 9;

/// A digit in the range 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// The digit equal to `value`, or `None` outside 1..=9
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
    }

    /// All digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this digit in the tally
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0.saturating_sub(Self::MIN))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why the collection loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user typed 0
    Zero,
    /// An integer outside 1..=9
    OutOfRange(i64),
    /// Text that is not an integer
    Malformed,
    /// Standard input was closed
    EndOfInput,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "exit requested"),
            Self::OutOfRange(value) => write!(f, "{value} is out of range"),
            Self::Malformed => write!(f, "input is not a number"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// One classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Digit(Digit),
    Stop(StopReason),
}

impl Entry {
    /// Classify a line of user input.
    ///
    /// Surrounding whitespace and a leading sign are accepted. Anything that
    /// does not yield a digit in 1..=9 becomes a stop entry.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Ok(value) = line.trim().parse::<i64>() else {
            return Self::Stop(StopReason::Malformed);
        };

        if value == 0 {
            return Self::Stop(StopReason::Zero);
        }

        Digit::new(value).map_or(Self::Stop(StopReason::OutOfRange(value)), Self::Digit)
    }
}

/// Occurrence counters for digits 1..=9 plus their running sum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; DIGIT_COUNT],
    sum: u64,
}

impl Tally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; DIGIT_COUNT],
            sum: 0,
        }
    }

    /// Count one occurrence of `digit` and add it to the sum
    pub fn record(&mut self, digit: Digit) {
        let slot = &mut self.counts[digit.index()];
        *slot = slot.saturating_add(1);
        self.sum = self.sum.saturating_add(u64::from(digit.value()));
    }

    #[must_use]
    pub fn count(&self, digit: Digit) -> u64 {
        self.counts[digit.index()]
    }

    /// Counters indexed by `digit - 1`
    #[must_use]
    pub const fn counts(&self) -> &[u64; DIGIT_COUNT] {
        &self.counts
    }

    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    /// Number of digits recorded so far
    #[must_use]
    pub fn total_entries(&self) -> u64 {
        self.counts.iter().copied().fold(0, u64::saturating_add)
    }

    /// Whether the sum equals the weighted total of the counters
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let weighted = Digit::all()
            .map(|digit| self.count(digit).saturating_mul(u64::from(digit.value())))
            .fold(0, u64::saturating_add);
        weighted == self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: i64) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(-3), None);
        assert_eq!(Digit::new(i64::MAX), None);
        assert_eq!(Digit::new(256 + 3), None);
        assert_eq!(digit(1).index(), 0);
        assert_eq!(digit(9).index(), 8);
    }

    #[test]
    fn test_digit_all_ascending() {
        let values: Vec<u8> = Digit::all().map(Digit::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_parse_valid_digits() {
        assert_eq!(Entry::parse("7"), Entry::Digit(digit(7)));
        assert_eq!(Entry::parse("  3 \n"), Entry::Digit(digit(3)));
        assert_eq!(Entry::parse("+4\r\n"), Entry::Digit(digit(4)));
    }

    #[test]
    fn test_parse_stop_entries() {
        assert_eq!(Entry::parse("0"), Entry::Stop(StopReason::Zero));
        assert_eq!(Entry::parse("-0"), Entry::Stop(StopReason::Zero));
        assert_eq!(Entry::parse("15"), Entry::Stop(StopReason::OutOfRange(15)));
        assert_eq!(Entry::parse("-2"), Entry::Stop(StopReason::OutOfRange(-2)));
        assert_eq!(Entry::parse("abc"), Entry::Stop(StopReason::Malformed));
        assert_eq!(Entry::parse(""), Entry::Stop(StopReason::Malformed));
        assert_eq!(Entry::parse("3.5"), Entry::Stop(StopReason::Malformed));
        assert_eq!(
            Entry::parse("99999999999999999999999"),
            Entry::Stop(StopReason::Malformed)
        );
    }

    #[test]
    fn test_new_tally_is_empty() {
        let tally = Tally::new();
        assert_eq!(tally.counts(), &[0; DIGIT_COUNT]);
        assert_eq!(tally.sum(), 0);
        assert_eq!(tally.total_entries(), 0);
        assert!(tally.is_consistent());
    }

    #[test]
    fn test_record_accumulates() {
        let mut tally = Tally::new();
        for _ in 0..5 {
            tally.record(digit(4));
        }

        assert_eq!(tally.count(digit(4)), 5);
        assert_eq!(tally.sum(), 20);
        assert_eq!(tally.total_entries(), 5);
    }

    #[test]
    fn test_sum_invariant_holds_after_every_record() {
        let mut tally = Tally::new();
        for value in [9, 1, 5, 5, 2, 8, 3, 7, 6, 4, 9, 9] {
            tally.record(digit(value));
            assert!(tally.is_consistent());
        }
        assert_eq!(tally.sum(), 68);
    }
}
