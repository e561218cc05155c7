//! The 10-character display text of the editor.

use std::fmt;
use std::str::FromStr;

use crate::consts::{
    DIGIT_SLOTS, EDITABLE_SLOTS, MASK_SEPARATOR, MAX_DAY, MAX_MONTH, MAX_YEAR,
    PLACEHOLDER, TEMPLATE_LEN,
};
use crate::era::Era;
use crate::prelude::*;
use crate::template::{Field, field_of, is_editable};
use crate::{CivilDate, ParseError};

/// Error type for mask text parsing and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    /// The text is not exactly `TEMPLATE_LEN` characters long.
    #[error("Mask must have {len} characters, found {0}", len = TEMPLATE_LEN)]
    WrongLength(usize),

    /// A literal position holds something other than the separator.
    #[error("Expected '{sep}' at position {index}, found '{found}'", sep = MASK_SEPARATOR)]
    MisplacedSeparator { index: usize, found: char },

    /// An editable position holds something other than a digit or placeholder.
    #[error("Invalid character '{found}' at position {index}")]
    InvalidSlot { index: usize, found: char },

    /// Not every digit slot is filled.
    #[error("Mask has {0} of {total} digits", total = DIGIT_SLOTS)]
    Incomplete(usize),

    /// The typed year has no civil counterpart in the configured era.
    #[error("Year {0} has no civil equivalent")]
    NoCivilYear(u16),

    /// The digits do not name a real calendar date.
    #[error(transparent)]
    Date(#[from] ParseError),
}

/// Where a mask stands on its way to a committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskStatus {
    /// Every slot is a placeholder.
    Empty,
    /// Some but not all digits are present.
    Partial,
    /// All digits present and they parse to a date.
    CompleteValid,
    /// All digits present but they do not form a date.
    CompleteInvalid,
}

/// Fixed-width `DD/MM/YYYY` text.
///
/// Literal positions always hold `/` and editable positions hold a digit or `_`;
/// every mutator preserves this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref)]
pub struct MaskText([char; TEMPLATE_LEN]);

impl MaskText {
    pub const fn blank() -> Self {
        let mut slots = [MASK_SEPARATOR; TEMPLATE_LEN];
        let mut i = 0;
        while i < DIGIT_SLOTS {
            slots[EDITABLE_SLOTS[i]] = PLACEHOLDER;
            i += 1;
        }
        Self(slots)
    }

    /// Renders `date` with its year shifted into `era`.
    pub fn from_date(date: &CivilDate, era: Era) -> Self {
        let digits = format!(
            "{:02}{:02}{:04}",
            date.day(),
            date.month(),
            era.to_regional(date.year())
        );
        let mut text = Self::blank();
        for (slot, ch) in EDITABLE_SLOTS.iter().zip(digits.chars()) {
            text.0[*slot] = ch;
        }
        text
    }

    /// Digit stored at `slot`, if any.
    pub fn digit_at(&self, slot: usize) -> Option<u8> {
        self.0
            .get(slot)
            .and_then(|ch| ch.to_digit(10))
            .and_then(|d| u8::try_from(d).ok())
    }

    /// Writes `digit` into an editable slot. Returns `false` without changes for
    /// literal or out-of-range slots and for values above 9.
    pub fn set_digit(&mut self, slot: usize, digit: u8) -> bool {
        if !is_editable(slot) || digit > 9 {
            return false;
        }
        self.0[slot] = char::from(b'0' + digit);
        true
    }

    /// Copy of `self` with `digit` placed at `slot`.
    pub fn with_digit(mut self, slot: usize, digit: u8) -> Option<Self> {
        self.set_digit(slot, digit).then_some(self)
    }

    /// Resets an editable slot to the placeholder.
    pub fn clear(&mut self, slot: usize) -> bool {
        if !is_editable(slot) {
            return false;
        }
        self.0[slot] = PLACEHOLDER;
        true
    }

    /// All digits in slot order, separators and placeholders stripped.
    pub fn digits(&self) -> String {
        self.0.iter().filter(|ch| ch.is_ascii_digit()).collect()
    }

    pub fn digit_count(&self) -> usize {
        self.0.iter().filter(|ch| ch.is_ascii_digit()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.digit_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.digit_count() == DIGIT_SLOTS
    }

    /// Digits of `field` in slot order, `None` for untyped slots.
    pub fn field_digits(&self, field: Field) -> impl Iterator<Item = Option<u8>> + '_ {
        field.slots().map(|slot| self.digit_at(slot))
    }

    /// Range rules for a field, applied to whatever digits are present so far.
    ///
    /// Day and month constrain their leading digit as soon as it is typed and
    /// the full two-digit value once both are present. The year only has an
    /// upper bound once all four digits exist.
    pub fn validate_field(&self, field: Field) -> bool {
        let digits: Vec<Option<u8>> = self.field_digits(field).collect();
        match field {
            Field::Day => check_two_digit(&digits, MAX_DAY),
            Field::Month => check_two_digit(&digits, MAX_MONTH),
            Field::Year => match four_digit_value(&digits) {
                Some(year) => year <= u32::from(MAX_YEAR),
                None => true,
            },
        }
    }

    /// Validates the field that owns `slot`; literal slots are always valid.
    pub fn validate_slot(&self, slot: usize) -> bool {
        field_of(slot).is_none_or(|field| self.validate_field(field))
    }

    /// Parses a complete mask into a civil date, shifting the year out of `era`.
    ///
    /// # Errors
    /// Returns `MaskError::Incomplete` when any slot is empty, `NoCivilYear` when
    /// the era has no civil year for the typed one, and `Date` for impossible days.
    pub fn try_to_date(&self, era: Era) -> Result<CivilDate, MaskError> {
        let digits = self.digits();
        if digits.len() != DIGIT_SLOTS {
            return Err(MaskError::Incomplete(digits.len()));
        }
        let day: u8 = parse_digits(&digits[0..2])?;
        let month: u8 = parse_digits(&digits[2..4])?;
        let regional: u16 = parse_digits(&digits[4..8])?;
        let civil = era
            .to_civil(regional)
            .ok_or(MaskError::NoCivilYear(regional))?;
        Ok(CivilDate::from_ymd(civil, month, day)?)
    }

    /// Committed value of this mask: a date only when complete and real.
    pub fn to_date(&self, era: Era) -> Option<CivilDate> {
        self.try_to_date(era).ok()
    }

    pub fn status(&self, era: Era) -> MaskStatus {
        match self.digit_count() {
            0 => MaskStatus::Empty,
            DIGIT_SLOTS if self.to_date(era).is_some() => MaskStatus::CompleteValid,
            DIGIT_SLOTS => MaskStatus::CompleteInvalid,
            _ => MaskStatus::Partial,
        }
    }
}

fn parse_digits<T: FromStr>(digits: &str) -> Result<T, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidFormat(digits.to_owned()))
}

fn check_two_digit(digits: &[Option<u8>], max: u8) -> bool {
    match digits {
        [Some(lead), None] => *lead <= max / 10,
        [Some(lead), Some(trail)] => (1..=max).contains(&(lead * 10 + trail)),
        _ => true,
    }
}

fn four_digit_value(digits: &[Option<u8>]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, d| d.map(|d| acc * 10 + u32::from(d)))
}

impl Default for MaskText {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for MaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

impl FromStr for MaskText {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let slots: [char; TEMPLATE_LEN] = chars
            .as_slice()
            .try_into()
            .map_err(|_| MaskError::WrongLength(chars.len()))?;
        for (index, &found) in slots.iter().enumerate() {
            if is_editable(index) {
                if !(found.is_ascii_digit() || found == PLACEHOLDER) {
                    return Err(MaskError::InvalidSlot { index, found });
                }
            } else if found != MASK_SEPARATOR {
                return Err(MaskError::MisplacedSeparator { index, found });
            }
        }
        Ok(Self(slots))
    }
}

impl PartialEq<&str> for MaskText {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl From<MaskText> for String {
    fn from(text: MaskText) -> Self {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BLANK_MASK;

    fn mask(s: &str) -> MaskText {
        s.parse().unwrap()
    }

    #[test]
    fn test_blank_mask() {
        assert_eq!(MaskText::blank().to_string(), BLANK_MASK);
        assert!(MaskText::default().is_blank());
        assert_eq!(MaskText::blank().status(Era::BUDDHIST), MaskStatus::Empty);
    }

    #[test]
    fn test_from_date_shifts_year() {
        let date = CivilDate::from_ymd(2025, 5, 24).unwrap();
        assert_eq!(MaskText::from_date(&date, Era::BUDDHIST), "24/05/2568");
        assert_eq!(MaskText::from_date(&date, Era::CIVIL), "24/05/2025");
    }

    #[test]
    fn test_to_date_shifts_year_back() {
        let date = mask("24/05/2568").to_date(Era::BUDDHIST);
        assert_eq!(date, Some(CivilDate::from_ymd(2025, 5, 24).unwrap()));
    }

    #[test]
    fn test_to_date_impossible_day_is_none() {
        let text = mask("31/02/2568");
        assert!(text.is_complete());
        assert!(matches!(
            text.try_to_date(Era::BUDDHIST),
            Err(MaskError::Date(ParseError::InvalidDay { day: 31, .. }))
        ));
        assert_eq!(text.status(Era::BUDDHIST), MaskStatus::CompleteInvalid);
    }

    #[test]
    fn test_to_date_incomplete_is_none() {
        let text = mask("24/05/25_8");
        assert_eq!(
            text.try_to_date(Era::BUDDHIST),
            Err(MaskError::Incomplete(7))
        );
        assert_eq!(text.status(Era::BUDDHIST), MaskStatus::Partial);
    }

    #[test]
    fn test_to_date_year_without_civil_counterpart() {
        assert_eq!(
            mask("01/01/0500").try_to_date(Era::BUDDHIST),
            Err(MaskError::NoCivilYear(500))
        );
    }

    #[test]
    fn test_leap_day_uses_civil_year() {
        // 2567 BE is civil 2024, a leap year
        assert!(mask("29/02/2567").to_date(Era::BUDDHIST).is_some());
        assert!(mask("29/02/2568").to_date(Era::BUDDHIST).is_none());
    }

    #[test]
    fn test_set_digit_respects_literals() {
        let mut text = MaskText::blank();
        assert!(!text.set_digit(2, 1));
        assert!(!text.set_digit(10, 1));
        assert!(!text.set_digit(0, 10));
        assert!(text.set_digit(0, 1));
        assert_eq!(text, "1_/__/____");
        assert!(text.clear(0));
        assert!(!text.clear(5));
        assert!(text.is_blank());
    }

    #[test]
    fn test_digits_strips_everything_else() {
        let text = mask("2_/0_/25_8");
        assert_eq!(text.digits(), "20258");
        assert_eq!(text.digit_count(), 5);
    }

    #[test]
    fn test_validate_field_rules() {
        struct TestCase {
            text: &'static str,
            field: Field,
            valid: bool,
        }

        let cases = [
            TestCase { text: "3_/__/____", field: Field::Day, valid: true },
            TestCase { text: "4_/__/____", field: Field::Day, valid: false },
            TestCase { text: "31/__/____", field: Field::Day, valid: true },
            TestCase { text: "32/__/____", field: Field::Day, valid: false },
            TestCase { text: "00/__/____", field: Field::Day, valid: false },
            TestCase { text: "_9/__/____", field: Field::Day, valid: true },
            TestCase { text: "__/1_/____", field: Field::Month, valid: true },
            TestCase { text: "__/2_/____", field: Field::Month, valid: false },
            TestCase { text: "__/12/____", field: Field::Month, valid: true },
            TestCase { text: "__/13/____", field: Field::Month, valid: false },
            TestCase { text: "__/00/____", field: Field::Month, valid: false },
            TestCase { text: "__/__/9999", field: Field::Year, valid: true },
            TestCase { text: "__/__/0000", field: Field::Year, valid: true },
            TestCase { text: "__/__/99__", field: Field::Year, valid: true },
        ];

        for case in &cases {
            assert_eq!(
                mask(case.text).validate_field(case.field),
                case.valid,
                "{} ({:?})",
                case.text,
                case.field
            );
        }
    }

    #[test]
    fn test_validate_slot_on_literal() {
        assert!(mask("99/99/____").validate_slot(2));
        assert!(!mask("99/99/____").validate_slot(0));
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        assert_eq!("__/__".parse::<MaskText>(), Err(MaskError::WrongLength(5)));
        assert_eq!(
            "__-__/____".parse::<MaskText>(),
            Err(MaskError::MisplacedSeparator { index: 2, found: '-' })
        );
        assert_eq!(
            "a_/__/____".parse::<MaskText>(),
            Err(MaskError::InvalidSlot { index: 0, found: 'a' })
        );
    }

    #[test]
    fn test_round_trip_through_mask() {
        let era = Era::BUDDHIST;
        for (y, m, d) in [(2025, 5, 24), (2024, 2, 29), (1, 1, 1), (1999, 12, 31), (9999, 12, 31)] {
            let date = CivilDate::from_ymd(y, m, d).unwrap();
            let text = MaskText::from_date(&date, era);
            assert_eq!(text.to_date(era), Some(date), "{text}");
            assert_eq!(text.to_string().parse::<MaskText>().unwrap(), text);
        }
    }
}
