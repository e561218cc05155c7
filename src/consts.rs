/// Maximum valid civil year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day any month can have
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator of the ISO form used by `CivilDate`'s `Display`/`FromStr`
pub const ISO_SEPARATOR: char = '-';

/// Display format of the mask, with the year shown in the regional era
pub const DISPLAY_FORMAT: &str = "DD/MM/YYYY";

/// Number of character positions in the mask
pub const TEMPLATE_LEN: usize = 10;
/// Number of editable digit slots in the mask
pub const DIGIT_SLOTS: usize = 8;

/// Literal separator between fields of the mask
pub const MASK_SEPARATOR: char = '/';
/// Character shown in an editable slot that has no digit yet
pub const PLACEHOLDER: char = '_';
/// Mask with every editable slot empty
pub const BLANK_MASK: &str = "__/__/____";

/// First slot of the day field
pub const DAY_START: usize = 0;
/// First slot of the month field
pub const MONTH_START: usize = 3;
/// First slot of the year field
pub const YEAR_START: usize = 6;

/// Editable slot indices, in ascending order
pub const EDITABLE_SLOTS: [usize; DIGIT_SLOTS] = [0, 1, 3, 4, 6, 7, 8, 9];

/// Buddhist era offset added to the civil year for display
pub const BUDDHIST_ERA_OFFSET: u16 = 543;
/// Civil years at or above this are taken as already regional and shown as-is
pub const ERA_THRESHOLD: u16 = 2400;
