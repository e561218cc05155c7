//! Slot layout of the `DD/MM/YYYY` template.
//!
//! Every function here is total: indices past the end of the template are
//! simply not editable and belong to no field.

use std::ops::Range;

use crate::consts::{DAY_START, EDITABLE_SLOTS, MONTH_START, TEMPLATE_LEN, YEAR_START};

/// One of the three digit groups of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// Slot indices covered by this field.
    pub const fn slots(self) -> Range<usize> {
        match self {
            Self::Day => DAY_START..DAY_START + 2,
            Self::Month => MONTH_START..MONTH_START + 2,
            Self::Year => YEAR_START..YEAR_START + 4,
        }
    }

    pub const fn start(self) -> usize {
        self.slots().start
    }

    pub const fn width(self) -> usize {
        self.slots().end - self.slots().start
    }
}

pub fn is_editable(i: usize) -> bool {
    field_of(i).is_some()
}

pub fn is_day_slot(i: usize) -> bool {
    Field::Day.slots().contains(&i)
}

pub fn is_month_slot(i: usize) -> bool {
    Field::Month.slots().contains(&i)
}

pub fn is_year_slot(i: usize) -> bool {
    Field::Year.slots().contains(&i)
}

/// Field owning slot `i`, if the slot is editable.
pub fn field_of(i: usize) -> Option<Field> {
    Field::ALL
        .into_iter()
        .find(|field| field.slots().contains(&i))
}

/// Smallest editable index strictly after `i`, or `TEMPLATE_LEN` when there is none.
pub fn next_editable(i: usize) -> usize {
    EDITABLE_SLOTS
        .iter()
        .copied()
        .find(|&slot| slot > i)
        .unwrap_or(TEMPLATE_LEN)
}

/// Largest editable index strictly before `i`, or `-1` when there is none.
pub fn prev_editable(i: usize) -> isize {
    EDITABLE_SLOTS
        .iter()
        .rev()
        .copied()
        .find(|&slot| slot < i)
        .and_then(|slot| isize::try_from(slot).ok())
        .unwrap_or(-1)
}

/// First editable index at or after `i`, or `TEMPLATE_LEN` when there is none.
pub fn editable_at_or_after(i: usize) -> usize {
    if is_editable(i) { i } else { next_editable(i) }
}

/// Caret target of the `/` key: start of the field after the caret's group.
pub const fn next_field_start(caret: usize) -> usize {
    if caret < MONTH_START {
        MONTH_START
    } else if caret < YEAR_START {
        YEAR_START
    } else {
        TEMPLATE_LEN
    }
}

/// Pointer placement rule: a caret on a literal moves to the start of the
/// next field group. Editable positions and the end of the text stay put.
pub fn snap_to_editable(pos: usize) -> usize {
    let pos = pos.min(TEMPLATE_LEN);
    if pos == TEMPLATE_LEN || is_editable(pos) {
        return pos;
    }
    Field::ALL
        .iter()
        .map(|field| field.start())
        .find(|&start| start >= pos)
        .unwrap_or(TEMPLATE_LEN)
}
