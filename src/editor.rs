//! The masked date editor: keystroke handling and two-way binding.
//!
//! The owner feeds keystrokes through [`MaskedDateEditor::handle_key`] and
//! observed changes of its bound value through [`MaskedDateEditor::sync_external`].
//! Every edit is committed back through the `on_change` and `on_value_change`
//! callbacks with the parsed date, or `None` while the mask is incomplete or
//! does not describe a real day.

use std::fmt;

use crate::config::{ConfigError, EditorConfig};
use crate::consts::TEMPLATE_LEN;
use crate::era::Era;
use crate::key::{Key, Selection};
use crate::mask::{MaskStatus, MaskText};
use crate::template::{
    editable_at_or_after, next_editable, next_field_start, prev_editable, snap_to_editable,
};
use crate::CivilDate;

/// Receives every committed value.
pub type DateCallback = Box<dyn FnMut(Option<CivilDate>)>;

/// What the host field should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Not handled; let the host field process it natively.
    Passthrough,
    /// Consumed with no visible change.
    Rejected,
    /// Consumed; render [`MaskedDateEditor::text`] and place the caret at `caret`.
    Applied { caret: usize },
}

impl KeyOutcome {
    /// Whether the host must cancel its default handling of the event.
    pub const fn is_consumed(self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

pub struct MaskedDateEditor {
    text: MaskText,
    caret: usize,
    /// Armed by a typing commit whose value the owner will echo back;
    /// consumed by the next observed external change.
    suppress_next_external_sync: bool,
    last_external: Option<CivilDate>,
    disabled: bool,
    calendar_open: bool,
    era: Era,
    on_change: Option<DateCallback>,
    on_value_change: Option<DateCallback>,
}

impl MaskedDateEditor {
    /// Creates an editor showing `initial`, or the blank mask.
    pub fn new(initial: Option<CivilDate>) -> Self {
        Self::build(initial, EditorConfig::default())
    }

    /// Creates an editor with explicit settings.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidEra` when the era cannot display every
    /// shifted year in four digits.
    pub fn with_config(
        initial: Option<CivilDate>,
        config: EditorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(initial, config))
    }

    fn build(initial: Option<CivilDate>, config: EditorConfig) -> Self {
        Self {
            text: render(initial, config.era),
            caret: 0,
            suppress_next_external_sync: false,
            last_external: initial,
            disabled: config.disabled,
            calendar_open: false,
            era: config.era,
            on_change: None,
            on_value_change: None,
        }
    }

    /// Sets the form-binding callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(Option<CivilDate>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Sets the auxiliary callback, invoked with the same value as `on_change`.
    #[must_use]
    pub fn on_value_change(mut self, callback: impl FnMut(Option<CivilDate>) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub const fn text(&self) -> MaskText {
        self.text
    }

    pub const fn caret(&self) -> usize {
        self.caret
    }

    pub const fn era(&self) -> Era {
        self.era
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.calendar_open = false;
        }
    }

    /// Whether the next observed external change will be ignored.
    pub const fn is_sync_suppressed(&self) -> bool {
        self.suppress_next_external_sync
    }

    /// The committed value of the current text.
    pub fn value(&self) -> Option<CivilDate> {
        self.text.to_date(self.era)
    }

    pub fn status(&self) -> MaskStatus {
        self.text.status(self.era)
    }

    /// Applies one keystroke. `selection` is the host field's selection at the
    /// time of the event.
    ///
    /// Invalid input never surfaces as an error: it is consumed and the text is
    /// left untouched.
    pub fn handle_key(&mut self, key: Key, selection: Selection) -> KeyOutcome {
        log::trace!(
            "key {key:?} at {}..{} on {}",
            selection.start(),
            selection.end(),
            self.text
        );
        match key {
            Key::Navigation(_) | Key::Control => KeyOutcome::Passthrough,
            _ if self.disabled => KeyOutcome::Rejected,
            Key::Digit(digit) => self.type_digit(digit, selection),
            Key::Backspace => self.backspace(selection),
            Key::Delete => self.delete(selection),
            Key::Slash => self.move_caret(next_field_start(selection.start())),
            Key::Printable(ch) => {
                log::debug!("rejected non-digit {ch:?}");
                KeyOutcome::Rejected
            }
        }
    }

    /// [`Self::handle_key`] with a collapsed selection at `caret`.
    pub fn handle_key_at(&mut self, key: Key, caret: usize) -> KeyOutcome {
        self.handle_key(key, Selection::caret(caret))
    }

    fn type_digit(&mut self, digit: u8, selection: Selection) -> KeyOutcome {
        let slot = editable_at_or_after(selection.start());
        if slot >= TEMPLATE_LEN {
            return KeyOutcome::Rejected;
        }
        let Some(scratch) = self.text.with_digit(slot, digit) else {
            return KeyOutcome::Rejected;
        };
        if !scratch.validate_slot(slot) {
            log::debug!("rejected digit {digit} at slot {slot}: {scratch} is out of range");
            return KeyOutcome::Rejected;
        }
        self.text = scratch;
        self.commit_typed();
        self.move_caret(next_editable(slot))
    }

    fn backspace(&mut self, selection: Selection) -> KeyOutcome {
        let target = if selection.is_collapsed() {
            selection.start()
        } else {
            selection.end()
        };
        let Ok(slot) = usize::try_from(prev_editable(target)) else {
            return KeyOutcome::Rejected;
        };
        self.text.clear(slot);
        self.commit_typed();
        self.move_caret(slot)
    }

    fn delete(&mut self, selection: Selection) -> KeyOutcome {
        let slot = editable_at_or_after(selection.start());
        if !self.text.clear(slot) {
            return KeyOutcome::Rejected;
        }
        self.commit_typed();
        self.move_caret(slot)
    }

    fn move_caret(&mut self, caret: usize) -> KeyOutcome {
        self.caret = caret.min(TEMPLATE_LEN);
        log::trace!("caret -> {}", self.caret);
        KeyOutcome::Applied { caret: self.caret }
    }

    /// Commits the current text after a keystroke.
    fn commit_typed(&mut self) {
        let value = self.value();
        // the owner only echoes values it sees as a change; an echo still in
        // flight from an earlier commit keeps the flag armed
        self.suppress_next_external_sync |= value != self.last_external;
        log::debug!("typed {} commits {value:?}", self.text);
        self.emit(value);
    }

    fn emit(&mut self, value: Option<CivilDate>) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        if let Some(callback) = self.on_value_change.as_mut() {
            callback(value);
        }
    }

    /// Observes the owner's bound value. Returns `true` when the text was
    /// re-rendered from it.
    ///
    /// An unchanged value is not an observation. The first change after a
    /// typing commit is the owner's echo of that commit and is skipped so it
    /// cannot overwrite what is being typed.
    pub fn sync_external(&mut self, value: Option<CivilDate>) -> bool {
        if value == self.last_external {
            return false;
        }
        self.last_external = value;
        if std::mem::take(&mut self.suppress_next_external_sync) {
            log::debug!("skipped echo of {value:?}");
            return false;
        }
        self.text = render(value, self.era);
        log::debug!("external {value:?} renders {}", self.text);
        true
    }

    /// Like [`Self::sync_external`] for owners that hold the value as an ISO
    /// string. Anything that does not parse is treated as no value.
    pub fn sync_external_str(&mut self, value: Option<&str>) -> bool {
        let parsed = value
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| {
                raw.parse::<CivilDate>()
                    .map_err(|err| log::debug!("external {raw:?} is not a date: {err}"))
                    .ok()
            });
        self.sync_external(parsed)
    }

    /// Commits a date picked in the calendar popover and closes it.
    pub fn select_from_calendar(&mut self, value: Option<CivilDate>) {
        if self.disabled {
            log::debug!("ignored calendar selection while disabled");
            return;
        }
        self.calendar_open = false;
        self.suppress_next_external_sync = false;
        self.text = render(value, self.era);
        log::debug!("calendar commits {value:?}");
        self.emit(value);
    }

    pub const fn is_calendar_open(&self) -> bool {
        self.calendar_open
    }

    /// Opens the calendar popover. Returns `false` while disabled.
    pub fn open_calendar(&mut self) -> bool {
        self.calendar_open = !self.disabled;
        self.calendar_open
    }

    pub fn close_calendar(&mut self) {
        self.calendar_open = false;
    }

    pub fn toggle_calendar(&mut self) -> bool {
        if self.calendar_open {
            self.close_calendar();
            false
        } else {
            self.open_calendar()
        }
    }

    /// Focus placement: an empty field puts the caret on the first editable
    /// slot. Returns the new caret when it moved.
    pub fn focus(&mut self) -> Option<usize> {
        if !self.text.is_blank() {
            return None;
        }
        self.caret = editable_at_or_after(0);
        Some(self.caret)
    }

    /// Pointer placement: a click on a separator snaps to the next field.
    pub fn click(&mut self, pos: usize) -> usize {
        self.caret = snap_to_editable(pos);
        self.caret
    }
}

fn render(value: Option<CivilDate>, era: Era) -> MaskText {
    value.map_or_else(MaskText::blank, |date| MaskText::from_date(&date, era))
}

impl fmt::Debug for MaskedDateEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedDateEditor")
            .field("text", &self.text.to_string())
            .field("caret", &self.caret)
            .field("suppress_next_external_sync", &self.suppress_next_external_sync)
            .field("last_external", &self.last_external)
            .field("disabled", &self.disabled)
            .field("calendar_open", &self.calendar_open)
            .field("era", &self.era)
            .finish_non_exhaustive()
    }
}

impl Default for MaskedDateEditor {
    fn default() -> Self {
        Self::new(None)
    }
}
