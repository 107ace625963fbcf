//! Input, form focus and request state machines.
//!
//! [`InputMode`] decides how keys are interpreted and what the screen shows.
//! [`RequestState`] tracks the single catalog request that may be in flight;
//! it is independent of the input mode so the user can keep filtering while a
//! save or delete is pending.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and commands.
    ///
    /// Available keybindings: j/k (navigate), / (search), a (add),
    /// d (delete), r (reload), esc (clear filter), q (quit).
    Normal,

    /// Typing into the search bar. Every keystroke re-filters the list.
    Search,

    /// Editing the add-configuration form.
    Form,
}

/// Field of the add-configuration form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Cpu,
    Ram,
    Storage,
    Purpose,
    Note,
}

impl FormField {
    /// All fields in display and tab order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Cpu,
        Self::Ram,
        Self::Storage,
        Self::Purpose,
        Self::Note,
    ];

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Cpu => "CPU",
            Self::Ram => "RAM (GB)",
            Self::Storage => "Storage (GB)",
            Self::Purpose => "Purpose",
            Self::Note => "Note",
        }
    }

    /// Next field, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Cpu,
            Self::Cpu => Self::Ram,
            Self::Ram => Self::Storage,
            Self::Storage => Self::Purpose,
            Self::Purpose => Self::Note,
            Self::Note => Self::Name,
        }
    }

    /// Previous field, wrapping from the first to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Note,
            Self::Cpu => Self::Name,
            Self::Ram => Self::Cpu,
            Self::Storage => Self::Ram,
            Self::Purpose => Self::Storage,
            Self::Note => Self::Purpose,
        }
    }

    /// Whether the field expects a whole number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Ram | Self::Storage)
    }
}

/// Catalog request currently awaiting a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing in flight; submit, delete and reload are accepted.
    Idle,
    /// The collection is being (re)loaded.
    Loading,
    /// A create request is pending.
    Submitting,
    /// A delete request for this id is pending.
    Deleting { id: String },
}

impl RequestState {
    /// Short description for the header while a request is pending.
    #[must_use]
    pub const fn busy_label(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some("loading…"),
            Self::Submitting => Some("saving…"),
            Self::Deleting { .. } => Some("deleting…"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles_through_every_field() {
        let mut field = FormField::Name;
        for expected in FormField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Note);
    }
}
