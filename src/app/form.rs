//! Editable state of the add-configuration form.

use super::modes::FormField;
use crate::domain::FormFields;

/// Form contents plus the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            focus: FormField::Name,
        }
    }
}

impl FormState {
    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Cpu => &self.fields.cpu,
            FormField::Ram => &self.fields.ram,
            FormField::Storage => &self.fields.storage,
            FormField::Purpose => &self.fields.purpose,
            FormField::Note => &self.fields.note,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.fields.name,
            FormField::Cpu => &mut self.fields.cpu,
            FormField::Ram => &mut self.fields.ram,
            FormField::Storage => &mut self.fields.storage,
            FormField::Purpose => &mut self.fields.purpose,
            FormField::Note => &mut self.fields.note,
        }
    }

    /// Appends a character to the focused field.
    ///
    /// Control characters are dropped. Numeric fields still accept any
    /// printable character; validation reports bad quantities on submit.
    pub fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    /// Removes the last character of the focused field.
    pub fn pop(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Clears every field and returns focus to the first one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = FormState::default();
        form.push('D');
        form.focus_next();
        form.push('i');
        form.push('7');
        form.pop();
        assert_eq!(form.value(FormField::Name), "D");
        assert_eq!(form.value(FormField::Cpu), "i");
    }

    #[test]
    fn reset_clears_fields_and_focus() {
        let mut form = FormState::default();
        form.focus = FormField::Note;
        form.push('x');
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
