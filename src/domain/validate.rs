//! Client-side validation of the add-configuration form.
//!
//! Nothing here touches the network; a submission that fails validation never
//! produces a request.

use super::error::ValidationError;
use super::record::NewPcRecord;

/// Raw form values exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub purpose: String,
    pub note: String,
}

/// A submission that passed validation, with trimmed text and parsed sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub name: String,
    pub cpu: String,
    pub ram: u64,
    pub storage: u64,
    pub purpose: String,
    pub note: Option<String>,
}

impl ValidatedRecord {
    /// Attaches an identifier and produces the create body.
    #[must_use]
    pub fn into_new_record(self, id: String) -> NewPcRecord {
        NewPcRecord {
            id,
            name: self.name,
            cpu: self.cpu,
            ram: self.ram,
            storage: self.storage,
            purpose: self.purpose,
            note: self.note.unwrap_or_default(),
        }
    }
}

/// Parses a strictly positive whole number.
///
/// Returns `0` (the invalid sentinel) unless the trimmed input is one or more
/// ASCII digits with a value above zero. Signs, decimal points and values that
/// overflow `u64` are all invalid.
///
/// ```
/// use rigbook::domain::parse_positive_integer;
///
/// assert_eq!(parse_positive_integer("42"), 42);
/// assert_eq!(parse_positive_integer("-5"), 0);
/// assert_eq!(parse_positive_integer("3.2"), 0);
/// ```
#[must_use]
pub fn parse_positive_integer(raw: &str) -> u64 {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    raw.parse::<u64>().unwrap_or(0)
}

/// Validates a form submission.
///
/// Required text fields are checked before quantities, so a form that is
/// wrong in both ways reports [`ValidationError::MissingRequiredField`].
///
/// # Errors
///
/// - [`ValidationError::MissingRequiredField`] if name, CPU or purpose is blank
/// - [`ValidationError::InvalidQuantity`] if RAM or storage is not a positive integer
pub fn validate_submission(fields: &FormFields) -> Result<ValidatedRecord, ValidationError> {
    let name = fields.name.trim();
    let cpu = fields.cpu.trim();
    let purpose = fields.purpose.trim();

    if name.is_empty() || cpu.is_empty() || purpose.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }

    let ram = parse_positive_integer(&fields.ram);
    let storage = parse_positive_integer(&fields.storage);
    if ram == 0 || storage == 0 {
        return Err(ValidationError::InvalidQuantity);
    }

    let note = fields.note.trim();

    Ok(ValidatedRecord {
        name: name.to_string(),
        cpu: cpu.to_string(),
        ram,
        storage,
        purpose: purpose.to_string(),
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "  Office box ".to_string(),
            cpu: "i5-12400".to_string(),
            ram: "16".to_string(),
            storage: " 512 ".to_string(),
            purpose: "Work".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn invalid_quantities_yield_sentinel() {
        for raw in ["0", "-5", "3.2", "", "abc", "   ", "+7", "99999999999999999999999"] {
            assert_eq!(parse_positive_integer(raw), 0, "input {raw:?}");
        }
        assert_eq!(parse_positive_integer("42"), 42);
        assert_eq!(parse_positive_integer(" 007 "), 7);
    }

    #[test]
    fn trims_and_parses_valid_submission() {
        let record = validate_submission(&filled()).unwrap();
        assert_eq!(record.name, "Office box");
        assert_eq!(record.storage, 512);
        assert_eq!(record.note, None);
    }

    #[test]
    fn blank_name_is_missing_field() {
        let mut fields = filled();
        fields.name = "   ".to_string();
        assert_eq!(
            validate_submission(&fields),
            Err(ValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn missing_field_wins_over_bad_quantity() {
        let mut fields = filled();
        fields.purpose.clear();
        fields.ram = "lots".to_string();
        assert_eq!(
            validate_submission(&fields),
            Err(ValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn zero_storage_is_invalid_quantity() {
        let mut fields = filled();
        fields.storage = "0".to_string();
        assert_eq!(
            validate_submission(&fields),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn new_record_carries_empty_note_string() {
        let body = validate_submission(&filled())
            .unwrap()
            .into_new_record("id-1".to_string());
        assert_eq!(body.id, "id-1");
        assert_eq!(body.note, "");
    }
}
