//! Partial-field variants of [`Entry`] used at the system's edges:
//! [`NewEntry`] for creation, [`EntryPatch`] for edits and [`EntryFilter`]
//! for searches. Only creation validates field patterns; patches and
//! filters carry whatever the user supplied.

use crate::model::{check_name, check_phone, Entry, FieldError, ValidationErrors, MIN_NAME_LEN};
use serde::Deserialize;

/// Candidate for a new entry. All fields optional so that validation can
/// report every missing or malformed field in one pass; a supplied `id`
/// is ignored and overwritten on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntry {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub organization: Option<String>,
    pub office_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl NewEntry {
    /// Validate every field and build the complete [`Entry`] with the
    /// given id, or report all offending fields at once.
    pub fn into_entry(self, id: u64) -> Result<Entry, ValidationErrors> {
        let mut errors = Vec::new();

        let first_name = required_name("first_name", self.first_name, &mut errors);
        let last_name = required_name("last_name", self.last_name, &mut errors);
        let middle_name = optional_name("middle_name", self.middle_name, &mut errors);
        let office_phone = optional_phone("office_phone", self.office_phone, &mut errors);
        let personal_phone = optional_phone("personal_phone", self.personal_phone, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(Entry {
            id,
            first_name,
            last_name,
            middle_name,
            organization: self.organization,
            office_phone,
            personal_phone,
        })
    }
}

fn required_name(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> String {
    match value {
        Some(value) => {
            check_name(field, &value, MIN_NAME_LEN, errors);
            value
        }
        None => {
            errors.push(FieldError::new(field, "field is required"));
            String::new()
        }
    }
}

fn optional_name(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(value) = &value {
        check_name(field, value, 1, errors);
    }
    value
}

fn optional_phone(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(value) = &value {
        check_phone(field, value, errors);
    }
    value
}

/// A partial set of field values applied to an existing entry. Absent,
/// null and empty-string values all mean "leave the stored value alone";
/// only non-empty values overwrite. The id is never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub organization: Option<String>,
    pub office_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl EntryPatch {
    pub fn apply(&self, entry: &mut Entry) {
        set(&mut entry.first_name, &self.first_name);
        set(&mut entry.last_name, &self.last_name);
        set_opt(&mut entry.middle_name, &self.middle_name);
        set_opt(&mut entry.organization, &self.organization);
        set_opt(&mut entry.office_phone, &self.office_phone);
        set_opt(&mut entry.personal_phone, &self.personal_phone);
    }
}

fn set(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *target = value.clone();
        }
    }
}

fn set_opt(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *target = Some(value.clone());
        }
    }
}

/// A partial set of field values used to match entries during search.
/// Present non-null fields must equal the stored value exactly; absent
/// fields impose no constraint, so the empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryFilter {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub organization: Option<String>,
    pub office_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(id) = self.id {
            if entry.id != id {
                return false;
            }
        }
        eq(&self.first_name, Some(&entry.first_name))
            && eq(&self.last_name, Some(&entry.last_name))
            && eq(&self.middle_name, entry.middle_name.as_ref())
            && eq(&self.organization, entry.organization.as_ref())
            && eq(&self.office_phone, entry.office_phone.as_ref())
            && eq(&self.personal_phone, entry.personal_phone.as_ref())
    }
}

fn eq(wanted: &Option<String>, stored: Option<&String>) -> bool {
    match wanted {
        Some(wanted) => stored == Some(wanted),
        None => true,
    }
}
