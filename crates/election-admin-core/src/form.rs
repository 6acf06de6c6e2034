//! Form Rules and Validation
//!
//! Fields declare their rules once in the entity schema; `validate` is a pure
//! function recomputed on every change, so there is no validator object to
//! keep in sync with the inputs.

use std::collections::BTreeMap;

use validator::ValidateLength;

/// A single constraint on a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must not be blank
    Required,
    /// At least this many characters (blank values skip this rule)
    MinLength(u64),
    /// At most this many characters (blank values skip this rule)
    MaxLength(u64),
}

/// Declaration of one editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in `FormValues` and in error messages
    pub key: &'static str,
    /// Input label
    pub label: &'static str,
    /// Rules checked in order; the first failure is reported
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// First rule this value breaks, as a user-facing message.
    ///
    /// Lengths are measured on the trimmed value, which is what payloads carry.
    pub fn check(&self, value: &str) -> Option<String> {
        let value = value.trim();
        let blank = value.is_empty();
        self.rules.iter().find_map(|rule| match *rule {
            Rule::Required if blank => Some(format!("The {} field is required.", self.key)),
            Rule::MinLength(min)
                if !blank && !ValidateLength::<u64>::validate_length(&value, Some(min), None, None) =>
            {
                Some(format!("The {} must be at least {} characters.", self.key, min))
            }
            Rule::MaxLength(max)
                if !blank && !ValidateLength::<u64>::validate_length(&value, None, Some(max), None) =>
            {
                Some(format!("The {} may not be greater than {} characters.", self.key, max))
            }
            _ => None,
        })
    }
}

/// Field key → first failing message. Empty means the form may be submitted.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Current input values keyed by `FieldSpec::key`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    /// Blank values for every field of a form
    pub fn blank(form: &[FieldSpec]) -> Self {
        Self(form.iter().map(|field| (field.key, String::new())).collect())
    }

    /// Value of a field; missing fields read as empty
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    /// Builder-style `set`
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Validate every field of `form` against `values`
pub fn validate(form: &[FieldSpec], values: &FormValues) -> FieldErrors {
    form.iter()
        .filter_map(|field| field.check(values.get(field.key)).map(|message| (field.key, message)))
        .collect()
}
