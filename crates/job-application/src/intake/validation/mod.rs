mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationDraft, FormField};

/// Stateless evaluator applying the field rule table to a draft.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Recompute every field's error from scratch.
    pub fn validate(&self, draft: &ApplicationDraft) -> ValidationErrors {
        let mut errors = BTreeMap::new();

        for rule in rules::RULES {
            if errors.contains_key(&rule.field) {
                continue;
            }
            if (rule.violated)(draft) {
                errors.insert(rule.field, rule.message.to_string());
            }
        }

        ValidationErrors(errors)
    }
}

/// Field name to message for every invalid field. Valid fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Comma separated wire names, for log lines.
    pub fn field_names(&self) -> String {
        self.fields()
            .map(FormField::name)
            .collect::<Vec<_>>()
            .join(",")
    }
}
