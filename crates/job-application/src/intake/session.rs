use std::mem;

use tracing::debug;

use super::domain::{ApplicationDraft, FormField, Position, Skill};
use super::validation::{ValidationErrors, Validator};

/// A single change event coming from a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Text, select, number, textarea, or date-time input replaced wholesale.
    Value { field: FormField, value: String },
    /// Checkbox in the skills group was checked or unchecked.
    Skill { skill: Skill, checked: bool },
}

impl FieldEdit {
    pub fn value(field: FormField, value: impl Into<String>) -> Self {
        FieldEdit::Value {
            field,
            value: value.into(),
        }
    }

    pub fn check(skill: Skill) -> Self {
        FieldEdit::Skill {
            skill,
            checked: true,
        }
    }

    pub fn uncheck(skill: Skill) -> Self {
        FieldEdit::Skill {
            skill,
            checked: false,
        }
    }

    /// Translate a submitted `name=value` pair. A pair naming a skill group
    /// entry is a checked box; unknown names and skills yield `None`.
    pub fn from_pair(name: &str, value: &str) -> Option<Self> {
        let field = FormField::parse(name)?;
        if field == FormField::AdditionalSkills {
            return Skill::parse(value).map(FieldEdit::check);
        }
        Some(FieldEdit::value(field, value))
    }
}

/// Where the session is between edits and submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Rejected,
    Accepted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft passed validation and was handed out; the session starts over.
    Accepted(ApplicationDraft),
    /// Draft kept as-is with the errors attached for display.
    Rejected(ValidationErrors),
}

/// Owns the draft for one editing session.
#[derive(Debug, Clone)]
pub struct FormSession {
    draft: ApplicationDraft,
    errors: ValidationErrors,
    phase: FormPhase,
    validator: Validator,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_draft(ApplicationDraft::default())
    }

    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
            validator: Validator::new(),
        }
    }

    /// Rebuild a session from submitted `name=value` pairs, as a browser posts them.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut session = Self::new();
        for (name, value) in pairs {
            match FieldEdit::from_pair(name, value) {
                Some(edit) => session.apply(edit),
                None => debug!(field = name, "ignoring unrecognised form pair"),
            }
        }
        session
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Apply one change event. Errors from the last submit stay on display
    /// until the next submit recomputes them.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Value { field, value } => self.set_value(field, value),
            FieldEdit::Skill { skill, checked } => self.toggle_skill(skill, checked),
        }
        self.phase = FormPhase::Editing;
    }

    fn set_value(&mut self, field: FormField, value: String) {
        if field == FormField::Position {
            let position = Position::parse(&value);
            if position.is_none() && !value.is_empty() {
                debug!(value = %value, "unknown position treated as unset");
            }
            self.draft.position = position;
            return;
        }

        match self.draft.text_mut(field) {
            Some(slot) => *slot = value,
            None => debug!(%field, "field does not take a single value"),
        }
    }

    fn toggle_skill(&mut self, skill: Skill, checked: bool) {
        if checked {
            self.draft.additional_skills.insert(skill);
        } else {
            self.draft.additional_skills.remove(&skill);
        }
    }

    /// Fields currently rendered for the selected position.
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_visible(self.draft.position))
            .collect()
    }

    /// Run the validator without changing phase or displayed errors.
    pub fn check(&self) -> ValidationErrors {
        self.validator.validate(&self.draft)
    }

    /// Validate and either hand the draft out or keep it with errors attached.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = self.validator.validate(&self.draft);

        if errors.is_empty() {
            let accepted = mem::take(&mut self.draft);
            self.errors = ValidationErrors::default();
            self.phase = FormPhase::Accepted;
            SubmitOutcome::Accepted(accepted)
        } else {
            self.errors = errors.clone();
            self.phase = FormPhase::Rejected;
            SubmitOutcome::Rejected(errors)
        }
    }
}
