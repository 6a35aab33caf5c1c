use once_cell::sync::Lazy;
use regex::Regex;

use crate::intake::domain::{ApplicationDraft, FormField, Position};

// Unanchored: any `text@text.text` run inside the value is accepted.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static PORTFOLIO_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).unwrap());

/// One entry of the rule table: when `violated` holds for the draft, `field`
/// carries `message`.
pub(crate) struct FieldRule {
    pub field: FormField,
    pub violated: fn(&ApplicationDraft) -> bool,
    pub message: &'static str,
}

/// Ordered rule table. Fields are independent; within one field the first
/// violated entry wins.
pub(crate) const RULES: &[FieldRule] = &[
    FieldRule {
        field: FormField::FullName,
        violated: |draft| draft.full_name.is_empty(),
        message: "Full Name is required",
    },
    FieldRule {
        field: FormField::Email,
        violated: |draft| draft.email.is_empty(),
        message: "Email is required",
    },
    FieldRule {
        field: FormField::Email,
        violated: |draft| !is_email_shaped(&draft.email),
        message: "Email address is invalid",
    },
    FieldRule {
        field: FormField::PhoneNumber,
        violated: |draft| draft.phone_number.is_empty(),
        message: "Phone Number is required",
    },
    FieldRule {
        field: FormField::PhoneNumber,
        violated: |draft| !is_digits_only(&draft.phone_number),
        message: "Phone Number must be a valid number",
    },
    FieldRule {
        field: FormField::RelevantExperience,
        violated: |draft| {
            draft.position.is_some_and(Position::tracks_experience)
                && !draft.experience_years().is_some_and(|years| years > 0.0)
        },
        message: "Relevant Experience is required and must be a number greater than 0",
    },
    FieldRule {
        field: FormField::PortfolioUrl,
        violated: |draft| {
            draft.position == Some(Position::Designer) && draft.portfolio_url.is_empty()
        },
        message: "Portfolio URL is required",
    },
    FieldRule {
        field: FormField::PortfolioUrl,
        violated: |draft| {
            !draft.portfolio_url.is_empty() && !is_portfolio_url(&draft.portfolio_url)
        },
        message: "Portfolio URL is invalid",
    },
    FieldRule {
        field: FormField::ManagementExperience,
        violated: |draft| {
            draft.position == Some(Position::Manager) && draft.management_experience.is_empty()
        },
        message: "Management Experience is required",
    },
    FieldRule {
        field: FormField::AdditionalSkills,
        violated: |draft| draft.additional_skills.is_empty(),
        message: "At least one skill must be selected",
    },
    FieldRule {
        field: FormField::PreferredInterviewTime,
        violated: |draft| draft.preferred_interview_time.is_empty(),
        message: "Preferred Interview Time is required",
    },
];

pub(crate) fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub(crate) fn is_digits_only(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}

pub(crate) fn is_portfolio_url(value: &str) -> bool {
    PORTFOLIO_URL.is_match(value)
}
