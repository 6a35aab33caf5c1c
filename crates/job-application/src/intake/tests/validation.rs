use super::common::*;
use crate::intake::domain::{ApplicationDraft, FormField, Position, Skill};

#[test]
fn complete_developer_draft_has_no_errors() {
    let errors = validate(&developer_draft());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn empty_draft_reports_every_unconditional_field() {
    let errors = validate(&ApplicationDraft::default());

    assert_eq!(errors.get(FormField::FullName), Some("Full Name is required"));
    assert_eq!(errors.get(FormField::Email), Some("Email is required"));
    assert_eq!(
        errors.get(FormField::PhoneNumber),
        Some("Phone Number is required")
    );
    assert_eq!(
        errors.get(FormField::AdditionalSkills),
        Some("At least one skill must be selected")
    );
    assert_eq!(
        errors.get(FormField::PreferredInterviewTime),
        Some("Preferred Interview Time is required")
    );
    assert_eq!(errors.len(), 5);
}

#[test]
fn missing_full_name_only_affects_full_name() {
    let mut draft = developer_draft();
    draft.full_name.clear();

    let errors = validate(&draft);

    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::FullName]);
}

#[test]
fn whitespace_counts_as_a_value() {
    let mut draft = developer_draft();
    draft.full_name = " ".to_string();
    assert!(!validate(&draft).contains(FormField::FullName));
}

#[test]
fn email_shape_checks() {
    let mut draft = developer_draft();

    draft.email = "a@b.c".to_string();
    assert!(!validate(&draft).contains(FormField::Email));

    draft.email = "abc".to_string();
    assert_eq!(
        validate(&draft).get(FormField::Email),
        Some("Email address is invalid")
    );

    draft.email.clear();
    assert_eq!(validate(&draft).get(FormField::Email), Some("Email is required"));
}

#[test]
fn phone_number_checks() {
    let mut draft = developer_draft();

    draft.phone_number = "12345".to_string();
    assert!(!validate(&draft).contains(FormField::PhoneNumber));

    draft.phone_number = "123-45".to_string();
    assert_eq!(
        validate(&draft).get(FormField::PhoneNumber),
        Some("Phone Number must be a valid number")
    );

    draft.phone_number.clear();
    assert_eq!(
        validate(&draft).get(FormField::PhoneNumber),
        Some("Phone Number is required")
    );
}

#[test]
fn developer_needs_positive_experience() {
    let mut draft = developer_draft();
    let message = "Relevant Experience is required and must be a number greater than 0";

    for raw in ["0", "", "-2", "lots"] {
        draft.relevant_experience = raw.to_string();
        assert_eq!(
            validate(&draft).get(FormField::RelevantExperience),
            Some(message),
            "value {raw:?}"
        );
    }

    draft.relevant_experience = "3".to_string();
    assert!(!validate(&draft).contains(FormField::RelevantExperience));

    draft.relevant_experience = "0.5".to_string();
    assert!(!validate(&draft).contains(FormField::RelevantExperience));
}

#[test]
fn experience_is_not_required_without_a_tracking_position() {
    let mut draft = developer_draft();
    draft.relevant_experience.clear();

    draft.position = None;
    assert!(!validate(&draft).contains(FormField::RelevantExperience));

    draft.position = Some(Position::Manager);
    draft.management_experience = "Ran the studio".to_string();
    assert!(!validate(&draft).contains(FormField::RelevantExperience));
}

#[test]
fn designer_portfolio_checks() {
    let mut draft = designer_draft();

    draft.portfolio_url.clear();
    assert_eq!(
        validate(&draft).get(FormField::PortfolioUrl),
        Some("Portfolio URL is required")
    );

    draft.portfolio_url = "not-a-url".to_string();
    assert_eq!(
        validate(&draft).get(FormField::PortfolioUrl),
        Some("Portfolio URL is invalid")
    );

    draft.portfolio_url = "https://x.com".to_string();
    assert!(validate(&draft).is_empty());
}

#[test]
fn portfolio_format_applies_regardless_of_position() {
    let mut draft = developer_draft();
    draft.portfolio_url = "not-a-url".to_string();

    assert_eq!(
        validate(&draft).get(FormField::PortfolioUrl),
        Some("Portfolio URL is invalid")
    );

    draft.portfolio_url.clear();
    assert!(!validate(&draft).contains(FormField::PortfolioUrl));
}

#[test]
fn manager_needs_management_experience() {
    let mut draft = manager_draft();
    assert!(validate(&draft).is_empty());

    draft.management_experience.clear();
    assert_eq!(
        validate(&draft).get(FormField::ManagementExperience),
        Some("Management Experience is required")
    );
}

#[test]
fn skills_and_interview_time_are_always_required() {
    let mut draft = manager_draft();
    draft.additional_skills.clear();
    draft.preferred_interview_time.clear();

    let errors = validate(&draft);
    assert!(errors.contains(FormField::AdditionalSkills));
    assert!(errors.contains(FormField::PreferredInterviewTime));

    draft.additional_skills.insert(Skill::Css);
    draft.preferred_interview_time = "tomorrow".to_string();
    assert!(validate(&draft).is_empty());
}

#[test]
fn validation_is_idempotent() {
    let mut draft = designer_draft();
    draft.email = "abc".to_string();
    draft.portfolio_url = "not-a-url".to_string();

    let first = validate(&draft);
    let second = validate(&draft);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn errors_serialize_by_wire_name() {
    let mut draft = designer_draft();
    draft.portfolio_url.clear();
    draft.phone_number = "12 34".to_string();

    let value = serde_json::to_value(validate(&draft)).expect("errors serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "phoneNumber": "Phone Number must be a valid number",
            "portfolioURL": "Portfolio URL is required",
        })
    );
}
