use super::common::*;
use crate::intake::domain::{ApplicationDraft, FormField, Position, Skill};
use crate::intake::session::{FieldEdit, FormPhase, FormSession, SubmitOutcome};

#[test]
fn new_session_starts_empty_and_editing() {
    let session = FormSession::new();

    assert_eq!(session.draft(), &ApplicationDraft::default());
    assert!(session.errors().is_empty());
    assert_eq!(session.phase(), FormPhase::Editing);
}

#[test]
fn value_edits_replace_the_field() {
    let mut session = FormSession::new();

    session.apply(FieldEdit::value(FormField::FullName, "Ada"));
    session.apply(FieldEdit::value(FormField::FullName, "Ada Lovelace"));
    session.apply(FieldEdit::value(FormField::Position, "Manager"));

    assert_eq!(session.draft().full_name, "Ada Lovelace");
    assert_eq!(session.draft().position, Some(Position::Manager));

    session.apply(FieldEdit::value(FormField::Position, ""));
    assert_eq!(session.draft().position, None);
}

#[test]
fn skill_checkboxes_toggle_set_membership() {
    let mut session = FormSession::new();

    session.apply(FieldEdit::check(Skill::React));
    session.apply(FieldEdit::check(Skill::React));
    session.apply(FieldEdit::check(Skill::Css));
    assert_eq!(session.draft().additional_skills.len(), 2);

    session.apply(FieldEdit::uncheck(Skill::React));
    assert!(!session.draft().additional_skills.contains(&Skill::React));
    assert!(session.draft().additional_skills.contains(&Skill::Css));

    session.apply(FieldEdit::uncheck(Skill::Python));
    assert_eq!(session.draft().additional_skills.len(), 1);
}

#[test]
fn visible_fields_follow_position() {
    let mut session = FormSession::new();
    assert!(!session.visible_fields().contains(&FormField::RelevantExperience));

    session.apply(FieldEdit::value(FormField::Position, "Designer"));
    let visible = session.visible_fields();
    assert!(visible.contains(&FormField::RelevantExperience));
    assert!(visible.contains(&FormField::PortfolioUrl));
    assert!(!visible.contains(&FormField::ManagementExperience));
}

#[test]
fn switching_position_keeps_stale_hidden_values() {
    let mut session = FormSession::with_draft(developer_draft());
    session.apply(FieldEdit::value(FormField::Position, "Designer"));
    session.apply(FieldEdit::value(FormField::PortfolioUrl, "portfolio please"));
    session.apply(FieldEdit::value(FormField::Position, "Developer"));

    assert_eq!(session.draft().portfolio_url, "portfolio please");
    assert!(!session.visible_fields().contains(&FormField::PortfolioUrl));

    match session.submit() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![FormField::PortfolioUrl]
            );
        }
        other => panic!("expected stale portfolio URL to fail, got {other:?}"),
    }
}

#[test]
fn rejected_submit_keeps_draft_and_exposes_errors() {
    let mut draft = developer_draft();
    draft.email = "abc".to_string();
    let mut session = FormSession::with_draft(draft.clone());

    let outcome = session.submit();

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(session.phase(), FormPhase::Rejected);
    assert_eq!(session.draft(), &draft);
    assert_eq!(
        session.errors().get(FormField::Email),
        Some("Email address is invalid")
    );

    session.apply(FieldEdit::value(FormField::Email, "ada@example.com"));
    assert_eq!(session.phase(), FormPhase::Editing);
    assert!(session.errors().contains(FormField::Email));
    assert!(session.check().is_empty());
}

#[test]
fn accepted_submit_hands_out_the_draft_and_resets() {
    let mut session = FormSession::with_draft(developer_draft());

    match session.submit() {
        SubmitOutcome::Accepted(draft) => assert_eq!(draft, developer_draft()),
        other => panic!("expected acceptance, got {other:?}"),
    }

    assert_eq!(session.phase(), FormPhase::Accepted);
    assert_eq!(session.draft(), &ApplicationDraft::default());
    assert!(session.errors().is_empty());
}

#[test]
fn from_pairs_binds_browser_submissions() {
    let session = FormSession::from_pairs([
        ("fullName", "Grace Hopper"),
        ("position", "Manager"),
        ("additionalSkills", "Python"),
        ("additionalSkills", "Node.js"),
        ("additionalSkills", "COBOL"),
        ("favouriteColour", "blue"),
    ]);

    let draft = session.draft();
    assert_eq!(draft.full_name, "Grace Hopper");
    assert_eq!(draft.position, Some(Position::Manager));
    assert_eq!(
        draft.additional_skills.iter().copied().collect::<Vec<_>>(),
        vec![Skill::Python, Skill::NodeJs]
    );
}

#[test]
fn unknown_position_is_treated_as_unset() {
    let mut session = FormSession::with_draft(developer_draft());
    session.apply(FieldEdit::value(FormField::Position, "Intern"));
    assert_eq!(session.draft().position, None);
}

#[test]
fn skills_field_ignores_plain_value_edits() {
    let mut session = FormSession::new();
    session.apply(FieldEdit::value(FormField::AdditionalSkills, "React"));
    assert!(session.draft().additional_skills.is_empty());
}
