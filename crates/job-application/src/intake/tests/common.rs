use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{ApplicationDraft, Position, Skill};
use crate::intake::validation::{ValidationErrors, Validator};

pub(super) fn developer_draft() -> ApplicationDraft {
    let mut draft = ApplicationDraft {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "5551234567".to_string(),
        position: Some(Position::Developer),
        relevant_experience: "3".to_string(),
        preferred_interview_time: "2026-10-20T14:30".to_string(),
        ..ApplicationDraft::default()
    };
    draft.additional_skills.insert(Skill::Python);
    draft
}

pub(super) fn designer_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Some(Position::Designer),
        portfolio_url: "https://ada.design".to_string(),
        ..developer_draft()
    }
}

pub(super) fn manager_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Some(Position::Manager),
        relevant_experience: String::new(),
        management_experience: "Led a team of six for two years".to_string(),
        ..developer_draft()
    }
}

pub(super) fn validate(draft: &ApplicationDraft) -> ValidationErrors {
    Validator::new().validate(draft)
}

/// Form-encoded body for a draft, the way a browser posts the form.
pub(super) fn form_body(draft: &ApplicationDraft, intent: &str) -> String {
    let mut pairs = vec![
        ("fullName", draft.full_name.clone()),
        ("email", draft.email.clone()),
        ("phoneNumber", draft.phone_number.clone()),
        (
            "position",
            draft
                .position
                .map(|position| position.label().to_string())
                .unwrap_or_default(),
        ),
        ("relevantExperience", draft.relevant_experience.clone()),
        ("portfolioURL", draft.portfolio_url.clone()),
        ("managementExperience", draft.management_experience.clone()),
        ("preferredInterviewTime", draft.preferred_interview_time.clone()),
        ("intent", intent.to_string()),
    ];
    for skill in &draft.additional_skills {
        pairs.push(("additionalSkills", skill.label().to_string()));
    }

    pairs
        .into_iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_str(&body).expect("json payload")
}
