use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use tracing::{debug, info};

use super::domain::ApplicationDraft;
use super::session::{FormSession, SubmitOutcome};
use super::validation::ValidationErrors;
use super::view::{render_accepted, render_form, FORM_PATH, REFRESH_INTENT};
use crate::error::AppError;

const INTENT_FIELD: &str = "intent";

/// Router builder exposing the HTML form and the JSON validation endpoint.
pub fn application_router() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(FORM_PATH) }))
        .route(FORM_PATH, get(form_handler).post(submit_handler))
        .route("/api/v1/applications/validate", post(validate_handler))
}

pub(crate) async fn form_handler() -> Html<String> {
    let session = FormSession::new();
    Html(render_form(session.draft(), session.errors()).into_string())
}

/// Rebuild the draft from the posted controls, then refresh or submit.
pub(crate) async fn submit_handler(
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let refresh = pairs
        .iter()
        .any(|(name, value)| name == INTENT_FIELD && value == REFRESH_INTENT);

    let mut session = FormSession::from_pairs(
        pairs
            .iter()
            .filter(|(name, _)| name != INTENT_FIELD)
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );

    if refresh {
        let markup = render_form(session.draft(), session.errors());
        return Ok(Html(markup.into_string()).into_response());
    }

    match session.submit() {
        SubmitOutcome::Accepted(draft) => {
            log_accepted(&draft);
            let markup = render_accepted(&draft)?;
            Ok(Html(markup.into_string()).into_response())
        }
        SubmitOutcome::Rejected(errors) => {
            log_rejected(&errors);
            let markup = render_form(session.draft(), session.errors());
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response())
        }
    }
}

pub(crate) async fn validate_handler(Json(draft): Json<ApplicationDraft>) -> Response {
    let mut session = FormSession::with_draft(draft);
    match session.submit() {
        SubmitOutcome::Accepted(draft) => {
            log_accepted(&draft);
            let payload = json!({
                "status": "accepted",
                "application": draft,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        SubmitOutcome::Rejected(errors) => {
            log_rejected(&errors);
            let payload = json!({
                "status": "rejected",
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

fn log_accepted(draft: &ApplicationDraft) {
    info!(
        position = draft.position.map(|position| position.label()).unwrap_or("unset"),
        skills = draft.additional_skills.len(),
        "job application accepted"
    );
}

fn log_rejected(errors: &ValidationErrors) {
    debug!(
        invalid = %errors.field_names(),
        count = errors.len(),
        "job application rejected"
    );
}
