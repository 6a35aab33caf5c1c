use chrono::NaiveDateTime;
use maud::{html, Markup, DOCTYPE};

use super::domain::{ApplicationDraft, FormField, Position, Skill};
use super::validation::ValidationErrors;

pub const FORM_PATH: &str = "/apply";
pub const REFRESH_INTENT: &str = "refresh";

const DATETIME_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}

fn error_line(errors: &ValidationErrors, field: FormField) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            p class="field-error" id={ (field.name()) "-error" } { (message) }
        }
    }
}

fn text_input(draft: &ApplicationDraft, errors: &ValidationErrors, field: FormField, kind: &str) -> Markup {
    let value = draft.text(field).unwrap_or_default();
    html! {
        div class="field" {
            label for=(field.name()) { (field.label()) ":" }
            input type=(kind) id=(field.name()) name=(field.name()) value=(value);
            (error_line(errors, field))
        }
    }
}

/// Conditional values survive while their section is hidden.
fn hidden_input(draft: &ApplicationDraft, field: FormField) -> Markup {
    let value = draft.text(field).unwrap_or_default();
    html! {
        @if !value.is_empty() {
            input type="hidden" name=(field.name()) value=(value);
        }
    }
}

fn position_select(draft: &ApplicationDraft) -> Markup {
    let field = FormField::Position;
    html! {
        div class="field" {
            label for=(field.name()) { (field.label()) ":" }
            select id=(field.name()) name=(field.name())
                onchange="this.form.querySelector('button[value=refresh]').click()" {
                option value="" selected[draft.position.is_none()] { "Select a position" }
                @for position in Position::ALL {
                    option value=(position.label()) selected[draft.position == Some(position)] {
                        (position.label())
                    }
                }
            }
        }
    }
}

fn conditional_section(draft: &ApplicationDraft, errors: &ValidationErrors, field: FormField) -> Markup {
    if !field.is_visible(draft.position) {
        return hidden_input(draft, field);
    }

    match field {
        FormField::RelevantExperience => text_input(draft, errors, field, "number"),
        FormField::ManagementExperience => html! {
            div class="field" {
                label for=(field.name()) { (field.label()) ":" }
                textarea id=(field.name()) name=(field.name()) { (draft.management_experience) }
                (error_line(errors, field))
            }
        },
        _ => text_input(draft, errors, field, "text"),
    }
}

fn skills_group(draft: &ApplicationDraft, errors: &ValidationErrors) -> Markup {
    let field = FormField::AdditionalSkills;
    html! {
        fieldset class="field" {
            legend { (field.label()) ":" }
            @for skill in Skill::CATALOG {
                label class="skill" {
                    input type="checkbox" name=(field.name()) value=(skill.label())
                        checked[draft.additional_skills.contains(&skill)];
                    (skill.label())
                }
            }
            (error_line(errors, field))
        }
    }
}

/// The full form bound to `draft`, with inline messages for `errors`.
pub fn render_form(draft: &ApplicationDraft, errors: &ValidationErrors) -> Markup {
    let body = html! {
        main {
            h1 { "Job Application" }
            form method="post" action=(FORM_PATH) novalidate {
                (text_input(draft, errors, FormField::FullName, "text"))
                (text_input(draft, errors, FormField::Email, "email"))
                (text_input(draft, errors, FormField::PhoneNumber, "text"))
                (position_select(draft))
                (conditional_section(draft, errors, FormField::RelevantExperience))
                (conditional_section(draft, errors, FormField::PortfolioUrl))
                (conditional_section(draft, errors, FormField::ManagementExperience))
                (skills_group(draft, errors))
                (text_input(draft, errors, FormField::PreferredInterviewTime, "datetime-local"))
                div class="actions" {
                    // First submit button is the implicit one for Enter.
                    button type="submit" name="intent" value="submit" { "Submit" }
                    button type="submit" name="intent" value=(REFRESH_INTENT) {
                        "Update form"
                    }
                }
            }
        }
    };
    page("Job Application", body)
}

/// Human readable interview slot, falling back to the raw value.
pub fn describe_interview_time(raw: &str) -> String {
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|slot| slot.format("%A %-d %B %Y at %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Acceptance page echoing the collected values.
pub fn render_accepted(draft: &ApplicationDraft) -> Result<Markup, serde_json::Error> {
    let serialized = serde_json::to_string_pretty(draft)?;
    let body = html! {
        main {
            h1 { "Application received" }
            p {
                "Thanks, " (draft.full_name) ". Preferred interview: "
                (describe_interview_time(&draft.preferred_interview_time)) "."
            }
            pre id="submitted-application" { (serialized) }
            a href=(FORM_PATH) { "Start another application" }
        }
    };
    Ok(page("Application received", body))
}
