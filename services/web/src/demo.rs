use clap::Args;
use job_application::error::AppError;
use job_application::intake::view::describe_interview_time;
use job_application::intake::{
    load_draft, ApplicationDraft, FieldEdit, FormField, FormSession, Skill, SubmitOutcome,
    ValidationErrors,
};
use std::path::PathBuf;

/// Process exit status for a rejected draft. Load failures exit with 1.
pub(crate) const REJECTED_EXIT_STATUS: u8 = 2;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a JSON draft using the form's field names (fullName, email, ...)
    #[arg(long)]
    pub(crate) draft: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applicant name used throughout the scripted session
    #[arg(long, default_value = "Ada Lovelace")]
    pub(crate) name: String,
    /// Print the draft after every edit, not only at submit time
    #[arg(long)]
    pub(crate) verbose: bool,
}

pub(crate) fn exit_status(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Accepted(_) => 0,
        SubmitOutcome::Rejected(_) => REJECTED_EXIT_STATUS,
    }
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<SubmitOutcome, AppError> {
    let draft = load_draft(&args.draft)?;

    let outcome = FormSession::with_draft(draft).submit();
    render_outcome(&outcome)?;
    Ok(outcome)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<SubmitOutcome, AppError> {
    let DemoArgs { name, verbose } = args;
    let mut session = FormSession::new();

    println!("Job application demo");
    let script = [
        FieldEdit::value(FormField::FullName, name),
        FieldEdit::value(FormField::Email, "ada@example.com"),
        FieldEdit::value(FormField::PhoneNumber, "555-0100"),
        FieldEdit::value(FormField::Position, "Designer"),
        FieldEdit::value(FormField::RelevantExperience, "4"),
        FieldEdit::value(FormField::PortfolioUrl, "ada.design"),
        FieldEdit::check(Skill::Css),
        FieldEdit::check(Skill::React),
        FieldEdit::uncheck(Skill::React),
    ];
    apply_all(&mut session, script, verbose);

    println!("\nSubmitting first attempt");
    let first = session.submit();
    render_outcome(&first)?;
    if matches!(first, SubmitOutcome::Accepted(_)) {
        return Ok(first);
    }

    let corrections = [
        FieldEdit::value(FormField::PhoneNumber, "5550100"),
        FieldEdit::value(FormField::PortfolioUrl, "https://ada.design"),
        FieldEdit::value(FormField::PreferredInterviewTime, "2026-10-20T14:30"),
    ];
    apply_all(&mut session, corrections, verbose);

    println!("\nSubmitting corrected draft");
    let second = session.submit();
    render_outcome(&second)?;
    Ok(second)
}

fn apply_all<I>(session: &mut FormSession, edits: I, verbose: bool)
where
    I: IntoIterator<Item = FieldEdit>,
{
    for edit in edits {
        println!("- {}", describe_edit(&edit));
        session.apply(edit);
        if verbose {
            let visible: Vec<&str> = session
                .visible_fields()
                .into_iter()
                .map(FormField::name)
                .collect();
            println!("  visible: {}", visible.join(", "));
        }
    }
}

fn describe_edit(edit: &FieldEdit) -> String {
    match edit {
        FieldEdit::Value { field, value } => format!("{} = {value:?}", field.label()),
        FieldEdit::Skill { skill, checked } => {
            let verb = if *checked { "check" } else { "uncheck" };
            format!("{verb} {}", skill.label())
        }
    }
}

fn render_outcome(outcome: &SubmitOutcome) -> Result<(), AppError> {
    match outcome {
        SubmitOutcome::Accepted(draft) => render_accepted(draft),
        SubmitOutcome::Rejected(errors) => {
            render_errors(errors);
            Ok(())
        }
    }
}

fn render_errors(errors: &ValidationErrors) {
    println!("Rejected with {} error(s)", errors.len());
    for (field, message) in errors.iter() {
        println!("- {}: {message}", field.name());
    }
}

fn render_accepted(draft: &ApplicationDraft) -> Result<(), AppError> {
    println!("Accepted application");
    if !draft.preferred_interview_time.is_empty() {
        println!(
            "Preferred interview: {}",
            describe_interview_time(&draft.preferred_interview_time)
        );
    }
    println!("{}", serde_json::to_string_pretty(draft)?);
    Ok(())
}
