use crate::{
    forms::{EVENTS_DISCLAIMER, SecretForm, SecretFormPhase, SubmissionState},
    notifications::NoticeKind,
    secrets::{SecretEvent, SecretsService},
};
use std::fmt::Write;

/// Renders the fields of the initialized form as text.
pub fn fields_report<S: SecretsService + ?Sized>(form: &SecretForm<'_, S>) -> String {
    let mut report = String::new();
    let context = form.context();
    let _ = writeln!(report, "Repository: {}/{}", context.org, context.repo);

    let fields = match form.phase() {
        SecretFormPhase::Ready { fields, .. } => fields,
        SecretFormPhase::Initializing => {
            let _ = writeln!(report, "Loading secret...");
            return report;
        }
        SecretFormPhase::Failed(message) => {
            let _ = writeln!(report, "Failed to load secret: {message}");
            return report;
        }
    };

    let _ = writeln!(report, "Name: {:?}", fields.name);
    let _ = writeln!(report, "Events:");
    for event in SecretEvent::ALL {
        let mark = if fields.events.contains(&event) { "x" } else { " " };
        let _ = writeln!(report, "  [{mark}] {}", event.label());
    }
    let _ = writeln!(report, "  {EVENTS_DISCLAIMER}");

    let _ = writeln!(report, "Images:");
    if let Some(hint) = fields.images.empty_hint() {
        let _ = writeln!(report, "  {hint}");
    }
    for image in fields.images.entries() {
        let _ = writeln!(report, "  - {}", image.value);
    }

    let _ = writeln!(report, "Allow commands: {}", fields.allow_command);

    if let Some(audit) = form.record().and_then(|record| record.audit.as_ref()) {
        let _ = writeln!(
            report,
            "Updated by {} at {}",
            audit.updated_by,
            audit.updated_at.unix_timestamp()
        );
    }

    report
}

/// Renders the outcome of the latest submission as text.
pub fn submission_report<S: SecretsService + ?Sized>(form: &SecretForm<'_, S>) -> String {
    let mut report = String::new();
    match form.submission() {
        SubmissionState::Idle => {}
        SubmissionState::Pending => {
            let _ = writeln!(report, "Saving secret...");
        }
        SubmissionState::Success(_) => write_notice(&mut report, form, NoticeKind::Success),
        SubmissionState::Error(_) => write_notice(&mut report, form, NoticeKind::Error),
    }

    if let Some(location) = form.back_location() {
        let _ = writeln!(report, "Back to secrets: {location}");
    }

    report
}

fn write_notice<S: SecretsService + ?Sized>(
    report: &mut String,
    form: &SecretForm<'_, S>,
    kind: NoticeKind,
) {
    if let Some(notice) = form.notifier().active(kind) {
        let _ = writeln!(report, "{}: {}", notice.title, notice.message);
    }
}

/// Indicates whether the latest submission failed.
pub fn submission_failed<S: SecretsService + ?Sized>(form: &SecretForm<'_, S>) -> bool {
    form.notifier().active(NoticeKind::Error).is_some()
        && matches!(form.submission(), SubmissionState::Error(_))
}
