use crate::models::resume::{provided, ResumeDocument};

/// The builder's progress bar counts seven filled-in fields against a
/// denominator of eight, so a complete résumé reads 88%.
const PROGRESS_FIELDS: f64 = 8.0;

/// Percentage of the résumé builder the user has filled in, 0 – 100.
pub fn completion_progress(document: &ResumeDocument) -> u8 {
    let info = &document.personal_info;
    let completed = [
        provided(info.full_name.as_deref()),
        provided(info.email.as_deref()),
        !document.distinct_skills().is_empty(),
        !document.experience.is_empty(),
        !document.education.is_empty(),
        !document.projects.is_empty(),
        provided(document.summary.as_deref()),
    ]
    .into_iter()
    .filter(|done| *done)
    .count();

    ((completed as f64 / PROGRESS_FIELDS) * 100.0).round().min(100.0) as u8
}
