//! ATS scoring: heuristic résumé score out of 100 across seven categories.
//!
//! Default: `HeuristicAtsScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn ResumeScorer>` so another backend can be
//! dropped in without touching the handlers.
//!
//! Category caps: contact 20, experience 20, education 15, skills 15,
//! keywords 20, formatting 5, completeness 5. Sub-scores stay `f64`; only
//! the overall score is rounded.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ats::grade::Grade;
use crate::ats::keywords::keyword_universe;
use crate::models::resume::{provided, ResumeDocument};

pub const CONTACT_INFO_MAX: f64 = 20.0;
pub const WORK_EXPERIENCE_MAX: f64 = 20.0;
pub const EDUCATION_MAX: f64 = 15.0;
pub const SKILLS_MAX: f64 = 15.0;
pub const KEYWORDS_MAX: f64 = 20.0;
pub const FORMATTING_MAX: f64 = 5.0;
pub const COMPLETENESS_MAX: f64 = 5.0;

/// Experience starting this many calendar years back (or later) is "recent".
const RECENT_EXPERIENCE_YEARS: i32 = 5;
const DETAILED_DESCRIPTION_CHARS: usize = 50;
const DETAILED_SUMMARY_CHARS: usize = 100;
const STRONG_SKILL_COUNT: usize = 5;
const STRONG_KEYWORD_SCORE: f64 = 15.0;
const MISSING_KEYWORDS_SHOWN: usize = 10;
const COMPLETENESS_SECTIONS: usize = 7;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub contact_info: f64,
    pub work_experience: f64,
    pub education: f64,
    pub skills: f64,
    pub keywords: f64,
    pub formatting: f64,
    pub completeness: f64,
}

/// One row of the per-category bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: f64,
    pub max: f64,
}

impl CategoryScores {
    pub fn total(&self) -> f64 {
        self.contact_info
            + self.work_experience
            + self.education
            + self.skills
            + self.keywords
            + self.formatting
            + self.completeness
    }

    /// Scores paired with their own maxima, in display order.
    pub fn breakdown(&self) -> Vec<CategoryScore> {
        [
            ("contactInfo", self.contact_info, CONTACT_INFO_MAX),
            ("workExperience", self.work_experience, WORK_EXPERIENCE_MAX),
            ("education", self.education, EDUCATION_MAX),
            ("skills", self.skills, SKILLS_MAX),
            ("keywords", self.keywords, KEYWORDS_MAX),
            ("formatting", self.formatting, FORMATTING_MAX),
            ("completeness", self.completeness, COMPLETENESS_MAX),
        ]
        .into_iter()
        .map(|(category, score, max)| CategoryScore {
            category,
            score,
            max,
        })
        .collect()
    }
}

/// Full result of one ATS check. Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: u32, // 0 – 100
    pub grade: Grade,
    pub feedback: String,
    pub category_scores: CategoryScores,
    pub suggestions: Vec<String>,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>, // at most 10
    pub strengths: Vec<String>,
    pub keywords_found: usize,
    pub keyword_universe_size: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The résumé scorer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, document: &ResumeDocument) -> ScoreResult;

    /// Label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Keyword-and-section heuristic scorer, evaluated against today's UTC date.
pub struct HeuristicAtsScorer;

impl ResumeScorer for HeuristicAtsScorer {
    fn score(&self, document: &ResumeDocument) -> ScoreResult {
        score_resume(document)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(document: &ResumeDocument) -> ScoreResult {
    score_resume_at(document, Utc::now().date_naive())
}

/// Scores `document` as if evaluated on `today`. Total over every input.
pub fn score_resume_at(document: &ResumeDocument, today: NaiveDate) -> ScoreResult {
    let mut notes = Notes::default();

    let contact_info = score_contact_info(document, &mut notes);
    let work_experience = score_work_experience(document, today, &mut notes);
    let education = score_education(document, &mut notes);
    let skills = score_skills(document, &mut notes);
    let keyword_check = score_keywords(document, &mut notes);
    let formatting = score_formatting(document, &mut notes);
    let completeness = score_completeness(document);

    let category_scores = CategoryScores {
        contact_info,
        work_experience,
        education,
        skills,
        keywords: keyword_check.score,
        formatting,
        completeness,
    };

    let overall_score = category_scores.total().round().clamp(0.0, 100.0) as u32;
    let grade = Grade::from_score(overall_score);

    tracing::debug!(
        overall_score,
        %grade,
        keywords_found = keyword_check.found,
        keyword_universe_size = keyword_check.universe_size,
        "ATS score computed"
    );

    ScoreResult {
        overall_score,
        grade,
        feedback: grade.feedback().to_string(),
        category_scores,
        suggestions: notes.suggestions,
        found_keywords: keyword_check.matched,
        missing_keywords: keyword_check.missing,
        strengths: notes.strengths,
        keywords_found: keyword_check.found,
        keyword_universe_size: keyword_check.universe_size,
    }
}

/// Suggestions and strengths, each kept unique in first-seen order.
#[derive(Default)]
struct Notes {
    suggestions: Vec<String>,
    strengths: Vec<String>,
}

impl Notes {
    fn suggest(&mut self, text: impl Into<String>) {
        push_unique(&mut self.suggestions, text.into());
    }

    fn strength(&mut self, text: impl Into<String>) {
        push_unique(&mut self.strengths, text.into());
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

fn score_contact_info(document: &ResumeDocument, notes: &mut Notes) -> f64 {
    let info = &document.personal_info;
    let score = [
        info.full_name.as_deref(),
        info.email.as_deref(),
        info.phone.as_deref(),
        info.location.as_deref(),
    ]
    .into_iter()
    .filter(|field| provided(*field))
    .count() as f64
        * 5.0;

    if score < CONTACT_INFO_MAX {
        notes.suggest("Add complete contact information including phone number and location");
    } else {
        notes.strength("Complete contact information provided");
    }
    score
}

fn score_work_experience(document: &ResumeDocument, today: NaiveDate, notes: &mut Notes) -> f64 {
    if document.experience.is_empty() {
        notes.suggest("Add work experience section");
        return 0.0;
    }

    let mut score = 10.0;
    notes.strength("Work experience included");

    let earliest_recent_year = today.year() - RECENT_EXPERIENCE_YEARS;
    let has_recent = document.experience.iter().any(|exp| {
        exp.start_date
            .as_deref()
            .and_then(parse_year)
            .map(|year| year >= earliest_recent_year)
            .unwrap_or(false)
    });
    if has_recent {
        score += 5.0;
        notes.strength("Recent work experience included");
    } else {
        notes.suggest("Include more recent work experience (last 5 years)");
    }

    let has_details = document.experience.iter().any(|exp| {
        exp.description
            .as_deref()
            .map(|d| d.chars().count() > DETAILED_DESCRIPTION_CHARS)
            .unwrap_or(false)
    });
    if has_details {
        score += 5.0;
        notes.strength("Detailed job descriptions provided");
    } else {
        notes.suggest(
            "Add more detailed descriptions to work experience with quantifiable achievements",
        );
    }

    score
}

fn score_education(document: &ResumeDocument, notes: &mut Notes) -> f64 {
    if document.education.is_empty() {
        notes.suggest("Add education section");
        return 0.0;
    }

    notes.strength("Education history included");
    let has_degree = document
        .education
        .iter()
        .any(|edu| provided(edu.degree.as_deref()));
    if has_degree {
        15.0
    } else {
        10.0
    }
}

fn score_skills(document: &ResumeDocument, notes: &mut Notes) -> f64 {
    match document.distinct_skills().len() {
        0 => {
            notes.suggest("Add skills section with relevant technical and soft skills");
            0.0
        }
        n if n >= STRONG_SKILL_COUNT => {
            notes.strength("Good variety of skills listed");
            SKILLS_MAX
        }
        _ => {
            notes.suggest("Add more relevant skills (aim for 8-12)");
            8.0
        }
    }
}

struct KeywordCheck {
    score: f64,
    found: usize,
    universe_size: usize,
    matched: Vec<String>,
    missing: Vec<String>,
}

fn score_keywords(document: &ResumeDocument, notes: &mut Notes) -> KeywordCheck {
    let content = searchable_text(document);
    let universe = keyword_universe(document.current_role());

    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for keyword in &universe {
        if content.contains(&keyword.to_lowercase()) {
            push_unique(&mut matched, keyword.to_string());
        } else {
            push_unique(&mut missing, keyword.to_string());
        }
    }
    missing.truncate(MISSING_KEYWORDS_SHOWN);

    let found = matched.len();
    let universe_size = universe.len();
    let score = if universe_size > 0 {
        (KEYWORDS_MAX * found as f64 / universe_size as f64).min(KEYWORDS_MAX)
    } else {
        0.0
    };

    if score >= STRONG_KEYWORD_SCORE {
        notes.strength("Good keyword optimization for ATS systems");
    } else {
        notes.suggest(format!(
            "Add more relevant keywords. Found {found} out of {universe_size} important keywords"
        ));
    }

    KeywordCheck {
        score,
        found,
        universe_size,
        matched,
        missing,
    }
}

/// Lower-cased concatenation of every field the keyword check looks at.
/// Fields are space-joined, so a phrase may span two adjacent fields.
fn searchable_text(document: &ResumeDocument) -> String {
    fn text(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("")
    }

    let mut parts: Vec<String> = vec![
        document.current_role().to_string(),
        text(&document.summary).to_string(),
    ];
    parts.extend(document.experience.iter().map(|exp| {
        format!(
            "{} {} {}",
            text(&exp.position),
            text(&exp.company),
            text(&exp.description)
        )
    }));
    parts.extend(
        document
            .education
            .iter()
            .map(|edu| format!("{} {}", text(&edu.degree), text(&edu.institution))),
    );
    parts.extend(document.skills.iter().cloned());
    parts.extend(document.projects.iter().map(|proj| {
        format!(
            "{} {} {}",
            text(&proj.name),
            text(&proj.description),
            text(&proj.technologies)
        )
    }));

    parts.join(" ").to_lowercase()
}

fn score_formatting(document: &ResumeDocument, notes: &mut Notes) -> f64 {
    // Structural baseline; every document gets it.
    let mut score = 3.0;
    let detailed_summary = document
        .summary
        .as_deref()
        .map(|s| s.chars().count() > DETAILED_SUMMARY_CHARS)
        .unwrap_or(false);
    if detailed_summary {
        score += 2.0;
    }
    notes.strength("Clean, organized resume structure");
    score
}

fn score_completeness(document: &ResumeDocument) -> f64 {
    let info = &document.personal_info;
    let completed = [
        provided(info.full_name.as_deref()) && provided(info.email.as_deref()),
        provided(document.summary.as_deref()),
        !document.experience.is_empty(),
        !document.education.is_empty(),
        !document.distinct_skills().is_empty(),
        !document.projects.is_empty(),
        document.has_extra_sections(),
    ]
    .into_iter()
    .filter(|done| *done)
    .count();

    COMPLETENESS_MAX * completed as f64 / COMPLETENESS_SECTIONS as f64
}

/// First run of exactly four ASCII digits: "2024-03", "03/2024", "March 2024".
fn parse_year(date: &str) -> Option<i32> {
    date.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
