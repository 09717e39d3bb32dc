//! Résumé document as produced by the form editor.
//!
//! Every field is optional on the wire: the editor sends whatever the user
//! has filled in so far, and an empty `{}` body is a valid document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub portfolio: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub current_role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub position: Option<String>,
    pub company: Option<String>,
    /// Usually `YYYY-MM` from a month picker, but free text is accepted.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub gpa: Option<String>,
    pub percentage: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Comma-separated free text in the editor, kept as-is.
    pub technologies: Option<String>,
    pub link: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub credential: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementEntry {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    pub language: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub languages: Vec<LanguageEntry>,
}

/// Absent, empty and whitespace-only values all count as "not provided".
pub fn provided(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl ResumeDocument {
    /// Non-blank skills, trimmed, first occurrence wins. Case is preserved,
    /// so "Rust" and "rust" are distinct entries.
    pub fn distinct_skills(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.skills.len());
        for skill in self.skills.iter().map(|s| s.trim()) {
            if !skill.is_empty() && !seen.contains(&skill) {
                seen.push(skill);
            }
        }
        seen
    }

    /// Certifications, achievements and languages count as one combined section.
    pub fn has_extra_sections(&self) -> bool {
        !self.certifications.is_empty()
            || !self.achievements.is_empty()
            || !self.languages.is_empty()
    }

    pub fn current_role(&self) -> &str {
        self.personal_info.current_role.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_empty_document() {
        let doc: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.personal_info.full_name.is_none());
        assert!(doc.experience.is_empty());
        assert!(doc.skills.is_empty());
        assert!(!doc.has_extra_sections());
    }

    #[test]
    fn test_camel_case_wire_format_and_unknown_fields() {
        let json = r#"{
            "personalInfo": {"fullName": "Jane Doe", "currentRole": "Data Analyst"},
            "experience": [{"id": 1712, "position": "Analyst", "startDate": "2023-04", "current": true}],
            "skills": ["SQL"]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal_info.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(doc.current_role(), "Data Analyst");
        assert_eq!(doc.experience[0].start_date.as_deref(), Some("2023-04"));
        assert!(doc.experience[0].current);
        assert!(doc.experience[0].description.is_none());
    }

    #[test]
    fn test_null_strings_are_accepted() {
        let json = r#"{"summary": null, "personalInfo": {"email": null}}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert!(!provided(doc.summary.as_deref()));
        assert!(!provided(doc.personal_info.email.as_deref()));
    }

    #[test]
    fn test_provided_treats_blank_as_absent() {
        assert!(!provided(None));
        assert!(!provided(Some("")));
        assert!(!provided(Some("   ")));
        assert!(provided(Some("x")));
    }

    #[test]
    fn test_distinct_skills_trims_and_dedups() {
        let doc = ResumeDocument {
            skills: vec![
                "Rust".to_string(),
                " Rust ".to_string(),
                "".to_string(),
                "rust".to_string(),
                "SQL".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(doc.distinct_skills(), vec!["Rust", "rust", "SQL"]);
    }

    #[test]
    fn test_any_extra_section_counts() {
        let doc = ResumeDocument {
            languages: vec![LanguageEntry::default()],
            ..Default::default()
        };
        assert!(doc.has_extra_sections());
    }
}
