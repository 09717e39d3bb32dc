//! Static keyword tables for the ATS check.
//!
//! The common list applies to every résumé. One extra role set is added
//! when `currentRole` matches a category pattern; categories are tested in
//! declaration order and the first match governs, so "Data Team Lead" gets
//! the data set and never the management set.

use serde::{Deserialize, Serialize};

pub const COMMON_ATS_KEYWORDS: &[&str] = &[
    // Technical skills
    "javascript",
    "python",
    "java",
    "c++",
    "react",
    "node.js",
    "html",
    "css",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "rest",
    "api",
    "machine learning",
    "data analysis",
    "cloud computing",
    "devops",
    // Soft skills
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "agile",
    "scrum",
    "collaboration",
    "analytical",
    "strategic planning",
    // Action verbs
    "developed",
    "managed",
    "implemented",
    "created",
    "improved",
    "optimized",
    "led",
    "analyzed",
    "designed",
    "built",
    "maintained",
    "coordinated",
];

const SOFTWARE_KEYWORDS: &[&str] = &[
    "software development",
    "full stack",
    "frontend",
    "backend",
    "web development",
    "mobile development",
    "testing",
    "debugging",
    "code review",
    "version control",
];

const DATA_KEYWORDS: &[&str] = &[
    "data visualization",
    "sql",
    "excel",
    "tableau",
    "power bi",
    "statistical analysis",
    "data mining",
    "etl",
    "big data",
    "python",
    "r",
    "machine learning",
];

const MANAGEMENT_KEYWORDS: &[&str] = &[
    "team leadership",
    "project management",
    "budget management",
    "strategic planning",
    "stakeholder management",
    "performance metrics",
    "process improvement",
    "mentoring",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    SoftwareDevelopment,
    DataAnalytics,
    Management,
}

impl RoleCategory {
    /// Evaluation order for role detection.
    pub const ALL: [RoleCategory; 3] = [
        RoleCategory::SoftwareDevelopment,
        RoleCategory::DataAnalytics,
        RoleCategory::Management,
    ];

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            RoleCategory::SoftwareDevelopment => &["software", "developer"],
            RoleCategory::DataAnalytics => &["data", "analyst"],
            RoleCategory::Management => &["manager", "lead"],
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RoleCategory::SoftwareDevelopment => SOFTWARE_KEYWORDS,
            RoleCategory::DataAnalytics => DATA_KEYWORDS,
            RoleCategory::Management => MANAGEMENT_KEYWORDS,
        }
    }

    /// Case-insensitive substring match against `currentRole`; first category wins.
    pub fn detect(current_role: &str) -> Option<RoleCategory> {
        let role_lower = current_role.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.patterns().iter().any(|p| role_lower.contains(p)))
    }
}

/// The keywords a résumé with this role is checked against: the common list
/// followed by the detected role set, with duplicates dropped in first-seen order.
pub fn keyword_universe(current_role: &str) -> Vec<&'static str> {
    let extra = RoleCategory::detect(current_role)
        .map(RoleCategory::keywords)
        .unwrap_or(&[]);

    let mut universe: Vec<&'static str> =
        Vec::with_capacity(COMMON_ATS_KEYWORDS.len() + extra.len());
    for &keyword in COMMON_ATS_KEYWORDS.iter().chain(extra) {
        if !universe.contains(&keyword) {
            universe.push(keyword);
        }
    }
    universe
}
