use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade derived from the overall ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Step function over the 0-100 score: 90/80/70/60/50 lower bounds.
    pub fn from_score(score: u32) -> Grade {
        match score {
            s if s >= 90 => Grade::APlus,
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            Grade::APlus => "Excellent! Your resume is well-optimized for ATS systems.",
            Grade::A => "Very good! Your resume should perform well in ATS systems.",
            Grade::B => "Good, but there's room for improvement to maximize ATS compatibility.",
            Grade::C => "Fair. Consider implementing the suggestions to improve ATS performance.",
            Grade::D => "Needs significant improvement to be ATS-friendly.",
            Grade::F => "Your resume needs significant improvement to pass ATS systems.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
