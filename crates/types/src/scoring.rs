//! Score values and the labels derived from them.
//!
//! Everything here is a pure function of its input: a [`Status`] depends only on a
//! [`Score`], an effort label only on the effort level.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A score clamped to the inclusive range `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Rounds and clamps an arbitrary number into a score. NaN maps to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Score(0);
        }
        Score(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Adds points, saturating at 100.
    pub fn plus(self, points: u32) -> Self {
        Score(u32::from(self.0).saturating_add(points).min(100) as u8)
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Score(value.min(100))
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Score::clamped)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five scored categories, in declaration order.
///
/// Declaration order is significant: it breaks ties when choosing the weakest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EntityClarity,
    DirectAnswers,
    TrustSignals,
    CompetitivePositioning,
    TechnicalAccessibility,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::EntityClarity,
        Category::DirectAnswers,
        Category::TrustSignals,
        Category::CompetitivePositioning,
        Category::TechnicalAccessibility,
    ];

    /// Contribution to the overall score, in percent. The five weights sum to 100.
    pub fn weight(self) -> u8 {
        match self {
            Category::EntityClarity => 30,
            Category::DirectAnswers => 30,
            Category::TrustSignals => 20,
            Category::CompetitivePositioning => 10,
            Category::TechnicalAccessibility => 10,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::EntityClarity => "Entity Clarity",
            Category::DirectAnswers => "Direct Answer Readiness",
            Category::TrustSignals => "Trust Signals",
            Category::CompetitivePositioning => "Competitive Positioning",
            Category::TechnicalAccessibility => "Technical Accessibility",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::EntityClarity => "entity_clarity",
            Category::DirectAnswers => "direct_answers",
            Category::TrustSignals => "trust_signals",
            Category::CompetitivePositioning => "competitive_positioning",
            Category::TechnicalAccessibility => "technical_accessibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Health classification of a score, with thresholds at 40/60/75/90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Critical,
    NeedsWork,
    Moderate,
    Good,
    Excellent,
    /// Only produced when parsing a label that is not recognised.
    Unknown,
}

impl Status {
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=39 => Status::Critical,
            40..=59 => Status::NeedsWork,
            60..=74 => Status::Moderate,
            75..=89 => Status::Good,
            _ => Status::Excellent,
        }
    }

    /// Parses a snake_case status key. Unrecognised input yields [`Status::Unknown`].
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "critical" => Status::Critical,
            "needs_work" => Status::NeedsWork,
            "moderate" => Status::Moderate,
            "good" => Status::Good,
            "excellent" => Status::Excellent,
            _ => Status::Unknown,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Status::Critical => "critical",
            Status::NeedsWork => "needs_work",
            Status::Moderate => "moderate",
            Status::Good => "good",
            Status::Excellent => "excellent",
            Status::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Critical => "Critical",
            Status::NeedsWork => "Needs Work",
            Status::Moderate => "Moderate",
            Status::Good => "Good",
            Status::Excellent => "Excellent",
            Status::Unknown => "Unknown",
        }
    }

    /// Ordering rank, higher is better. `Unknown` ranks below everything.
    pub fn rank(self) -> u8 {
        match self {
            Status::Unknown => 0,
            Status::Critical => 1,
            Status::NeedsWork => 2,
            Status::Moderate => 3,
            Status::Good => 4,
            Status::Excellent => 5,
        }
    }
}

/// Human-readable label for an effort level on the 1..=5 scale.
pub fn effort_label(level: u8) -> &'static str {
    match level {
        1 => "Very Easy",
        2 => "Easy",
        3 => "Moderate",
        4 => "Hard",
        5 => "Very Hard",
        _ => "Unknown",
    }
}

/// Tier label used when the scorer did not supply one.
pub fn tier_for(score: Score) -> &'static str {
    match score.value() {
        85..=100 => "AI-Ready",
        70..=84 => "Strong Foundation",
        55..=69 => "Moderate Visibility",
        40..=54 => "Weak / Inconsistent",
        _ => "Not AI-Visible",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank, lower comes first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}
