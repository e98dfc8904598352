use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guidance::documents::EducationLevel;
use crate::guidance::profile::UnifiedProfile;

/// Coarse academic track a rule can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AcademicStream {
    Science,
    Commerce,
    Arts,
    #[default]
    Any,
}

impl AcademicStream {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Commerce => "Commerce",
            Self::Arts => "Arts",
            Self::Any => "Any",
        }
    }
}

impl fmt::Display for AcademicStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What sort of opportunity a rule describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleKind {
    #[default]
    DegreeProgram,
    Scholarship,
    CareerPath,
}

impl RuleKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DegreeProgram => "Degree Program",
            Self::Scholarship => "Scholarship",
            Self::CareerPath => "Career Path",
        }
    }
}

/// Static threshold set for a single opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: RuleKind,
    #[serde(default)]
    pub min_percentage10: f64,
    #[serde(default)]
    pub min_percentage12: f64,
    #[serde(default)]
    pub required_stream: AcademicStream,
    #[serde(default)]
    pub required_subjects: Vec<String>,
    #[serde(default)]
    pub min_subject_score: f64,
    #[serde(default)]
    pub admission_probability_base: f64,
    #[serde(default)]
    pub roi: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub is_international: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_probability_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<serde_json::Value>,
}

/// Where the student currently is in their education.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentEducation {
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Doctorate,
}

impl CurrentEducation {
    pub const fn from_level(level: EducationLevel) -> Option<Self> {
        match level {
            EducationLevel::Tenth | EducationLevel::Twelfth => Some(Self::HighSchool),
            EducationLevel::Diploma => Some(Self::Diploma),
            EducationLevel::Bachelor => Some(Self::Bachelor),
            EducationLevel::Master => Some(Self::Master),
            EducationLevel::Doctorate => Some(Self::Doctorate),
            EducationLevel::Unrecognized => None,
        }
    }

    /// Students still at school level are checked against the 12th grade threshold.
    pub const fn checks_twelfth_grade(self) -> bool {
        matches!(self, Self::HighSchool | Self::Diploma)
    }
}

/// Matcher input, usually assembled from a form or a stored profile record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<CurrentEducation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage12: Option<f64>,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub percentage_subjects: BTreeMap<String, f64>,
    #[serde(default)]
    pub target_countries: Vec<String>,
}

impl StudentProfile {
    /// Derives matcher input from an aggregated profile.
    pub fn from_unified(profile: &UnifiedProfile, target_countries: Vec<String>) -> Self {
        let percentage10 = profile
            .record_for(EducationLevel::Tenth)
            .and_then(|record| record.percentage);
        let percentage12 = profile
            .record_for(EducationLevel::Twelfth)
            .or_else(|| profile.record_for(EducationLevel::Diploma))
            .and_then(|record| record.percentage);
        let stream = profile
            .education_history
            .iter()
            .map(|record| record.stream.trim())
            .find(|stream| !stream.is_empty())
            .unwrap_or_default()
            .to_string();
        let education_level = profile
            .highest_education()
            .and_then(|record| CurrentEducation::from_level(record.level));
        // Profiles posted by clients may only carry the top-five list.
        let mut percentage_subjects: BTreeMap<String, f64> = profile
            .subject_strength
            .iter()
            .map(|entry| (entry.subject.clone(), entry.score))
            .collect();
        percentage_subjects.extend(
            profile
                .subject_scores
                .iter()
                .map(|(subject, score)| (subject.clone(), *score)),
        );
        let name = Some(profile.personal.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Self {
            name,
            education_level,
            percentage10,
            percentage12,
            stream,
            percentage_subjects,
            target_countries,
        }
    }
}

/// Outcome of checking one rule against one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub rule_id: String,
    pub career_name: String,
    pub kind: RuleKind,
    pub is_eligible: bool,
    pub reasons: Vec<String>,
    pub admission_probability: f64,
    pub roi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_probability: Option<f64>,
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<serde_json::Value>,
}
