use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::guidance::documents::EducationLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(default)]
    pub name: String,
}

/// One completed level of education recovered from a marksheet or transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub level: EducationLevel,
    #[serde(default)]
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub score: String,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntranceScore {
    pub exam: String,
    pub score: f64,
}

/// Merged view of a student's academic record, rebuilt from scratch on every analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedProfile {
    #[serde(default)]
    pub personal: PersonalDetails,
    #[serde(default)]
    pub education_history: Vec<EducationRecord>,
    #[serde(default)]
    pub subject_strength: Vec<SubjectScore>,
    /// Mean score of every subject seen, including those outside `subject_strength`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subject_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub gpa: f64,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub entrance_scores: Vec<EntranceScore>,
}

impl UnifiedProfile {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.personal.name = name.into();
        self
    }

    /// Highest ranked education record, if any was recovered.
    pub fn highest_education(&self) -> Option<&EducationRecord> {
        self.education_history.first()
    }

    pub fn record_for(&self, level: EducationLevel) -> Option<&EducationRecord> {
        self.education_history
            .iter()
            .find(|record| record.level == level)
    }

    pub fn top_subject(&self) -> Option<&SubjectScore> {
        self.subject_strength.first()
    }
}
