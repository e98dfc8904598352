use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Classification assigned by the document analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentKind {
    Marksheet,
    Transcript,
    Certificate,
    ScoreCard,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DocumentKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marksheet => "Marksheet",
            Self::Transcript => "Transcript",
            Self::Certificate => "Certificate",
            Self::ScoreCard => "Score Card",
            Self::Unknown => "Unknown",
        }
    }
}

/// Education level printed on a marksheet or transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    Diploma,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Doctorate,
    #[serde(other)]
    Unrecognized,
}

impl EducationLevel {
    /// Ordering weight used when sorting an education history, highest first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Tenth => 1,
            Self::Twelfth | Self::Diploma => 2,
            Self::Bachelor => 3,
            Self::Master => 4,
            Self::Doctorate => 5,
            Self::Unrecognized => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tenth => "10th",
            Self::Twelfth => "12th",
            Self::Diploma => "Diploma",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "PhD",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

/// Fields lifted out of a document. Every field is optional because extraction is best effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subjects: BTreeMap<String, f64>,
}

/// One analysed upload as handed over by the document analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub file_name: String,
    #[serde(default)]
    pub document_kind: DocumentKind,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub entities: DocumentEntities,
}

impl ExtractedDocument {
    pub fn new(file_name: impl Into<String>, document_kind: DocumentKind) -> Self {
        Self {
            file_name: file_name.into(),
            document_kind,
            confidence: 1.0,
            entities: DocumentEntities::default(),
        }
    }

    pub fn with_level(mut self, level: EducationLevel) -> Self {
        self.entities.education_level = Some(level);
        self
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.entities.gpa = Some(gpa);
        self
    }

    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.entities.percentage = Some(percentage);
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>, score: f64) -> Self {
        self.entities.subjects.insert(subject.into(), score);
        self
    }
}
