mod parser;
mod standard;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::guidance::eligibility::{EligibilityRule, RuleKind};

#[derive(Debug)]
pub enum RuleCatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    UnsupportedFormat(String),
    DuplicateRule(String),
    InvalidRule { rule_id: String, detail: String },
}

impl std::fmt::Display for RuleCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleCatalogError::Io(err) => write!(f, "failed to read rule table: {}", err),
            RuleCatalogError::Json(err) => write!(f, "invalid rule JSON: {}", err),
            RuleCatalogError::Csv(err) => write!(f, "invalid rule CSV data: {}", err),
            RuleCatalogError::UnsupportedFormat(extension) => write!(
                f,
                "unsupported rule table format '{}': expected .json or .csv",
                extension
            ),
            RuleCatalogError::DuplicateRule(id) => {
                write!(f, "rule id '{}' appears more than once", id)
            }
            RuleCatalogError::InvalidRule { rule_id, detail } => {
                write!(f, "rule '{}' is invalid: {}", rule_id, detail)
            }
        }
    }
}

impl std::error::Error for RuleCatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleCatalogError::Io(err) => Some(err),
            RuleCatalogError::Json(err) => Some(err),
            RuleCatalogError::Csv(err) => Some(err),
            RuleCatalogError::UnsupportedFormat(_)
            | RuleCatalogError::DuplicateRule(_)
            | RuleCatalogError::InvalidRule { .. } => None,
        }
    }
}

impl From<std::io::Error> for RuleCatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RuleCatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for RuleCatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Read-only opportunity table, validated once at load time.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<EligibilityRule>,
}

impl RuleCatalog {
    /// Built-in table used when no rule file is configured.
    pub fn standard() -> Self {
        Self {
            rules: standard::standard_rules(),
        }
    }

    pub fn new(rules: Vec<EligibilityRule>) -> Result<Self, RuleCatalogError> {
        validate(&rules)?;
        Ok(Self { rules })
    }

    /// Loads a table from disk, choosing the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleCatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;

        match extension.as_str() {
            "json" => Self::from_json_reader(file),
            "csv" => Self::from_csv_reader(file),
            other => Err(RuleCatalogError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RuleCatalogError> {
        let rules: Vec<EligibilityRule> = serde_json::from_reader(reader)?;
        Self::new(rules)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, RuleCatalogError> {
        Self::new(parser::parse_rules(reader)?)
    }

    pub fn rules(&self) -> &[EligibilityRule] {
        &self.rules
    }

    pub fn rules_of_kind(&self, kind: RuleKind) -> Vec<&EligibilityRule> {
        self.rules.iter().filter(|rule| rule.kind == kind).collect()
    }

    pub fn get(&self, id: &str) -> Option<&EligibilityRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn validate(rules: &[EligibilityRule]) -> Result<(), RuleCatalogError> {
    let mut seen = HashSet::new();

    for rule in rules {
        let id = rule.id.trim();
        if id.is_empty() {
            return Err(invalid(rule, "id must not be empty"));
        }
        if !seen.insert(id) {
            return Err(RuleCatalogError::DuplicateRule(id.to_string()));
        }
        if rule.name.trim().is_empty() {
            return Err(invalid(rule, "name must not be empty"));
        }

        for (field, value) in [
            ("minPercentage10", rule.min_percentage10),
            ("minPercentage12", rule.min_percentage12),
            ("minSubjectScore", rule.min_subject_score),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(rule, &format!("{field} {value} outside 0..=100")));
            }
        }

        let probabilities = [
            Some(("admissionProbabilityBase", rule.admission_probability_base)),
            rule.visa_probability_base
                .map(|value| ("visaProbabilityBase", value)),
        ];
        for (field, value) in probabilities.into_iter().flatten() {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(rule, &format!("{field} {value} outside 0..=1")));
            }
        }
    }

    Ok(())
}

fn invalid(rule: &EligibilityRule, detail: &str) -> RuleCatalogError {
    RuleCatalogError::InvalidRule {
        rule_id: rule.id.clone(),
        detail: detail.to_string(),
    }
}
