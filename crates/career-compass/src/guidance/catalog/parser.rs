use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::RuleCatalogError;
use crate::guidance::eligibility::{AcademicStream, EligibilityRule, RuleKind};

/// Reads a CSV rule table, one rule per row. `requiredSubjects` is `;`-separated and
/// `roadmap` holds an inline JSON document.
pub(crate) fn parse_rules<R: Read>(reader: R) -> Result<Vec<EligibilityRule>, RuleCatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rules = Vec::new();

    for record in csv_reader.deserialize::<RuleRow>() {
        let row = record?;
        rules.push(row.into_rule()?);
    }

    Ok(rules)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleRow {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(default)]
    min_percentage10: Option<f64>,
    #[serde(default)]
    min_percentage12: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    required_stream: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    required_subjects: Option<String>,
    #[serde(default)]
    min_subject_score: Option<f64>,
    #[serde(default)]
    admission_probability_base: Option<f64>,
    #[serde(default)]
    roi: String,
    #[serde(default)]
    risk_level: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_international: Option<String>,
    #[serde(default)]
    visa_probability_base: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    roadmap: Option<String>,
}

impl RuleRow {
    fn into_rule(self) -> Result<EligibilityRule, RuleCatalogError> {
        let kind = match self.kind.as_deref() {
            Some(raw) => parse_kind(raw).ok_or_else(|| invalid(&self.id, "kind", raw))?,
            None => RuleKind::default(),
        };
        let required_stream = match self.required_stream.as_deref() {
            Some(raw) => parse_stream(raw).ok_or_else(|| invalid(&self.id, "requiredStream", raw))?,
            None => AcademicStream::Any,
        };
        let is_international = match self.is_international.as_deref() {
            Some(raw) => {
                parse_flag(raw).ok_or_else(|| invalid(&self.id, "isInternational", raw))?
            }
            None => false,
        };
        let roadmap = match self.roadmap.as_deref() {
            Some(raw) => Some(serde_json::from_str(raw).map_err(RuleCatalogError::Json)?),
            None => None,
        };
        let required_subjects = self
            .required_subjects
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|subject| !subject.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(EligibilityRule {
            id: self.id,
            name: self.name,
            kind,
            min_percentage10: self.min_percentage10.unwrap_or(0.0),
            min_percentage12: self.min_percentage12.unwrap_or(0.0),
            required_stream,
            required_subjects,
            min_subject_score: self.min_subject_score.unwrap_or(0.0),
            admission_probability_base: self.admission_probability_base.unwrap_or(0.0),
            roi: self.roi,
            risk_level: self.risk_level,
            is_international,
            visa_probability_base: self.visa_probability_base,
            roadmap,
        })
    }
}

fn invalid(rule_id: &str, field: &str, value: &str) -> RuleCatalogError {
    RuleCatalogError::InvalidRule {
        rule_id: rule_id.to_string(),
        detail: format!("unrecognized {field} '{value}'"),
    }
}

fn parse_kind(raw: &str) -> Option<RuleKind> {
    match normalize_token(raw).as_str() {
        "degreeprogram" | "degree" | "program" => Some(RuleKind::DegreeProgram),
        "scholarship" => Some(RuleKind::Scholarship),
        "careerpath" | "career" => Some(RuleKind::CareerPath),
        _ => None,
    }
}

fn parse_stream(raw: &str) -> Option<AcademicStream> {
    match normalize_token(raw).as_str() {
        "science" => Some(AcademicStream::Science),
        "commerce" => Some(AcademicStream::Commerce),
        "arts" => Some(AcademicStream::Arts),
        "any" => Some(AcademicStream::Any),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match normalize_token(raw).as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,kind,minPercentage10,minPercentage12,requiredStream,requiredSubjects,minSubjectScore,admissionProbabilityBase,roi,riskLevel,isInternational,visaProbabilityBase,roadmap";

    #[test]
    fn parses_rows_with_defaults() {
        let csv = format!(
            "{HEADER}\n\
daad,DAAD Germany Scholarship,scholarship,70,80,Science,Mathematics; Physics,65,0.4,Very High,Medium,yes,0.85,\"{{\"\"steps\"\":[\"\"Apply\"\"]}}\"\n\
open,Open Arts Foundation,,,,,,,,Moderate,Low,,,\n"
        );

        let rules = parse_rules(csv.as_bytes()).expect("rules parse");

        assert_eq!(rules.len(), 2);
        let daad = &rules[0];
        assert_eq!(daad.kind, RuleKind::Scholarship);
        assert_eq!(daad.required_stream, AcademicStream::Science);
        assert_eq!(daad.required_subjects, vec!["Mathematics", "Physics"]);
        assert!(daad.is_international);
        assert_eq!(daad.visa_probability_base, Some(0.85));
        assert_eq!(
            daad.roadmap,
            Some(serde_json::json!({ "steps": ["Apply"] }))
        );

        let open = &rules[1];
        assert_eq!(open.kind, RuleKind::DegreeProgram);
        assert_eq!(open.required_stream, AcademicStream::Any);
        assert!(open.required_subjects.is_empty());
        assert_eq!(open.min_percentage10, 0.0);
        assert!(!open.is_international);
        assert!(open.roadmap.is_none());
    }

    #[test]
    fn rejects_unknown_stream_labels() {
        let csv = format!("{HEADER}\nodd,Odd Program,,,,Sports,,,,,,,,\n");

        let err = parse_rules(csv.as_bytes()).expect_err("stream rejected");

        match err {
            RuleCatalogError::InvalidRule { rule_id, detail } => {
                assert_eq!(rule_id, "odd");
                assert!(detail.contains("requiredStream"));
            }
            other => panic!("expected invalid rule error, got {other:?}"),
        }
    }
}
