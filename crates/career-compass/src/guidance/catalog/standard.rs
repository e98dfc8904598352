use serde_json::json;

use crate::guidance::eligibility::{AcademicStream, EligibilityRule, RuleKind};

fn subjects(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(crate) fn standard_rules() -> Vec<EligibilityRule> {
    vec![
        EligibilityRule {
            id: "btech-cse".to_string(),
            name: "B.Tech Computer Science & Engineering".to_string(),
            kind: RuleKind::DegreeProgram,
            min_percentage10: 60.0,
            min_percentage12: 75.0,
            required_stream: AcademicStream::Science,
            required_subjects: subjects(&["Mathematics", "Physics"]),
            min_subject_score: 60.0,
            admission_probability_base: 0.72,
            roi: "High".to_string(),
            risk_level: "Medium".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: Some(json!({
                "steps": [
                    "Register for JEE Main",
                    "Shortlist NIRF top-100 colleges",
                    "Attend counselling rounds"
                ]
            })),
        },
        EligibilityRule {
            id: "mbbs".to_string(),
            name: "MBBS (Bachelor of Medicine)".to_string(),
            kind: RuleKind::DegreeProgram,
            min_percentage10: 60.0,
            min_percentage12: 50.0,
            required_stream: AcademicStream::Science,
            required_subjects: subjects(&["Biology", "Chemistry", "Physics"]),
            min_subject_score: 50.0,
            admission_probability_base: 0.35,
            roi: "Very High".to_string(),
            risk_level: "High".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: Some(json!({
                "steps": ["Qualify NEET-UG", "State and all-India counselling"]
            })),
        },
        EligibilityRule {
            id: "bcom-hons".to_string(),
            name: "B.Com (Honours)".to_string(),
            kind: RuleKind::DegreeProgram,
            min_percentage10: 50.0,
            min_percentage12: 60.0,
            required_stream: AcademicStream::Commerce,
            required_subjects: subjects(&["Accountancy"]),
            min_subject_score: 50.0,
            admission_probability_base: 0.8,
            roi: "Moderate".to_string(),
            risk_level: "Low".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: None,
        },
        EligibilityRule {
            id: "ba-psychology".to_string(),
            name: "BA Psychology".to_string(),
            kind: RuleKind::DegreeProgram,
            min_percentage10: 45.0,
            min_percentage12: 50.0,
            required_stream: AcademicStream::Any,
            required_subjects: Vec::new(),
            min_subject_score: 0.0,
            admission_probability_base: 0.85,
            roi: "Moderate".to_string(),
            risk_level: "Low".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: None,
        },
        EligibilityRule {
            id: "daad-germany".to_string(),
            name: "DAAD Germany Scholarship".to_string(),
            kind: RuleKind::Scholarship,
            min_percentage10: 70.0,
            min_percentage12: 75.0,
            required_stream: AcademicStream::Science,
            required_subjects: subjects(&["Mathematics"]),
            min_subject_score: 70.0,
            admission_probability_base: 0.3,
            roi: "Very High".to_string(),
            risk_level: "Medium".to_string(),
            is_international: true,
            visa_probability_base: Some(0.85),
            roadmap: Some(json!({
                "steps": [
                    "Prepare IELTS or TestDaF",
                    "Secure admission to a German public university",
                    "Submit DAAD portal application"
                ]
            })),
        },
        EligibilityRule {
            id: "chevening-uk".to_string(),
            name: "Chevening UK Scholarship".to_string(),
            kind: RuleKind::Scholarship,
            min_percentage10: 65.0,
            min_percentage12: 65.0,
            required_stream: AcademicStream::Any,
            required_subjects: Vec::new(),
            min_subject_score: 0.0,
            admission_probability_base: 0.15,
            roi: "Very High".to_string(),
            risk_level: "High".to_string(),
            is_international: true,
            visa_probability_base: Some(0.9),
            roadmap: None,
        },
        EligibilityRule {
            id: "fulbright-usa".to_string(),
            name: "Fulbright USA Fellowship".to_string(),
            kind: RuleKind::Scholarship,
            min_percentage10: 70.0,
            min_percentage12: 70.0,
            required_stream: AcademicStream::Any,
            required_subjects: subjects(&["English"]),
            min_subject_score: 65.0,
            admission_probability_base: 0.2,
            roi: "Very High".to_string(),
            risk_level: "High".to_string(),
            is_international: true,
            visa_probability_base: Some(0.8),
            roadmap: None,
        },
        EligibilityRule {
            id: "ms-cs-canada".to_string(),
            name: "MS Computer Science in Canada".to_string(),
            kind: RuleKind::DegreeProgram,
            min_percentage10: 60.0,
            min_percentage12: 65.0,
            required_stream: AcademicStream::Science,
            required_subjects: subjects(&["Mathematics"]),
            min_subject_score: 65.0,
            admission_probability_base: 0.55,
            roi: "High".to_string(),
            risk_level: "Medium".to_string(),
            is_international: true,
            visa_probability_base: Some(0.7),
            roadmap: None,
        },
        EligibilityRule {
            id: "career-data-scientist".to_string(),
            name: "Data Scientist".to_string(),
            kind: RuleKind::CareerPath,
            min_percentage10: 0.0,
            min_percentage12: 0.0,
            required_stream: AcademicStream::Science,
            required_subjects: subjects(&["Mathematics"]),
            min_subject_score: 70.0,
            admission_probability_base: 0.65,
            roi: "High".to_string(),
            risk_level: "Medium".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: Some(json!({
                "steps": [
                    "Build statistics and Python foundations",
                    "Complete two end-to-end portfolio projects",
                    "Apply for analytics internships"
                ]
            })),
        },
        EligibilityRule {
            id: "career-chartered-accountant".to_string(),
            name: "Chartered Accountant".to_string(),
            kind: RuleKind::CareerPath,
            min_percentage10: 0.0,
            min_percentage12: 50.0,
            required_stream: AcademicStream::Commerce,
            required_subjects: subjects(&["Accountancy"]),
            min_subject_score: 55.0,
            admission_probability_base: 0.5,
            roi: "High".to_string(),
            risk_level: "Medium".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: None,
        },
        EligibilityRule {
            id: "career-ux-designer".to_string(),
            name: "UX Designer".to_string(),
            kind: RuleKind::CareerPath,
            min_percentage10: 0.0,
            min_percentage12: 0.0,
            required_stream: AcademicStream::Any,
            required_subjects: Vec::new(),
            min_subject_score: 0.0,
            admission_probability_base: 0.7,
            roi: "Moderate".to_string(),
            risk_level: "Low".to_string(),
            is_international: false,
            visa_probability_base: None,
            roadmap: None,
        },
    ]
}
