use std::collections::BTreeMap;

use super::domain::{EducationRecord, EntranceScore, SubjectScore, UnifiedProfile};
use super::normalizer::{exam_from_file_name, label_from_file_name};
use crate::guidance::documents::{DocumentEntities, DocumentKind, ExtractedDocument};

const TOP_SUBJECTS: usize = 5;
const PERCENTAGE_TO_GPA_DIVISOR: f64 = 20.0;

/// Merges extracted documents into a single profile.
///
/// Every input is accepted: missing fields fall back to empty values and an empty slice
/// yields an empty profile with a GPA of zero.
pub fn build_profile(documents: &[ExtractedDocument]) -> UnifiedProfile {
    let mut education_history = Vec::new();
    let mut subject_scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut certifications = Vec::new();
    let mut entrance_scores = Vec::new();
    let mut gpa_sum = 0.0;
    let mut gpa_count = 0u32;

    for document in documents {
        let entities = &document.entities;

        if let Some(level) = entities.education_level {
            education_history.push(EducationRecord {
                level,
                institution: entities.institution.clone().unwrap_or_default(),
                year: entities.year,
                score: display_score(entities),
                stream: entities.stream.clone().unwrap_or_default(),
                subjects: entities.subjects.keys().cloned().collect(),
                percentage: entities.percentage,
                gpa: entities.gpa,
            });

            if let Some(contribution) = gpa_contribution(entities) {
                gpa_sum += contribution;
                gpa_count += 1;
            }
        }

        for (subject, score) in &entities.subjects {
            subject_scores.entry(subject.as_str()).or_default().push(*score);
        }

        match document.document_kind {
            DocumentKind::Certificate => {
                certifications.push(label_from_file_name(&document.file_name));
            }
            DocumentKind::ScoreCard => entrance_scores.push(EntranceScore {
                exam: exam_from_file_name(&document.file_name).to_string(),
                score: entities.percentage.or(entities.gpa).unwrap_or(0.0),
            }),
            _ => {}
        }
    }

    education_history.sort_by(|left, right| right.level.rank().cmp(&left.level.rank()));

    let gpa = if gpa_count == 0 {
        0.0
    } else {
        round_to_hundredths(gpa_sum / f64::from(gpa_count))
    };

    let subject_scores = average_subjects(subject_scores);

    UnifiedProfile {
        education_history,
        subject_strength: strongest_subjects(&subject_scores),
        subject_scores,
        gpa,
        certifications,
        entrance_scores,
        ..UnifiedProfile::default()
    }
}

fn gpa_contribution(entities: &DocumentEntities) -> Option<f64> {
    entities
        .gpa
        .or_else(|| entities.percentage.map(|pct| pct / PERCENTAGE_TO_GPA_DIVISOR))
}

fn display_score(entities: &DocumentEntities) -> String {
    match (entities.gpa, entities.percentage) {
        (Some(gpa), _) => format!("{gpa} GPA"),
        (None, Some(percentage)) => format!("{percentage}%"),
        (None, None) => "N/A".to_string(),
    }
}

fn average_subjects(samples: BTreeMap<&str, Vec<f64>>) -> BTreeMap<String, f64> {
    samples
        .into_iter()
        .map(|(subject, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (subject.to_string(), mean)
        })
        .collect()
}

fn strongest_subjects(averages: &BTreeMap<String, f64>) -> Vec<SubjectScore> {
    let mut averaged: Vec<SubjectScore> = averages
        .iter()
        .map(|(subject, score)| SubjectScore {
            subject: subject.clone(),
            score: *score,
        })
        .collect();

    // BTreeMap iteration keeps ties in name order through the stable sort.
    averaged.sort_by(|left, right| right.score.total_cmp(&left.score));
    averaged.truncate(TOP_SUBJECTS);
    averaged
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::documents::EducationLevel;

    #[test]
    fn empty_input_yields_empty_profile() {
        let profile = build_profile(&[]);

        assert!(profile.education_history.is_empty());
        assert!(profile.subject_strength.is_empty());
        assert_eq!(profile.gpa, 0.0);
        assert!(profile.certifications.is_empty());
        assert!(profile.entrance_scores.is_empty());
    }

    #[test]
    fn averages_native_gpa_with_scaled_percentage() {
        let documents = vec![
            ExtractedDocument::new("degree.pdf", DocumentKind::Transcript)
                .with_level(EducationLevel::Bachelor)
                .with_gpa(8.0),
            ExtractedDocument::new("hsc.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Twelfth)
                .with_percentage(90.0),
        ];

        let profile = build_profile(&documents);

        assert_eq!(profile.gpa, 6.25);
    }

    #[test]
    fn documents_without_level_do_not_touch_gpa() {
        let documents = vec![
            ExtractedDocument::new("ssc.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Tenth)
                .with_percentage(70.0),
            ExtractedDocument::new("loose_page.pdf", DocumentKind::Unknown).with_gpa(1.0),
            ExtractedDocument::new("blank.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Twelfth),
        ];

        let profile = build_profile(&documents);

        assert_eq!(profile.gpa, 3.5);
        assert_eq!(profile.education_history.len(), 2);
        assert_eq!(profile.education_history[0].score, "N/A");
        assert_eq!(profile.education_history[1].score, "70%");
    }

    #[test]
    fn keeps_five_strongest_subjects() {
        let mut document = ExtractedDocument::new("transcript.pdf", DocumentKind::Transcript);
        for (subject, score) in [
            ("Art", 55.0),
            ("Biology", 81.0),
            ("Chemistry", 77.0),
            ("Economics", 64.0),
            ("English", 90.0),
            ("History", 58.0),
            ("Mathematics", 97.0),
            ("Physics", 88.0),
        ] {
            document = document.with_subject(subject, score);
        }

        let profile = build_profile(&[document]);

        let subjects: Vec<&str> = profile
            .subject_strength
            .iter()
            .map(|entry| entry.subject.as_str())
            .collect();
        assert_eq!(
            subjects,
            vec!["Mathematics", "English", "Physics", "Biology", "Chemistry"]
        );
        assert_eq!(profile.subject_scores.len(), 8);
        assert_eq!(profile.subject_scores.get("Art"), Some(&55.0));
    }

    #[test]
    fn averages_subject_scores_across_documents() {
        let documents = vec![
            ExtractedDocument::new("term1.pdf", DocumentKind::Marksheet).with_subject("Physics", 70.0),
            ExtractedDocument::new("term2.pdf", DocumentKind::Marksheet)
                .with_subject("Physics", 90.0)
                .with_subject("Chemistry", 75.0),
        ];

        let profile = build_profile(&documents);

        assert_eq!(profile.subject_strength[0].subject, "Physics");
        assert_eq!(profile.subject_strength[0].score, 80.0);
        assert_eq!(profile.subject_strength[1].score, 75.0);
    }

    #[test]
    fn orders_history_by_level_rank() {
        let documents = vec![
            ExtractedDocument::new("ssc.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Tenth),
            ExtractedDocument::new("msc.pdf", DocumentKind::Transcript)
                .with_level(EducationLevel::Master),
            ExtractedDocument::new("hsc.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Twelfth),
            ExtractedDocument::new("odd.pdf", DocumentKind::Marksheet)
                .with_level(EducationLevel::Unrecognized),
        ];

        let profile = build_profile(&documents);

        let levels: Vec<EducationLevel> = profile
            .education_history
            .iter()
            .map(|record| record.level)
            .collect();
        assert_eq!(
            levels,
            vec![
                EducationLevel::Master,
                EducationLevel::Twelfth,
                EducationLevel::Tenth,
                EducationLevel::Unrecognized,
            ]
        );
    }

    #[test]
    fn collects_certifications_and_entrance_scores() {
        let documents = vec![
            ExtractedDocument::new("google_data_analytics.pdf", DocumentKind::Certificate),
            ExtractedDocument::new("IELTS_report.pdf", DocumentKind::ScoreCard).with_gpa(7.5),
            ExtractedDocument::new("sat-2024.pdf", DocumentKind::ScoreCard).with_percentage(92.0),
        ];

        let profile = build_profile(&documents);

        assert_eq!(profile.certifications, vec!["google data analytics"]);
        assert_eq!(profile.entrance_scores.len(), 2);
        assert_eq!(profile.entrance_scores[0].exam, "IELTS");
        assert_eq!(profile.entrance_scores[0].score, 7.5);
        assert_eq!(profile.entrance_scores[1].exam, "SAT");
        assert_eq!(profile.entrance_scores[1].score, 92.0);
        assert!(profile.education_history.is_empty());
    }
}
