use crate::infra::{print_json, read_json_file};
use career_compass::error::AppError;
use career_compass::guidance::router::parse_date;
use career_compass::guidance::{
    AssessmentRequest, DocumentKind, EducationLevel, EligibilityReport, ExtractedDocument,
    GuidanceAssessment, GuidanceService, StudentProfile,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ProfileBuildArgs {
    /// JSON file holding an array of extracted documents
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Student name to record on the profile
    #[arg(long)]
    pub(crate) name: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a student profile
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Rule table (.json or .csv). Defaults to APP_RULES_PATH, then the built-in catalog.
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the full report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Target countries used to filter international opportunities
    #[arg(long = "country")]
    pub(crate) countries: Vec<String>,
    /// Override the assessment date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_profile_build(args: ProfileBuildArgs) -> Result<(), AppError> {
    let documents: Vec<ExtractedDocument> = read_json_file(&args.documents)?;
    let service = GuidanceService::from_rules_path(None)?;
    let profile = service.build_profile(&documents, args.name.as_deref());
    print_json(&profile)
}

pub(crate) fn run_eligibility_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let profile: StudentProfile = read_json_file(&args.profile)?;
    let rules_path = match args.rules {
        Some(path) => Some(path),
        None => career_compass::config::AppConfig::load()?.guidance.rules_path,
    };
    let service = GuidanceService::from_rules_path(rules_path.as_deref())?;
    let report = service.evaluate(&profile);

    if args.json {
        return print_json(&report);
    }

    render_eligibility(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        countries,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = GuidanceService::from_rules_path(None)?;
    let request = AssessmentRequest {
        documents: sample_documents(),
        target_countries: countries,
        name: Some("Aarav Sharma".to_string()),
    };
    let assessment = service.assess(request, today);

    if json {
        return print_json(&assessment);
    }

    render_assessment(&assessment);
    Ok(())
}

fn sample_documents() -> Vec<ExtractedDocument> {
    let mut ssc = ExtractedDocument::new("ssc_marksheet.pdf", DocumentKind::Marksheet)
        .with_level(EducationLevel::Tenth)
        .with_percentage(88.0)
        .with_subject("Mathematics", 94.0)
        .with_subject("Science", 90.0)
        .with_subject("English", 84.0);
    ssc.entities.year = Some(2019);
    ssc.entities.institution = Some("Kendriya Vidyalaya".to_string());

    let mut hsc = ExtractedDocument::new("hsc_marksheet.pdf", DocumentKind::Marksheet)
        .with_level(EducationLevel::Twelfth)
        .with_percentage(82.0)
        .with_subject("Mathematics", 91.0)
        .with_subject("Physics", 86.0)
        .with_subject("Chemistry", 78.0)
        .with_subject("English", 80.0);
    hsc.entities.year = Some(2021);
    hsc.entities.stream = Some("Science".to_string());
    hsc.entities.institution = Some("Delhi Public School".to_string());

    let jee = ExtractedDocument::new("JEE_Main_scorecard.pdf", DocumentKind::ScoreCard)
        .with_percentage(96.4);
    let certificate =
        ExtractedDocument::new("python_for_data_science.pdf", DocumentKind::Certificate);

    vec![ssc, hsc, jee, certificate]
}

fn render_assessment(assessment: &GuidanceAssessment) {
    let GuidanceAssessment {
        assessed_on,
        profile,
        student,
        eligibility,
        intelligence,
    } = assessment;

    println!("Career guidance assessment ({assessed_on})");
    if !profile.personal.name.is_empty() {
        println!("Student: {}", profile.personal.name);
    }
    println!(
        "GPA {:.2} | stream {} | {} risk",
        profile.gpa,
        intelligence.dominant_stream.label(),
        intelligence.risk_level.label()
    );

    println!("\nEducation history");
    for record in &profile.education_history {
        println!(
            "- {}: {} ({})",
            record.level.label(),
            record.score,
            if record.institution.is_empty() {
                "institution unknown"
            } else {
                record.institution.as_str()
            }
        );
    }

    if !profile.subject_strength.is_empty() {
        println!("\nStrongest subjects");
        for entry in &profile.subject_strength {
            println!("- {}: {:.1}", entry.subject, entry.score);
        }
    }

    if !profile.entrance_scores.is_empty() || !profile.certifications.is_empty() {
        println!("\nExams and certifications");
        for score in &profile.entrance_scores {
            println!("- {}: {:.1}", score.exam, score.score);
        }
        for certificate in &profile.certifications {
            println!("- {certificate}");
        }
    }

    if !intelligence.risk_factors.is_empty() {
        println!("\nRisk factors");
        for factor in &intelligence.risk_factors {
            println!("- {factor}");
        }
    }

    if !student.target_countries.is_empty() {
        println!("\nTarget countries: {}", student.target_countries.join(", "));
    }
    render_eligibility(eligibility);

    println!("\nCountry outlook");
    for outlook in &intelligence.country_outlook {
        println!(
            "- {}: admission {:.0}% | visa {:.0}% | ROI {} | {}",
            outlook.country,
            outlook.admission_probability * 100.0,
            outlook.visa_probability * 100.0,
            outlook.roi,
            outlook.recommended_field
        );
    }

    println!(
        "\nRecommended careers: {}",
        intelligence.recommended_careers.join(", ")
    );
}

fn render_eligibility(report: &EligibilityReport) {
    let summary = &report.summary;
    println!(
        "\nEligibility: {} of {} opportunities open",
        summary.eligible, summary.evaluated
    );

    if !summary.top_matches.is_empty() {
        println!("Top matches");
        for entry in &summary.top_matches {
            println!(
                "- {} [{}] admission {:.0}% | ROI {}",
                entry.career_name,
                entry.kind_label,
                entry.admission_probability * 100.0,
                entry.roi
            );
        }
    }

    let blocked: Vec<_> = report
        .results
        .iter()
        .filter(|result| !result.is_eligible)
        .collect();
    if !blocked.is_empty() {
        println!("Not yet eligible");
        for result in blocked {
            println!("- {}: {}", result.career_name, result.reasons.join("; "));
        }
    }
}
