const KNOWN_EXAMS: [&str; 9] = [
    "IELTS", "TOEFL", "GMAT", "GATE", "NEET", "JEE", "SAT", "GRE", "CAT",
];

const FALLBACK_EXAM: &str = "Entrance Exam";

/// Turns an uploaded file name into a readable label, e.g. `aws_cloud-practitioner.pdf`
/// becomes `aws cloud practitioner`.
pub(crate) fn label_from_file_name(file_name: &str) -> String {
    let cleaned = file_name.replace(['\u{feff}', '\u{200b}'], "");
    let stem = match cleaned.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.contains(' ') => stem,
        _ => cleaned.as_str(),
    };
    let spaced = stem.replace(['_', '-'], " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Infers the exam name from a score card file name. Only whole alphabetic words of the
/// stem count, so `degree_scorecard.pdf` is not read as a GRE result.
pub(crate) fn exam_from_file_name(file_name: &str) -> &'static str {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let words: Vec<String> = stem
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    KNOWN_EXAMS
        .iter()
        .copied()
        .find(|exam| words.iter().any(|word| word == exam))
        .unwrap_or(FALLBACK_EXAM)
}
