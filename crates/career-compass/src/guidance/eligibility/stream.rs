use super::domain::AcademicStream;

const STREAM_TABLE: &[(&str, AcademicStream)] = &[
    ("science", AcademicStream::Science),
    ("computer science", AcademicStream::Science),
    ("data science", AcademicStream::Science),
    ("engineering", AcademicStream::Science),
    ("information technology", AcademicStream::Science),
    ("mathematics", AcademicStream::Science),
    ("physics", AcademicStream::Science),
    ("chemistry", AcademicStream::Science),
    ("biology", AcademicStream::Science),
    ("medicine", AcademicStream::Science),
    ("pcm", AcademicStream::Science),
    ("pcb", AcademicStream::Science),
    ("commerce", AcademicStream::Commerce),
    ("business", AcademicStream::Commerce),
    ("economics", AcademicStream::Commerce),
    ("finance", AcademicStream::Commerce),
    ("accounting", AcademicStream::Commerce),
    ("management", AcademicStream::Commerce),
    ("arts", AcademicStream::Arts),
    ("humanities", AcademicStream::Arts),
    ("literature", AcademicStream::Arts),
    ("history", AcademicStream::Arts),
    ("psychology", AcademicStream::Arts),
    ("design", AcademicStream::Arts),
    ("law", AcademicStream::Arts),
];

/// Maps a raw field-of-study label onto a coarse stream. Unmapped labels become `Any`.
pub fn normalize_stream(raw: &str) -> AcademicStream {
    let needle = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    STREAM_TABLE
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(&needle))
        .map(|(_, stream)| *stream)
        .unwrap_or(AcademicStream::Any)
}
