use super::views::{CountryOutlook, DominantStream};

struct CountryReference {
    country: &'static str,
    admission_probability: f64,
    visa_probability: f64,
    roi: &'static str,
}

const COUNTRIES: [CountryReference; 5] = [
    CountryReference {
        country: "USA",
        admission_probability: 0.62,
        visa_probability: 0.71,
        roi: "High (avg. payback 4-6 years)",
    },
    CountryReference {
        country: "UK",
        admission_probability: 0.74,
        visa_probability: 0.88,
        roi: "Moderate (1-year master's, payback 3-5 years)",
    },
    CountryReference {
        country: "Canada",
        admission_probability: 0.68,
        visa_probability: 0.64,
        roi: "High (post-study work permit up to 3 years)",
    },
    CountryReference {
        country: "Germany",
        admission_probability: 0.57,
        visa_probability: 0.85,
        roi: "Very High (low or no public tuition)",
    },
    CountryReference {
        country: "Australia",
        admission_probability: 0.7,
        visa_probability: 0.76,
        roi: "Moderate (high living costs offset by wages)",
    },
];

const fn recommended_field(stream: DominantStream) -> &'static str {
    match stream {
        DominantStream::Stem => "Computer Science & Engineering",
        DominantStream::Commerce => "Business Analytics & Finance",
        DominantStream::ArtsHumanities => "Design & Social Sciences",
        DominantStream::General => "Liberal Studies",
    }
}

pub(crate) fn country_outlook(stream: DominantStream) -> Vec<CountryOutlook> {
    COUNTRIES
        .iter()
        .map(|reference| CountryOutlook {
            country: reference.country,
            admission_probability: reference.admission_probability,
            visa_probability: reference.visa_probability,
            roi: reference.roi,
            recommended_field: recommended_field(stream),
        })
        .collect()
}

pub(crate) fn recommended_careers(stream: DominantStream) -> Vec<&'static str> {
    match stream {
        DominantStream::Stem => vec!["Software Engineer", "Data Scientist", "Research Analyst"],
        DominantStream::Commerce => {
            vec!["Chartered Accountant", "Financial Analyst", "Product Manager"]
        }
        DominantStream::ArtsHumanities => vec!["UX Designer", "Psychologist", "Content Strategist"],
        DominantStream::General => vec!["Career Counselling Session", "Aptitude Assessment"],
    }
}
