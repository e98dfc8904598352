//! Aggregation of extracted academic documents into one unified student profile.

mod aggregator;
pub mod domain;
mod normalizer;

pub use aggregator::build_profile;
pub use domain::{EducationRecord, EntranceScore, PersonalDetails, SubjectScore, UnifiedProfile};
