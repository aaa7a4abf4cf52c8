//! Heading vocabularies that open and close the experience section.

use std::collections::HashSet;

use thiserror::Error;

/// Headings that open the experience section.
pub const DEFAULT_EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "work history",
];

/// Headings of every other resume section. Any of these ends the experience section.
pub const DEFAULT_OTHER_HEADINGS: &[&str] = &[
    "education",
    "skills",
    "projects",
    "certifications",
    "publications",
    "awards",
    "interests",
    "languages",
    "references",
    "contact",
    "summary",
    "objective",
    "personal details",
    "profile",
    "additional information",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Heading '{0}' appears in both the experience and other vocabularies")]
    Overlap(String),

    #[error("Heading vocabularies cannot contain blank entries")]
    EmptyHeading,
}

/// Two disjoint, case-folded heading sets.
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct HeadingVocabulary {
    experience: HashSet<String>,
    other: HashSet<String>,
}

impl HeadingVocabulary {
    /// Normalizes every entry (trim + lowercase) and rejects overlapping or blank headings.
    pub fn new<E, O>(experience: E, other: O) -> Result<Self, VocabularyError>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let experience = normalize_all(experience)?;
        let other = normalize_all(other)?;

        // Sorted so the reported overlap is stable across runs.
        let mut shared: Vec<&String> = experience.intersection(&other).collect();
        shared.sort();
        if let Some(heading) = shared.first() {
            return Err(VocabularyError::Overlap((*heading).clone()));
        }

        Ok(Self { experience, other })
    }

    /// The built-in vocabulary extended with operator-supplied headings.
    pub fn with_extras(
        extra_experience: &[String],
        extra_other: &[String],
    ) -> Result<Self, VocabularyError> {
        Self::new(
            DEFAULT_EXPERIENCE_HEADINGS
                .iter()
                .copied()
                .chain(extra_experience.iter().map(String::as_str)),
            DEFAULT_OTHER_HEADINGS
                .iter()
                .copied()
                .chain(extra_other.iter().map(String::as_str)),
        )
    }

    pub fn experience(&self) -> &HashSet<String> {
        &self.experience
    }

    pub fn other(&self) -> &HashSet<String> {
        &self.other
    }

    /// Runs the segmenter over `text` with this vocabulary.
    pub fn extract_experience(&self, text: &str) -> String {
        super::segment(text, &self.experience, &self.other)
    }
}

impl Default for HeadingVocabulary {
    fn default() -> Self {
        Self {
            experience: DEFAULT_EXPERIENCE_HEADINGS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            other: DEFAULT_OTHER_HEADINGS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

fn normalize_all<I>(headings: I) -> Result<HashSet<String>, VocabularyError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    headings
        .into_iter()
        .map(|h| {
            let normalized = h.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                Err(VocabularyError::EmptyHeading)
            } else {
                Ok(normalized)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabularies_are_disjoint() {
        let vocab = HeadingVocabulary::default();
        assert!(vocab.experience().is_disjoint(vocab.other()));
        assert_eq!(vocab.experience().len(), DEFAULT_EXPERIENCE_HEADINGS.len());
        assert_eq!(vocab.other().len(), DEFAULT_OTHER_HEADINGS.len());
    }

    #[test]
    fn test_default_matches_validated_construction() {
        let built = HeadingVocabulary::with_extras(&[], &[]).unwrap();
        let default = HeadingVocabulary::default();
        assert_eq!(built.experience(), default.experience());
        assert_eq!(built.other(), default.other());
    }

    #[test]
    fn test_entries_are_trimmed_and_lowercased() {
        let vocab = HeadingVocabulary::new(["  Career History "], ["VOLUNTEERING"]).unwrap();
        assert!(vocab.experience().contains("career history"));
        assert!(vocab.other().contains("volunteering"));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let err = HeadingVocabulary::new(["experience", "projects"], ["Projects", "skills"])
            .unwrap_err();
        assert_eq!(err, VocabularyError::Overlap("projects".to_string()));
    }

    #[test]
    fn test_extra_heading_overlapping_default_is_rejected() {
        let err = HeadingVocabulary::with_extras(&["Education".to_string()], &[]).unwrap_err();
        assert_eq!(err, VocabularyError::Overlap("education".to_string()));
    }

    #[test]
    fn test_blank_heading_is_rejected() {
        let err = HeadingVocabulary::new(["experience", "   "], ["skills"]).unwrap_err();
        assert_eq!(err, VocabularyError::EmptyHeading);
    }

    #[test]
    fn test_extras_extend_defaults() {
        let vocab = HeadingVocabulary::with_extras(
            &["Relevant Experience".to_string()],
            &["Volunteer Work".to_string()],
        )
        .unwrap();
        assert!(vocab.experience().contains("relevant experience"));
        assert!(vocab.experience().contains("work history"));
        assert!(vocab.other().contains("volunteer work"));
        assert!(vocab.other().contains("education"));
    }
}
