//! Isolates the experience section of a flat resume text.
//!
//! Single forward pass over the lines, driven by a two-state machine:
//!
//! ```text
//! BeforeSection --experience heading--> InSection       (heading consumed)
//! BeforeSection --other heading-------> BeforeSection   (skipped)
//! BeforeSection --content-------------> BeforeSection   (discarded)
//! InSection     --experience heading--> InSection       (heading consumed, not emitted)
//! InSection     --other heading-------> stop
//! InSection     --content-------------> InSection       (emitted)
//! ```
//!
//! Headings match only as whole lines after lowercasing and trimming. Trimming
//! also drops the ASCII separators U+001C..=U+001F, which PDF text can carry.

pub mod headings;

use std::collections::HashSet;

pub use headings::HeadingVocabulary;

/// What a single trimmed, lowercased line is with respect to the vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    ExperienceHeading,
    OtherHeading,
    Content,
}

impl LineKind {
    /// The experience check wins if a line is somehow in both sets.
    pub fn classify(
        trimmed: &str,
        experience_headings: &HashSet<String>,
        other_headings: &HashSet<String>,
    ) -> Self {
        if experience_headings.contains(trimmed) {
            LineKind::ExperienceHeading
        } else if other_headings.contains(trimmed) {
            LineKind::OtherHeading
        } else {
            LineKind::Content
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    BeforeSection,
    InSection,
}

/// Outcome of feeding one line to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move to the given state; the line is not part of the output.
    Consume(ScanState),
    /// Keep the line in the output; state unchanged.
    Emit,
    /// End of the section. Remaining lines are never looked at.
    Stop,
}

impl ScanState {
    pub fn on_line(self, kind: LineKind) -> Transition {
        match (self, kind) {
            (_, LineKind::ExperienceHeading) => Transition::Consume(ScanState::InSection),
            (ScanState::BeforeSection, LineKind::OtherHeading) => {
                Transition::Consume(ScanState::BeforeSection)
            }
            (ScanState::InSection, LineKind::OtherHeading) => Transition::Stop,
            (ScanState::BeforeSection, LineKind::Content) => {
                Transition::Consume(ScanState::BeforeSection)
            }
            (ScanState::InSection, LineKind::Content) => Transition::Emit,
        }
    }
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `str::trim` plus the ASCII file/group/record/unit separators.
pub fn strip(s: &str) -> &str {
    s.trim_matches(is_strippable)
}

/// Returns the lowercased experience section of `text`, trimmed at both ends,
/// or an empty string when no experience heading is found.
pub fn segment(
    text: &str,
    experience_headings: &HashSet<String>,
    other_headings: &HashSet<String>,
) -> String {
    let folded = text.to_lowercase();
    let mut state = ScanState::default();
    let mut section = String::new();

    for line in folded.split('\n') {
        let kind = LineKind::classify(strip(line), experience_headings, other_headings);
        match state.on_line(kind) {
            Transition::Consume(next) => state = next,
            Transition::Emit => {
                section.push_str(line);
                section.push('\n');
            }
            Transition::Stop => break,
        }
    }

    strip(&section).to_string()
}
