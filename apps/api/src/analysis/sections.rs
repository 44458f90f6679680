//! Section detection — splits résumé text into named sections by heading lines.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Résumé sections, declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Section → accumulated text, iterated in `Section` order.
pub type SectionMap = BTreeMap<Section, String>;

/// Heading substrings, checked in this order; the first hit wins.
const SECTION_HEADINGS: &[(&str, Section)] = &[
    ("education", Section::Education),
    ("experience", Section::Experience),
    ("work history", Section::Experience),
    ("skill", Section::Skills),
    ("project", Section::Projects),
    ("certification", Section::Certifications),
];

fn heading_for(line: &str) -> Option<Section> {
    let lowered = line.trim().to_lowercase();
    SECTION_HEADINGS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, section)| *section)
}

/// Assigns every non-blank line to the most recent heading above it.
///
/// Heading lines themselves are not content, and lines before the first heading
/// are dropped. Any line that merely mentions a heading word ("5 years of
/// experience") starts a new section; that is how the heuristic behaves.
pub fn detect_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(section) = heading_for(line) {
            current = Some(section);
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(section) = current {
            let content = sections.entry(section).or_default();
            content.push_str(trimmed);
            content.push('\n');
        }
    }

    sections.retain(|_, content| !content.trim().is_empty());
    sections
}
