use strum::{EnumIter, IntoEnumIterator};

use crate::model::Candidate;

/// Lines starting with this marker open a new section.
const HEADING_MARKER: &str = "## ";

/// The prose sections a candidate profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SectionKind {
    Bio,
    Announcements,
    StaffSupporters,
}

impl SectionKind {
    /// Lowercase prefix a heading must start with to land in this section.
    fn prefix(self) -> &'static str {
        match self {
            SectionKind::Bio => "bio",
            SectionKind::Announcements => "announcements",
            SectionKind::StaffSupporters => "staff",
        }
    }

    /// Heading used when displaying or writing the section.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Bio => "Bio",
            SectionKind::Announcements => "Announcements",
            SectionKind::StaffSupporters => "Staff & Supporters",
        }
    }

    /// Classify a heading (the text after the marker), case-insensitively.
    pub fn classify(heading: &str) -> Option<Self> {
        let heading = heading.trim_start().to_lowercase();
        SectionKind::iter().find(|kind| heading.starts_with(kind.prefix()))
    }
}

/// Section contents, each trimmed and empty when absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sections {
    pub bio: String,
    pub announcements: String,
    pub staff_supporters: String,
}

impl Sections {
    fn slot_mut(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::Bio => &mut self.bio,
            SectionKind::Announcements => &mut self.announcements,
            SectionKind::StaffSupporters => &mut self.staff_supporters,
        }
    }
}

impl Candidate {
    /// Content of one prose section, empty when absent.
    pub fn section(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Bio => &self.bio,
            SectionKind::Announcements => &self.announcements,
            SectionKind::StaffSupporters => &self.staff_supporters,
        }
    }
}

struct Chunk<'a> {
    kind: Option<SectionKind>,
    lines: Vec<&'a str>,
}

/// Partition a body into its recognised sections.
///
/// Text before the first heading and chunks under unrecognised headings are
/// dropped. A repeated heading replaces the earlier section.
pub fn split_sections(body: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<Chunk> = None;

    for line in body.lines() {
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            if let Some(chunk) = current.take() {
                assign(&mut sections, chunk);
            }
            current = Some(Chunk {
                kind: SectionKind::classify(heading),
                lines: Vec::new(),
            });
        } else if let Some(chunk) = current.as_mut() {
            chunk.lines.push(line);
        }
    }
    if let Some(chunk) = current {
        assign(&mut sections, chunk);
    }

    sections
}

fn assign(sections: &mut Sections, chunk: Chunk) {
    if let Some(kind) = chunk.kind {
        *sections.slot_mut(kind) = chunk.lines.join("\n").trim().to_string();
    }
}
