pub mod frontmatter;
pub(crate) mod loader;
pub mod normalize;
pub mod sections;
mod source;

pub use frontmatter::{Document, HeaderMap, HeaderValue};
pub use loader::{collect_candidates, load_candidates};
pub use sections::{SectionKind, Sections};
pub use source::to_source;

use crate::model::Candidate;

/// Run one source unit through header parsing, section splitting and
/// normalization.
pub fn parse_candidate(id: &str, raw: &str) -> Candidate {
    let document = frontmatter::parse(raw);
    let sections = sections::split_sections(&document.body);
    normalize::normalize(id, &document.header, sections)
}
