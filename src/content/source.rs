use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::content::sections::SectionKind;
use crate::model::{Candidate, Platform};

/// Write a candidate back out as a source unit.
///
/// Strings are double-quoted, booleans and the order are bare, and every
/// social platform is listed. Empty sections are left out.
pub fn to_source(candidate: &Candidate) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "name: \"{}\"", candidate.name);
    let _ = writeln!(out, "byline: \"{}\"", candidate.byline);
    let _ = writeln!(out, "photo: \"{}\"", candidate.photo);
    let _ = writeln!(out, "website: \"{}\"", candidate.website);
    let _ = writeln!(out, "withdrawn: {}", candidate.withdrawn);
    let _ = writeln!(out, "order: {}", candidate.order);
    let _ = writeln!(out, "social:");
    for platform in Platform::iter() {
        let _ = writeln!(out, "  {platform}: \"{}\"", candidate.social.get(platform));
    }
    let _ = writeln!(out, "---");

    for kind in SectionKind::iter() {
        let content = candidate.section(kind);
        if content.is_empty() {
            continue;
        }
        let _ = write!(out, "\n## {}\n\n{content}\n", kind.title());
    }

    out
}
