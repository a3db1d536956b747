use strum::IntoEnumIterator;

use crate::content::frontmatter::{HeaderMap, HeaderValue};
use crate::content::sections::Sections;
use crate::model::{
    Candidate, Platform, SocialLinks, DEFAULT_ORDER, PLACEHOLDER_PHOTO, UNKNOWN_NAME,
};

/// Build a fully defaulted candidate from a parsed header and its sections.
///
/// A field holding a value of the wrong type counts as absent.
pub fn normalize(id: &str, header: &HeaderMap, sections: Sections) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: non_empty_text(header, "name")
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        byline: text(header, "byline").unwrap_or_default().to_string(),
        photo: non_empty_text(header, "photo")
            .unwrap_or(PLACEHOLDER_PHOTO)
            .to_string(),
        website: text(header, "website").unwrap_or_default().to_string(),
        withdrawn: flag(header, "withdrawn").unwrap_or(false),
        order: order(header).unwrap_or(DEFAULT_ORDER),
        social: social_links(header.get("social").and_then(HeaderValue::as_map)),
        bio: sections.bio,
        announcements: sections.announcements,
        staff_supporters: sections.staff_supporters,
    }
}

fn text<'a>(header: &'a HeaderMap, key: &str) -> Option<&'a str> {
    header.get(key).and_then(HeaderValue::as_str)
}

fn non_empty_text<'a>(header: &'a HeaderMap, key: &str) -> Option<&'a str> {
    text(header, key).filter(|s| !s.is_empty())
}

fn flag(header: &HeaderMap, key: &str) -> Option<bool> {
    header.get(key).and_then(HeaderValue::as_bool)
}

/// Finite numbers only, truncated toward zero.
fn order(header: &HeaderMap) -> Option<i64> {
    header
        .get("order")
        .and_then(HeaderValue::as_number)
        .filter(|n| n.is_finite())
        .map(|n| n.trunc() as i64)
}

fn social_links(map: Option<&HeaderMap>) -> SocialLinks {
    let mut social = SocialLinks::default();
    let Some(map) = map else {
        return social;
    };
    for platform in Platform::iter() {
        if let Some(url) = text(map, platform.as_ref()) {
            *social.get_mut(platform) = url.to_string();
        }
    }
    social
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter::parse;

    fn header(source: &str) -> HeaderMap {
        parse(source).header
    }

    #[test]
    fn test_defaults_for_empty_header() {
        let candidate = normalize("jane-doe", &HeaderMap::new(), Sections::default());

        assert_eq!(candidate.id, "jane-doe");
        assert_eq!(candidate.name, UNKNOWN_NAME);
        assert_eq!(candidate.byline, "");
        assert_eq!(candidate.photo, PLACEHOLDER_PHOTO);
        assert_eq!(candidate.website, "");
        assert!(!candidate.withdrawn);
        assert_eq!(candidate.order, DEFAULT_ORDER);
        assert_eq!(candidate.social, SocialLinks::default());
    }

    #[test]
    fn test_wrong_types_fall_back_to_defaults() {
        let header = header(
            "---\nname: 2026\nwithdrawn: \"yes\"\norder: first\nphoto: true\nsocial: none\n---\n",
        );
        let candidate = normalize("x", &header, Sections::default());

        assert_eq!(candidate.name, UNKNOWN_NAME);
        assert!(!candidate.withdrawn);
        assert_eq!(candidate.order, DEFAULT_ORDER);
        assert_eq!(candidate.photo, PLACEHOLDER_PHOTO);
        assert!(candidate.social.is_empty());
    }

    #[test]
    fn test_partial_social_block() {
        let header = header(
            "---\nsocial:\n  x: \"https://x.com/jane\"\n  tiktok: 42\n  myspace: old\n---\n",
        );
        let candidate = normalize("x", &header, Sections::default());

        assert_eq!(candidate.social.x, "https://x.com/jane");
        assert_eq!(candidate.social.tiktok, "");
        assert_eq!(candidate.social.facebook, "");
        assert_eq!(candidate.social.email, "");
    }

    #[test]
    fn test_order_values() {
        let fractional = header("---\norder: 2.7\n---\n");
        assert_eq!(normalize("a", &fractional, Sections::default()).order, 2);

        let zero = header("---\norder: 0\n---\n");
        assert_eq!(normalize("a", &zero, Sections::default()).order, 0);

        let infinite = header("---\norder: inf\n---\n");
        assert_eq!(
            normalize("a", &infinite, Sections::default()).order,
            DEFAULT_ORDER
        );
    }

    #[test]
    fn test_empty_name_uses_placeholder() {
        let header = header("---\nname: \"\"\nbyline: \"\"\n---\n");
        let candidate = normalize("a", &header, Sections::default());
        assert_eq!(candidate.name, UNKNOWN_NAME);
        assert_eq!(candidate.byline, "");
    }

    #[test]
    fn test_sections_are_carried_over() {
        let sections = Sections {
            bio: "bio".to_string(),
            announcements: "news".to_string(),
            staff_supporters: "team".to_string(),
        };
        let candidate = normalize("a", &HeaderMap::new(), sections);
        assert_eq!(candidate.bio, "bio");
        assert_eq!(candidate.announcements, "news");
        assert_eq!(candidate.staff_supporters, "team");
    }
}
