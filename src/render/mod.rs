mod card;
mod countdown;
mod social;

pub use countdown::format_deadline;

use chrono::{DateTime, Locale, Utc};
use pulldown_cmark::{html, Event, Parser};

use crate::model::{Candidate, Deadline};

const SITE_TITLE: &str = "BC Conservative Leadership Race";
const SITE_TAGLINE: &str = "Track the candidates vying to lead the BC Conservative Party";
const DISCLAIMER: &str =
    "This is an unofficial tracker. Not affiliated with the BC Conservative Party.";
const EMPTY_ROSTER: &str = "No candidates have been announced yet. Check back soon!";

const STYLES: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #f3f4f6; color: #1f2937; }
.site-header { background: #1e3a5f; color: #fff; padding: 24px 16px; text-align: center; }
.site-header h1 { margin: 0; font-size: 2em; }
.site-header p { margin: 8px 0 0; opacity: 0.85; }
main { max-width: 1280px; margin: 0 auto; padding: 32px 16px; }
.countdowns { display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 40px; }
.countdown { flex: 1; min-width: 260px; background: #fff; border-radius: 8px; padding: 24px; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.countdown h3 { margin: 0 0 8px; color: #1e3a5f; }
.countdown-date { font-size: 0.9em; color: #4b5563; }
.countdown-units { display: flex; gap: 16px; justify-content: center; }
.countdown-unit { text-align: center; }
.countdown-value { display: block; font-size: 2.2em; font-weight: bold; color: #1e3a5f; }
.countdown-label { font-size: 0.8em; color: #6b7280; }
.countdown-passed { font-size: 1.25em; font-weight: bold; color: #6b7280; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.card { position: relative; display: flex; flex-direction: column; background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.card.withdrawn { opacity: 0.7; }
.withdrawn-banner { position: absolute; top: 16px; right: -32px; transform: rotate(45deg); background: #b91c1c; color: #fff; padding: 4px 40px; font-size: 0.8em; font-weight: bold; }
.card-photo { aspect-ratio: 4 / 3; background: #e5e7eb; overflow: hidden; }
.card-photo img { width: 100%; height: 100%; object-fit: cover; }
.card-body { flex: 1; padding: 16px; }
.card-body h3 { margin: 0; color: #1e3a5f; font-size: 1.25em; }
.byline { margin: 4px 0 0; font-style: italic; color: #4b5563; font-size: 0.9em; }
.website { display: inline-flex; align-items: center; gap: 8px; margin-top: 12px; padding: 8px 16px; background: #1e3a5f; color: #fff; border-radius: 6px; text-decoration: none; font-size: 0.9em; }
.social-links { display: flex; gap: 12px; justify-content: center; margin-top: 12px; }
.social-link { color: #6b7280; }
.social-link:hover { color: #2563eb; }
.icon { width: 20px; height: 20px; }
.website .icon { width: 16px; height: 16px; }
.section { border-top: 1px solid #e5e7eb; }
.section summary { padding: 12px 16px; cursor: pointer; font-weight: 500; color: #1e3a5f; }
.section .prose { padding: 0 16px 16px; color: #374151; font-size: 0.9em; }
.empty-roster { text-align: center; color: #4b5563; padding: 48px 0; }
.site-footer { background: #1e3a5f; color: #fff; text-align: center; padding: 24px 16px; margin-top: 48px; font-size: 0.9em; }
";

/// Render the complete tracker page.
///
/// Countdowns are filled in as of `now`. The page keeps them current on its
/// own once loaded.
pub fn page(
    candidates: &[Candidate],
    deadlines: &[Deadline],
    now: DateTime<Utc>,
    locale: Locale,
) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{SITE_TITLE}</title>\n"));
    html.push_str(&format!("<style>\n{STYLES}</style>\n"));
    html.push_str("</head>\n<body>\n");

    html.push_str("<header class=\"site-header\">\n");
    html.push_str(&format!("<h1>{SITE_TITLE}</h1>\n<p>{SITE_TAGLINE}</p>\n"));
    html.push_str("</header>\n<main>\n");

    html.push_str("<section class=\"countdowns\">\n");
    for deadline in deadlines {
        html.push_str(&countdown::countdown_box(deadline, now, locale));
    }
    html.push_str("</section>\n");

    html.push_str(&candidate_grid(candidates));

    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer class=\"site-footer\"><p>{DISCLAIMER}</p></footer>\n"
    ));
    html.push_str(countdown::COUNTDOWN_SCRIPT);
    html.push_str("</body>\n</html>\n");

    html
}

/// Card grid, or a notice when nobody has been announced yet.
fn candidate_grid(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return format!("<section>\n<p class=\"empty-roster\">{EMPTY_ROSTER}</p>\n</section>\n");
    }

    let mut html = String::from("<section>\n<div class=\"grid\">\n");
    for candidate in candidates {
        html.push_str(&card::candidate_card(candidate));
    }
    html.push_str("</div>\n</section>\n");
    html
}

/// Render candidate-authored markdown to HTML.
///
/// Raw HTML in the source is shown as text, never passed through.
pub(crate) fn markdown(source: &str) -> String {
    let events = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Escape text for element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing to a String cannot fail.
    let _ = pulldown_cmark_escape::escape_html(&mut out, text);
    out
}

/// Escape a URL for an `href` or `src` attribute.
pub(crate) fn escape_href(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let _ = pulldown_cmark_escape::escape_href(&mut out, url);
    out
}
