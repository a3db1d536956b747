use strum::IntoEnumIterator;

use crate::content::SectionKind;
use crate::model::{Candidate, PLACEHOLDER_PHOTO};
use crate::render::social::{external_link_icon, social_links};
use crate::render::{escape, escape_href, markdown};

/// One candidate card for the grid.
pub(crate) fn candidate_card(candidate: &Candidate) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        "<article class=\"card{}\" id=\"candidate-{}\">\n",
        if candidate.withdrawn { " withdrawn" } else { "" },
        escape(&candidate.id)
    ));
    if candidate.withdrawn {
        html.push_str("<div class=\"withdrawn-banner\">Withdrawn</div>\n");
    }

    // Photo, swapped for the placeholder if it fails to load
    html.push_str(&format!(
        "<div class=\"card-photo\"><img src=\"{}\" alt=\"{}\" \
         onerror=\"this.onerror=null;this.src='{PLACEHOLDER_PHOTO}'\"></div>\n",
        escape_href(&candidate.photo),
        escape(&candidate.name)
    ));

    html.push_str("<div class=\"card-body\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(&candidate.name)));
    if !candidate.byline.is_empty() {
        html.push_str(&format!(
            "<p class=\"byline\">&quot;{}&quot;</p>\n",
            escape(&candidate.byline)
        ));
    }
    if !candidate.website.is_empty() {
        html.push_str(&format!(
            "<a class=\"website\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit Website {}</a>\n",
            escape_href(&candidate.website),
            external_link_icon()
        ));
    }
    html.push_str(&social_links(&candidate.social));
    html.push_str("</div>\n");

    html.push_str("<div class=\"card-sections\">\n");
    for kind in SectionKind::iter() {
        html.push_str(&collapsible(kind.title(), candidate.section(kind)));
    }
    html.push_str("</div>\n</article>\n");

    html
}

/// A closed-by-default section rendering `content` as markdown. Blank
/// content renders nothing.
fn collapsible(title: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }
    format!(
        "<details class=\"section\">\n<summary>{}</summary>\n<div class=\"prose\">\n{}</div>\n</details>\n",
        escape(title),
        markdown(content)
    )
}
