use crate::model::{Platform, SocialLinks};
use crate::render::escape_href;

const STROKE_ATTRS: &str = "fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
                            stroke-linecap=\"round\" stroke-linejoin=\"round\"";

const EXTERNAL_LINK: &str = "<path d=\"M15 3h6v6\"/><path d=\"M10 14 21 3\"/>\
<path d=\"M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6\"/>";

fn svg(attrs: &str, inner: &str) -> String {
    format!("<svg class=\"icon\" viewBox=\"0 0 24 24\" {attrs} aria-hidden=\"true\">{inner}</svg>")
}

/// Icon for an outbound website link.
pub(crate) fn external_link_icon() -> String {
    svg(STROKE_ATTRS, EXTERNAL_LINK)
}

/// Inline SVG icon for a platform.
pub(crate) fn platform_icon(platform: Platform) -> String {
    let inner = match platform {
        Platform::X => {
            "<path d=\"M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 \
             3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z\"/>"
        }
        Platform::Facebook => {
            "<path d=\"M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z\"/>"
        }
        Platform::Instagram => {
            "<rect x=\"2\" y=\"2\" width=\"20\" height=\"20\" rx=\"5\" ry=\"5\"/>\
             <path d=\"M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z\"/>\
             <line x1=\"17.5\" x2=\"17.51\" y1=\"6.5\" y2=\"6.5\"/>"
        }
        Platform::Youtube => {
            "<path d=\"M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 \
             2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 \
             0 0 1 2.5 17\"/><path d=\"m10 15 5-3-5-3z\"/>"
        }
        Platform::Linkedin => {
            "<path d=\"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 \
             6-6z\"/><rect x=\"2\" y=\"9\" width=\"4\" height=\"12\"/><circle cx=\"4\" cy=\"4\" r=\"2\"/>"
        }
        Platform::Email => {
            "<rect width=\"20\" height=\"16\" x=\"2\" y=\"4\" rx=\"2\"/>\
             <path d=\"m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7\"/>"
        }
        // TikTok has no outline icon, so it is drawn filled.
        Platform::Tiktok => {
            return svg(
                "fill=\"currentColor\"",
                "<path d=\"M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 \
                 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-1-.05A6.33 \
                 6.33 0 0 0 5 20.1a6.34 6.34 0 0 0 10.86-4.43v-7a8.16 8.16 0 0 0 4.77 \
                 1.52v-3.4a4.85 4.85 0 0 1-1-.1z\"/>",
            );
        }
    };
    svg(STROKE_ATTRS, inner)
}

/// Row of icon links, one per platform with a link. Empty when there are none.
pub(crate) fn social_links(social: &SocialLinks) -> String {
    if social.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"social-links\">\n");
    for (platform, url) in social.active() {
        let link = if platform.is_email() {
            format!("href=\"mailto:{}\"", escape_href(url))
        } else {
            format!(
                "href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
                escape_href(url)
            )
        };
        html.push_str(&format!(
            "<a class=\"social-link\" {link} aria-label=\"{}\">{}</a>\n",
            platform.label(),
            platform_icon(platform)
        ));
    }
    html.push_str("</div>\n");
    html
}
