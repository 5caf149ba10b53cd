//! Font-loading collaborator.
//!
//! Emits the stylesheet link references for the theme's font family:
//! two preconnect hints plus a v2 CSS API link that swaps itself to the
//! v1 scheme on load error (older families are only served by v1).

use crate::html::{Element, Node};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Families offered when the host's font catalog cannot be loaded.
pub const FALLBACK_FAMILIES: [&str; 9] = [
    "DM Sans",
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Poppins",
    "Source Sans Pro",
    "IBM Plex Sans",
];

/// Query-component encoding: unreserved characters stay literal,
/// everything else (spaces included) is percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

fn encode_family(family: &str) -> String {
    utf8_percent_encode(family, QUERY_COMPONENT).to_string()
}

/// v2 CSS API URL for a family at the weights the themes use.
pub fn stylesheet_url_v2(family: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@300;400;500;600;700&display=swap",
        encode_family(family)
    )
}

/// Legacy v1 CSS API URL, used as the on-error fallback.
pub fn stylesheet_url_v1(family: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css?family={}:300,400,500,600,700&display=swap",
        encode_family(family)
    )
}

/// Link nodes loading `family`: preconnects plus the stylesheet link
/// with its v1 fallback wired into the error handler.
pub fn font_links(family: &str) -> Vec<Node> {
    vec![
        Element::new("link")
            .attr("rel", "preconnect")
            .attr("href", "https://fonts.googleapis.com")
            .into(),
        Element::new("link")
            .attr("rel", "preconnect")
            .attr("href", "https://fonts.gstatic.com")
            .attr("crossorigin", "anonymous")
            .into(),
        Element::new("link")
            .attr("rel", "stylesheet")
            .attr("href", stylesheet_url_v2(family))
            .attr(
                "onerror",
                format!(
                    "this.onerror=null;this.href='{}'",
                    stylesheet_url_v1(family)
                ),
            )
            .into(),
    ]
}
