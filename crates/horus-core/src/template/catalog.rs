//! The built-in catalog data and its lookup operations.
//!
//! Pure static data access: no side effects, no errors possible.

use once_cell::sync::Lazy;

use super::model::{HorusTemplate, TemplateKind};

/// The ordered built-in catalog.
///
/// Order is the display order; it never changes at runtime.
static BUILTIN: Lazy<Vec<HorusTemplate>> = Lazy::new(|| {
    vec![
        HorusTemplate {
            name: "News Desk",
            description: "A measured, source-driven news reporter voice.",
            instructions: "You are a senior news desk editor. Report facts in inverted-pyramid \
                           order, attribute every claim to a source, and keep opinion out of \
                           the copy. Prefer short declarative sentences.",
            html_template: "",
            icon: "📰",
            kind: TemplateKind::Persona,
        },
        HorusTemplate {
            name: "Sports Analyst",
            description: "An energetic match-report and analysis voice.",
            instructions: "You are a veteran sports analyst. Open with the result, follow with \
                           the turning points, and close with what the result means for the \
                           table. Use player and club names precisely.",
            html_template: "",
            icon: "⚽",
            kind: TemplateKind::Persona,
        },
        HorusTemplate {
            name: "Horoscope Writer",
            description: "A warm, conversational daily-horoscope voice.",
            instructions: "You write daily horoscopes. Keep each reading positive, specific to \
                           the sign, and under 120 words. Never promise outcomes; suggest \
                           moods and opportunities.",
            html_template: "",
            icon: "🔮",
            kind: TemplateKind::Persona,
        },
        HorusTemplate {
            name: "Standard Article Protocol",
            description: "Summarize the supplied sources into one article.",
            instructions: "Read every supplied source before writing. Merge overlapping facts, \
                           resolve conflicts in favor of the most recent source, and never \
                           introduce facts that appear in no source.",
            html_template: "",
            icon: "📋",
            kind: TemplateKind::Protocol,
        },
        HorusTemplate {
            name: "Listicle Protocol",
            description: "Turn the supplied material into a numbered list article.",
            instructions: "Structure the article as a numbered list of 5 to 10 items. Each item \
                           gets a bold heading and one to two sentences. Keep the introduction \
                           under 60 words.",
            icon: "🔢",
            html_template: "",
            kind: TemplateKind::Protocol,
        },
        HorusTemplate {
            name: "Classic News Layout",
            description: "Headline, lead image, body, and sources section.",
            instructions: "",
            html_template: "<article>\n  <h1>__HEADLINE__</h1>\n  <img src=\"__LEAD_IMAGE__\" \
                            alt=\"__LEAD_IMAGE_ALT__\"/>\n  <div class=\"body\">__BODY__</div>\n  \
                            <h2>Sources</h2>\n  <ol class=\"sources\">__SOURCES__</ol>\n</article>",
            icon: "🗞️",
            kind: TemplateKind::Template,
        },
        HorusTemplate {
            name: "Minimal Layout",
            description: "A bare title-and-body shell.",
            instructions: "",
            html_template: "<article>\n  <h1>__TITLE__</h1>\n  __BODY__\n</article>",
            icon: "⬜",
            kind: TemplateKind::Template,
        },
    ]
});

/// Returns the full catalog in display order.
pub fn all() -> &'static [HorusTemplate] {
    &BUILTIN
}

/// Returns catalog entries of one kind, preserving display order.
pub fn of_kind(kind: TemplateKind) -> Vec<&'static HorusTemplate> {
    BUILTIN.iter().filter(|t| t.kind == kind).collect()
}

/// Looks up a catalog entry by exact name.
pub fn find(name: &str) -> Option<&'static HorusTemplate> {
    BUILTIN.iter().find(|t| t.name == name)
}
