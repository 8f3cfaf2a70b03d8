//! Protocol composer.
//!
//! Assembles the final instruction string sent to the generative text model
//! from three layered blocks, in a fixed order:
//!
//! 1. Persona instructions (or a generic fallback when blank)
//! 2. The final-output contract embedding the HTML template and the
//!    placeholder-handling directive
//! 3. The non-negotiable citation mandate
//!
//! Composition is a pure function: deterministic, side-effect-free, and it
//! never touches the network. Placeholder tokens (`__UPPER_SNAKE__`) in the
//! template pass through byte-for-byte; only the downstream model may fill
//! them, and only when the directive says so.

use once_cell::sync::Lazy;
use regex::Regex;

/// Generic persona used when the caller supplies blank instructions.
pub const FALLBACK_INSTRUCTIONS: &str = "You are a professional journalist and content creator. \
     Write accurate, well-structured, engaging articles in the language of the user's request, \
     with a clear headline, informative body, and a neutral tone.";

/// Directive injected when placeholders must survive verbatim.
const PRESERVE_PLACEHOLDERS_DIRECTIVE: &str = "The template contains dynamic placeholders shaped like __TOKEN__. Preserve every \
     placeholder exactly as written; do not replace, translate, move, or remove any of them.";

/// Directive injected when the model may fill placeholders itself.
const FILL_PLACEHOLDERS_DIRECTIVE: &str = "The template contains dynamic placeholders shaped like __TOKEN__. Replace each \
     placeholder with a plausible, contextually appropriate value.";

/// The citation mandate appended to every composed instruction string.
///
/// This text is a fixed contract with the downstream model; no input ever
/// alters it.
pub const CITATION_MANDATE: &str = "CITATION MANDATE (non-negotiable):\n\
     Every factual claim in the body must carry a numbered citation anchor of the exact form \
     <a href=\"#refN\" id=\"citeN\">[N]</a>, where N is the citation number.\n\
     Each anchor must have a matching <li id=\"refN\"> entry in a sources list at the end of \
     the html, and that entry must link back to the claim with <a href=\"#citeN\">.\n\
     Number citations sequentially starting at 1. Never emit a claim anchor without its \
     paired reference entry.";

/// Reserved placeholder grammar: `__[A-Z_]+__`.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__[A-Z_]+__").expect("placeholder regex is valid"));

/// Composes the full instruction string for one generation request.
///
/// # Arguments
///
/// * `instructions` - persona instructions; blank input triggers the fallback
/// * `html_template` - the HTML template to embed (may be empty)
/// * `preserve_placeholders` - `true` to keep `__TOKEN__`s verbatim, `false`
///   to ask the model to fill them
pub fn compose(instructions: &str, html_template: &str, preserve_placeholders: bool) -> String {
    let persona_block = if instructions.trim().is_empty() {
        FALLBACK_INSTRUCTIONS
    } else {
        instructions
    };

    let directive = if preserve_placeholders {
        PRESERVE_PLACEHOLDERS_DIRECTIVE
    } else {
        FILL_PLACEHOLDERS_DIRECTIVE
    };

    let contract_block = format!(
        "FINAL OUTPUT CONTRACT:\n\
         Respond with a single JSON object and nothing else: no markdown fences, no prose \
         outside the JSON.\n\
         The object must contain exactly these keys: slug, metaDescription, metaKeywords, \
         title, html.\n\
         {directive}\n\
         Fill the following HTML template and return the filled result as the value of the \
         \"html\" key:\n\
         {html_template}"
    );

    format!("{persona_block}\n\n{contract_block}\n\n{CITATION_MANDATE}")
}

/// Extracts every reserved placeholder token from a template, in order of
/// first appearance, without duplicates.
pub fn placeholder_tokens(template: &str) -> Vec<&str> {
    let mut seen = Vec::new();
    for m in PLACEHOLDER_RE.find_iter(template) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<article><h1>__HEADLINE__</h1><p>__BODY__</p><footer>__HEADLINE__</footer></article>";

    #[test]
    fn test_preserves_every_placeholder_occurrence() {
        let out = compose("Be concise.", TEMPLATE, true);
        assert!(out.contains(TEMPLATE));
        for token in placeholder_tokens(TEMPLATE) {
            assert!(out.contains(token));
        }
    }

    #[test]
    fn test_contains_citation_mandate_verbatim() {
        let out = compose("Be concise.", TEMPLATE, true);
        assert!(out.contains(CITATION_MANDATE));
        let out = compose("", "", false);
        assert!(out.contains(CITATION_MANDATE));
    }

    #[test]
    fn test_contract_names_all_five_keys() {
        let out = compose("Be concise.", TEMPLATE, false);
        for key in ["slug", "metaDescription", "metaKeywords", "title", "html"] {
            assert!(out.contains(key), "missing contract key: {key}");
        }
    }

    #[test]
    fn test_blank_and_whitespace_instructions_are_equivalent() {
        let a = compose("", TEMPLATE, true);
        let b = compose("   \n\t", TEMPLATE, true);
        assert_eq!(a, b);
        assert!(a.starts_with(FALLBACK_INSTRUCTIONS));
    }

    #[test]
    fn test_directive_switches_on_flag() {
        let preserve = compose("x", TEMPLATE, true);
        let fill = compose("x", TEMPLATE, false);
        assert_ne!(preserve, fill);
        assert!(preserve.contains("exactly as written"));
        assert!(fill.contains("plausible"));
    }

    #[test]
    fn test_block_order_is_fixed() {
        let out = compose("PERSONA_MARKER", TEMPLATE, true);
        let persona_at = out.find("PERSONA_MARKER").unwrap();
        let contract_at = out.find("FINAL OUTPUT CONTRACT").unwrap();
        let citation_at = out.find("CITATION MANDATE").unwrap();
        assert!(persona_at < contract_at);
        assert!(contract_at < citation_at);
    }

    #[test]
    fn test_empty_template_is_still_valid() {
        let out = compose("Be concise.", "", true);
        assert!(out.contains("FINAL OUTPUT CONTRACT"));
        assert!(out.ends_with(CITATION_MANDATE));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = compose("Be concise.", TEMPLATE, true);
        let b = compose("Be concise.", TEMPLATE, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_placeholder_token_grammar() {
        let tokens = placeholder_tokens("__A__ __lower__ __MIXED_case__ __OK_TOKEN__ _SINGLE_");
        assert_eq!(tokens, vec!["__A__", "__OK_TOKEN__"]);
    }

    #[test]
    fn test_placeholder_tokens_deduplicated_in_order() {
        let tokens = placeholder_tokens(TEMPLATE);
        assert_eq!(tokens, vec!["__HEADLINE__", "__BODY__"]);
    }
}
