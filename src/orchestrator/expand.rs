//! Lexical query expansion.
//!
//! Widens a topic into a small set of search variants: the topic itself,
//! a naive singular/plural toggle, and a fixed synonym lookup. Variants
//! are deliberately few, since each one multiplies the fan-out.

/// Hand-picked topic aliases that broaden narrow phrasings.
const SYNONYMS: &[(&str, &str)] = &[
    ("stoicism", "stoic philosophy"),
    ("ai", "artificial intelligence"),
    ("history", "historical"),
    ("fitness", "exercise"),
    ("space", "astronomy"),
];

/// Expand a topic into its query variants, in stable order.
///
/// A blank topic maps to a single empty variant; live searches reject
/// blank topics before ever reaching this point, so that case only
/// serves callers that pre-validate.
pub fn expand_queries(topic: &str) -> Vec<String> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return vec![String::new()];
    }

    let mut variants = vec![trimmed.to_owned()];

    let toggled = match trimmed.strip_suffix('s') {
        Some(singular) => singular.to_owned(),
        None => format!("{trimmed}s"),
    };
    push_unique(&mut variants, toggled);

    if let Some((_, synonym)) = SYNONYMS
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
    {
        push_unique(&mut variants, (*synonym).to_owned());
    }

    variants
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}
