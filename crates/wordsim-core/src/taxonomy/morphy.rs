//! # Morphological Normalisation
//!
//! WordNet's `morphy`: maps an inflected form to candidate base forms by
//! consulting the per-category exception list, falling back to suffix
//! substitution rules.

use crate::types::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Candidate lemmas for `form`, before filtering against the index.
///
/// If `exceptions` holds base forms for this word, only the word itself and
/// those bases are tried; otherwise every matching suffix rule contributes.
#[must_use]
pub fn candidates(form: &str, pos: PartOfSpeech, exceptions: Option<&[String]>) -> Vec<String> {
    let mut out = vec![form.to_string()];

    match exceptions {
        Some(bases) => out.extend(bases.iter().cloned()),
        None => out.extend(apply_rules(&out, pos)),
    }
    out
}

/// One round of suffix substitution over every form.
#[must_use]
pub fn apply_rules(forms: &[String], pos: PartOfSpeech) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules(pos).iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{stem}{new}"))
            })
        })
        .collect()
}

/// Indexed base forms of `form`.
///
/// Exceptions and a single rule pass are tried first. If nothing they yield
/// is indexed, the rules are reapplied to their own output until an indexed
/// form turns up or no rule matches. Every rule shortens the form, so this
/// terminates.
pub fn base_forms<F>(
    form: &str,
    pos: PartOfSpeech,
    exceptions: Option<&[String]>,
    is_indexed: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let found = filter_indexed(candidates(form, pos, exceptions), &is_indexed);
    if !found.is_empty() || exceptions.is_some() {
        return found;
    }

    let mut forms = apply_rules(&[form.to_string()], pos);
    while !forms.is_empty() {
        forms = apply_rules(&forms, pos);
        let found = filter_indexed(forms.clone(), &is_indexed);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// Keeps candidates accepted by `is_indexed`, dropping duplicates while
/// preserving order.
pub fn filter_indexed<F>(candidates: Vec<String>, is_indexed: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| is_indexed(c) && seen.insert(c.clone()))
        .collect()
}
