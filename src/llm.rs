use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extract::{self, strip_tags};
use crate::{clamp_score, HP};

// Two or more consecutive capitalized words, e.g. "New York".
static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\p{Lu}\p{Ll}+(?:\s+\p{Lu}\p{Ll}+)+\b").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCoverage {
    pub entities: Vec<String>,
    pub score: i32,
}

pub fn semantic_entities(content: &str) -> EntityCoverage {
    let text = strip_tags(content);
    let entities: BTreeSet<String> = ENTITY_RE
        .find_iter(&text)
        .map(|m| WHITESPACE_RUN_RE.replace_all(m.as_str(), " ").into_owned())
        .collect();
    let score = (entities.len() as f64 / HP.entity_target as f64 * 100.0).round() as i32;
    EntityCoverage {
        entities: entities.into_iter().collect(),
        score: clamp_score(score),
    }
}

pub fn has_direct_answer(content: &str) -> bool {
    extract::paragraphs(content)
        .first()
        .is_some_and(|p| p.trim().chars().count() >= HP.direct_answer_min_chars)
}

pub fn has_schema_type<S: AsRef<str>>(content: &str, allowed: &[S]) -> bool {
    if allowed.is_empty() {
        return false;
    }
    extract::schema_types(content)
        .iter()
        .any(|t| allowed.iter().any(|a| a.as_ref() == t))
}
