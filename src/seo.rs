use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::extract::{self, strip_tags};
use crate::{clamp_score, percentage, HP};

static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn normalized_keyword(keyword: &str) -> Option<String> {
    let kw = keyword.trim().to_lowercase();
    (!kw.is_empty()).then_some(kw)
}

fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    normalized_keyword(keyword).is_some_and(|kw| haystack.to_lowercase().contains(&kw))
}

// ---------------------------------------------------------------------------
// Keyword density
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub occurrences: usize,
    pub word_count: usize,
    pub density: f64,
    pub score: i32,
}

pub fn keyword_density(content: &str, keyword: &str) -> KeywordDensity {
    let text = strip_tags(content).to_lowercase();
    let word_count = extract::word_count(&text);
    let occurrences = match normalized_keyword(keyword) {
        Some(kw) if word_count > 0 => text.matches(kw.as_str()).count(),
        _ => 0,
    };
    let density = if word_count > 0 {
        occurrences as f64 * 100.0 / word_count as f64
    } else {
        0.0
    };
    KeywordDensity {
        occurrences,
        word_count,
        density,
        score: density_score(density),
    }
}

pub fn density_score(density: f64) -> i32 {
    let raw = if density < HP.density_min_pct {
        density / HP.density_min_pct * 100.0
    } else if density <= HP.density_max_pct {
        100.0
    } else {
        100.0 - (density - HP.density_max_pct) * HP.density_decay_per_pct
    };
    clamp_score(raw.max(0.0).round() as i32)
}

// ---------------------------------------------------------------------------
// Title and headings
// ---------------------------------------------------------------------------

pub fn has_keyword_in_h1(content: &str, keyword: &str) -> bool {
    extract::first_h1_text(content).is_some_and(|title| contains_keyword(&title, keyword))
}

pub fn title_has_number(content: &str) -> bool {
    extract::first_h1_text(content).is_some_and(|title| title.chars().any(|c| c.is_ascii_digit()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
}

pub fn count_headings(content: &str) -> HeadingCounts {
    let [h1, h2, h3, h4, h5] = extract::heading_levels(content);
    HeadingCounts { h1, h2, h3, h4, h5 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingStructure {
    pub counts: HeadingCounts,
    pub has_unique_h1: bool,
    pub has_hierarchy: bool,
    pub score: i32,
}

pub fn evaluate_heading_structure(content: &str) -> HeadingStructure {
    let counts = count_headings(content);
    let has_unique_h1 = counts.h1 == 1;
    let has_hierarchy = counts.h2 >= HP.heading_min_h2 && counts.h3 >= HP.heading_min_h3;

    let mut score = 0;
    if has_unique_h1 {
        score += HP.heading_unique_h1_points;
    }
    if has_hierarchy {
        score += HP.heading_hierarchy_points;
    }
    HeadingStructure {
        counts,
        has_unique_h1,
        has_hierarchy,
        score: clamp_score(score),
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaDescriptionCheck {
    pub present: bool,
    pub has_keyword: bool,
    pub length: usize,
    pub length_ok: bool,
    pub score: i32,
}

pub fn evaluate_meta_description(meta_description: &str, keyword: &str) -> MetaDescriptionCheck {
    let present = !meta_description.trim().is_empty();
    let has_keyword = contains_keyword(meta_description, keyword);
    let length = meta_description.chars().count();
    let length_ok = present && (HP.meta_min_chars..=HP.meta_max_chars).contains(&length);

    let mut score = 0;
    if present {
        score += HP.meta_present_points;
    }
    if has_keyword {
        score += HP.meta_keyword_points;
    }
    if length_ok {
        score += HP.meta_length_points;
    }
    MetaDescriptionCheck {
        present,
        has_keyword,
        length,
        length_ok,
        score: clamp_score(score),
    }
}

pub fn keyword_in_slug(slug: &str, keyword: &str) -> bool {
    match normalized_keyword(keyword) {
        Some(kw) => {
            let hyphenated = WHITESPACE_RUN_RE.replace_all(&kw, "-");
            slug.to_lowercase().contains(&*hyphenated)
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Paragraphs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphAnalysis {
    pub total_paragraphs: usize,
    pub good: usize,
    pub too_short: usize,
    pub too_long: usize,
    pub score: i32,
}

pub fn evaluate_paragraphs(content: &str) -> ParagraphAnalysis {
    let mut analysis = ParagraphAnalysis {
        total_paragraphs: 0,
        good: 0,
        too_short: 0,
        too_long: 0,
        score: 0,
    };
    for paragraph in extract::paragraphs(content) {
        let words = extract::word_count(&paragraph);
        analysis.total_paragraphs += 1;
        if words < HP.paragraph_good_min_words {
            analysis.too_short += 1;
        } else if words > HP.paragraph_good_max_words {
            analysis.too_long += 1;
        } else {
            analysis.good += 1;
        }
    }
    analysis.score = percentage(analysis.good, analysis.total_paragraphs);
    analysis
}

/// Every paragraph stays within `max_words`. Non-empty content without any
/// `<p>` passes vacuously; empty content fails.
pub fn check_short_paragraphs(content: &str, max_words: usize) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    extract::paragraphs(content)
        .iter()
        .all(|p| extract::word_count(p) <= max_words)
}

// ---------------------------------------------------------------------------
// Images and links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAltCheck {
    pub total: usize,
    pub with_alt: usize,
    pub with_keyword: usize,
    pub score: i32,
}

pub fn check_image_alts(content: &str, keyword: &str) -> ImageAltCheck {
    let images = extract::images(content);
    let mut with_alt = 0;
    let mut with_keyword = 0;
    for alt in images.iter().filter_map(|img| img.alt.as_deref()) {
        if alt.trim().is_empty() {
            continue;
        }
        with_alt += 1;
        if contains_keyword(alt, keyword) {
            with_keyword += 1;
        }
    }
    ImageAltCheck {
        total: images.len(),
        with_alt,
        with_keyword,
        score: percentage(with_alt, images.len()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    pub external_follow: usize,
    pub score: i32,
}

pub fn count_links(content: &str, site_hosts: &[String]) -> LinkCounts {
    let mut counts = LinkCounts {
        internal: 0,
        external: 0,
        external_follow: 0,
        score: 0,
    };
    for link in extract::links(content) {
        if extract::is_internal_link(&link.href, site_hosts) {
            counts.internal += 1;
        } else {
            counts.external += 1;
            if !link.is_nofollow() {
                counts.external_follow += 1;
            }
        }
    }
    counts.score = percentage(
        counts.internal.min(HP.internal_link_target),
        HP.internal_link_target,
    );
    counts
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub flesch: f64,
    pub score: i32,
}

pub fn count_syllables(word: &str) -> usize {
    let word = word
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase();
    let mut count = VOWEL_GROUP_RE.find_iter(&word).count();
    if count > 1 && word.ends_with('e') {
        count -= 1;
    }
    count.max(1)
}

pub fn readability(content: &str) -> Readability {
    let text = strip_tags(content);
    let words = extract::words(&text);
    if words.is_empty() {
        return Readability {
            words: 0,
            sentences: 0,
            syllables: 0,
            flesch: 0.0,
            score: 0,
        };
    }
    let sentences = extract::sentence_count(&text);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let word_total = words.len() as f64;
    let flesch = HP.flesch_base
        - HP.flesch_sentence_weight * (word_total / sentences as f64)
        - HP.flesch_syllable_weight * (syllables as f64 / word_total);
    Readability {
        words: words.len(),
        sentences,
        syllables,
        flesch,
        score: clamp_score(flesch.clamp(0.0, 100.0).round() as i32),
    }
}

// ---------------------------------------------------------------------------
// Length and placement
// ---------------------------------------------------------------------------

pub fn keyword_in_first_tenth(content: &str, keyword: &str) -> bool {
    let Some(kw) = normalized_keyword(keyword) else {
        return false;
    };
    let text = strip_tags(content);
    let words = extract::words(&text);
    if words.is_empty() {
        return false;
    }
    let window = words.len().div_ceil(HP.intro_fraction_divisor);
    words[..window].join(" ").to_lowercase().contains(&kw)
}

pub fn meets_minimum_length(content: &str, min_words: usize) -> bool {
    let words = extract::word_count(&strip_tags(content));
    words > 0 && words >= min_words
}

// ---------------------------------------------------------------------------
// FAQ / schema
// ---------------------------------------------------------------------------

pub fn has_faq_schema(content: &str) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    if extract::schema_types(content)
        .iter()
        .any(|t| t == HP.faq_schema_type)
    {
        return true;
    }
    let lowered = content.to_lowercase();
    HP.faq_indicators.iter().any(|w| lowered.contains(w))
}
