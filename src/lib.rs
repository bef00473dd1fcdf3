use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod checklist;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod seo;

pub use checklist::{build_checklist, ChecklistItem};
pub use config::ScoringConfig;
pub use error::{OnPageError, Result};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    pub html: String,
    pub keyword: String,
    pub meta_description: String,
    pub slug: String,
}

impl ContentDocument {
    pub fn new(
        html: impl Into<String>,
        keyword: impl Into<String>,
        meta_description: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            keyword: keyword.into(),
            meta_description: meta_description.into(),
            slug: slug.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub metric: String,
    pub score: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total_score: i32,
    pub breakdown: Vec<MetricResult>,
}

impl ScoreBreakdown {
    pub fn from_results(breakdown: Vec<MetricResult>) -> Self {
        // Scale by the largest weight so huge weights cannot overflow the sums.
        let max_weight = breakdown.iter().map(|r| r.weight).fold(0.0f64, f64::max);
        let weight_sum: f64 = breakdown.iter().map(|r| r.weight / max_weight).sum();
        let total_score = if max_weight.is_finite() && weight_sum > 0.0 {
            let weighted: f64 = breakdown
                .iter()
                .map(|r| r.score as f64 * (r.weight / max_weight))
                .sum();
            clamp_score((weighted / weight_sum).round() as i32)
        } else {
            HP.score_min
        };
        Self {
            total_score,
            breakdown,
        }
    }

    pub fn get(&self, metric: &str) -> Option<&MetricResult> {
        self.breakdown.iter().find(|r| r.metric == metric)
    }

    pub fn score_of(&self, metric: &str) -> i32 {
        self.get(metric).map_or(HP.score_min, |r| r.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub seo: ScoreBreakdown,
    pub llm: ScoreBreakdown,
    pub checklist: Vec<ChecklistItem>,
}

// ---------------------------------------------------------------------------
// Metric names
// ---------------------------------------------------------------------------

pub mod metric {
    pub const KEYWORD_DENSITY: &str = "Keyword density";
    pub const KEYWORD_IN_H1: &str = "Keyword in H1";
    pub const HEADING_STRUCTURE: &str = "Heading structure";
    pub const META_DESCRIPTION: &str = "Meta description";
    pub const KEYWORD_IN_SLUG: &str = "Keyword in slug";
    pub const PARAGRAPH_LENGTH: &str = "Paragraph length";
    pub const IMAGE_ALT_TEXT: &str = "Image alt text";
    pub const LINKS: &str = "Links";
    pub const READABILITY: &str = "Readability";
    pub const KEYWORD_IN_FIRST_10: &str = "Keyword in first 10%";
    pub const MINIMUM_LENGTH: &str = "Minimum length";
    pub const FAQ_SCHEMA: &str = "FAQ/Schema presence";
    pub const TITLE_HAS_NUMBER: &str = "Title has number";
    pub const SHORT_PARAGRAPHS: &str = "Short paragraphs";

    pub const SEMANTIC_ENTITIES: &str = "Semantic entity coverage";
    pub const DIRECT_ANSWER: &str = "Direct answer (TL;DR)";
    pub const STRUCTURED_DATA: &str = "Structured data (other schemas)";

    pub const SEO: [&str; 14] = [
        KEYWORD_DENSITY,
        KEYWORD_IN_H1,
        HEADING_STRUCTURE,
        META_DESCRIPTION,
        KEYWORD_IN_SLUG,
        PARAGRAPH_LENGTH,
        IMAGE_ALT_TEXT,
        LINKS,
        READABILITY,
        KEYWORD_IN_FIRST_10,
        MINIMUM_LENGTH,
        FAQ_SCHEMA,
        TITLE_HAS_NUMBER,
        SHORT_PARAGRAPHS,
    ];

    pub const LLM: [&str; 3] = [SEMANTIC_ENTITIES, DIRECT_ANSWER, STRUCTURED_DATA];
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub(crate) density_min_pct: f64,
    pub(crate) density_max_pct: f64,
    pub(crate) density_decay_per_pct: f64,
    pub(crate) heading_unique_h1_points: i32,
    pub(crate) heading_hierarchy_points: i32,
    pub(crate) heading_min_h2: usize,
    pub(crate) heading_min_h3: usize,
    pub(crate) meta_present_points: i32,
    pub(crate) meta_keyword_points: i32,
    pub(crate) meta_length_points: i32,
    pub(crate) meta_min_chars: usize,
    pub(crate) meta_max_chars: usize,
    pub(crate) paragraph_good_min_words: usize,
    pub(crate) paragraph_good_max_words: usize,
    pub(crate) short_paragraph_max_words: usize,
    pub(crate) internal_link_target: usize,
    pub(crate) flesch_base: f64,
    pub(crate) flesch_sentence_weight: f64,
    pub(crate) flesch_syllable_weight: f64,
    pub(crate) intro_fraction_divisor: usize,
    pub(crate) minimum_word_count: usize,
    pub(crate) faq_schema_type: &'static str,
    pub(crate) faq_indicators: &'static [&'static str],
    pub(crate) entity_target: usize,
    pub(crate) direct_answer_min_chars: usize,
    pub(crate) default_schema_types: &'static [&'static str],
    pub(crate) checklist_pass_score: i32,
    pub(crate) max_metric_weight: f64,
    pub(crate) score_min: i32,
    pub(crate) score_max: i32,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    density_min_pct: 1.0,
    density_max_pct: 2.0,
    density_decay_per_pct: 25.0,
    heading_unique_h1_points: 50,
    heading_hierarchy_points: 50,
    heading_min_h2: 2,
    heading_min_h3: 1,
    meta_present_points: 33,
    meta_keyword_points: 33,
    meta_length_points: 34,
    meta_min_chars: 150,
    meta_max_chars: 160,
    paragraph_good_min_words: 40,
    paragraph_good_max_words: 60,
    short_paragraph_max_words: 80,
    internal_link_target: 3,
    flesch_base: 206.835,
    flesch_sentence_weight: 1.015,
    flesch_syllable_weight: 84.6,
    intro_fraction_divisor: 10,
    minimum_word_count: 300,
    faq_schema_type: "FAQPage",
    faq_indicators: &["pergunta", "resposta", "faq", "questão", "dúvida"],
    entity_target: 5,
    direct_answer_min_chars: 100,
    default_schema_types: &["HowTo", "Article"],
    checklist_pass_score: 80,
    max_metric_weight: 1e6,
    score_min: 0,
    score_max: 100,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn clamp_score(score: i32) -> i32 {
    score.clamp(HP.score_min, HP.score_max)
}

pub fn bool_score(passed: bool) -> i32 {
    if passed {
        HP.score_max
    } else {
        HP.score_min
    }
}

pub(crate) fn percentage(part: usize, whole: usize) -> i32 {
    if whole == 0 {
        return HP.score_min;
    }
    clamp_score((part as f64 / whole as f64 * 100.0).round() as i32)
}

fn collect_breakdown(
    entries: impl IntoIterator<Item = (&'static str, i32)>,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let breakdown = entries
        .into_iter()
        .map(|(name, score)| {
            let result = MetricResult {
                metric: name.to_string(),
                score: clamp_score(score),
                weight: config.weight_for(name),
            };
            debug!(
                metric = name,
                score = result.score,
                weight = result.weight,
                "metric evaluated"
            );
            result
        })
        .collect();
    ScoreBreakdown::from_results(breakdown)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn calculate_seo_score(doc: &ContentDocument, config: &ScoringConfig) -> ScoreBreakdown {
    let _span = tracing::debug_span!("seo_score", keyword = %doc.keyword).entered();
    let html = doc.html.as_str();
    let keyword = doc.keyword.as_str();

    let result = collect_breakdown(
        [
            (
                metric::KEYWORD_DENSITY,
                seo::keyword_density(html, keyword).score,
            ),
            (
                metric::KEYWORD_IN_H1,
                bool_score(seo::has_keyword_in_h1(html, keyword)),
            ),
            (
                metric::HEADING_STRUCTURE,
                seo::evaluate_heading_structure(html).score,
            ),
            (
                metric::META_DESCRIPTION,
                seo::evaluate_meta_description(&doc.meta_description, keyword).score,
            ),
            (
                metric::KEYWORD_IN_SLUG,
                bool_score(seo::keyword_in_slug(&doc.slug, keyword)),
            ),
            (
                metric::PARAGRAPH_LENGTH,
                seo::evaluate_paragraphs(html).score,
            ),
            (
                metric::IMAGE_ALT_TEXT,
                seo::check_image_alts(html, keyword).score,
            ),
            (
                metric::LINKS,
                seo::count_links(html, &config.site_hosts).score,
            ),
            (metric::READABILITY, seo::readability(html).score),
            (
                metric::KEYWORD_IN_FIRST_10,
                bool_score(seo::keyword_in_first_tenth(html, keyword)),
            ),
            (
                metric::MINIMUM_LENGTH,
                bool_score(seo::meets_minimum_length(html, HP.minimum_word_count)),
            ),
            (metric::FAQ_SCHEMA, bool_score(seo::has_faq_schema(html))),
            (
                metric::TITLE_HAS_NUMBER,
                bool_score(seo::title_has_number(html)),
            ),
            (
                metric::SHORT_PARAGRAPHS,
                bool_score(seo::check_short_paragraphs(
                    html,
                    HP.short_paragraph_max_words,
                )),
            ),
        ],
        config,
    );
    debug!(total = result.total_score, "seo score computed");
    result
}

pub fn calculate_llm_score(doc: &ContentDocument, config: &ScoringConfig) -> ScoreBreakdown {
    let _span = tracing::debug_span!("llm_score", keyword = %doc.keyword).entered();
    let html = doc.html.as_str();

    let result = collect_breakdown(
        [
            (
                metric::SEMANTIC_ENTITIES,
                llm::semantic_entities(html).score,
            ),
            (
                metric::DIRECT_ANSWER,
                bool_score(llm::has_direct_answer(html)),
            ),
            (
                metric::STRUCTURED_DATA,
                bool_score(llm::has_schema_type(html, &config.schema_types)),
            ),
        ],
        config,
    );
    debug!(total = result.total_score, "llm score computed");
    result
}

pub fn analyze(doc: &ContentDocument, config: &ScoringConfig) -> Analysis {
    let seo = calculate_seo_score(doc, config);
    let llm = calculate_llm_score(doc, config);
    let checklist = build_checklist(&doc.keyword, &seo, &llm);
    Analysis {
        seo,
        llm,
        checklist,
    }
}
