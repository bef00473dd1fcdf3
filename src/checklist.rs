use serde::Serialize;

use crate::{metric, ScoreBreakdown, HP};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub label: String,
    pub completed: bool,
    pub requirement: String,
}

#[derive(Clone, Copy)]
enum Source {
    Seo,
    Llm,
}

struct ChecklistEntry {
    label: &'static str,
    source: Source,
    metric: &'static str,
    requirement: &'static str,
}

static CHECKLIST: &[ChecklistEntry] = &[
    ChecklistEntry {
        label: "Keyword in the title",
        source: Source::Seo,
        metric: metric::KEYWORD_IN_H1,
        requirement: "Use the focus keyword in the H1 title.",
    },
    ChecklistEntry {
        label: "Keyword in the introduction",
        source: Source::Seo,
        metric: metric::KEYWORD_IN_FIRST_10,
        requirement: "Mention the keyword within the first 10% of the text.",
    },
    ChecklistEntry {
        label: "Keyword density",
        source: Source::Seo,
        metric: metric::KEYWORD_DENSITY,
        requirement: "Keep keyword density between 1% and 2%.",
    },
    ChecklistEntry {
        label: "Keyword in the URL",
        source: Source::Seo,
        metric: metric::KEYWORD_IN_SLUG,
        requirement: "Include the keyword in the slug, words joined by hyphens.",
    },
    ChecklistEntry {
        label: "Meta description",
        source: Source::Seo,
        metric: metric::META_DESCRIPTION,
        requirement: "Write 150-160 characters that include the keyword.",
    },
    ChecklistEntry {
        label: "Heading hierarchy",
        source: Source::Seo,
        metric: metric::HEADING_STRUCTURE,
        requirement: "Use exactly one H1, at least two H2 and at least one H3.",
    },
    ChecklistEntry {
        label: "Number in the title",
        source: Source::Seo,
        metric: metric::TITLE_HAS_NUMBER,
        requirement: "Titles with a number tend to get more clicks.",
    },
    ChecklistEntry {
        label: "Content length",
        source: Source::Seo,
        metric: metric::MINIMUM_LENGTH,
        requirement: "Write at least 300 words.",
    },
    ChecklistEntry {
        label: "Paragraph size",
        source: Source::Seo,
        metric: metric::PARAGRAPH_LENGTH,
        requirement: "Aim for paragraphs of 40-60 words.",
    },
    ChecklistEntry {
        label: "No oversized paragraphs",
        source: Source::Seo,
        metric: metric::SHORT_PARAGRAPHS,
        requirement: "Keep every paragraph at 80 words or fewer.",
    },
    ChecklistEntry {
        label: "Readability",
        source: Source::Seo,
        metric: metric::READABILITY,
        requirement: "Use shorter sentences and simpler words.",
    },
    ChecklistEntry {
        label: "Image alt text",
        source: Source::Seo,
        metric: metric::IMAGE_ALT_TEXT,
        requirement: "Give every image a descriptive alt attribute.",
    },
    ChecklistEntry {
        label: "Internal links",
        source: Source::Seo,
        metric: metric::LINKS,
        requirement: "Add at least 3 links to other pages of the site.",
    },
    ChecklistEntry {
        label: "FAQ section",
        source: Source::Seo,
        metric: metric::FAQ_SCHEMA,
        requirement: "Add an FAQ block or FAQPage structured data.",
    },
    ChecklistEntry {
        label: "Named entities",
        source: Source::Llm,
        metric: metric::SEMANTIC_ENTITIES,
        requirement: "Mention at least 5 specific people, places, brands or products.",
    },
    ChecklistEntry {
        label: "Direct answer up front",
        source: Source::Llm,
        metric: metric::DIRECT_ANSWER,
        requirement: "Open with a summary paragraph of at least 100 characters.",
    },
    ChecklistEntry {
        label: "Article or HowTo schema",
        source: Source::Llm,
        metric: metric::STRUCTURED_DATA,
        requirement: "Add Article or HowTo JSON-LD structured data.",
    },
];

pub const KEYWORD_MISSING_LABEL: &str = "Define a focus keyword";

pub fn build_checklist(
    keyword: &str,
    seo: &ScoreBreakdown,
    llm: &ScoreBreakdown,
) -> Vec<ChecklistItem> {
    if keyword.trim().is_empty() {
        return vec![ChecklistItem {
            label: KEYWORD_MISSING_LABEL.to_string(),
            completed: false,
            requirement: "Set the target keyword to unlock the content checklist.".to_string(),
        }];
    }

    CHECKLIST
        .iter()
        .map(|entry| {
            let breakdown = match entry.source {
                Source::Seo => seo,
                Source::Llm => llm,
            };
            ChecklistItem {
                label: entry.label.to_string(),
                completed: breakdown.score_of(entry.metric) >= HP.checklist_pass_score,
                requirement: entry.requirement.to_string(),
            }
        })
        .collect()
}
