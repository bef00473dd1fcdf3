mod common;

use common::{sample_article, sample_document};
use onpage_score::checklist::KEYWORD_MISSING_LABEL;
use onpage_score::{
    analyze, calculate_llm_score, calculate_seo_score, metric, ContentDocument, MetricResult,
    OnPageError, ScoreBreakdown, ScoringConfig,
};

#[test]
fn well_optimized_article_scores_high() {
    let result = analyze(&sample_document(), &ScoringConfig::default());

    for name in [
        metric::KEYWORD_IN_H1,
        metric::HEADING_STRUCTURE,
        metric::META_DESCRIPTION,
        metric::KEYWORD_IN_SLUG,
        metric::PARAGRAPH_LENGTH,
        metric::IMAGE_ALT_TEXT,
        metric::LINKS,
        metric::KEYWORD_IN_FIRST_10,
        metric::MINIMUM_LENGTH,
        metric::FAQ_SCHEMA,
        metric::TITLE_HAS_NUMBER,
        metric::SHORT_PARAGRAPHS,
    ] {
        assert_eq!(result.seo.score_of(name), 100, "{name} should pass");
    }
    assert!(result.seo.score_of(metric::READABILITY) >= 80);
    assert!(
        result.seo.total_score >= 80,
        "Optimized article should score >= 80, got {}",
        result.seo.total_score
    );
    assert_eq!(result.llm.score_of(metric::DIRECT_ANSWER), 100);
    assert_eq!(result.llm.score_of(metric::STRUCTURED_DATA), 0);
}

#[test]
fn empty_document_scores_zero_everywhere() {
    let result = analyze(&ContentDocument::default(), &ScoringConfig::default());

    assert_eq!(result.seo.total_score, 0);
    assert_eq!(result.llm.total_score, 0);
    for entry in result.seo.breakdown.iter().chain(&result.llm.breakdown) {
        assert_eq!(entry.score, 0, "{} should be 0 for empty input", entry.metric);
    }
}

#[test]
fn breakdowns_list_metrics_in_order_with_unit_weight() {
    let doc = sample_document();
    let config = ScoringConfig::default();
    let seo = calculate_seo_score(&doc, &config);
    let llm = calculate_llm_score(&doc, &config);

    let seo_names: Vec<&str> = seo.breakdown.iter().map(|r| r.metric.as_str()).collect();
    let llm_names: Vec<&str> = llm.breakdown.iter().map(|r| r.metric.as_str()).collect();
    assert_eq!(seo_names, metric::SEO);
    assert_eq!(llm_names, metric::LLM);
    assert!(seo.breakdown.iter().chain(&llm.breakdown).all(|r| r.weight == 1.0));
}

#[test]
fn total_is_rounded_mean_of_sub_scores() {
    let doc = ContentDocument::new("<h1>rust</h1>", "rust", "", "");
    let seo = calculate_seo_score(&doc, &ScoringConfig::default());

    let sum: i32 = seo.breakdown.iter().map(|r| r.score).sum();
    let expected = (sum as f64 / seo.breakdown.len() as f64).round() as i32;
    assert_eq!(seo.total_score, expected);
    assert_eq!(seo.total_score, 32);
}

#[test]
fn weights_shift_the_total_without_touching_scores() {
    let doc = ContentDocument::new("<h1>rust</h1>", "rust", "", "");
    let config = ScoringConfig::default()
        .with_weight(metric::KEYWORD_IN_H1, 13.0)
        .unwrap();
    let seo = calculate_seo_score(&doc, &config);

    let h1 = seo.get(metric::KEYWORD_IN_H1).unwrap();
    assert_eq!(h1.score, 100);
    assert_eq!(h1.weight, 13.0);
    assert_eq!(seo.total_score, 63);
}

#[test]
fn equal_large_weights_match_the_plain_mean() {
    let doc = ContentDocument::new("<h1>rust</h1>", "rust", "", "");
    let mut config = ScoringConfig::default();
    for name in metric::SEO {
        config = config.with_weight(name, 1e6).unwrap();
    }

    let weighted = calculate_seo_score(&doc, &config);
    let uniform = calculate_seo_score(&doc, &ScoringConfig::default());
    assert_eq!(weighted.total_score, uniform.total_score);
    assert_eq!(weighted.total_score, 32);
}

#[test]
fn breakdown_total_survives_extreme_weights() {
    let results = [(100, 1e308), (0, 1e308), (50, 1e308)]
        .into_iter()
        .enumerate()
        .map(|(i, (score, weight))| MetricResult {
            metric: format!("m{i}"),
            score,
            weight,
        })
        .collect();
    assert_eq!(ScoreBreakdown::from_results(results).total_score, 50);
    assert_eq!(ScoreBreakdown::from_results(Vec::new()).total_score, 0);
}

#[test]
fn same_input_gives_same_analysis() {
    let doc = sample_document();
    let config = ScoringConfig::default();
    assert_eq!(analyze(&doc, &config), analyze(&doc, &config));
}

#[test]
fn json_output_is_valid() {
    let result = analyze(&sample_document(), &ScoringConfig::default());
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(parsed["seo"]["totalScore"].is_i64());
    assert_eq!(parsed["seo"]["breakdown"].as_array().unwrap().len(), 14);
    assert_eq!(parsed["seo"]["breakdown"][0]["metric"], "Keyword density");
    assert!(parsed["seo"]["breakdown"][0].get("weight").is_some());
    assert_eq!(parsed["llm"]["breakdown"].as_array().unwrap().len(), 3);
    assert!(parsed["checklist"][0]["completed"].is_boolean());
    assert!(parsed["checklist"][0]["requirement"].is_string());
}

#[test]
fn checklist_without_keyword_asks_for_one() {
    let doc = ContentDocument::new(sample_article(), "  ", "", "");
    let result = analyze(&doc, &ScoringConfig::default());

    assert_eq!(result.checklist.len(), 1);
    assert_eq!(result.checklist[0].label, KEYWORD_MISSING_LABEL);
    assert!(!result.checklist[0].completed);
}

#[test]
fn checklist_marks_items_at_threshold() {
    let result = analyze(&sample_document(), &ScoringConfig::default());

    assert_eq!(result.checklist.len(), 17);
    let item = |label: &str| {
        result
            .checklist
            .iter()
            .find(|i| i.label == label)
            .unwrap_or_else(|| panic!("missing checklist item {label}"))
    };
    assert!(item("Keyword in the title").completed);
    assert!(item("Internal links").completed);
    assert!(item("Direct answer up front").completed);
    assert!(!item("Article or HowTo schema").completed);
}

#[test]
fn site_hosts_make_absolute_links_internal() {
    let html = r#"<a href="https://blog.example.com/a">a</a>
                  <a href="https://blog.example.com/b">b</a>
                  <a href="https://blog.example.com/c">c</a>"#;
    let doc = ContentDocument::new(html, "rust", "", "");

    let without = calculate_seo_score(&doc, &ScoringConfig::default());
    let with = calculate_seo_score(
        &doc,
        &ScoringConfig::default().with_site_host("blog.example.com"),
    );
    assert_eq!(without.score_of(metric::LINKS), 0);
    assert_eq!(with.score_of(metric::LINKS), 100);
}

#[test]
fn schema_allow_list_is_configurable() {
    let html = r#"<script type="application/ld+json">{"@type":"Recipe"}</script>"#;
    let doc = ContentDocument::new(html, "", "", "");
    let config = ScoringConfig::from_json_str(r#"{"schema_types": ["Recipe"]}"#).unwrap();

    assert_eq!(
        calculate_llm_score(&doc, &ScoringConfig::default()).score_of(metric::STRUCTURED_DATA),
        0
    );
    assert_eq!(
        calculate_llm_score(&doc, &config).score_of(metric::STRUCTURED_DATA),
        100
    );
}

#[test]
fn config_defaults_and_validation() {
    let config = ScoringConfig::from_json_str("{}").unwrap();
    assert_eq!(config.schema_types, vec!["HowTo", "Article"]);
    assert!(config.site_hosts.is_empty());
    assert_eq!(config.weight_for(metric::LINKS), 1.0);

    let err = ScoringConfig::from_json_str(r#"{"weights": {"Links": -1.0}}"#).unwrap_err();
    assert!(matches!(err, OnPageError::Config(_)));
    assert!(ScoringConfig::default().with_weight("Links", 0.0).is_err());
    assert!(ScoringConfig::default().with_weight("Links", 1e308).is_err());

    let typo = ScoringConfig::from_json_str(r#"{"weights": {"Link": 5.0}}"#).unwrap_err();
    assert!(matches!(typo, OnPageError::Config(_)));
    assert!(ScoringConfig::default().with_weight("Link", 5.0).is_err());
    assert!(ScoringConfig::default()
        .with_weight(metric::DIRECT_ANSWER, 2.0)
        .is_ok());
    assert!(matches!(
        ScoringConfig::from_json_str("not json"),
        Err(OnPageError::Json(_))
    ));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.json");
    std::fs::write(
        &path,
        r#"{"site_hosts": ["example.com"], "weights": {"Readability": 2.5}}"#,
    )
    .unwrap();

    let config = ScoringConfig::from_json_file(&path).unwrap();
    assert_eq!(config.site_hosts, vec!["example.com"]);
    assert_eq!(config.weight_for(metric::READABILITY), 2.5);

    let missing = ScoringConfig::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(missing, Err(OnPageError::Io(_))));
}

#[test]
fn document_fields_default_when_missing() {
    let doc: ContentDocument =
        serde_json::from_str(r#"{"html": "<h1>Hi</h1>", "metaDescription": "m"}"#).unwrap();
    assert_eq!(doc.html, "<h1>Hi</h1>");
    assert_eq!(doc.meta_description, "m");
    assert!(doc.keyword.is_empty());
    assert!(doc.slug.is_empty());
}
