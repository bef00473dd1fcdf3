use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").unwrap());

static HEADING_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h([1-5])\b[^>]*>").unwrap());

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1>").unwrap());

static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<a\b[^>]*>").unwrap());

static ALT_ATTR_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("alt"));

static HREF_ATTR_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("href"));

static REL_ATTR_RE: Lazy<Regex> = Lazy::new(|| attribute_regex("rel"));

static JSON_LD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<script\b[^>]*\btype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .unwrap()
});

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

fn attribute_regex(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)\s{name}\s*=\s*(?:"([^"]*)"|'([^']*)')"#
    ))
    .unwrap()
}

fn attribute(tag: &str, re: &Regex) -> Option<String> {
    re.captures(tag).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Replaces every tag with a single space. Whitespace is not collapsed.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn sentence_count(text: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1)
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

pub fn paragraphs(html: &str) -> Vec<String> {
    PARAGRAPH_RE
        .captures_iter(html)
        .map(|caps| strip_tags(&caps[1]))
        .collect()
}

pub fn heading_levels(html: &str) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for caps in HEADING_OPEN_RE.captures_iter(html) {
        if let Ok(level) = caps[1].parse::<usize>() {
            counts[level - 1] += 1;
        }
    }
    counts
}

pub fn first_h1_text(html: &str) -> Option<String> {
    H1_RE.captures(html).map(|caps| strip_tags(&caps[1]))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    pub alt: Option<String>,
}

pub fn images(html: &str) -> Vec<ImageTag> {
    IMG_RE
        .find_iter(html)
        .map(|m| ImageTag {
            alt: attribute(m.as_str(), &ALT_ATTR_RE),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub href: String,
    pub rel: Option<String>,
}

impl LinkTag {
    pub fn is_nofollow(&self) -> bool {
        self.rel
            .as_deref()
            .is_some_and(|rel| rel.to_lowercase().contains("nofollow"))
    }
}

pub fn links(html: &str) -> Vec<LinkTag> {
    ANCHOR_RE
        .find_iter(html)
        .filter_map(|m| {
            let tag = m.as_str();
            attribute(tag, &HREF_ATTR_RE).map(|href| LinkTag {
                href,
                rel: attribute(tag, &REL_ATTR_RE),
            })
        })
        .collect()
}

pub fn is_internal_link(href: &str, site_hosts: &[String]) -> bool {
    let href = href.trim();
    if href.starts_with('/') || href.starts_with('#') {
        return true;
    }
    let lowered = href.to_lowercase();
    site_hosts
        .iter()
        .map(|h| h.trim().to_lowercase())
        .any(|h| !h.is_empty() && lowered.contains(&h))
}

// ---------------------------------------------------------------------------
// Structured data
// ---------------------------------------------------------------------------

pub fn json_ld_blocks(html: &str) -> Vec<Value> {
    JSON_LD_RE
        .captures_iter(html)
        .filter_map(|caps| match serde_json::from_str::<Value>(caps[1].trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "ignoring malformed JSON-LD block");
                None
            }
        })
        .collect()
}

pub fn schema_types(html: &str) -> Vec<String> {
    let mut types = Vec::new();
    for block in json_ld_blocks(html) {
        collect_types(&block, &mut types);
    }
    types
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_types(item, out);
            }
        }
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(t)) => out.push(t.clone()),
                Some(Value::Array(ts)) => {
                    out.extend(ts.iter().filter_map(|t| t.as_str().map(str::to_string)))
                }
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_types(graph, out);
            }
        }
        _ => {}
    }
}
