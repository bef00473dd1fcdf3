#![allow(dead_code)]

use onpage_score::ContentDocument;

const FILLER: [&str; 8] = [
    "clear", "words", "help", "readers", "find", "what", "they", "need.",
];

/// `n` lowercase words with a sentence break every eighth word.
pub fn filler(n: usize) -> String {
    (0..n)
        .map(|i| FILLER[i % FILLER.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// `n` copies of a neutral word.
pub fn repeat_word(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}

pub fn paragraph(words: usize) -> String {
    format!("<p>{}</p>", filler(words))
}

/// A 360-word article that passes every structural SEO check for "rust".
pub fn sample_article() -> String {
    [
        "<h1>7 Rust Tips for Faster Builds</h1>".to_string(),
        format!("<p>Rust {}.</p>", filler(49)),
        "<h2>Why It Matters</h2>".to_string(),
        paragraph(50),
        paragraph(50),
        "<h2>How To Start</h2>".to_string(),
        "<h3>First Steps</h3>".to_string(),
        paragraph(50),
        paragraph(50),
        paragraph(50),
        r#"<img src="a.png" alt="rust logo">"#.to_string(),
        "<img src='b.png' alt='build graph'>".to_string(),
        format!(
            r##"<p>See <a href="/guide">guide</a> <a href="/docs">docs</a> <a href="#faq">faq</a> <a href="https://crates.io" rel="nofollow">crates</a> {}</p>"##,
            filler(40)
        ),
        r#"<script type="application/ld+json">{"@type":"FAQPage"}</script>"#.to_string(),
    ]
    .join("\n")
}

pub fn sample_document() -> ContentDocument {
    ContentDocument::new(
        sample_article(),
        "rust",
        format!("{:<155}", "Seven Rust tips for faster builds."),
        "7-rust-tips",
    )
}
