//! Translation lookup against the mobile translate page.
//!
//! The endpoint serves plain HTML; the translation is the text of its
//! `div.result-container` element. This is the one place HTML parsing
//! happens, and only for that single labeled region.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::config::TranslateConfig;
use crate::error::{LexiError, Result};

/// Reply used when the page has no result region.
const NOT_FOUND: &str = "Translation not found";

/// Display-name to ISO-code table for the translate endpoint.
const LANGUAGES: &[(&str, &str)] = &[
    ("Auto Detect", "auto"),
    ("Armenian", "hy"),
    ("English", "en"),
    ("French", "fr"),
    ("Spanish", "es"),
    ("German", "de"),
    ("Russian", "ru"),
    ("Chinese", "zh"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Dutch", "nl"),
    ("Arabic", "ar"),
    ("Hindi", "hi"),
    ("Turkish", "tr"),
    ("Hebrew", "he"),
    ("Greek", "el"),
    ("Swedish", "sv"),
    ("Polish", "pl"),
    ("Ukrainian", "uk"),
    ("Czech", "cs"),
    ("Finnish", "fi"),
    ("Hungarian", "hu"),
    ("Romanian", "ro"),
    ("Thai", "th"),
    ("Vietnamese", "vi"),
    ("Indonesian", "id"),
];

/// Resolve a language display name to its ISO code.
///
/// Lookup is case-insensitive. Anything not in the table is passed
/// through unchanged, assumed to already be a code.
pub fn language_code(name: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(name.trim()))
        .map(|(_, code)| *code)
        .unwrap_or_else(|| name.trim())
}

/// Supported language display names, table order.
pub fn language_names() -> Vec<&'static str> {
    LANGUAGES.iter().map(|(display, _)| *display).collect()
}

/// Blocking translation client.
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslateConfig,
    client: reqwest::blocking::Client,
}

impl Translator {
    pub fn new(config: TranslateConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { config, client }
    }

    /// Translate `text` between two languages given by display name or code.
    pub fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("hl", language_code(to)),
                ("sl", language_code(from)),
                ("q", text),
            ])
            .send()
            .map_err(|e| LexiError::remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LexiError::remote("Translation service unavailable"));
        }

        let body = response
            .text()
            .map_err(|e| LexiError::remote(e.to_string()))?;

        extract_translation(&body)
    }
}

/// Pull the translated text out of the fetched page.
fn extract_translation(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.result-container")
        .map_err(|e| LexiError::remote(format!("bad result selector: {}", e)))?;

    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string()))
}
