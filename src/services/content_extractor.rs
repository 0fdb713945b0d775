use scraper::{ElementRef, Html, Selector};

use crate::errors::{AppError, AppResult};

pub const UNKNOWN_TITLE: &str = "Unknown Title";

const TITLE_SELECTOR: &str = "#firstHeading";
const CONTENT_SELECTOR: &str = "#mw-content-text";
const PARSER_OUTPUT_SELECTOR: &str = ".mw-parser-output";

/// Boilerplate removed from the article body before any text is read.
const EXCLUDED_SELECTOR: &str = "table, dl, ul.vector-p-content-list, sup, style, script, nav, \
     .mw-editsection, .reference, .box-multiple-img, .infobox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub content: String,
}

/// Turns a Wikipedia article page into its title and plain prose.
#[derive(Clone, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, html: &[u8]) -> AppResult<ExtractedArticle> {
        let mut document = Html::parse_document(&String::from_utf8_lossy(html));

        let title = extract_title(&document)?;

        let content_selector = selector(CONTENT_SELECTOR)?;
        let parser_output_selector = selector(PARSER_OUTPUT_SELECTOR)?;
        let excluded_selector = selector(EXCLUDED_SELECTOR)?;

        let (region_id, excluded) = {
            let content_root = document
                .select(&content_selector)
                .next()
                .ok_or_else(|| AppError::Extraction("no content region".to_string()))?;

            let region = content_root
                .select(&parser_output_selector)
                .next()
                .unwrap_or(content_root);

            let excluded: Vec<_> = region
                .select(&excluded_selector)
                .map(|element| element.id())
                .collect();

            (region.id(), excluded)
        };

        for id in excluded {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        let region = document
            .tree
            .get(region_id)
            .and_then(ElementRef::wrap)
            .ok_or_else(|| AppError::Extraction("no content region".to_string()))?;

        // Direct children only; paragraphs inside retained wrappers are skipped.
        let paragraphs: Vec<String> = region
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "p")
            .map(|paragraph| paragraph.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        let content = paragraphs.join("\n\n");
        if content.is_empty() {
            return Err(AppError::Extraction("empty after cleaning".to_string()));
        }

        log::debug!(
            "Extracted {} paragraphs ({} chars) for '{}'",
            paragraphs.len(),
            content.len(),
            title
        );

        Ok(ExtractedArticle { title, content })
    }
}

fn extract_title(document: &Html) -> AppResult<String> {
    let title_selector = selector(TITLE_SELECTOR)?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        // A heading with no text counts as missing.
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    Ok(title)
}

fn selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css)
        .map_err(|e| AppError::Extraction(format!("invalid selector '{}': {:?}", css, e)))
}
