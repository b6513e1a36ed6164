#![forbid(unsafe_code)]
//! # text_profile
//!
//! Descriptive statistics for a single UTF-8 text document:
//! filtered word count and vocabulary size, part-of-speech distribution with a bar
//! chart, a frequency-weighted word cloud, and a sentiment polarity score. Results
//! are rendered as a self-contained HTML page or exported as JSON, CSV/TSV tables
//! or a plain-text summary.
//!
//! Language resources are loaded once with [`Resources::load`]; every document
//! then runs through [`analyze_path`] (file on disk) or [`analyze_text_with`]
//! (text already in memory).
//!
//! ## Example
//! ```
//! use text_profile::{AnalysisOptions, Resources, SentimentLabel, analyze_text_with};
//!
//! let resources = Resources::load(None).unwrap();
//! let report = analyze_text_with(
//!     "The cat sat on the mat. The cat was happy.",
//!     &resources,
//!     &AnalysisOptions::default(),
//! );
//! assert_eq!(report.stats.word_count, 5);
//! assert_eq!(report.stats.vocabulary_size, 4);
//! assert_eq!(report.sentiment.label, SentimentLabel::Positive);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, warn};
use serde::Serialize;
use whatlang::Lang;

pub mod chart;
pub mod cloud;
pub mod error;
pub mod export;
pub mod normalize;
pub mod page;
pub mod resources;
pub mod sentiment;
pub mod stats;
pub mod stopwords;
pub mod tagger;

pub use chart::render_bar_chart;
pub use cloud::{CloudOptions, PlacedWord, WordCloud};
pub use error::{AnalysisError, Result};
pub use export::{ExportFormat, csv_safe_cell, export_report};
pub use normalize::{normalize, word_tokens};
pub use page::{PREVIEW_CHARS, preview, render_page, render_summary, sentiment_line};
pub use resources::Resources;
pub use sentiment::{Sentiment, SentimentLabel, SentimentScorer};
pub use stats::{TextStats, count_words, sort_map_to_vec};
pub use stopwords::StopwordFilter;
pub use tagger::{PosCategory, PosTagger, PosTally};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Per-run settings, usually filled from the command line.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub export_format: ExportFormat,
    pub cloud: CloudOptions,
    /// Where exports are written. Defaults to the current directory.
    pub out_dir: Option<PathBuf>,
}

/// Everything computed for one document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// File name of the document, or `document` for in-memory text.
    pub source: String,
    pub preview: String,
    /// ISO 639-3 code, when detection was reliable.
    pub language: Option<String>,
    pub stats: TextStats,
    pub pos: PosTally,
    /// Filtered token frequencies, most frequent first.
    pub frequencies: Vec<(String, u32)>,
    pub sentiment: Sentiment,
    pub word_cloud: WordCloud,
}

/// Result of [`analyze_path`]: the report, its text summary and the exported files.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: Report,
    pub result: String,
    pub exported: Vec<PathBuf>,
}

/// Decode uploaded bytes as UTF-8, dropping a leading byte-order mark.
pub fn decode_upload(mut bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(String::from_utf8(bytes)?)
}

/// Detect the document language. Returns `None` when detection is not reliable.
pub fn detect_language(text: &str) -> Option<Lang> {
    whatlang::detect(text)
        .filter(|info| info.is_reliable())
        .map(|info| info.lang())
}

/// Run the full pipeline over text already in memory. Never fails: empty text
/// yields zero counts and placeholder visuals.
pub fn analyze_text_with(text: &str, resources: &Resources, options: &AnalysisOptions) -> Report {
    let instant = Instant::now();

    let language = detect_language(text);
    if let Some(lang) = language.filter(|lang| *lang != Lang::Eng) {
        warn!(
            "Document looks like {} ({}); stop words, tagger and sentiment lexicon are English-only",
            lang.eng_name(),
            lang.code()
        );
    }

    let tokens = normalize(text, &resources.stopwords);
    let stats = TextStats::from_tokens(&tokens);
    let frequencies = sort_map_to_vec(count_words(&tokens));
    debug!(
        "{} tokens, {} distinct",
        stats.word_count, stats.vocabulary_size
    );

    let tagged = resources.tagger.tag(&tokens);
    let pos = PosTally::from_tagged(&tagged);

    let word_cloud = WordCloud::layout(&frequencies, options.cloud);
    if word_cloud.skipped > 0 {
        warn!(
            "{} words did not fit on the word-cloud canvas",
            word_cloud.skipped
        );
    }

    let sentiment = resources.sentiment.score(text);
    debug!("analysis finished in {:?}", instant.elapsed());

    Report {
        source: "document".to_string(),
        preview: preview(text, PREVIEW_CHARS),
        language: language.map(|lang| lang.code().to_string()),
        stats,
        pos,
        frequencies,
        sentiment,
        word_cloud,
    }
}

/// Analyze one `.txt` file and export the report. This is the per-upload handler:
/// read, decode, run the pipeline, write the export.
pub fn analyze_path(path: &Path, resources: &Resources, options: &AnalysisOptions) -> Result<AnalysisOutcome> {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(AnalysisError::UnsupportedType(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_upload(bytes)?;

    let mut report = analyze_text_with(&text, resources, options);
    if let Some(name) = path.file_name() {
        report.source = name.to_string_lossy().into_owned();
    }

    let out_dir = options
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let exported = export_report(&report, options.export_format, &out_dir)?;
    let result = render_summary(&report);

    Ok(AnalysisOutcome {
        report,
        result,
        exported,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_is_stripped() {
        let text = decode_upload(b"\xEF\xBB\xBFhello".to_vec()).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = decode_upload(vec![0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn english_is_detected() {
        let text = "This is clearly an English paragraph. It talks about the weather, the garden \
                    and the people who live in the small house at the end of the street, \
                    so the detector should have no trouble with it at all.";
        assert_eq!(detect_language(text), Some(Lang::Eng));
    }

    #[test]
    fn empty_text_runs_every_stage() {
        let resources = Resources::load(None).unwrap();
        let report = analyze_text_with("", &resources, &AnalysisOptions::default());
        assert_eq!(report.stats, TextStats::default());
        assert_eq!(report.pos, PosTally::default());
        assert!(report.frequencies.is_empty());
        assert!(report.word_cloud.is_empty());
        assert_eq!(report.sentiment.label, SentimentLabel::Neutral);
        assert_eq!(report.preview, "");
        assert!(render_page(&report).contains("No words to display"));
    }

    #[test]
    fn example_report() {
        let resources = Resources::load(None).unwrap();
        let report = analyze_text_with(
            "The cat sat on the mat. The cat was happy.",
            &resources,
            &AnalysisOptions::default(),
        );
        assert_eq!(report.stats.word_count, 5);
        assert_eq!(report.stats.vocabulary_size, 4);
        assert_eq!(report.frequencies[0], ("cat".to_string(), 2));
        assert_eq!(report.pos.nouns, 3);
        assert_eq!(report.word_cloud.words.len(), 4);
        assert!((report.sentiment.polarity - 0.8).abs() < 1e-9);
    }
}
