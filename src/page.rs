//! HTML page and plain-text summary for a finished report.

use std::borrow::Cow;

use crate::Report;
use crate::chart::render_bar_chart;
use crate::sentiment::Sentiment;

/// Number of characters shown in the text preview.
pub const PREVIEW_CHARS: usize = 2000;

/// First `limit` characters of `text`, with `...` appended when anything was cut.
/// # Example
/// ```
/// use text_profile::preview;
/// assert_eq!(preview("short", 10), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Escape text for use in HTML/SVG content and attribute values.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `Sentiment Score: 0.800 → Positive`
pub fn sentiment_line(sentiment: &Sentiment) -> String {
    format!(
        "Sentiment Score: {:.3} \u{2192} {}",
        sentiment.polarity, sentiment.label
    )
}

/// Self-contained HTML page. Sections, in order: preview, statistics, grammar
/// statistics with bar chart, word cloud, sentiment.
pub fn render_page(report: &Report) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
        "<title>Text Processing ML App</title>\n<style>\n",
        "body{font-family:sans-serif;margin:2rem auto;max-width:960px;color:#222}\n",
        "table{border-collapse:collapse;margin:0.5rem 0 1rem}\n",
        "th,td{border:1px solid #ccc;padding:0.3rem 0.8rem;text-align:left}\n",
        "textarea{width:100%;height:200px;font-family:monospace}\n",
        "figure{margin:0}\n",
        "</style>\n</head>\n<body>\n",
        "<h1>Text Processing ML App</h1>\n",
    ));
    html.push_str(&format!(
        "<p class=\"source\">File: {}</p>\n",
        escape_xml(&report.source)
    ));

    html.push_str("<section id=\"preview\">\n<h2>Original Text Preview</h2>\n");
    // Parsers drop one newline right after `<textarea>`, so emit it ourselves.
    html.push_str(&format!(
        "<textarea readonly aria-label=\"Text Content\">\n{}</textarea>\n</section>\n",
        escape_xml(&report.preview)
    ));

    html.push_str("<section id=\"statistics\">\n<h2>Basic Statistics</h2>\n");
    html.push_str("<table>\n<tr><th>Metric</th><th>Value</th></tr>\n");
    html.push_str(&format!(
        "<tr><td>Word Count</td><td>{}</td></tr>\n<tr><td>Vocabulary Size</td><td>{}</td></tr>\n",
        report.stats.word_count, report.stats.vocabulary_size
    ));
    html.push_str("</table>\n</section>\n");

    html.push_str("<section id=\"grammar\">\n<h2>Grammar Statistics</h2>\n");
    html.push_str("<table>\n<tr><th>POS</th><th>Count</th></tr>\n");
    for (category, count) in report.pos.iter() {
        html.push_str(&format!("<tr><td>{category}</td><td>{count}</td></tr>\n"));
    }
    html.push_str("</table>\n<figure>");
    html.push_str(&render_bar_chart(&report.pos));
    html.push_str("</figure>\n</section>\n");

    html.push_str("<section id=\"word-cloud\">\n<h2>Word Cloud</h2>\n<figure>");
    html.push_str(&report.word_cloud.to_svg());
    html.push_str("</figure>\n</section>\n");

    html.push_str("<section id=\"sentiment\">\n<h2>Sentiment Analysis</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong></p>\n<p>Subjectivity: {:.3}</p>\n</section>\n",
        escape_xml(&sentiment_line(&report.sentiment)),
        report.sentiment.subjectivity
    ));

    html.push_str("</body>\n</html>\n");
    html
}

/// Plain-text summary printed after every run.
pub fn render_summary(report: &Report) -> String {
    let mut out = format!("Text profile: {}\n\n", report.source);
    if let Some(language) = &report.language {
        out.push_str(&format!("Detected language: {language}\n\n"));
    }
    out.push_str("Basic Statistics\n");
    out.push_str(&format!(
        "  Word Count:      {}\n  Vocabulary Size: {}\n\n",
        report.stats.word_count, report.stats.vocabulary_size
    ));
    out.push_str("Grammar Statistics\n");
    for (category, count) in report.pos.iter() {
        out.push_str(&format!("  {:<16} {count}\n", format!("{category}:")));
    }
    out.push('\n');

    let top: Vec<String> = report
        .frequencies
        .iter()
        .take(10)
        .map(|(word, count)| format!("{word} ({count})"))
        .collect();
    if top.is_empty() {
        out.push_str("Most Frequent Words: none\n\n");
    } else {
        out.push_str(&format!("Most Frequent Words: {}\n\n", top.join(", ")));
    }

    out.push_str(&sentiment_line(&report.sentiment));
    out.push_str(&format!(
        "\nSubjectivity: {:.3}\n",
        report.sentiment.subjectivity
    ));
    out
}
