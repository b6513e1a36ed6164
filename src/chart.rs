//! Categorical bar chart of the part-of-speech tally, rendered as SVG.

use crate::tagger::{PosCategory, PosTally};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 48.0;
const TICKS: usize = 5;

fn color(category: PosCategory) -> &'static str {
    match category {
        PosCategory::Nouns => "#4c78a8",
        PosCategory::Adjectives => "#f58518",
        PosCategory::Verbs => "#e45756",
        PosCategory::Adverbs => "#72b7b2",
    }
}

/// Upper bound of the value axis: a multiple of the tick count, at least `TICKS`.
fn axis_max(max_count: usize) -> usize {
    max_count.div_ceil(TICKS).max(1) * TICKS
}

/// One bar per category in display order, count on the value axis.
/// An all-zero tally still draws the axes, with a note in the plot area.
pub fn render_bar_chart(tally: &PosTally) -> String {
    let plot_w = WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let max_count = tally.iter().map(|(_, count)| count).max().unwrap_or(0);
    let top = axis_max(max_count);
    let step = top / TICKS;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Part-of-speech counts" font-family="sans-serif" font-size="12">"#
    );

    for i in 0..=TICKS {
        let value = step * i;
        let y = baseline - plot_h * value as f64 / top as f64;
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/><text x="{:.1}" y="{:.1}" text-anchor="end">{value}</text>"##,
            MARGIN_LEFT + plot_w,
            MARGIN_LEFT - 6.0,
            y + 4.0
        ));
    }
    svg.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline:.1}" stroke="black"/><line x1="{MARGIN_LEFT}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    ));
    svg.push_str(&format!(
        r#"<text transform="translate(14 {:.1}) rotate(-90)" text-anchor="middle">Count</text>"#,
        MARGIN_TOP + plot_h / 2.0
    ));

    let slot = plot_w / PosCategory::ALL.len() as f64;
    let bar_w = slot * 0.6;
    for (index, (category, count)) in tally.iter().enumerate() {
        let bar_h = plot_h * count as f64 / top as f64;
        let x = MARGIN_LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
        let center = x + bar_w / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{}"><title>{category}: {count}</title></rect>"#,
            baseline - bar_h,
            color(category)
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle">{count}</text>"#,
            baseline - bar_h - 4.0
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle">{category}</text>"#,
            baseline + 18.0
        ));
    }
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">POS</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT as f64 - 8.0
    ));

    if tally.total() == 0 {
        svg.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" fill="#888888">No tagged words</text>"##,
            MARGIN_LEFT + plot_w / 2.0,
            MARGIN_TOP + plot_h / 2.0
        ));
    }
    svg.push_str("</svg>");
    svg
}
