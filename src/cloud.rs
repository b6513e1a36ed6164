//! Word-cloud layout and SVG rendering.
//!
//! Words are placed from most to least frequent along an Archimedean spiral
//! starting at the canvas centre. Font size is proportional to frequency and never
//! exceeds the size of the previously placed word, so a more frequent word is never
//! drawn smaller than a less frequent one. When the spiral finds no room, a row scan
//! over a fixed grid covers the rest of the canvas. A word that still does not fit
//! is shrunk until it does, and skipped only when it has no room at the minimum size.

use log::debug;
use serde::Serialize;

use crate::page::escape_xml;

// Average glyph advance and line height relative to the font size.
const CHAR_WIDTH: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.0;
const BASELINE: f64 = 0.8;
const PADDING: f64 = 2.0;
const SHRINK: f64 = 0.85;
// Distance along the spiral between tested points, in pixels.
const SPIRAL_STEP_PX: f64 = 4.0;
const SPIRAL_MAX_ANGLE_STEP: f64 = 0.5;
const SPIRAL_SPACING: f64 = 2.0;
const GRID_STEP: f64 = 4.0;

const PALETTE: &[&str] = &[
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#a0da39", "#3b528b",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub max_font_size: f64,
    pub min_font_size: f64,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            max_font_size: 100.0,
            min_font_size: 8.0,
        }
    }
}

/// A word with its bounding box (top-left corner, in canvas pixels).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: String,
    pub count: u32,
    pub font_size: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl PlacedWord {
    fn overlaps(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x < self.x + self.width + PADDING
            && self.x < x + width + PADDING
            && y < self.y + self.height + PADDING
            && self.y < y + height + PADDING
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub options: CloudOptions,
    pub words: Vec<PlacedWord>,
    /// Words that did not fit at the minimum font size.
    pub skipped: usize,
}

impl WordCloud {
    /// Lay out `frequencies`, which must be sorted by descending count.
    pub fn layout(frequencies: &[(String, u32)], options: CloudOptions) -> Self {
        let mut cloud = Self {
            options,
            words: Vec::new(),
            skipped: 0,
        };
        let Some(max_count) = frequencies.first().map(|(_, count)| *count) else {
            return cloud;
        };
        if max_count == 0 {
            return cloud;
        }

        let mut ceiling = options
            .max_font_size
            .min(options.height as f64 / LINE_HEIGHT);

        for (text, count) in frequencies.iter().take(options.max_words) {
            let proportional = options.max_font_size * f64::from(*count) / f64::from(max_count);
            let mut size = proportional.max(options.min_font_size).min(ceiling);

            let placed = loop {
                if let Some(found) = cloud.find_position(text, size) {
                    break Some(found);
                }
                if size <= options.min_font_size {
                    break None;
                }
                size = (size * SHRINK).max(options.min_font_size);
            };

            match placed {
                Some((x, y, width, height)) => {
                    ceiling = size;
                    let color = PALETTE[cloud.words.len() % PALETTE.len()];
                    cloud.words.push(PlacedWord {
                        text: text.clone(),
                        count: *count,
                        font_size: size,
                        x,
                        y,
                        width,
                        height,
                        color,
                    });
                }
                None => cloud.skipped += 1,
            }
        }
        debug!(
            "word cloud: placed {} words, skipped {}",
            cloud.words.len(),
            cloud.skipped
        );
        cloud
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn find_position(&self, text: &str, size: f64) -> Option<(f64, f64, f64, f64)> {
        let canvas_w = self.options.width as f64;
        let canvas_h = self.options.height as f64;
        let width = size * CHAR_WIDTH * text.chars().count() as f64;
        let height = size * LINE_HEIGHT;
        if width > canvas_w || height > canvas_h {
            return None;
        }
        self.spiral_position(width, height)
            .or_else(|| self.grid_position(width, height))
            .map(|(x, y)| (x, y, width, height))
    }

    fn is_free(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        !self.words.iter().any(|w| w.overlaps(x, y, width, height))
    }

    fn spiral_position(&self, width: f64, height: f64) -> Option<(f64, f64)> {
        let canvas_w = self.options.width as f64;
        let canvas_h = self.options.height as f64;
        let (cx, cy) = (canvas_w / 2.0, canvas_h / 2.0);
        let aspect = canvas_h / canvas_w;
        let max_radius = cx.hypot(cy);
        let mut theta: f64 = 0.0;
        loop {
            let radius = SPIRAL_SPACING * theta;
            if radius > max_radius {
                return None;
            }
            let x = cx + radius * theta.cos() - width / 2.0;
            let y = cy + radius * aspect * theta.sin() - height / 2.0;
            let inside = x >= 0.0 && y >= 0.0 && x + width <= canvas_w && y + height <= canvas_h;
            if inside && self.is_free(x, y, width, height) {
                return Some((x, y));
            }
            theta += (SPIRAL_STEP_PX / radius.max(1.0)).min(SPIRAL_MAX_ANGLE_STEP);
        }
    }

    /// Row-major scan over `GRID_STEP` positions. After a collision the scan jumps
    /// to the first grid column right of the blocking word, which skips only
    /// positions that overlap it.
    fn grid_position(&self, width: f64, height: f64) -> Option<(f64, f64)> {
        let canvas_w = self.options.width as f64;
        let canvas_h = self.options.height as f64;
        let mut y = 0.0;
        while y + height <= canvas_h {
            let mut x = 0.0;
            while x + width <= canvas_w {
                match self.words.iter().find(|w| w.overlaps(x, y, width, height)) {
                    None => return Some((x, y)),
                    Some(blocker) => {
                        let clear = blocker.x + blocker.width + PADDING;
                        x = ((clear / GRID_STEP).ceil() * GRID_STEP).max(x + GRID_STEP);
                    }
                }
            }
            y += GRID_STEP;
        }
        None
    }

    /// Render as a standalone SVG. An empty cloud renders a captioned blank canvas.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.options.width, self.options.height);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Word cloud">"#
        );
        svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

        if self.words.is_empty() {
            svg.push_str(&format!(
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="20" fill="#888888">No words to display</text>"##,
                w / 2,
                h / 2
            ));
        }
        for word in &self.words {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="{:.1}" fill="{}">{}</text>"#,
                word.x,
                word.y + word.font_size * BASELINE,
                word.font_size,
                word.color,
                escape_xml(&word.text)
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(list: &[(&str, u32)]) -> Vec<(String, u32)> {
        list.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let cloud = WordCloud::layout(&[], CloudOptions::default());
        assert!(cloud.is_empty());
        let svg = cloud.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("No words to display"));
    }

    #[test]
    fn words_stay_inside_canvas_without_overlap() {
        let words: Vec<(String, u32)> = (0..120)
            .map(|i| (format!("word{i:03}"), 120 - i as u32))
            .collect();
        let options = CloudOptions::default();
        let cloud = WordCloud::layout(&words, options);
        assert!(!cloud.is_empty());
        assert_eq!(cloud.words.len() + cloud.skipped, 120);

        for (i, a) in cloud.words.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0);
            assert!(a.x + a.width <= options.width as f64);
            assert!(a.y + a.height <= options.height as f64);
            for b in &cloud.words[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{} overlaps {}", a.text, b.text);
            }
        }
    }

    fn grid_has_room(cloud: &WordCloud, width: f64, height: f64) -> bool {
        let (canvas_w, canvas_h) = (cloud.options.width as f64, cloud.options.height as f64);
        let mut y = 0.0;
        while y + height <= canvas_h {
            let mut x = 0.0;
            while x + width <= canvas_w {
                if cloud.is_free(x, y, width, height) {
                    return true;
                }
                x += GRID_STEP;
            }
            y += GRID_STEP;
        }
        false
    }

    #[test]
    fn long_tail_is_skipped_only_when_canvas_is_full() {
        let words: Vec<(String, u32)> = (0..200).map(|i| (format!("w{i:03}abc"), 1)).collect();
        let options = CloudOptions::default();
        let cloud = WordCloud::layout(&words, options);
        assert_eq!(cloud.words.len() + cloud.skipped, 200);
        assert!(cloud.words.len() > 33, "placed only {}", cloud.words.len());

        if cloud.skipped > 0 {
            let width = options.min_font_size * CHAR_WIDTH * 7.0;
            let height = options.min_font_size * LINE_HEIGHT;
            assert!(
                !grid_has_room(&cloud, width, height),
                "{} words skipped with room left on the canvas",
                cloud.skipped
            );
        }
    }

    #[test]
    fn small_words_fill_gaps_left_by_the_spiral() {
        let words: Vec<(String, u32)> = (0..60).map(|i| (format!("tail{i:02}"), 1)).collect();
        let options = CloudOptions {
            width: 200,
            height: 60,
            max_font_size: 8.0,
            ..CloudOptions::default()
        };
        let cloud = WordCloud::layout(&words, options);
        let width = options.min_font_size * CHAR_WIDTH * 6.0;
        let height = options.min_font_size * LINE_HEIGHT;
        if cloud.skipped > 0 {
            assert!(!grid_has_room(&cloud, width, height));
        }
        assert!(cloud.words.iter().all(|w| (w.font_size - 8.0).abs() < 1e-9));
    }

    #[test]
    fn size_follows_frequency() {
        let cloud = WordCloud::layout(
            &freq(&[("cat", 10), ("mat", 5), ("sat", 5), ("happy", 1)]),
            CloudOptions::default(),
        );
        assert_eq!(cloud.words.len(), 4);
        assert_eq!(cloud.words[0].text, "cat");
        assert!((cloud.words[0].font_size - 100.0).abs() < 1e-9);
        assert!((cloud.words[1].font_size - 50.0).abs() < 1e-9);
        for pair in cloud.words.windows(2) {
            assert!(pair[0].font_size >= pair[1].font_size);
        }
    }

    #[test]
    fn max_words_caps_layout() {
        let words: Vec<(String, u32)> = (0..10).map(|i| (format!("w{i}"), 1)).collect();
        let options = CloudOptions {
            max_words: 3,
            ..CloudOptions::default()
        };
        let cloud = WordCloud::layout(&words, options);
        assert_eq!(cloud.words.len() + cloud.skipped, 3);
    }

    #[test]
    fn word_too_long_for_canvas_is_skipped() {
        let options = CloudOptions {
            width: 40,
            height: 40,
            ..CloudOptions::default()
        };
        let cloud = WordCloud::layout(&freq(&[("incomprehensibilities", 3)]), options);
        assert!(cloud.is_empty());
        assert_eq!(cloud.skipped, 1);
        assert!(cloud.to_svg().contains("No words to display"));
    }
}
