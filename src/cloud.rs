//! Word-cloud rendering.
//!
//! Words are laid out from the most to the least frequent along an
//! elliptical spiral starting at the canvas centre. Each word gets a font
//! size proportional to its relative frequency, shrinks when it does not fit,
//! and placement stops once a word would fall below the minimum font size.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::frequency::FrequencyTable;

const VIRIDIS: [&str; 8] = [
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#a0da39", "#fde725",
];

/// Average glyph advance relative to the font size for a sans-serif face.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const SPIRAL_GROWTH: f64 = 1.2;
const SPIRAL_ANGLE_STEP: f64 = 0.15;
const SHRINK_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct CloudOptions {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: f64,
    /// Defaults to 40% of the canvas height.
    pub max_font_size: Option<f64>,
    /// 0 sizes every word alike, 1 makes size proportional to frequency.
    pub relative_scaling: f64,
    pub margin: f64,
    pub background: String,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 100,
            min_font_size: 4.0,
            max_font_size: None,
            relative_scaling: 0.5,
            margin: 2.0,
            background: "black".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.width <= width && self.y + self.height <= height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f64,
    /// Top-left corner of the word's box, margin included.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl PlacedWord {
    fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    /// Counts whitespace-separated words in `text` and lays them out.
    pub fn generate(text: &str, options: &CloudOptions) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_frequencies(&FrequencyTable::from_tokens(&tokens), options)
    }

    pub fn from_frequencies(frequencies: &FrequencyTable, options: &CloudOptions) -> Self {
        let start_time = Instant::now();
        let ranked = frequencies.most_common(options.max_words);
        let canvas_width = f64::from(options.width);
        let canvas_height = f64::from(options.height);

        let mut cloud = WordCloud {
            width: options.width,
            height: options.height,
            background: options.background.clone(),
            words: Vec::new(),
        };

        let Some(max_count) = ranked.first().map(|entry| entry.count) else {
            info!(action = "skip", component = "word_cloud", "No words to lay out");
            return cloud;
        };

        let max_font_size = options.max_font_size.unwrap_or(canvas_height * 0.4);
        let mut font_size = max_font_size;
        let scaling = options.relative_scaling.clamp(0.0, 1.0);

        'words: for entry in &ranked {
            let relative = entry.count as f64 / max_count as f64;
            // Sizes never grow down the ranking, so a shrunken word caps the rest
            font_size = font_size.min(max_font_size * (scaling * relative + (1.0 - scaling)));

            loop {
                if font_size < options.min_font_size {
                    break 'words;
                }

                let width = font_size * GLYPH_WIDTH_RATIO * entry.word.chars().count() as f64
                    + 2.0 * options.margin;
                let height = font_size + 2.0 * options.margin;

                if let Some(rect) =
                    find_position(width, height, &cloud.words, canvas_width, canvas_height)
                {
                    cloud.words.push(PlacedWord {
                        word: entry.word.clone(),
                        count: entry.count,
                        font_size,
                        x: rect.x,
                        y: rect.y,
                        width,
                        height,
                        color: color_for(relative),
                    });
                    break;
                }
                font_size *= SHRINK_FACTOR;
            }
        }

        info!(
            action = "complete",
            component = "word_cloud",
            candidates = ranked.len(),
            placed = cloud.words.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Word cloud laid out"
        );
        cloud
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            escape_xml(&self.background)
        ));

        for word in &self.words {
            let baseline = word.y + (word.height - word.font_size) / 2.0 + word.font_size * 0.8;
            svg.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{:.1}\" font-family=\"sans-serif\" fill=\"{}\">{}</text>\n",
                word.x + (word.width - word.font_size * GLYPH_WIDTH_RATIO * word.word.chars().count() as f64) / 2.0,
                baseline,
                word.font_size,
                word.color,
                escape_xml(&word.word)
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_svg(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg())
            .with_context(|| format!("Failed to write word cloud to {:?}", path))?;
        info!(action = "write", component = "word_cloud", path = ?path, words = self.words.len(), "Word cloud saved");
        Ok(())
    }
}

fn find_position(
    width: f64,
    height: f64,
    placed: &[PlacedWord],
    canvas_width: f64,
    canvas_height: f64,
) -> Option<Rect> {
    if width > canvas_width || height > canvas_height {
        return None;
    }

    let center_x = canvas_width / 2.0;
    let center_y = canvas_height / 2.0;
    // Horizontal offsets are stretched by the aspect ratio, so the vertical
    // half-extent bounds the radius needed to reach every corner
    let aspect = canvas_width / canvas_height;
    let max_radius = (center_y + height) * std::f64::consts::SQRT_2;

    let mut theta: f64 = 0.0;
    loop {
        let radius = SPIRAL_GROWTH * theta;
        if radius > max_radius {
            return None;
        }

        let candidate = Rect {
            x: center_x + radius * aspect * theta.cos() - width / 2.0,
            y: center_y + radius * theta.sin() - height / 2.0,
            width,
            height,
        };

        if candidate.fits_within(canvas_width, canvas_height)
            && !placed.iter().any(|word| word.rect().overlaps(&candidate))
        {
            return Some(candidate);
        }
        theta += SPIRAL_ANGLE_STEP;
    }
}

fn color_for(relative: f64) -> &'static str {
    let last = VIRIDIS.len() - 1;
    let index = (relative.clamp(0.0, 1.0) * last as f64).round() as usize;
    VIRIDIS[index.min(last)]
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
