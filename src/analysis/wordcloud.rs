//! Frequency-driven word-cloud layout.
//!
//! Words are placed largest first on a fixed-size canvas. Each word's font
//! size follows its frequency relative to the previous word, and its position
//! is drawn at random from every free spot on a coarse occupancy grid. When a
//! word does not fit, the other orientation is tried once, then the font
//! shrinks until it falls below the minimum size, which ends the layout.

use crate::analysis::cloud_text::cloud_terms;
use crate::analysis::frequency::TermFrequency;
use crate::config::WordCloudConfig;
use crate::consts::cli_consts::word_cloud::{GLYPH_ASPECT, GRID_CELL_PX};
use crate::sentiment::{Colormap, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Padding around each word, in pixels.
const MARGIN_PX: u32 = 2;

/// Colormap range used for glyphs; the lightest shades vanish on white.
const COLOR_RANGE: (f64, f64) = (0.4, 1.0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordCloudError {
    #[error("need at least 1 word to plot a word cloud, got 0")]
    NoWords,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    /// Rotated 90 degrees; glyphs read top to bottom.
    Vertical,
}

impl Orientation {
    fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A word with its final box on the canvas. Coordinates are pixels from the
/// top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    /// Frequency relative to the most frequent word, in `(0, 1]`.
    pub frequency: f64,
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudLayout {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub words: Vec<PlacedWord>,
}

/// Word-cloud generator for one canvas configuration and colormap.
#[derive(Debug, Clone)]
pub struct WordCloud {
    config: WordCloudConfig,
    colormap: Colormap,
}

impl WordCloud {
    pub fn new(config: WordCloudConfig, colormap: Colormap) -> Self {
        Self { config, colormap }
    }

    /// Extracts word-cloud terms from `text`, keeping the `max_words` most
    /// frequent. Numbers and stopwords are dropped and collocated pairs kept
    /// as one term, as configured.
    pub fn process_text(&self, text: &str) -> Vec<TermFrequency> {
        cloud_terms(text, &self.config)
    }

    /// Lays out the words of `text`.
    pub fn generate(&self, text: &str) -> Result<WordCloudLayout, WordCloudError> {
        self.generate_from_frequencies(&self.process_text(text))
    }

    /// Lays out pre-counted words. Input order does not matter.
    pub fn generate_from_frequencies(
        &self,
        frequencies: &[TermFrequency],
    ) -> Result<WordCloudLayout, WordCloudError> {
        let mut sorted: Vec<&TermFrequency> =
            frequencies.iter().filter(|tf| tf.count > 0).collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        sorted.truncate(self.config.max_words);

        let max_count = match sorted.first() {
            Some(first) => first.count as f64,
            None => return Err(WordCloudError::NoWords),
        };
        let normalized: Vec<(&str, f64)> = sorted
            .iter()
            .map(|tf| (tf.term.as_str(), tf.count as f64 / max_count))
            .collect();

        let start_size = match self.config.max_font_size {
            Some(size) => size,
            None => self.initial_font_size(&normalized),
        };

        Ok(WordCloudLayout {
            width: self.config.width,
            height: self.config.height,
            background: Rgb(255, 255, 255),
            words: self.layout(&normalized, start_size),
        })
    }

    /// Derives a starting size from a trial run of the two most frequent
    /// words at full canvas height: the harmonic mean of their fitted sizes.
    fn initial_font_size(&self, normalized: &[(&str, f64)]) -> u32 {
        let head = &normalized[..normalized.len().min(2)];
        let trial = self.layout(head, self.config.height);
        match trial.as_slice() {
            [first, second, ..] => {
                let (a, b) = (first.font_size as f64, second.font_size as f64);
                (2.0 * a * b / (a + b)) as u32
            }
            [first] => first.font_size,
            [] => self.config.height,
        }
    }

    fn layout(&self, normalized: &[(&str, f64)], start_size: u32) -> Vec<PlacedWord> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.random_state);
        let mut grid = OccupancyGrid::new(cfg.width, cfg.height, GRID_CELL_PX);
        let mut placed = Vec::new();

        let mut font_size = start_size as i64;
        let mut last_freq = 1.0;
        let min_size = cfg.min_font_size as i64;

        for &(word, freq) in normalized {
            let rs = cfg.relative_scaling;
            if rs != 0.0 {
                font_size =
                    ((rs * (freq / last_freq) + (1.0 - rs)) * font_size as f64).round() as i64;
            }
            let mut orientation = if rng.r#gen::<f64>() < cfg.prefer_horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };

            let mut tried_other_orientation = false;
            let position = loop {
                if font_size < min_size {
                    break None;
                }
                let (w, h) = box_size(word, font_size as u32, orientation);
                if let Some(pos) = grid.sample_position(w + MARGIN_PX, h + MARGIN_PX, &mut rng) {
                    break Some((pos, w, h));
                }
                if !tried_other_orientation && cfg.prefer_horizontal < 1.0 {
                    orientation = orientation.flipped();
                    tried_other_orientation = true;
                } else {
                    font_size -= cfg.font_step as i64;
                    orientation = Orientation::Horizontal;
                }
            };

            let Some(((x, y), width, height)) = position else {
                break;
            };
            grid.occupy(x, y, width + MARGIN_PX, height + MARGIN_PX);

            let (lo, hi) = COLOR_RANGE;
            let color = self.colormap.sample(rng.gen_range(lo..=hi));
            placed.push(PlacedWord {
                word: word.to_string(),
                frequency: freq,
                font_size: font_size as u32,
                x,
                y,
                width,
                height,
                orientation,
                color,
            });
            last_freq = freq;
        }
        placed
    }
}

/// Pixel box of a word at a font size.
fn box_size(word: &str, font_size: u32, orientation: Orientation) -> (u32, u32) {
    let chars = word.chars().count().max(1) as f64;
    let along = (chars * font_size as f64 * GLYPH_ASPECT).ceil() as u32;
    match orientation {
        Orientation::Horizontal => (along, font_size),
        Orientation::Vertical => (font_size, along),
    }
}

/// Coarse occupancy bitmap with a summed-area table for O(1) box queries.
struct OccupancyGrid {
    cell: u32,
    cols: usize,
    rows: usize,
    occupied: Vec<bool>,
    /// `(rows + 1) x (cols + 1)` prefix sums of `occupied`.
    sums: Vec<u32>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32, cell: u32) -> Self {
        let cols = width.div_ceil(cell) as usize;
        let rows = height.div_ceil(cell) as usize;
        Self {
            cell,
            cols,
            rows,
            occupied: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    fn rebuild_sums(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.occupied[r * self.cols + c] as u32;
                self.sums[(r + 1) * stride + c + 1] = self.sums[r * stride + c + 1] + row_sum;
            }
        }
    }

    fn box_sum(&self, col: usize, row: usize, w: usize, h: usize) -> u32 {
        let stride = self.cols + 1;
        let (r0, c0, r1, c1) = (row, col, row + h, col + w);
        self.sums[r1 * stride + c1] + self.sums[r0 * stride + c0]
            - self.sums[r0 * stride + c1]
            - self.sums[r1 * stride + c0]
    }

    fn cells(&self, px: u32) -> usize {
        px.div_ceil(self.cell) as usize
    }

    /// Picks a uniformly random free top-left corner for a `w x h` pixel box.
    fn sample_position(&self, w: u32, h: u32, rng: &mut StdRng) -> Option<(u32, u32)> {
        let (cw, ch) = (self.cells(w), self.cells(h));
        if cw == 0 || ch == 0 || cw > self.cols || ch > self.rows {
            return None;
        }
        let count = self.free_positions(cw, ch).count();
        if count == 0 {
            return None;
        }
        let pick = rng.gen_range(0..count);
        self.free_positions(cw, ch)
            .nth(pick)
            .map(|(col, row)| (col as u32 * self.cell, row as u32 * self.cell))
    }

    fn free_positions(&self, cw: usize, ch: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..=self.rows - ch)
            .flat_map(move |row| (0..=self.cols - cw).map(move |col| (col, row)))
            .filter(move |&(col, row)| self.box_sum(col, row, cw, ch) == 0)
    }

    fn occupy(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let col0 = (x / self.cell) as usize;
        let row0 = (y / self.cell) as usize;
        let col1 = (col0 + self.cells(w)).min(self.cols);
        let row1 = (row0 + self.cells(h)).min(self.rows);
        for row in row0..row1 {
            for col in col0..col1 {
                self.occupied[row * self.cols + col] = true;
            }
        }
        self.rebuild_sums();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> WordCloud {
        WordCloud::new(WordCloudConfig::default(), Colormap::Greens)
    }

    fn overlaps(a: &PlacedWord, b: &PlacedWord) -> bool {
        a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
    }

    #[test]
    fn text_without_words_is_rejected() {
        assert_eq!(cloud().generate("  ").unwrap_err(), WordCloudError::NoWords);
        assert_eq!(
            cloud().generate("the and of 17 2024").unwrap_err(),
            WordCloudError::NoWords
        );
    }

    #[test]
    fn numbers_and_stopwords_never_reach_the_canvas() {
        let layout = cloud()
            .generate("2024 2024 2024 the the the brics brics")
            .unwrap();
        let words: Vec<&str> = layout.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["brics"]);
    }

    #[test]
    fn most_frequent_word_is_largest_and_first() {
        let layout = cloud()
            .generate("harga harga harga naik naik turun")
            .unwrap();
        assert_eq!(layout.words[0].word, "harga");
        assert_eq!(layout.words[0].frequency, 1.0);
        assert!(
            layout
                .words
                .windows(2)
                .all(|w| w[0].font_size >= w[1].font_size)
        );
        assert_eq!((layout.width, layout.height), (800, 400));
        assert_eq!(layout.background, Rgb(255, 255, 255));
    }

    #[test]
    fn words_stay_on_canvas_without_overlap() {
        let text = (0..60)
            .map(|i| format!("kata{} ", i).repeat(60 - i))
            .collect::<String>();
        let layout = cloud().generate(&text).unwrap();
        assert!(!layout.words.is_empty());
        for (i, a) in layout.words.iter().enumerate() {
            assert!(a.x + a.width <= layout.width);
            assert!(a.y + a.height <= layout.height);
            for b in &layout.words[i + 1..] {
                assert!(!overlaps(a, b), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn layout_is_reproducible_for_a_seed() {
        let text = "ekonomi brics tumbuh ekonomi dunia brics brics";
        assert_eq!(cloud().generate(text), cloud().generate(text));
    }

    #[test]
    fn max_words_caps_the_layout() {
        let config = WordCloudConfig {
            max_words: 3,
            ..WordCloudConfig::default()
        };
        let layout = WordCloud::new(config, Colormap::Reds)
            .generate("aa bb cc dd ee ff")
            .unwrap();
        assert!(layout.words.len() <= 3);
    }

    #[test]
    fn explicit_max_font_size_bounds_every_word() {
        let config = WordCloudConfig {
            max_font_size: Some(40),
            ..WordCloudConfig::default()
        };
        let layout = WordCloud::new(config, Colormap::Blues)
            .generate("satu satu dua tiga")
            .unwrap();
        assert!(layout.words.iter().all(|w| w.font_size <= 40));
    }

    #[test]
    fn occupancy_grid_reports_full_canvas() {
        let mut grid = OccupancyGrid::new(16, 16, 4);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(grid.sample_position(16, 16, &mut rng).is_some());
        grid.occupy(0, 0, 4, 4);
        assert!(grid.sample_position(16, 16, &mut rng).is_none());
        let corner = grid.sample_position(12, 12, &mut rng).unwrap();
        assert_ne!(corner, (0, 0));
    }
}
