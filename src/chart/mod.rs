//! Chart values produced by one render pass.
//!
//! A chart is plain data: the UI draws it into a terminal frame and headless
//! mode draws it into an in-memory buffer.

pub mod error;

pub use error::RenderError;

use crate::analysis::WordCloudLayout;
use crate::sentiment::Rgb;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BarDirection {
    /// One column per category, values on the y-axis.
    Vertical,
    /// One row per category, values on the x-axis.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub direction: BarDirection,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    /// Print each bar's value inside the bar, at mid-height when vertical.
    pub annotate: bool,
}

impl BarSeries {
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|bar| bar.value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.bars.iter().map(|bar| bar.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Bars(BarSeries),
    WordCloud(WordCloudLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub body: ChartBody,
}
