//! Dashboard controller: turns the current selection into one chart.
//!
//! Every call recomputes from the dataset. Nothing is cached between passes,
//! so the same selection over the same dataset always yields the same chart.

use crate::analysis::frequency::count_ngrams;
use crate::analysis::{
    TermFrequency, WordCloud, WordCloudError, sentiment_counts, top_trigrams, top_words,
};
use crate::chart::{Bar, BarDirection, BarSeries, Chart, ChartBody, RenderError};
use crate::config::Config;
use crate::dataset::{Dataset, Record};
use crate::sentiment::{Sentiment, color_for_label};
use std::fmt::{Display, Formatter};

/// Trigram size.
const TRIGRAM: usize = 3;

/// The four charts the dashboard can show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum VisualizationKind {
    SentimentCounts,
    WordCloud,
    TopTrigrams,
    TopWords,
}

impl VisualizationKind {
    /// All kinds, in side-panel order.
    pub const ALL: [VisualizationKind; 4] = [
        VisualizationKind::SentimentCounts,
        VisualizationKind::WordCloud,
        VisualizationKind::TopTrigrams,
        VisualizationKind::TopWords,
    ];

    /// Whether the chart is drawn for a single sentiment class.
    pub fn needs_sentiment(self) -> bool {
        !matches!(self, VisualizationKind::SentimentCounts)
    }

    /// Position of the kind in `ALL`.
    pub fn index(self) -> usize {
        match self {
            VisualizationKind::SentimentCounts => 0,
            VisualizationKind::WordCloud => 1,
            VisualizationKind::TopTrigrams => 2,
            VisualizationKind::TopWords => 3,
        }
    }
}

impl Display for VisualizationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VisualizationKind::SentimentCounts => write!(f, "Sentiment Bar Chart"),
            VisualizationKind::WordCloud => write!(f, "Sentiment Word Cloud"),
            VisualizationKind::TopTrigrams => write!(f, "Sentiment Trigrams"),
            VisualizationKind::TopWords => write!(f, "Sentiment Top Words"),
        }
    }
}

/// Transient side-panel state. The sentiment is ignored by kinds that do not
/// need one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: VisualizationKind,
    pub sentiment: Sentiment,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            kind: VisualizationKind::SentimentCounts,
            sentiment: Sentiment::Positive,
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.kind.needs_sentiment() {
            write!(f, "{} ({})", self.kind, self.sentiment)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Computes charts from a read-only dataset.
#[derive(Debug, Clone, Copy)]
pub struct Controller<'a> {
    dataset: &'a Dataset,
    config: &'a Config,
}

impl<'a> Controller<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a Config) -> Self {
        Self { dataset, config }
    }

    /// Runs one render pass for the selection.
    pub fn render(&self, selection: Selection) -> Result<Chart, RenderError> {
        log::debug!("Rendering {}", selection);
        match selection.kind {
            VisualizationKind::SentimentCounts => self.sentiment_count_chart(),
            VisualizationKind::WordCloud => self.word_cloud_chart(selection.sentiment),
            VisualizationKind::TopTrigrams => self.top_trigrams_chart(selection.sentiment),
            VisualizationKind::TopWords => self.top_words_chart(selection.sentiment),
        }
    }

    /// Records per label over the whole dataset, one colored bar each.
    pub fn sentiment_count_chart(&self) -> Result<Chart, RenderError> {
        let bars = sentiment_counts(self.dataset)
            .into_iter()
            .map(|count| {
                let color = color_for_label(&count.label).ok_or_else(|| {
                    RenderError::UnknownLabel {
                        label: count.label.clone(),
                    }
                })?;
                Ok(Bar {
                    label: count.label,
                    value: count.count as u64,
                    color,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        let series = BarSeries {
            direction: BarDirection::Vertical,
            x_label: "Sentiment".to_string(),
            y_label: "Count".to_string(),
            bars,
            annotate: true,
        };
        log::debug!(
            "Counted {} records over {} labels",
            series.total(),
            series.bars.len()
        );

        Ok(Chart {
            title: self.config.title.clone(),
            body: ChartBody::Bars(series),
        })
    }

    /// Word cloud of the class text. Positive reads the unstemmed column,
    /// every other class the stemmed one.
    pub fn word_cloud_chart(&self, sentiment: Sentiment) -> Result<Chart, RenderError> {
        let text = self.word_cloud_text(sentiment);
        if text.is_empty() {
            return Err(RenderError::EmptyClass {
                sentiment,
                column: self.word_cloud_column(sentiment).to_string(),
            });
        }

        let generator = WordCloud::new(self.config.word_cloud.clone(), sentiment.colormap());
        let layout = generator.generate(&text).map_err(|err| match err {
            WordCloudError::NoWords => RenderError::InsufficientVocabulary {
                sentiment,
                ngram: 1,
                required: 1,
                found: 0,
            },
        })?;

        Ok(Chart {
            title: format!("Word Cloud {} ({})", self.config.title, sentiment),
            body: ChartBody::WordCloud(layout),
        })
    }

    /// The class text fed to the word cloud, records joined by single spaces.
    pub fn word_cloud_text(&self, sentiment: Sentiment) -> String {
        self.dataset
            .of_class(sentiment)
            .map(|record| word_cloud_field(record, sentiment))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn word_cloud_column(&self, sentiment: Sentiment) -> &str {
        let columns = &self.config.columns;
        match sentiment {
            Sentiment::Positive => &columns.filtered_text,
            _ => &columns.stemmed_text,
        }
    }

    /// Most frequent trigrams of the class's stemmed text.
    pub fn top_trigrams_chart(&self, sentiment: Sentiment) -> Result<Chart, RenderError> {
        let documents = self.stemmed_documents(sentiment)?;

        let vocabulary = count_ngrams(documents.iter().copied(), 1).len();
        let insufficient = RenderError::InsufficientVocabulary {
            sentiment,
            ngram: TRIGRAM,
            required: TRIGRAM,
            found: vocabulary,
        };
        if vocabulary < TRIGRAM {
            return Err(insufficient);
        }
        let top = top_trigrams(documents.iter().copied(), self.config.top_trigrams);
        if top.is_empty() {
            return Err(insufficient);
        }

        Ok(self.frequency_chart(
            format!("Top Trigrams {} ({})", self.config.title, sentiment),
            "Trigrams",
            sentiment,
            top,
        ))
    }

    /// Most frequent words of the class's stemmed text.
    pub fn top_words_chart(&self, sentiment: Sentiment) -> Result<Chart, RenderError> {
        let documents = self.stemmed_documents(sentiment)?;
        let top = top_words(documents.iter().copied(), self.config.top_words);
        if top.is_empty() {
            return Err(RenderError::InsufficientVocabulary {
                sentiment,
                ngram: 1,
                required: 1,
                found: 0,
            });
        }

        Ok(self.frequency_chart(
            format!("Top Words {} ({})", self.config.title, sentiment),
            "Words",
            sentiment,
            top,
        ))
    }

    fn stemmed_documents(&self, sentiment: Sentiment) -> Result<Vec<&'a str>, RenderError> {
        let documents: Vec<&'a str> = self
            .dataset
            .of_class(sentiment)
            .map(|record| record.stemmed_text.as_str())
            .collect();
        if documents.is_empty() {
            return Err(RenderError::EmptyClass {
                sentiment,
                column: self.config.columns.stemmed_text.clone(),
            });
        }
        Ok(documents)
    }

    fn frequency_chart(
        &self,
        title: String,
        y_label: &str,
        sentiment: Sentiment,
        terms: Vec<TermFrequency>,
    ) -> Chart {
        let color = sentiment.color();
        let bars = terms
            .into_iter()
            .map(|tf| Bar {
                label: tf.term,
                value: tf.count as u64,
                color,
            })
            .collect();
        Chart {
            title,
            body: ChartBody::Bars(BarSeries {
                direction: BarDirection::Horizontal,
                x_label: "Frequency".to_string(),
                y_label: y_label.to_string(),
                bars,
                annotate: false,
            }),
        }
    }
}

fn word_cloud_field(record: &Record, sentiment: Sentiment) -> &str {
    match sentiment {
        Sentiment::Positive => &record.filtered_text,
        _ => &record.stemmed_text,
    }
}
