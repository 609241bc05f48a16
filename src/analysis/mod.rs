//! Text statistics behind the charts.

pub mod cloud_text;
pub mod frequency;
pub mod tokenize;
pub mod wordcloud;

pub use frequency::{TermFrequency, sentiment_counts, top_trigrams, top_words};
pub use wordcloud::{Orientation, WordCloud, WordCloudError, WordCloudLayout};
