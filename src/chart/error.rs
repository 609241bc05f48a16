//! Errors local to a single render pass

use crate::sentiment::Sentiment;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The selected class has no records to draw from.
    #[error("No {sentiment} records with `{column}` text to visualize")]
    EmptyClass {
        sentiment: Sentiment,
        column: String,
    },

    /// The class vocabulary is too small for the requested n-gram size.
    #[error(
        "{sentiment} text has {found} distinct word(s); at least {required} are needed to form {ngram}-grams"
    )]
    InsufficientVocabulary {
        sentiment: Sentiment,
        ngram: usize,
        required: usize,
        found: usize,
    },

    /// A label in the data has no entry in the color mapping.
    #[error("Sentiment label `{label}` has no assigned color")]
    UnknownLabel { label: String },
}
