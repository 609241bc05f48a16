//! In-memory dataset types.

use crate::config::ColumnNames;
use crate::dataset::error::LoadError;
use crate::sentiment::Sentiment;

/// One labeled text sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Label exactly as found in the data.
    pub sentiment: String,
    /// Fully preprocessed token stream.
    pub stemmed_text: String,
    /// Stopword-filtered, unstemmed token stream.
    pub filtered_text: String,
}

impl Record {
    pub fn new(
        sentiment: impl Into<String>,
        stemmed_text: impl Into<String>,
        filtered_text: impl Into<String>,
    ) -> Self {
        Self {
            sentiment: sentiment.into(),
            stemmed_text: stemmed_text.into(),
            filtered_text: filtered_text.into(),
        }
    }

    /// The known class of this record, if its label parses.
    pub fn class(&self) -> Option<Sentiment> {
        Sentiment::from_label(&self.sentiment)
    }
}

/// A header row plus string cells, as read from any tabular file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Ordered, read-only collection of records loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds a dataset from a raw table, projecting the configured columns.
    ///
    /// Rows whose cells are all blank are skipped. A row with text but no
    /// sentiment label is rejected. Row numbers in errors are 1-based and
    /// count the header row, like a spreadsheet.
    pub fn from_table(table: RawTable, columns: &ColumnNames) -> Result<Self, LoadError> {
        let sentiment_idx = column_index(&table.headers, &columns.sentiment)?;
        let stemmed_idx = column_index(&table.headers, &columns.stemmed_text)?;
        let filtered_idx = column_index(&table.headers, &columns.filtered_text)?;

        let mut records = Vec::with_capacity(table.rows.len());
        for (i, row) in table.rows.iter().enumerate() {
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
            let sentiment = cell(sentiment_idx).trim();
            if sentiment.is_empty() {
                return Err(LoadError::EmptySentiment {
                    row: i + 2,
                    column: columns.sentiment.clone(),
                });
            }
            records.push(Record::new(
                sentiment,
                cell(stemmed_idx),
                cell(filtered_idx),
            ));
        }
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose label parses to the given class, in dataset order.
    pub fn of_class(&self, sentiment: Sentiment) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |record| record.class() == Some(sentiment))
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn {
            column: name.to_string(),
        })
}
