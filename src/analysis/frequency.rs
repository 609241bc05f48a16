//! Frequency counting over records and documents.

use crate::analysis::tokenize::ngrams;
use crate::dataset::Dataset;
use std::collections::BTreeMap;

/// Number of records carrying one sentiment label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCount {
    pub label: String,
    pub count: usize,
}

/// A word or n-gram with its total occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

impl TermFrequency {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Counts records per raw label over the whole dataset.
///
/// Ordered by count descending; equal counts keep the order in which the
/// labels first appear. Labels with no records never appear.
pub fn sentiment_counts(dataset: &Dataset) -> Vec<SentimentCount> {
    let mut counts: Vec<SentimentCount> = Vec::new();
    for record in dataset.records() {
        match counts.iter_mut().find(|c| c.label == record.sentiment) {
            Some(entry) => entry.count += 1,
            None => counts.push(SentimentCount {
                label: record.sentiment.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Counts every distinct `n`-gram across documents. N-grams never span two
/// documents.
pub fn count_ngrams<'a, I>(documents: I, n: usize) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for document in documents {
        for gram in ngrams(document, n) {
            *counts.entry(gram).or_insert(0) += 1;
        }
    }
    counts
}

/// The `top_n` most frequent terms, by count descending then term ascending.
pub fn top_terms(counts: &BTreeMap<String, usize>, top_n: usize) -> Vec<TermFrequency> {
    let mut terms: Vec<TermFrequency> = counts
        .iter()
        .map(|(term, &count)| TermFrequency::new(term.clone(), count))
        .collect();
    // The map iterates in term order, so a stable sort on count alone leaves
    // ties sorted by term.
    terms.sort_by(|a, b| b.count.cmp(&a.count));
    terms.truncate(top_n);
    terms
}

/// Most frequent single words across documents.
pub fn top_words<'a, I>(documents: I, top_n: usize) -> Vec<TermFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    top_terms(&count_ngrams(documents, 1), top_n)
}

/// Most frequent contiguous three-word sequences across documents.
pub fn top_trigrams<'a, I>(documents: I, top_n: usize) -> Vec<TermFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    top_terms(&count_ngrams(documents, 3), top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn dataset(labels: &[&str]) -> Dataset {
        Dataset::new(labels.iter().map(|l| Record::new(*l, "x", "x")).collect())
    }

    #[test]
    fn counts_sum_to_record_total() {
        let mut labels = vec!["Positif"; 3];
        labels.extend(vec!["Negatif"; 5]);
        labels.extend(vec!["Netral"; 2]);
        let data = dataset(&labels);

        let counts = sentiment_counts(&data);
        assert_eq!(
            counts,
            [
                SentimentCount {
                    label: "Negatif".to_string(),
                    count: 5
                },
                SentimentCount {
                    label: "Positif".to_string(),
                    count: 3
                },
                SentimentCount {
                    label: "Netral".to_string(),
                    count: 2
                },
            ]
        );
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), data.len());
    }

    #[test]
    fn count_ties_keep_first_appearance() {
        let counts = sentiment_counts(&dataset(&["Netral", "Positif", "Positif", "Netral"]));
        let labels: Vec<_> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Netral", "Positif"]);
    }

    #[test]
    fn absent_classes_have_no_entry() {
        let counts = sentiment_counts(&dataset(&["Positif"]));
        assert_eq!(counts.len(), 1);
        assert!(sentiment_counts(&Dataset::default()).is_empty());
    }

    #[test]
    fn top_words_break_ties_by_term() {
        let docs = ["bad service slow", "bad service rude"];
        assert_eq!(
            top_words(docs, 3),
            [
                TermFrequency::new("bad", 2),
                TermFrequency::new("service", 2),
                TermFrequency::new("rude", 1),
            ]
        );
    }

    #[test]
    fn top_words_may_be_shorter_than_limit() {
        assert_eq!(top_words(["ok ok fine"], 10).len(), 2);
    }

    #[test]
    fn trigrams_do_not_span_documents() {
        let top = top_trigrams(["aa bb", "cc dd ee"], 5);
        assert_eq!(top, [TermFrequency::new("cc dd ee", 1)]);
    }

    #[test]
    fn results_are_sorted_by_count_descending() {
        let docs = [
            "harga naik terus harga naik terus",
            "harga naik lagi",
            "rupiah melemah terus",
        ];
        for result in [top_words(docs, 10), top_trigrams(docs, 5)] {
            assert!(result.windows(2).all(|w| w[0].count >= w[1].count));
        }
        assert_eq!(top_trigrams(docs, 1), [TermFrequency::new("harga naik terus", 2)]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let docs = ["satu dua tiga empat", "dua tiga empat lima"];
        assert_eq!(top_trigrams(docs, 5), top_trigrams(docs, 5));
        assert_eq!(top_words(docs, 10), top_words(docs, 10));
    }
}
