//! Word extraction for the word cloud.
//!
//! The word cloud reads text differently from the bar charts. A word is a
//! word character followed by word characters or apostrophes, so single
//! letters count. A trailing `'s` is cut. Purely numeric words and stopwords
//! are dropped, and a plural folds into its singular when both occur.
//! With collocations enabled, adjacent word pairs whose likelihood-ratio
//! score passes the threshold become two-word terms and their counts are
//! taken from the single words.

use crate::analysis::frequency::{TermFrequency, top_terms};
use crate::config::WordCloudConfig;
use crate::consts::cli_consts::word_cloud::STOPWORDS;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Floor for probabilities inside the log-likelihood.
const MIN_PROBABILITY: f64 = 1e-10;

/// Counts the word-cloud terms of `text`, most frequent first, capped at
/// `max_words`.
pub fn cloud_terms(text: &str, config: &WordCloudConfig) -> Vec<TermFrequency> {
    let stopwords = stopword_set(config);
    let words: Vec<String> = split_words(text)
        .into_iter()
        .map(|word| match word.strip_suffix("'s") {
            Some(stem) => stem.to_string(),
            None => word,
        })
        .filter(|word| config.include_numbers || !word.chars().all(char::is_numeric))
        .filter(|word| word.chars().count() >= config.min_word_length.max(1))
        .collect();

    let counts = if config.collocations {
        with_collocations(&words, &stopwords, config)
    } else {
        let kept = words.into_iter().filter(|w| !stopwords.contains(w));
        fold_plurals(kept, config.normalize_plurals).0
    };

    let counts: BTreeMap<String, usize> = counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(term, count)| (term, count as usize))
        .collect();
    top_terms(&counts, config.max_words)
}

fn stopword_set(config: &WordCloudConfig) -> HashSet<String> {
    match &config.stopwords {
        Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        None => STOPWORDS.iter().map(|w| w.to_string()).collect(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercased words in order of appearance.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if is_word_char(c) || (c == '\'' && !current.is_empty()) {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current).to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current.to_lowercase());
    }
    words
}

/// Counts words and folds plurals. The second map sends every word seen,
/// plurals included, to the key it was counted under.
fn fold_plurals(
    words: impl IntoIterator<Item = String>,
    normalize: bool,
) -> (BTreeMap<String, i64>, HashMap<String, String>) {
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut standard: HashMap<String, String> =
        counts.keys().map(|k| (k.clone(), k.clone())).collect();

    if normalize {
        let plurals: Vec<String> = counts
            .keys()
            .filter(|k| k.ends_with('s') && !k.ends_with("ss"))
            .filter(|k| counts.contains_key(&k[..k.len() - 1]))
            .cloned()
            .collect();
        for plural in plurals {
            let singular = plural[..plural.len() - 1].to_string();
            if let Some(count) = counts.remove(&plural) {
                *counts.entry(singular.clone()).or_insert(0) += count;
            }
            standard.insert(plural, singular);
        }
    }
    (counts, standard)
}

/// Single-word counts with collocated pairs promoted to terms.
///
/// Pairs are taken before stopwords are removed, so words separated by a
/// stopword never pair up.
fn with_collocations(
    words: &[String],
    stopwords: &HashSet<String>,
    config: &WordCloudConfig,
) -> BTreeMap<String, i64> {
    let pairs = words
        .windows(2)
        .filter(|pair| pair.iter().all(|w| !stopwords.contains(w)))
        .map(|pair| pair.join(" "));
    let singles: Vec<String> = words
        .iter()
        .filter(|w| !stopwords.contains(*w))
        .cloned()
        .collect();
    let total = singles.len() as f64;

    let (mut counts, standard) = fold_plurals(singles, config.normalize_plurals);
    let (pair_counts, _) = fold_plurals(pairs, config.normalize_plurals);
    let single_counts = counts.clone();

    for (pair, pair_count) in pair_counts {
        let Some((first, second)) = pair.split_once(' ') else {
            continue;
        };
        let first = standard.get(first).map_or(first, String::as_str).to_string();
        let second = standard.get(second).map_or(second, String::as_str).to_string();
        let count_of = |w: &str| single_counts.get(w).copied().unwrap_or(0) as f64;

        let score = collocation_score(
            pair_count as f64,
            count_of(&first),
            count_of(&second),
            total,
        );
        if score > config.collocation_threshold {
            // A word in several collocations may go negative; dropped below.
            *counts.entry(first).or_insert(0) -= pair_count;
            *counts.entry(second).or_insert(0) -= pair_count;
            counts.insert(pair, pair_count);
        }
    }
    counts.retain(|_, count| *count > 0);
    counts
}

fn log_likelihood(k: f64, n: f64, x: f64) -> f64 {
    x.max(MIN_PROBABILITY).ln() * k + (1.0 - x).max(MIN_PROBABILITY).ln() * (n - k)
}

/// Dunning's likelihood ratio for the pair `(w1, w2)` among `total` words.
fn collocation_score(c12: f64, c1: f64, c2: f64, total: f64) -> f64 {
    if total <= c1 || total <= c2 {
        return 0.0;
    }
    let p = c2 / total;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (total - c1);
    let ratio = log_likelihood(c12, c1, p) + log_likelihood(c2 - c12, total - c1, p)
        - log_likelihood(c12, c1, p1)
        - log_likelihood(c2 - c12, total - c1, p2);
    -2.0 * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str, config: &WordCloudConfig) -> Vec<(String, usize)> {
        cloud_terms(text, config)
            .into_iter()
            .map(|tf| (tf.term, tf.count))
            .collect()
    }

    fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn numbers_and_stopwords_are_dropped() {
        let config = WordCloudConfig::default();
        assert_eq!(
            terms("2024 2024 2024 the the the brics brics", &config),
            pairs(&[("brics", 2)])
        );
    }

    #[test]
    fn numbers_can_be_kept() {
        let config = WordCloudConfig {
            include_numbers: true,
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(
            terms("2024 2024 brics", &config),
            pairs(&[("2024", 2), ("brics", 1)])
        );
    }

    #[test]
    fn custom_stopwords_replace_the_builtin_list() {
        let config = WordCloudConfig {
            stopwords: Some(vec!["Yang".to_string()]),
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(
            terms("yang the yang brics", &config),
            pairs(&[("brics", 1), ("the", 1)])
        );
    }

    #[test]
    fn plurals_fold_into_an_existing_singular() {
        let config = WordCloudConfig {
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(
            terms("banks bank banks glass news", &config),
            pairs(&[("bank", 3), ("glass", 1), ("news", 1)])
        );

        let config = WordCloudConfig {
            normalize_plurals: false,
            ..config
        };
        assert_eq!(
            terms("banks bank banks", &config),
            pairs(&[("banks", 2), ("bank", 1)])
        );
    }

    #[test]
    fn possessive_suffix_is_cut_and_case_folded() {
        let config = WordCloudConfig {
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(
            terms("China's CHINA china", &config),
            pairs(&[("china", 3)])
        );
    }

    #[test]
    fn collocated_pairs_become_terms() {
        let text = format!("{}ekonomi dunia tumbuh", "kerja sama ".repeat(30));
        let result = terms(&text, &WordCloudConfig::default());
        assert_eq!(result[0], ("kerja sama".to_string(), 30));
        assert!(result.iter().all(|(t, _)| t != "kerja" && t != "sama"));
        assert!(result.contains(&("ekonomi".to_string(), 1)));

        let config = WordCloudConfig {
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(
            terms(&text, &config)[..2].to_vec(),
            pairs(&[("kerja", 30), ("sama", 30)])
        );
    }

    #[test]
    fn weak_pairs_stay_single_words() {
        let result = terms(
            "bagusnya pelayanan bagusnya pelayanan bagusnya pelayanan",
            &WordCloudConfig::default(),
        );
        assert_eq!(result, pairs(&[("bagusnya", 3), ("pelayanan", 3)]));
    }

    #[test]
    fn stopword_only_text_has_no_terms() {
        assert!(terms("the of and 17 2024", &WordCloudConfig::default()).is_empty());
        assert!(terms("", &WordCloudConfig::default()).is_empty());
    }

    #[test]
    fn min_word_length_drops_short_words() {
        let config = WordCloudConfig {
            min_word_length: 3,
            collocations: false,
            ..WordCloudConfig::default()
        };
        assert_eq!(terms("rp ok brics", &config), pairs(&[("brics", 1)]));
    }

    #[test]
    fn independent_words_score_low() {
        assert_eq!(collocation_score(1.0, 1.0, 1.0, 1.0), 0.0);
        assert!(collocation_score(1.0, 30.0, 1.0, 63.0) < 30.0);
        assert!(collocation_score(30.0, 30.0, 30.0, 63.0) > 30.0);
    }
}
