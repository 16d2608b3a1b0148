//! Sentence-level BLEU scoring of the abbreviation expansion.
//!
//! Quantifies how much expansion altered the clinical notes: single
//! reference, uniform 1..4-gram weights, clipped modified precision, brevity
//! penalty, no smoothing. Any zero n-gram precision zeroes the whole score,
//! so texts shorter than four tokens always score 0.0 even when unchanged.

use std::collections::HashMap;

use mrc_model::{CellValue, Table};
use mrc_standards::columns;

const MAX_ORDER: usize = 4;
const WEIGHT: f64 = 1.0 / MAX_ORDER as f64;

fn ngram_counts<'a>(tokens: &'a [&'a str], order: usize) -> HashMap<&'a [&'a str], usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= order {
        for window in tokens.windows(order) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

/// Modified n-gram precision: hypothesis n-gram counts clipped by the
/// reference counts, over the total hypothesis n-grams. Zero when the
/// hypothesis has no n-grams of this order.
fn modified_precision(reference: &[&str], hypothesis: &[&str], order: usize) -> f64 {
    let reference_counts = ngram_counts(reference, order);
    let hypothesis_counts = ngram_counts(hypothesis, order);
    let mut matched = 0usize;
    let mut total = 0usize;
    for (ngram, count) in &hypothesis_counts {
        total += *count;
        matched += (*count).min(reference_counts.get(ngram).copied().unwrap_or(0));
    }
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64
}

fn brevity_penalty(reference_len: usize, hypothesis_len: usize) -> f64 {
    if hypothesis_len > reference_len {
        1.0
    } else if hypothesis_len == 0 {
        0.0
    } else {
        (1.0 - reference_len as f64 / hypothesis_len as f64).exp()
    }
}

/// BLEU score of `hypothesis` against a single `reference`, both
/// whitespace-tokenized. Range 0.0..=1.0.
pub fn sentence_bleu(reference: &str, hypothesis: &str) -> f64 {
    let reference: Vec<&str> = reference.split_whitespace().collect();
    let hypothesis: Vec<&str> = hypothesis.split_whitespace().collect();
    let mut log_sum = 0.0;
    for order in 1..=MAX_ORDER {
        let precision = modified_precision(&reference, &hypothesis, order);
        if precision <= 0.0 {
            return 0.0;
        }
        log_sum += WEIGHT * precision.ln();
    }
    brevity_penalty(reference.len(), hypothesis.len()) * log_sum.exp()
}

/// Text a cell contributes to scoring. Missing cells become the literal
/// token "nan": the source fed its missing marker through string formatting
/// before tokenizing, and that quirk is reproduced rather than special-cased
/// (two missing notes therefore score 0.0, not 1.0).
fn scored_text(cell: &CellValue) -> &str {
    cell.as_text().unwrap_or("nan")
}

/// Per-row BLEU between original and expanded clinical notes.
///
/// The scores are transient reporting data and are never materialized as a
/// table column, so the final duplicate pass compares rows over the output
/// column set only.
pub fn score_expansion_fidelity(table: &Table) -> Vec<f64> {
    let (Some(original_idx), Some(expanded_idx)) = (
        table.column_index(columns::CLINICAL_NOTES),
        table.column_index(columns::EXPANDED_CLINICAL_NOTES),
    ) else {
        return Vec::new();
    };
    table
        .rows
        .iter()
        .map(|row| sentence_bleu(scored_text(&row[original_idx]), scored_text(&row[expanded_idx])))
        .collect()
}

/// Mean score rounded to 4 decimal digits; 0.0 for an empty row set.
pub fn mean_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (mean * 10_000.0).round() / 10_000.0
}
