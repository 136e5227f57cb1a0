//! Aggregate predictions into a per-category spending summary.

use crate::classifier::CategoryClassifier;
use serde::Serialize;
use sodu_core::{Category, Transaction};
use std::collections::HashMap;

/// Spending rolled up under one predicted category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub transaction_count: usize,
    pub total_amount: f64,
    pub mean_confidence: f64,
}

/// Classify a batch and group it by predicted category, sorted by absolute
/// spend descending.
pub fn summarize(classifier: &CategoryClassifier, txns: &[Transaction]) -> Vec<CategorySummary> {
    let mut groups: HashMap<Category, Vec<(f64, f64)>> = HashMap::new();

    for txn in txns {
        let prediction = classifier.predict(txn);
        groups
            .entry(prediction.category)
            .or_default()
            .push((txn.amount, prediction.confidence));
    }

    let mut rows: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, items)| {
            let total: f64 = items.iter().map(|(amount, _)| amount).sum();
            let mean_confidence =
                items.iter().map(|(_, confidence)| confidence).sum::<f64>() / items.len() as f64;
            CategorySummary {
                category,
                transaction_count: items.len(),
                total_amount: total,
                mean_confidence,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_amount.abs().partial_cmp(&a.total_amount.abs()).unwrap());
    rows
}
