//! Fixed-order numeric feature encoding of a transaction.
//!
//! Vector position is the only identity a downstream consumer has, so
//! `feature_names` and `extract` must agree in length and order at all times.

use crate::analyzer::TextFeatureAnalyzer;
use anyhow::Result;
use regex::Regex;
use sodu_core::{Category, TimeOfDay, Transaction};

/// Amount bucket thresholds in VND.
const HIGH_AMOUNT: f64 = 100_000.0;
const VERY_HIGH_AMOUNT: f64 = 500_000.0;
const SMALL_AMOUNT: f64 = 20_000.0;

/// Words longer than this count as "long" in the word-length feature.
const LONG_WORD_CHARS: usize = 5;

/// Common single-word stems checked for presence in the normalized text.
const WORD_STEMS: [&str; 20] = [
    "mua", "tiền", "trả", "phí", "ăn", "uống", "đi", "xe", "nhà", "điện",
    "nước", "học", "thuốc", "vé", "chợ", "quà", "pay", "online", "store", "card",
];

/// Turns a transaction into a fixed-length numeric vector for downstream
/// scorers. Stateless apart from its keyword table and compiled regexes.
pub struct FeatureExtractor {
    analyzer: TextFeatureAnalyzer,
    digits: Regex,
    phone: Regex,
}

impl FeatureExtractor {
    pub fn new() -> Result<Self> {
        Self::with_analyzer(TextFeatureAnalyzer::new())
    }

    pub fn with_analyzer(analyzer: TextFeatureAnalyzer) -> Result<Self> {
        Ok(Self {
            analyzer,
            digits: Regex::new(r"\d")?,
            phone: Regex::new(r"\d{10,11}")?,
        })
    }

    /// Feature names, in the exact order `extract` emits values.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = vec![
            "amount_log".into(),
            "amount_high".into(),
            "amount_very_high".into(),
            "amount_small".into(),
            "hour_norm".into(),
            "day_of_week_norm".into(),
            "day_of_month_norm".into(),
            "is_morning".into(),
            "is_midday".into(),
            "is_afternoon".into(),
            "is_evening".into(),
            "is_night".into(),
            "is_weekend".into(),
            "is_income".into(),
            "is_expense".into(),
        ];
        for category in Category::curated() {
            names.push(format!("kw_{}", category.slug()));
        }
        for stem in WORD_STEMS {
            names.push(format!("word_{stem}"));
        }
        names.push("word_count".into());
        names.push("char_count".into());
        names.push("long_word_count".into());
        names.push("has_numbers".into());
        names.push("has_phone".into());
        names
    }

    /// Encode a transaction. Deterministic; same order as `feature_names`.
    ///
    /// Word and long-word counts are taken over the normalized text;
    /// `char_count` is the raw description's character count.
    pub fn extract(&self, txn: &Transaction) -> Vec<f64> {
        let normalized = TextFeatureAnalyzer::normalize(&txn.description);
        let keyword_hits = self.analyzer.keywords().score(&normalized);
        let day_part = TimeOfDay::from_hour(txn.hour());

        let mut values = vec![
            (txn.amount + 1.0).ln(),
            flag(txn.amount > HIGH_AMOUNT),
            flag(txn.amount > VERY_HIGH_AMOUNT),
            flag(txn.amount < SMALL_AMOUNT),
            f64::from(txn.hour()) / 23.0,
            f64::from(txn.day_of_week()) / 6.0,
            f64::from(txn.day_of_month()) / 31.0,
            flag(day_part == TimeOfDay::Morning),
            flag(day_part == TimeOfDay::Midday),
            flag(day_part == TimeOfDay::Afternoon),
            flag(day_part == TimeOfDay::Evening),
            flag(day_part == TimeOfDay::Night),
            flag(txn.falls_on_weekend()),
            flag(txn.is_income()),
            flag(txn.is_expense()),
        ];
        for category in Category::curated() {
            let hits = keyword_hits.get(&category).copied().unwrap_or(0);
            values.push(flag(hits > 0));
        }
        for stem in WORD_STEMS {
            values.push(flag(normalized.contains(stem)));
        }
        let words: Vec<&str> = normalized.split_whitespace().collect();
        values.push(words.len() as f64);
        values.push(txn.description.chars().count() as f64);
        values.push(words.iter().filter(|w| w.chars().count() > LONG_WORD_CHARS).count() as f64);
        values.push(flag(self.digits.is_match(&normalized)));
        values.push(flag(self.phone.is_match(&normalized)));
        values
    }
}

fn flag(on: bool) -> f64 {
    if on { 1.0 } else { 0.0 }
}
