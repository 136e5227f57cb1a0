//! Best-effort category prediction with a confidence score.

use crate::analyzer::TextFeatureAnalyzer;
use crate::rules::{RULES, Signals};
use chrono::Local;
use serde::Serialize;
use sodu_core::{Category, Transaction, is_weekend};

/// Confidence of the fallback prediction when no rule fires.
pub const DEFAULT_CONFIDENCE: f64 = 0.3;
/// No prediction ever reports more than this.
pub const CONFIDENCE_CEILING: f64 = 0.95;

const KEYWORD_BOOST: f64 = 0.1;
const VAGUE_PENALTY: f64 = 0.7;
const MIN_DESCRIPTIVE_CHARS: usize = 5;

/// Where the weekend test of the evening-entertainment heuristic reads its
/// date from.
///
/// `SystemClock` reproduces the historical behavior of checking whether
/// *today* is a weekend instead of the transaction's own date. Correcting
/// that silently would change results for recorded data, so the clock stays
/// the default and `TransactionDate` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendSource {
    #[default]
    SystemClock,
    TransactionDate,
}

/// A category label plus the classifier's self-reported certainty in it.
/// Confidence is a heuristic in [0, 0.95], not a calibrated probability.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Prediction {
    pub category: Category,
    pub confidence: f64,
}

/// Stateless rule-based classifier. It reads only immutable tables, so it is
/// safe to call from any number of threads without coordination. Every input
/// yields a prediction; the low-confidence `Other` fallback is a normal
/// outcome, not an error.
pub struct CategoryClassifier {
    analyzer: TextFeatureAnalyzer,
    weekend_source: WeekendSource,
}

impl CategoryClassifier {
    pub fn new() -> Self {
        Self::with_analyzer(TextFeatureAnalyzer::new())
    }

    pub fn with_analyzer(analyzer: TextFeatureAnalyzer) -> Self {
        Self {
            analyzer,
            weekend_source: WeekendSource::default(),
        }
    }

    /// Override where the weekend flag comes from.
    pub fn weekend_from(mut self, source: WeekendSource) -> Self {
        self.weekend_source = source;
        self
    }

    /// Predict a category and confidence for one transaction.
    ///
    /// The best-scoring rule wins by strictly greater base confidence (ties
    /// go to the earlier rule); the result is boosted by strong keyword
    /// evidence and discounted for short or self-described-vague text.
    /// Callers validate `amount`/`date` upstream; non-finite amounts flow
    /// through the comparisons unchecked.
    pub fn predict(&self, txn: &Transaction) -> Prediction {
        let normalized = TextFeatureAnalyzer::normalize(&txn.description);
        let keyword_hits = self.analyzer.keywords().score(&normalized);
        let weekend = match self.weekend_source {
            WeekendSource::SystemClock => is_weekend(Local::now().date_naive()),
            WeekendSource::TransactionDate => is_weekend(txn.date.date()),
        };
        let signals = Signals {
            normalized: &normalized,
            keyword_hits: &keyword_hits,
            amount: txn.amount,
            hour: txn.hour(),
            day_of_month: txn.day_of_month(),
            weekend,
        };

        let mut best = Prediction {
            category: Category::Other,
            confidence: DEFAULT_CONFIDENCE,
        };
        for rule in &RULES {
            if (rule.predicate)(&signals) && rule.base_confidence > best.confidence {
                best = Prediction {
                    category: rule.category,
                    confidence: rule.base_confidence,
                };
            }
        }

        let max_hits = keyword_hits.values().copied().max().unwrap_or(0);
        if max_hits > 1 {
            best.confidence = (best.confidence + KEYWORD_BOOST).min(CONFIDENCE_CEILING);
        }

        if txn.description.chars().count() < MIN_DESCRIPTIVE_CHARS
            || normalized.contains("other")
            || normalized.contains("khác")
        {
            best.confidence *= VAGUE_PENALTY;
        }

        best.confidence = best.confidence.clamp(0.0, CONFIDENCE_CEILING);
        best
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn txn(description: &str, amount: f64, date: NaiveDateTime) -> Transaction {
        Transaction::new(description, amount, date)
    }

    // 2026-08-04 is a Tuesday, 2026-08-08 a Saturday.
    fn weekday_at(h: u32) -> NaiveDateTime {
        at(2026, 8, 4, h)
    }

    #[test]
    fn test_deterministic() {
        let classifier = CategoryClassifier::new();
        let t = txn("Cà phê Highland Coffee", 45_000.0, weekday_at(11));
        let first = classifier.predict(&t);
        for _ in 0..3 {
            assert_eq!(classifier.predict(&t), first);
        }
    }

    #[test]
    fn test_default_fallback_with_short_text() {
        let classifier = CategoryClassifier::new();
        // No keyword hit, amount and hour outside every numeric window;
        // three chars also triggers the short-text discount: 0.3 * 0.7.
        let p = classifier.predict(&txn("zzz", 1.0, weekday_at(3)));
        assert_eq!(p.category, Category::Other);
        assert!((p.confidence - 0.21).abs() < 1e-9);
    }

    #[test]
    fn test_default_fallback_without_penalty() {
        let classifier = CategoryClassifier::new();
        let p = classifier.predict(&txn("zzzzzz zzz", 1.0, weekday_at(3)));
        assert_eq!(p.category, Category::Other);
        assert!((p.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_dominance_food() {
        let classifier = CategoryClassifier::new();
        let p = classifier.predict(&txn("Cà phê Highland Coffee", 45_000.0, weekday_at(11)));
        assert_eq!(p.category, Category::FoodDining);
        // "cà phê" + "highland" + "coffee" hit, so the boost applies
        assert!(p.confidence >= 0.8);
        assert!((p.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_bills_window() {
        let classifier = CategoryClassifier::new();
        let p = classifier.predict(&txn("Tiền điện tháng 11", 450_000.0, at(2026, 11, 5, 10)));
        assert_eq!(p.category, Category::BillsUtilities);
        assert!(p.confidence >= 0.8);
    }

    #[test]
    fn test_healthcare_beats_food_window() {
        let classifier = CategoryClassifier::new();
        // Lunch-hour amount also satisfies the food window, but the
        // healthcare rule carries the higher base confidence.
        let p = classifier.predict(&txn("khám tổng quát", 300_000.0, weekday_at(12)));
        assert_eq!(p.category, Category::Healthcare);
        assert!((p.confidence - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_earlier_rule() {
        let classifier = CategoryClassifier::new();
        // Food and Bills both match at base 0.8; Food sits earlier in the
        // table and strictly-greater replacement keeps it.
        let p = classifier.predict(&txn("cơm tiền điện", 150_000.0, at(2026, 8, 5, 12)));
        assert_eq!(p.category, Category::FoodDining);
    }

    #[test]
    fn test_short_description_penalty_ratio() {
        let classifier = CategoryClassifier::new();
        let short = classifier.predict(&txn("ăn", 35_000.0, weekday_at(12)));
        let long = classifier.predict(&txn("ăn trưa văn phòng", 35_000.0, weekday_at(12)));
        assert_eq!(short.category, long.category);
        assert!((short.confidence - long.confidence * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_vague_marker_penalty() {
        let classifier = CategoryClassifier::new();
        let plain = classifier.predict(&txn("chi tiêu linh tinh", 1.0, weekday_at(3)));
        let marked = classifier.predict(&txn("chi tiêu khác linh tinh", 1.0, weekday_at(3)));
        assert!((marked.confidence - plain.confidence * 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_entertainment_weekend_from_transaction_date() {
        let classifier = CategoryClassifier::new().weekend_from(WeekendSource::TransactionDate);
        // Saturday 21:00, no keywords, outside the food/transport windows.
        let p = classifier.predict(&txn("zzzzzz zz", 120_000.0, at(2026, 8, 8, 21)));
        assert_eq!(p.category, Category::Entertainment);
        assert!((p.confidence - 0.65).abs() < 1e-9);

        // Same spend on a Tuesday falls through to Other.
        let p = classifier.predict(&txn("zzzzzz zz", 120_000.0, at(2026, 8, 4, 21)));
        assert_eq!(p.category, Category::Other);
    }

    #[test]
    fn test_confidence_never_exceeds_ceiling() {
        let classifier = CategoryClassifier::new().weekend_from(WeekendSource::TransactionDate);
        let descriptions = [
            "",
            "zzz",
            "ăn cơm phở bún cà phê coffee nhà hàng",
            "khám bệnh viện nhà thuốc bác sĩ vaccine",
            "mua shopee lazada tiki đơn hàng",
            "tiền điện tiền nước internet hóa đơn bill",
            "grab taxi xăng gửi xe parking",
            "phim cgv karaoke netflix spotify beer",
        ];
        let amounts = [0.0, 1.0, 19_000.0, 45_000.0, 120_000.0, 600_000.0, 3_000_000.0];
        for d in descriptions {
            for &a in &amounts {
                for h in [3, 8, 12, 19, 21] {
                    for day in [4, 8] {
                        let p = classifier.predict(&txn(d, a, at(2026, 8, day, h)));
                        assert!(
                            p.confidence <= CONFIDENCE_CEILING + 1e-12,
                            "{d} {a} {h} {day} -> {}",
                            p.confidence
                        );
                        assert!(p.confidence >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_amount_still_classifies() {
        let classifier = CategoryClassifier::new();
        // NaN fails every amount comparison, so only keyword paths fire.
        let p = classifier.predict(&txn("zzzzzz zzz", f64::NAN, weekday_at(12)));
        assert_eq!(p.category, Category::Other);
        assert!((p.confidence - 0.3).abs() < 1e-9);

        let p = classifier.predict(&txn("ăn cơm văn phòng", f64::NAN, weekday_at(12)));
        assert_eq!(p.category, Category::FoodDining);
    }

    #[test]
    fn test_prediction_serializes_with_labels() {
        let classifier = CategoryClassifier::new();
        let p = classifier.predict(&txn("Tiền điện tháng 11", 450_000.0, at(2026, 11, 5, 10)));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["category"], "Bills & Utilities");
        assert_eq!(json["confidence"], 0.8);
    }

    #[test]
    fn test_custom_keyword_table() {
        use crate::keywords::KeywordTable;

        let table = KeywordTable::new(vec![(
            Category::FoodDining,
            vec!["bánh mì".to_string()],
        )]);
        let classifier =
            CategoryClassifier::with_analyzer(TextFeatureAnalyzer::with_table(table));
        let p = classifier.predict(&txn("bánh mì chảo", 2_000.0, weekday_at(3)));
        assert_eq!(p.category, Category::FoodDining);
        assert!((p.confidence - 0.8).abs() < 1e-9);
    }
}
