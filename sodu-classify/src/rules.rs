//! Declarative heuristic rules, one per curated category.
//!
//! Each rule is a plain (category, predicate, base confidence) record over a
//! per-call signal bundle. Predicates are independent; selection happens in
//! the classifier by strictly-greater confidence, so equal-confidence ties
//! resolve to the earlier table entry.

use sodu_core::Category;
use std::collections::HashMap;

/// Signals computed once per prediction and shared by every predicate.
pub struct Signals<'a> {
    /// Normalized description
    pub normalized: &'a str,
    /// Distinct keyword hits per curated category
    pub keyword_hits: &'a HashMap<Category, usize>,
    /// Amount in VND
    pub amount: f64,
    /// Hour of day, 0-23
    pub hour: u32,
    /// Day of month, 1-31
    pub day_of_month: u32,
    /// Weekend flag (source is a classifier policy decision)
    pub weekend: bool,
}

impl Signals<'_> {
    fn hits(&self, category: Category) -> usize {
        self.keyword_hits.get(&category).copied().unwrap_or(0)
    }
}

/// A single category rule.
pub struct Rule {
    pub category: Category,
    pub base_confidence: f64,
    pub predicate: fn(&Signals) -> bool,
}

/// The rule table, in evaluation order.
pub const RULES: [Rule; 6] = [
    Rule {
        category: Category::FoodDining,
        base_confidence: 0.8,
        predicate: food_dining,
    },
    Rule {
        category: Category::Transportation,
        base_confidence: 0.75,
        predicate: transportation,
    },
    Rule {
        category: Category::Shopping,
        base_confidence: 0.7,
        predicate: shopping,
    },
    Rule {
        category: Category::Entertainment,
        base_confidence: 0.65,
        predicate: entertainment,
    },
    Rule {
        category: Category::BillsUtilities,
        base_confidence: 0.8,
        predicate: bills_utilities,
    },
    Rule {
        category: Category::Healthcare,
        base_confidence: 0.85,
        predicate: healthcare,
    },
];

/// Keyword hit, or a meal-sized amount at lunch/dinner hours.
fn food_dining(s: &Signals) -> bool {
    s.hits(Category::FoodDining) > 0
        || ((15_000.0..=500_000.0).contains(&s.amount) && matches!(s.hour, 11..=14 | 17..=20))
}

/// Keyword hit, a fuel-sized amount mentioning "xăng", or a fare-sized
/// amount during commute hours.
fn transportation(s: &Signals) -> bool {
    s.hits(Category::Transportation) > 0
        || ((50_000.0..=2_000_000.0).contains(&s.amount) && s.normalized.contains("xăng"))
        || ((10_000.0..=200_000.0).contains(&s.amount) && matches!(s.hour, 6..=9 | 17..=19))
}

/// Keyword hit, or a daytime purchase mentioning "mua"/"shop".
fn shopping(s: &Signals) -> bool {
    s.hits(Category::Shopping) > 0
        || (s.amount >= 20_000.0
            && matches!(s.hour, 9..=22)
            && (s.normalized.contains("mua") || s.normalized.contains("shop")))
}

/// Keyword hit, or a weekend-evening spend.
fn entertainment(s: &Signals) -> bool {
    s.hits(Category::Entertainment) > 0
        || (matches!(s.hour, 18..=23) && s.weekend && s.amount >= 50_000.0)
}

/// Keyword hit, or an early-month bill-sized amount mentioning "tiền"/"bill".
fn bills_utilities(s: &Signals) -> bool {
    s.hits(Category::BillsUtilities) > 0
        || ((100_000.0..=5_000_000.0).contains(&s.amount)
            && (1..=10).contains(&s.day_of_month)
            && (s.normalized.contains("tiền") || s.normalized.contains("bill")))
}

/// Keyword hit, or a clinic-sized amount mentioning "khám"/"bệnh".
fn healthcare(s: &Signals) -> bool {
    s.hits(Category::Healthcare) > 0
        || ((20_000.0..=2_000_000.0).contains(&s.amount)
            && (s.normalized.contains("khám") || s.normalized.contains("bệnh")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals<'a>(
        normalized: &'a str,
        hits: &'a HashMap<Category, usize>,
        amount: f64,
        hour: u32,
        day_of_month: u32,
        weekend: bool,
    ) -> Signals<'a> {
        Signals {
            normalized,
            keyword_hits: hits,
            amount,
            hour,
            day_of_month,
            weekend,
        }
    }

    fn no_hits() -> HashMap<Category, usize> {
        Category::curated().into_iter().map(|c| (c, 0)).collect()
    }

    #[test]
    fn test_food_lunch_window() {
        let hits = no_hits();
        assert!(food_dining(&signals("zzz", &hits, 45_000.0, 12, 15, false)));
        assert!(food_dining(&signals("zzz", &hits, 45_000.0, 18, 15, false)));
        assert!(!food_dining(&signals("zzz", &hits, 45_000.0, 15, 15, false)));
        assert!(!food_dining(&signals("zzz", &hits, 10_000.0, 12, 15, false)));
    }

    #[test]
    fn test_food_keyword_overrides_window() {
        let mut hits = no_hits();
        hits.insert(Category::FoodDining, 1);
        assert!(food_dining(&signals("bún chả", &hits, 5_000.0, 3, 15, false)));
    }

    #[test]
    fn test_transport_fuel_mention() {
        let hits = no_hits();
        assert!(transportation(&signals("đổ xăng", &hits, 80_000.0, 15, 15, false)));
        // fuel amount out of range
        assert!(!transportation(&signals("đổ xăng", &hits, 3_000_000.0, 15, 15, false)));
    }

    #[test]
    fn test_transport_commute_window() {
        let hits = no_hits();
        assert!(transportation(&signals("zzz", &hits, 30_000.0, 8, 15, false)));
        assert!(transportation(&signals("zzz", &hits, 30_000.0, 18, 15, false)));
        assert!(!transportation(&signals("zzz", &hits, 30_000.0, 12, 15, false)));
        assert!(!transportation(&signals("zzz", &hits, 500_000.0, 8, 15, false)));
    }

    #[test]
    fn test_shopping_needs_verb() {
        let hits = no_hits();
        assert!(shopping(&signals("mua đồ", &hits, 150_000.0, 14, 15, false)));
        assert!(shopping(&signals("shop quan ao", &hits, 150_000.0, 14, 15, false)));
        assert!(!shopping(&signals("zzz", &hits, 150_000.0, 14, 15, false)));
        assert!(!shopping(&signals("mua đồ", &hits, 150_000.0, 23, 15, false)));
    }

    #[test]
    fn test_entertainment_weekend_evening() {
        let hits = no_hits();
        assert!(entertainment(&signals("zzz", &hits, 100_000.0, 21, 15, true)));
        assert!(!entertainment(&signals("zzz", &hits, 100_000.0, 21, 15, false)));
        assert!(!entertainment(&signals("zzz", &hits, 100_000.0, 12, 15, true)));
        assert!(!entertainment(&signals("zzz", &hits, 30_000.0, 21, 15, true)));
    }

    #[test]
    fn test_bills_early_month() {
        let hits = no_hits();
        assert!(bills_utilities(&signals("tiền điện tháng 8", &hits, 450_000.0, 10, 5, false)));
        assert!(bills_utilities(&signals("internet bill", &hits, 250_000.0, 10, 3, false)));
        // late in the month
        assert!(!bills_utilities(&signals("tiền điện tháng 8", &hits, 450_000.0, 10, 25, false)));
        assert!(!bills_utilities(&signals("zzz", &hits, 450_000.0, 10, 5, false)));
    }

    #[test]
    fn test_healthcare_mentions() {
        let hits = no_hits();
        assert!(healthcare(&signals("khám tổng quát", &hits, 500_000.0, 9, 15, false)));
        assert!(healthcare(&signals("viện phí bệnh viện", &hits, 1_500_000.0, 9, 15, false)));
        assert!(!healthcare(&signals("khám tổng quát", &hits, 5_000_000.0, 9, 15, false)));
    }

    #[test]
    fn test_rule_table_order_and_confidence() {
        let categories: Vec<Category> = RULES.iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::curated().to_vec());
        for rule in &RULES {
            assert!(rule.base_confidence > 0.0 && rule.base_confidence <= 0.95);
        }
    }
}
