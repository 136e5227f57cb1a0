//! The closed set of spending category labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending categories a transaction can be labeled with.
///
/// The first six carry curated keyword lists and heuristic rules. Education,
/// Travel and Investment are part of the label set but no rule targets them,
/// so the classifier never produces them on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Investment")]
    Investment,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }

    /// Short identifier usable in feature names and config keys.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::FoodDining => "food_dining",
            Category::Transportation => "transportation",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::BillsUtilities => "bills_utilities",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Investment => "investment",
            Category::Other => "other",
        }
    }

    /// Every category, in declaration order.
    pub fn all() -> [Category; 10] {
        [
            Category::FoodDining,
            Category::Transportation,
            Category::Shopping,
            Category::Entertainment,
            Category::BillsUtilities,
            Category::Healthcare,
            Category::Education,
            Category::Travel,
            Category::Investment,
            Category::Other,
        ]
    }

    /// The six categories with curated keyword lists, in rule order.
    pub fn curated() -> [Category; 6] {
        [
            Category::FoodDining,
            Category::Transportation,
            Category::Shopping,
            Category::Entertainment,
            Category::BillsUtilities,
            Category::Healthcare,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matches_serialized_form() {
        for category in Category::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_round_trip() {
        let parsed: Category = serde_json::from_str("\"Bills & Utilities\"").unwrap();
        assert_eq!(parsed, Category::BillsUtilities);
    }

    #[test]
    fn test_curated_is_prefix_of_all() {
        let all = Category::all();
        for (i, category) in Category::curated().iter().enumerate() {
            assert_eq!(*category, all[i]);
        }
    }
}
