//! Curated keyword lists per category.
//!
//! Keywords are stored lowercase and matched by substring containment against
//! a normalized description, so multi-word phrases like "cà phê" match inside
//! "cà phê sáng". Each keyword contributes at most one hit no matter how
//! often it repeats.

use sodu_core::Category;
use std::collections::HashMap;

/// Immutable keyword configuration, built once at startup.
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Build a table from explicit per-category lists. Keywords are
    /// lowercased on the way in.
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(category, words)| {
                let words = words.into_iter().map(|w| w.to_lowercase()).collect();
                (category, words)
            })
            .collect();
        Self { entries }
    }

    /// The built-in Vietnamese/English lists for the six curated categories.
    pub fn builtin() -> Self {
        let list = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        Self::new(vec![
            (
                Category::FoodDining,
                list(&[
                    "ăn", "cơm", "phở", "bún", "cháo", "cà phê", "coffee", "trà sữa",
                    "nhà hàng", "quán", "food", "restaurant", "lunch", "dinner",
                    "highland", "kfc", "lotteria", "pizza", "grabfood",
                ]),
            ),
            (
                Category::Transportation,
                list(&[
                    "xăng", "grab", "taxi", "xe buýt", "xe ôm", "gửi xe", "vé xe",
                    "tàu xe", "bus", "parking", "petrol", "gojek", "xe máy", "rửa xe",
                ]),
            ),
            (
                Category::Shopping,
                list(&[
                    "mua", "shopee", "lazada", "tiki", "shop", "mall", "siêu thị",
                    "quần áo", "giày", "mỹ phẩm", "đơn hàng", "order", "tạp hóa",
                ]),
            ),
            (
                Category::Entertainment,
                list(&[
                    "phim", "cinema", "cgv", "karaoke", "game", "nhạc", "concert",
                    "netflix", "spotify", "bia", "beer", "bar", "bowling",
                ]),
            ),
            (
                Category::BillsUtilities,
                list(&[
                    "tiền điện", "tiền nước", "internet", "wifi", "điện thoại",
                    "hóa đơn", "bill", "tiền nhà", "thuê nhà", "truyền hình",
                    "phí dịch vụ", "fpt", "viettel", "vnpt",
                ]),
            ),
            (
                Category::Healthcare,
                list(&[
                    "khám", "bệnh viện", "thuốc", "nhà thuốc", "bác sĩ", "nha khoa",
                    "hospital", "pharmacy", "clinic", "vaccine", "xét nghiệm", "y tế",
                ]),
            ),
        ])
    }

    /// Categories present in this table, in entry order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    /// Count distinct keyword hits per category in already-normalized text.
    ///
    /// Every table category is present in the result, zero counts included,
    /// so callers can take a maximum without special-casing missing keys.
    pub fn score(&self, normalized: &str) -> HashMap<Category, usize> {
        self.entries
            .iter()
            .map(|(category, words)| {
                let hits = words.iter().filter(|w| normalized.contains(w.as_str())).count();
                (*category, hits)
            })
            .collect()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}
