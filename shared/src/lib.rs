use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

/// A single coupon entry from the bundled catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Merchant display name
    pub store: String,
    /// Redeemable code string
    pub code: String,
    /// Human-readable discount description (e.g. "20% OFF"), never parsed
    pub discount: String,
    /// Free-text summary of the deal
    pub description: String,
    /// Expiry date in YYYY-MM-DD format
    pub expiry: String,
    /// Short label grouping coupons (e.g. "Electronics")
    pub category: String,
}

/// The two pieces of interactive filter state owned by the catalog.
///
/// The empty string is the "no filter" sentinel for `selected_category`:
/// it matches every category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Current search text, matched case-insensitively against store,
    /// code, and description
    pub query: String,
    /// Current category filter, compared case-sensitively against each
    /// coupon's category; empty means all categories pass
    pub selected_category: String,
}

impl FilterState {
    /// Whether either filter differs from its default
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.selected_category.is_empty()
    }
}

/// Collect the distinct category labels present in `coupons`, in order
/// of first occurrence. Empty input yields an empty list.
pub fn extract_categories(coupons: &[Coupon]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for coupon in coupons {
        if !categories.iter().any(|c| c == &coupon.category) {
            categories.push(coupon.category.clone());
        }
    }
    categories
}

/// Filter `coupons` down to the entries matching both the search query
/// and the selected category, preserving input order.
///
/// A coupon matches the search when the lowercased query is a substring
/// of its lowercased store, code, or description; an empty query matches
/// everything. Category matching is an exact, case-sensitive comparison,
/// with the empty string acting as the match-all sentinel.
pub fn filter_coupons(coupons: &[Coupon], query: &str, selected_category: &str) -> Vec<Coupon> {
    let needle = query.to_lowercase();
    coupons
        .iter()
        .filter(|coupon| {
            let matches_search = needle.is_empty()
                || coupon.store.to_lowercase().contains(&needle)
                || coupon.code.to_lowercase().contains(&needle)
                || coupon.description.to_lowercase().contains(&needle);

            let matches_category =
                selected_category.is_empty() || coupon.category == selected_category;

            matches_search && matches_category
        })
        .cloned()
        .collect()
}

/// The view controller for the coupon browser: an immutable record store
/// plus the current [`FilterState`], with every derived value recomputed
/// on demand so reads can never go stale.
///
/// The store is behind an `Rc` so UI layers can snapshot the whole
/// catalog cheaply (the frontend keeps it in component state and swaps
/// in a clone on every mutation).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponCatalog {
    coupons: Rc<Vec<Coupon>>,
    filter: FilterState,
}

impl CouponCatalog {
    /// Create a catalog over a fixed coupon list with default (inactive)
    /// filters.
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self {
            coupons: Rc::new(coupons),
            filter: FilterState::default(),
        }
    }

    /// Replace the search query unconditionally. Any string is valid,
    /// including empty.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Replace the selected category unconditionally. Unknown categories
    /// are not an error; they simply match nothing.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.filter.selected_category = category.into();
    }

    /// Reset both filters to their defaults in a single state update.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// The current filter state
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Whether any filter is currently active
    pub fn has_active_filter(&self) -> bool {
        self.filter.is_active()
    }

    /// The full, unfiltered record store
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Distinct categories in the store, first-seen order
    pub fn categories(&self) -> Vec<String> {
        extract_categories(&self.coupons)
    }

    /// The coupons matching the current filter state, in store order
    pub fn visible_coupons(&self) -> Vec<Coupon> {
        filter_coupons(
            &self.coupons,
            &self.filter.query,
            &self.filter.selected_category,
        )
    }

    /// Number of coupons matching the current filter state
    pub fn result_count(&self) -> usize {
        self.visible_coupons().len()
    }

    /// Total number of coupons in the store
    pub fn total_count(&self) -> usize {
        self.coupons.len()
    }
}

#[derive(Debug, Error)]
pub enum CouponDataError {
    #[error("failed to decode coupon data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a JSON array of coupons, as bundled in the frontend's data
/// asset. The data is trusted; no deduplication or validation beyond
/// what serde enforces.
pub fn coupons_from_json(json: &str) -> Result<Vec<Coupon>, CouponDataError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(id: u32, store: &str, code: &str, description: &str, category: &str) -> Coupon {
        Coupon {
            id,
            store: store.to_string(),
            code: code.to_string(),
            discount: "10% OFF".to_string(),
            description: description.to_string(),
            expiry: "2026-12-31".to_string(),
            category: category.to_string(),
        }
    }

    fn sample_coupons() -> Vec<Coupon> {
        vec![
            coupon(1, "Amazon", "SAVE10", "Save on all electronics", "Electronics"),
            coupon(2, "Nike", "RUN20", "Discount on running shoes", "Fashion"),
            coupon(3, "Best Buy", "TECH15", "Laptops and tablets", "Electronics"),
            coupon(4, "Starbucks", "BREW5", "Any grande drink", "Food"),
        ]
    }

    #[test]
    fn test_extract_categories_first_seen_order() {
        let categories = extract_categories(&sample_coupons());
        assert_eq!(categories, vec!["Electronics", "Fashion", "Food"]);
    }

    #[test]
    fn test_extract_categories_empty_input() {
        assert!(extract_categories(&[]).is_empty());
    }

    #[test]
    fn test_extract_categories_no_duplicates() {
        let coupons = sample_coupons();
        let categories = extract_categories(&coupons);
        for category in &categories {
            assert_eq!(categories.iter().filter(|c| *c == category).count(), 1);
            assert!(coupons.iter().any(|c| &c.category == category));
        }
    }

    #[test]
    fn test_filter_no_filters_returns_everything() {
        let coupons = sample_coupons();
        assert_eq!(filter_coupons(&coupons, "", ""), coupons);
    }

    #[test]
    fn test_filter_empty_store() {
        assert!(filter_coupons(&[], "amazon", "").is_empty());
    }

    #[test]
    fn test_filter_query_matches_store_case_insensitively() {
        let coupons = sample_coupons();
        let upper = filter_coupons(&coupons, "AMAZON", "");
        let lower = filter_coupons(&coupons, "amazon", "");
        assert_eq!(upper, lower);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, 1);
    }

    #[test]
    fn test_filter_query_matches_code_and_description() {
        let coupons = sample_coupons();

        // Code match
        let by_code = filter_coupons(&coupons, "run20", "");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].store, "Nike");

        // Description match
        let by_description = filter_coupons(&coupons, "laptops", "");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].store, "Best Buy");
    }

    #[test]
    fn test_filter_category_exact_match_only() {
        let coupons = sample_coupons();
        let electronics = filter_coupons(&coupons, "", "Electronics");
        assert_eq!(
            electronics.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        // Category matching is case-sensitive, unlike search
        assert!(filter_coupons(&coupons, "", "electronics").is_empty());
    }

    #[test]
    fn test_filter_unknown_category_yields_empty() {
        assert!(filter_coupons(&sample_coupons(), "", "Travel").is_empty());
    }

    #[test]
    fn test_filter_both_predicates_must_hold() {
        // "save10" matches the Amazon coupon's code, but Amazon is not
        // in the Fashion category, so the result is empty
        assert!(filter_coupons(&sample_coupons(), "save10", "Fashion").is_empty());
    }

    #[test]
    fn test_filter_no_match_query() {
        assert!(filter_coupons(&sample_coupons(), "zzz", "").is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_is_subsequence() {
        let coupons = sample_coupons();
        let result = filter_coupons(&coupons, "o", "");
        let mut last_index = 0;
        for item in &result {
            let index = coupons.iter().position(|c| c.id == item.id).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_filter_idempotent() {
        let coupons = sample_coupons();
        let once = filter_coupons(&coupons, "e", "Electronics");
        let twice = filter_coupons(&once, "e", "Electronics");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_catalog_defaults_show_everything() {
        let catalog = CouponCatalog::new(sample_coupons());
        assert!(!catalog.has_active_filter());
        assert_eq!(catalog.visible_coupons(), sample_coupons());
        assert_eq!(catalog.result_count(), 4);
        assert_eq!(catalog.total_count(), 4);
    }

    #[test]
    fn test_catalog_set_query() {
        let mut catalog = CouponCatalog::new(sample_coupons());
        catalog.set_query("nike");
        assert!(catalog.has_active_filter());
        assert_eq!(catalog.result_count(), 1);
        assert_eq!(catalog.visible_coupons()[0].store, "Nike");
        assert_eq!(catalog.total_count(), 4);
    }

    #[test]
    fn test_catalog_set_selected_category() {
        let mut catalog = CouponCatalog::new(sample_coupons());
        catalog.set_selected_category("Food");
        assert_eq!(catalog.result_count(), 1);
        assert_eq!(catalog.visible_coupons()[0].store, "Starbucks");
    }

    #[test]
    fn test_catalog_derived_reads_track_state_changes() {
        let mut catalog = CouponCatalog::new(sample_coupons());
        catalog.set_query("amazon");
        assert_eq!(catalog.result_count(), 1);

        // Changing the query must be reflected immediately, never a
        // stale result from the previous state
        catalog.set_query("zzz");
        assert_eq!(catalog.result_count(), 0);
        catalog.set_query("");
        assert_eq!(catalog.result_count(), 4);
    }

    #[test]
    fn test_catalog_clear_filters_resets_both() {
        let mut catalog = CouponCatalog::new(sample_coupons());
        catalog.set_query("save10");
        catalog.set_selected_category("Fashion");
        assert_eq!(catalog.result_count(), 0);

        catalog.clear_filters();
        assert!(!catalog.has_active_filter());
        assert_eq!(catalog.filter(), &FilterState::default());
        assert_eq!(catalog.visible_coupons(), sample_coupons());
    }

    #[test]
    fn test_catalog_categories() {
        let catalog = CouponCatalog::new(sample_coupons());
        assert_eq!(catalog.categories(), vec!["Electronics", "Fashion", "Food"]);
    }

    #[test]
    fn test_coupons_from_json() {
        let json = r#"[
            {
                "id": 1,
                "store": "Amazon",
                "code": "SAVE10",
                "discount": "10% OFF",
                "description": "Save on all electronics",
                "expiry": "2026-12-31",
                "category": "Electronics"
            }
        ]"#;

        let coupons = coupons_from_json(json).unwrap();
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].store, "Amazon");
        assert_eq!(coupons[0].category, "Electronics");

        assert!(coupons_from_json("not json").is_err());
    }
}
