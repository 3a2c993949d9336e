use shared::{Coupon, CouponCatalog};
use yew::prelude::*;

use crate::services::data::load_coupons;

/// Snapshot of the catalog's derived state for the current render.
#[derive(Clone, PartialEq)]
pub struct CouponFilterState {
    pub visible_coupons: Vec<Coupon>,
    pub categories: Vec<String>,
    pub query: String,
    pub selected_category: String,
    pub result_count: usize,
    pub total_count: usize,
    pub filters_active: bool,
}

pub struct UseCouponFilterResult {
    pub state: CouponFilterState,
    pub actions: UseCouponFilterActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCouponFilterActions {
    pub set_query: Callback<String>,
    pub set_selected_category: Callback<String>,
    pub clear_filters: Callback<()>,
}

/// Owns the [`CouponCatalog`] for the session and exposes its setters as
/// callbacks. The whole catalog lives in a single `use_state` so a
/// clear-filters update replaces both filter fields atomically; derived
/// values are recomputed from the catalog on every render.
#[hook]
pub fn use_coupon_filter() -> UseCouponFilterResult {
    let catalog = use_state(|| CouponCatalog::new(load_coupons()));

    let set_query = use_callback(catalog.clone(), |query: String, catalog| {
        let mut next = (**catalog).clone();
        next.set_query(query);
        catalog.set(next);
    });

    let set_selected_category = use_callback(catalog.clone(), |category: String, catalog| {
        let mut next = (**catalog).clone();
        next.set_selected_category(category);
        catalog.set(next);
    });

    let clear_filters = use_callback(catalog.clone(), |_: (), catalog| {
        let mut next = (**catalog).clone();
        next.clear_filters();
        catalog.set(next);
    });

    let visible_coupons = catalog.visible_coupons();
    let state = CouponFilterState {
        result_count: visible_coupons.len(),
        total_count: catalog.total_count(),
        categories: catalog.categories(),
        query: catalog.filter().query.clone(),
        selected_category: catalog.filter().selected_category.clone(),
        filters_active: catalog.has_active_filter(),
        visible_coupons,
    };

    let actions = UseCouponFilterActions {
        set_query,
        set_selected_category,
        clear_filters,
    };

    UseCouponFilterResult { state, actions }
}
