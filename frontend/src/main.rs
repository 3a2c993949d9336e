use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{CouponCard, SearchBar};
use hooks::use_coupon_filter::use_coupon_filter;

#[function_component(App)]
fn app() -> Html {
    let filter = use_coupon_filter();
    let state = filter.state;
    let actions = filter.actions;

    let on_clear_filters = {
        let clear_filters = actions.clear_filters.clone();
        Callback::from(move |_| clear_filters.emit(()))
    };

    html! {
        <>
            <header class="hero">
                <div class="hero-badge">{"🎟️"}</div>
                <h1 class="hero-title">{"Coupon Finder"}</h1>
                <p class="hero-tagline">
                    {"Discover amazing deals and save money on your favorite brands"}
                </p>
                <div class="hero-stats">
                    <span class="stat">
                        {"🔥 "}{state.total_count}{" Active Deals"}
                    </span>
                    <span class="stat-divider"></span>
                    <span class="stat">{"⭐ Updated Daily"}</span>
                </div>
            </header>

            <main class="main">
                <SearchBar
                    query={state.query.clone()}
                    on_query_change={actions.set_query.clone()}
                    categories={state.categories.clone()}
                    selected_category={state.selected_category.clone()}
                    on_category_change={actions.set_selected_category.clone()}
                />

                <div class="results-bar">
                    <div class="results-count">
                        {"Showing "}<strong>{state.result_count}</strong>
                        {" of "}<strong>{state.total_count}</strong>{" coupons"}
                    </div>
                    {if state.filters_active {
                        html! {
                            <button class="clear-filters-btn" onclick={on_clear_filters.clone()}>
                                {"✕ Clear filters"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                {if state.visible_coupons.is_empty() {
                    html! {
                        <div class="empty-state">
                            <div class="empty-state-icon">{"🔍"}</div>
                            <h2>{"No coupons found"}</h2>
                            <p>{"Try adjusting your search or filters"}</p>
                            <button class="show-all-btn" onclick={on_clear_filters}>
                                {"Show all coupons"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="coupon-grid">
                            {for state.visible_coupons.iter().map(|coupon| {
                                html! { <CouponCard key={coupon.id} coupon={coupon.clone()} /> }
                            })}
                        </div>
                    }
                }}
            </main>

            <footer class="footer">
                <p>{"Made with 💜 • Coupon Finder © 2026"}</p>
            </footer>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
