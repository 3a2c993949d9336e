use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::icons::category_icon;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub on_query_change: Callback<String>,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub on_category_change: Callback<String>,
}

/// Search input plus the category chip row. The empty-string category
/// is the "All Deals" chip that clears the category filter.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_query_change.emit(input.value());
        })
    };

    let on_clear_query = {
        let on_query_change = props.on_query_change.clone();
        Callback::from(move |_| on_query_change.emit(String::new()))
    };

    let category_chip = |category: &str, label: Html| {
        let selected = props.selected_category == category;
        let on_category_change = props.on_category_change.clone();
        let category = category.to_string();
        html! {
            <button
                class={classes!("category-chip", selected.then_some("selected"))}
                onclick={Callback::from(move |_| on_category_change.emit(category.clone()))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="search-bar">
            <div class="search-input-wrapper">
                <span class="search-icon">{"🔍"}</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by store, code, or description..."
                    value={props.query.clone()}
                    oninput={on_input}
                />
                {if !props.query.is_empty() {
                    html! {
                        <button class="clear-input-btn" onclick={on_clear_query}>{"✕"}</button>
                    }
                } else {
                    html! {}
                }}
            </div>

            <div class="category-chips">
                {category_chip("", html! { <>{"✨ "}{"All Deals"}</> })}
                {for props.categories.iter().map(|category| {
                    category_chip(
                        category,
                        html! { <>{category_icon(category)}{" "}{category.clone()}</> },
                    )
                })}
            </div>
        </div>
    }
}
