use shared::Coupon;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::store_emoji;
use crate::services::clipboard;
use crate::services::date_utils::{format_expiry, is_expiring_soon, today};

#[derive(Properties, PartialEq)]
pub struct CouponCardProps {
    pub coupon: Coupon,
}

/// One coupon in the results grid: store header, discount, description,
/// the code with a copy-to-clipboard button, and the expiry row.
#[function_component(CouponCard)]
pub fn coupon_card(props: &CouponCardProps) -> Html {
    let copied = use_state(|| false);

    let copy_code = {
        let copied = copied.clone();
        let code = props.coupon.code.clone();

        Callback::from(move |_| {
            let copied = copied.clone();
            let code = code.clone();

            spawn_local(async move {
                if clipboard::write_text(&code).await {
                    copied.set(true);

                    // Revert the button label after 2 seconds
                    let copied = copied.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(2000).await;
                        copied.set(false);
                    });
                }
            });
        })
    };

    let expiring_soon = is_expiring_soon(&props.coupon.expiry, today());

    html! {
        <div class="coupon-card">
            <div class="card-header">
                <div class="store-info">
                    <div class="store-emoji">{store_emoji(&props.coupon.store)}</div>
                    <div>
                        <h3 class="store-name">{&props.coupon.store}</h3>
                        <span class="category-badge">{&props.coupon.category}</span>
                    </div>
                </div>
                <div class="discount">{&props.coupon.discount}</div>
            </div>

            <p class="description">{&props.coupon.description}</p>

            <div class="code-panel">
                <div class="code-info">
                    <p class="code-label">{"Coupon Code"}</p>
                    <p class="code-value">{&props.coupon.code}</p>
                </div>
                <button
                    class={classes!("copy-btn", (*copied).then_some("copied"))}
                    onclick={copy_code}
                >
                    {if *copied { "✓ Copied!" } else { "Copy" }}
                </button>
            </div>

            <div class={classes!("expiry", expiring_soon.then_some("expiring-soon"))}>
                {if expiring_soon {
                    html! { <span class="expiry-warning">{"⚠️ Expires soon: "}</span> }
                } else {
                    html! { <span>{"Valid until "}</span> }
                }}
                <span>{format_expiry(&props.coupon.expiry)}</span>
            </div>
        </div>
    }
}
