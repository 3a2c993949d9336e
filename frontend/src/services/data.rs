use shared::{coupons_from_json, Coupon};

use crate::services::logging::Logger;

/// The coupon catalog shipped with the app, compiled into the binary.
const COUPON_DATA: &str = include_str!("../../data/coupons.json");

/// Decode the bundled coupon dataset. The data is static and trusted;
/// if it somehow fails to decode we log and fall back to an empty
/// catalog rather than panicking the whole app.
pub fn load_coupons() -> Vec<Coupon> {
    match coupons_from_json(COUPON_DATA) {
        Ok(coupons) => coupons,
        Err(e) => {
            Logger::error_with_component("data", &format!("Failed to decode coupon data: {}", e));
            Vec::new()
        }
    }
}
