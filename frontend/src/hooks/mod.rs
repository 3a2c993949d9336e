pub mod use_coupon_filter;
