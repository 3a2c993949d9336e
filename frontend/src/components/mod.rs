pub mod coupon_card;
pub mod icons;
pub mod search_bar;

pub use coupon_card::CouponCard;
pub use search_bar::SearchBar;
