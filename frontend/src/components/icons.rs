/// Emoji shown on a coupon card for a known store, with a generic tag
/// as the fallback for everything else.
pub fn store_emoji(store: &str) -> &'static str {
    match store {
        "Amazon" => "📦",
        "Nike" => "👟",
        "Uber Eats" => "🍔",
        "Best Buy" => "🖥️",
        "Target" => "🎯",
        "Starbucks" => "☕",
        "Adidas" => "⚽",
        "DoorDash" => "🚗",
        "Apple" => "🍎",
        "H&M" => "👗",
        _ => "🏷️",
    }
}

/// Emoji shown on a category chip
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Electronics" => "🖥️",
        "Fashion" => "👗",
        "Food" => "🍔",
        _ => "🏷️",
    }
}
