//! Category classification from free-form text
//!
//! Two independent matchers: `classify` maps category-ish text (a CSV cell,
//! a user hint) onto the fixed category set, and `suggest_from_merchant`
//! guesses a category from a merchant name. Both return `None` rather than
//! guessing; callers supply the `Other` default.

use crate::models::Category;

/// Merchant-name substrings mapped to categories, checked in order.
///
/// First match wins, so more specific entries must precede broader ones
/// (several retail hints like "shop" and "store" would otherwise shadow
/// grocery chains).
const MERCHANT_HINTS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "starbucks",
            "mcdonald",
            "chipotle",
            "taco",
            "pizza",
            "cafe",
            "restaurant",
            "doordash",
            "ubereats",
        ],
    ),
    (
        Category::Groceries,
        &[
            "walmart",
            "costco",
            "traderjoe",
            "wholefoods",
            "aldi",
            "safeway",
            "kroger",
            "grocery",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "lyft", "shell", "chevron", "exxon", "gas", "fuel", "parking",
        ],
    ),
    (
        Category::Shopping,
        &["amazon", "target", "bestbuy", "ikea", "shop", "store"],
    ),
    (
        Category::Health,
        &["cvs", "walgreens", "pharmacy", "clinic", "hospital"],
    ),
    (
        Category::Utilities,
        &[
            "comcast", "verizon", "utility", "electric", "water", "internet",
        ],
    ),
    (
        Category::Entertainment,
        &["netflix", "spotify", "cinema", "movie", "theater"],
    ),
    (
        Category::Travel,
        &[
            "airbnb", "hilton", "marriott", "delta", "united", "southwest", "hotel", "airlines",
        ],
    ),
];

/// Lowercase and strip everything that is not alphanumeric
pub fn normalize_token(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Match free-form category text against known category ids and labels
///
/// Tries exact id, then exact label, then label-substring. Returns `None`
/// when nothing matches.
pub fn classify(raw: &str) -> Option<Category> {
    let token = normalize_token(raw);
    if token.is_empty() {
        return None;
    }

    if let Some(hit) = Category::ALL
        .iter()
        .find(|c| normalize_token(c.id()) == token)
    {
        return Some(*hit);
    }

    Category::ALL
        .iter()
        .find(|c| {
            let label = normalize_token(c.label());
            label == token || label.contains(&token)
        })
        .copied()
}

/// Suggest a category from a merchant name via the hint table
pub fn suggest_from_merchant(merchant_name: &str) -> Option<Category> {
    let norm = normalize_token(merchant_name);
    if norm.is_empty() {
        return None;
    }

    for (category, hints) in MERCHANT_HINTS {
        if hints.iter().any(|hint| norm.contains(hint)) {
            return Some(*category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_id() {
        assert_eq!(classify("groceries"), Some(Category::Groceries));
        assert_eq!(classify("  Transport "), Some(Category::Transport));
    }

    #[test]
    fn test_classify_label_forms() {
        assert_eq!(classify("Food & Dining"), Some(Category::Food));
        // substring of the label
        assert_eq!(classify("dining"), Some(Category::Food));
    }

    #[test]
    fn test_classify_unknown_is_none() {
        assert_eq!(classify("cryptocurrency"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn test_merchant_grocery_chains() {
        assert_eq!(
            suggest_from_merchant("TRADER JOE'S #552"),
            Some(Category::Groceries)
        );
        assert_eq!(
            suggest_from_merchant("Whole Foods Market"),
            Some(Category::Groceries)
        );
    }

    #[test]
    fn test_merchant_first_match_wins() {
        // "ubereats" appears in the food hints before "uber" in transport
        assert_eq!(suggest_from_merchant("UberEats SF"), Some(Category::Food));
        assert_eq!(suggest_from_merchant("UBER TRIP"), Some(Category::Transport));
    }

    #[test]
    fn test_merchant_unknown_is_none() {
        assert_eq!(suggest_from_merchant("Acme Widgets LLC"), None);
        assert_eq!(suggest_from_merchant(""), None);
    }
}
