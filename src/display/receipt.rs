//! Receipt extraction display formatting

use crate::receipt::ReceiptExtraction;

/// Format an extraction result, including the low-confidence warning
pub fn format_extraction(extraction: &ReceiptExtraction) -> String {
    let mut output = String::new();

    let merchant = extraction.merchant_name.as_deref().unwrap_or("(not found)");
    output.push_str(&format!("Merchant:   {}\n", merchant));

    match extraction.total {
        Some(total) => output.push_str(&format!("Total:      {}\n", total)),
        None => output.push_str("Total:      (not found)\n"),
    }

    match extraction.date {
        Some(date) => output.push_str(&format!("Date:       {}\n", date.format("%Y-%m-%d"))),
        None => output.push_str("Date:       (not found)\n"),
    }

    output.push_str(&format!(
        "Confidence: {:.0}%\n",
        extraction.confidence * 100.0
    ));

    if !extraction.line_items.is_empty() {
        output.push_str("\nLine items:\n");
        for item in &extraction.line_items {
            let description = item.description.as_deref().unwrap_or("(no description)");
            let price = item
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            let quantity = item
                .quantity
                .map(|q| format!(" x{}", q))
                .unwrap_or_default();
            output.push_str(&format!("  {:30} {:>10}{}\n", description, price, quantity));
        }
    }

    if extraction.needs_confirmation() {
        output.push_str(
            "\nLow confidence: please double-check these fields before applying.\n",
        );
    }

    output
}
