//! Prompt assembly for the barista assistant.

use crate::models::{MenuItem, Workshop};

/// Brand persona placed at the top of every prompt.
pub const PERSONA: &str = r#"You are "Rabuste AI", the official AI barista and concierge for Rabuste Coffee,
a premium Robusta-only café blending coffee, art, and technology.

Rules:
- ONLY answer questions related to Rabuste Coffee.
- Recommend ONLY items present in the menu context.
- Talk about workshops ONLY from the workshop context.
- Never invent menu items, prices, or events.
- If a user asks something unrelated, reply politely:
  "I'm here to help you with Rabuste Coffee ☕."

Tone:
- Warm
- Premium
- Knowledgeable barista
- Friendly Indian café vibe"#;

pub const EMPTY_MENU_CONTEXT: &str = "(No menu items available.)";
pub const EMPTY_WORKSHOP_CONTEXT: &str = "(No active workshops.)";

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{:.0}", price)
    } else {
        format!("₹{:.2}", price)
    }
}

/// One line per menu item: `- name (category, subCategory) – ₹price: description`.
pub fn menu_context(items: &[MenuItem]) -> String {
    if items.is_empty() {
        return EMPTY_MENU_CONTEXT.to_string();
    }

    items
        .iter()
        .map(|item| {
            format!(
                "- {} ({}, {}) – {}: {}",
                item.name,
                item.category.as_str(),
                item.sub_category.as_str(),
                format_price(item.price),
                item.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per workshop: `- title (type) on d/m/yyyy: description`.
pub fn workshop_context(workshops: &[Workshop]) -> String {
    if workshops.is_empty() {
        return EMPTY_WORKSHOP_CONTEXT.to_string();
    }

    workshops
        .iter()
        .map(|w| {
            format!(
                "- {} ({}) on {}: {}",
                w.title,
                w.kind.as_str(),
                w.date.format("%-d/%-m/%Y"),
                w.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(menu: &str, workshops: &str, question: &str) -> String {
    format!(
        "{PERSONA}\n\nRabuste Menu:\n{menu}\n\nRabuste Workshops:\n{workshops}\n\nUser Question: {question}"
    )
}
