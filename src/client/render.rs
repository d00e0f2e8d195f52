//! Stateless view rendering: a pure function of state producing the page
//! markup. Re-rendering with identical state yields identical output;
//! expansion state is a CSS-class concern and every category starts
//! collapsed.

use crate::models::{CategorySummary, Item, Page};

use super::state::StateData;

/// Escape user-supplied text for embedding in markup
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole view for the current state
pub fn render(state: &StateData) -> String {
    match state.current_page {
        None => render_landing(),
        Some(page) => render_page(state, page),
    }
}

fn render_landing() -> String {
    let mut out = String::from("<div class=\"landing\">\n");
    for page in [Page::Personal, Page::Business, Page::Budget] {
        out.push_str(&format!(
            "  <button class=\"page-btn\" data-page=\"{}\">{}</button>\n",
            page.as_str(),
            title_case(page.as_str())
        ));
    }
    out.push_str("</div>\n");
    out
}

fn render_page(state: &StateData, page: Page) -> String {
    let categories = state.categories_for(page);

    // totals are recomputed from the flat item list, not read from the
    // category records
    let page_total: f64 = categories
        .iter()
        .map(|c| c.category.total_of(&state.items))
        .sum();

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"page\" data-page=\"{}\">\n",
        page.as_str()
    ));
    out.push_str(&format!(
        "  <header><h1>{}</h1><span class=\"total-cost\">K{:.2}</span></header>\n",
        title_case(page.as_str()),
        page_total
    ));
    out.push_str("  <button class=\"btn btn-primary add-category\">+ Add Category</button>\n");

    for summary in categories {
        out.push_str(&render_category(summary, &state.items));
    }

    out.push_str("</div>\n");
    out
}

fn render_category(summary: &CategorySummary, items: &[Item]) -> String {
    let category = &summary.category;
    let category_items: Vec<&Item> = items
        .iter()
        .filter(|i| i.category_id == category.id)
        .collect();
    let total: f64 = category_items.iter().map(|i| i.price).sum();

    let mut out = String::new();
    out.push_str("  <div class=\"category\">\n");
    out.push_str(&format!(
        "    <div class=\"category-header\"><b>{}</b> <span class=\"category-total\">(K{:.2})</span><span class=\"category-arrow\">&#9654;</span></div>\n",
        escape_html(&category.name),
        total
    ));
    out.push_str("    <div class=\"category-items\">\n");

    if category_items.is_empty() {
        out.push_str(
            "      <div class=\"empty-message\">No items yet. Click 'Add Item' to get started!</div>\n",
        );
    } else {
        for item in &category_items {
            out.push_str(&render_item(item));
        }
    }

    out.push_str(&format!(
        "      <button class=\"btn btn-small btn-primary add-item\" data-category=\"{}\">+ Add Item</button>\n",
        category.id
    ));
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out
}

fn render_item(item: &Item) -> String {
    let checked = if item.is_done() { " checked" } else { "" };
    let label_class = if item.is_done() {
        "item-label checked"
    } else {
        "item-label"
    };

    let mut out = String::new();
    out.push_str(&format!("      <div class=\"item\" data-id=\"{}\">\n", item.id));
    out.push_str(&format!(
        "        <input type=\"checkbox\" class=\"item-checkbox\"{}>\n",
        checked
    ));
    out.push_str(&format!(
        "        <span class=\"{}\">{}</span>\n",
        label_class,
        escape_html(&item.name)
    ));
    if item.price > 0.0 {
        out.push_str(&format!(
            "        <span class=\"item-price\">K{:.2}</span>\n",
            item.price
        ));
    }
    out.push_str("        <button class=\"delete-btn\">&#x2715;</button>\n");
    out.push_str("      </div>\n");
    out
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
