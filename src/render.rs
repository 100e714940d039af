use crate::models::Property;
use crate::pipeline::ViewMode;

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 32;

fn card_line(prop: &Property) -> String {
    let title = if prop.title.is_empty() {
        prop.id.as_str()
    } else {
        prop.title.as_str()
    };
    format!("{} · {} · {} ", title, prop.bhk_label(), prop.price)
}

fn amenity_summary(prop: &Property) -> String {
    let mut parts = Vec::new();
    if prop.gym {
        parts.push("gym");
    }
    if prop.parking {
        parts.push("parking");
    }
    if parts.is_empty() {
        "no amenities".to_string()
    } else {
        parts.join(", ")
    }
}

/// Render the current page of listing cards as text
pub fn render_page(items: &[&Property], mode: ViewMode) -> String {
    match mode {
        ViewMode::Grid => render_grid(items),
        ViewMode::List => render_list(items),
    }
}

fn render_grid(items: &[&Property]) -> String {
    let mut out = String::new();
    for row in items.chunks(GRID_COLUMNS) {
        for prop in row {
            let mut cell = card_line(prop);
            cell.truncate(CARD_WIDTH);
            out.push_str(&format!("{:<width$}| ", cell, width = CARD_WIDTH));
        }
        out.push('\n');
    }
    out
}

fn render_list(items: &[&Property]) -> String {
    let mut out = String::new();
    for prop in items {
        out.push_str(&card_line(prop));
        out.push('\n');
        if !prop.address.is_empty() {
            out.push_str(&format!("    {}\n", prop.address));
        }
        out.push_str(&format!("    {}\n", amenity_summary(prop)));
    }
    out
}
