use std::collections::BTreeMap;

use console::style;
use tabled::{settings::{Alignment, Style}, Table, Tabled};

use crate::models::{
    catalog::{Catalog, ItemKind},
    pizza::Pizza,
};

#[derive(Tabled)]
struct MenuTableRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct StockTableRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Remaining")]
    remaining: u32,
}

pub fn format_menu_table(catalog: &Catalog) -> String {
    let rows: Vec<MenuTableRow> = catalog
        .items()
        .iter()
        .map(|item| MenuTableRow {
            key: item.key.clone(),
            name: item.name.clone(),
            kind: item.kind.to_string(),
            price: item.price.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

/// Renders a stock snapshot in catalog order; ids the catalog doesn't know are listed last.
pub fn format_stock_table(catalog: &Catalog, snapshot: &BTreeMap<String, u32>) -> String {
    let mut rows: Vec<StockTableRow> = catalog
        .items()
        .iter()
        .filter_map(|item| {
            snapshot.get(&item.id).map(|remaining| StockTableRow {
                name: item.name.clone(),
                remaining: *remaining,
            })
        })
        .collect();

    rows.extend(
        snapshot
            .iter()
            .filter(|(id, _)| catalog.find(id).is_none())
            .map(|(id, remaining)| StockTableRow {
                name: id.clone(),
                remaining: *remaining,
            }),
    );

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

pub fn format_stock_json(snapshot: &BTreeMap<String, u32>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Numbered prompt lines for one kind of item, followed by the closing option.
pub fn format_item_menu(catalog: &Catalog, kind: ItemKind, closing: (&str, &str)) -> String {
    let mut output = String::new();
    for item in catalog.items().iter().filter(|item| item.kind == kind) {
        output.push_str(&format!("{}. {} ({})\n", item.key, item.name, item.price));
    }
    output.push_str(&format!("{}. {}\n", closing.0, closing.1));
    output
}

pub fn format_order_summary(pizza: &Pizza) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}: {}\n", style("Description").bold(), pizza.description()));
    output.push_str(&format!("{}: {}\n", style("Total cost").bold(), pizza.cost()));
    output
}
