use crate::core::settlement::{PersonExpense, ReceiptItem};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::*;
use std::collections::HashMap;

const SURCHARGE_ROW_NAME: &'static str = "<surcharge>";
const TOTAL_ROW_NAME: &'static str = "<total>";
const CONTRIBUTION_ROW_NAME: &'static str = "<contribution>";
const REMAINING_ROW_NAME: &'static str = "<remaining>";

// One row per receipt item with each included person's share, then summary
// rows for the surcharge, totals, contributions and what everyone still
// owes after settling. Amounts are rounded to 2 decimal places for display
// only; the engine never rounds.
pub fn create_table(
    items: &[ReceiptItem],
    expenses: &[PersonExpense],
    receipt_total: Option<Decimal>,
) -> Table {
    let mut header: Vec<String> = expenses.iter().map(|e| e.person_name.clone()).collect();
    header.insert(0, "Item".into());
    header.push("Total".into());

    let share_lookup: Vec<HashMap<&str, Decimal>> = expenses
        .iter()
        .map(|expense| {
            expense
                .items
                .iter()
                .map(|item| (item.id.as_str(), item.price))
                .collect()
        })
        .collect();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header);

    for (idx, column) in table.column_iter_mut().enumerate() {
        if idx != 0 {
            column.set_cell_alignment(comfy_table::CellAlignment::Right);
        }
    }

    for item in items {
        let mut row: Vec<String> = vec![item.name.clone()];
        for shares in share_lookup.iter() {
            let share = shares.get(item.id.as_str()).copied().unwrap_or(Decimal::ZERO);
            row.push(share.round_dp(2).to_string());
        }
        row.push(item.price.round_dp(2).to_string());
        table.add_row(row);
    }

    let items_total: Decimal = items.iter().map(|item| item.price).sum();
    let surcharge = receipt_total
        .map(|total| (total - items_total).max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO);
    if surcharge > Decimal::ZERO {
        let mut row: Vec<String> = vec![SURCHARGE_ROW_NAME.into()];
        for (expense, shares) in expenses.iter().zip(share_lookup.iter()) {
            let itemized: Decimal = shares.values().copied().sum();
            row.push((expense.total - itemized).round_dp(2).to_string());
        }
        row.push(surcharge.round_dp(2).to_string());
        add_colored_row(&mut table, row, comfy_table::Color::DarkGrey);
    }

    let mut total_row: Vec<String> = vec![TOTAL_ROW_NAME.into()];
    for expense in expenses.iter() {
        total_row.push(expense.total.round_dp(2).to_string());
    }
    total_row.push((items_total + surcharge).round_dp(2).to_string());
    add_colored_row(&mut table, total_row, comfy_table::Color::Green);

    let mut contribution_row: Vec<String> = vec![CONTRIBUTION_ROW_NAME.into()];
    let contribution_total: Decimal = expenses.iter().map(|e| e.contribution).sum();
    for expense in expenses.iter() {
        contribution_row.push(expense.contribution.round_dp(2).to_string());
    }
    contribution_row.push(contribution_total.round_dp(2).to_string());
    add_colored_row(&mut table, contribution_row, comfy_table::Color::DarkGrey);

    let mut remaining_row: Vec<String> = vec![REMAINING_ROW_NAME.into()];
    let remaining_total: Decimal = expenses.iter().map(|e| e.remaining).sum();
    for expense in expenses.iter() {
        remaining_row.push(expense.remaining.round_dp(2).to_string());
    }
    remaining_row.push(remaining_total.round_dp(2).to_string());
    add_colored_row(&mut table, remaining_row, comfy_table::Color::Yellow);

    table
}

fn add_colored_row(table: &mut Table, row: Vec<String>, fg_col: comfy_table::Color) {
    let row: Vec<Cell> = row.iter().map(|x| Cell::new(x).fg(fg_col)).collect();
    table.add_row(row);
}

pub fn display_settlement(
    items: &[ReceiptItem],
    expenses: &[PersonExpense],
    receipt_total: Option<Decimal>,
    currency: Option<&str>,
) {
    let table = create_table(items, expenses, receipt_total);
    if let Some(currency) = currency {
        print!("\nAmounts in {}.", currency);
    }
    print!("\n{table}\n");
}
