use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// One priced line on the bill. `price` is the line total, already multiplied
// by quantity upstream; `quantity` is informational and never reapplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    // Amount already paid toward the bill, before settling.
    #[serde(default)]
    pub contribution: Decimal,
}

// Assignment of one item to the set of people sharing it. At most one
// allocation per item id; a later entry for the same item replaces the
// earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAllocation {
    pub item_id: String,
    pub person_ids: Vec<String>,
}

// Settlement output for one person. Each entry in `items` carries that
// person's share of the item as its `price`, not the item's full price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonExpense {
    pub person_id: String,
    pub person_name: String,
    pub items: Vec<ReceiptItem>,
    pub total: Decimal,
    pub contribution: Decimal,
    pub remaining: Decimal,
}

// Settles a shared bill: splits each allocated item evenly across the people
// sharing it, apportions any gap between the stated receipt total and the
// itemized total as a proportional surcharge, then nets out contributions and
// redistributes surplus from people who overpaid to people who still owe.
//
// Pure function of its inputs; identical inputs produce identical output.
// Allocations referencing unknown item or person ids are skipped without
// error - receipt data comes from an imperfect extractor, and a partial
// answer beats a crash. Output order follows `people`; people with no
// allocated items and no contribution are omitted.
pub fn settle(
    items: &[ReceiptItem],
    people: &[Person],
    allocations: &[ItemAllocation],
    receipt_total: Option<Decimal>,
) -> Vec<PersonExpense> {
    let mut allocation_map: HashMap<&str, Vec<&str>> = HashMap::new();
    for allocation in allocations {
        // personIds is a set: duplicates would double-charge on the divisor.
        let mut person_ids: Vec<&str> = Vec::new();
        for person_id in &allocation.person_ids {
            if !person_ids.contains(&person_id.as_str()) {
                person_ids.push(person_id);
            }
        }
        allocation_map.insert(&allocation.item_id, person_ids);
    }

    let mut expenses: Vec<PersonExpense> = people
        .iter()
        .map(|person| PersonExpense {
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            items: vec![],
            total: Decimal::ZERO,
            contribution: person.contribution,
            remaining: Decimal::ZERO,
        })
        .collect();

    let index_by_person_id: HashMap<&str, usize> = people
        .iter()
        .enumerate()
        .map(|(idx, person)| (person.id.as_str(), idx))
        .collect();

    // Phase 1: split each allocated item's price evenly among its sharers.
    // The divisor is the full sharer set; an unknown person id in it forfeits
    // that share rather than inflating everyone else's.
    for item in items {
        let person_ids = match allocation_map.get(item.id.as_str()) {
            Some(person_ids) if !person_ids.is_empty() => person_ids,
            _ => continue,
        };
        let share = item.price / Decimal::from(person_ids.len());
        for person_id in person_ids {
            if let Some(&idx) = index_by_person_id.get(person_id) {
                let expense = &mut expenses[idx];
                expense.items.push(ReceiptItem {
                    price: share,
                    ..item.clone()
                });
                expense.total += share;
            }
        }
    }

    // Phase 2: anything the receipt total states beyond the itemized sum is
    // an un-itemized surcharge (tax, service fee), apportioned in proportion
    // to each person's share of the itemized total. The ratio base includes
    // unallocated items; with an itemized total of zero there is no ratio and
    // the surcharge is dropped.
    let items_total: Decimal = items.iter().map(|item| item.price).sum();
    let surcharge = receipt_total
        .map(|total| (total - items_total).max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO);
    if surcharge > Decimal::ZERO && items_total > Decimal::ZERO {
        for expense in expenses.iter_mut() {
            if expense.total > Decimal::ZERO {
                expense.total += surcharge * expense.total / items_total;
            }
        }
    }

    for expense in expenses.iter_mut() {
        expense.remaining = expense.total - expense.contribution;
    }

    // Phase 3: surplus from people who contributed more than their share is
    // split evenly across the people who still owe. Nobody gets cash back:
    // an owing person's remaining is floored at zero, and every overpaid
    // person ends at exactly zero.
    let total_excess: Decimal = expenses
        .iter()
        .filter(|expense| expense.remaining < Decimal::ZERO)
        .map(|expense| -expense.remaining)
        .sum();
    let owing_count = expenses
        .iter()
        .filter(|expense| expense.remaining > Decimal::ZERO)
        .count();
    if total_excess > Decimal::ZERO && owing_count > 0 {
        let excess_per_person = total_excess / Decimal::from(owing_count);
        for expense in expenses.iter_mut() {
            if expense.remaining > Decimal::ZERO {
                expense.remaining = (expense.remaining - excess_per_person).max(Decimal::ZERO);
            } else if expense.remaining < Decimal::ZERO {
                expense.remaining = Decimal::ZERO;
            }
        }
    }

    expenses
        .into_iter()
        .filter(|expense| expense.total > Decimal::ZERO || expense.contribution > Decimal::ZERO)
        .collect()
}
