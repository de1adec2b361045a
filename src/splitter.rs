//! Core bill-splitting calculation.
//!
//! A single-pass, side-effect-free pipeline: format the date, total the
//! items, round the tip, allocate per-person shares, then reconcile
//! rounding drift so the per-person amounts sum exactly to the bill total.

use crate::bill::{BillInput, BillItem, BillOutput, PersonItem};
use crate::error::{Result, SplitError};
use crate::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};

/// Splits a bill into per-person settlement amounts.
///
/// Shared items are divided evenly among every person named on the bill,
/// personal items are charged to their owner, and each person's pre-tip
/// share is scaled by the bill-wide tip rate. After per-person rounding
/// to cents, any residual against the bill total lands on the first
/// person in scan order, so the output amounts always sum exactly to
/// `total_amount`.
///
/// Fails only when the bill date is not in `YYYY-MM-DD` form.
pub fn split_bill(input: &BillInput) -> Result<BillOutput> {
    let date = format_date(&input.date)?;
    let sub_total = calculate_sub_total(&input.items);
    let tip = calculate_tip(sub_total, input.tip_percentage);
    let total_amount = sub_total + tip;
    let mut items = calculate_items(&input.items, input.tip_percentage);
    adjust_amounts(total_amount, &mut items);

    Ok(BillOutput {
        date,
        location: input.location.clone(),
        sub_total,
        tip,
        total_amount,
        items,
    })
}

/// Reformats a `YYYY-MM-DD` date as `YYYY年M月D日`.
///
/// Components are rendered as plain decimal integers, so `2024-03-21`
/// becomes `2024年3月21日` with no zero padding.
pub fn format_date(date: &str) -> Result<String> {
    let parts: Vec<u32> = date
        .split('-')
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| SplitError::InvalidDate(date.to_string()))?;

    match parts.as_slice() {
        [year, month, day] => Ok(format!("{year}年{month}月{day}日")),
        _ => Err(SplitError::InvalidDate(date.to_string())),
    }
}

/// Sums all item prices, shared and personal alike.
fn calculate_sub_total(items: &[BillItem]) -> Money {
    items.iter().map(BillItem::price).sum()
}

/// Computes the tip, rounded half-up to the nearest 10-cent unit.
fn calculate_tip(sub_total: Money, tip_percentage: Decimal) -> Money {
    let raw = sub_total.as_decimal() * tip_percentage / Decimal::ONE_HUNDRED;
    Money::new(raw.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// Collects distinct person names in first-seen scan order.
///
/// Shared items contribute no names; a bill with only shared items
/// yields an empty list.
fn scan_persons(items: &[BillItem]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for person in items.iter().filter_map(BillItem::person) {
        if !names.contains(&person) {
            names.push(person);
        }
    }
    names
}

/// Allocates each person's rounded share of the bill, tip included.
///
/// Each person pays their own personal items plus an equal fraction of
/// every shared item, all scaled by `1 + tip_percentage / 100` and
/// rounded half-up to cents.
fn calculate_items(items: &[BillItem], tip_percentage: Decimal) -> Vec<PersonItem> {
    let names = scan_persons(items);
    if names.is_empty() {
        return Vec::new();
    }

    let shared_total: Decimal = items
        .iter()
        .filter(|item| item.person().is_none())
        .map(|item| item.price().as_decimal())
        .sum();
    let shared_share = shared_total / Decimal::from(names.len());
    let tip_factor = Decimal::ONE + tip_percentage / Decimal::ONE_HUNDRED;

    names
        .into_iter()
        .map(|name| {
            let personal: Decimal = items
                .iter()
                .filter(|item| item.person() == Some(name))
                .map(|item| item.price().as_decimal())
                .sum();

            PersonItem {
                name: name.to_string(),
                amount: Money::new((personal + shared_share) * tip_factor),
            }
        })
        .collect()
}

/// Adds the rounding residual to the first person so the amounts sum
/// exactly to the bill total. No-op for an empty person list.
fn adjust_amounts(total_amount: Money, items: &mut [PersonItem]) {
    let allocated: Money = items.iter().map(|item| item.amount).sum();
    let residual = total_amount - allocated;
    if !residual.is_zero() {
        if let Some(first) = items.first_mut() {
            first.amount += residual;
        }
    }
}
