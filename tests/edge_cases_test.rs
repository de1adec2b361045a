//! Edge case tests for the bill-splitting calculation.
//!
//! These tests drive the library API directly with bills designed to hit
//! the allocation and reconciliation corners.

use bill_splitter::{split_bill, BillInput, BillItem, Money};

fn shared(name: &str, price: &str) -> BillItem {
    BillItem::Shared {
        name: name.to_string(),
        price: price.parse().unwrap(),
    }
}

fn personal(name: &str, price: &str, person: &str) -> BillItem {
    BillItem::Personal {
        name: name.to_string(),
        price: price.parse().unwrap(),
        person: person.to_string(),
    }
}

fn bill(tip: &str, items: Vec<BillItem>) -> BillInput {
    BillInput {
        date: "2024-03-21".to_string(),
        location: "開心小館".to_string(),
        tip_percentage: tip.parse().unwrap(),
        items,
    }
}

fn allocated_total(output: &bill_splitter::BillOutput) -> Money {
    output.items.iter().map(|item| item.amount).sum()
}

// ==================== EMPTY AND DEGENERATE BILLS ====================

#[test]
fn test_empty_bill_produces_zero_totals() {
    let output = split_bill(&bill("10", Vec::new())).unwrap();

    assert_eq!(output.sub_total, Money::ZERO);
    assert_eq!(output.tip, Money::ZERO);
    assert_eq!(output.total_amount, Money::ZERO);
    assert!(output.items.is_empty());
}

#[test]
fn test_shared_only_bill_keeps_totals_without_rows() {
    let output = split_bill(&bill("15", vec![shared("大盤", "80")])).unwrap();

    assert!(output.items.is_empty());
    assert_eq!(output.sub_total.to_string(), "80");
    assert_eq!(output.tip.to_string(), "12");
    assert_eq!(output.total_amount.to_string(), "92");
}

#[test]
fn test_zero_tip_keeps_totals_at_subtotal() {
    let output = split_bill(&bill(
        "0",
        vec![personal("A", "50", "Alice"), personal("B", "30", "Bob")],
    ))
    .unwrap();

    assert_eq!(output.tip, Money::ZERO);
    assert_eq!(output.total_amount.to_string(), "80");
    assert_eq!(output.items[0].amount.to_string(), "50");
    assert_eq!(output.items[1].amount.to_string(), "30");
}

// ==================== ALLOCATION ====================

#[test]
fn test_single_person_absorbs_all_shared_items() {
    let output = split_bill(&bill(
        "10",
        vec![
            shared("A", "60"),
            shared("B", "40"),
            personal("C", "25", "Alice"),
        ],
    ))
    .unwrap();

    assert_eq!(output.items.len(), 1);
    assert_eq!(output.items[0].name, "Alice");
    assert_eq!(output.items[0].amount.to_string(), "137.5");
    assert_eq!(output.total_amount.to_string(), "137.5");
}

#[test]
fn test_repeated_personal_items_accumulate() {
    let output = split_bill(&bill(
        "0",
        vec![
            personal("A", "10", "Alice"),
            personal("B", "20", "Alice"),
            personal("C", "30", "Alice"),
        ],
    ))
    .unwrap();

    assert_eq!(output.items.len(), 1);
    assert_eq!(output.items[0].amount.to_string(), "60");
}

#[test]
fn test_shared_split_is_independent_of_personal_spend() {
    // Alice orders far more, yet both owe the same half of the platter.
    let output = split_bill(&bill(
        "0",
        vec![
            shared("拼盤", "30"),
            personal("A", "90", "Alice"),
            personal("B", "10", "Bob"),
        ],
    ))
    .unwrap();

    assert_eq!(output.items[0].amount.to_string(), "105");
    assert_eq!(output.items[1].amount.to_string(), "25");
}

#[test]
fn test_person_named_only_once_despite_many_items() {
    let output = split_bill(&bill(
        "0",
        vec![
            personal("A", "10", "Bob"),
            personal("B", "20", "Alice"),
            personal("C", "5", "Bob"),
            personal("D", "5", "Alice"),
        ],
    ))
    .unwrap();

    let names: Vec<&str> = output.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["Bob", "Alice"]);
}

// ==================== RECONCILIATION ====================

#[test]
fn test_residual_cent_goes_to_first_person() {
    let output = split_bill(&bill(
        "0",
        vec![
            shared("A", "100"),
            personal("B", "0", "Alice"),
            personal("C", "0", "Bob"),
            personal("D", "0", "Carol"),
        ],
    ))
    .unwrap();

    assert_eq!(output.items[0].amount.to_string(), "33.34");
    assert_eq!(output.items[1].amount.to_string(), "33.33");
    assert_eq!(output.items[2].amount.to_string(), "33.33");
    assert_eq!(allocated_total(&output), output.total_amount);
}

#[test]
fn test_seven_way_split_reconciles_exactly() {
    let people: Vec<BillItem> = ["A", "B", "C", "D", "E", "F", "G"]
        .iter()
        .map(|person| personal("茶", "0", person))
        .collect();
    let mut items = vec![shared("鍋", "10")];
    items.extend(people);

    let output = split_bill(&bill("0", items)).unwrap();

    // 10 / 7 rounds up to 1.43 per head, overshooting by a cent.
    assert_eq!(output.items[0].amount.to_string(), "1.42");
    for item in &output.items[1..] {
        assert_eq!(item.amount.to_string(), "1.43");
    }
    assert_eq!(allocated_total(&output), output.total_amount);
}

#[test]
fn test_amounts_always_sum_to_total() {
    let bills = vec![
        bill(
            "10",
            vec![
                shared("A", "99.99"),
                personal("B", "0.01", "Alice"),
                personal("C", "49.5", "Bob"),
                personal("D", "3.33", "Carol"),
            ],
        ),
        bill(
            "12.5",
            vec![
                shared("A", "1"),
                shared("B", "1"),
                shared("C", "1"),
                personal("D", "9.99", "Alice"),
                personal("E", "0.5", "Bob"),
            ],
        ),
        bill(
            "18",
            vec![
                personal("A", "7.77", "Alice"),
                personal("B", "7.77", "Bob"),
                shared("C", "0.05"),
            ],
        ),
    ];

    for input in bills {
        let output = split_bill(&input).unwrap();
        assert_eq!(
            allocated_total(&output),
            output.total_amount,
            "conservation failed for {:?}",
            input
        );
    }
}

// ==================== TIP ROUNDING ====================

#[test]
fn test_tip_is_always_a_ten_cent_multiple() {
    let subtotals = ["123.45", "99.99", "0.04", "7.77"];

    for price in subtotals {
        let output = split_bill(&bill("10", vec![personal("A", price, "Alice")])).unwrap();
        let tenths = output.tip.as_decimal() * rust_decimal::Decimal::from(10);
        assert!(
            tenths.is_integer(),
            "tip {} is not a 10-cent multiple for subtotal {}",
            output.tip,
            price
        );
    }
}

#[test]
fn test_tip_boundary_rounds_half_up() {
    // 0.25 at 10% gives a raw tip of 0.025, below the 0.05 midpoint.
    let output = split_bill(&bill("10", vec![personal("A", "0.25", "Alice")])).unwrap();
    assert_eq!(output.tip.to_string(), "0");

    // 0.5 at 10% gives exactly 0.05, which rounds up.
    let output = split_bill(&bill("10", vec![personal("A", "0.5", "Alice")])).unwrap();
    assert_eq!(output.tip.to_string(), "0.1");
}
