//! Bill models: raw JSON records and the typed core representation.

use crate::error::{Result, SplitError};
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw bill document as read from JSON.
///
/// Every field is optional so that a structurally valid document with a
/// missing field can be reported by field name instead of failing
/// wholesale inside the deserializer.
#[derive(Debug, Deserialize)]
pub struct BillRecord {
    /// Bill date, expected as `YYYY-MM-DD`
    pub date: Option<String>,

    /// Restaurant name or address
    pub location: Option<String>,

    /// Tip rate in percent (`10` means 10%)
    #[serde(rename = "tipPercentage")]
    pub tip_percentage: Option<Decimal>,

    /// Bill items in receipt order
    pub items: Option<Vec<ItemRecord>>,
}

/// Raw bill item as read from JSON.
///
/// The wire format marks shared items with an `isShared` flag and requires
/// `person` only when the flag is false.
#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    /// Item label
    pub name: Option<String>,

    /// Item price in currency units
    pub price: Option<Money>,

    /// Whether the item is split among everyone on the bill
    #[serde(rename = "isShared")]
    pub is_shared: Option<bool>,

    /// Owner of a personal item (required when `isShared` is false)
    pub person: Option<String>,
}

impl BillRecord {
    /// Validates field presence and converts into the typed [`BillInput`].
    ///
    /// Reports the first missing field, naming the field and, for items,
    /// the offending array index.
    pub fn parse(self) -> Result<BillInput> {
        let date = self.date.ok_or(SplitError::MissingField { field: "date" })?;
        let location = self
            .location
            .ok_or(SplitError::MissingField { field: "location" })?;
        let tip_percentage = self.tip_percentage.ok_or(SplitError::MissingField {
            field: "tipPercentage",
        })?;
        let records = self
            .items
            .ok_or(SplitError::MissingField { field: "items" })?;

        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            items.push(record.parse(index)?);
        }

        Ok(BillInput {
            date,
            location,
            tip_percentage,
            items,
        })
    }
}

impl ItemRecord {
    /// Parses the raw item into a [`BillItem`], resolving the boolean
    /// wire flag into the tagged variant.
    fn parse(self, index: usize) -> Result<BillItem> {
        let name = self.name.ok_or(SplitError::MissingItemField {
            field: "name",
            index,
        })?;
        let price = self.price.ok_or(SplitError::MissingItemField {
            field: "price",
            index,
        })?;
        let is_shared = self.is_shared.ok_or(SplitError::MissingItemField {
            field: "isShared",
            index,
        })?;

        if is_shared {
            Ok(BillItem::Shared { name, price })
        } else {
            let person = self.person.ok_or(SplitError::MissingItemField {
                field: "person",
                index,
            })?;
            Ok(BillItem::Personal {
                name,
                price,
                person,
            })
        }
    }
}

/// A validated bill ready for splitting.
#[derive(Debug, Clone)]
pub struct BillInput {
    /// Bill date in `YYYY-MM-DD` form
    pub date: String,

    /// Restaurant name or address
    pub location: String,

    /// Tip rate in percent (`10` means 10%)
    pub tip_percentage: Decimal,

    /// Bill items in receipt order
    pub items: Vec<BillItem>,
}

/// A single priced line of the bill.
///
/// The "person required iff personal" rule of the wire format is enforced
/// structurally: only the `Personal` variant carries an owner.
#[derive(Debug, Clone)]
pub enum BillItem {
    /// Split evenly among every person named on the bill.
    Shared { name: String, price: Money },

    /// Charged entirely to `person`.
    Personal {
        name: String,
        price: Money,
        person: String,
    },
}

impl BillItem {
    /// The item's price, regardless of classification.
    pub fn price(&self) -> Money {
        match self {
            BillItem::Shared { price, .. } | BillItem::Personal { price, .. } => *price,
        }
    }

    /// The owning person for personal items, `None` for shared ones.
    pub fn person(&self) -> Option<&str> {
        match self {
            BillItem::Shared { .. } => None,
            BillItem::Personal { person, .. } => Some(person),
        }
    }
}

/// The computed settlement for a bill.
///
/// Serializes with the wire field order: date, location, subTotal, tip,
/// totalAmount, items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillOutput {
    /// Localized date, e.g. `2024年3月21日`
    pub date: String,

    /// Restaurant name or address, passed through unchanged
    pub location: String,

    /// Sum of all item prices before tip
    pub sub_total: Money,

    /// Tip amount, rounded to the nearest 10-cent unit
    pub tip: Money,

    /// `sub_total + tip`
    pub total_amount: Money,

    /// One entry per person, in first-seen scan order
    pub items: Vec<PersonItem>,
}

/// One person's final payable share.
#[derive(Debug, Clone, Serialize)]
pub struct PersonItem {
    /// The person's name
    pub name: String,

    /// The amount this person pays, tip included
    pub amount: Money,
}
