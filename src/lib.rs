//! # Bill Splitter
//!
//! Splits a shared restaurant bill among multiple people: shared items
//! are divided evenly, personal items are charged to their owner, the tip
//! is apportioned proportionally, and a final reconciliation pass makes
//! the per-person amounts sum exactly to the bill total.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: cent-precision money via `rust_decimal`
//! - **Pure core**: [`split_bill`] is a side-effect-free function from a
//!   validated bill to a settlement; file and CLI concerns stay outside
//! - **Exact totals**: rounding drift is reconciled onto the first person,
//!   so output amounts always sum to the total
//! - **Deterministic output**: persons appear in first-seen scan order
//!
//! ## Example
//!
//! ```
//! use bill_splitter::{split_bill, BillRecord};
//!
//! let json = r#"{
//!   "date": "2024-03-21",
//!   "location": "開心小館",
//!   "tipPercentage": 10,
//!   "items": [
//!     { "name": "火鍋", "price": 100, "isShared": true },
//!     { "name": "可樂", "price": 50, "isShared": false, "person": "Alice" },
//!     { "name": "啤酒", "price": 50, "isShared": false, "person": "Bob" }
//!   ]
//! }"#;
//!
//! let record: BillRecord = serde_json::from_str(json).unwrap();
//! let bill = record.parse().unwrap();
//! let settlement = split_bill(&bill).unwrap();
//!
//! assert_eq!(settlement.date, "2024年3月21日");
//! assert_eq!(settlement.total_amount.to_string(), "220");
//! ```

pub mod bill;
pub mod error;
pub mod money;
pub mod processor;
pub mod report;
pub mod splitter;

pub use bill::{BillInput, BillItem, BillOutput, BillRecord, ItemRecord, PersonItem};
pub use error::{Result, SplitError};
pub use money::Money;
pub use processor::{Options, OutputFormat};
pub use report::render_text;
pub use splitter::{format_date, split_bill};
