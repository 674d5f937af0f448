//! Demonstration data.

use crate::common::Rating;
use crate::record::Supplier;

/// `(id, name, contact, product, rating)` rows loaded at startup.
const SAMPLE_ROWS: [(&str, &str, &str, &str, u8); 3] = [
    ("S078", "VitaCo", "012-1234567", "Ascorbic Acid 1000mg", 5),
    ("S087", "LiquidRx", "014-1234567", "Cough Syrup 100mL", 5),
    ("S022", "GlucoSafe", "015-1234567", "Insulin Pen U-100", 4),
];

/// The three demonstration suppliers, in load order.
///
/// Loading them in this order makes S078 the root with S022 on its left and
/// S087 on its right.
pub fn sample_suppliers() -> Vec<Supplier> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, name, contact, product, rating)| {
            Supplier::new(id, name, contact, product, Rating::new_unchecked(rating))
        })
        .collect()
}
