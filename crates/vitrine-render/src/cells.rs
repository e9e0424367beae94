//! In-place price-cell updates for an already-rendered document.
//!
//! The README carries a price table whose cells are addressed by id:
//!
//! ```html
//! <td id="#BTC">67,123.45</td>
//! ```
//!
//! Only the cell text is replaced; everything else in the document is left
//! byte-for-byte untouched.

use regex::Regex;
use vitrine_core::{Error, Result};

/// Replaces the text of each `<td id="#SYM">` cell with the paired value.
///
/// `quotes` maps currency symbols to their already-formatted price strings.
/// A symbol without a matching cell in the document fails the whole update
/// with [`Error::MissingValue`] (token `#SYM`); no partial document is
/// returned.
pub fn update_price_cells(document: &str, quotes: &[(String, String)]) -> Result<String> {
    let mut updated = document.to_string();

    for (symbol, price) in quotes {
        let pattern = format!("<td id=\"#{}\">(.*?)<", regex::escape(symbol));
        let re = Regex::new(&pattern).expect("invalid price cell regex");

        let caps = re
            .captures(&updated)
            .ok_or_else(|| Error::missing_value(format!("#{symbol}")))?;
        let cell = caps
            .get(1)
            .ok_or_else(|| Error::missing_value(format!("#{symbol}")))?;

        let range = cell.range();
        tracing::debug!(symbol = %symbol, old = cell.as_str(), new = %price, "Updating price cell");
        updated.replace_range(range, price);
    }

    Ok(updated)
}
