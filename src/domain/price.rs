// src/domain/price.rs

use serde::Deserialize;
use std::str::FromStr;

/// How prices are shown on cards and the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStyle {
    /// en-CA currency, no decimals: `$12,500,000`.
    #[default]
    Currency,
    /// Bare comma-grouped digits: `12,500,000`.
    Grouped,
}

impl FromStr for PriceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currency" => Ok(PriceStyle::Currency),
            "grouped" => Ok(PriceStyle::Grouped),
            other => Err(format!("unknown price style `{other}`")),
        }
    }
}

impl PriceStyle {
    pub fn format(self, price: i64) -> String {
        match self {
            PriceStyle::Currency => format_currency(price),
            PriceStyle::Grouped => format_grouped(price),
        }
    }
}

/// Comma-groups the digits of `price` in threes.
pub fn format_grouped(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if price < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Canadian-dollar display the way `en-CA` renders CAD with no fraction digits.
pub fn format_currency(price: i64) -> String {
    let grouped = format_grouped(price.abs());
    if price < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
