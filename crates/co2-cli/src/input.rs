//! Client-side validation of raw user input, done before the ledger is
//! called.

use std::str::FromStr;

use anyhow::{bail, Result};

/// Parse a quantity typed by the user: non-empty, numeric, strictly positive.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("amount is empty");
    }
    let amount: f64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("'{raw}' is not a number"))?;
    if !amount.is_finite() || amount <= 0.0 {
        bail!("amount must be positive, got {raw}");
    }
    Ok(amount)
}

/// A `NAME:AMOUNT` pair such as `car:50` or `natural_gas:150`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityArg {
    pub name: String,
    pub amount: f64,
}

impl FromStr for ActivityArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s
            .split_once(':')
            .ok_or_else(|| format!("expected NAME:AMOUNT, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing name in '{s}'"));
        }
        let amount = parse_amount(amount).map_err(|e| e.to_string())?;
        Ok(Self {
            name: name.to_string(),
            amount,
        })
    }
}
