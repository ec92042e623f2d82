//! Currency codes, symbols, and display formatting

/// Currency assumed when an expense carries no code of its own
pub const DEFAULT_CURRENCY: &str = "USD";

/// A currency the application knows how to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Currencies offered by the expense entry form
pub const KNOWN_CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    CurrencyInfo {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
    CurrencyInfo {
        code: "NGN",
        symbol: "₦",
        name: "Nigerian Naira",
    },
    CurrencyInfo {
        code: "CAD",
        symbol: "C$",
        name: "Canadian Dollar",
    },
    CurrencyInfo {
        code: "AUD",
        symbol: "A$",
        name: "Australian Dollar",
    },
];

/// Map an expense's raw currency field to the code used for grouping.
///
/// Missing or blank codes fall back to [`DEFAULT_CURRENCY`]; anything else
/// passes through untouched, since an unknown code is not an error.
pub fn normalize(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Look up the display symbol for a currency code, defaulting to "$"
pub fn symbol(code: &str) -> &'static str {
    KNOWN_CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.symbol)
        .unwrap_or("$")
}

/// Format an amount with its currency symbol and two decimal places
pub fn format_amount(code: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol(code), amount)
}
