//! # Configuration State
//!
//! Display and behaviour settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--currency`)
//! 2. Environment variables (`SHOPCART_*`)
//! 3. Defaults (this file)
//!
//! Nothing is read from or written to disk.

use serde::{Deserialize, Serialize};
use shopcart_core::validation::is_affirmative;
use shopcart_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the greeting and on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Answers that count as "yes" at the payment prompt
    pub affirmative_tokens: Vec<String>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for the demo.
    ///
    /// ## Default Values
    /// - Store: "Shopcart Demo Store"
    /// - Currency: hryvnia (₴)
    /// - Affirmative answers: yes, y, да
    fn default() -> Self {
        ConfigState {
            store_name: "Shopcart Demo Store".to_string(),
            currency_symbol: "₴".to_string(),
            affirmative_tokens: vec!["yes".to_string(), "y".to_string(), "да".to_string()],
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_STORE_NAME`: Override store name
    /// - `SHOPCART_CURRENCY`: Override currency symbol
    /// - `SHOPCART_AFFIRMATIVE`: Comma-separated "yes" answers (e.g. "yes,да")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Blank values are ignored, as is an affirmative list with no
    /// non-empty tokens.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = non_blank("SHOPCART_STORE_NAME") {
            config.store_name = store_name.trim().to_string();
        }

        if let Some(symbol) = non_blank("SHOPCART_CURRENCY") {
            config.currency_symbol = symbol.trim().to_string();
        }

        if let Some(tokens) = non_blank("SHOPCART_AFFIRMATIVE") {
            let tokens: Vec<String> = tokens
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if !tokens.is_empty() {
                config.affirmative_tokens = tokens;
            }
        }

        config
    }

    /// Checks a yes/no answer against the configured tokens.
    pub fn is_affirmative(&self, answer: &str) -> bool {
        is_affirmative(answer, &self.affirmative_tokens)
    }

    /// Formats an amount as a currency string.
    ///
    /// The digits come from `Money`'s own rendering; only the symbol is
    /// configurable. A minus sign goes in front of the symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_cli::config::ConfigState;
    /// use shopcart_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1250)), "₴12.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let digits = amount.to_string();
        match digits.strip_prefix('-') {
            Some(magnitude) => format!("-{}{}", self.currency_symbol, magnitude),
            None => format!("{}{}", self.currency_symbol, digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1250)), "₴12.50");
        assert_eq!(config.format_currency(Money::from_cents(100)), "₴1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "₴0.01");
        assert_eq!(config.format_currency(Money::zero()), "₴0.00");
        assert_eq!(
            config.format_currency(shopcart_core::MAX_PRICE),
            "₴1000000000.00"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-₴12.34");
        assert_eq!(config.format_currency(Money::from_cents(-5)), "-₴0.05");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("SHOPCART_STORE_NAME", "Corner Shop"),
            ("SHOPCART_CURRENCY", "$"),
            ("SHOPCART_AFFIRMATIVE", " oui, si ,"),
        ]));

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.format_currency(Money::from_cents(250)), "$2.50");
        assert_eq!(config.affirmative_tokens, vec!["oui", "si"]);
        assert!(config.is_affirmative("OUI"));
        assert!(!config.is_affirmative("yes"));
    }

    #[test]
    fn test_blank_env_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("SHOPCART_CURRENCY", "   "),
            ("SHOPCART_AFFIRMATIVE", " , ,"),
        ]));

        assert_eq!(config.currency_symbol, "₴");
        assert!(config.is_affirmative("да"));
        assert!(config.is_affirmative("Yes"));
    }

    #[test]
    fn test_negative_answer() {
        let config = ConfigState::default();
        assert!(!config.is_affirmative("нет"));
        assert!(!config.is_affirmative("no"));
    }
}
