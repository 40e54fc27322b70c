use once_cell::sync::Lazy;
use regex_lite::Regex;

// Legacy P2PKH/P2SH only; bech32 addresses use a different alphabet entirely.
static BTC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("static"));

static ETH_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static"));

/// Currencies with a payment URI scheme we can encode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Btc,
    Eth,
}

impl Currency {
    /// Match a ticker like "BTC" or "eth".
    pub fn try_parse(ticker: &str) -> Option<Self> {
        match ticker.to_lowercase().as_str() {
            "btc" => Some(Self::Btc),
            "eth" => Some(Self::Eth),
            _ => None,
        }
    }

    /// URI scheme prefixed to the address before encoding.
    pub fn uri_scheme(&self) -> &'static str {
        match self {
            Self::Btc => "bitcoin",
            Self::Eth => "ethereum",
        }
    }

    /// Check an address against this currency's expected format.
    pub fn is_valid_address(&self, address: &str) -> bool {
        self.address_pattern().is_match(address)
    }

    fn address_pattern(&self) -> &'static Regex {
        match self {
            Self::Btc => &BTC_ADDRESS,
            Self::Eth => &ETH_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_matching_is_case_insensitive() {
        assert_eq!(Currency::try_parse("BTC"), Some(Currency::Btc));
        assert_eq!(Currency::try_parse("btc"), Some(Currency::Btc));
        assert_eq!(Currency::try_parse("Eth"), Some(Currency::Eth));
        assert_eq!(Currency::try_parse("LTC"), None);
        assert_eq!(Currency::try_parse(""), None);
    }

    #[test]
    fn btc_address_format() {
        assert!(Currency::Btc.is_valid_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(Currency::Btc.is_valid_address("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"));

        // Wrong leading digit
        assert!(!Currency::Btc.is_valid_address("2J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"));
        // Characters outside the base58 alphabet
        assert!(!Currency::Btc.is_valid_address("1OIl0OIl0OIl0OIl0OIl0OIl0OIl0"));
        assert!(!Currency::Btc.is_valid_address("1Short"));
        assert!(!Currency::Btc.is_valid_address("not-an-address"));
        assert!(!Currency::Btc.is_valid_address(""));
    }

    #[test]
    fn eth_address_format() {
        assert!(Currency::Eth.is_valid_address("0x32Be343B94f860124dC4fEe278FDCBD38C102D88"));
        assert!(Currency::Eth.is_valid_address("0x0000000000000000000000000000000000000000"));

        // Missing 0x prefix
        assert!(!Currency::Eth.is_valid_address("32Be343B94f860124dC4fEe278FDCBD38C102D88"));
        // 39 hex digits
        assert!(!Currency::Eth.is_valid_address("0x32Be343B94f860124dC4fEe278FDCBD38C102D8"));
        // Non-hex characters
        assert!(!Currency::Eth.is_valid_address("0xZZBe343B94f860124dC4fEe278FDCBD38C102D88"));
        assert!(!Currency::Eth.is_valid_address("testaddress"));
    }

    #[test]
    fn validation_is_per_currency() {
        // A perfectly good BTC address is not an ETH address and vice versa
        assert!(!Currency::Eth.is_valid_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert!(!Currency::Btc.is_valid_address("0x32Be343B94f860124dC4fEe278FDCBD38C102D88"));
    }
}
