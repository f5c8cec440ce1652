//! Cryptocurrency data from the 7code.co.kr coins API, plus the pure
//! formatting helpers the ticker renders with.

use std::time::Duration;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use thousands::Separable;

const COINS_URL: &str = "https://7code.co.kr/api/coins";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub closing_price: f64,
    #[serde(rename = "fluctate_rate_24H", default)]
    pub change_rate_24h: f64,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(rename = "acc_trade_value_24H", default)]
    pub trade_value_24h: Option<f64>,
}

impl Coin {
    /// Ticker display name; the API uses pair symbols like `BTC_KRW`.
    pub fn display_symbol(&self) -> &str {
        self.symbol.split('_').next().unwrap_or(&self.symbol)
    }
}

#[derive(Debug, Clone)]
pub struct CryptoService {
    client: reqwest::Client,
}

impl CryptoService {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self { client })
    }

    pub async fn coins(&self) -> Option<Vec<Coin>> {
        match self.fetch_coins().await {
            Ok(coins) if coins.is_empty() => {
                tracing::warn!("coin list came back empty");
                None
            }
            Ok(coins) => Some(coins),
            Err(e) => {
                tracing::warn!("coin fetch failed: {e}");
                None
            }
        }
    }

    async fn fetch_coins(&self) -> Result<Vec<Coin>> {
        let response = self
            .client
            .get(COINS_URL)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// KRW price with thousands separators; sub-1000 prices keep two decimals.
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("₩{}", (price.round() as i64).separate_with_commas())
    } else {
        format!("₩{price:.2}")
    }
}

/// Signed 24h change, e.g. `(+1.23%)`.
pub fn format_change(change_rate: f64) -> String {
    format!("({change_rate:+.2}%)")
}

/// Five signal slots: green for buy/bullish, red for sell/bearish, white
/// otherwise; padded with white when fewer than five signals are present.
pub fn signal_icons(signals: &[String]) -> String {
    if signals.is_empty() {
        return "⚪⚪⚪⚪⚪".to_string();
    }

    let mut icons: Vec<&str> = signals
        .iter()
        .take(5)
        .map(|signal| {
            let signal = signal.to_lowercase();
            if signal.contains("buy") || signal.contains("bull") {
                "🟢"
            } else if signal.contains("sell") || signal.contains("bear") {
                "🔴"
            } else {
                "⚪"
            }
        })
        .collect();
    while icons.len() < 5 {
        icons.push("⚪");
    }
    icons.concat()
}

/// Trend icons derived from the 24h change rate, used when the payload
/// carries no signals.
pub fn trend_icons(change_rate: f64) -> &'static str {
    if change_rate > 2.0 {
        "🟢🟢🟢⚪⚪"
    } else if change_rate > 0.0 {
        "🟢🟢⚪⚪⚪"
    } else if change_rate < -2.0 {
        "🔴🔴🔴⚪⚪"
    } else if change_rate < 0.0 {
        "🔴🔴⚪⚪⚪"
    } else {
        "⚪⚪⚪⚪⚪"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(95_000_000.0, "₩95,000,000")]
    #[case(1234.0, "₩1,234")]
    #[case(1000.0, "₩1,000")]
    #[case(999.99, "₩999.99")]
    #[case(0.5, "₩0.50")]
    fn test_format_price(#[case] price: f64, #[case] expected: &str) {
        assert_eq!(format_price(price), expected);
    }

    #[rstest]
    #[case(1.234, "(+1.23%)")]
    #[case(-0.5, "(-0.50%)")]
    #[case(0.0, "(+0.00%)")]
    fn test_format_change(#[case] rate: f64, #[case] expected: &str) {
        assert_eq!(format_change(rate), expected);
    }

    #[test]
    fn test_signal_icons_empty() {
        assert_eq!(signal_icons(&[]), "⚪⚪⚪⚪⚪");
    }

    #[test]
    fn test_signal_icons_mapping_and_padding() {
        let signals = vec![
            "strong_buy".to_string(),
            "Bearish".to_string(),
            "neutral".to_string(),
        ];
        assert_eq!(signal_icons(&signals), "🟢🔴⚪⚪⚪");
    }

    #[test]
    fn test_signal_icons_caps_at_five() {
        let signals = vec!["buy".to_string(); 8];
        assert_eq!(signal_icons(&signals), "🟢🟢🟢🟢🟢");
    }

    #[rstest]
    #[case(3.0, "🟢🟢🟢⚪⚪")]
    #[case(0.5, "🟢🟢⚪⚪⚪")]
    #[case(-3.0, "🔴🔴🔴⚪⚪")]
    #[case(-0.5, "🔴🔴⚪⚪⚪")]
    #[case(0.0, "⚪⚪⚪⚪⚪")]
    fn test_trend_icons(#[case] rate: f64, #[case] expected: &str) {
        assert_eq!(trend_icons(rate), expected);
    }

    #[test]
    fn test_coin_deserialization() {
        let raw = r#"[{
            "symbol": "BTC_KRW",
            "closing_price": 95000000.0,
            "fluctate_rate_24H": 1.23,
            "acc_trade_value_24H": 120000000000.0
        }]"#;
        let coins: Vec<Coin> = serde_json::from_str(raw).expect("valid payload");
        assert_eq!(coins[0].display_symbol(), "BTC");
        assert_eq!(coins[0].change_rate_24h, 1.23);
        assert!(coins[0].signals.is_empty());
    }
}
