use serde::Deserialize;
use serde_json::{json, Value};

use crate::register_toolbelt;
use crate::schemas::number;

pub const PRICE_NOT_FOUND: &str = "Price not found";

// Fixed demo prices, keyed by lowercase coin name.
const PRICES: &[(&str, f64)] = &[("bitcoin", 61000.0), ("ethereum", 3200.0)];

#[derive(Default)]
pub struct Market;

#[derive(Deserialize, Debug)]
pub struct CoinArgs {
    pub coin: String,
}

register_toolbelt! {
    Market {
        description: "Cryptocurrency market data",
        tools: {
            "getCryptoPrice" => get_crypto_price(CoinArgs) {
                description: "Returns the current price of a cryptocurrency",
                params: ["coin": "string" => "Name of the coin (e.g., bitcoin)"]
            }
        }
    }
}

impl Market {
    fn get_crypto_price(&self, args: CoinArgs) -> Value {
        match price_of(&args.coin) {
            Some(price) => number(price),
            None => json!(PRICE_NOT_FOUND),
        }
    }
}

pub fn price_of(coin: &str) -> Option<f64> {
    let coin = coin.to_lowercase();
    PRICES
        .iter()
        .find(|(name, _)| *name == coin)
        .map(|(_, price)| *price)
}
