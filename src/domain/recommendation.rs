use serde::{Deserialize, Serialize};

/// A single recommended stock as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub reason: String,
}

impl Stock {
    /// Card title line, e.g. "Reliance Industries (RELIANCE.NS)".
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }

    /// Price line with the rupee symbol, always 2 decimal places.
    pub fn display_price(&self) -> String {
        format!("Price: ₹{:.2}", self.price)
    }

    pub fn display_reason(&self) -> String {
        format!("Reason: {}", self.reason)
    }
}

/// Response body of the recommendation endpoint. At most one of
/// `messages` / `stocks` is meaningful per response; `messages` wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResult {
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// One saved stock line. Display-formatted strings, not raw values:
/// the persisted format is deliberately lossy (price is text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedStock {
    pub title: String,
    pub price: String,
    pub reason: String,
}

impl From<&Stock> for SavedStock {
    fn from(stock: &Stock) -> Self {
        Self {
            title: stock.display_title(),
            price: stock.display_price(),
            reason: stock.display_reason(),
        }
    }
}

/// A batch of saved recommendations, stamped with a display timestamp.
/// Batches are append-only: no eviction, no dedup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedBatch {
    pub date: String,
    pub stocks: Vec<SavedStock>,
}

impl SavedBatch {
    pub fn from_stocks(date: String, stocks: &[Stock]) -> Self {
        Self {
            date,
            stocks: stocks.iter().map(SavedStock::from).collect(),
        }
    }

    pub fn from_single(date: String, stock: &Stock) -> Self {
        Self::from_stocks(date, std::slice::from_ref(stock))
    }
}

/// Plain-text block for the "Copy All Results" action.
pub fn clipboard_block(stocks: &[Stock]) -> String {
    let mut text = String::from("STOCK RECOMMENDATIONS:\n\n");
    for stock in stocks {
        text.push_str(&stock.display_title());
        text.push('\n');
        text.push_str(&stock.display_price());
        text.push('\n');
        text.push_str(&stock.display_reason());
        text.push_str("\n\n");
    }
    text
}
