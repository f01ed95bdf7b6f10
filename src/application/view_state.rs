use crate::application::tips::TipTicker;
use crate::domain::errors::ApiError;
use crate::domain::recommendation::{RecommendationResult, Stock};

/// Notice shown when the server returns neither messages nor stocks.
pub const EMPTY_NOTICE: &str = "No recommendations were generated. \
    Please try different criteria or select \"None\" for broader results.";

/// What the results panel shows once a request has completed.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Dismissible alerts: server-reported validation messages or the
    /// failure banner. Never shown together with stocks.
    Alerts(Vec<String>),
    /// Informational empty-result notice.
    Empty,
    /// One card per stock.
    Stocks(Vec<Stock>),
}

impl ResultsView {
    /// State policy, evaluated in order: messages win over stocks, an
    /// empty stock list yields the informational notice.
    pub fn from_result(result: RecommendationResult) -> Self {
        if !result.messages.is_empty() {
            ResultsView::Alerts(result.messages)
        } else if result.stocks.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Stocks(result.stocks)
        }
    }

    pub fn from_error(error: &ApiError) -> Self {
        ResultsView::Alerts(vec![format!(
            "Error fetching recommendations: {}. Please try again.",
            error
        )])
    }
}

/// Lifecycle of the results panel. The tip ticker only exists inside
/// `Loading`, so leaving that state on any path stops the rotation.
#[derive(Debug, Clone, Default)]
pub enum ResultsState {
    #[default]
    Idle,
    Loading {
        ticker: TipTicker,
    },
    Ready(ResultsView),
}

impl ResultsState {
    pub fn begin_loading(&mut self) {
        *self = ResultsState::Loading {
            ticker: TipTicker::start(),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultsState::Loading { .. })
    }

    pub fn finish(&mut self, outcome: Result<RecommendationResult, ApiError>) {
        let view = match outcome {
            Ok(result) => ResultsView::from_result(result),
            Err(ref error) => ResultsView::from_error(error),
        };
        *self = ResultsState::Ready(view);
    }

    /// Remove one alert. Out-of-range indices are ignored.
    pub fn dismiss_alert(&mut self, index: usize) {
        if let ResultsState::Ready(ResultsView::Alerts(messages)) = self
            && index < messages.len()
        {
            messages.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(symbol: &str) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: format!("{} Ltd", symbol),
            price: 123.4,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn test_messages_win_over_stocks() {
        let result = RecommendationResult {
            messages: vec!["Invalid price range".to_string()],
            stocks: vec![stock("TCS.NS")],
            request_id: None,
        };
        match ResultsView::from_result(result) {
            ResultsView::Alerts(messages) => assert_eq!(messages.len(), 1),
            other => panic!("expected alerts, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_response_yields_notice() {
        let view = ResultsView::from_result(RecommendationResult::default());
        assert_eq!(view, ResultsView::Empty);
    }

    #[test]
    fn test_card_count_matches_stock_count() {
        let result = RecommendationResult {
            messages: vec![],
            stocks: vec![stock("TCS.NS"), stock("INFY.NS"), stock("WIPRO.NS")],
            request_id: None,
        };
        match ResultsView::from_result(result) {
            ResultsView::Stocks(stocks) => assert_eq!(stocks.len(), 3),
            other => panic!("expected stocks, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_ends_loading_and_drops_ticker() {
        let mut state = ResultsState::default();
        state.begin_loading();
        assert!(state.is_loading());

        state.finish(Err(ApiError::Transport {
            reason: "connection reset".to_string(),
        }));

        // Loading is over, the ticker is gone, and the banner carries the
        // raw error message.
        assert!(!state.is_loading());
        match state {
            ResultsState::Ready(ResultsView::Alerts(messages)) => {
                assert_eq!(messages.len(), 1);
                assert!(messages[0].contains("connection reset"));
                assert!(messages[0].starts_with("Error fetching recommendations:"));
            }
            other => panic!("expected failure alert, got {:?}", other),
        }
    }

    #[test]
    fn test_dismiss_alert() {
        let mut state = ResultsState::Ready(ResultsView::Alerts(vec![
            "first".to_string(),
            "second".to_string(),
        ]));
        state.dismiss_alert(0);
        match &state {
            ResultsState::Ready(ResultsView::Alerts(messages)) => {
                assert_eq!(messages.as_slice(), ["second".to_string()]);
            }
            other => panic!("expected alerts, got {:?}", other),
        }
        // Out of range is a no-op.
        state.dismiss_alert(5);
    }
}
