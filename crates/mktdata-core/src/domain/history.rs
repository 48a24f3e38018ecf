use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use super::timestamp::datetime_serde;
use super::{HistoryPeriod, Ohlcv, Symbol};

/// Index column name of the tabular projection.
pub const FRAME_INDEX: &str = "Date";
/// Value columns of the tabular projection, in order.
pub const FRAME_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// Price history of one symbol. Candle order is whatever the source supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub symbol: Symbol,
    pub candles: Vec<Ohlcv>,
}

impl History {
    pub fn new(symbol: Symbol, candles: Vec<Ohlcv>) -> Self {
        Self { symbol, candles }
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Copy with candles in chronological order (stable for equal dates).
    pub fn sorted(&self) -> Self {
        let mut candles = self.candles.clone();
        candles.sort_by_key(Ohlcv::date);
        Self::new(self.symbol.clone(), candles)
    }

    /// Candle with the most recent date.
    pub fn latest(&self) -> Option<&Ohlcv> {
        self.candles.iter().max_by_key(|candle| candle.date())
    }

    /// Candles whose calendar date is `date`.
    pub fn candles_on(&self, date: Date) -> impl Iterator<Item = &Ohlcv> {
        self.candles
            .iter()
            .filter(move |candle| candle.date().date() == date)
    }

    /// Chronologically sorted candles within `period`, anchored at the latest
    /// candle.
    pub fn within(&self, period: HistoryPeriod) -> Self {
        let sorted = self.sorted();
        let Some(start) = sorted
            .latest()
            .and_then(|latest| period.window_start(latest.date().date()))
        else {
            return sorted;
        };

        let candles = sorted
            .candles
            .into_iter()
            .filter(|candle| candle.date().date() >= start)
            .collect();
        Self::new(sorted.symbol, candles)
    }

    /// Rows keyed by [`FRAME_INDEX`] and [`FRAME_COLUMNS`], in candle order.
    pub fn to_frame(&self) -> Vec<FrameRow> {
        self.candles.iter().map(FrameRow::from).collect()
    }
}

/// One row of the tabular projection of a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRow {
    #[serde(rename = "Date", serialize_with = "datetime_serde::serialize")]
    pub date: PrimitiveDateTime,
    #[serde(rename = "Open")]
    pub open: Option<f64>,
    #[serde(rename = "High")]
    pub high: Option<f64>,
    #[serde(rename = "Low")]
    pub low: Option<f64>,
    #[serde(rename = "Close")]
    pub close: Option<f64>,
    #[serde(rename = "Volume")]
    pub volume: Option<f64>,
}

impl FrameRow {
    /// Values in [`FRAME_COLUMNS`] order.
    pub fn values(&self) -> [Option<f64>; 5] {
        [self.open, self.high, self.low, self.close, self.volume]
    }
}

impl From<&Ohlcv> for FrameRow {
    fn from(candle: &Ohlcv) -> Self {
        Self {
            date: candle.date(),
            open: candle.open(),
            high: candle.high(),
            low: candle.low(),
            close: candle.close(),
            volume: candle.volume(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn candle(date: &str, close: f64) -> Ohlcv {
        Ohlcv::builder(date)
            .close(close)
            .volume(1_000.0)
            .build()
            .expect("valid candle")
    }

    fn history(candles: Vec<Ohlcv>) -> History {
        let symbol = Symbol::builder("TEST", "Test")
            .country("US")
            .currency("USD")
            .build()
            .expect("valid symbol");
        History::new(symbol, candles)
    }

    #[test]
    fn keeps_supplied_order_and_sorts_on_request() {
        let history = history(vec![candle("2023-01-02", 102.0), candle("2023-01-01", 100.0)]);
        assert_eq!(history.candles[0].close(), Some(102.0));

        let sorted = history.sorted();
        assert_eq!(sorted.candles[0].date(), datetime!(2023-01-01 00:00:00));
        assert_eq!(history.latest().expect("latest").close(), Some(102.0));
    }

    #[test]
    fn projects_to_frame_rows() {
        let history = history(vec![candle("2023-01-01", 100.0), candle("2023-01-02", 102.0)]);
        let frame = history.to_frame();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0].close, Some(100.0));
        assert_eq!(frame[0].values()[3], Some(100.0));

        let json = serde_json::to_value(frame[0]).expect("serialize");
        assert_eq!(json[FRAME_INDEX], "2023-01-01T00:00:00");
        assert_eq!(json["Close"], 100.0);
        assert_eq!(json["Volume"], 1_000.0);
    }

    #[test]
    fn empty_history_projects_to_empty_frame() {
        assert!(history(Vec::new()).to_frame().is_empty());
    }

    #[test]
    fn restricts_to_period_window() {
        let history = history(vec![
            candle("2023-12-29", 1.0),
            candle("2024-01-02", 2.0),
            candle("2024-02-15", 3.0),
            candle("2024-03-01", 4.0),
        ]);

        let month = history.within(HistoryPeriod::OneMonth);
        assert_eq!(month.len(), 2);
        assert_eq!(month.candles[0].date().date(), date!(2024 - 02 - 15));

        assert_eq!(history.within(HistoryPeriod::YearToDate).len(), 3);
        assert_eq!(history.within(HistoryPeriod::Max).len(), 4);
        assert_eq!(history.within(HistoryPeriod::OneDay).len(), 1);
    }

    #[test]
    fn finds_candles_by_calendar_day() {
        let history = history(vec![candle("2023-01-01 09:30", 1.0), candle("2023-01-01 16:00", 2.0)]);
        assert_eq!(history.candles_on(date!(2023 - 01 - 01)).count(), 2);
        assert_eq!(history.candles_on(date!(2023 - 01 - 02)).count(), 0);
    }
}
