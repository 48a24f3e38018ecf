use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::ValidationError;

/// Candle spacing supported by history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "2m")]
    TwoMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "60m")]
    SixtyMinutes,
    #[serde(rename = "90m")]
    NinetyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
}

impl HistoryInterval {
    pub const ALL: [Self; 13] = [
        Self::OneMinute,
        Self::TwoMinutes,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
        Self::NinetyMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::FiveDays,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::TwoMinutes => "2m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::SixtyMinutes => "60m",
            Self::NinetyMinutes => "90m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
        }
    }

    /// Whether candles at this spacing carry a meaningful time of day.
    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::OneMinute
                | Self::TwoMinutes
                | Self::FiveMinutes
                | Self::FifteenMinutes
                | Self::ThirtyMinutes
                | Self::SixtyMinutes
                | Self::NinetyMinutes
                | Self::OneHour
        )
    }
}

impl Display for HistoryInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryInterval {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == normalized)
            .ok_or(ValidationError::InvalidInterval { value: normalized })
    }
}

/// Look-back range for history requests, anchored at the latest candle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "max")]
    Max,
}

impl HistoryPeriod {
    pub const ALL: [Self; 11] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::TwoYears,
        Self::FiveYears,
        Self::TenYears,
        Self::YearToDate,
        Self::Max,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }

    /// First calendar day (inclusive) covered by this period when it ends on
    /// `end`. `None` means unbounded.
    pub fn window_start(self, end: Date) -> Option<Date> {
        match self {
            Self::OneDay => Some(end),
            Self::FiveDays => end.checked_sub(Duration::days(4)),
            Self::OneMonth => day_after_months_before(end, 1),
            Self::ThreeMonths => day_after_months_before(end, 3),
            Self::SixMonths => day_after_months_before(end, 6),
            Self::OneYear => day_after_months_before(end, 12),
            Self::TwoYears => day_after_months_before(end, 24),
            Self::FiveYears => day_after_months_before(end, 60),
            Self::TenYears => day_after_months_before(end, 120),
            Self::YearToDate => Date::from_calendar_date(end.year(), Month::January, 1).ok(),
            Self::Max => None,
        }
    }
}

/// `date` moved back by whole calendar months (day clamped to the month
/// length), plus one day.
fn day_after_months_before(date: Date, months: i32) -> Option<Date> {
    let index = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - months;
    let year = index.div_euclid(12);
    let month = u8::try_from(index.rem_euclid(12) + 1)
        .ok()
        .and_then(|value| Month::try_from(value).ok())?;

    (1..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
        .and_then(Date::next_day)
}

impl Display for HistoryPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryPeriod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == normalized)
            .ok_or(ValidationError::InvalidPeriod { value: normalized })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_interval() {
        let interval = HistoryInterval::from_str("1WK").expect("must parse");
        assert_eq!(interval, HistoryInterval::OneWeek);
        assert!(!interval.is_intraday());
        assert!(HistoryInterval::from_str("90m").expect("valid").is_intraday());
    }

    #[test]
    fn rejects_invalid_interval() {
        let err = HistoryInterval::from_str("2h").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidInterval { .. }));
    }

    #[test]
    fn period_defaults_to_one_month() {
        assert_eq!(HistoryPeriod::default(), HistoryPeriod::OneMonth);
        assert_eq!(HistoryPeriod::from_str("YTD").expect("valid"), HistoryPeriod::YearToDate);
        assert!(matches!(
            HistoryPeriod::from_str("7d"),
            Err(ValidationError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn period_round_trips_through_serde_names() {
        for period in HistoryPeriod::ALL {
            let json = serde_json::to_string(&period).expect("serialize");
            assert_eq!(json, format!("\"{}\"", period.as_str()));
        }
    }

    #[test]
    fn computes_window_starts() {
        let end = date!(2024 - 03 - 31);
        assert_eq!(HistoryPeriod::OneDay.window_start(end), Some(end));
        assert_eq!(HistoryPeriod::FiveDays.window_start(end), Some(date!(2024 - 03 - 27)));
        // Feb 2024 has 29 days: Mar 31 - 1mo clamps to Feb 29.
        assert_eq!(HistoryPeriod::OneMonth.window_start(end), Some(date!(2024 - 03 - 01)));
        assert_eq!(HistoryPeriod::OneYear.window_start(end), Some(date!(2023 - 04 - 01)));
        assert_eq!(HistoryPeriod::YearToDate.window_start(end), Some(date!(2024 - 01 - 01)));
        assert_eq!(HistoryPeriod::Max.window_start(end), None);
    }

    #[test]
    fn month_window_crosses_year_boundary() {
        assert_eq!(
            HistoryPeriod::ThreeMonths.window_start(date!(2024 - 01 - 15)),
            Some(date!(2023 - 10 - 16))
        );
    }
}
