//! Calendar date query parsing helpers.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Today's date in UTC, the date `CURRENT_DATE` gives on pooled connections.
pub(crate) fn today() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

pub(crate) trait DateQueryExt {
    /// Parse a `YYYY-MM-DD` query value, falling back to [`today`].
    fn into_date_or_today(self) -> Result<Date, StatusError>;

    /// Parse a `YYYY-MM` query value into a year and month.
    fn into_year_month(self) -> Result<(i16, i8), StatusError>;
}

impl DateQueryExt for QueryParam<String, false> {
    fn into_date_or_today(self) -> Result<Date, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Date>())
            .transpose()
            .or_400("could not parse \"date\" query parameter")
            .map(|date| date.unwrap_or_else(today))
    }

    fn into_year_month(self) -> Result<(i16, i8), StatusError> {
        let value = self
            .into_inner()
            .ok_or_else(|| StatusError::bad_request().brief("\"month\" query parameter is required"))?;

        parse_year_month(&value)
            .ok_or_else(|| StatusError::bad_request().brief("\"month\" must be formatted as YYYY-MM"))
    }
}

fn parse_year_month(value: &str) -> Option<(i16, i8)> {
    let (year, month) = value.split_once('-')?;

    if year.len() != 4 || month.len() != 2 {
        return None;
    }

    Some((year.parse().ok()?, month.parse().ok()?))
}
