use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named reporting window. All boundaries are computed on the UTC
/// calendar, uniformly, so the same query always buckets the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    Month,
}

/// Inclusive datetime range covering whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(end).and_utc()
}

impl DateRange {
    /// Range for a named period, relative to `now`.
    ///
    /// `today` spans the current UTC day, `week` spans Sunday through the
    /// following Saturday, `month` spans the first through the last
    /// calendar day of the current month.
    pub fn for_period(period: Period, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();

        let (first, last) = match period {
            Period::Today => (today, today),
            Period::Week => {
                let sunday = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
                (sunday, sunday + Days::new(6))
            }
            Period::Month => {
                let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                    .unwrap_or(today);
                (first, first + Months::new(1) - Days::new(1))
            }
        };

        Self {
            start_date: day_start(first),
            end_date: day_end(last),
        }
    }

    /// Resolves an optional named period and optional explicit dates into a
    /// concrete range. Explicit dates win over the named period; both
    /// explicit bounds are inclusive, and an end given as a bare date is
    /// widened to 23:59:59.999. A start date alone runs through today; an
    /// end date alone selects just that one day, never an unbounded past.
    /// With nothing supplied the range is today.
    pub fn resolve(
        period: Option<Period>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Self {
        match (start_date, end_date) {
            (Some(start), Some(end)) => Self {
                start_date: day_start(start),
                end_date: day_end(end),
            },
            (Some(start), None) => Self {
                start_date: day_start(start),
                end_date: day_end(now.date_naive()),
            },
            (None, Some(end)) => Self {
                start_date: day_start(end),
                end_date: day_end(end),
            },
            (None, None) => Self::for_period(period.unwrap_or(Period::Today), now),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn wednesday_afternoon() -> DateTime<Utc> {
        // 2024-01-10 was a Wednesday
        Utc.with_ymd_and_hms(2024, 1, 10, 15, 42, 7).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_spans_midnight_to_last_millisecond() {
        let range = DateRange::for_period(Period::Today, wednesday_afternoon());
        assert_eq!(range.start_date, day_start(date(2024, 1, 10)));
        assert_eq!(range.end_date.to_rfc3339(), "2024-01-10T23:59:59.999+00:00");
        assert!(range.contains(wednesday_afternoon()));
    }

    #[test]
    fn week_runs_sunday_through_saturday() {
        let range = DateRange::for_period(Period::Week, wednesday_afternoon());
        assert_eq!(range.start_date.date_naive(), date(2024, 1, 7));
        assert_eq!(range.start_date.weekday(), Weekday::Sun);
        assert_eq!(range.end_date.date_naive(), date(2024, 1, 13));
        assert_eq!(range.end_date.weekday(), Weekday::Sat);
    }

    #[test]
    fn week_starting_on_sunday_keeps_that_sunday() {
        let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 8, 0, 0).unwrap();
        let range = DateRange::for_period(Period::Week, sunday);
        assert_eq!(range.start_date.date_naive(), date(2024, 1, 7));
    }

    #[test]
    fn month_covers_first_through_last_day() {
        let leap_feb = Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap();
        let range = DateRange::for_period(Period::Month, leap_feb);
        assert_eq!(range.start_date.date_naive(), date(2024, 2, 1));
        assert_eq!(range.end_date.date_naive(), date(2024, 2, 29));
    }

    #[test]
    fn explicit_end_date_is_widened_to_end_of_day() {
        let range = DateRange::resolve(
            None,
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 31)),
            wednesday_afternoon(),
        );
        assert_eq!(range.start_date, day_start(date(2024, 1, 1)));
        assert_eq!(range.end_date.to_rfc3339(), "2024-01-31T23:59:59.999+00:00");
    }

    #[test]
    fn explicit_dates_override_named_period() {
        let range = DateRange::resolve(
            Some(Period::Month),
            Some(date(2024, 1, 3)),
            Some(date(2024, 1, 4)),
            wednesday_afternoon(),
        );
        assert_eq!(range.start_date.date_naive(), date(2024, 1, 3));
        assert_eq!(range.end_date.date_naive(), date(2024, 1, 4));
    }

    #[test]
    fn end_date_alone_selects_just_that_day() {
        let range = DateRange::resolve(None, None, Some(date(2024, 1, 5)), wednesday_afternoon());
        assert_eq!(range.start_date, day_start(date(2024, 1, 5)));
        assert_eq!(range.end_date, day_end(date(2024, 1, 5)));
    }

    #[test]
    fn nothing_supplied_defaults_to_today() {
        let range = DateRange::resolve(None, None, None, wednesday_afternoon());
        assert_eq!(
            range,
            DateRange::for_period(Period::Today, wednesday_afternoon())
        );
    }
}
