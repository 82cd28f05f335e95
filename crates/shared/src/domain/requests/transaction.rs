use crate::utils::{DateRange, Period};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct FindAllTransactions {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Free-text search over the product-name snapshot.
    #[serde(default)]
    pub search: String,

    /// Named period: `today`, `week` or `month`.
    pub period: Option<Period>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl FindAllTransactions {
    pub fn range(&self, now: DateTime<Utc>) -> DateRange {
        DateRange::resolve(self.period, self.start_date, self.end_date, now)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct ReportQuery {
    /// Named period: `today`, `week` or `month`.
    pub period: Option<Period>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub search: String,
}

impl ReportQuery {
    pub fn range(&self, now: DateTime<Utc>) -> DateRange {
        DateRange::resolve(self.period, self.start_date, self.end_date, now)
    }
}
