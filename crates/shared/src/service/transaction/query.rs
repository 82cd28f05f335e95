use crate::{
    abstract_trait::{DynTransactionQueryRepository, TransactionQueryServiceTrait},
    cache::CacheStore,
    domain::{
        requests::{FindAllTransactions, ReportQuery},
        responses::{
            ApiResponse, ApiResponsePagination, DailySales, DailySalesReport, Pagination,
            TransactionResponse, TransactionStats,
        },
    },
    errors::ServiceError,
    model::Transaction as TransactionModel,
    utils::{DateRange, Method, Metrics, Status, cents_to_amount},
};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use prometheus_client::registry::Registry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info};

const STATS_CACHE_TTL_SECONDS: i64 = 30;

pub struct TransactionQueryService {
    repository: DynTransactionQueryRepository,
    cache_store: Arc<CacheStore>,
    metrics: Metrics,
}

impl TransactionQueryService {
    pub fn new(
        repository: DynTransactionQueryRepository,
        cache_store: Arc<CacheStore>,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "transaction_query_service_request_counter",
            "Total number of requests to the TransactionQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "transaction_query_service_request_duration",
            "Histogram of request durations for the TransactionQueryService",
            metrics.request_duration.clone(),
        );

        Self {
            repository,
            cache_store,
            metrics,
        }
    }

    fn record(&self, started: Instant, ok: bool) {
        let status = if ok { Status::Success } else { Status::Error };
        self.metrics
            .record(Method::Get, status, started.elapsed().as_secs_f64());
    }
}

/// Totals over a slice of sales. Revenue stays in integer cents until the
/// final conversion, and the average is rounded to whole cents.
fn summarize(transactions: &[TransactionModel]) -> TransactionStats {
    let total_revenue_cents: i64 = transactions.iter().map(|t| t.total_amount).sum();
    let total_transactions = transactions.len() as i64;
    let total_items_sold: i64 = transactions.iter().map(|t| i64::from(t.quantity)).sum();

    let average_cents = if total_transactions == 0 {
        0
    } else {
        ((total_revenue_cents as f64) / (total_transactions as f64)).round() as i64
    };

    TransactionStats {
        total_revenue: cents_to_amount(total_revenue_cents),
        total_transactions,
        total_items_sold,
        average_order_value: cents_to_amount(average_cents),
    }
}

/// Groups sales by UTC calendar day, most recent day first. Days without
/// sales are simply absent.
fn daily_breakdown(transactions: &[TransactionModel]) -> Vec<DailySales> {
    let mut days: BTreeMap<NaiveDate, (i64, i64, i64)> = BTreeMap::new();

    for t in transactions {
        let entry = days.entry(t.created_at.date_naive()).or_insert((0, 0, 0));
        entry.0 += t.total_amount;
        entry.1 += 1;
        entry.2 += i64::from(t.quantity);
    }

    days.into_iter()
        .rev()
        .map(|(date, (cents, count, items))| DailySales {
            date,
            total_amount: cents_to_amount(cents),
            transaction_count: count,
            items_sold: items,
        })
        .collect()
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError> {
        let started = Instant::now();
        let range = req.range(Utc::now());

        let (transactions, total_items) =
            match self.repository.find_all(user_id, req, &range).await {
                Ok(found) => found,
                Err(e) => {
                    error!("❌ Failed to list transactions for user {user_id}: {e:?}");
                    self.record(started, false);
                    return Err(e.into());
                }
            };

        let data = transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect();
        self.record(started, true);

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Transactions fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total_items),
        })
    }

    async fn stats(
        &self,
        user_id: i32,
        query: &ReportQuery,
    ) -> Result<ApiResponse<TransactionStats>, ServiceError> {
        let started = Instant::now();
        let range = query.range(Utc::now());

        let cache_key = stats_cache_key(user_id, &range, &query.search);
        if let Some(cached) = self
            .cache_store
            .get_from_cache::<TransactionStats>(&cache_key)
            .await
        {
            info!("📊 Stats served from cache for user {user_id}");
            self.record(started, true);
            return Ok(ApiResponse::success("Transaction stats fetched", cached));
        }

        let transactions = match self
            .repository
            .find_by_range(user_id, &range, &query.search)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                self.record(started, false);
                return Err(e.into());
            }
        };

        let stats = summarize(&transactions);
        self.cache_store
            .set_to_cache(
                &cache_key,
                &stats,
                Duration::seconds(STATS_CACHE_TTL_SECONDS),
            )
            .await;

        self.record(started, true);

        Ok(ApiResponse::success("Transaction stats fetched", stats))
    }

    async fn daily_sales(
        &self,
        user_id: i32,
        query: &ReportQuery,
    ) -> Result<ApiResponse<DailySalesReport>, ServiceError> {
        let started = Instant::now();
        let range = query.range(Utc::now());

        let transactions = match self
            .repository
            .find_by_range(user_id, &range, &query.search)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                self.record(started, false);
                return Err(e.into());
            }
        };

        let report = DailySalesReport {
            daily_sales: daily_breakdown(&transactions),
            period: range,
        };

        self.record(started, true);

        Ok(ApiResponse::success("Daily sales fetched", report))
    }
}

fn stats_cache_key(user_id: i32, range: &DateRange, search: &str) -> String {
    format!(
        "stats:{user_id}:{}:{}:{}",
        range.start_date.timestamp_millis(),
        range.end_date.timestamp_millis(),
        search.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn tx(day: u32, hour: u32, amount_cents: i64, quantity: i32) -> TransactionModel {
        TransactionModel {
            transaction_id: 1,
            user_id: 1,
            product_id: 1,
            product_name: "Espresso beans 1kg".to_string(),
            quantity,
            unit_price: amount_cents / i64::from(quantity.max(1)),
            total_amount: amount_cents,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, hour, 30, 0).unwrap(),
        }
    }

    #[test]
    fn summarize_totals_revenue_count_and_items() {
        let sales = vec![tx(10, 9, 1000, 1), tx(10, 12, 2000, 2), tx(10, 18, 500, 5)];

        let stats = summarize(&sales);

        assert_eq!(stats.total_revenue, 35.00);
        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.total_items_sold, 8);
        // 3500 / 3 = 1166.67 rounded to whole cents
        assert_eq!(stats.average_order_value, 11.67);
    }

    #[test]
    fn summarize_empty_period_has_zero_average() {
        let stats = summarize(&[]);

        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.total_items_sold, 0);
        assert_eq!(stats.average_order_value, 0.0);
    }

    #[test]
    fn daily_breakdown_groups_same_utc_day_together() {
        let sales = vec![tx(10, 9, 1000, 1), tx(10, 23, 2000, 2), tx(10, 0, 500, 1)];

        let days = daily_breakdown(&sales);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(days[0].total_amount, 35.00);
        assert_eq!(days[0].transaction_count, 3);
        assert_eq!(days[0].items_sold, 4);
    }

    #[test]
    fn daily_breakdown_is_most_recent_day_first_and_skips_empty_days() {
        let sales = vec![tx(8, 10, 1000, 1), tx(12, 10, 2000, 2), tx(8, 15, 300, 3)];

        let days = daily_breakdown(&sales);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(days[1].total_amount, 13.00);
    }

    #[test]
    fn daily_totals_always_sum_to_overall_revenue() {
        let sales = vec![
            tx(3, 8, 1234, 1),
            tx(3, 19, 501, 2),
            tx(15, 11, 9999, 4),
            tx(22, 13, 42, 1),
        ];

        let stats = summarize(&sales);
        let days = daily_breakdown(&sales);

        let daily_sum_cents: i64 = days
            .iter()
            .map(|d| (d.total_amount * 100.0).round() as i64)
            .sum();
        assert_eq!(cents_to_amount(daily_sum_cents), stats.total_revenue);
    }
}
