/// Currency amounts are carried as integer cents everywhere inside the
/// system. Floats only appear at the API boundary, rounded here to two
/// decimal places in both directions.

pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_two_decimal_amounts() {
        assert_eq!(amount_to_cents(10.00), 1000);
        assert_eq!(amount_to_cents(0.01), 1);
        assert_eq!(amount_to_cents(19.99), 1999);
        assert_eq!(cents_to_amount(3000), 30.00);
        assert_eq!(cents_to_amount(1), 0.01);
    }

    #[test]
    fn rounds_binary_float_noise() {
        // 29.99 * 100 is 2998.9999... in f64
        assert_eq!(amount_to_cents(29.99), 2999);
        assert_eq!(amount_to_cents(0.1 + 0.2), 30);
    }

    #[test]
    fn totals_never_drift_across_repeated_sales() {
        let unit_price = amount_to_cents(10.00);
        let mut revenue = 0i64;
        for _ in 0..1000 {
            revenue += unit_price * 3;
        }
        assert_eq!(revenue, 3_000_000);
        assert_eq!(cents_to_amount(revenue), 30_000.00);
    }
}
