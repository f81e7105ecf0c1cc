//! Pure helpers for computing the cost-per-day-of-ownership metric.

use time::{Date, OffsetDateTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// The number of whole days between `now` and `purchase_date`, rounded up.
///
/// The purchase date is interpreted as midnight UTC, so a purchase made
/// earlier on the same day counts as one day of ownership. A purchase dated
/// in the future yields zero or a negative day count; callers are expected
/// to handle that via [daily_cost], which treats such counts as zero days of
/// ownership.
///
/// `now` is a parameter rather than being read from the clock so that the
/// calculation stays deterministic. Callers outside of tests should pass
/// `OffsetDateTime::now_utc()`.
pub fn days_since_purchase(purchase_date: Date, now: OffsetDateTime) -> i64 {
    let purchased_at = purchase_date.midnight().assume_utc();
    let elapsed_seconds = (now - purchased_at).whole_seconds();

    let whole_days = elapsed_seconds.div_euclid(SECONDS_PER_DAY);

    if elapsed_seconds.rem_euclid(SECONDS_PER_DAY) > 0 {
        whole_days + 1
    } else {
        whole_days
    }
}

/// The price of a product spread evenly over `days` days of ownership.
///
/// Returns zero when `days` is zero or negative, which covers products
/// recorded on their purchase date as well as future-dated purchases.
pub fn daily_cost(price: f64, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }

    price / days as f64
}

#[cfg(test)]
mod days_since_purchase_tests {
    use time::macros::{date, datetime};

    use super::days_since_purchase;

    #[test]
    fn whole_days_elapsed() {
        let days = days_since_purchase(date!(2024 - 01 - 01), datetime!(2024-01-31 0:00 UTC));

        assert_eq!(days, 30);
    }

    #[test]
    fn partial_day_rounds_up() {
        let days = days_since_purchase(date!(2024 - 01 - 01), datetime!(2024-01-31 13:47 UTC));

        assert_eq!(days, 31);
    }

    #[test]
    fn purchase_this_morning_counts_as_one_day() {
        let days = days_since_purchase(date!(2024 - 10 - 27), datetime!(2024-10-27 9:30 UTC));

        assert_eq!(days, 1);
    }

    #[test]
    fn purchase_at_this_exact_moment_counts_as_zero_days() {
        let days = days_since_purchase(date!(2024 - 10 - 27), datetime!(2024-10-27 0:00 UTC));

        assert_eq!(days, 0);
    }

    #[test]
    fn future_purchase_later_today_is_zero() {
        let days = days_since_purchase(date!(2024 - 10 - 28), datetime!(2024-10-27 12:00 UTC));

        assert_eq!(days, 0);
    }

    #[test]
    fn far_future_purchase_is_negative() {
        let days = days_since_purchase(date!(2024 - 11 - 27), datetime!(2024-10-27 0:00 UTC));

        assert_eq!(days, -31);
    }
}

#[cfg(test)]
mod daily_cost_tests {
    use super::daily_cost;

    #[test]
    fn divides_price_by_days() {
        assert_eq!(daily_cost(1200.0, 300), 4.0);
    }

    #[test]
    fn single_day_costs_full_price() {
        assert_eq!(daily_cost(59.99, 1), 59.99);
    }

    #[test]
    fn zero_days_costs_nothing() {
        assert_eq!(daily_cost(1200.0, 0), 0.0);
    }

    #[test]
    fn negative_days_costs_nothing() {
        assert_eq!(daily_cost(1200.0, -14), 0.0);
    }
}
