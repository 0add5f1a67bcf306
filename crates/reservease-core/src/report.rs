//! # Dashboard Reporting
//!
//! Counts and rankings shown on the admin dashboard.
//!
//! Date ranges are inclusive on both ends and every status is counted unless
//! a function says otherwise.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Reservation, ReservationStatus};

/// Totals per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Guests across confirmed reservations.
    #[ts(type = "number")]
    pub confirmed_guests: u64,
}

/// Number of reservations on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub count: usize,
}

/// Number of reservations on one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableBookingCount {
    pub table_id: String,
    pub count: usize,
}

fn in_range(r: &Reservation, from: NaiveDate, to: NaiveDate) -> bool {
    r.date >= from && r.date <= to
}

pub fn summarize(reservations: &[Reservation]) -> ReservationSummary {
    reservations
        .iter()
        .fold(ReservationSummary::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                ReservationStatus::Confirmed => {
                    acc.confirmed += 1;
                    acc.confirmed_guests += u64::from(r.guests);
                }
                ReservationStatus::Pending => acc.pending += 1,
                ReservationStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
}

/// Reservation counts per day in `[from, to]`, ordered by date.
///
/// Days without reservations are omitted.
pub fn reservations_per_day(
    reservations: &[Reservation],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<DailyCount> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in reservations.iter().filter(|r| in_range(r, from, to)) {
        *by_day.entry(r.date).or_default() += 1;
    }

    by_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// The `limit` most-booked tables in `[from, to]`.
///
/// Ordered by count, highest first; ties by table id.
pub fn top_tables(
    reservations: &[Reservation],
    from: NaiveDate,
    to: NaiveDate,
    limit: usize,
) -> Vec<TableBookingCount> {
    let mut by_table: BTreeMap<&str, usize> = BTreeMap::new();
    for r in reservations.iter().filter(|r| in_range(r, from, to)) {
        *by_table.entry(r.table_id.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<TableBookingCount> = by_table
        .into_iter()
        .map(|(table_id, count)| TableBookingCount {
            table_id: table_id.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields id order; a stable sort keeps it for ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Reservations with `status` dated in `[from, to]`.
pub fn count_with_status(
    reservations: &[Reservation],
    status: ReservationStatus,
    from: NaiveDate,
    to: NaiveDate,
) -> usize {
    reservations
        .iter()
        .filter(|r| r.status == status && in_range(r, from, to))
        .count()
}

/// Confirmed reservations on `day`, earliest first.
pub fn confirmed_on(reservations: &[Reservation], day: NaiveDate) -> Vec<Reservation> {
    let mut list: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.date == day && r.status == ReservationStatus::Confirmed)
        .cloned()
        .collect();
    list.sort_by_key(|r| r.time);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_summarize_seed() {
        let summary = summarize(&seed::reservations());
        assert_eq!(
            summary,
            ReservationSummary {
                total: 4,
                confirmed: 2,
                pending: 1,
                cancelled: 1,
                confirmed_guests: 6,
            }
        );
    }

    #[test]
    fn test_summarize_huge_parties() {
        let mut all = seed::reservations();
        all[0].guests = u32::MAX;
        all[1].guests = u32::MAX;

        let summary = summarize(&all);
        assert_eq!(summary.confirmed_guests, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_reservations_per_day() {
        let counts = reservations_per_day(&seed::reservations(), d(14), d(15));
        assert_eq!(
            counts,
            vec![
                DailyCount { date: d(14), count: 1 },
                DailyCount { date: d(15), count: 2 },
            ]
        );
    }

    #[test]
    fn test_top_tables() {
        let mut all = seed::reservations();
        let mut extra = all[0].clone();
        extra.id = "5".to_string();
        extra.table_id = "3".to_string();
        all.push(extra);

        let top = top_tables(&all, d(1), d(30), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].table_id, "3");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].table_id, "1");

        assert!(top_tables(&all, d(1), d(30), 0).is_empty());
    }

    #[test]
    fn test_count_with_status() {
        let all = seed::reservations();
        assert_eq!(count_with_status(&all, ReservationStatus::Cancelled, d(1), d(30)), 1);
        assert_eq!(count_with_status(&all, ReservationStatus::Cancelled, d(15), d(30)), 0);
    }

    #[test]
    fn test_confirmed_on() {
        let list = confirmed_on(&seed::reservations(), d(15));
        let names: Vec<&str> = list.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(names, vec!["Anna Schmidt", "Thomas Meyer"]);
        assert!(confirmed_on(&seed::reservations(), d(16)).is_empty());
    }
}
