//! End-to-end checks of a session's reservation and auth state.

use chrono::{NaiveDate, NaiveTime, Utc};
use reservease_core::filter::{ReservationQuery, SortOrder, StatusFilter};
use reservease_core::report::summarize;
use reservease_core::{
    BookingPolicy, CoreError, MenuFilter, NewReservation, ReservationStatus, ReservationUpdate,
    Role, MAX_PARTY_SIZE,
};
use reservease_store::{AuthStore, MenuStore, ReservationStore};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn new_booking(table_id: &str, day: u32, at: NaiveTime, guests: u32) -> NewReservation {
    NewReservation {
        customer_name: "Jonas Braun".to_string(),
        email: "jonas@example.com".to_string(),
        phone: "+4915112345678".to_string(),
        date: date(day),
        time: at,
        guests,
        table_id: table_id.to_string(),
        special_requests: Some("High chair".to_string()),
    }
}

#[test]
fn test_confirmed_booking_excludes_table_for_every_fitting_party() {
    let mut store = ReservationStore::empty_layout();
    store.add_reservation(new_booking("4", 20, time(19, 0), 6));

    for party in 1..=6 {
        let free = store.get_available_tables(date(20), time(19, 0), party);
        assert!(free.iter().all(|t| t.id != "4"), "party of {}", party);
    }

    // Other slots and days are unaffected
    assert!(store.get_available_tables(date(20), time(19, 30), 6).iter().any(|t| t.id == "4"));
    assert!(store.get_available_tables(date(21), time(19, 0), 6).iter().any(|t| t.id == "4"));
}

#[test]
fn test_pending_and_cancelled_never_exclude() {
    let mut store = ReservationStore::empty_layout();
    let pending = store.add_reservation(new_booking("2", 20, time(20, 0), 2));
    store.set_status(&pending.id, ReservationStatus::Pending);
    let cancelled = store.add_reservation(new_booking("8", 20, time(20, 0), 2));
    store.cancel_reservation(&cancelled.id);

    let free = store.get_available_tables(date(20), time(20, 0), 2);
    assert!(free.iter().any(|t| t.id == "2"));
    assert!(free.iter().any(|t| t.id == "8"));
}

#[test]
fn test_oversized_party_always_excluded() {
    let store = ReservationStore::empty_layout();
    for table in store.tables() {
        let free = store.get_available_tables(date(20), time(17, 0), table.capacity + 1);
        assert!(free.iter().all(|t| t.id != table.id));
    }
}

#[test]
fn test_created_reservation_round_trips() {
    let mut store = ReservationStore::seeded();
    let before = Utc::now();
    let created = store.add_reservation(new_booking("8", 22, time(21, 0), 3));

    let fetched = store.get_reservation(&created.id).unwrap();
    assert_eq!(fetched.status, ReservationStatus::Confirmed);
    assert!(fetched.created_at >= before);
    assert_eq!(fetched.special_requests.as_deref(), Some("High chair"));
}

#[test]
fn test_delete_only_confirmed_frees_table() {
    let mut store = ReservationStore::empty_layout();
    let confirmed = store.add_reservation(new_booking("5", 20, time(18, 0), 2));
    assert!(!store.is_table_free("5"));

    store.delete_reservation(&confirmed.id);
    assert!(store.is_table_free("5"));

    // Deleting a non-confirmed booking leaves a held table held
    let held = store.add_reservation(new_booking("1", 20, time(18, 0), 2));
    let pending = store.add_reservation(new_booking("1", 21, time(18, 0), 2));
    store.set_status(&pending.id, ReservationStatus::Pending);
    store.delete_reservation(&pending.id);
    assert!(!store.is_table_free("1"));
    assert_eq!(store.get_reservation(&held.id).unwrap().table_id, "1");
}

#[test]
fn test_seeded_slot_excludes_only_the_booked_table() {
    let mut store = ReservationStore::seeded();
    store.update_reservation(
        "2",
        ReservationUpdate {
            time: Some(time(19, 0)),
            ..Default::default()
        },
    );

    let free = store.get_available_tables(date(15), time(19, 0), 4);
    let ids: Vec<&str> = free.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4", "6", "8"]);
}

#[test]
fn test_double_booking_is_rejected() {
    let mut store = ReservationStore::seeded();
    store
        .book_reservation(new_booking("6", 18, time(20, 30), 8))
        .unwrap();

    let err = store
        .book_reservation(new_booking("6", 18, time(20, 30), 5))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Table 6 is already booked on 2025-04-18 at 20:30"
    );
    assert!(matches!(err, CoreError::TableUnavailable { .. }));
}

#[test]
fn test_party_size_limits_on_every_checked_path() {
    let mut store = ReservationStore::seeded();

    for guests in [0, MAX_PARTY_SIZE + 1, u32::MAX] {
        let err = store
            .book_reservation(new_booking("6", 18, time(20, 30), guests))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "guests {}", guests);

        let update = ReservationUpdate {
            guests: Some(guests),
            ..Default::default()
        };
        assert!(store.amend_reservation("3", update).is_err(), "guests {}", guests);
    }

    assert_eq!(store.reservations().len(), 4);
    assert_eq!(store.get_reservation("3").unwrap().guests, 6);
}

#[test]
fn test_rejected_amend_keeps_summary_sound() {
    let mut store = ReservationStore::seeded();
    let huge = ReservationUpdate {
        guests: Some(u32::MAX),
        ..Default::default()
    };
    assert!(store.amend_reservation("3", huge.clone()).is_err());
    assert!(store.amend_reservation("4", huge).is_err());

    // Confirming afterwards goes through the unchecked admin path
    store.set_status("3", ReservationStatus::Confirmed);
    store.set_status("4", ReservationStatus::Confirmed);

    let summary = summarize(store.reservations());
    assert_eq!(summary.confirmed, 4);
    assert_eq!(summary.confirmed_guests, 2 + 4 + 6 + 2);
}

#[test]
fn test_bookings_need_an_open_slot() {
    let mut store = ReservationStore::seeded();

    for at in [time(18, 30), time(19, 30)] {
        assert!(matches!(
            store.book_reservation(new_booking("2", 18, at, 2)),
            Err(CoreError::SlotUnavailable(_))
        ));
    }
    for at in [time(16, 30), time(21, 30), time(20, 15)] {
        let err = store.book_reservation(new_booking("2", 18, at, 2)).unwrap_err();
        assert!(matches!(err, CoreError::SlotUnavailable(_)), "{}", at);
    }

    assert!(store.book_reservation(new_booking("2", 18, time(21, 0), 2)).is_ok());
}

#[test]
fn test_no_booking_in_the_past() {
    let policy = BookingPolicy {
        earliest_date: Some(date(16)),
        ..Default::default()
    };
    let mut store = ReservationStore::seeded().with_policy(policy);

    let err = store
        .book_reservation(new_booking("2", 15, time(20, 30), 2))
        .unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Date cannot be in the past");

    assert!(store.book_reservation(new_booking("2", 16, time(20, 30), 2)).is_ok());
}

#[test]
fn test_cleanup_keeps_recent_week() {
    let mut store = ReservationStore::seeded();
    store.add_reservation(new_booking("8", 2, time(20, 0), 2));

    // A week before the 22nd is the 15th
    let removed = store.cleanup_old_bookings(date(22));
    let ids: Vec<&str> = removed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(removed.len(), 2);
    assert!(ids.contains(&"4"));
    assert!(store.reservations().iter().all(|r| r.date >= date(15)));
}

#[test]
fn test_menu_filters_compose() {
    let mut store = MenuStore::seeded();
    store.toggle_availability("4").unwrap();

    let vegan_gf = MenuFilter {
        vegan: true,
        gluten_free: true,
        ..MenuFilter::public()
    };
    let items = store.list(&vegan_gf);
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i.vegan && i.gluten_free && i.available));
    assert!(items.iter().all(|i| i.id != "4"));

    // Admin view still lists switched-off dishes
    assert!(store.list(&MenuFilter::default()).iter().any(|i| i.id == "4"));
}

#[test]
fn test_admin_filters_over_live_store() {
    let mut store = ReservationStore::seeded();
    store.cancel_reservation("1");

    let cancelled = ReservationQuery::default()
        .with_status(StatusFilter::Cancelled)
        .apply(store.reservations(), SortOrder::DateDesc);
    let ids: Vec<&str> = cancelled.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    let searched = ReservationQuery::default()
        .with_search("SOFIA@")
        .apply(store.reservations(), SortOrder::DateDescTimeAsc);
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].customer_name, "Sofia Becker");
}

#[test]
fn test_auth_roles() {
    let mut auth = AuthStore::demo();
    assert!(!auth.is_authenticated());

    auth.login(Role::Admin);
    assert!(auth.is_admin());
    assert_eq!(auth.current_user().unwrap().name, "Admin User");

    auth.login(Role::Customer);
    assert!(!auth.is_admin());
    assert!(auth.has_role(Role::Customer));

    auth.logout();
    assert!(auth.current_user().is_none());
}
