//! # Demo Restaurant
//!
//! The fixed dataset every session starts from: eight tables, nine evening
//! slots, three users, four sample reservations and a small menu.
//!
//! ```text
//! Tables                         Slots
//! ─────────────────────────      ─────────────────────
//! 1  2 seats  window             17:00  17:30  18:00
//! 2  4 seats  window             18:30✗ 19:00  19:30✗
//! 3  4 seats  center             20:00  20:30  21:00
//! 4  6 seats  center
//! 5  2 seats  bar                ✗ = closed on the schedule
//! 6  8 seats  private
//! 7  2 seats  outdoor
//! 8  4 seats  outdoor
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::menu::{MenuCategory, MenuItem, Price};
use crate::types::{Reservation, ReservationStatus, Role, Table, TableLocation, TimeSlot, User};

fn table(id: u32, capacity: u32, location: TableLocation) -> Table {
    Table {
        id: id.to_string(),
        name: format!("Table {}", id),
        capacity,
        location,
    }
}

fn slot(id: u32, hour: u32, minute: u32, available: bool) -> TimeSlot {
    TimeSlot {
        id: id.to_string(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        available,
    }
}

fn april(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).unwrap_or_default()
}

fn created(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn tables() -> Vec<Table> {
    use TableLocation::*;

    vec![
        table(1, 2, Window),
        table(2, 4, Window),
        table(3, 4, Center),
        table(4, 6, Center),
        table(5, 2, Bar),
        table(6, 8, Private),
        table(7, 2, Outdoor),
        table(8, 4, Outdoor),
    ]
}

pub fn time_slots() -> Vec<TimeSlot> {
    vec![
        slot(1, 17, 0, true),
        slot(2, 17, 30, true),
        slot(3, 18, 0, true),
        slot(4, 18, 30, false),
        slot(5, 19, 0, true),
        slot(6, 19, 30, false),
        slot(7, 20, 0, true),
        slot(8, 20, 30, true),
        slot(9, 21, 0, true),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        },
        User {
            id: "2".to_string(),
            name: "Staff Member".to_string(),
            role: Role::Staff,
        },
        User {
            id: "3".to_string(),
            name: "Customer".to_string(),
            role: Role::Customer,
        },
    ]
}

pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "1".to_string(),
            customer_name: "Anna Schmidt".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+1234567890".to_string(),
            date: april(15),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default(),
            guests: 2,
            table_id: "1".to_string(),
            special_requests: None,
            status: ReservationStatus::Confirmed,
            created_at: created(10, 10, 23),
        },
        Reservation {
            id: "2".to_string(),
            customer_name: "Thomas Meyer".to_string(),
            email: "thomas@example.com".to_string(),
            phone: "+1234567891".to_string(),
            date: april(15),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            guests: 4,
            table_id: "3".to_string(),
            special_requests: Some("Birthday celebration".to_string()),
            status: ReservationStatus::Confirmed,
            created_at: created(9, 14, 45),
        },
        Reservation {
            id: "3".to_string(),
            customer_name: "Sofia Becker".to_string(),
            email: "sofia@example.com".to_string(),
            phone: "+1234567892".to_string(),
            date: april(16),
            time: NaiveTime::from_hms_opt(18, 30, 0).unwrap_or_default(),
            guests: 6,
            table_id: "4".to_string(),
            special_requests: None,
            status: ReservationStatus::Pending,
            created_at: created(11, 9, 15),
        },
        Reservation {
            id: "4".to_string(),
            customer_name: "David Fischer".to_string(),
            email: "david@example.com".to_string(),
            phone: "+1234567893".to_string(),
            date: april(14),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap_or_default(),
            guests: 2,
            table_id: "7".to_string(),
            special_requests: Some("Outdoor seating preferred".to_string()),
            status: ReservationStatus::Cancelled,
            created_at: created(8, 16, 30),
        },
    ]
}

/// Dietary flags of a seed dish: (vegetarian, vegan, gluten_free).
type Diet = (bool, bool, bool);

fn dish(
    id: u32,
    name: &str,
    description: &str,
    cents: i64,
    category: MenuCategory,
    (vegetarian, vegan, gluten_free): Diet,
    order_count: u32,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image_url: None,
        category,
        available: true,
        vegetarian,
        vegan,
        gluten_free,
        order_count,
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    use MenuCategory::*;

    const MEAT: Diet = (false, false, false);
    const MEAT_GF: Diet = (false, false, true);
    const VEGGIE: Diet = (true, false, false);
    const VEGGIE_GF: Diet = (true, false, true);
    const VEGAN_GF: Diet = (true, true, true);

    vec![
        dish(1, "Bruschetta al Pomodoro", "Grilled bread, tomatoes, basil, garlic", 750, Appetizer, VEGGIE, 42),
        dish(2, "Burrata with Heirloom Tomatoes", "Creamy burrata, olive oil, sea salt", 1200, Appetizer, VEGGIE_GF, 35),
        dish(3, "Roasted Tomato Soup", "Slow-roasted tomatoes and thyme", 800, Soup, VEGAN_GF, 18),
        dish(4, "Garden Salad", "Seasonal leaves, lemon dressing", 950, Salad, VEGAN_GF, 21),
        dish(5, "Wild Mushroom Risotto", "Arborio rice, porcini, black truffle oil", 1850, MainCourse, VEGGIE_GF, 57),
        dish(6, "Grilled Sea Bass", "Fennel, capers, lemon butter", 2600, MainCourse, MEAT_GF, 33),
        dish(7, "Beef Tenderloin", "Red wine jus, truffle mash", 3400, MainCourse, MEAT, 61),
        dish(8, "Rosemary Potatoes", "Crisp roasted potatoes", 500, SideDish, VEGAN_GF, 27),
        dish(9, "Tiramisu", "Mascarpone, espresso, cocoa", 850, Dessert, VEGGIE, 48),
        dish(10, "Sparkling Water", "0.75 l bottle", 450, Beverage, VEGAN_GF, 70),
        dish(11, "House Red Wine", "Glass of Montepulciano d'Abruzzo", 700, Alcohol, VEGAN_GF, 39),
        dish(12, "Chef's Tasting Menu", "Five courses chosen by the kitchen", 7500, Special, MEAT, 12),
    ]
}
