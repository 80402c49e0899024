//! Common test utilities and helpers
#![allow(dead_code)]

pub mod server;

pub use self::server::StubService;

use activity_roster::model::{Activity, ActivityCatalog};

/// Builds the catalog the stub service is seeded with
pub fn seed_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@example.com".to_string(),
                "daniel@example.com".to_string(),
            ],
        },
    );
    catalog.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec!["emma@example.com".to_string()],
        },
    );
    catalog.insert(
        "Arts & Crafts".to_string(),
        Activity {
            description: "Painting, pottery, and paper".to_string(),
            schedule: "Wednesdays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 10,
            participants: vec![],
        },
    );
    catalog
}
