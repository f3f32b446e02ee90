use notification_service::database::Database;
use notification_service::models::{Address, Contact, OrganisationInfo, Social};
use uuid::Uuid;

pub async fn setup_test_db() -> Database {
    // Use file-based SQLite for tests (unique name per test for parallel execution)
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run test migrations");

    db
}

pub async fn teardown_test_db(db: Database) {
    // Close the connection
    drop(db);
    // Note: Test database files will be cleaned up manually or by .gitignore
}

pub fn sample_organisation() -> OrganisationInfo {
    OrganisationInfo {
        name: "Relatia".to_string(),
        address: Address {
            street: "1 Main Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        },
        contact: Contact {
            name: "Support".to_string(),
            email: "support@relatia.example".to_string(),
        },
        phone: Some("+1 555-123-4567".to_string()),
        website: Some("https://relatia.example".to_string()),
        logo: None,
        social: Some(Social {
            facebook: Some("https://www.facebook.com/relatia".to_string()),
            twitter: Some("https://twitter.com/relatia".to_string()),
            instagram: None,
        }),
    }
}
