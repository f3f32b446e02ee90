use std::sync::Arc;

use crate::{database::Database, models::OrganisationInfo, services::NotificationService};

pub mod error;
pub mod notifications;
pub mod organisation;
pub mod router;

pub use error::*;

#[derive(Clone)]
pub struct AppState {
    pub notifications: NotificationService,
    pub organisation: Arc<OrganisationInfo>,
}

impl AppState {
    pub fn new(db: Database, organisation: OrganisationInfo) -> Self {
        Self {
            notifications: NotificationService::new(Arc::new(db)),
            organisation: Arc::new(organisation),
        }
    }
}
