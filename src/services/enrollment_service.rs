use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::store::{Catalog, CatalogStore};

/// Rejected enrollment transitions. All three are caller-input errors; the
/// service itself has no internal failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

/// Enforces the enrollment rules on top of the catalog store.
///
/// Register and unregister hold the store's write guard across the whole
/// check-then-mutate sequence, so two concurrent signups for the same
/// activity cannot both pass the duplicate check.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    store: Arc<CatalogStore>,
}

impl EnrollmentService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Full catalog with per-activity rosters. Infallible.
    pub async fn list(&self) -> Catalog {
        self.store.snapshot().await
    }

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// A second signup with the same email is rejected, not a no-op. The
    /// advisory `max_participants` is deliberately not checked.
    pub async fn register(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, EnrollmentError> {
        let mut catalog = self.store.write().await;
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(EnrollmentError::ActivityNotFound)?;

        if activity.is_registered(email) {
            return Err(EnrollmentError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        info!(activity = %activity_name, email = %email, "student signed up");
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the roster of `activity_name`.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, EnrollmentError> {
        let mut catalog = self.store.write().await;
        let activity = catalog
            .get_mut(activity_name)
            .ok_or(EnrollmentError::ActivityNotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(EnrollmentError::NotRegistered);
        };

        activity.participants.remove(position);
        info!(activity = %activity_name, email = %email, "student unregistered");
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
