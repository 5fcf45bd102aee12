use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::outgoing::UserQuery;
use crate::appointments::application::ports::outgoing::AppointmentQuery;
use crate::dashboard::application::domain::entities::{
    merge_recent, ActivityItem, ActivityKind,
};
use crate::dashboard::application::ports::incoming::use_cases::{
    GetRecentActivityError, GetRecentActivityUseCase,
};
use crate::veterinarians::application::ports::outgoing::VetQuery;

pub struct GetRecentActivityService {
    users: Arc<dyn UserQuery + Send + Sync>,
    appointments: Arc<dyn AppointmentQuery + Send + Sync>,
    vets: Arc<dyn VetQuery + Send + Sync>,
}

impl GetRecentActivityService {
    pub fn new(
        users: Arc<dyn UserQuery + Send + Sync>,
        appointments: Arc<dyn AppointmentQuery + Send + Sync>,
        vets: Arc<dyn VetQuery + Send + Sync>,
    ) -> Self {
        Self {
            users,
            appointments,
            vets,
        }
    }
}

#[async_trait]
impl GetRecentActivityUseCase for GetRecentActivityService {
    async fn execute(&self, limit: u64) -> Result<Vec<ActivityItem>, GetRecentActivityError> {
        // Each source is capped at `limit` so the merged feed can
        // never be short because one source crowded out another.
        let signups = self
            .users
            .recent_users(limit)
            .await
            .map_err(|err| GetRecentActivityError::RepositoryError(err.to_string()))?;

        let bookings = self
            .appointments
            .recent_appointments(limit)
            .await
            .map_err(|err| GetRecentActivityError::RepositoryError(err.to_string()))?;

        let vet_requests = self
            .vets
            .recent_pending(limit)
            .await
            .map_err(|err| GetRecentActivityError::RepositoryError(err.to_string()))?;

        let mut items: Vec<ActivityItem> = Vec::new();

        for user in signups {
            items.push(ActivityItem {
                kind: ActivityKind::Signup,
                subject_id: user.id.value(),
                summary: format!("{} joined", user.name),
                occurred_at: user.created_at,
            });
        }

        for appointment in bookings {
            items.push(ActivityItem {
                kind: ActivityKind::Booking,
                subject_id: appointment.id,
                summary: format!("Appointment booked: {}", appointment.reason),
                occurred_at: appointment.created_at,
            });
        }

        for vet in vet_requests {
            items.push(ActivityItem {
                kind: ActivityKind::VetRequest,
                subject_id: vet.id,
                summary: format!("Verification requested: {}", vet.specialization),
                occurred_at: vet.created_at,
            });
        }

        Ok(merge_recent(items, limit as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::accounts::application::domain::entities::{UserId, UserRole};
    use crate::accounts::application::ports::outgoing::UserProfileRecord;
    use crate::appointments::application::domain::entities::AppointmentStatus;
    use crate::appointments::application::ports::outgoing::AppointmentRecord;
    use crate::shared::store::StoreError;
    use crate::veterinarians::application::domain::entities::VerificationStatus;
    use crate::veterinarians::application::ports::outgoing::VetRecord;

    struct StubUserQuery {
        users: Vec<UserProfileRecord>,
    }

    #[async_trait]
    impl UserQuery for StubUserQuery {
        async fn get_profile(
            &self,
            _id: UserId,
        ) -> Result<Option<UserProfileRecord>, StoreError> {
            unimplemented!()
        }

        async fn count_users(&self) -> Result<u64, StoreError> {
            unimplemented!()
        }

        async fn recent_users(&self, _limit: u64) -> Result<Vec<UserProfileRecord>, StoreError> {
            Ok(self.users.clone())
        }
    }

    struct StubAppointmentQuery {
        appointments: Vec<AppointmentRecord>,
    }

    #[async_trait]
    impl AppointmentQuery for StubAppointmentQuery {
        async fn get_appointment(
            &self,
            _id: Uuid,
        ) -> Result<Option<AppointmentRecord>, StoreError> {
            unimplemented!()
        }

        async fn list_for_user(
            &self,
            _user_id: UserId,
        ) -> Result<Vec<AppointmentRecord>, StoreError> {
            unimplemented!()
        }

        async fn list_for_vet(&self, _vet_id: Uuid) -> Result<Vec<AppointmentRecord>, StoreError> {
            unimplemented!()
        }

        async fn count_appointments(&self) -> Result<u64, StoreError> {
            unimplemented!()
        }

        async fn recent_appointments(
            &self,
            _limit: u64,
        ) -> Result<Vec<AppointmentRecord>, StoreError> {
            Ok(self.appointments.clone())
        }
    }

    struct StubVetQuery {
        vets: Vec<VetRecord>,
    }

    #[async_trait]
    impl VetQuery for StubVetQuery {
        async fn get_vet(&self, _id: Uuid) -> Result<Option<VetRecord>, StoreError> {
            unimplemented!()
        }

        async fn get_vet_by_user(
            &self,
            _user_id: UserId,
        ) -> Result<Option<VetRecord>, StoreError> {
            unimplemented!()
        }

        async fn list_vets(
            &self,
            _status: Option<VerificationStatus>,
        ) -> Result<Vec<VetRecord>, StoreError> {
            unimplemented!()
        }

        async fn count_pending(&self) -> Result<u64, StoreError> {
            unimplemented!()
        }

        async fn recent_pending(&self, _limit: u64) -> Result<Vec<VetRecord>, StoreError> {
            Ok(self.vets.clone())
        }
    }

    fn user(minutes_ago: i64) -> UserProfileRecord {
        UserProfileRecord {
            id: UserId::from(Uuid::new_v4()),
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            role: UserRole::Farmer,
            location: None,
            farm_type: None,
            bio: None,
            contact_number: None,
            vet_profile_id: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            updated_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn appointment(minutes_ago: i64) -> AppointmentRecord {
        AppointmentRecord {
            id: Uuid::new_v4(),
            user_id: UserId::from(Uuid::new_v4()),
            vet_id: Uuid::new_v4(),
            date_time: Utc::now(),
            status: AppointmentStatus::Pending,
            reason: "Calf vaccination".to_string(),
            notes: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            updated_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn vet(minutes_ago: i64) -> VetRecord {
        VetRecord {
            id: Uuid::new_v4(),
            user_id: UserId::from(Uuid::new_v4()),
            qualifications: "BVM".to_string(),
            specialization: "Large animals".to_string(),
            service_regions: vec!["Rift Valley".to_string()],
            animal_types: vec![],
            verification_status: VerificationStatus::Pending,
            bio: None,
            contact_number: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            updated_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn feed_merges_sources_newest_first() {
        // Arrange
        let service = GetRecentActivityService::new(
            Arc::new(StubUserQuery {
                users: vec![user(20)],
            }),
            Arc::new(StubAppointmentQuery {
                appointments: vec![appointment(5)],
            }),
            Arc::new(StubVetQuery {
                vets: vec![vet(10)],
            }),
        );

        // Act
        let feed = service.execute(5).await.unwrap();

        // Assert
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].kind, ActivityKind::Booking);
        assert_eq!(feed[1].kind, ActivityKind::VetRequest);
        assert_eq!(feed[2].kind, ActivityKind::Signup);
    }

    #[tokio::test]
    async fn feed_is_truncated_to_limit() {
        // Arrange
        let service = GetRecentActivityService::new(
            Arc::new(StubUserQuery {
                users: vec![user(1), user(2)],
            }),
            Arc::new(StubAppointmentQuery {
                appointments: vec![appointment(3), appointment(4)],
            }),
            Arc::new(StubVetQuery { vets: vec![] }),
        );

        // Act
        let feed = service.execute(2).await.unwrap();

        // Assert
        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|item| item.kind == ActivityKind::Signup));
    }
}
