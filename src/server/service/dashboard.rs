//! Customer dashboard aggregation and demo data.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        complaint::ComplaintRepository, notification::NotificationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        complaint::{ComplaintStatus, CreateComplaintParam},
        dashboard::UserDashboard,
        notification::{CreateNotificationParam, NotificationType},
    },
    service::complaint::submitted_notification,
};

/// Number of complaints listed on the customer dashboard.
const RECENT_COMPLAINT_LIMIT: u64 = 5;

const SAMPLE_COMPLAINTS: [(&str, &str, &str, &str, ComplaintStatus); 3] = [
    (
        "CMP-001",
        "ORD-12345",
        "Wrong Product",
        "Received wrong item in my order",
        ComplaintStatus::Resolved,
    ),
    (
        "CMP-002",
        "ORD-67890",
        "Late Delivery",
        "Order delivered 3 days late",
        ComplaintStatus::InProgress,
    ),
    (
        "CMP-003",
        "ORD-11223",
        "Damaged Product",
        "Product arrived damaged",
        ComplaintStatus::Pending,
    ),
];

const SAMPLE_NOTIFICATIONS: [(&str, &str, NotificationType); 3] = [
    (
        "Complaint Update",
        "Your complaint CMP-001 has been resolved",
        NotificationType::Success,
    ),
    (
        "New Message",
        "Support team has responded to your complaint CMP-002",
        NotificationType::Info,
    ),
    (
        "Welcome",
        "Welcome to ResolveIT! Your account is now active",
        NotificationType::Info,
    ),
];

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the customer dashboard.
    ///
    /// Counts by status, the five most recently updated complaints, every notification
    /// newest first and the unread count.
    pub async fn get_user_dashboard(&self, email: &str) -> Result<UserDashboard, AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let first_name = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .map(|user| user.first_name())
            .unwrap_or_else(|| "User".to_string());

        let counts = complaint_repo.count_by_user_email(email).await?;
        let recent_complaints = complaint_repo
            .get_by_user_email(email, Some(RECENT_COMPLAINT_LIMIT))
            .await?;
        let notifications = notification_repo.get_by_user_email(email).await?;
        let unread_notifications = notification_repo.count_unread(email).await?;

        Ok(UserDashboard {
            first_name,
            email: email.to_string(),
            counts,
            recent_complaints,
            notifications,
            unread_notifications,
        })
    }

    /// Seeds demo data for a customer.
    ///
    /// Both conditions are read before anything is written: sample complaints are
    /// created only when the customer has none, and sample notifications only when
    /// the customer had no unread notifications. Complaint IDs that already exist for
    /// another customer are skipped.
    pub async fn init_sample_data(&self, email: &str) -> Result<(), AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let has_complaints = complaint_repo.count_by_user_email(email).await?.total > 0;
        let has_unread = notification_repo.count_unread(email).await? > 0;

        if !has_complaints {
            for (complaint_id, order_id, issue_type, description, status) in SAMPLE_COMPLAINTS {
                if complaint_repo.exists(complaint_id).await? {
                    tracing::debug!("Sample complaint {} already exists, skipping", complaint_id);
                    continue;
                }

                let complaint = complaint_repo
                    .create(CreateComplaintParam {
                        complaint_id: complaint_id.to_string(),
                        user_email: email.to_string(),
                        order_id: order_id.to_string(),
                        order_date: None,
                        issue_type: issue_type.to_string(),
                        title: None,
                        description: description.to_string(),
                        status,
                        priority: None,
                        contact_phone: None,
                        expected_resolution: None,
                        assigned_to: None,
                    })
                    .await?;

                notification_repo
                    .create(submitted_notification(&complaint))
                    .await?;
            }
        }

        if !has_unread {
            for (title, message, notification_type) in SAMPLE_NOTIFICATIONS {
                notification_repo
                    .create(CreateNotificationParam {
                        user_email: email.to_string(),
                        title: title.to_string(),
                        message: message.to_string(),
                        notification_type,
                    })
                    .await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the dashboard for a customer with complaints and notifications.
    ///
    /// Expected: first name from the full name, counts by status, recent list capped
    /// at five and unread count
    #[tokio::test]
    async fn builds_user_dashboard() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::UserFactory::new(db)
            .full_name("Jane Doe")
            .build()
            .await?;

        for i in 0..6 {
            let status = if i % 2 == 0 { "PENDING" } else { "RESOLVED" };
            factory::complaint::ComplaintFactory::new(db, &user.email)
                .status(status)
                .build()
                .await?;
        }
        factory::create_notification(db, &user.email).await?;

        let dashboard = DashboardService::new(db)
            .get_user_dashboard(&user.email)
            .await?;

        assert_eq!(dashboard.first_name, "Jane");
        assert_eq!(dashboard.counts.total, 6);
        assert_eq!(dashboard.counts.pending, 3);
        assert_eq!(dashboard.counts.resolved, 3);
        assert_eq!(dashboard.recent_complaints.len(), 5);
        assert_eq!(dashboard.unread_notifications, 1);

        Ok(())
    }

    /// Tests the dashboard for an email without an account.
    ///
    /// Expected: fallback first name and zero counts
    #[tokio::test]
    async fn dashboard_for_unknown_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let dashboard = DashboardService::new(db)
            .get_user_dashboard("ghost@example.com")
            .await?;

        assert_eq!(dashboard.first_name, "User");
        assert_eq!(dashboard.counts.total, 0);

        Ok(())
    }

    /// Tests seeding demo data for a new customer and running it again.
    ///
    /// Expected: three complaints and six notifications, nothing added the second time
    #[tokio::test]
    async fn seeds_sample_data_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = DashboardService::new(db);

        service.init_sample_data("jane@example.com").await?;
        service.init_sample_data("jane@example.com").await?;

        let complaints = ComplaintRepository::new(db)
            .get_by_user_email("jane@example.com", None)
            .await?;
        let notifications = NotificationRepository::new(db)
            .get_by_user_email("jane@example.com")
            .await?;

        assert_eq!(complaints.len(), 3);
        assert_eq!(notifications.len(), 6);
        let resolved = complaints
            .iter()
            .find(|c| c.complaint_id == "CMP-001")
            .unwrap();
        assert_eq!(resolved.status, ComplaintStatus::Resolved);

        Ok(())
    }

    /// Tests seeding for a second customer when the sample IDs are taken.
    ///
    /// Expected: no complaints created, sample notifications still added
    #[tokio::test]
    async fn skips_taken_sample_ids() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = DashboardService::new(db);

        service.init_sample_data("first@example.com").await?;
        service.init_sample_data("second@example.com").await?;

        let counts = ComplaintRepository::new(db)
            .count_by_user_email("second@example.com")
            .await?;
        let unread = NotificationRepository::new(db)
            .count_unread("second@example.com")
            .await?;

        assert_eq!(counts.total, 0);
        assert_eq!(unread, 3);

        Ok(())
    }
}
