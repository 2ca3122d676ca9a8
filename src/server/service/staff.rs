//! Staff workflow service.
//!
//! This module provides the `StaffService` used by the staff console: login, work
//! queues, status changes and assignment, internal notes, performance statistics and
//! staff profiles. Status changes and assignments are written to the audit log with the
//! acting staff member's email and notify the complaint owner.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        complaint::ComplaintRepository, notification::NotificationRepository,
        rating::RatingRepository, staff::StaffRepository, staff_note::StaffNoteRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        audit::{AuditAction, AuditContext, AuditEntityType, AuditEntry},
        complaint::{BulkUpdateParam, Complaint, ComplaintStatus},
        dashboard::{StaffDashboard, StaffPerformance},
        notification::{CreateNotificationParam, NotificationType},
        rating::StaffRatingSummary,
        staff::{Staff, UpdateStaffParam},
        staff_note::{CreateStaffNoteParam, StaffNote},
    },
    service::audit::AuditService,
    util::{password::verify_password, sanitize::sanitize_complaint_text},
};

/// Number of assigned complaints listed on the staff dashboard.
const RECENT_ASSIGNED_LIMIT: u64 = 10;

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks staff credentials.
    ///
    /// # Returns
    /// - `Ok(Staff)` - Credentials valid
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidStaffCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<Staff, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }

        let Some(credentials) = StaffRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidStaffCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash).await? {
            return Err(AuthError::InvalidStaffCredentials.into());
        }

        Ok(credentials.staff)
    }

    /// Builds the dashboard of one staff member.
    ///
    /// # Returns
    /// - `Ok(StaffDashboard)` - Profile, assigned counts and the 10 newest assigned complaints
    /// - `Err(AppError::NotFound)` - "Staff not found"
    pub async fn get_dashboard(&self, email: &str) -> Result<StaffDashboard, AppError> {
        let staff = self.get_profile(email).await?;
        let complaint_repo = ComplaintRepository::new(self.db);

        let counts = complaint_repo.count_by_assignee(email).await?;
        let recent_complaints = complaint_repo
            .get_by_assignee(email, Some(RECENT_ASSIGNED_LIMIT))
            .await?;

        Ok(StaffDashboard {
            staff,
            counts,
            recent_complaints,
        })
    }

    /// Retrieves every complaint, newest first.
    pub async fn get_queue(&self) -> Result<Vec<Complaint>, AppError> {
        Ok(ComplaintRepository::new(self.db).get_all(None).await?)
    }

    /// Retrieves complaints assigned to one staff member, newest first.
    pub async fn get_assigned_queue(&self, email: &str) -> Result<Vec<Complaint>, AppError> {
        Ok(ComplaintRepository::new(self.db)
            .get_by_assignee(email, None)
            .await?)
    }

    /// Changes the status of a complaint.
    ///
    /// Any status may follow any other. Writes a `STATUS_CHANGE` audit entry and sends
    /// the owner a "Complaint Update" notification.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The updated complaint
    /// - `Err(AppError::BadRequest)` - The status is not a known status
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn update_status(
        &self,
        ctx: &AuditContext,
        complaint_id: &str,
        status: &str,
    ) -> Result<Complaint, AppError> {
        let status = status
            .parse::<ComplaintStatus>()
            .map_err(AppError::BadRequest)?;
        let complaint_repo = ComplaintRepository::new(self.db);

        let Some(existing) = complaint_repo.find_by_complaint_id(complaint_id).await? else {
            return Err(complaint_not_found());
        };

        let complaint = complaint_repo
            .update_status(complaint_id, status)
            .await?
            .ok_or_else(complaint_not_found)?;

        AuditService::new(self.db)
            .record(ctx.record(
                AuditAction::StatusChange,
                AuditEntityType::Complaint,
                complaint_id,
                format!(
                    "Status updated from {} to {} by Staff",
                    existing.status, complaint.status
                ),
            ))
            .await?;

        let notification_type = match complaint.status {
            ComplaintStatus::Resolved => NotificationType::Success,
            _ => NotificationType::Info,
        };
        self.notify_owner(
            &complaint,
            format!(
                "Your complaint {} status has been updated to {}",
                complaint.complaint_id, complaint.status
            ),
            notification_type,
        )
        .await?;

        Ok(complaint)
    }

    /// Assigns a complaint to a staff member.
    ///
    /// Writes an `ASSIGN` audit entry and notifies the owner.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The updated complaint
    /// - `Err(AppError::BadRequest)` - Complaint ID or staff email missing
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn assign(
        &self,
        ctx: &AuditContext,
        complaint_id: &str,
        staff_email: &str,
    ) -> Result<Complaint, AppError> {
        let staff_email = staff_email.trim();
        if complaint_id.trim().is_empty() {
            return Err(AppError::BadRequest("Complaint ID is required".to_string()));
        }
        if staff_email.is_empty() {
            return Err(AppError::BadRequest("Staff email is required".to_string()));
        }

        let complaint = ComplaintRepository::new(self.db)
            .assign(complaint_id, staff_email)
            .await?
            .ok_or_else(complaint_not_found)?;

        AuditService::new(self.db)
            .record(ctx.record(
                AuditAction::Assign,
                AuditEntityType::Complaint,
                complaint_id,
                format!("Complaint assigned to {} by {}", staff_email, ctx.actor_email),
            ))
            .await?;

        self.notify_owner(
            &complaint,
            format!(
                "Your complaint {} has been assigned to a support agent",
                complaint.complaint_id
            ),
            NotificationType::Info,
        )
        .await?;

        Ok(complaint)
    }

    /// Applies a status and/or assignee to several complaints.
    ///
    /// Unknown IDs are skipped. Each updated complaint gets one `UPDATE` audit entry.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of complaints updated
    pub async fn bulk_update(
        &self,
        ctx: &AuditContext,
        param: BulkUpdateParam,
    ) -> Result<u64, AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);
        let audit_service = AuditService::new(self.db);
        let assign_to = param.assign_to.filter(|a| !a.trim().is_empty());

        if param.status.is_none() && assign_to.is_none() {
            return Ok(0);
        }

        let mut updated = 0;
        for complaint_id in &param.complaint_ids {
            if !complaint_repo.exists(complaint_id).await? {
                tracing::debug!("Bulk update skipped unknown complaint {}", complaint_id);
                continue;
            }

            let mut changes = Vec::new();
            if let Some(status) = param.status {
                complaint_repo.update_status(complaint_id, status).await?;
                changes.push(format!("status to {}", status));
            }
            if let Some(assign_to) = &assign_to {
                complaint_repo.assign(complaint_id, assign_to).await?;
                changes.push(format!("assignee to {}", assign_to));
            }

            audit_service
                .record(ctx.record(
                    AuditAction::Update,
                    AuditEntityType::Complaint,
                    complaint_id.as_str(),
                    format!("Bulk update set {}", changes.join(" and ")),
                ))
                .await?;
            updated += 1;
        }

        Ok(updated)
    }

    /// Adds a staff note to a complaint.
    ///
    /// # Returns
    /// - `Ok(StaffNote)` - The stored note
    /// - `Err(AppError::BadRequest)` - Note empty after sanitization
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn add_note(
        &self,
        staff_email: &str,
        complaint_id: &str,
        note: &str,
        is_internal: bool,
    ) -> Result<StaffNote, AppError> {
        let note = sanitize_complaint_text(note);
        if note.is_empty() {
            return Err(AppError::BadRequest("Note is required".to_string()));
        }

        if !ComplaintRepository::new(self.db).exists(complaint_id).await? {
            return Err(complaint_not_found());
        }

        Ok(StaffNoteRepository::new(self.db)
            .create(CreateStaffNoteParam {
                complaint_id: complaint_id.to_string(),
                staff_email: staff_email.to_string(),
                note,
                is_internal,
            })
            .await?)
    }

    /// Retrieves notes on a complaint, newest first.
    pub async fn get_notes(
        &self,
        complaint_id: &str,
        internal_only: bool,
    ) -> Result<Vec<StaffNote>, AppError> {
        Ok(StaffNoteRepository::new(self.db)
            .get_by_complaint(complaint_id, internal_only)
            .await?)
    }

    /// Computes workload statistics for a staff member.
    pub async fn get_performance(&self, email: &str) -> Result<StaffPerformance, AppError> {
        let counts = ComplaintRepository::new(self.db)
            .count_by_assignee(email)
            .await?;

        Ok(StaffPerformance {
            counts,
            resolution_rate: round_to(ratio(counts.resolved, counts.total) * 100.0, 2),
        })
    }

    /// Retrieves the audit history of a complaint, newest first.
    pub async fn get_history(&self, complaint_id: &str) -> Result<Vec<AuditEntry>, AppError> {
        AuditService::new(self.db)
            .get_entity_history(AuditEntityType::Complaint, complaint_id)
            .await
    }

    /// Summarizes the ratings credited to a staff member.
    ///
    /// The average covers submitted ratings only and is `0.0` when there are none.
    pub async fn get_rating_summary(&self, email: &str) -> Result<StaffRatingSummary, AppError> {
        let ratings = RatingRepository::new(self.db).get_by_staff(email).await?;
        let counts = ComplaintRepository::new(self.db)
            .count_by_assignee(email)
            .await?;

        let total_ratings = ratings.len() as u64;
        let sum: i64 = ratings.iter().map(|r| i64::from(r.rating)).sum();
        let average_rating = if total_ratings == 0 {
            0.0
        } else {
            round_to(sum as f64 / total_ratings as f64, 1)
        };

        Ok(StaffRatingSummary {
            average_rating,
            total_ratings,
            resolution_rate: round_to(ratio(counts.resolved, counts.total), 2),
        })
    }

    /// Retrieves a staff profile by email.
    ///
    /// # Returns
    /// - `Ok(Staff)` - Profile without credentials
    /// - `Err(AppError::NotFound)` - "Staff not found"
    pub async fn get_profile(&self, email: &str) -> Result<Staff, AppError> {
        StaffRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(staff_not_found)
    }

    /// Updates a staff member's own profile fields.
    ///
    /// Role and password are not changed here; admins use the admin endpoints for those.
    pub async fn update_profile(
        &self,
        email: &str,
        param: UpdateStaffParam,
    ) -> Result<Staff, AppError> {
        let staff_repo = StaffRepository::new(self.db);
        let staff = staff_repo.find_by_email(email).await?.ok_or_else(staff_not_found)?;

        let param = UpdateStaffParam {
            role: None,
            password_hash: None,
            ..param
        };

        staff_repo
            .update(staff.id, param)
            .await?
            .ok_or_else(staff_not_found)
    }

    /// Retrieves every staff account without credentials.
    pub async fn get_all(&self) -> Result<Vec<Staff>, AppError> {
        Ok(StaffRepository::new(self.db).get_all().await?)
    }

    async fn notify_owner(
        &self,
        complaint: &Complaint,
        message: String,
        notification_type: NotificationType,
    ) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                user_email: complaint.user_email.clone(),
                title: "Complaint Update".to_string(),
                message,
                notification_type,
            })
            .await?;
        Ok(())
    }
}

fn complaint_not_found() -> AppError {
    AppError::NotFound("Complaint not found".to_string())
}

fn staff_not_found() -> AppError {
    AppError::NotFound("Staff not found".to_string())
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
