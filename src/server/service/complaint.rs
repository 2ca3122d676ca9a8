//! Complaint filing and lookup.
//!
//! This module provides the `ComplaintService` used by customers to file complaints and
//! by everyone to read them. Submitted text is sanitized before it is stored, and every
//! new complaint gets a "Complaint Submitted" notification for its owner.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attachment::AttachmentRepository, complaint::ComplaintRepository,
        notification::NotificationRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        complaint::{
            parse_day, Complaint, ComplaintDetail, ComplaintSearchParam, ComplaintStatus,
            CreateComplaintParam, SubmitComplaintParam, UploadedFile,
        },
        notification::{CreateNotificationParam, NotificationType},
    },
    service::upload::UploadService,
    util::{
        csv::complaints_to_csv,
        sanitize::{is_valid_phone, sanitize_complaint_text, sanitize_html},
    },
};

/// Number of consecutive millisecond IDs tried before giving up.
const MAX_ID_ATTEMPTS: u32 = 1000;

/// Owner of the complaints created by `create_samples`.
pub const SAMPLE_COMPLAINT_OWNER: &str = "test@gmail.com";

/// Export formats accepted by `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
}

impl ExportFormat {
    /// Parses a format name case-insensitively; a missing format means CSV.
    pub fn parse(format: Option<&str>) -> Result<Self, AppError> {
        match format.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("csv") => Ok(Self::Csv),
            Some(_) => Err(AppError::BadRequest("Unsupported format".to_string())),
        }
    }
}

pub struct ComplaintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new complaint for a customer.
    ///
    /// Issue type, order ID, title and expected resolution are HTML-encoded. The
    /// description also has script content stripped and is truncated. The complaint
    /// starts as `PENDING` with ID `CMP-<epoch millis>`.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The stored complaint
    /// - `Err(AppError::BadRequest)` - A required field is empty, or the order date or
    ///   contact phone is malformed
    /// - `Err(InternalError::ComplaintIdExhausted)` - No free ID found
    pub async fn submit(&self, param: SubmitComplaintParam) -> Result<Complaint, AppError> {
        let create = self.prepare(param).await?;
        self.persist(create, &[]).await
    }

    /// Files a new complaint together with its attachment files.
    ///
    /// Validates the fields and allocates the complaint ID first, then writes the
    /// files, and only then stores the complaint, its attachment rows and the owner
    /// notification. A failed write leaves nothing in the database. A failed database
    /// write removes the stored files and any rows already created.
    ///
    /// # Returns
    /// - `Ok((Complaint, Vec<String>))` - The stored complaint and its attachment paths
    /// - `Err(AppError::BadRequest)` - Same validation as `submit`
    /// - `Err(AppError::IoErr)` - An attachment could not be written
    pub async fn submit_with_attachments(
        &self,
        param: SubmitComplaintParam,
        files: Vec<UploadedFile>,
        uploads: &UploadService<'_>,
    ) -> Result<(Complaint, Vec<String>), AppError> {
        let create = self.prepare(param).await?;
        let complaint_id = create.complaint_id.clone();

        let paths = uploads.store(&complaint_id, files).await?;

        match self.persist(create, &paths).await {
            Ok(complaint) => Ok((complaint, paths)),
            Err(e) => {
                if let Err(cleanup) = ComplaintRepository::new(self.db)
                    .delete_with_children(&complaint_id)
                    .await
                {
                    tracing::error!(
                        "Failed to roll back complaint {}: {}",
                        complaint_id,
                        cleanup
                    );
                }
                uploads.remove(&complaint_id).await;
                Err(e)
            }
        }
    }

    /// Sanitizes and validates a submission and allocates its complaint ID.
    async fn prepare(&self, param: SubmitComplaintParam) -> Result<CreateComplaintParam, AppError> {
        let order_id = sanitize_html(&param.order_id);
        let issue_type = sanitize_html(&param.issue_type);
        let description = sanitize_complaint_text(&param.description);

        if order_id.is_empty() {
            return Err(AppError::BadRequest("Order ID is required".to_string()));
        }
        if issue_type.is_empty() {
            return Err(AppError::BadRequest("Issue type is required".to_string()));
        }
        if description.is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let order_date = param
            .order_date
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_day(&d))
            .transpose()
            .map_err(AppError::BadRequest)?;

        let contact_phone = param.contact_phone.filter(|p| !p.trim().is_empty());
        if let Some(phone) = &contact_phone {
            if !is_valid_phone(phone) {
                return Err(AppError::BadRequest("Invalid contact phone number".to_string()));
            }
        }

        let complaint_id = self.allocate_complaint_id().await?;

        Ok(CreateComplaintParam {
            complaint_id,
            user_email: param.user_email,
            order_id,
            order_date,
            issue_type,
            title: optional_html(param.title),
            description,
            status: ComplaintStatus::Pending,
            priority: param.priority.filter(|p| !p.trim().is_empty()),
            contact_phone,
            expected_resolution: optional_html(param.expected_resolution),
            assigned_to: None,
        })
    }

    /// Stores a prepared complaint, its attachment rows and the owner notification.
    ///
    /// The notification is written last so it only exists for a fully stored complaint.
    async fn persist(
        &self,
        create: CreateComplaintParam,
        attachment_paths: &[String],
    ) -> Result<Complaint, AppError> {
        let complaint = ComplaintRepository::new(self.db).create(create).await?;

        self.record_attachments(&complaint.complaint_id, attachment_paths)
            .await?;

        NotificationRepository::new(self.db)
            .create(submitted_notification(&complaint))
            .await?;

        tracing::info!(
            "Complaint {} submitted by {}",
            complaint.complaint_id,
            complaint.user_email
        );

        Ok(complaint)
    }

    /// Records stored attachment paths against a complaint.
    pub async fn record_attachments(
        &self,
        complaint_id: &str,
        paths: &[String],
    ) -> Result<(), AppError> {
        let attachment_repo = AttachmentRepository::new(self.db);
        for path in paths {
            attachment_repo.create(complaint_id, path).await?;
        }
        Ok(())
    }

    /// Retrieves a customer's complaints, most recently updated first.
    pub async fn get_user_complaints(&self, user_email: &str) -> Result<Vec<Complaint>, AppError> {
        Ok(ComplaintRepository::new(self.db)
            .get_by_user_email(user_email, None)
            .await?)
    }

    /// Retrieves a complaint by its public ID.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The complaint
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn get(&self, complaint_id: &str) -> Result<Complaint, AppError> {
        ComplaintRepository::new(self.db)
            .find_by_complaint_id(complaint_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Complaint not found".to_string()))
    }

    /// Retrieves a complaint together with its attachment paths.
    pub async fn get_detail(&self, complaint_id: &str) -> Result<ComplaintDetail, AppError> {
        let complaint = self.get(complaint_id).await?;
        let attachments = AttachmentRepository::new(self.db)
            .get_paths_by_complaint(complaint_id)
            .await?;

        Ok(ComplaintDetail {
            complaint,
            attachments,
        })
    }

    /// Creates CMP-0001 to CMP-0003 for the sample customer, one per status.
    ///
    /// IDs that already exist are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of complaints created
    pub async fn create_samples(&self) -> Result<usize, AppError> {
        let samples = [
            ("Late Delivery", ComplaintStatus::Pending),
            ("Wrong Product", ComplaintStatus::InProgress),
            ("Damaged Product", ComplaintStatus::Resolved),
        ];

        let complaint_repo = ComplaintRepository::new(self.db);
        let mut created = 0;

        for (i, (issue_type, status)) in samples.into_iter().enumerate() {
            let n = i + 1;
            let complaint_id = format!("CMP-{:04}", n);
            if complaint_repo.exists(&complaint_id).await? {
                continue;
            }

            complaint_repo
                .create(CreateComplaintParam {
                    complaint_id,
                    user_email: SAMPLE_COMPLAINT_OWNER.to_string(),
                    order_id: format!("ORD-{}", 100_000 + n),
                    order_date: None,
                    issue_type: issue_type.to_string(),
                    title: None,
                    description: format!("Sample complaint #{}", n),
                    status,
                    priority: Some("Medium".to_string()),
                    contact_phone: None,
                    expected_resolution: None,
                    assigned_to: None,
                })
                .await?;
            created += 1;
        }

        Ok(created)
    }

    /// Filters a customer's complaints, most recently updated first.
    pub async fn search(&self, param: ComplaintSearchParam) -> Result<Vec<Complaint>, AppError> {
        Ok(ComplaintRepository::new(self.db).search(param).await?)
    }

    /// Renders a customer's complaints in the requested export format.
    ///
    /// # Returns
    /// - `Ok(String)` - Document body
    /// - `Err(AppError::BadRequest)` - "Unsupported format"
    pub async fn export(&self, user_email: &str, format: ExportFormat) -> Result<String, AppError> {
        let complaints = self.get_user_complaints(user_email).await?;

        match format {
            ExportFormat::Csv => complaints_to_csv(&complaints),
        }
    }

    /// Picks an unused `CMP-<millis>` ID, moving forward one millisecond per collision.
    async fn allocate_complaint_id(&self) -> Result<String, AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);
        let base = Utc::now().timestamp_millis();

        for offset in 0..MAX_ID_ATTEMPTS {
            let candidate = format!("CMP-{}", base + i64::from(offset));
            if !complaint_repo.exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(InternalError::ComplaintIdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        }
        .into())
    }
}

/// Notification telling the owner that a complaint was filed.
pub fn submitted_notification(complaint: &Complaint) -> CreateNotificationParam {
    CreateNotificationParam {
        user_email: complaint.user_email.clone(),
        title: "Complaint Submitted".to_string(),
        message: format!(
            "Your complaint {} has been submitted successfully",
            complaint.complaint_id
        ),
        notification_type: NotificationType::Success,
    }
}

fn optional_html(value: Option<String>) -> Option<String> {
    value.map(|v| sanitize_html(&v)).filter(|v| !v.is_empty())
}
