//! Comment threads on complaints.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, complaint::ComplaintRepository},
    error::AppError,
    model::comment::{AuthorType, Comment, CreateCommentParam},
    util::sanitize::sanitize_complaint_text,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a complaint.
    ///
    /// The message is sanitized like a complaint description.
    ///
    /// # Arguments
    /// - `complaint_id` - Public complaint ID
    /// - `author_email` - Email of the logged-in account
    /// - `author_type` - Whether the author is the customer or staff
    /// - `message` - Raw message text
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::BadRequest)` - Message empty after sanitization
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn add(
        &self,
        complaint_id: &str,
        author_email: &str,
        author_type: AuthorType,
        message: &str,
    ) -> Result<Comment, AppError> {
        let message = sanitize_complaint_text(message);
        if message.is_empty() {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }

        if !ComplaintRepository::new(self.db).exists(complaint_id).await? {
            return Err(AppError::NotFound("Complaint not found".to_string()));
        }

        Ok(CommentRepository::new(self.db)
            .create(CreateCommentParam {
                complaint_id: complaint_id.to_string(),
                author_email: author_email.to_string(),
                author_type,
                message,
            })
            .await?)
    }

    /// Retrieves a complaint's comments, oldest first.
    pub async fn get_for_complaint(&self, complaint_id: &str) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_by_complaint(complaint_id)
            .await?)
    }
}
