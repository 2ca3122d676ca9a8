//! Satisfaction ratings on complaints.
//!
//! A complaint can be rated once, by the customer who filed it. The rating is credited
//! to whoever the complaint is assigned to at that moment.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{complaint::ComplaintRepository, rating::RatingRepository},
    error::{auth::AuthError, AppError},
    model::rating::{CreateRatingParam, Rating, MAX_RATING, MIN_RATING},
    util::sanitize::sanitize_html,
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a customer's rating of a complaint.
    ///
    /// # Arguments
    /// - `user_email` - Email of the logged-in customer
    /// - `complaint_id` - Public complaint ID
    /// - `rating` - Score from 1 to 5
    /// - `feedback` - Optional free text
    ///
    /// # Returns
    /// - `Ok(Rating)` - The stored rating
    /// - `Err(AppError::BadRequest)` - Score out of range or complaint already rated
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    /// - `Err(AuthError::AccessDenied)` - The customer did not file the complaint
    pub async fn submit(
        &self,
        user_email: &str,
        complaint_id: &str,
        rating: i32,
        feedback: Option<String>,
    ) -> Result<Rating, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let Some(complaint) = ComplaintRepository::new(self.db)
            .find_by_complaint_id(complaint_id)
            .await?
        else {
            return Err(AppError::NotFound("Complaint not found".to_string()));
        };

        if complaint.user_email != user_email {
            return Err(AuthError::AccessDenied(
                user_email.to_string(),
                format!("rating complaint {} filed by another customer", complaint_id),
            )
            .into());
        }

        let rating_repo = RatingRepository::new(self.db);
        if rating_repo.exists_for_complaint(complaint_id).await? {
            return Err(already_rated());
        }

        rating_repo
            .create(CreateRatingParam {
                complaint_id: complaint_id.to_string(),
                user_email: user_email.to_string(),
                staff_email: complaint.assigned_to,
                rating,
                feedback: feedback
                    .map(|f| sanitize_html(&f))
                    .filter(|f| !f.is_empty()),
            })
            .await
            .map_err(duplicate_as_bad_request)
    }

    /// Retrieves the rating of a complaint.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The rating
    /// - `Err(AppError::NotFound)` - The complaint has not been rated
    pub async fn get_for_complaint(&self, complaint_id: &str) -> Result<Rating, AppError> {
        RatingRepository::new(self.db)
            .find_by_complaint(complaint_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rating not found".to_string()))
    }
}

fn already_rated() -> AppError {
    AppError::BadRequest("Rating already submitted for this complaint".to_string())
}

/// A concurrent submission can pass the existence check and then hit the unique index.
fn duplicate_as_bad_request(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_rated(),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests rating an assigned complaint.
    ///
    /// Expected: rating stored and credited to the assignee
    #[tokio::test]
    async fn credits_assignee() -> Result<(), AppError> {
        let test = TestBuilder::new().with_complaint_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let complaint = factory::complaint::ComplaintFactory::new(db, "jane@example.com")
            .assigned_to("agent@example.com")
            .build()
            .await?;

        let rating = RatingService::new(db)
            .submit("jane@example.com", &complaint.complaint_id, 4, Some("Quick fix".to_string()))
            .await?;

        assert_eq!(rating.staff_email.as_deref(), Some("agent@example.com"));
        assert_eq!(rating.feedback.as_deref(), Some("Quick fix"));

        Ok(())
    }

    /// Tests rating twice, out of range and as another customer.
    ///
    /// Expected: BadRequest, BadRequest and AccessDenied
    #[tokio::test]
    async fn rejects_invalid_ratings() -> Result<(), AppError> {
        let test = TestBuilder::new().with_complaint_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let complaint = factory::create_complaint(db, "jane@example.com").await?;
        let service = RatingService::new(db);

        service
            .submit("jane@example.com", &complaint.complaint_id, 5, None)
            .await?;

        let duplicate = service
            .submit("jane@example.com", &complaint.complaint_id, 3, None)
            .await;
        let out_of_range = service
            .submit("jane@example.com", &complaint.complaint_id, 6, None)
            .await;
        let stranger = service
            .submit("other@example.com", &complaint.complaint_id, 3, None)
            .await;

        assert!(matches!(duplicate, Err(AppError::BadRequest(ref msg))
            if msg == "Rating already submitted for this complaint"));
        assert!(matches!(out_of_range, Err(AppError::BadRequest(_))));
        assert!(matches!(
            stranger,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        Ok(())
    }

    /// Tests a rating insert that loses the race against another submission.
    ///
    /// Expected: the unique index violation maps to the duplicate-rating BadRequest
    #[tokio::test]
    async fn concurrent_duplicate_is_bad_request() -> Result<(), AppError> {
        let test = TestBuilder::new().with_complaint_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let complaint = factory::create_complaint(db, "jane@example.com").await?;
        let repo = RatingRepository::new(db);
        let param = || CreateRatingParam {
            complaint_id: complaint.complaint_id.clone(),
            user_email: "jane@example.com".to_string(),
            staff_email: None,
            rating: 4,
            feedback: None,
        };

        repo.create(param()).await?;
        let err = repo.create(param()).await.unwrap_err();

        assert!(matches!(duplicate_as_bad_request(err), AppError::BadRequest(ref msg)
            if msg == "Rating already submitted for this complaint"));

        Ok(())
    }

    /// Tests reading the rating of an unrated complaint.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn missing_rating() -> Result<(), AppError> {
        let test = TestBuilder::new().with_complaint_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = RatingService::new(db).get_for_complaint("CMP-none").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
