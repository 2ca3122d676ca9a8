//! Complaint repository.
//!
//! This module provides the `ComplaintRepository` for complaint records. Besides CRUD it
//! owns the status counts used by every dashboard and the customer search filters.
//! Orderings use `id` as a tie-breaker so complaints written in the same instant keep
//! insertion order.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::server::model::complaint::{
    priority_level, Complaint, ComplaintCounts, ComplaintSearchParam, ComplaintStatus,
    CreateComplaintParam,
};

use entity::complaint::Column;

pub struct ComplaintRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintRepository<'a> {
    /// Creates a new ComplaintRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ComplaintRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a complaint.
    ///
    /// `priority_level` is derived from `priority`, and both timestamps are set to now.
    ///
    /// # Arguments
    /// - `param` - Complaint fields including the public complaint ID
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The created complaint
    /// - `Err(DbErr)` - Database error, including a unique violation on complaint ID
    pub async fn create(&self, param: CreateComplaintParam) -> Result<Complaint, DbErr> {
        let now = Utc::now();
        let level = priority_level(param.priority.as_deref());

        let entity = entity::complaint::ActiveModel {
            complaint_id: ActiveValue::Set(param.complaint_id),
            user_email: ActiveValue::Set(param.user_email),
            order_id: ActiveValue::Set(param.order_id),
            order_date: ActiveValue::Set(param.order_date),
            issue_type: ActiveValue::Set(param.issue_type),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status.to_string()),
            priority: ActiveValue::Set(param.priority),
            priority_level: ActiveValue::Set(level),
            contact_phone: ActiveValue::Set(param.contact_phone),
            expected_resolution: ActiveValue::Set(param.expected_resolution),
            assigned_to: ActiveValue::Set(param.assigned_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Complaint::from_entity(entity)
    }

    /// Checks whether a complaint ID is already taken.
    pub async fn exists(&self, complaint_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Complaint::find()
            .filter(Column::ComplaintId.eq(complaint_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a complaint by its public ID.
    ///
    /// # Returns
    /// - `Ok(Some(Complaint))` - Complaint found
    /// - `Ok(None)` - No complaint with that ID
    /// - `Err(DbErr)` - Database error or unknown stored status
    pub async fn find_by_complaint_id(&self, complaint_id: &str) -> Result<Option<Complaint>, DbErr> {
        entity::prelude::Complaint::find()
            .filter(Column::ComplaintId.eq(complaint_id))
            .one(self.db)
            .await?
            .map(Complaint::from_entity)
            .transpose()
    }

    /// Retrieves a customer's complaints, most recently updated first.
    ///
    /// # Arguments
    /// - `user_email` - Email of the customer who filed the complaints
    /// - `limit` - Maximum number of complaints, or `None` for all
    pub async fn get_by_user_email(
        &self,
        user_email: &str,
        limit: Option<u64>,
    ) -> Result<Vec<Complaint>, DbErr> {
        let entities = entity::prelude::Complaint::find()
            .filter(Column::UserEmail.eq(user_email))
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Complaint::from_entity).collect()
    }

    /// Retrieves complaints assigned to a staff member, newest first.
    ///
    /// # Arguments
    /// - `staff_email` - Assignee email
    /// - `limit` - Maximum number of complaints, or `None` for all
    pub async fn get_by_assignee(
        &self,
        staff_email: &str,
        limit: Option<u64>,
    ) -> Result<Vec<Complaint>, DbErr> {
        let entities = entity::prelude::Complaint::find()
            .filter(Column::AssignedTo.eq(staff_email))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Complaint::from_entity).collect()
    }

    /// Retrieves all complaints, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of complaints, or `None` for all
    pub async fn get_all(&self, limit: Option<u64>) -> Result<Vec<Complaint>, DbErr> {
        let entities = entity::prelude::Complaint::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Complaint::from_entity).collect()
    }

    /// Searches a customer's complaints, most recently updated first.
    ///
    /// The complaint ID filter is a literal substring match through `LIKE`, which SQLite
    /// compares case-insensitively. `%`, `_` and `\` in the input match themselves. Statuses are stored uppercase so the status filter is
    /// uppercased before comparing. Date bounds are exclusive.
    pub async fn search(&self, param: ComplaintSearchParam) -> Result<Vec<Complaint>, DbErr> {
        let mut condition = Condition::all().add(Column::UserEmail.eq(param.user_email));

        if let Some(complaint_id) = param.complaint_id.filter(|c| !c.trim().is_empty()) {
            let pattern = format!("%{}%", escape_like(complaint_id.trim()));
            condition =
                condition.add(Column::ComplaintId.like(LikeExpr::new(pattern).escape('\\')));
        }
        if let Some(status) = param.status.filter(|s| !s.trim().is_empty()) {
            condition = condition.add(Column::Status.eq(status.trim().to_ascii_uppercase()));
        }
        if let Some(created_after) = param.created_after {
            condition = condition.add(Column::CreatedAt.gt(created_after));
        }
        if let Some(created_before) = param.created_before {
            condition = condition.add(Column::CreatedAt.lt(created_before));
        }

        let entities = entity::prelude::Complaint::find()
            .filter(condition)
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Complaint::from_entity).collect()
    }

    /// Counts a customer's complaints by status.
    pub async fn count_by_user_email(&self, user_email: &str) -> Result<ComplaintCounts, DbErr> {
        self.count_by_status(Condition::all().add(Column::UserEmail.eq(user_email)))
            .await
    }

    /// Counts complaints assigned to a staff member by status.
    pub async fn count_by_assignee(&self, staff_email: &str) -> Result<ComplaintCounts, DbErr> {
        self.count_by_status(Condition::all().add(Column::AssignedTo.eq(staff_email)))
            .await
    }

    /// Counts all complaints by status.
    pub async fn count_all(&self) -> Result<ComplaintCounts, DbErr> {
        self.count_by_status(Condition::all()).await
    }

    /// Counts resolved complaints last updated at or after `since`.
    pub async fn count_resolved_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Complaint::find()
            .filter(Column::Status.eq(ComplaintStatus::Resolved.as_str()))
            .filter(Column::UpdatedAt.gte(since))
            .count(self.db)
            .await
    }

    async fn count_by_status(&self, condition: Condition) -> Result<ComplaintCounts, DbErr> {
        let total = entity::prelude::Complaint::find()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let mut counts = ComplaintCounts {
            total,
            ..Default::default()
        };

        for status in ComplaintStatus::ALL {
            let count = entity::prelude::Complaint::find()
                .filter(condition.clone())
                .filter(Column::Status.eq(status.as_str()))
                .count(self.db)
                .await?;

            match status {
                ComplaintStatus::Pending => counts.pending = count,
                ComplaintStatus::InProgress => counts.in_progress = count,
                ComplaintStatus::Resolved => counts.resolved = count,
            }
        }

        Ok(counts)
    }

    /// Sets the status of a complaint and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Complaint))` - The updated complaint
    /// - `Ok(None)` - No complaint with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        complaint_id: &str,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, DbErr> {
        self.update_column(complaint_id, |active| {
            active.status = ActiveValue::Set(status.to_string());
        })
        .await
    }

    /// Sets the assignee of a complaint and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Complaint))` - The updated complaint
    /// - `Ok(None)` - No complaint with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign(
        &self,
        complaint_id: &str,
        staff_email: &str,
    ) -> Result<Option<Complaint>, DbErr> {
        let staff_email = staff_email.to_string();
        self.update_column(complaint_id, |active| {
            active.assigned_to = ActiveValue::Set(Some(staff_email));
        })
        .await
    }

    async fn update_column<F>(&self, complaint_id: &str, apply: F) -> Result<Option<Complaint>, DbErr>
    where
        F: FnOnce(&mut entity::complaint::ActiveModel),
    {
        let Some(existing) = entity::prelude::Complaint::find()
            .filter(Column::ComplaintId.eq(complaint_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::complaint::ActiveModel = existing.into();
        apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Complaint::from_entity(entity).map(Some)
    }

    /// Deletes a complaint together with its attachments, comments, notes and rating.
    ///
    /// All deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Complaint and its children deleted
    /// - `Ok(false)` - No complaint with that ID
    /// - `Err(DbErr)` - Database error, transaction rolled back
    pub async fn delete_with_children(&self, complaint_id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ComplaintAttachment::delete_many()
            .filter(entity::complaint_attachment::Column::ComplaintId.eq(complaint_id))
            .exec(&txn)
            .await?;
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ComplaintId.eq(complaint_id))
            .exec(&txn)
            .await?;
        entity::prelude::StaffNote::delete_many()
            .filter(entity::staff_note::Column::ComplaintId.eq(complaint_id))
            .exec(&txn)
            .await?;
        entity::prelude::Rating::delete_many()
            .filter(entity::rating::Column::ComplaintId.eq(complaint_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Complaint::delete_many()
            .filter(Column::ComplaintId.eq(complaint_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

/// Escapes the `LIKE` wildcards and the escape character itself with `\`.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
