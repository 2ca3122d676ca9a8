//! Staff account repository.
//!
//! Staff and admins share the `staff` table and differ only by role.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::staff::{CreateStaffParam, Staff, StaffCredentials, UpdateStaffParam};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new staff account.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateStaffParam) -> Result<Staff, DbErr> {
        let now = Utc::now();
        let entity = entity::staff::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role.to_string()),
            department: ActiveValue::Set(param.department),
            workload: ActiveValue::Set(param.workload),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Staff::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, DbErr> {
        entity::prelude::Staff::find_by_id(id)
            .one(self.db)
            .await?
            .map(Staff::from_entity)
            .transpose()
    }

    /// Finds a staff account by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(Staff))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Staff>, DbErr> {
        entity::prelude::Staff::find()
            .filter(entity::staff::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Staff::from_entity)
            .transpose()
    }

    /// Finds a staff account together with its password hash for login checks.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StaffCredentials>, DbErr> {
        entity::prelude::Staff::find()
            .filter(entity::staff::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(StaffCredentials::from_entity)
            .transpose()
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Staff::find()
            .filter(entity::staff::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves every staff account ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Staff>, DbErr> {
        entity::prelude::Staff::find()
            .order_by_asc(entity::staff::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Staff::from_entity)
            .collect()
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Staff::find().count(self.db).await
    }

    /// Applies a partial update to a staff account.
    ///
    /// Only fields set to `Some` are written. `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Staff))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateStaffParam) -> Result<Option<Staff>, DbErr> {
        let Some(existing) = entity::prelude::Staff::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::staff::ActiveModel = existing.into();

        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(department) = param.department {
            active.department = ActiveValue::Set(Some(department));
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.to_string());
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Staff::from_entity(entity).map(Some)
    }

    /// Deletes a staff account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Staff::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
