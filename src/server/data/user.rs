//! Customer account repository.
//!
//! This module provides the `UserRepository` for managing customer records. Password
//! hashes are only returned through `find_credentials_by_email`; every other query
//! returns the credential-free `User` model.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User, UserCredentials};

/// Repository providing database operations for customer accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new customer account.
    ///
    /// Email notifications start enabled while SMS and marketing start disabled. The
    /// account starts unverified.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            full_name: ActiveValue::Set(param.full_name),
            phone_number: ActiveValue::Set(param.phone_number),
            date_of_birth: ActiveValue::Set(None),
            address: ActiveValue::Set(param.address),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            email_notifications: ActiveValue::Set(true),
            sms_notifications: ActiveValue::Set(false),
            marketing_emails: ActiveValue::Set(false),
            email_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a customer by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a customer by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a customer together with their password hash for login checks.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves every customer ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Applies a partial update to a customer account.
    ///
    /// Only fields set to `Some` are written. `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Primary key of the account
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();

        if let Some(full_name) = param.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone_number) = param.phone_number {
            active.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(date_of_birth) = param.date_of_birth {
            active.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(city) = param.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(state) = param.state {
            active.state = ActiveValue::Set(Some(state));
        }
        if let Some(zip_code) = param.zip_code {
            active.zip_code = ActiveValue::Set(Some(zip_code));
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(Some(country));
        }
        if let Some(email_notifications) = param.email_notifications {
            active.email_notifications = ActiveValue::Set(email_notifications);
        }
        if let Some(sms_notifications) = param.sms_notifications {
            active.sms_notifications = ActiveValue::Set(sms_notifications);
        }
        if let Some(marketing_emails) = param.marketing_emails {
            active.marketing_emails = ActiveValue::Set(marketing_emails);
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Marks the account with the given email as verified.
    ///
    /// # Returns
    /// - `Ok(true)` - Account updated
    /// - `Ok(false)` - No account with that email
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_email_verified(&self, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email))
            .col_expr(
                entity::user::Column::EmailVerified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a customer account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
