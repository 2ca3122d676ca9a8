//! Admin console service.
//!
//! This module provides the `AdminService` behind the admin endpoints: the overview
//! dashboard, customer and staff account management, complaint deletion, reports,
//! backups and the admin's own profile. Every mutation is written to the audit log
//! with the acting admin's email and request address.

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{complaint::ComplaintRepository, staff::StaffRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        admin::{
            AdminCreateStaffParam, AdminCreateUserParam, AdminUpdateStaffParam,
            AdminUpdateUserParam,
        },
        audit::{AuditAction, AuditContext, AuditEntityType, AuditEntry},
        complaint::Complaint,
        dashboard::{AdminDashboard, SystemReport},
        staff::{CreateStaffParam, Staff, UpdateStaffParam},
        user::{CreateUserParam, UpdateUserParam, User},
    },
    service::audit::{AuditService, RECENT_ACTIVITY_LIMIT},
    util::{
        password::{hash_password, is_too_short, MIN_PASSWORD_LENGTH},
        sanitize::is_valid_email,
    },
};

/// Number of complaints listed on the admin dashboard.
const RECENT_COMPLAINT_LIMIT: u64 = 10;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the admin overview for an admin account.
    ///
    /// `resolved_today` counts complaints set to `RESOLVED` since midnight UTC.
    ///
    /// # Returns
    /// - `Ok(AdminDashboard)` - Totals and the 10 newest complaints
    /// - `Err(AuthError::AccessDenied)` - The email is not an admin account
    pub async fn get_dashboard(&self, email: &str) -> Result<AdminDashboard, AppError> {
        let Some(admin) = self.find_admin(email).await? else {
            return Err(AuthError::AccessDenied(
                email.to_string(),
                "admin dashboard requested for a non-admin account".to_string(),
            )
            .into());
        };

        let complaint_repo = ComplaintRepository::new(self.db);
        let start_of_day = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

        Ok(AdminDashboard {
            admin,
            total_users: UserRepository::new(self.db).count().await?,
            total_staff: StaffRepository::new(self.db).count().await?,
            total_complaints: complaint_repo.count_all().await?.total,
            resolved_today: complaint_repo.count_resolved_since(start_of_day).await?,
            recent_complaints: complaint_repo.get_all(Some(RECENT_COMPLAINT_LIMIT)).await?,
        })
    }

    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_staff(&self) -> Result<Vec<Staff>, AppError> {
        Ok(StaffRepository::new(self.db).get_all().await?)
    }

    /// Creates a customer account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Missing fields, bad email, short password or
    ///   "Email already exists"
    pub async fn create_user(
        &self,
        ctx: &AuditContext,
        param: AdminCreateUserParam,
    ) -> Result<User, AppError> {
        let email = param.email.trim().to_string();
        if param.full_name.trim().is_empty() {
            return Err(AppError::BadRequest("Full name is required".to_string()));
        }
        validate_credentials(&email, &param.password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.exists_by_email(&email).await? {
            return Err(email_taken());
        }

        let user = user_repo
            .create(CreateUserParam {
                email,
                password_hash: hash_password(&param.password).await?,
                full_name: param.full_name.trim().to_string(),
                phone_number: param.phone_number,
                address: param.address,
            })
            .await?;

        self.audit(
            ctx,
            AuditAction::Create,
            AuditEntityType::User,
            user.id,
            format!("Created user: {}", user.email),
        )
        .await?;

        Ok(user)
    }

    /// Updates a customer account by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AppError::NotFound)` - "User not found"
    pub async fn update_user(
        &self,
        ctx: &AuditContext,
        id: i32,
        param: AdminUpdateUserParam,
    ) -> Result<User, AppError> {
        let password_hash = hash_optional_password(param.password).await?;

        let user = UserRepository::new(self.db)
            .update(
                id,
                UpdateUserParam {
                    full_name: param.full_name,
                    phone_number: param.phone_number,
                    address: param.address,
                    password_hash,
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(user_not_found)?;

        self.audit(
            ctx,
            AuditAction::Update,
            AuditEntityType::User,
            user.id,
            format!("Updated user: {}", user.email),
        )
        .await?;

        Ok(user)
    }

    /// Deletes a customer account by ID.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - "User not found"
    pub async fn delete_user(&self, ctx: &AuditContext, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(id).await?.ok_or_else(user_not_found)?;

        if !user_repo.delete(id).await? {
            return Err(user_not_found());
        }

        self.audit(
            ctx,
            AuditAction::Delete,
            AuditEntityType::User,
            id,
            format!("Deleted user: {}", user.email),
        )
        .await?;

        Ok(())
    }

    /// Creates a staff account.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The created account
    /// - `Err(AppError::BadRequest)` - Bad email, short password or "Email already exists"
    pub async fn create_staff(
        &self,
        ctx: &AuditContext,
        param: AdminCreateStaffParam,
    ) -> Result<Staff, AppError> {
        let email = param.email.trim().to_string();
        validate_credentials(&email, &param.password)?;

        let staff_repo = StaffRepository::new(self.db);
        if staff_repo.exists_by_email(&email).await? {
            return Err(email_taken());
        }

        let staff = staff_repo
            .create(CreateStaffParam {
                email,
                password_hash: hash_password(&param.password).await?,
                first_name: param.first_name,
                last_name: param.last_name,
                phone: param.phone,
                role: param.role,
                department: param.department,
                workload: 0,
            })
            .await?;

        self.audit(
            ctx,
            AuditAction::Create,
            AuditEntityType::Staff,
            staff.id,
            format!("Created staff: {}", staff.email),
        )
        .await?;

        Ok(staff)
    }

    /// Updates a staff account by ID, including role and password.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The updated account
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AppError::NotFound)` - "Staff not found"
    pub async fn update_staff(
        &self,
        ctx: &AuditContext,
        id: i32,
        param: AdminUpdateStaffParam,
    ) -> Result<Staff, AppError> {
        let password_hash = hash_optional_password(param.password).await?;

        let staff = StaffRepository::new(self.db)
            .update(
                id,
                UpdateStaffParam {
                    first_name: param.first_name,
                    last_name: param.last_name,
                    phone: param.phone,
                    department: param.department,
                    role: param.role,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(staff_not_found)?;

        self.audit(
            ctx,
            AuditAction::Update,
            AuditEntityType::Staff,
            staff.id,
            format!("Updated staff: {}", staff.email),
        )
        .await?;

        Ok(staff)
    }

    /// Deletes a staff account by ID.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - "Staff not found"
    pub async fn delete_staff(&self, ctx: &AuditContext, id: i32) -> Result<(), AppError> {
        let staff_repo = StaffRepository::new(self.db);
        let staff = staff_repo.find_by_id(id).await?.ok_or_else(staff_not_found)?;

        if !staff_repo.delete(id).await? {
            return Err(staff_not_found());
        }

        self.audit(
            ctx,
            AuditAction::Delete,
            AuditEntityType::Staff,
            id,
            format!("Deleted staff: {}", staff.email),
        )
        .await?;

        Ok(())
    }

    /// Deletes a complaint with its attachments, comments, notes and rating.
    ///
    /// Attachment files on disk are left in place.
    ///
    /// # Returns
    /// - `Ok(())` - Complaint deleted
    /// - `Err(AppError::NotFound)` - "Complaint not found"
    pub async fn delete_complaint(
        &self,
        ctx: &AuditContext,
        complaint_id: &str,
    ) -> Result<(), AppError> {
        if !ComplaintRepository::new(self.db)
            .delete_with_children(complaint_id)
            .await?
        {
            return Err(AppError::NotFound("Complaint not found".to_string()));
        }

        self.audit(
            ctx,
            AuditAction::Delete,
            AuditEntityType::Complaint,
            complaint_id,
            format!("Deleted complaint: {}", complaint_id),
        )
        .await?;

        Ok(())
    }

    /// Builds the system report: totals, counts by status and the latest audit entries.
    pub async fn get_report(&self) -> Result<SystemReport, AppError> {
        Ok(SystemReport {
            total_users: UserRepository::new(self.db).count().await?,
            total_staff: StaffRepository::new(self.db).count().await?,
            counts: ComplaintRepository::new(self.db).count_all().await?,
            recent_activity: AuditService::new(self.db)
                .get_latest(RECENT_ACTIVITY_LIMIT)
                .await?,
        })
    }

    pub async fn get_audit_logs(&self) -> Result<Vec<AuditEntry>, AppError> {
        AuditService::new(self.db).get_all().await
    }

    /// Records a backup request and returns its ID.
    ///
    /// No data is copied; the ID marks the point in the audit log.
    pub async fn create_backup(&self, ctx: &AuditContext) -> Result<String, AppError> {
        let backup_id = format!("backup_{}", Utc::now().timestamp_millis());

        self.audit(
            ctx,
            AuditAction::Backup,
            AuditEntityType::System,
            &backup_id,
            "System backup created".to_string(),
        )
        .await?;

        Ok(backup_id)
    }

    /// Retrieves every complaint, newest first.
    pub async fn get_complaints(&self) -> Result<Vec<Complaint>, AppError> {
        Ok(ComplaintRepository::new(self.db).get_all(None).await?)
    }

    /// Retrieves an admin profile.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The admin account
    /// - `Err(AppError::NotFound)` - "Admin not found", also for non-admin staff
    pub async fn get_profile(&self, email: &str) -> Result<Staff, AppError> {
        self.find_admin(email).await?.ok_or_else(admin_not_found)
    }

    /// Updates an admin's name, phone and department.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The updated account
    /// - `Err(AppError::NotFound)` - "Admin not found"
    pub async fn update_profile(
        &self,
        ctx: &AuditContext,
        email: &str,
        param: UpdateStaffParam,
    ) -> Result<Staff, AppError> {
        let admin = self.find_admin(email).await?.ok_or_else(admin_not_found)?;

        let param = UpdateStaffParam {
            role: None,
            password_hash: None,
            ..param
        };
        let admin = StaffRepository::new(self.db)
            .update(admin.id, param)
            .await?
            .ok_or_else(admin_not_found)?;

        self.audit(
            ctx,
            AuditAction::Update,
            AuditEntityType::AdminProfile,
            admin.id,
            "Updated admin profile".to_string(),
        )
        .await?;

        Ok(admin)
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Staff>, AppError> {
        Ok(StaffRepository::new(self.db)
            .find_by_email(email)
            .await?
            .filter(|staff| staff.role.is_admin()))
    }

    async fn audit(
        &self,
        ctx: &AuditContext,
        action: AuditAction,
        entity_type: AuditEntityType,
        entity_id: impl ToString,
        details: String,
    ) -> Result<(), AppError> {
        AuditService::new(self.db)
            .record(ctx.record(action, entity_type, entity_id.to_string(), details))
            .await?;
        Ok(())
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if is_too_short(password) {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Hashes a replacement password; `None` or an empty string keeps the current one.
async fn hash_optional_password(password: Option<String>) -> Result<Option<String>, AppError> {
    match password.filter(|p| !p.is_empty()) {
        Some(password) if is_too_short(&password) => Err(AppError::BadRequest(
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        )),
        Some(password) => Ok(Some(hash_password(&password).await?)),
        None => Ok(None),
    }
}

fn email_taken() -> AppError {
    AppError::BadRequest("Email already exists".to_string())
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn staff_not_found() -> AppError {
    AppError::NotFound("Staff not found".to_string())
}

fn admin_not_found() -> AppError {
    AppError::NotFound("Admin not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{data::audit_log::AuditLogRepository, model::staff::StaffRole};
    use test_utils::{builder::TestBuilder, factory};

    fn ctx() -> AuditContext {
        AuditContext::new("admin@example.com", Some("127.0.0.1".to_string()))
    }

    /// Tests the admin dashboard for admin and non-admin accounts.
    ///
    /// Expected: totals for the admin, AccessDenied for a plain staff member
    #[tokio::test]
    async fn dashboard_requires_admin_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let admin = factory::create_admin(db).await?;
        let staff = factory::create_staff(db).await?;
        factory::helpers::create_complaint_with_owner(db).await?;
        factory::complaint::ComplaintFactory::new(db, "jane@example.com")
            .status("RESOLVED")
            .build()
            .await?;
        let service = AdminService::new(db);

        let dashboard = service.get_dashboard(&admin.email).await?;
        let denied = service.get_dashboard(&staff.email).await;

        assert_eq!(dashboard.total_users, 1);
        assert_eq!(dashboard.total_staff, 2);
        assert_eq!(dashboard.total_complaints, 2);
        assert_eq!(dashboard.resolved_today, 1);
        assert!(matches!(
            denied,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));

        Ok(())
    }

    /// Tests creating, updating and deleting a customer.
    ///
    /// Expected: each step audited by the acting admin, duplicate email rejected
    #[tokio::test]
    async fn manages_user_lifecycle() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);
        let param = AdminCreateUserParam {
            full_name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        };

        let user = service.create_user(&ctx(), param.clone()).await?;
        let duplicate = service.create_user(&ctx(), param).await;
        let updated = service
            .update_user(
                &ctx(),
                user.id,
                AdminUpdateUserParam {
                    address: Some("1 Elm St".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        service.delete_user(&ctx(), user.id).await?;
        let missing = service.delete_user(&ctx(), user.id).await;

        assert!(matches!(duplicate, Err(AppError::BadRequest(ref msg)) if msg == "Email already exists"));
        assert_eq!(updated.address.as_deref(), Some("1 Elm St"));
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let audit = AuditLogRepository::new(db)
            .get_by_entity(AuditEntityType::User, &user.id.to_string())
            .await?;
        let actions: Vec<&str> = audit.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["DELETE", "UPDATE", "CREATE"]);
        assert!(audit.iter().all(|e| e.user_email == "admin@example.com"));

        Ok(())
    }

    /// Tests promoting a staff member through an admin update.
    ///
    /// Expected: role changed and UPDATE audit entry written
    #[tokio::test]
    async fn updates_staff_role() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let staff = factory::create_staff(db).await?;

        let updated = AdminService::new(db)
            .update_staff(
                &ctx(),
                staff.id,
                AdminUpdateStaffParam {
                    role: Some(StaffRole::Supervisor),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(updated.role, StaffRole::Supervisor);

        Ok(())
    }

    /// Tests deleting a complaint.
    ///
    /// Expected: complaint gone, second delete is NotFound
    #[tokio::test]
    async fn deletes_complaint() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let complaint = factory::create_complaint(db, "jane@example.com").await?;
        let service = AdminService::new(db);

        service.delete_complaint(&ctx(), &complaint.complaint_id).await?;
        let again = service.delete_complaint(&ctx(), &complaint.complaint_id).await;

        assert!(!ComplaintRepository::new(db)
            .exists(&complaint.complaint_id)
            .await?);
        assert!(matches!(again, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests creating a backup marker.
    ///
    /// Expected: backup_ prefixed ID with a matching BACKUP audit entry
    #[tokio::test]
    async fn records_backup() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let backup_id = AdminService::new(db).create_backup(&ctx()).await?;

        assert!(backup_id.starts_with("backup_"));
        let audit = AuditLogRepository::new(db)
            .get_by_entity(AuditEntityType::System, &backup_id)
            .await?;
        assert_eq!(audit[0].action, "BACKUP");

        Ok(())
    }

    /// Tests reading the admin profile of a non-admin.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn profile_only_for_admins() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let staff = factory::create_staff(db).await?;

        let result = AdminService::new(db).get_profile(&staff.email).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
