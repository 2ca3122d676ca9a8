//! Default and sample account seeding.
//!
//! The default staff and admin accounts are ensured at startup. The sample directory of
//! customers and staff is only created on request through the staff init endpoint.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{staff::StaffRepository, user::UserRepository},
    error::AppError,
    model::{
        staff::{CreateStaffParam, StaffRole, UpdateStaffParam},
        user::CreateUserParam,
    },
    util::password::hash_password,
};

struct DefaultAccount {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    role: StaffRole,
    department: &'static str,
    phone: &'static str,
}

const DEFAULT_STAFF: DefaultAccount = DefaultAccount {
    email: "staff@gmail.com",
    first_name: "Support",
    last_name: "Agent",
    role: StaffRole::Staff,
    department: "Customer Support",
    phone: "1234567890",
};

const DEFAULT_ADMIN: DefaultAccount = DefaultAccount {
    email: "admin@gmail.com",
    first_name: "System",
    last_name: "Administrator",
    role: StaffRole::Admin,
    department: "Administration",
    phone: "0987654321",
};

const SAMPLE_USER_PASSWORD: &str = "password123";
const SAMPLE_STAFF_PASSWORD: &str = "staff123";

/// (email, full name, phone)
const SAMPLE_USERS: [(&str, &str, &str); 5] = [
    ("john.doe@gmail.com", "John Doe", "9876543210"),
    ("jane.smith@gmail.com", "Jane Smith", "9876543211"),
    ("mike.johnson@gmail.com", "Mike Johnson", "9876543212"),
    ("sarah.wilson@gmail.com", "Sarah Wilson", "9876543213"),
    ("david.brown@gmail.com", "David Brown", "9876543214"),
];

/// (email, first name, last name, department, role, phone)
const SAMPLE_STAFF: [(&str, &str, &str, &str, StaffRole, &str); 5] = [
    ("agent1@resolveit.com", "Alex", "Garcia", "Customer Support", StaffRole::Staff, "5551234567"),
    ("agent2@resolveit.com", "Emma", "Davis", "Customer Support", StaffRole::Staff, "5551234568"),
    ("agent3@resolveit.com", "Ryan", "Miller", "Technical Support", StaffRole::Staff, "5551234569"),
    ("supervisor@resolveit.com", "Lisa", "Anderson", "Quality Assurance", StaffRole::Supervisor, "5551234570"),
    ("manager@resolveit.com", "Mark", "Taylor", "Management", StaffRole::Manager, "5551234571"),
];

/// Accounts created by `seed_sample_directory`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_created: usize,
    pub staff_created: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures the default staff and admin accounts exist.
    ///
    /// An existing default account whose first name is empty gets its default names and
    /// department back. Passwords of existing accounts are never touched.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of accounts created
    pub async fn seed_default_accounts(
        &self,
        staff_password: &str,
        admin_password: &str,
    ) -> Result<usize, AppError> {
        let mut created = 0;

        for (account, password) in [(DEFAULT_STAFF, staff_password), (DEFAULT_ADMIN, admin_password)] {
            if self.ensure_default_account(&account, password).await? {
                created += 1;
            }
        }

        Ok(created)
    }

    /// Creates the sample customers and staff, skipping emails that already exist.
    pub async fn seed_sample_directory(&self) -> Result<SeedSummary, AppError> {
        let user_repo = UserRepository::new(self.db);
        let staff_repo = StaffRepository::new(self.db);
        let mut summary = SeedSummary::default();

        for (i, (email, full_name, phone)) in SAMPLE_USERS.into_iter().enumerate() {
            if user_repo.exists_by_email(email).await? {
                continue;
            }

            user_repo
                .create(CreateUserParam {
                    email: email.to_string(),
                    password_hash: hash_password(SAMPLE_USER_PASSWORD).await?,
                    full_name: full_name.to_string(),
                    phone_number: Some(phone.to_string()),
                    address: Some(format!("123 Main St, City {}", i + 1)),
                })
                .await?;
            summary.users_created += 1;
        }

        for (i, (email, first_name, last_name, department, role, phone)) in
            SAMPLE_STAFF.into_iter().enumerate()
        {
            if staff_repo.exists_by_email(email).await? {
                continue;
            }

            staff_repo
                .create(CreateStaffParam {
                    email: email.to_string(),
                    password_hash: hash_password(SAMPLE_STAFF_PASSWORD).await?,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    phone: Some(phone.to_string()),
                    role,
                    department: Some(department.to_string()),
                    workload: i as i32 * 2,
                })
                .await?;
            summary.staff_created += 1;
        }

        if summary != SeedSummary::default() {
            tracing::info!(
                "Seeded {} sample customer(s) and {} sample staff",
                summary.users_created,
                summary.staff_created
            );
        }

        Ok(summary)
    }

    /// Returns `true` when the account had to be created.
    async fn ensure_default_account(
        &self,
        account: &DefaultAccount,
        password: &str,
    ) -> Result<bool, AppError> {
        let staff_repo = StaffRepository::new(self.db);

        if let Some(existing) = staff_repo.find_by_email(account.email).await? {
            if existing.first_name.trim().is_empty() {
                staff_repo
                    .update(
                        existing.id,
                        UpdateStaffParam {
                            first_name: Some(account.first_name.to_string()),
                            last_name: Some(account.last_name.to_string()),
                            department: Some(account.department.to_string()),
                            ..Default::default()
                        },
                    )
                    .await?;
                tracing::info!("Restored default names for {}", account.email);
            }
            return Ok(false);
        }

        staff_repo
            .create(CreateStaffParam {
                email: account.email.to_string(),
                password_hash: hash_password(password).await?,
                first_name: account.first_name.to_string(),
                last_name: account.last_name.to_string(),
                phone: Some(account.phone.to_string()),
                role: account.role,
                department: Some(account.department.to_string()),
                workload: 0,
            })
            .await?;
        tracing::info!("Created default account {}", account.email);

        Ok(true)
    }
}
