pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_staff_table;
mod m20260105_000003_create_complaint_table;
mod m20260105_000004_create_complaint_attachment_table;
mod m20260105_000005_create_comment_table;
mod m20260105_000006_create_staff_note_table;
mod m20260105_000007_create_rating_table;
mod m20260105_000008_create_notification_table;
mod m20260105_000009_create_audit_log_table;
mod m20260105_000010_create_system_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_staff_table::Migration),
            Box::new(m20260105_000003_create_complaint_table::Migration),
            Box::new(m20260105_000004_create_complaint_attachment_table::Migration),
            Box::new(m20260105_000005_create_comment_table::Migration),
            Box::new(m20260105_000006_create_staff_note_table::Migration),
            Box::new(m20260105_000007_create_rating_table::Migration),
            Box::new(m20260105_000008_create_notification_table::Migration),
            Box::new(m20260105_000009_create_audit_log_table::Migration),
            Box::new(m20260105_000010_create_system_setting_table::Migration),
        ]
    }
}
