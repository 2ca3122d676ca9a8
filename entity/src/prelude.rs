pub use super::audit_log::Entity as AuditLog;
pub use super::comment::Entity as Comment;
pub use super::complaint::Entity as Complaint;
pub use super::complaint_attachment::Entity as ComplaintAttachment;
pub use super::notification::Entity as Notification;
pub use super::rating::Entity as Rating;
pub use super::staff::Entity as Staff;
pub use super::staff_note::Entity as StaffNote;
pub use super::system_setting::Entity as SystemSetting;
pub use super::user::Entity as User;
