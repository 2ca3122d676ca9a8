//! Staff note domain models.

use chrono::{DateTime, Utc};

use crate::model::staff::StaffNoteDto;

/// A note left by staff on a complaint. Internal notes are hidden from customers.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffNote {
    pub id: i32,
    pub complaint_id: String,
    pub staff_email: String,
    pub note: String,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

impl StaffNote {
    pub fn into_dto(self) -> StaffNoteDto {
        StaffNoteDto {
            id: self.id,
            complaint_id: self.complaint_id,
            staff_email: self.staff_email,
            note: self.note,
            is_internal: self.is_internal,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::staff_note::Model) -> Self {
        Self {
            id: entity.id,
            complaint_id: entity.complaint_id,
            staff_email: entity.staff_email,
            note: entity.note,
            is_internal: entity.is_internal,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStaffNoteParam {
    pub complaint_id: String,
    pub staff_email: String,
    pub note: String,
    pub is_internal: bool,
}
