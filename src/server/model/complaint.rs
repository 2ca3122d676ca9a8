//! Complaint domain models and parameters.
//!
//! A complaint moves through `PENDING`, `IN_PROGRESS` and `RESOLVED`. Any status may be
//! set from any other; staff reopen resolved complaints by setting them back.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::{
    complaint::{ComplaintDetailDto, ComplaintDto, ComplaintSearchQuery, SubmitComplaintDto},
    staff::BulkUpdateDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    /// Parses a status case-insensitively. Spaces and dashes are read as underscores
    /// so `"in progress"` and `"IN-PROGRESS"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Numeric priority used for sorting: Low=1, Medium=2, High=3, Critical=4, other=0.
pub fn priority_level(priority: Option<&str>) -> i32 {
    match priority.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
        Some("low") => 1,
        Some("medium") => 2,
        Some("high") => 3,
        Some("critical") => 4,
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Complaint {
    pub id: i32,
    pub complaint_id: String,
    pub user_email: String,
    pub order_id: String,
    pub order_date: Option<NaiveDate>,
    pub issue_type: String,
    pub title: Option<String>,
    pub description: String,
    pub status: ComplaintStatus,
    pub priority: Option<String>,
    pub priority_level: i32,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    pub fn into_dto(self) -> ComplaintDto {
        ComplaintDto {
            id: self.id,
            complaint_id: self.complaint_id,
            user_email: self.user_email,
            order_id: self.order_id,
            order_date: self.order_date,
            issue_type: self.issue_type,
            title: self.title,
            description: self.description,
            status: self.status.to_string(),
            priority: self.priority,
            priority_level: self.priority_level,
            contact_phone: self.contact_phone,
            expected_resolution: self.expected_resolution,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a complaint domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored status is not a known status
    pub fn from_entity(entity: entity::complaint::Model) -> Result<Self, DbErr> {
        let status = entity
            .status
            .parse::<ComplaintStatus>()
            .map_err(|e| DbErr::Custom(format!("complaint {}: {}", entity.complaint_id, e)))?;

        Ok(Self {
            id: entity.id,
            complaint_id: entity.complaint_id,
            user_email: entity.user_email,
            order_id: entity.order_id,
            order_date: entity.order_date,
            issue_type: entity.issue_type,
            title: entity.title,
            description: entity.description,
            status,
            priority: entity.priority,
            priority_level: entity.priority_level,
            contact_phone: entity.contact_phone,
            expected_resolution: entity.expected_resolution,
            assigned_to: entity.assigned_to,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// A complaint together with the stored paths of its attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintDetail {
    pub complaint: Complaint,
    pub attachments: Vec<String>,
}

impl ComplaintDetail {
    pub fn into_dto(self) -> ComplaintDetailDto {
        ComplaintDetailDto {
            complaint: self.complaint.into_dto(),
            attachments: self.attachments,
        }
    }
}

/// Counts of complaints by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintCounts {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

/// Parameters for inserting a complaint.
#[derive(Debug, Clone)]
pub struct CreateComplaintParam {
    pub complaint_id: String,
    pub user_email: String,
    pub order_id: String,
    pub order_date: Option<NaiveDate>,
    pub issue_type: String,
    pub title: Option<String>,
    pub description: String,
    pub status: ComplaintStatus,
    pub priority: Option<String>,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
    pub assigned_to: Option<String>,
}

/// Fields submitted by a customer when filing a complaint.
#[derive(Debug, Clone, Default)]
pub struct SubmitComplaintParam {
    pub user_email: String,
    pub order_id: String,
    /// Raw `YYYY-MM-DD` value; blank means no date.
    pub order_date: Option<String>,
    pub issue_type: String,
    pub title: Option<String>,
    pub description: String,
    pub priority: Option<String>,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
}

impl SubmitComplaintParam {
    pub fn from_dto(user_email: String, dto: SubmitComplaintDto) -> Self {
        Self {
            user_email,
            order_id: dto.order_id,
            order_date: dto.order_date,
            issue_type: dto.issue_type,
            title: dto.issue_title,
            description: dto.issue_description,
            priority: dto.priority,
            contact_phone: dto.contact_phone,
            expected_resolution: dto.expected_resolution,
        }
    }
}

/// Filters for searching a customer's complaints.
///
/// Every filter is optional. `created_after` and `created_before` are exclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct ComplaintSearchParam {
    pub user_email: String,
    /// Case-insensitive substring of the complaint ID.
    pub complaint_id: Option<String>,
    /// Case-insensitive status name.
    pub status: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl ComplaintSearchParam {
    /// Builds search filters from raw query values.
    ///
    /// Blank values are ignored. `from_date` keeps complaints created after the start of
    /// that day and `to_date` keeps those created before 23:59:59 of that day.
    ///
    /// # Returns
    /// - `Ok(ComplaintSearchParam)` - Parsed filters
    /// - `Err(String)` - A date is not in `YYYY-MM-DD` form
    pub fn from_query(user_email: String, query: ComplaintSearchQuery) -> Result<Self, String> {
        let created_after = non_blank(query.from_date)
            .map(|value| parse_day(&value))
            .transpose()?
            .map(|day| day.and_time(NaiveTime::MIN).and_utc());
        let created_before = non_blank(query.to_date)
            .map(|value| parse_day(&value))
            .transpose()?
            .map(|day| (day.and_time(NaiveTime::MIN) + Duration::seconds(END_OF_DAY_SECS)).and_utc());

        Ok(Self {
            user_email,
            complaint_id: non_blank(query.complaint_id),
            status: non_blank(query.status),
            created_after,
            created_before,
        })
    }
}

const END_OF_DAY_SECS: i64 = 23 * 3600 + 59 * 60 + 59;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {}", value))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Changes applied to each complaint in a bulk update.
#[derive(Debug, Clone, Default)]
pub struct BulkUpdateParam {
    pub complaint_ids: Vec<String>,
    pub status: Option<ComplaintStatus>,
    pub assign_to: Option<String>,
}

impl BulkUpdateParam {
    /// Converts the request body. Blank status and assignee are ignored.
    ///
    /// # Returns
    /// - `Err(String)` - The status is not a known status
    pub fn from_dto(dto: BulkUpdateDto) -> Result<Self, String> {
        let status = non_blank(dto.status)
            .map(|s| s.parse::<ComplaintStatus>())
            .transpose()?;

        Ok(Self {
            complaint_ids: dto.complaint_ids,
            status,
            assign_to: non_blank(dto.assign_to),
        })
    }
}

/// A file received with a complaint submission.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the client, possibly including path components.
    pub file_name: String,
    pub bytes: Vec<u8>,
}
