//! Aggregated views for the customer, staff and admin dashboards.

use crate::{
    model::{
        admin::{AdminDashboardDto, SystemReportDto},
        dashboard::UserDashboardDto,
        staff::{StaffDashboardDto, StaffPerformanceDto},
    },
    server::model::{
        audit::AuditEntry,
        complaint::{Complaint, ComplaintCounts},
        notification::Notification,
        staff::Staff,
    },
};

/// Customer dashboard. An email without an account still gets counts, with the
/// fallback first name.
pub struct UserDashboard {
    pub first_name: String,
    pub email: String,
    pub counts: ComplaintCounts,
    pub recent_complaints: Vec<Complaint>,
    pub notifications: Vec<Notification>,
    pub unread_notifications: u64,
}

impl UserDashboard {
    pub fn into_dto(self) -> UserDashboardDto {
        UserDashboardDto {
            first_name: self.first_name,
            email: self.email,
            total_complaints: self.counts.total,
            pending_complaints: self.counts.pending,
            in_progress_complaints: self.counts.in_progress,
            resolved_complaints: self.counts.resolved,
            recent_complaints: self
                .recent_complaints
                .into_iter()
                .map(Complaint::into_dto)
                .collect(),
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            unread_notifications: self.unread_notifications,
        }
    }
}

pub struct StaffDashboard {
    pub staff: Staff,
    pub counts: ComplaintCounts,
    pub recent_complaints: Vec<Complaint>,
}

impl StaffDashboard {
    pub fn into_dto(self) -> StaffDashboardDto {
        StaffDashboardDto {
            first_name: self.staff.first_name,
            last_name: self.staff.last_name,
            email: self.staff.email,
            role: self.staff.role.to_string(),
            department: self.staff.department,
            total_complaints: self.counts.total,
            pending_complaints: self.counts.pending,
            in_progress_complaints: self.counts.in_progress,
            resolved_complaints: self.counts.resolved,
            recent_complaints: self
                .recent_complaints
                .into_iter()
                .map(Complaint::into_dto)
                .collect(),
        }
    }
}

/// Workload statistics for one staff member.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffPerformance {
    pub counts: ComplaintCounts,
    /// Percentage resolved, rounded to two decimals.
    pub resolution_rate: f64,
}

impl StaffPerformance {
    pub fn into_dto(self) -> StaffPerformanceDto {
        StaffPerformanceDto {
            total_assigned: self.counts.total,
            resolved: self.counts.resolved,
            in_progress: self.counts.in_progress,
            pending: self.counts.pending,
            resolution_rate: self.resolution_rate,
        }
    }
}

pub struct AdminDashboard {
    pub admin: Staff,
    pub total_users: u64,
    pub total_staff: u64,
    pub total_complaints: u64,
    pub resolved_today: u64,
    pub recent_complaints: Vec<Complaint>,
}

impl AdminDashboard {
    pub fn into_dto(self) -> AdminDashboardDto {
        AdminDashboardDto {
            first_name: self.admin.first_name,
            last_name: self.admin.last_name,
            email: self.admin.email,
            role: self.admin.role.to_string(),
            total_users: self.total_users,
            total_staff: self.total_staff,
            total_complaints: self.total_complaints,
            resolved_today: self.resolved_today,
            recent_complaints: self
                .recent_complaints
                .into_iter()
                .map(Complaint::into_dto)
                .collect(),
        }
    }
}

pub struct SystemReport {
    pub total_users: u64,
    pub total_staff: u64,
    pub counts: ComplaintCounts,
    pub recent_activity: Vec<AuditEntry>,
}

impl SystemReport {
    pub fn into_dto(self) -> SystemReportDto {
        SystemReportDto {
            total_users: self.total_users,
            total_staff: self.total_staff,
            total_complaints: self.counts.total,
            pending_complaints: self.counts.pending,
            in_progress_complaints: self.counts.in_progress,
            resolved_complaints: self.counts.resolved,
            recent_activity: self
                .recent_activity
                .into_iter()
                .map(AuditEntry::into_dto)
                .collect(),
        }
    }
}
