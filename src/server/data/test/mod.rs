mod attachment;
mod audit_log;
mod comment;
mod complaint;
mod notification;
mod rating;
mod staff;
mod staff_note;
mod system_setting;
mod user;
