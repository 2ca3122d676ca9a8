//! Complaint comment domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorType {
    User,
    Staff,
}

impl AuthorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Staff => "STAFF",
        }
    }
}

impl FromStr for AuthorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "STAFF" => Ok(Self::Staff),
            _ => Err(format!("Invalid author type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub complaint_id: String,
    pub author_email: String,
    pub author_type: AuthorType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            complaint_id: self.complaint_id,
            author_email: self.author_email,
            author_type: self.author_type.as_str().to_string(),
            message: self.message,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::comment::Model) -> Result<Self, DbErr> {
        let author_type = entity
            .author_type
            .parse::<AuthorType>()
            .map_err(|e| DbErr::Custom(format!("comment {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            complaint_id: entity.complaint_id,
            author_email: entity.author_email,
            author_type,
            message: entity.message,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub complaint_id: String,
    pub author_email: String,
    pub author_type: AuthorType,
    pub message: String,
}
