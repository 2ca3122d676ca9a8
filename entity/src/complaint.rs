use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub complaint_id: String,
    pub user_email: String,
    pub order_id: String,
    pub order_date: Option<Date>,
    pub issue_type: String,
    pub title: Option<String>,
    pub description: String,
    pub status: String,
    pub priority: Option<String>,
    pub priority_level: i32,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::complaint_attachment::Entity")]
    ComplaintAttachment,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::staff_note::Entity")]
    StaffNote,
    #[sea_orm(has_one = "super::rating::Entity")]
    Rating,
}

impl Related<super::complaint_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplaintAttachment.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::staff_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffNote.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
