//! Directed follow edges.
//!
//! A row means `user_seq` follows `following_user_seq`. Nothing prevents a
//! user from following themselves.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "followings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_seq: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub following_user_seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserSeq",
        to = "super::users::Column::UserSeq",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::FollowingUserSeq",
        to = "super::users::Column::UserSeq",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Followed,
}

impl ActiveModelBehavior for ActiveModel {}
