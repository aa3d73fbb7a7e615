use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 参与者实体
/// 说明:
/// - number 即抽奖号码，插入时由数据库自增生成
/// - email 保存用户提交的原样（已 trim）；email_key 为小写副本，唯一索引保证一个邮箱只登记一次
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub number: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub email_key: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
