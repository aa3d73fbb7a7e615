use crate::entities::participant_entity as participants;
use crate::error::{AppError, AppResult};
use crate::models::{Participant, RegisterRequest, RegistrationOutcome};
use crate::utils::{normalize_email, validate_email};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

const MAX_NAME_LEN: usize = 255;

#[derive(Clone)]
pub struct ParticipantService {
    pool: DatabaseConnection,
}

impl ParticipantService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 登记参与者（同一邮箱幂等）
    ///
    /// 逻辑:
    /// 1. 去除首尾空白并校验姓名、邮箱
    /// 2. 邮箱（不区分大小写）已存在则直接返回原记录
    /// 3. 否则插入，号码由数据库自增生成
    /// 4. 并发插入同一邮箱会触发唯一索引冲突，此时返回先写入的那条记录
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegistrationOutcome> {
        let name = request.name.trim();
        let email = request.email.trim();

        if name.is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::ValidationError(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        validate_email(email)?;

        let email_key = normalize_email(email);

        if let Some(existing) = Self::find_by_key(&self.pool, &email_key).await? {
            log::info!(
                "Email already registered, returning ticket {}",
                existing.number
            );
            return Ok(RegistrationOutcome::AlreadyRegistered(existing.into()));
        }

        let txn = self.pool.begin().await?;
        let inserted = participants::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            email_key: Set(email_key.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        match inserted {
            Ok(model) => {
                txn.commit().await?;
                log::info!("Registered participant with ticket {}", model.number);
                Ok(RegistrationOutcome::Created(model.into()))
            }
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                log::warn!("Concurrent registration for the same email, re-reading existing row");
                let existing = Self::find_by_key(&self.pool, &email_key)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(
                            "Participant vanished after unique violation".to_string(),
                        )
                    })?;
                Ok(RegistrationOutcome::AlreadyRegistered(existing.into()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 按邮箱查询（不区分大小写），不存在返回 `NotFound("Not found")`
    pub async fn get_by_email(&self, email: &str) -> AppResult<Participant> {
        let email_key = normalize_email(email);
        if email_key.is_empty() {
            return Err(AppError::ValidationError("Email is required".to_string()));
        }

        Self::find_by_key(&self.pool, &email_key)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))
    }

    /// 全部参与者（按号码升序）
    pub async fn list(&self) -> AppResult<Vec<Participant>> {
        let list = participants::Entity::find()
            .order_by_asc(participants::Column::Number)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn find_by_key<C: ConnectionTrait>(
        conn: &C,
        email_key: &str,
    ) -> Result<Option<participants::Model>, DbErr> {
        participants::Entity::find()
            .filter(participants::Column::EmailKey.eq(email_key))
            .one(conn)
            .await
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
