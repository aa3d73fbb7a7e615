use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::participant_entity;

/// 重复登记时附带的提示
pub const ALREADY_REGISTERED: &str = "Already registered";

/// 参与者对外信息（不含创建时间与邮箱键）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    /// 号码（按登记顺序分配）
    #[schema(example = 1)]
    pub number: i32,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<participant_entity::Model> for Participant {
    fn from(m: participant_entity::Model) -> Self {
        Participant {
            number: m.number,
            name: m.name,
            email: m.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// `GET /raffle` 查询参数
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaffleQuery {
    /// `list` 或 `getByEmail`
    pub action: Option<String>,
    /// 要查询的邮箱（`getByEmail` 使用）
    pub email: Option<String>,
}

/// `POST /raffle` 请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaffleCommand {
    /// `register`
    #[schema(example = "register")]
    pub action: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// 登记结果（两种情况都算成功）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created(Participant),
    AlreadyRegistered(Participant),
}

impl RegistrationOutcome {
    pub fn participant(&self) -> &Participant {
        match self {
            RegistrationOutcome::Created(p) | RegistrationOutcome::AlreadyRegistered(p) => p,
        }
    }

    pub fn into_participant(self) -> Participant {
        match self {
            RegistrationOutcome::Created(p) | RegistrationOutcome::AlreadyRegistered(p) => p,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, RegistrationOutcome::Created(_))
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            RegistrationOutcome::Created(_) => None,
            RegistrationOutcome::AlreadyRegistered(_) => Some(ALREADY_REGISTERED),
        }
    }
}

impl From<RegistrationOutcome> for super::RaffleResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome.message() {
            Some(message) => super::RaffleResponse::participant_with_message(
                outcome.into_participant(),
                message.to_string(),
            ),
            None => super::RaffleResponse::participant(outcome.into_participant()),
        }
    }
}
