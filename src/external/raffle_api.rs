use crate::config::ClientConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ALREADY_REGISTERED, Participant, RaffleResponse, RegistrationOutcome};
use reqwest::{Client, StatusCode};
use serde_json::json;

/// 抽奖接口 HTTP 客户端（`GET ?action=...`、`POST {action}`）
///
/// `api_url` 为空时不发起任何请求，所有调用直接返回 `ConfigError`。
#[derive(Clone)]
pub struct RaffleApiClient {
    http: Client,
    base_url: String,
}

impl RaffleApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = Client::builder()
            .user_agent("raffle-backend/client")
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            base_url: config.api_url.trim().to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    fn endpoint(&self) -> AppResult<&str> {
        if self.is_configured() {
            Ok(&self.base_url)
        } else {
            Err(AppError::ConfigError("RAFFLE_API_URL is not set".into()))
        }
    }

    /// 获取全部参与者
    pub async fn list_participants(&self) -> AppResult<Vec<Participant>> {
        let resp = self
            .http
            .get(self.endpoint()?)
            .query(&[("action", "list")])
            .send()
            .await?;
        let body: RaffleResponse = resp.json().await?;

        if !body.success {
            return Err(AppError::ExternalApiError(
                body.error.unwrap_or_else(|| "List request failed".into()),
            ));
        }
        Ok(body.participants.unwrap_or_default())
    }

    /// 按邮箱查询；未登记返回 `Ok(None)`，与网络错误区分开
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Participant>> {
        let resp = self
            .http
            .get(self.endpoint()?)
            .query(&[("action", "getByEmail"), ("email", email)])
            .send()
            .await?;
        let status = resp.status();
        let body: RaffleResponse = resp.json().await?;

        if body.success {
            return body.participant.map(Some).ok_or_else(|| {
                AppError::ExternalApiError("Response is missing the participant".into())
            });
        }
        if status == StatusCode::NOT_FOUND || body.code.as_deref() == Some("NOT_FOUND") {
            return Ok(None);
        }
        Err(AppError::ExternalApiError(
            body.error.unwrap_or_else(|| "Lookup failed".into()),
        ))
    }

    /// 登记；服务端对重复邮箱返回原记录并附带 "Already registered"
    pub async fn register(&self, name: &str, email: &str) -> AppResult<RegistrationOutcome> {
        let resp = self
            .http
            .post(self.endpoint()?)
            .json(&json!({
                "action": "register",
                "name": name.trim(),
                "email": email.trim(),
            }))
            .send()
            .await?;
        let body: RaffleResponse = resp.json().await?;

        if !body.success {
            return Err(AppError::ExternalApiError(
                body.error.unwrap_or_else(|| "Registration failed".into()),
            ));
        }
        let participant = body.participant.ok_or_else(|| {
            AppError::ExternalApiError("Response is missing the participant".into())
        })?;

        if body.message.as_deref() == Some(ALREADY_REGISTERED) {
            Ok(RegistrationOutcome::AlreadyRegistered(participant))
        } else {
            Ok(RegistrationOutcome::Created(participant))
        }
    }
}
