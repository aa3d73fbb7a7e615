use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Participant;

/// 抽奖接口统一响应结构
///
/// 只输出与 action 相关的字段：`list` 返回 `participants`；
/// `getByEmail` / `register` 返回 `participant`（可带 `message`）；
/// 失败时返回 `error` 与 `code`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RaffleResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl RaffleResponse {
    pub fn participant(participant: Participant) -> Self {
        Self {
            success: true,
            participant: Some(participant),
            ..Default::default()
        }
    }

    pub fn participant_with_message(participant: Participant, message: String) -> Self {
        Self {
            success: true,
            participant: Some(participant),
            message: Some(message),
            ..Default::default()
        }
    }

    pub fn participants(participants: Vec<Participant>) -> Self {
        Self {
            success: true,
            participants: Some(participants),
            ..Default::default()
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_omits_unrelated_fields() {
        let body = serde_json::to_value(RaffleResponse::participants(vec![Participant {
            number: 1,
            name: "A".into(),
            email: "a@x".into(),
        }]))
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "participants": [{ "number": 1, "name": "A", "email": "a@x" }]
            })
        );
    }

    #[test]
    fn test_error_envelope_carries_plain_message() {
        let body = serde_json::to_value(RaffleResponse::error("NOT_FOUND", "Not found")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("participant").is_none());
    }

    #[test]
    fn test_parses_response_without_code() {
        let parsed: RaffleResponse =
            serde_json::from_str(r#"{"success":false,"error":"Not found"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error.as_deref(), Some("Not found"));
        assert!(parsed.code.is_none());
    }
}
