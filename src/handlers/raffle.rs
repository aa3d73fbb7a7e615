use crate::error::AppError;
use crate::models::*;
use crate::services::ParticipantService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/raffle",
    tag = "raffle",
    params(RaffleQuery),
    responses(
        (status = 200, description = "action=list: 全部参与者; action=getByEmail: 对应参与者", body = RaffleResponse),
        (status = 400, description = "未知 action 或缺少 email", body = RaffleResponse),
        (status = 404, description = "该邮箱未登记", body = RaffleResponse)
    )
)]
/// 查询接口，按 `action` 分发:
/// - `list` 返回全部参与者（按号码升序）
/// - `getByEmail` 按邮箱（不区分大小写）查找单个参与者
pub async fn query_raffle(
    service: web::Data<ParticipantService>,
    query: web::Query<RaffleQuery>,
) -> Result<HttpResponse> {
    let RaffleQuery { action, email } = query.into_inner();
    let result = match action.as_deref() {
        Some("list") => service.list().await.map(RaffleResponse::participants),
        Some("getByEmail") => match email {
            Some(email) => service
                .get_by_email(&email)
                .await
                .map(RaffleResponse::participant),
            None => Err(AppError::ValidationError("Email is required".to_string())),
        },
        other => Err(AppError::UnknownAction(other.unwrap_or_default().to_string())),
    };

    match result {
        Ok(body) => Ok(HttpResponse::Ok().json(body)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/raffle",
    tag = "raffle",
    request_body = RaffleCommand,
    responses(
        (status = 200, description = "登记成功；邮箱已存在时返回原号码并附带 message", body = RaffleResponse),
        (status = 400, description = "未知 action 或参数错误", body = RaffleResponse)
    )
)]
/// 写接口，目前仅支持 `register`。同一邮箱重复登记返回原记录。
pub async fn post_raffle(
    service: web::Data<ParticipantService>,
    command: web::Json<RaffleCommand>,
) -> Result<HttpResponse> {
    let RaffleCommand {
        action,
        name,
        email,
    } = command.into_inner();
    if action != "register" {
        return Ok(AppError::UnknownAction(action).error_response());
    }

    let request = RegisterRequest {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
    };
    match service.register(request).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(RaffleResponse::from(outcome))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 请求体无法解析时也返回统一的 `{success:false, error}` 结构
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {err}")).into()
    })
}

/// 路由配置
pub fn raffle_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/raffle")
            .app_data(json_config())
            .route("", web::get().to(query_raffle))
            .route("", web::post().to(post_raffle)),
    );
}
