use actix_cors::Cors;

/// 报名表单与抽奖页面部署在其他域名下，这里放开跨域
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
