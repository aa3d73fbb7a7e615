use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::raffle::query_raffle,
        handlers::raffle::post_raffle,
    ),
    components(
        schemas(
            Participant,
            RegisterRequest,
            RaffleQuery,
            RaffleCommand,
            RaffleResponse,
        )
    ),
    tags(
        (name = "raffle", description = "Raffle registration API"),
    ),
    info(
        title = "Raffle Backend API",
        version = "1.0.0",
        description = "Registration, lookup and listing of raffle participants"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
