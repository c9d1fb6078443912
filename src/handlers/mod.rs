pub mod post_handlers;
pub mod user_handlers;

use actix_web::{HttpResponse, error, web};

use crate::dtos::MessageOut;

/// Registers every endpoint plus the JSON body config on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(user_handlers::signup)
        .service(post_handlers::create_post)
        .service(post_handlers::delete_post)
        .service(post_handlers::list_user_posts);
}

/// Malformed bodies get the same `{status, message}` shape as domain errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = MessageOut::new(400, format!("Invalid JSON body: {}", err));
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageOut::new(404, "Route not found."))
}
