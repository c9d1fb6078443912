use actix_web::{HttpResponse, post, web};
use log::warn;

use crate::dtos::MessageOut;
use crate::dtos::user_dtos::SignupIn;
use crate::errors::PostError;
use crate::middleware::json_body::JsonBody;
use crate::services::post_service::PostService;

/// POST /signup
#[post("/signup")]
pub async fn signup(
    svc: web::Data<PostService>,
    body: JsonBody<SignupIn>,
) -> Result<HttpResponse, PostError> {
    let SignupIn { name, email } = body.into_inner();

    svc.sign_up(name, email.as_deref())
        .inspect_err(|e| warn!("signup rejected for {:?}: {}", email, e))?;

    Ok(HttpResponse::Ok().json(MessageOut::ok("Successful user sign-up.")))
}
