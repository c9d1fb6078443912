use actix_web::{HttpResponse, delete, get, post, web};
use log::warn;

use crate::dtos::MessageOut;
use crate::dtos::post_dtos::{CreatePostIn, DeletePostIn, UserPostsOut};
use crate::errors::PostError;
use crate::middleware::json_body::JsonBody;
use crate::services::post_service::{PostService, parse_post_id};

/// POST /createpost
///
/// The id of the new post is not part of the response; clients find it
/// through `/userposts`.
#[post("/createpost")]
pub async fn create_post(
    svc: web::Data<PostService>,
    body: JsonBody<CreatePostIn>,
) -> Result<HttpResponse, PostError> {
    let CreatePostIn { user_id, content } = body.into_inner();

    svc.create_post(user_id.as_deref(), content)
        .inspect_err(|e| warn!("create post rejected for {:?}: {}", user_id, e))?;

    Ok(HttpResponse::Ok().json(MessageOut::ok("Successfully created.")))
}

/// DELETE /deletepost/{postId}
///
/// `userId` travels in the body. Without one the post is reported as not
/// found.
#[delete("/deletepost/{post_id}")]
pub async fn delete_post(
    svc: web::Data<PostService>,
    path: web::Path<String>,
    body: JsonBody<DeletePostIn>,
) -> Result<HttpResponse, PostError> {
    let raw_id = path.into_inner();
    let user_id = body.into_inner().user_id;

    svc.delete_post(user_id.as_deref(), parse_post_id(&raw_id))
        .inspect_err(|e| warn!("delete of post {:?} by {:?} rejected: {}", raw_id, user_id, e))?;

    Ok(HttpResponse::Ok().json(MessageOut::ok("Successful post deletion.")))
}

/// GET /userposts/{userId}
#[get("/userposts/{user_id}")]
pub async fn list_user_posts(
    svc: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, PostError> {
    let user_id = path.into_inner();
    let posts = svc
        .list_user_posts(&user_id)
        .inspect_err(|e| warn!("listing posts for {:?} rejected: {}", user_id, e))?;

    Ok(HttpResponse::Ok().json(UserPostsOut { status: 200, posts }))
}
