use serde::{Deserialize, Serialize};

use crate::dtos::lenient_string;
use crate::models::post::Post;
use crate::models::user::UserKey;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostIn {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<UserKey>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
}

/// Body of `DELETE /deletepost/{postId}`. The post id itself comes from the path.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostIn {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<UserKey>,
}

#[derive(Debug, Serialize)]
pub struct UserPostsOut {
    pub status: u16,
    pub posts: Vec<Post>,
}
