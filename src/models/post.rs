use serde::Serialize;

pub type PostId = u64;

/// A post as stored in a user's sequence and as returned by `/userposts`.
///
/// Content is kept exactly as submitted, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: PostId,
    pub content: String,
}

impl Post {
    pub fn new(post_id: PostId, content: String) -> Self {
        Self { post_id, content }
    }
}
