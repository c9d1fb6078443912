use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};
use regex::Regex;

use crate::errors::PostError;
use crate::models::post::{Post, PostId};
use crate::models::user::{User, UserKey};

// Structural check only: something, '@', something, '.', something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

fn looks_like_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lenient integer parse for the `postId` path segment.
///
/// Accepts leading whitespace, an optional sign and the longest run of
/// digits, ignoring whatever follows (`"12abc"` is 12). A `0x`/`0X` prefix
/// switches to hex (`"0x1f"` is 31). Returns `None` when there are no
/// digits or the value can't be a post id.
pub fn parse_post_id(raw: &str) -> Option<PostId> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = PostId::from_str_radix(&digits[..end], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

type PostList = Arc<Mutex<Vec<Post>>>;

/// Owns the users table, the per-user post sequences and the post id counter.
///
/// Built once at startup and shared between workers through `web::Data`.
/// Each user's sequence has its own lock, so writers for different users
/// never wait on each other.
pub struct PostService {
    users: RwLock<HashMap<UserKey, User>>,
    user_posts: RwLock<HashMap<UserKey, PostList>>,
    next_post_id: AtomicU64,
}

impl PostService {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            user_posts: RwLock::new(HashMap::new()),
            next_post_id: AtomicU64::new(1),
        }
    }

    // Every critical section leaves the maps consistent, so a poisoned lock
    // is still safe to use.
    fn users_read(&self) -> RwLockReadGuard<'_, HashMap<UserKey, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn users_write(&self) -> RwLockWriteGuard<'_, HashMap<UserKey, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_list(list: &PostList) -> MutexGuard<'_, Vec<Post>> {
        list.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_registered(&self, user_id: &str) -> bool {
        self.users_read().contains_key(user_id)
    }

    fn posts_of(&self, user_id: &str) -> Option<PostList> {
        self.user_posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn posts_of_or_create(&self, user_id: &str) -> PostList {
        if let Some(list) = self.posts_of(user_id) {
            return list;
        }
        self.user_posts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }

    pub fn sign_up(&self, name: Option<String>, email: Option<&str>) -> Result<(), PostError> {
        // Check-and-insert under one write lock so a duplicate can't slip in.
        let mut users = self.users_write();

        if let Some(email) = email {
            if users.contains_key(email) {
                return Err(PostError::EmailAlreadyRegistered);
            }
        }

        let email = match email {
            Some(e) if looks_like_email(e) => e,
            _ => return Err(PostError::InvalidEmailFormat),
        };

        let user = User::new(name, email);
        info!("registered user {} (name {:?})", user.key(), user.name);
        users.insert(user.key().to_string(), user);
        Ok(())
    }

    /// Stores a new post and returns the id it was given.
    ///
    /// The HTTP layer does not expose the id; it is returned here for callers
    /// and tests that need it.
    pub fn create_post(
        &self,
        user_id: Option<&str>,
        content: Option<String>,
    ) -> Result<PostId, PostError> {
        let user_id = match user_id {
            Some(id) if self.is_registered(id) => id,
            _ => return Err(PostError::UserNotFound),
        };

        let content = match content {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(PostError::EmptyContent),
        };

        let list = self.posts_of_or_create(user_id);
        let mut posts = Self::lock_list(&list);
        // Allocated under the user's lock so each sequence stays ordered by id.
        let post_id = self.next_post_id.fetch_add(1, Ordering::SeqCst);
        posts.push(Post::new(post_id, content));

        info!("user {} created post {}", user_id, post_id);
        Ok(post_id)
    }

    fn contains_post(list: &PostList, post_id: PostId) -> bool {
        let posts = Self::lock_list(list);
        posts.iter().any(|p| p.post_id == post_id)
    }

    fn post_exists(&self, user_id: &str, post_id: PostId) -> bool {
        self.posts_of(user_id)
            .is_some_and(|list| Self::contains_post(&list, post_id))
    }

    /// Only the owner may delete. Ownership is currently the same question as
    /// existence because lookup is scoped to the caller's own posts.
    fn is_authorized_to_delete(&self, user_id: &str, post_id: PostId) -> bool {
        self.posts_of(user_id)
            .is_some_and(|list| Self::contains_post(&list, post_id))
    }

    pub fn delete_post(&self, user_id: Option<&str>, post_id: Option<PostId>) -> Result<(), PostError> {
        let (user_id, post_id) = match (user_id, post_id) {
            (Some(u), Some(p)) => (u, p),
            _ => return Err(PostError::PostNotFound),
        };

        if !self.post_exists(user_id, post_id) {
            return Err(PostError::PostNotFound);
        }

        if !self.is_authorized_to_delete(user_id, post_id) {
            return Err(PostError::Unauthorized);
        }

        let list = self.posts_of(user_id).ok_or(PostError::PostNotFound)?;
        let mut posts = Self::lock_list(&list);
        let before = posts.len();
        posts.retain(|p| p.post_id != post_id);
        // A concurrent delete of the same post may have won the race.
        if posts.len() == before {
            return Err(PostError::PostNotFound);
        }

        info!("user {} deleted post {}", user_id, post_id);
        Ok(())
    }

    pub fn list_user_posts(&self, user_id: &str) -> Result<Vec<Post>, PostError> {
        if !self.is_registered(user_id) {
            return Err(PostError::UserNotFound);
        }

        let posts = match self.posts_of(user_id) {
            Some(list) => {
                let guard = Self::lock_list(&list);
                guard.clone()
            }
            None => Vec::new(),
        };
        if posts.is_empty() {
            return Err(PostError::NoPostsFound);
        }

        debug!("listing {} posts for {}", posts.len(), user_id);
        Ok(posts)
    }
}
