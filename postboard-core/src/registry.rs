//! Post registry - the newest-first post collection and its id counter
//!
//! Lookup rules differ per operation:
//! - list / get_by_id / edit / soft_delete only see live posts
//! - restore sees every post, live or removed

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::post::{Post, PostId};

/// In-memory post store
///
/// Created empty; dropped with the process. Callers sharing a registry
/// across threads must guard it with a single lock, since the mutating
/// operations are find-then-modify sequences.
#[derive(Debug)]
pub struct PostRegistry {
    /// Newest first
    posts: VecDeque<Post>,
    next_id: PostId,
}

impl Default for PostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PostRegistry {
    pub fn new() -> Self {
        Self {
            posts: VecDeque::new(),
            next_id: PostId::FIRST,
        }
    }

    /// Live posts, newest first
    pub fn list(&self) -> Vec<Post> {
        self.posts.iter().filter(|post| post.is_live()).cloned().collect()
    }

    pub fn get_by_id(&self, id: PostId) -> RegistryResult<Post> {
        self.posts
            .iter()
            .find(|post| post.is_live() && post.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    /// Create a post stamped with the current time.
    pub fn create(&mut self, content: impl Into<String>) -> Post {
        self.create_at(content, now_millis())
    }

    /// Create a post with an explicit creation time.
    pub fn create_at(&mut self, content: impl Into<String>, created: DateTime<Utc>) -> Post {
        let id = self.next_id;
        self.next_id = id.next();

        let post = Post {
            id,
            content: content.into(),
            created,
            removed: false,
        };
        self.posts.push_front(post.clone());

        debug!(post_id = %id, "post created");
        post
    }

    pub fn edit(&mut self, id: PostId, content: impl Into<String>) -> RegistryResult<Post> {
        let post = self.live_mut(id)?;
        post.content = content.into();

        debug!(post_id = %id, "post edited");
        Ok(post.clone())
    }

    pub fn soft_delete(&mut self, id: PostId) -> RegistryResult<Post> {
        let post = self.live_mut(id)?;
        post.removed = true;

        debug!(post_id = %id, "post removed");
        Ok(post.clone())
    }

    /// Bring a removed post back. Restoring a live post is rejected with
    /// [`RegistryError::NotRemoved`].
    pub fn restore(&mut self, id: PostId) -> RegistryResult<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RegistryError::NotFound { id })?;

        if post.is_live() {
            return Err(RegistryError::NotRemoved { id });
        }
        post.removed = false;

        debug!(post_id = %id, "post restored");
        Ok(post.clone())
    }

    /// Number of posts ever created, removed ones included
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn live_mut(&mut self, id: PostId) -> RegistryResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|post| post.is_live() && post.id == id)
            .ok_or(RegistryError::NotFound { id })
    }
}

/// Current time truncated to the millisecond precision posts are rendered with
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
