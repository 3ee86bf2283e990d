use std::time::Duration;

use crate::config::{load_delay_ms, posts_per_load};
use crate::models::models::{Post, User};
use crate::users::author_for;

// The artificial fetch latency lives behind this so tests can run the feed
// synchronously with a no-op.
pub trait Delay {
    fn wait(&self, duration: Duration);
}

pub struct SystemDelay;

impl Delay for SystemDelay {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

pub struct FeedEntry<'a> {
    pub post: &'a Post,
    pub author: Option<&'a User>,
}

// Append-only display window over the full post sequence, newest-first as
// delivered by the caller. No independent sort is applied.
pub struct Feed {
    posts: Vec<Post>,
    visible: usize,
    has_more: bool,
    loading: bool,
    page_size: usize,
    delay: Box<dyn Delay>,
}

impl Feed {
    pub fn new() -> Feed {
        Feed::with_delay(Box::new(SystemDelay))
    }

    pub fn with_delay(delay: Box<dyn Delay>) -> Feed {
        Feed {
            posts: Vec::new(),
            visible: 0,
            has_more: false,
            loading: false,
            page_size: posts_per_load(),
            delay,
        }
    }

    // A new backing sequence resets the window to the first page.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.visible = posts.len().min(self.page_size);
        self.has_more = posts.len() > self.page_size;
        self.posts = posts;
    }

    // Grows the window by one page after the artificial delay. A load already
    // in flight, or an exhausted sequence, suppresses the call.
    pub fn load_more(&mut self) -> bool {
        if self.loading || !self.has_more {
            return false;
        }

        self.loading = true;
        self.delay.wait(Duration::from_millis(load_delay_ms()));

        let next = (self.visible + self.page_size).min(self.posts.len());
        if next > self.visible {
            self.visible = next;
            self.has_more = self.visible < self.posts.len();
        } else {
            self.has_more = false;
        }

        self.loading = false;
        true
    }

    pub fn visible_posts(&self) -> &[Post] {
        &self.posts[..self.visible]
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for Feed {
    fn default() -> Self {
        Feed::new()
    }
}

pub fn join_authors<'a>(posts: &'a [Post], users: &'a [User]) -> Vec<FeedEntry<'a>> {
    posts
        .iter()
        .map(|post| FeedEntry {
            post,
            author: author_for(users, &post.author_id),
        })
        .collect()
}
