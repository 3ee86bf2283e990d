use crate::config::MAX_CAPTION_LENGTH;
use crate::core::errors::AppError;
use crate::models::models::{create_post, Post, User};
use crate::session::Session;
use crate::store::save_posts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Liked,
    Unliked,
}

pub struct ShareLink {
    pub url: String,
    pub title: String,
    pub text: String,
}

// Flips membership in the current user's likedPosts and moves the post's
// counter the same way, then persists both collections. Membership toggles
// even for a dangling post id; the counter only moves when the post exists.
pub fn toggle_like(session: &mut Session, post_id: &str) -> Result<LikeChange, AppError> {
    let Some(current) = session.current_user().cloned() else {
        return Err(AppError::AuthRequired);
    };

    let liked_now = !current.liked_posts.iter().any(|id| id == post_id);

    if let Some(post) = session.posts.iter_mut().find(|p| p.id == post_id) {
        post.likes += if liked_now { 1 } else { -1 };
    }

    let mut updated = current;
    if liked_now {
        updated.liked_posts.push(post_id.to_string());
    } else {
        updated.liked_posts.retain(|id| id != post_id);
    }

    save_posts(&mut session.storage, &session.posts)?;
    session.commit_user(updated)?;

    Ok(if liked_now {
        LikeChange::Liked
    } else {
        LikeChange::Unliked
    })
}

pub fn publish_post(
    session: &mut Session,
    caption: &str,
    image_url: &str,
) -> Result<Post, AppError> {
    let Some(current) = session.current_user().cloned() else {
        return Err(AppError::AuthRequired);
    };

    if caption.chars().count() > MAX_CAPTION_LENGTH {
        return Err(AppError::CaptionTooLong);
    }

    let post = create_post(&current.id, caption, image_url);
    session.posts.insert(0, post.clone()); // prepend newest
    save_posts(&mut session.storage, &session.posts)?;

    let updated = User {
        posts_count: current.posts_count + 1,
        ..current
    };
    session.commit_user(updated)?;

    Ok(post)
}

// Derived per-author listing, distinct from the denormalized postsCount.
pub fn posts_by<'a>(session: &'a Session, author_id: &str) -> Vec<&'a Post> {
    session
        .posts
        .iter()
        .filter(|p| p.author_id == author_id)
        .collect()
}

pub fn share_link(post: &Post) -> ShareLink {
    ShareLink {
        url: format!("https://vexel.app/post/{}", post.id),
        title: "Check out this post on Vexel".to_string(),
        text: if post.caption.is_empty() {
            "Amazing content on Vexel".to_string()
        } else {
            post.caption.clone()
        },
    }
}
