use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::helpers::generate_id;

// Image-only posts carry this fixed placeholder in `videoUrl`.
pub const PLACEHOLDER_VIDEO_URL: &str =
    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4";

const DEFAULT_BIO: &str = "Sharing beautiful moments 📸";

// Records keep their camelCase keys so stored slots match the documented schema.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub video_url: String,
    pub thumbnail_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub posts_count: u32,
    pub is_official: bool,
    pub is_verified: bool,
    pub join_date: DateTime<Utc>,
    pub liked_posts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

pub fn create_post(author_id: &str, caption: &str, image_url: &str) -> Post {
    Post {
        id: generate_id(),
        author_id: author_id.to_string(),
        image_url: image_url.to_string(),
        caption: caption.to_string(),
        likes: rand::thread_rng().gen_range(0..100),
        created_at: Utc::now(),
        video_url: PLACEHOLDER_VIDEO_URL.to_string(),
        thumbnail_url: image_url.to_string(),
    }
}

// The password is accepted for signature compatibility but never stored.
pub fn create_user(username: &str, email: &str, _password: &str, avatar: Option<&str>) -> User {
    let mut rng = rand::thread_rng();

    User {
        id: generate_id(),
        username: username.to_string(),
        email: email.to_string(),
        avatar: avatar
            .map(str::to_string)
            .unwrap_or_else(|| default_avatar(username)),
        bio: DEFAULT_BIO.to_string(),
        followers: rng.gen_range(100..1100),
        following: rng.gen_range(50..550),
        posts_count: 0,
        is_official: false,
        is_verified: false,
        join_date: Utc::now(),
        liked_posts: Vec::new(),
        location: None,
        website: None,
    }
}

pub fn default_avatar(username: &str) -> String {
    format!("https://i.pravatar.cc/150?u={username}")
}
