use crate::config::{AUTH_COOKIE_SLOT, CURRENT_USER_SLOT, POSTS_SLOT, USERS_SLOT};
use crate::models::models::{create_post, create_user, Post, User};
use crate::store::{save_posts, save_users, Storage};

pub fn seed_demo_data(
    storage: &mut Storage,
    users: &mut Vec<User>,
    posts: &mut Vec<Post>,
) -> anyhow::Result<()> {
    if !users.is_empty() {
        return Ok(()); // Already initialized
    }

    let mut demo_users = vec![
        create_user(
            "vexel",
            "vexel@demo.com",
            "asdf1234flol",
            Some("https://i.pravatar.cc/150?u=vexel"),
        ),
        create_user(
            "creator1",
            "creator1@demo.com",
            "pass123",
            Some("https://i.pravatar.cc/150?u=creator1"),
        ),
        create_user(
            "artist2",
            "artist2@demo.com",
            "pass123",
            Some("https://i.pravatar.cc/150?u=artist2"),
        ),
        create_user(
            "photographer",
            "photo@demo.com",
            "pass123",
            Some("https://i.pravatar.cc/150?u=photo"),
        ),
    ];

    // The first seed account is the only one with real privileges.
    let official = &mut demo_users[0];
    official.is_official = true;
    official.is_verified = true;
    official.bio = "Official Vexel account - Share your moments beautifully".to_string();
    official.followers = 15420;
    official.following = 342;

    let demo_posts = vec![
        create_post(
            &demo_users[0].id,
            "Beautiful sunset from last night's walk. The colors were absolutely stunning! 🌅",
            "https://picsum.photos/400/500?random=1",
        ),
        create_post(
            &demo_users[1].id,
            "Morning coffee and good vibes. Simple pleasures are the best. ☕",
            "https://picsum.photos/400/500?random=2",
        ),
        create_post(
            &demo_users[2].id,
            "New artwork completed! Mixed media on canvas. What do you think?",
            "https://picsum.photos/400/500?random=3",
        ),
        create_post(
            &demo_users[3].id,
            "Urban exploration leads to the most interesting discoveries.",
            "https://picsum.photos/400/500?random=4",
        ),
        create_post(
            &demo_users[0].id,
            "Welcome to Vexel! Share your visual moments with the world.",
            "https://picsum.photos/400/500?random=5",
        ),
    ];

    *users = demo_users;
    *posts = demo_posts;

    save_users(storage, users)?;
    save_posts(storage, posts)?;

    Ok(())
}

// Clears every slot this crate writes. Mainly for tests and tooling.
pub fn reset_store(storage: &mut Storage) -> anyhow::Result<()> {
    for slot in [POSTS_SLOT, USERS_SLOT, CURRENT_USER_SLOT, AUTH_COOKIE_SLOT] {
        storage.local.delete(slot)?;
    }
    storage.session.delete(CURRENT_USER_SLOT)?;
    storage.session.delete(AUTH_COOKIE_SLOT)?;

    Ok(())
}
