use crate::auth::restore_session;
use crate::core::db::seed_demo_data;
use crate::core::errors::AppError;
use crate::models::models::{Post, User};
use crate::store::{load_posts, load_users, save_users, Storage};

// The single top-level context: owns the storage, both in-memory collections,
// and the current user. Every data-layer operation takes this explicitly.
pub struct Session {
    pub(crate) storage: Storage,
    pub(crate) users: Vec<User>,
    pub(crate) posts: Vec<Post>,
    pub(crate) current_user: Option<User>,
}

impl Session {
    pub fn open(mut storage: Storage) -> Session {
        let mut users = load_users(&storage);
        let mut posts = load_posts(&storage);

        if let Err(err) = seed_demo_data(&mut storage, &mut users, &mut posts) {
            tracing::error!(error = %err, "error seeding demo data");
        }

        let current_user = restore_session(&mut storage, &users);

        Session {
            storage,
            users,
            posts,
            current_user,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    pub(crate) fn set_current(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    // Commits a copy-with-override user record: replaces it in the collection,
    // refreshes the current-user reference if it matches, persists the lot.
    pub(crate) fn commit_user(&mut self, updated: User) -> Result<(), AppError> {
        if let Some(existing) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *existing = updated.clone();
        }
        if self
            .current_user
            .as_ref()
            .is_some_and(|u| u.id == updated.id)
        {
            self.current_user = Some(updated);
        }

        save_users(&mut self.storage, &self.users)?;

        Ok(())
    }
}
