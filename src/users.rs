use crate::config::MAX_BIO_LENGTH;
use crate::core::errors::AppError;
use crate::models::models::User;
use crate::session::Session;

pub fn update_avatar(session: &mut Session, avatar_url: &str) -> Result<User, AppError> {
    let Some(current) = session.current_user().cloned() else {
        return Err(AppError::AuthRequired);
    };

    let updated = User {
        avatar: avatar_url.to_string(),
        ..current
    };
    session.commit_user(updated.clone())?;

    Ok(updated)
}

pub fn update_bio(session: &mut Session, bio: &str) -> Result<User, AppError> {
    let Some(current) = session.current_user().cloned() else {
        return Err(AppError::AuthRequired);
    };

    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(AppError::BioTooLong);
    }

    let updated = User {
        bio: bio.to_string(),
        ..current
    };
    session.commit_user(updated.clone())?;

    Ok(updated)
}

pub fn find_by_username<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
    users.iter().find(|u| u.username == username)
}

// Referential integrity is not enforced; a dangling authorId falls back to
// the first user in the collection.
pub fn author_for<'a>(users: &'a [User], author_id: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.id == author_id)
        .or_else(|| users.first())
}
