use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{POSTS_SLOT, USERS_SLOT};
use crate::models::models::{Post, User};

enum Backend {
    // One JSON document per slot, `<dir>/<slot>.json`.
    File { dir: PathBuf },
    // Process-lifetime map, lost on exit.
    Memory(HashMap<String, String>),
}

pub struct Store {
    backend: Backend,
}

impl Store {
    pub fn file(dir: impl Into<PathBuf>) -> anyhow::Result<Store> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating store directory {}", dir.display()))?;

        Ok(Store {
            backend: Backend::File { dir },
        })
    }

    pub fn memory() -> Store {
        Store {
            backend: Backend::Memory(HashMap::new()),
        }
    }

    fn slot_path(dir: &Path, slot: &str) -> PathBuf {
        dir.join(format!("{slot}.json"))
    }

    pub fn get_json<T: DeserializeOwned>(&self, slot: &str) -> anyhow::Result<Option<T>> {
        let raw = match &self.backend {
            Backend::File { dir } => match fs::read_to_string(Self::slot_path(dir, slot)) {
                Ok(raw) => Some(raw),
                Err(err) if err.kind() == io::ErrorKind::NotFound => None,
                Err(err) => return Err(err).with_context(|| format!("reading slot {slot}")),
            },
            Backend::Memory(map) => map.get(slot).cloned(),
        };

        match raw {
            Some(raw) => {
                let value =
                    serde_json::from_str(&raw).with_context(|| format!("parsing slot {slot}"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    // Whole-document overwrite, one write call per save.
    pub fn set_json<T: Serialize + ?Sized>(&mut self, slot: &str, value: &T) -> anyhow::Result<()> {
        let raw =
            serde_json::to_string(value).with_context(|| format!("serializing slot {slot}"))?;

        match &mut self.backend {
            Backend::File { dir } => fs::write(Self::slot_path(dir, slot), raw)
                .with_context(|| format!("writing slot {slot}")),
            Backend::Memory(map) => {
                map.insert(slot.to_string(), raw);
                Ok(())
            }
        }
    }

    pub fn delete(&mut self, slot: &str) -> anyhow::Result<()> {
        match &mut self.backend {
            Backend::File { dir } => match fs::remove_file(Self::slot_path(dir, slot)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err).with_context(|| format!("deleting slot {slot}")),
            },
            Backend::Memory(map) => {
                map.remove(slot);
                Ok(())
            }
        }
    }
}

// The long-lived store survives restarts; the session store dies with the
// process, mirroring the local/session storage split.
pub struct Storage {
    pub local: Store,
    pub session: Store,
}

impl Storage {
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Storage> {
        Ok(Storage {
            local: Store::file(dir)?,
            session: Store::memory(),
        })
    }

    pub fn in_memory() -> Storage {
        Storage {
            local: Store::memory(),
            session: Store::memory(),
        }
    }
}

// === Collection load/save ===
// A missing slot is a fresh install; a slot that fails to parse is logged and
// treated the same. Neither is fatal.

pub fn load_posts(storage: &Storage) -> Vec<Post> {
    match storage.local.get_json::<Vec<Post>>(POSTS_SLOT) {
        Ok(Some(posts)) => posts,
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::error!(error = %err, "error loading posts, starting empty");
            Vec::new()
        }
    }
}

pub fn save_posts(storage: &mut Storage, posts: &[Post]) -> anyhow::Result<()> {
    storage.local.set_json(POSTS_SLOT, posts)
}

pub fn load_users(storage: &Storage) -> Vec<User> {
    match storage.local.get_json::<Vec<User>>(USERS_SLOT) {
        Ok(Some(users)) => users,
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::error!(error = %err, "error loading users, starting empty");
            Vec::new()
        }
    }
}

pub fn save_users(storage: &mut Storage, users: &[User]) -> anyhow::Result<()> {
    storage.local.set_json(USERS_SLOT, users)
}
