//! Document store operations

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use social_core::{Document, Post, User};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{OwnerCheck, Result, StorageError};

/// Main storage interface.
///
/// Every operation reads the whole document, changes it in memory and writes
/// it back in full. The shared lock is held from the read to the write, so
/// clones of one `Storage` never lose each other's updates. Separately
/// constructed values on the same path are not coordinated.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    owner_check: OwnerCheck,
    lock: Arc<Mutex<()>>,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            owner_check: OwnerCheck::default(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_owner_check(mut self, owner_check: OwnerCheck) -> Self {
        self.owner_check = owner_check;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn owner_check(&self) -> OwnerCheck {
        self.owner_check
    }

    /// Create the backing file with an empty document if it is missing.
    pub async fn ensure_db(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.ensure_file().await?;
        Ok(())
    }

    /// Insert a new user unless the email is taken.
    ///
    /// The freshly built user is returned even when an existing entry kept
    /// its place, so the result does not prove what was persisted.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        age: i64,
    ) -> Result<User> {
        let user = User::new(email.into(), password.into(), name.into(), age);

        let _guard = self.lock.lock().await;
        let mut db = self.read_db().await?;

        if db.users.contains_key(email) {
            warn!(email, "User already exists, keeping stored record");
        } else {
            db.users.insert(email.to_string(), user.clone());
            debug!(email, "Inserted user");
        }

        self.write_db(&db).await?;
        Ok(user)
    }

    /// Replace an existing user. `created_at` is not carried over.
    pub async fn update_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        age: i64,
    ) -> Result<User> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_db().await?;

        if !db.users.contains_key(email) {
            return Err(StorageError::NotFound("user doesn't exist".to_string()));
        }

        let user = User::replacement(email.into(), password.into(), name.into(), age);
        db.users.insert(email.to_string(), user.clone());
        self.write_db(&db).await?;

        debug!(email, "Replaced user");
        Ok(user)
    }

    /// Look up a user. A miss yields `User::default()`, not an error.
    pub async fn get_user(&self, email: &str) -> Result<User> {
        let _guard = self.lock.lock().await;
        let db = self.read_db().await?;
        Ok(db.users.get(email).cloned().unwrap_or_default())
    }

    pub async fn delete_user(&self, email: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_db().await?;

        if db.users.remove(email).is_some() {
            self.write_db(&db).await?;
            debug!(email, "Deleted user");
        }
        Ok(())
    }

    pub async fn create_post(&self, user_email: &str, text: &str) -> Result<Post> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_db().await?;

        if !db.users.contains_key(user_email) {
            match self.owner_check {
                OwnerCheck::Strict => {
                    return Err(StorageError::UnknownUser(user_email.to_string()));
                }
                OwnerCheck::Lenient => {
                    warn!(user_email, "Creating post for unknown user");
                }
            }
        }

        let post = Post::new(user_email.into(), text.into());
        db.posts.insert(post.id.clone(), post.clone());
        self.write_db(&db).await?;

        debug!(id = %post.id, user_email, "Inserted post");
        Ok(post)
    }

    /// All posts owned by `user_email`, in no particular order.
    pub async fn get_posts(&self, user_email: &str) -> Result<Vec<Post>> {
        let _guard = self.lock.lock().await;
        let db = self.read_db().await?;
        Ok(db.posts_by(user_email))
    }

    pub async fn delete_post(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut db = self.read_db().await?;

        if db.posts.remove(id).is_some() {
            self.write_db(&db).await?;
            debug!(id, "Deleted post");
        }
        Ok(())
    }

    /// Returns true when the file had to be created. Caller holds the lock.
    async fn ensure_file(&self) -> Result<bool> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        info!(path = %self.path.display(), "Database file not found, creating an empty one");
        self.write_db(&Document::default()).await?;
        Ok(true)
    }

    async fn read_db(&self) -> Result<Document> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Document::from_json(&bytes)?),
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                self.ensure_file().await?;
                Ok(Document::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_db(&self, db: &Document) -> Result<()> {
        let data = db.to_json()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        debug!(
            path = %self.path.display(),
            users = db.users.len(),
            posts = db.posts.len(),
            "Wrote document"
        );
        Ok(())
    }
}
