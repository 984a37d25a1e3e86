//! Credential store and login session.
//!
//! The backend uses HTTP Basic authentication, so "logging in" means keeping
//! `base64(username:password)` around and attaching it to every request. The
//! token is persisted through a [`TokenStorage`] so a session survives a
//! restart.
//!
//! # Example
//!
//! ```
//! use taskdeck_net::auth::{AuthSession, MemoryTokenStorage};
//!
//! let session = AuthSession::new(MemoryTokenStorage::new()).unwrap();
//! session.logged_in_changed.connect(|logged_in| println!("logged in: {logged_in}"));
//!
//! session.login("maria", "s3cr3t").unwrap();
//! assert_eq!(session.authorization_header().as_deref(), Some("Basic bWFyaWE6czNjcjN0"));
//!
//! session.logout().unwrap();
//! assert!(!session.is_logged_in());
//! ```

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::{Mutex, RwLock};
use taskdeck_core::logging::targets;
use taskdeck_core::{Property, Signal};

use crate::error::{ApiError, Result};

/// Persistence for the Basic credential token.
pub trait TokenStorage: Send + Sync + fmt::Debug {
    /// The stored token, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored token.
    fn store(&self, token: &str) -> Result<()>;

    /// Forget the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}

/// Token storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `token` already stored.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Token storage backed by a single file.
///
/// Writes go to a temporary file in the same directory that is then renamed
/// over the target, so a crash never leaves a half-written token.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "credentials".to_string());
        let parent = self.path.parent().unwrap_or(Path::new("."));
        parent.join(format!(".{}.tmp.{}", file_name, std::process::id()))
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(token.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Encode a username/password pair as a Basic credential token.
pub fn basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

/// The current login state.
///
/// # Signals
///
/// - `logged_in_changed(bool)`: Emitted when the session logs in or out
pub struct AuthSession {
    storage: Box<dyn TokenStorage>,
    token: RwLock<Option<String>>,
    logged_in: Property<bool>,

    /// Signal emitted when the logged-in state flips.
    pub logged_in_changed: Signal<bool>,
}

impl AuthSession {
    /// Open a session over `storage`, restoring a previously stored token.
    pub fn new(storage: impl TokenStorage + 'static) -> Result<Self> {
        let token = storage.load()?;
        let logged_in = token.is_some();
        tracing::debug!(target: targets::AUTH, logged_in, "session restored");
        Ok(Self {
            storage: Box::new(storage),
            token: RwLock::new(token),
            logged_in: Property::new(logged_in),
            logged_in_changed: Signal::new(),
        })
    }

    /// A session that forgets its token when dropped.
    pub fn in_memory() -> Self {
        Self {
            storage: Box::new(MemoryTokenStorage::new()),
            token: RwLock::new(None),
            logged_in: Property::new(false),
            logged_in_changed: Signal::new(),
        }
    }

    /// Store credentials for subsequent requests.
    ///
    /// The backend has no login endpoint; a wrong password surfaces as
    /// [`ApiError::Auth`] on the first authenticated request.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Auth("missing username or password".to_string()));
        }
        let token = basic_token(username, password);
        self.storage.store(&token)?;
        *self.token.write() = Some(token);
        tracing::info!(target: targets::AUTH, username, "logged in");
        self.set_logged_in(true);
        Ok(())
    }

    /// Forget the stored credentials.
    pub fn logout(&self) -> Result<()> {
        self.storage.clear()?;
        *self.token.write() = None;
        tracing::info!(target: targets::AUTH, "logged out");
        self.set_logged_in(false);
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// The stored Basic token, without the scheme.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// The `Authorization` header value for the stored token.
    pub fn authorization_header(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| format!("Basic {t}"))
    }

    fn set_logged_in(&self, logged_in: bool) {
        if self.logged_in.set(logged_in) {
            self.logged_in_changed.emit(logged_in);
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("storage", &self.storage)
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
