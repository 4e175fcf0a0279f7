//! Objects shared by every networked command.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use anyhow::{Context, Result, bail};
use client::{
    FamfinClient, SessionStore, UnauthorizedInterceptor,
    storage::{FileStorage, KeyValueStorage, SharedStorage, TOKEN_KEY},
};
use reqwest::{
    Client,
    cookie::{CookieStore, Jar},
};
use shared::config::client::{ClientConfig, LogFormat, default_state_dir};
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};
use url::Url;

use crate::terminal::TerminalNavigator;

const SESSION_FILE: &str = "session.json";
const COOKIE_FILE: &str = "session.cookies";

pub struct CliContext {
    pub config: ClientConfig,
    pub session: SessionStore,
    pub api: FamfinClient,
    storage: SharedStorage,
    jar: Arc<Jar>,
    jar_path: PathBuf,
    origin: Url,
    discard_cookies: AtomicBool,
}

impl CliContext {
    /// Resolve configuration, install logging and open the persisted session.
    pub fn load(
        config_path: Option<PathBuf>,
        api_override: Option<String>,
        state_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let config = ClientConfig::load_config(config_path, api_override)
            .context("failed to load configuration")?;
        initialize_tracing(&config);

        let state_dir = state_dir.unwrap_or_else(default_state_dir);
        let origin = config.base_url()?;
        let jar_path = state_dir.join(COOKIE_FILE);
        let jar = load_cookie_jar(&origin, &jar_path)?;

        let storage: SharedStorage = Arc::new(FileStorage::new(state_dir.join(SESSION_FILE)));
        let session = SessionStore::open(storage.clone(), config.storage_key.clone());
        let interceptor = UnauthorizedInterceptor::new(storage.clone(), Arc::new(TerminalNavigator));
        let api = FamfinClient::with_http_client(&config, build_client(jar.clone())?, storage.clone())?
            .with_interceptor(interceptor);

        debug!(state_dir = %state_dir.display(), api = %origin, "cli context ready");
        Ok(Self {
            config,
            session,
            api,
            storage,
            jar,
            jar_path,
            origin,
            discard_cookies: AtomicBool::new(false),
        })
    }

    /// Add a cookie captured from a browser login, e.g. `sid=abc123`.
    pub fn import_cookie(&self, cookie: &str) -> Result<()> {
        let cookie = cookie.trim();
        if !cookie.contains('=') {
            bail!("cookie must look like `name=value`");
        }
        self.jar.add_cookie_str(cookie, &self.origin);
        self.discard_cookies.store(false, Ordering::Relaxed);
        Ok(())
    }

    /// Store a bearer token sent with every request.
    pub fn store_token(&self, token: &str) -> Result<()> {
        self.storage
            .set_item(TOKEN_KEY, token.trim())
            .context("failed to store auth token")
    }

    /// Forget cookies and the bearer token once the command finishes.
    pub fn forget_credentials(&self) -> Result<()> {
        self.discard_cookies.store(true, Ordering::Relaxed);
        self.storage
            .remove_item(TOKEN_KEY)
            .context("failed to remove auth token")
    }

    pub fn state_file(&self) -> PathBuf {
        self.jar_path.with_file_name(SESSION_FILE)
    }

    /// Write the cookie jar back to disk, or remove it after a logout.
    pub fn save_cookies(&self) -> Result<()> {
        if self.discard_cookies.load(Ordering::Relaxed) {
            if self.jar_path.exists() {
                fs::remove_file(&self.jar_path).with_context(|| {
                    format!("failed to remove session jar {}", self.jar_path.display())
                })?;
            }
            return Ok(());
        }
        persist_cookie_jar(&self.jar, &self.origin, &self.jar_path)
    }
}

/// Initializes the tracing subscriber on stderr using the provided configuration.
fn initialize_tracing(config: &ClientConfig) {
    let default_level = config
        .logging
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::WARN);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    });

    let fmt_builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let installed = if matches!(config.logging.format, LogFormat::Json) {
        fmt_builder.json().with_ansi(false).try_init()
    } else {
        fmt_builder.with_ansi(false).try_init()
    };
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
}

pub fn build_client(jar: Arc<Jar>) -> Result<Client> {
    Client::builder()
        .cookie_provider(jar)
        .user_agent("famfin-cli")
        .build()
        .context("failed to build HTTP client")
}

/// Cookie jar saved by a previous run, or an empty one.
pub fn load_cookie_jar(origin: &Url, path: &Path) -> Result<Arc<Jar>> {
    let jar = Arc::new(Jar::default());
    if !path.exists() {
        return Ok(jar);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read session jar {}", path.display()))?;
    for entry in contents.split(';') {
        let cookie = entry.trim();
        if !cookie.is_empty() {
            jar.add_cookie_str(cookie, origin);
        }
    }
    Ok(jar)
}

pub fn persist_cookie_jar(jar: &Jar, origin: &Url, path: &Path) -> Result<()> {
    if let Some(header) = jar.cookies(origin) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create session directory {}", parent.display())
            })?;
        }
        fs::write(path, header.to_str()?.as_bytes())
            .with_context(|| format!("failed to write session jar at {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .context("failed to set session jar permissions")?;
        }
    } else if path.exists() {
        fs::remove_file(path).ok();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn origin() -> Url {
        Url::parse("http://localhost:5000/api/").unwrap()
    }

    #[test]
    fn test_missing_jar_is_empty() {
        let dir = TempDir::new().unwrap();
        let jar = load_cookie_jar(&origin(), &dir.path().join(COOKIE_FILE)).unwrap();

        assert!(jar.cookies(&origin()).is_none());
    }

    #[test]
    fn test_cookie_jar_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(COOKIE_FILE);
        let jar = Jar::default();
        jar.add_cookie_str("sid=abc123", &origin());

        persist_cookie_jar(&jar, &origin(), &path).unwrap();
        let restored = load_cookie_jar(&origin(), &path).unwrap();

        let header = restored.cookies(&origin()).unwrap();
        assert_eq!(header.to_str().unwrap(), "sid=abc123");
    }

    #[test]
    fn test_empty_jar_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(COOKIE_FILE);
        fs::write(&path, "sid=stale").unwrap();

        persist_cookie_jar(&Jar::default(), &origin(), &path).unwrap();

        assert!(!path.exists());
    }
}
