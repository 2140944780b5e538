//! Credentials loading
//!
//! A small TOML file holds the GleSYS API user and key:
//!
//! ```toml
//! user = "CL12345"
//! password = "api-key"
//! # base_url = "https://api.glesys.com"
//! ```
//!
//! `GLESYS_USER` and `GLESYS_PASSWORD` take precedence over the file, which makes the file
//! optional when both are set.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use dns01_provider::{
    create_directory, log_sanitizer, GlesysProvider, ProviderCredentials, ZoneDirectory,
};
use serde::Deserialize;

pub const USER_ENV: &str = "GLESYS_USER";
pub const PASSWORD_ENV: &str = "GLESYS_PASSWORD";

/// Contents of the credentials file. Every key is optional so the environment can fill gaps.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CredentialsFile {
    user: Option<String>,
    password: Option<String>,
    base_url: Option<String>,
}

/// Resolved GleSYS credentials.
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &log_sanitizer::mask_secret(&self.password))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Credentials {
    /// Load credentials from `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => read_file(path)?,
            None => CredentialsFile::default(),
        };
        Self::merge(
            file,
            std::env::var(USER_ENV).ok(),
            std::env::var(PASSWORD_ENV).ok(),
        )
    }

    fn merge(
        file: CredentialsFile,
        env_user: Option<String>,
        env_password: Option<String>,
    ) -> Result<Self> {
        let user = env_user.filter(|s| !s.is_empty()).or(file.user);
        let password = env_password.filter(|s| !s.is_empty()).or(file.password);

        let Some(user) = user else {
            bail!("No GleSYS API user configured (set `user` in the credentials file or {USER_ENV})");
        };
        let Some(password) = password else {
            bail!("No GleSYS API key configured (set `password` in the credentials file or {PASSWORD_ENV})");
        };

        Ok(Self {
            user,
            password,
            base_url: file.base_url,
        })
    }

    /// Build the zone directory these credentials authenticate against.
    pub fn into_directory(self) -> Result<Arc<dyn ZoneDirectory>> {
        let directory: Arc<dyn ZoneDirectory> = match self.base_url {
            Some(base_url) => Arc::new(
                GlesysProvider::builder(self.user, self.password)
                    .base_url(base_url)
                    .build()?,
            ),
            None => create_directory(ProviderCredentials::Glesys {
                user: self.user,
                password: self.password,
            })?,
        };
        Ok(directory)
    }
}

fn read_file(path: &Path) -> Result<CredentialsFile> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read credentials file '{}'", path.display()))?;
        let file_mode = metadata.permissions().mode() & 0o777;

        // Only owner should have access (0600 or 0400)
        if file_mode & 0o077 != 0 {
            tracing::warn!(
                path = %path.display(),
                mode = format!("{file_mode:o}"),
                "Credentials file has overly permissive permissions (should be 0600 or 0400)"
            );
        }
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credentials file '{}'", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse credentials file '{}'", path.display()))
}
