// src/common/dev_mode.rs
//! Development mode: bypasses bearer-token authentication with a fixed local user

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

use crate::auth::models::User;

/// Fixed id so that rows created in dev mode survive restarts
pub const DEV_USER_ID: &str = "U_DEV000";

#[derive(Debug, Clone)]
pub struct DevModeConfig {
    pub enabled: bool,
    pub user_email: String,
    pub user_name: String,
    pub user_is_admin: bool,
}

impl DevModeConfig {
    pub fn from_env() -> Self {
        let flag = |key: &str| {
            env::var(key)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        Self {
            enabled: flag("DEV_MODE"),
            user_email: env::var("DEV_USER_EMAIL").unwrap_or_else(|_| "dev@test.com".to_string()),
            user_name: env::var("DEV_USER_NAME").unwrap_or_else(|_| "Dev User".to_string()),
            user_is_admin: flag("DEV_USER_IS_ADMIN"),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn dev_user(&self) -> User {
        User {
            id: DEV_USER_ID.to_string(),
            email: self.user_email.clone(),
            name: Some(self.user_name.clone()),
            created_at: None,
        }
    }

    /// Inserts the dev user if it is missing so foreign keys on owned rows hold
    pub async fn ensure_dev_user(&self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        if !self.enabled {
            return Ok(());
        }

        let user = self.dev_user();
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, created_at)
            VALUES (?, ?, ?, datetime('now'))
            ON CONFLICT(id) DO UPDATE SET email = excluded.email, name = excluded.name
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .execute(pool)
        .await?;

        info!(user_id = %user.id, "Dev user ensured in database");
        Ok(())
    }
}

/// Log dev mode status on startup
pub fn log_dev_mode_status(config: &DevModeConfig) {
    if config.enabled {
        warn!(
            user_name = %config.user_name,
            is_admin = config.user_is_admin,
            "DEV MODE ENABLED: authentication bypassed, do not use in production"
        );
    } else {
        info!("Production mode: authentication required");
    }
}

/// `--dev` / `--prod` on the command line override `DEV_MODE`
pub fn parse_dev_mode_args<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    let mut result = None;
    for arg in args {
        match arg.as_str() {
            "--dev" | "--dev-mode" => result = Some(true),
            "--no-dev" | "--prod" | "--production" => result = Some(false),
            _ => {}
        }
    }
    result
}

pub fn apply_cli_override(mut config: DevModeConfig) -> DevModeConfig {
    if let Some(cli_dev_mode) = parse_dev_mode_args(env::args()) {
        info!(dev_mode = cli_dev_mode, "CLI override for DEV_MODE");
        config.enabled = cli_dev_mode;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_flags() {
        assert_eq!(parse_dev_mode_args(args(&["apply_api", "--dev"])), Some(true));
        assert_eq!(parse_dev_mode_args(args(&["apply_api", "--prod"])), Some(false));
        assert_eq!(parse_dev_mode_args(args(&["apply_api"])), None);
        // last flag wins
        assert_eq!(parse_dev_mode_args(args(&["--dev", "--no-dev"])), Some(false));
    }

    #[test]
    fn test_dev_user_has_fixed_id() {
        let config = DevModeConfig {
            enabled: true,
            user_email: "dev@test.com".to_string(),
            user_name: "Dev User".to_string(),
            user_is_admin: false,
        };
        let user = config.dev_user();
        assert_eq!(user.id, DEV_USER_ID);
        assert_eq!(user.name.as_deref(), Some("Dev User"));
    }
}
