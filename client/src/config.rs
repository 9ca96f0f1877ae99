//! Build-time environment configuration for the browser app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL and feature flags are baked in at compile time from
//! `BABYCHAT_*` variables, then resolved once per process and cached.
//!
//! Variables:
//! - `BABYCHAT_ENV`: `development` (default), `staging`, or `production`
//! - `BABYCHAT_DEV_API_URL`, `BABYCHAT_STAGING_API_URL`, `BABYCHAT_PROD_API_URL`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

/// API base URL used when no environment-specific URL was provided at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Deployment environment the bundle was built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    /// Parse an environment name. Unknown or missing names fall back to development.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("staging") => Self::Staging,
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Feature flags that ship with this environment.
    pub fn features(self) -> FeatureFlags {
        match self {
            Self::Development => FeatureFlags { debug_panel: true, mock_data: true, hot_reload: true },
            Self::Staging => FeatureFlags { debug_panel: true, mock_data: false, hot_reload: false },
            Self::Production => FeatureFlags { debug_panel: false, mock_data: false, hot_reload: false },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub debug_panel: bool,
    /// Serve the Messages page from built-in mock conversations instead of the API.
    pub mock_data: bool,
    pub hot_reload: bool,
}

/// Per-environment API URLs as captured at build time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiUrls<'a> {
    pub development: Option<&'a str>,
    pub staging: Option<&'a str>,
    pub production: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub environment: AppEnvironment,
    pub api_url: String,
    pub features: FeatureFlags,
}

impl EnvConfig {
    /// Resolve the configuration for `env_name` from the provided URL table.
    pub fn resolve(env_name: Option<&str>, urls: ApiUrls<'_>) -> Self {
        let environment = AppEnvironment::parse(env_name);
        let url = match environment {
            AppEnvironment::Development => urls.development,
            AppEnvironment::Staging => urls.staging,
            AppEnvironment::Production => urls.production,
        };
        let api_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();

        Self { environment, api_url, features: environment.features() }
    }
}

static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Return the process-wide configuration, resolving it on first use.
pub fn load_config() -> &'static EnvConfig {
    CONFIG.get_or_init(|| {
        let urls = ApiUrls {
            development: option_env!("BABYCHAT_DEV_API_URL"),
            staging: option_env!("BABYCHAT_STAGING_API_URL"),
            production: option_env!("BABYCHAT_PROD_API_URL"),
        };
        EnvConfig::resolve(option_env!("BABYCHAT_ENV"), urls)
    })
}
