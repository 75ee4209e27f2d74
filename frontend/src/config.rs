use std::str::FromStr;
#[cfg(feature = "ssr")]
use std::{path::Path, sync::OnceLock};

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ErrorKind, Result};

#[cfg(feature = "ssr")]
static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub frontend: FrontendConfig,
    /// 0 = trace ... 4 = error
    #[serde(default = "default_log_level")]
    pub log_level: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frontend: FrontendConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.frontend.site.validate()?;
        Ok(config)
    }
}

fn default_log_level() -> usize {
    2
}

/// The part of [`Config`] the browser is allowed to see
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendConfig {
    #[serde(default)]
    pub site: SiteMetadata,
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    #[serde(default)]
    pub title: String,
}

impl SiteMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The title goes into `<title>` unescaped, so it has to be plain text
    pub fn validate(&self) -> Result<()> {
        if self.title.contains('<') {
            return Err(Error::new(
                ErrorKind::Config,
                format!("site title must be plain text, got {:?}", self.title),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaintenanceConfig {
    /// serve the maintenance notice on every route
    #[serde(default)]
    pub enabled: bool,
    /// seconds, sent as `Retry-After` with the 503
    #[serde(default)]
    pub retry_after: Option<u64>,
}

#[cfg(feature = "ssr")]
pub async fn init_server_config() -> Result<&'static Config> {
    use std::env::var;

    use crate::errors::Context;

    const DEFAULT_CONFIG_PATH: &str = "config.toml";
    let config_path = var("CONFIG_PATH")
        .ok()
        .unwrap_or(DEFAULT_CONFIG_PATH.into());

    let config = load_server_config(&config_path)
        .await
        .context(format!("loading {config_path}"))?;
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(feature = "ssr")]
pub fn server_config() -> Option<&'static Config> {
    CONFIG.get()
}

/// Read the config at `path`, writing the defaults there first if the file
/// does not exist yet.
#[cfg(feature = "ssr")]
async fn load_server_config(path: impl AsRef<Path>) -> Result<Config> {
    use tokio::{fs, io::AsyncReadExt};

    let path = path.as_ref();
    if fs::metadata(path).await.is_ok() {
        let mut buf = String::new();
        fs::File::open(path)
            .await?
            .read_to_string(&mut buf)
            .await?;
        return buf.parse();
    }
    tracing::warn!(path = %path.display(), "config not found, writing defaults");
    let default_config = Config::default();
    let default_toml = toml::to_string_pretty(&default_config)?;
    fs::write(path, default_toml).await?;
    Ok(default_config)
}

#[server]
async fn get_frontend_config() -> Result<FrontendConfig, ServerFnError> {
    server_config()
        .map(|c| c.frontend.clone())
        .ok_or_else(|| {
            ServerFnError::ServerError("server config is not init!".to_owned())
        })
}

/// On the server this reads the in-process config directly, in the browser
/// it goes through the `get_frontend_config` server function.
pub async fn frontend_config() -> Result<FrontendConfig> {
    Ok(get_frontend_config().await?)
}

pub type FrontendConfigResource = Resource<(), Result<FrontendConfig>>;

/// Load the frontend config once per request and make it available to every
/// page below the caller.
///
/// The resource is blocking so pages can put values from it in `<head>`.
/// A [`FrontendConfig`] already in context is used as is instead of the
/// process-wide one.
pub fn provide_frontend_config() -> FrontendConfigResource {
    let preset = use_context::<FrontendConfig>();
    let config = create_blocking_resource(
        || (),
        move |_| {
            let preset = preset.clone();
            async move {
                match preset {
                    Some(config) => Ok(config),
                    None => frontend_config().await,
                }
            }
        },
    );
    provide_context(config);
    config
}

pub fn use_frontend_config() -> FrontendConfigResource {
    expect_context::<FrontendConfigResource>()
}

/// Render `f` with the frontend config once it has loaded
pub fn with_frontend_config<F, V>(f: F) -> impl IntoView
where
    F: Fn(FrontendConfig) -> V + 'static,
    V: IntoView + 'static,
{
    let config = use_frontend_config();
    let f = std::rc::Rc::new(f);

    view! {
        <Suspense>
            {
                let f = f.clone();
                move || config.get().map(|config| config.map(&*f))
            }
        </Suspense>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_title_is_empty() {
        let config: Config = "[frontend.site]\n".parse().unwrap();
        assert_eq!(config.frontend.site.title, "");
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, 2);
        assert!(!config.frontend.maintenance.enabled);
        assert_eq!(config.frontend.maintenance.retry_after, None);
    }

    #[test]
    fn full_config() {
        let config: Config = r#"
            log_level = 1

            [frontend.site]
            title = "Acme"

            [frontend.maintenance]
            enabled = true
            retry_after = 3600
        "#
        .parse()
        .unwrap();
        assert_eq!(config.log_level, 1);
        assert_eq!(config.frontend.site, SiteMetadata::new("Acme"));
        assert_eq!(
            config.frontend.maintenance,
            MaintenanceConfig {
                enabled: true,
                retry_after: Some(3600)
            }
        );
    }

    #[test]
    fn unknown_key_rejected() {
        let err = "[frontend.site]\ntitel = \"Acme\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn markup_in_title_rejected() {
        let err = "[frontend.site]\ntitle = \"Acme</title><script>\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn ampersand_in_title_allowed() {
        let config: Config = "[frontend.site]\ntitle = \"Acme & Co\"\n"
            .parse()
            .unwrap();
        assert_eq!(config.frontend.site.title, "Acme & Co");
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn writes_default_when_missing() {
        let path = std::env::temp_dir().join(format!(
            "maintenance-config-{}.toml",
            std::process::id()
        ));
        let _ = tokio::fs::remove_file(&path).await;

        let config = load_server_config(&path).await.unwrap();
        assert_eq!(config, Config::default());

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written.parse::<Config>().unwrap(), config);

        let reloaded = load_server_config(&path).await.unwrap();
        assert_eq!(reloaded, config);
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
