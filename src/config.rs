use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagfillError};

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_THUMBNAILS_DIR: &str = "THUMBNAILS_DIR";

/// 설정 파일 + 환경 변수에서 읽어온 원본 설정. 아직 검증되지 않은 상태다.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub spotify: SpotifyConfig,
    pub thumbnails_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// 시작 시 한 번 검증된 설정. 실행 중에는 이 값만 전달된다.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub thumbnails_dir: PathBuf,
}

impl Config {
    /// 환경 변수 값으로 덮어쓴다. 비어 있는 값은 무시한다.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(id) = get(ENV_CLIENT_ID) {
            self.spotify.client_id = Some(id);
        }
        if let Some(secret) = get(ENV_CLIENT_SECRET) {
            self.spotify.client_secret = Some(secret);
        }
        if let Some(dir) = get(ENV_THUMBNAILS_DIR) {
            self.thumbnails_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn validate(self) -> Result<Settings> {
        fn non_blank(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }

        let client_id =
            non_blank(self.spotify.client_id).ok_or(TagfillError::MissingConfig(ENV_CLIENT_ID))?;
        let client_secret = non_blank(self.spotify.client_secret)
            .ok_or(TagfillError::MissingConfig(ENV_CLIENT_SECRET))?;
        let thumbnails_dir = self
            .thumbnails_dir
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(TagfillError::MissingConfig(ENV_THUMBNAILS_DIR))?;

        Ok(Settings {
            client_id,
            client_secret,
            thumbnails_dir,
        })
    }
}

fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".config")
        .join("tagfill")
        .join("config.toml")
}

/// 설정 파일을 읽는다.
/// 명시한 경로는 반드시 읽을 수 있어야 하고, 기본 경로는 없으면 빈 설정을 쓴다.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let path = default_config_path();
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|e| TagfillError::InvalidConfig {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| TagfillError::InvalidConfig {
        path,
        reason: e.to_string(),
    })
}

/// 설정 파일과 프로세스 환경 변수를 합쳐 검증된 설정을 만든다.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    load_config(explicit)?
        .apply_env(|key| std::env::var(key).ok())
        .validate()
}
