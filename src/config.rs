use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en
    pub language: String,
    /// TOML 언어팩 디렉터리 (없으면 내장 문자열)
    pub language_pack_dir: Option<String>,
    /// 공유 링크의 기준 URL. 쿼리는 계산기 입력으로 교체된다.
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            share_base_url: "https://example.com/".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("공유 URL 형식 오류: {0}")]
    ShareUrl(#[from] url::ParseError),
}

/// 지정한 경로에서 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        debug!(path = %path.display(), "기본 설정 생성");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 공유 링크 기준 URL을 파싱한다.
    pub fn share_base(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.share_base_url)?)
    }
}
