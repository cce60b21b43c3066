use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 진단 보고서(JSON)를 저장할 디렉터리
    pub output_dir: PathBuf,
    /// 로그 레벨(error/warn/info/debug/trace). RUST_LOG가 있으면 그쪽이 우선한다.
    pub log_level: String,
    /// 입출열비(%)가 이 값을 넘으면 경고로 표시한다.
    pub io_ratio_warning_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            log_level: "info".into(),
            io_ratio_warning_pct: 120.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정을 어디서 얻었는지. 로깅은 설정을 읽은 뒤에 초기화되므로 기록을 미룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// 기존 파일에서 읽음
    Loaded,
    /// 파일이 없어 기본값으로 새로 만듦
    Created,
}

impl ConfigOrigin {
    /// 로깅 초기화 이후에 호출한다.
    pub fn log(&self, path: &Path) {
        match self {
            ConfigOrigin::Loaded => tracing::debug!(path = %path.display(), "설정 로드"),
            ConfigOrigin::Created => {
                tracing::info!(path = %path.display(), "기본 설정 파일 생성")
            }
        }
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Config, ConfigOrigin), ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok((cfg, ConfigOrigin::Loaded))
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok((cfg, ConfigOrigin::Created))
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_config(self, path.as_ref())
    }
}
