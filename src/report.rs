//! 진단 입력과 결과를 JSON 보고서로 내보내고, 저장된 입력 파일을 읽는다.
//!
//! 보고서는 입력 레코드 전체(`general`, `spec`, `measurement`, `config`)에
//! `analysisResults` 객체를 덧붙인 형태다.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chiller::{DiagnosticInput, DiagnosticResult};

/// 보고서 입출력 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 처리 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML 파싱 오류: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML 직렬화 오류: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("지원하지 않는 입력 파일 형식: {0}")]
    UnsupportedFormat(String),
}

/// 보고서에 포함하는 요약 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    pub cop: f64,
    pub corrected_cop: f64,
    pub performance_drop: f64,
    pub load_ratio: f64,
    /// ISO-8601(UTC, 밀리초)
    pub timestamp: String,
}

/// 내보내기 문서.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    #[serde(flatten)]
    pub input: DiagnosticInput,
    pub analysis_results: AnalysisResults,
}

impl DiagnosticReport {
    pub fn new(input: &DiagnosticInput, result: &DiagnosticResult, at: DateTime<Utc>) -> Self {
        Self {
            input: input.clone(),
            analysis_results: AnalysisResults {
                cop: result.current_cop,
                corrected_cop: result.correction_cop,
                performance_drop: result.performance_drop_pct,
                load_ratio: result.load_ratio_pct,
                timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `COP_Analysis_{현장명}_{YYYY-MM-DD}.json` 형식의 파일명. 현장명이 비면 `Unknown`.
pub fn report_file_name(site_name: &str, at: DateTime<Utc>) -> String {
    let site = site_name.trim();
    let site = if site.is_empty() {
        "Unknown".to_string()
    } else {
        sanitize_file_component(site)
    };
    format!("COP_Analysis_{}_{}.json", site, at.format("%Y-%m-%d"))
}

fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// 보고서를 `dir` 아래에 저장하고 저장 경로를 반환한다.
pub fn save_report(
    dir: impl AsRef<Path>,
    input: &DiagnosticInput,
    result: &DiagnosticResult,
) -> Result<PathBuf, ReportError> {
    save_report_at(dir, input, result, Utc::now())
}

/// 시각을 지정해 보고서를 저장한다.
pub fn save_report_at(
    dir: impl AsRef<Path>,
    input: &DiagnosticInput,
    result: &DiagnosticResult,
    at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let report = DiagnosticReport::new(input, result, at);
    let path = dir.join(report_file_name(&input.general.site_name, at));
    fs::write(&path, report.to_json_pretty()?)?;
    tracing::info!(path = %path.display(), "진단 보고서 저장");
    Ok(path)
}

/// 입력 파일 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            _ => Err(ReportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 진단 입력을 파일에서 읽는다. 내보낸 보고서(JSON)도 그대로 읽을 수 있다.
pub fn load_input(path: impl AsRef<Path>) -> Result<DiagnosticInput, ReportError> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let input = parse_input(&content, format)?;
    tracing::debug!(path = %path.display(), product = %input.general.profile.product_type, "입력 로드");
    Ok(input)
}

pub fn parse_input(content: &str, format: InputFormat) -> Result<DiagnosticInput, ReportError> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// 진단 입력을 지정한 형식의 문자열로 직렬화한다.
pub fn render_input(input: &DiagnosticInput, format: InputFormat) -> Result<String, ReportError> {
    match format {
        InputFormat::Json => Ok(serde_json::to_string_pretty(input)?),
        InputFormat::Toml => Ok(toml::to_string_pretty(input)?),
    }
}
