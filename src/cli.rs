use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::report::InputFormat;

#[derive(Debug, Parser)]
#[command(name = "chiller_cop_toolbox")]
#[command(about = "냉동기 COP 성능 진단 계산기", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// 설정 파일의 로그 레벨을 덮어쓴다
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 입력 파일(.json/.toml)을 진단한다
    Evaluate {
        input: PathBuf,

        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,

        /// 진단 보고서를 파일로 저장
        #[arg(long)]
        export: bool,

        /// 보고서 저장 디렉터리(설정값 대신 사용)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// 예시 입력 레코드를 출력한다
    Sample {
        #[arg(long, value_enum, default_value_t = SampleFormat::Json)]
        format: SampleFormat,
    },

    /// 메뉴 방식으로 입력/계산/저장한다 (기본)
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleFormat {
    Json,
    Toml,
}

impl From<SampleFormat> for InputFormat {
    fn from(value: SampleFormat) -> Self {
        match value {
            SampleFormat::Json => InputFormat::Json,
            SampleFormat::Toml => InputFormat::Toml,
        }
    }
}
