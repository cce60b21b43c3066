use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chiller::{DiagnosticInput, DiagnosticResult};
use crate::cli::{Cli, Commands, SampleFormat};
use crate::config::{Config, ConfigError};
use crate::display;
use crate::report::{self, ReportError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 입력 파일/보고서 처리 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 명령행 인자에 따라 하위 명령을 실행한다. 하위 명령이 없으면 대화형 모드.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Some(Commands::Evaluate {
            input,
            json,
            export,
            out_dir,
        }) => {
            let out_dir = out_dir.as_deref().unwrap_or(config.output_dir.as_path());
            evaluate_file(input, *json, export.then_some(out_dir), config)?;
            Ok(())
        }
        Some(Commands::Sample { format }) => print_sample(*format),
        Some(Commands::Interactive) | None => run_interactive(config),
    }
}

/// 입력 파일을 진단해 결과를 출력하고, 요청 시 보고서를 저장한다.
/// 저장했다면 보고서 경로를 돌려준다.
pub fn evaluate_file(
    path: &Path,
    json: bool,
    export_dir: Option<&Path>,
    config: &Config,
) -> Result<Option<PathBuf>, AppError> {
    let input = report::load_input(path)?;
    let result = input.evaluate();
    tracing::debug!(
        branch = ?result.cop_branch,
        drop_pct = result.performance_drop_pct,
        "진단 완료"
    );
    println!("{}", render_evaluation(&input, &result, json, config)?);
    let Some(dir) = export_dir else {
        return Ok(None);
    };
    let saved = report::save_report(dir, &input, &result)?;
    if !json {
        println!("저장 완료: {}", saved.display());
    }
    Ok(Some(saved))
}

/// `evaluate` 출력 본문. `json`이면 결과 구조체를 그대로, 아니면 요약문.
pub fn render_evaluation(
    input: &DiagnosticInput,
    result: &DiagnosticResult,
    json: bool,
    config: &Config,
) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(result).map_err(ReportError::from)?)
    } else {
        Ok(display::render_summary(
            input,
            result,
            config.io_ratio_warning_pct,
        ))
    }
}

fn print_sample(format: SampleFormat) -> Result<(), AppError> {
    let text = report::render_input(&DiagnosticInput::sample(), format.into())?;
    println!("{text}");
    Ok(())
}

/// 입력 종료(EOF)는 어느 프롬프트에서든 대화형 루프의 정상 종료로 본다.
fn until_closed<T>(res: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(AppError::InputClosed) => Ok(None),
        Err(e) => Err(e),
    }
}

/// 표준 입력으로 메뉴 방식 진단을 진행한다.
pub fn run_interactive(config: &Config) -> Result<(), AppError> {
    run_interactive_with(&mut io::stdin().lock(), config)
}

/// 메뉴 방식 진단 루프. 입력이 바뀔 때마다 결과를 처음부터 다시 계산한다.
pub fn run_interactive_with(reader: &mut impl BufRead, config: &Config) -> Result<(), AppError> {
    let mut input = DiagnosticInput::sample();
    loop {
        let result = input.evaluate();
        ui_cli::print_header(&result);
        let Some(choice) = until_closed(ui_cli::main_menu(reader))? else {
            break;
        };
        match choice {
            MenuChoice::General
            | MenuChoice::Spec
            | MenuChoice::Measurement
            | MenuChoice::Correction => {
                let Some(next) = until_closed(ui_cli::rebuild(reader, &input, choice))? else {
                    break;
                };
                input = next;
            }
            MenuChoice::Results => {
                println!(
                    "\n{}",
                    display::render_summary(&input, &result, config.io_ratio_warning_pct)
                );
            }
            MenuChoice::Save => match report::save_report(&config.output_dir, &input, &result) {
                Ok(path) => println!("데이터가 파일로 성공적으로 저장되었습니다: {}", path.display()),
                Err(e) => {
                    tracing::error!(error = %e, "보고서 저장 실패");
                    println!("저장 중 오류가 발생했습니다: {e}");
                }
            },
            MenuChoice::Load => {
                let prompt = "불러올 파일 경로(.json/.toml): ";
                let Some(path) = until_closed(ui_cli::read_path(reader, prompt))? else {
                    break;
                };
                match report::load_input(&path) {
                    Ok(loaded) => {
                        input = loaded;
                        println!("불러오기 완료: {}", path.display());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, path = %path.display(), "입력 파일 로드 실패");
                        println!("불러오기 실패: {e}");
                    }
                }
            }
            MenuChoice::Reset => {
                let prompt = "입력하신 모든 내용을 초기화하시겠습니까?";
                let Some(yes) = until_closed(ui_cli::confirm(reader, prompt))? else {
                    break;
                };
                if yes {
                    input = DiagnosticInput::empty();
                }
            }
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}
