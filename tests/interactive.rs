//! 메뉴 방식 진단 루프 테스트. 표준 입력 대신 문자열 입력을 넣어 구동한다.
use std::io::Cursor;
use std::path::Path;

use chiller_cop_toolbox::app::run_interactive_with;
use chiller_cop_toolbox::chiller::DiagnosticInput;
use chiller_cop_toolbox::config::Config;
use chiller_cop_toolbox::report::{self, InputFormat};

fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.join("reports"),
        ..Config::default()
    }
}

fn drive(keys: &str, config: &Config) {
    let mut reader = Cursor::new(keys.as_bytes().to_vec());
    run_interactive_with(&mut reader, config).expect("interactive loop");
}

fn saved_reports(config: &Config) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(&config.output_dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn closed_input_ends_the_loop_at_every_prompt() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    // 메뉴, 섹션 편집, 경로 입력, 초기화 확인 각각에서 입력이 끊기는 경우
    for keys in ["", "1\n", "2\n120\n", "3\n1\n", "4\n", "7\n", "8\n"] {
        drive(keys, &config);
    }
    assert!(saved_reports(&config).is_empty());
}

#[test]
fn save_then_exit_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    drive("6\n0\n", &config);
    let names = saved_reports(&config);
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("COP_Analysis_서울 마포 센터_"));
}

#[test]
fn confirmed_reset_clears_the_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    drive("8\ny\n6\n0\n", &config);
    let names = saved_reports(&config);
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("COP_Analysis_Unknown_"));

    let saved = report::load_input(config.output_dir.join(&names[0])).expect("load");
    assert_eq!(saved, DiagnosticInput::empty());
}

#[test]
fn loaded_file_replaces_the_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let mut input = DiagnosticInput::sample();
    input.general.site_name = "부산 공장".into();
    let path = dir.path().join("input.toml");
    std::fs::write(&path, report::render_input(&input, InputFormat::Toml).unwrap()).unwrap();

    drive(&format!("7\n{}\n6\n", path.display()), &config);
    let names = saved_reports(&config);
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("COP_Analysis_부산 공장_"));
}

#[test]
fn edited_section_is_kept_for_later_menus() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    // 일반 현황: 현장명만 바꾸고 나머지는 엔터
    drive("1\n대구 센터\n\n\n\n\n6\n0\n", &config);
    let names = saved_reports(&config);
    assert_eq!(names.len(), 1);

    let saved = report::load_input(config.output_dir.join(&names[0])).expect("load");
    assert_eq!(saved.general.site_name, "대구 센터");
    assert_eq!(saved.spec, DiagnosticInput::sample().spec);
}
