//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(폼, 보고서 뷰어 등)에서도
//! 같은 진단 엔진을 쓸 수 있게 한다.

pub mod app;
pub mod chiller;
pub mod cli;
pub mod config;
pub mod display;
pub mod report;
pub mod ui_cli;
