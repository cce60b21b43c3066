use clap::Parser;
use chiller_cop_toolbox::{app, cli::Cli, config};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드하고 로깅을 켠 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (cfg, origin) = config::load_or_default(&cli.config)?;
    let level = cli.log_level.as_deref().unwrap_or(cfg.log_level.as_str());
    init_logging(level);
    origin.log(&cli.config);
    app::run(cli, &cfg)?;
    Ok(())
}

/// RUST_LOG가 있으면 그 값을, 없으면 설정 레벨을 쓴다. 로그는 stderr로 보낸다.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chiller_cop_toolbox={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
