use std::path::PathBuf;

use clap::Parser;
use heatpump_savings::app::{self, RunOptions};
use heatpump_savings::config::{self, DEFAULT_CONFIG_FILE};
use tracing::Level;

/// 보일러 대비 히트펌프 운전비·CO2 절감 계산기.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// 시나리오/설계 상수 설정 파일 (없으면 기본값으로 생성)
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// 연료표 파일 (.csv, .toml, .xlsx, .xls)
    #[arg(long)]
    fuel_db: Option<PathBuf>,
    /// 입력값을 대화형으로 묻는다
    #[arg(long, short, default_value_t = false)]
    interactive: bool,
    /// 상세 결과를 CSV로 저장
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Inputs/Assumptions/Results 시트 저장 (.xlsx 파일, 그 밖의 경로는 CSV 디렉터리)
    #[arg(long)]
    workbook: Option<PathBuf>,
    /// 디버그 로그 출력
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산을 실행한다.
fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let opts = RunOptions {
        config_path: cli.config,
        fuel_db: cli.fuel_db,
        interactive: cli.interactive,
        csv_out: cli.csv,
        workbook_out: cli.workbook,
    };
    app::run(&mut cfg, &opts)?;
    Ok(())
}
