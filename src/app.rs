use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::boiler::fuel_db;
use crate::comparison::{self, ComparisonResult};
use crate::config::{Config, ConfigError};
use crate::error::CalcError;
use crate::input::{Assumptions, CalculationInput};
use crate::report::{self, workbook, ReportError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 계산 오류
    #[error("calculation error: {0}")]
    Calc(#[from] CalcError),
    /// 보고서 내보내기 오류
    #[error("export error: {0}")]
    Report(#[from] ReportError),
}

/// 명령행에서 받은 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: PathBuf,
    /// 설정 파일의 연료표 경로를 덮어쓴다.
    pub fuel_db: Option<PathBuf>,
    /// 시나리오를 대화형으로 입력받고 설정 파일에 저장한다.
    pub interactive: bool,
    pub csv_out: Option<PathBuf>,
    /// `.xlsx`로 끝나면 워크북 파일, 그 밖에는 시트별 CSV를 담을 디렉터리.
    pub workbook_out: Option<PathBuf>,
}

/// 설정을 읽어 한 번의 비교 계산을 수행하고 결과를 출력/저장한다.
pub fn run(config: &mut Config, opts: &RunOptions) -> Result<ComparisonResult, AppError> {
    if let Some(path) = &opts.fuel_db {
        config.fuel_db = Some(path.clone());
    }
    let fuels = fuel_db::load_or_default(config.fuel_db.as_deref());

    if opts.interactive {
        config.scenario = ui_cli::prompt_scenario(&config.scenario, &fuels)?;
        config.save(&opts.config_path)?;
        info!(path = %opts.config_path.display(), "scenario saved");
    }

    let result = comparison::compare(&config.scenario, &config.assumptions, &fuels)?;
    let currency = config.assumptions.currency.as_str();
    ui_cli::print_report(&result, currency);

    if let Some(path) = &opts.csv_out {
        export_csv(&result, currency, path)?;
        println!("\nCSV 저장: {}", path.display());
    }
    if let Some(path) = &opts.workbook_out {
        export_workbook(&config.scenario, &config.assumptions, &result, path)?;
    }
    Ok(result)
}

fn is_xlsx_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"))
}

/// Inputs/Assumptions/Results 시트를 .xlsx 파일 또는 CSV 디렉터리로 저장한다.
pub fn export_workbook(
    input: &CalculationInput,
    assumptions: &Assumptions,
    result: &ComparisonResult,
    path: &Path,
) -> Result<(), AppError> {
    if is_xlsx_path(path) {
        workbook::write_xlsx(path, input, assumptions, result)?;
        println!("\n워크북 저장: {}", path.display());
    } else {
        let files = workbook::write_workbook(path, input, assumptions, result)?;
        println!("\n시트 저장: {} 개 파일 ({})", files.len(), path.display());
    }
    Ok(())
}

/// 상세 결과표를 CSV 파일로 저장한다.
pub fn export_csv(result: &ComparisonResult, currency: &str, path: &Path) -> Result<(), AppError> {
    let table = report::detailed_results(result, currency);
    workbook::write_csv_file(&table, path)?;
    Ok(())
}
