use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use super::table::{COL_PARAMETER, COL_VALUE};
use super::{
    assumptions_table, detailed_results, inputs_table, ReportError, ReportValue, ResultTable,
};
use crate::comparison::ComparisonResult;
use crate::input::{Assumptions, CalculationInput};

pub const INPUTS_SHEET: &str = "Inputs";
pub const ASSUMPTIONS_SHEET: &str = "Assumptions";
pub const RESULTS_SHEET: &str = "Results";

const PARAMETER_COL_WIDTH: f64 = 42.0;
const VALUE_COL_WIDTH: f64 = 18.0;

/// 결과표 하나를 CSV 파일로 저장한다.
pub fn write_csv_file(table: &ResultTable, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path)?;
    table.write_csv(BufWriter::new(file))?;
    info!(path = %path.display(), rows = table.len(), "CSV written");
    Ok(())
}

fn sheets(
    input: &CalculationInput,
    assumptions: &Assumptions,
    result: &ComparisonResult,
) -> [(&'static str, ResultTable); 3] {
    [
        (INPUTS_SHEET, inputs_table(input, &assumptions.currency)),
        (ASSUMPTIONS_SHEET, assumptions_table(assumptions)),
        (
            RESULTS_SHEET,
            detailed_results(result, &assumptions.currency),
        ),
    ]
}

/// Inputs / Assumptions / Results 세 시트를 디렉터리 아래 `<시트>.csv` 파일로 저장한다.
/// .xlsx 대신 쓰는 평문 대체 형식.
pub fn write_workbook(
    dir: &Path,
    input: &CalculationInput,
    assumptions: &Assumptions,
    result: &ComparisonResult,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(dir)?;
    let sheets = sheets(input, assumptions, result);
    let mut written = Vec::with_capacity(sheets.len());
    for (name, table) in &sheets {
        let path = dir.join(format!("{name}.csv"));
        write_csv_file(table, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Inputs / Assumptions / Results 세 워크시트를 가진 .xlsx 파일을 만든다.
/// 숫자는 숫자 셀(소수 둘째 자리 표시)로, 나머지는 문자열 셀로 쓴다.
pub fn write_xlsx(
    path: &Path,
    input: &CalculationInput,
    assumptions: &Assumptions,
    result: &ComparisonResult,
) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    for (name, table) in sheets(input, assumptions, result) {
        workbook.push_worksheet(worksheet(name, &table)?);
    }
    workbook.save(path)?;
    info!(path = %path.display(), "workbook written");
    Ok(())
}

fn worksheet(name: &str, table: &ResultTable) -> Result<Worksheet, ReportError> {
    let header = Format::new().set_bold();
    let number = Format::new().set_num_format("#,##0.00");

    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;
    sheet.set_column_width(0, PARAMETER_COL_WIDTH)?;
    sheet.set_column_width(1, VALUE_COL_WIDTH)?;
    sheet.write_string_with_format(0, 0, COL_PARAMETER, &header)?;
    sheet.write_string_with_format(0, 1, COL_VALUE, &header)?;
    for (row, entry) in (1u32..).zip(&table.rows) {
        sheet.write_string(row, 0, &entry.parameter)?;
        match &entry.value {
            ReportValue::Number(v) => sheet.write_number_with_format(row, 1, *v, &number)?,
            ReportValue::Text(s) => sheet.write_string(row, 1, s)?,
        };
    }
    Ok(sheet)
}
