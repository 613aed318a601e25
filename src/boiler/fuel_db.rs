//! 연료별 기본 발열량/효율/단가/CO2 배출계수 표.
//! 기본 내장 표를 제공하고, CSV / TOML / 스프레드시트(.xlsx, .xls) 파일로 대체할 수 있다.

use calamine::{open_workbook_auto, Data, Reader};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// 전기 저항 히터를 나타내는 연료 이름. 연소가 아닌 저항 가열로 취급한다.
pub const ELECTRIC_RESISTIVE: &str = "Electric (resistive)";

pub const COL_FUEL: &str = "Fuel";
pub const COL_CV: &str = "CV_default";
pub const COL_EFF: &str = "Eff_default";
pub const COL_COST: &str = "Fuel_Cost";
pub const COL_CO2: &str = "CO2_Emn/kg";

const NUMERIC_COLUMNS: [&str; 4] = [COL_CV, COL_EFF, COL_COST, COL_CO2];

static EMPTY_CELL: Data = Data::Empty;

/// 연료 한 종류의 기준 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    #[serde(rename = "Fuel")]
    pub name: String,
    /// 기본 발열량 [kcal/kg]
    #[serde(rename = "CV_default")]
    pub calorific_value_kcal_per_kg: f64,
    /// 기본 보일러 효율 [%]
    #[serde(rename = "Eff_default")]
    pub efficiency_pct: f64,
    /// 연료 단가 [통화/kg]
    #[serde(rename = "Fuel_Cost")]
    pub unit_cost: f64,
    /// CO2 배출계수 [kg CO2/kg 연료]
    #[serde(rename = "CO2_Emn/kg")]
    pub co2_kg_per_kg: f64,
}

impl FuelRecord {
    pub fn new(name: &str, cv: f64, eff_pct: f64, cost: f64, co2: f64) -> Self {
        Self {
            name: name.to_string(),
            calorific_value_kcal_per_kg: cv,
            efficiency_pct: eff_pct,
            unit_cost: cost,
            co2_kg_per_kg: co2,
        }
    }

    /// 숫자 열 이름과 값의 쌍.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 4] {
        [
            (COL_CV, self.calorific_value_kcal_per_kg),
            (COL_EFF, self.efficiency_pct),
            (COL_COST, self.unit_cost),
            (COL_CO2, self.co2_kg_per_kg),
        ]
    }

    pub fn is_electric_resistive(&self) -> bool {
        self.name.eq_ignore_ascii_case(ELECTRIC_RESISTIVE)
    }
}

/// 연료표 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read fuel table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV fuel table: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed TOML fuel table: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("malformed spreadsheet fuel table: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("fuel table is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("fuel '{0}' appears more than once")]
    DuplicateFuel(String),
    #[error("fuel '{fuel}': column '{column}' is not a number ('{value}')")]
    NonNumeric {
        fuel: String,
        column: &'static str,
        value: String,
    },
    #[error("fuel table row {0} has an empty fuel name")]
    EmptyFuelName(usize),
    #[error("fuel table has no rows")]
    Empty,
    #[error("unsupported fuel table format '{0}' (expected .csv, .toml, .xlsx or .xls)")]
    UnsupportedFormat(String),
}

/// 연료 이름을 키로 하는 검증된 연료표. 입력 순서를 유지한다.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTable {
    records: Vec<FuelRecord>,
}

#[derive(Debug, Deserialize)]
struct FuelTableFile {
    fuel: Vec<FuelRecord>,
}

impl FuelTable {
    /// 빈 표, 빈 이름, 유한하지 않은 수치(NaN/inf), 중복 이름(대소문자 무시)을 거부한다.
    pub fn new(records: Vec<FuelRecord>) -> Result<Self, InputError> {
        if records.is_empty() {
            return Err(InputError::Empty);
        }
        for (i, rec) in records.iter().enumerate() {
            if rec.name.trim().is_empty() {
                return Err(InputError::EmptyFuelName(i + 1));
            }
            let non_finite = rec
                .numeric_fields()
                .into_iter()
                .find(|(_, v)| !v.is_finite());
            if let Some((column, value)) = non_finite {
                return Err(InputError::NonNumeric {
                    fuel: rec.name.clone(),
                    column,
                    value: value.to_string(),
                });
            }
            if records[..i]
                .iter()
                .any(|r| r.name.eq_ignore_ascii_case(&rec.name))
            {
                return Err(InputError::DuplicateFuel(rec.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// 연료 이름 → (발열량, 효율 %, 단가, CO2 계수) 매핑으로 표를 만든다.
    pub fn from_tuples<I, S>(rows: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (S, [f64; 4])>,
        S: Into<String>,
    {
        let records = rows
            .into_iter()
            .map(|(name, [cv, eff, cost, co2])| FuelRecord {
                name: name.into(),
                calorific_value_kcal_per_kg: cv,
                efficiency_pct: eff,
                unit_cost: cost,
                co2_kg_per_kg: co2,
            })
            .collect();
        Self::new(records)
    }

    /// 기본 내장 연료표.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                FuelRecord::new("Biomass", 3000.0, 70.0, 10.0, 1.8),
                FuelRecord::new("LPG", 11500.0, 90.0, 60.0, 3.0),
                FuelRecord::new("PNG", 11500.0, 90.0, 60.0, 2.8),
                FuelRecord::new("Diesel", 10500.0, 85.0, 100.0, 3.2),
                FuelRecord::new("Coal", 5000.0, 65.0, 10.0, 2.5),
                FuelRecord::new(ELECTRIC_RESISTIVE, 860.0, 100.0, 8.0, 0.82),
            ],
        }
    }

    pub fn records(&self) -> &[FuelRecord] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn find(&self, name: &str) -> Option<&FuelRecord> {
        self.records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    }

    /// `Fuel, CV_default, Eff_default, Fuel_Cost, CO2_Emn/kg` 열을 가진 CSV를 읽는다.
    /// 그 밖의 열은 무시한다.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, InputError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let header_record = rdr.headers()?.clone();
        let headers: Vec<&str> = header_record.iter().collect();
        let (fuel_idx, numeric_idx) = locate_columns(&headers)?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let name = record.get(fuel_idx).unwrap_or_default().to_string();
            let mut values = [0.0; 4];
            for ((value, idx), col) in values.iter_mut().zip(numeric_idx).zip(NUMERIC_COLUMNS) {
                let raw = record.get(idx).unwrap_or_default();
                *value = raw.parse::<f64>().map_err(|_| InputError::NonNumeric {
                    fuel: name.clone(),
                    column: col,
                    value: raw.to_string(),
                })?;
            }
            let [cv, eff, cost, co2] = values;
            records.push(FuelRecord::new(&name, cv, eff, cost, co2));
        }
        Self::new(records)
    }

    /// `[[fuel]]` 배열 형식의 TOML 문자열을 읽는다. 키 이름은 CSV 열 이름과 같다.
    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        let file: FuelTableFile = toml::from_str(content)?;
        Self::new(file.fuel)
    }

    /// 스프레드시트 첫 번째 시트를 읽는다. 첫 행은 CSV와 같은 열 이름이어야 한다.
    /// 숫자 칸은 숫자 셀이나 숫자로 읽히는 문자열 셀을 받는다. 완전히 빈 행은 건너뛴다.
    pub fn from_spreadsheet(path: &Path) -> Result<Self, InputError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range_at(0).ok_or(InputError::Empty)??;
        let mut rows = range.rows();
        let header_row = rows.next().ok_or(InputError::Empty)?;
        let header_text: Vec<String> = header_row
            .iter()
            .map(|c| c.to_string().trim().to_string())
            .collect();
        let headers: Vec<&str> = header_text.iter().map(String::as_str).collect();
        let (fuel_idx, numeric_idx) = locate_columns(&headers)?;

        let mut records = Vec::new();
        for row in rows {
            if row.iter().all(|c| matches!(c, Data::Empty)) {
                continue;
            }
            let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);
            let name = cell(fuel_idx).to_string().trim().to_string();
            let mut values = [0.0; 4];
            for ((value, idx), col) in values.iter_mut().zip(numeric_idx).zip(NUMERIC_COLUMNS) {
                let raw = cell(idx);
                *value = cell_number(raw).ok_or_else(|| InputError::NonNumeric {
                    fuel: name.clone(),
                    column: col,
                    value: raw.to_string(),
                })?;
            }
            let [cv, eff, cost, co2] = values;
            records.push(FuelRecord::new(&name, cv, eff, cost, co2));
        }
        Self::new(records)
    }

    /// 확장자(.csv / .toml / .xlsx / .xls)에 따라 연료표 파일을 읽는다.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Self::from_csv_reader(fs::File::open(path)?),
            "toml" => Self::from_toml_str(&fs::read_to_string(path)?),
            "xlsx" | "xlsm" | "xls" => Self::from_spreadsheet(path),
            other => Err(InputError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 머리글에서 `Fuel`과 숫자 열 네 개의 위치를 찾는다. 그 밖의 열은 무시한다.
fn locate_columns(headers: &[&str]) -> Result<(usize, [usize; 4]), InputError> {
    let position = |col: &'static str| {
        headers
            .iter()
            .position(|h| *h == col)
            .ok_or(InputError::MissingColumn(col))
    };
    let fuel_idx = position(COL_FUEL)?;
    let mut numeric_idx = [0usize; 4];
    for (slot, col) in numeric_idx.iter_mut().zip(NUMERIC_COLUMNS) {
        *slot = position(col)?;
    }
    Ok((fuel_idx, numeric_idx))
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 파일이 주어지면 읽고, 실패하면 오류를 기록한 뒤 기본 내장 표를 사용한다.
pub fn load_or_default(path: Option<&Path>) -> FuelTable {
    let Some(path) = path else {
        return FuelTable::builtin();
    };
    match FuelTable::load(path) {
        Ok(table) => {
            info!(path = %path.display(), fuels = table.records().len(), "fuel table loaded");
            table
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "fuel table rejected, using built-in defaults");
            FuelTable::builtin()
        }
    }
}
