use serde::Serialize;
use std::fmt;
use std::io::{Read, Write};

use super::ReportError;

pub const COL_PARAMETER: &str = "Parameter";
pub const COL_VALUE: &str = "Value";

/// 결과표 한 칸의 값. 숫자는 소수 둘째 자리로 표기한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(f64),
    Text(String),
}

impl ReportValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ReportValue::Number(v) => Some(*v),
            ReportValue::Text(_) => None,
        }
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => ReportValue::Number(v),
            Err(_) => ReportValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Number(v) => write!(f, "{v:.2}"),
            ReportValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ReportValue {
    fn from(value: f64) -> Self {
        ReportValue::Number(value)
    }
}

impl From<&str> for ReportValue {
    fn from(value: &str) -> Self {
        ReportValue::Text(value.to_string())
    }
}

impl From<String> for ReportValue {
    fn from(value: String) -> Self {
        ReportValue::Text(value)
    }
}

/// Parameter/Value 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Parameter")]
    pub parameter: String,
    #[serde(rename = "Value")]
    pub value: ReportValue,
}

/// 순서가 있는 Parameter/Value 표.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parameter: impl Into<String>, value: impl Into<ReportValue>) {
        self.rows.push(ResultRow {
            parameter: parameter.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, parameter: &str) -> Option<&ReportValue> {
        self.rows
            .iter()
            .find(|r| r.parameter == parameter)
            .map(|r| &r.value)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 헤더 한 줄 + 파라미터당 한 줄의 CSV로 쓴다.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([COL_PARAMETER, COL_VALUE])?;
        for row in &self.rows {
            wtr.write_record([row.parameter.as_str(), row.value.to_string().as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// `write_csv`로 만든 CSV를 다시 읽는다. 숫자로 해석되는 값은 숫자로 복원한다.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, ReportError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let param_idx = headers
            .iter()
            .position(|h| h == COL_PARAMETER)
            .ok_or(ReportError::MissingColumn(COL_PARAMETER))?;
        let value_idx = headers
            .iter()
            .position(|h| h == COL_VALUE)
            .ok_or(ReportError::MissingColumn(COL_VALUE))?;
        let mut table = Self::new();
        for record in rdr.records() {
            let record = record?;
            table.push(
                record.get(param_idx).unwrap_or_default(),
                ReportValue::parse(record.get(value_idx).unwrap_or_default()),
            );
        }
        Ok(table)
    }

    /// 터미널 출력용으로 두 열을 정렬한 문자열을 만든다.
    pub fn render_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.parameter.chars().count())
            .max()
            .unwrap_or(0)
            .max(COL_PARAMETER.len());
        let mut out = format!("{COL_PARAMETER:<width$} | {COL_VALUE}\n");
        out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(16)));
        for row in &self.rows {
            let pad = width - row.parameter.chars().count();
            out.push_str(&format!(
                "{}{} | {}\n",
                row.parameter,
                " ".repeat(pad),
                row.value
            ));
        }
        out
    }
}
