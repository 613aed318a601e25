use serde::Serialize;

use crate::comparison::ComparisonResult;

pub const BOILER_LABEL: &str = "Fuel Boiler";
pub const HEAT_PUMP_LABEL: &str = "Heat Pump";

/// 막대그래프 한 개 분량의 데이터. 실제 그리기는 호출 측이 맡는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    /// 가장 큰 막대를 `width` 글자로 맞춘 텍스트 막대그래프.
    pub fn render_text(&self, width: usize) -> String {
        let label_w = self
            .bars
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0);
        let max = self
            .bars
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max);
        let mut out = format!("{} ({})\n", self.title, self.y_label);
        for (label, value) in &self.bars {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            let pad = label_w - label.chars().count();
            out.push_str(&format!(
                "  {label}{} | {} {value:.2}\n",
                " ".repeat(pad),
                "#".repeat(len)
            ));
        }
        out
    }
}

/// 연간 운전비 비교 (보일러 vs 히트펌프+냉방).
pub fn cost_chart(result: &ComparisonResult, currency: &str) -> BarChart {
    BarChart {
        title: format!("Operating Cost Comparison ({currency}/year)"),
        y_label: format!("{currency}/year"),
        bars: vec![
            (BOILER_LABEL.into(), result.boiler.operating_cost_per_year),
            (HEAT_PUMP_LABEL.into(), result.total_hp_cost_per_year),
        ],
    }
}

/// 연간 CO2 배출량 비교 [kg/년].
pub fn co2_chart(result: &ComparisonResult) -> BarChart {
    BarChart {
        title: "CO₂ Comparison (kgs/year)".into(),
        y_label: "kgs/year".into(),
        bars: vec![
            (BOILER_LABEL.into(), result.boiler.co2_kg_per_year),
            (HEAT_PUMP_LABEL.into(), result.total_hp_co2_kg_per_year),
        ],
    }
}
