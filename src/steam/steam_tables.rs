use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::if97;

/// 증기 엔탈피 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteamTableError {
    /// IF97 계산 실패
    #[error("IF97 calculation failed: {0}")]
    If97(&'static str),
}

/// 포화 증기 엔탈피를 어떤 방식으로 구할지 선택한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SteamEnthalpyPolicy {
    /// 1~11 bar(abs) 고정 표 선형 보간. 범위 밖은 가장자리 값으로 클램프.
    #[default]
    Table,
    /// IAPWS-IF97 Region4 포화온도 + Region2 엔탈피
    If97,
}

/// 엔탈피 조회 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyLookup {
    /// 포화 증기 비엔탈피(kJ/kg)
    pub enthalpy_kj_per_kg: f64,
    /// true면 표 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy)]
struct SteamTableRow {
    pressure_bar: f64,
    vapor_enthalpy_kj_per_kg: f64,
}

const fn row(pressure_bar: f64, vapor_enthalpy_kj_per_kg: f64) -> SteamTableRow {
    SteamTableRow {
        pressure_bar,
        vapor_enthalpy_kj_per_kg,
    }
}

// 1~11 bar(abs), 0.5 bar 간격 포화 증기 엔탈피.
const SAT_TABLE: [SteamTableRow; 21] = [
    row(1.0, 2674.9),
    row(1.5, 2693.1),
    row(2.0, 2706.2),
    row(2.5, 2716.5),
    row(3.0, 2724.9),
    row(3.5, 2732.0),
    row(4.0, 2738.1),
    row(4.5, 2743.4),
    row(5.0, 2748.1),
    row(5.5, 2752.3),
    row(6.0, 2756.1),
    row(6.5, 2759.6),
    row(7.0, 2762.8),
    row(7.5, 2765.6),
    row(8.0, 2768.3),
    row(8.5, 2770.8),
    row(9.0, 2773.0),
    row(9.5, 2775.1),
    row(10.0, 2777.1),
    row(10.5, 2778.9),
    row(11.0, 2780.6),
];

/// 표 보간이 가능한 압력 범위 (bar abs).
pub fn table_pressure_range() -> (f64, f64) {
    (
        SAT_TABLE[0].pressure_bar,
        SAT_TABLE[SAT_TABLE.len() - 1].pressure_bar,
    )
}

/// 표에 수록된 (압력, 엔탈피) 점을 순서대로 반환한다.
pub fn table_knots() -> impl Iterator<Item = (f64, f64)> {
    SAT_TABLE
        .iter()
        .map(|r| (r.pressure_bar, r.vapor_enthalpy_kj_per_kg))
}

/// 압력(bar abs) 기준 포화 증기 엔탈피를 표에서 선형 보간한다.
pub fn saturated_vapor_enthalpy(p_bar_abs: f64) -> EnthalpyLookup {
    let first = SAT_TABLE[0];
    let last = SAT_TABLE[SAT_TABLE.len() - 1];
    if p_bar_abs <= first.pressure_bar {
        return EnthalpyLookup {
            enthalpy_kj_per_kg: first.vapor_enthalpy_kj_per_kg,
            clamped: p_bar_abs < first.pressure_bar,
        };
    }
    if p_bar_abs >= last.pressure_bar {
        return EnthalpyLookup {
            enthalpy_kj_per_kg: last.vapor_enthalpy_kj_per_kg,
            clamped: p_bar_abs > last.pressure_bar,
        };
    }
    let (low, high) = bracket_by_pressure(p_bar_abs);
    let ratio = (p_bar_abs - low.pressure_bar) / (high.pressure_bar - low.pressure_bar);
    EnthalpyLookup {
        enthalpy_kj_per_kg: low.vapor_enthalpy_kj_per_kg
            + ratio * (high.vapor_enthalpy_kj_per_kg - low.vapor_enthalpy_kj_per_kg),
        clamped: false,
    }
}

/// 선택한 방식으로 포화 증기 엔탈피(kJ/kg)를 계산한다.
pub fn vapor_enthalpy(
    policy: SteamEnthalpyPolicy,
    p_bar_abs: f64,
) -> Result<EnthalpyLookup, SteamTableError> {
    match policy {
        SteamEnthalpyPolicy::Table => {
            let lookup = saturated_vapor_enthalpy(p_bar_abs);
            if lookup.clamped {
                let (lo, hi) = table_pressure_range();
                warn!(
                    pressure_bar = p_bar_abs,
                    "steam pressure outside {lo}..{hi} bar(abs), using edge enthalpy"
                );
            }
            Ok(lookup)
        }
        SteamEnthalpyPolicy::If97 => {
            let h = if97::saturated_vapor_enthalpy_kj_per_kg(p_bar_abs)
                .map_err(SteamTableError::If97)?;
            Ok(EnthalpyLookup {
                enthalpy_kj_per_kg: h,
                clamped: false,
            })
        }
    }
}

// 호출 전에 범위 검사를 마쳤다고 가정한다.
fn bracket_by_pressure(p_bar: f64) -> (SteamTableRow, SteamTableRow) {
    for pair in SAT_TABLE.windows(2) {
        let a = pair[0];
        let b = pair[1];
        if p_bar >= a.pressure_bar && p_bar <= b.pressure_bar {
            return (a, b);
        }
    }
    (SAT_TABLE[SAT_TABLE.len() - 2], SAT_TABLE[SAT_TABLE.len() - 1])
}
