//! IAPWS-IF97 기반 포화 증기 엔탈피. Region2 계산은 seuif97 크레이트로 위임한다.
//! 입력: 압력(bar, 절대)
//! 출력: 엔탈피[kJ/kg]

use seuif97::{pt, OH};

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

fn region4_sum(theta: f64) -> f64 {
    R4_N[0] * theta
        + R4_N[1] * theta.powf(1.5)
        + R4_N[2] * theta.powi(3)
        + R4_N[3] * theta.powf(3.5)
        + R4_N[4] * theta.powi(4)
        + R4_N[5] * theta.powf(7.5)
}

/// 포화온도(°C) - 입력 압력은 bar abs. 뉴턴 반복으로 Region4 식을 역산한다.
pub fn saturation_temp_c_from_pressure_bar_abs(p_bar_abs: f64) -> Result<f64, &'static str> {
    if p_bar_abs <= 0.0 {
        return Err("압력은 양수여야 합니다.");
    }
    if p_bar_abs > P4_STAR_MPA * 10.0 {
        return Err("임계압력(220.64 bar) 초과");
    }
    let target = (p_bar_abs / 10.0 / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..30 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let f = (T4_STAR_K / t_k) * region4_sum(theta) - target;
        let dfdtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let dfd_t = -(T4_STAR_K / t_k.powi(2)) * region4_sum(theta)
            + (T4_STAR_K / t_k) * dfdtheta * (-1.0 / T4_STAR_K);
        let delta = f / dfd_t;
        t_k -= delta;
        if delta.abs() < 1e-8 {
            break;
        }
    }
    Ok(t_k - 273.15)
}

/// 포화 증기(건도 1) 엔탈피 [kJ/kg].
pub fn saturated_vapor_enthalpy_kj_per_kg(p_bar_abs: f64) -> Result<f64, &'static str> {
    let t_c = saturation_temp_c_from_pressure_bar_abs(p_bar_abs)?;
    let h_kj = pt(p_bar_abs / 10.0, t_c, (OH, 2));
    if h_kj.is_nan() {
        return Err("IF97 계산 실패(유효 범위 밖이거나 수렴 실패)");
    }
    Ok(h_kj)
}
