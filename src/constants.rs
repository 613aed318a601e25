//! 모든 계산 엔진이 공유하는 단위 환산 상수.
//! 보일러/히트펌프/냉방 계산 사이에 값이 어긋나지 않도록 한 곳에서만 정의한다.

/// 1 kW 열출력에 해당하는 kcal/h (= 1 kWh 당 kcal)
pub const KCAL_PER_KWH: f64 = 860.0;

/// 1 kcal 당 kJ
pub const KJ_PER_KCAL: f64 = 4.184;

/// 물의 비열 [kJ/kg·K]. 응축수 엔탈피 근사에 사용한다.
pub const WATER_CP_KJ_PER_KGK: f64 = 4.186;

/// 1 냉동톤(TR) 당 kW
pub const KW_PER_TR: f64 = 3.516;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// COP 식에서 사용하는 절대온도 오프셋. 원 계산식과 맞추기 위해 273.15가 아닌 273을 쓴다.
pub const CELSIUS_TO_KELVIN: f64 = 273.0;

/// 전력망 CO2 배출계수 [kg CO2/kWh]
pub const GRID_CO2_KG_PER_KWH: f64 = 0.82;

/// 이상 COP 대비 실제 COP 경험 보정계수
pub const COP_DERATING: f64 = 0.52;

/// 증발기 접근온도차 [°C]: 증발온도 = 열원온도 - 10
pub const EVAPORATOR_APPROACH_C: f64 = 10.0;

/// 응축기 접근온도차 [°C]: 응축온도 = 온수온도 + 5
pub const CONDENSER_APPROACH_C: f64 = 5.0;

pub const KG_PER_TONNE: f64 = 1000.0;
