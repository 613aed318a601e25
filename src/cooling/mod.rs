//! 히트펌프 증발기 측 부수 냉방 편익 계산.

pub mod cooling_benefit;

pub use cooling_benefit::{cooling_benefit, CoolingBenefitResult};
