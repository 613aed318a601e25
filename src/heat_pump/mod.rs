//! 히트펌프 COP 결정과 운전비 계산 모듈.

pub mod cop;
pub mod hp_cost;

pub use cop::{CopAssumptions, CopSpec, ResolvedCop};
pub use hp_cost::{heat_pump_cost, HeatPumpCostResult};
