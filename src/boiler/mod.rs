//! 기존 보일러 측 계산: 연료표와 연료비/CO2 엔진.

pub mod boiler_cost;
pub mod fuel_db;

pub use boiler_cost::{boiler_cost, BoilerCostResult, BoilerFuel};
pub use fuel_db::{FuelRecord, FuelTable, InputError};
