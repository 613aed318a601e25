//! 보일러(또는 전기 히터)와 히트펌프의 연간 운전비·CO2 배출을 비교하는 계산 라이브러리.
//! 핵심 계산은 입출력과 분리된 순수 함수로 두고, CLI는 그 위의 얇은 층으로 둔다.

pub mod app;
pub mod boiler;
pub mod capacity;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod cooling;
pub mod error;
pub mod heat_pump;
pub mod input;
pub mod report;
pub mod steam;
pub mod ui_cli;

pub use comparison::{compare, ComparisonResult};
pub use error::{CalcError, DomainError};
pub use input::{Assumptions, CalculationInput};
