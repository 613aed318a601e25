//! 증기 엔탈피 관련 계산 모듈 모음.

pub mod if97;
pub mod steam_tables;

pub use steam_tables::*;
