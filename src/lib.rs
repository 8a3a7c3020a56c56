//! 단기임대(에어비앤비/주 단위 단기임대) 투자 수익률 계산 로직을 라이브러리로 분리하여
//! CLI 뿐 아니라 다른 화면에서도 같은 계산 엔진과 공유 링크 형식을 쓰게 한다.

pub mod app;
pub mod calculator;
pub mod config;
pub mod format;
pub mod i18n;
pub mod input;
pub mod input_file;
pub mod logging;
pub mod presets;
pub mod report;
pub mod result;
pub mod revenue;
pub mod session;
pub mod share;
pub mod ui_cli;

pub use calculator::calculate;
pub use input::{
    CalculatorInput, InitialInvestment, ManagementPlatform, OperatingCosts, PlatformFees,
    RentalType, RevenueInput,
};
pub use presets::DEFAULT_INPUT;
pub use result::{CalculationResult, CostBreakdownItem, CostCategory, MonthlyBreakdown};
