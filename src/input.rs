//! 계산기 입력 모델.
//!
//! 두 임대 유형의 필드를 하나의 평평한 구조체에 모두 담는다. 유형을 바꿔도
//! 다른 유형의 입력값이 그대로 남아 있어야 하므로 enum 으로 나누지 않는다.
//! 금액은 원 단위, 비율은 소수(0.03 = 3%)로 저장한다.

use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_INPUT;

/// 임대 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum RentalType {
    /// 에어비앤비(1박 단위 숙박)
    Airbnb,
    /// 단기임대(7일 단위 계약)
    ShortTerm,
}

impl RentalType {
    pub const ALL: [RentalType; 2] = [RentalType::Airbnb, RentalType::ShortTerm];
}

/// 대행 플랫폼 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManagementPlatform {
    /// 직접 운영
    None,
    MrMention,
    Wehome,
    /// 수수료율 직접 입력
    Custom,
}

impl ManagementPlatform {
    pub const ALL: [ManagementPlatform; 4] = [
        ManagementPlatform::None,
        ManagementPlatform::MrMention,
        ManagementPlatform::Wehome,
        ManagementPlatform::Custom,
    ];
}

/// 초기 투자비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialInvestment {
    /// 보증금 [원]. 돌려받는 돈이라 보증금 제외 수익률에서 빠진다.
    pub security_deposit: f64,
    /// 권리금 [원]
    pub key_money: f64,
    /// 인테리어비 [원]
    pub interior_cost: f64,
}

impl Default for InitialInvestment {
    fn default() -> Self {
        DEFAULT_INPUT.investment
    }
}

/// 수익 관련 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueInput {
    /// 평일 1일 요금 [원] (에어비앤비)
    pub weekday_rate: f64,
    /// 월 평일 입실일수 (에어비앤비)
    pub weekday_occupancy: f64,
    /// 주말 1일 요금 [원] (에어비앤비)
    pub weekend_rate: f64,
    /// 월 주말 입실일수, 금/토 기준 약 8~9일 (에어비앤비)
    pub weekend_occupancy: f64,
    /// 7일 요금 [원] (단기임대)
    pub rate_per_unit: f64,
    /// 월 입실 건수 (단기임대)
    pub expected_occupancy_per_month: f64,
    /// 인당 추가 요금 [원]. 에어비앤비는 1일, 단기임대는 1주(7일) 기준이다.
    pub extra_guest_fee: f64,
    /// 평균 추가 인원 [명]
    pub average_extra_guests: f64,
    /// 인원 추가 발생 비율 (0.5 = 50%)
    pub extra_guest_frequency: f64,
    /// 연간 운영 개월수 (1~12). 계산 엔진은 범위를 강제하지 않는다.
    pub operating_months_per_year: f64,
}

impl Default for RevenueInput {
    fn default() -> Self {
        DEFAULT_INPUT.revenue
    }
}

/// 플랫폼 수수료 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformFees {
    /// 에어비앤비 호스트 수수료율 (0.03 = 3%)
    pub airbnb_fee_rate: f64,
    pub management_platform: ManagementPlatform,
    /// 대행 플랫폼 수수료율. 에어비앤비 수수료에 더해진다.
    pub management_fee_rate: f64,
    /// 단기임대 플랫폼 수수료율 (0.033 = 3.3%)
    pub short_term_fee_rate: f64,
}

impl Default for PlatformFees {
    fn default() -> Self {
        DEFAULT_INPUT.platform_fees
    }
}

/// 월 운영비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatingCosts {
    /// 월세 [원]
    pub monthly_rent: f64,
    /// 월 관리비 [원]
    pub monthly_management_fee: f64,
    /// 청소 1회 비용 [원]
    pub cleaning_cost: f64,
    /// 월 청소 횟수
    pub cleaning_frequency_per_month: f64,
    /// 세율 (0.033 = 3.3%). 플랫폼 수수료를 뺀 매출에만 적용한다.
    pub tax_rate: f64,
    /// 월 보험료 [원]
    pub monthly_insurance: f64,
    /// 월 수선유지비 [원]
    pub monthly_maintenance: f64,
    /// 월 공과금 [원]
    pub monthly_utilities: f64,
}

impl Default for OperatingCosts {
    fn default() -> Self {
        DEFAULT_INPUT.operating_costs
    }
}

/// 전체 계산기 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInput {
    pub rental_type: RentalType,
    pub investment: InitialInvestment,
    pub revenue: RevenueInput,
    pub platform_fees: PlatformFees,
    pub operating_costs: OperatingCosts,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        DEFAULT_INPUT
    }
}
