//! 계산 결과 모델.
//!
//! 모든 값은 반올림하지 않은 원시 `f64`이다. 표시용 반올림은 [`crate::format`]에서 한다.

use serde::Serialize;

use crate::i18n::keys;

/// 월별 상세 분석 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// 1~12
    pub month: u8,
    pub gross_revenue: f64,
    pub rent: f64,
    pub platform_fee_amount: f64,
    pub cleaning_cost_total: f64,
    pub management_fee: f64,
    pub tax_amount: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub utilities: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
}

impl MonthlyBreakdown {
    /// 운영하지 않는 달. 월 번호를 제외한 모든 값이 0이다.
    pub fn idle(month: u8) -> Self {
        Self {
            month,
            ..Self::default()
        }
    }
}

/// 비용 구성 항목. 선언 순서가 차트 범례 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    Rent,
    PlatformFees,
    Cleaning,
    ManagementFee,
    Tax,
    Insurance,
    Maintenance,
    Utilities,
}

impl CostCategory {
    pub const ALL: [CostCategory; 8] = [
        CostCategory::Rent,
        CostCategory::PlatformFees,
        CostCategory::Cleaning,
        CostCategory::ManagementFee,
        CostCategory::Tax,
        CostCategory::Insurance,
        CostCategory::Maintenance,
        CostCategory::Utilities,
    ];

    /// 차트 색상(hex).
    pub fn color(self) -> &'static str {
        match self {
            CostCategory::Rent => "#FF8C42",
            CostCategory::PlatformFees => "#FF6B6B",
            CostCategory::Cleaning => "#4ECDC4",
            CostCategory::ManagementFee => "#45B7D1",
            CostCategory::Tax => "#96CEB4",
            CostCategory::Insurance => "#FFEAA7",
            CostCategory::Maintenance => "#DDA0DD",
            CostCategory::Utilities => "#98D8C8",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            CostCategory::Rent => keys::COST_RENT,
            CostCategory::PlatformFees => keys::COST_PLATFORM_FEES,
            CostCategory::Cleaning => keys::COST_CLEANING,
            CostCategory::ManagementFee => keys::COST_MANAGEMENT_FEE,
            CostCategory::Tax => keys::COST_TAX,
            CostCategory::Insurance => keys::COST_INSURANCE,
            CostCategory::Maintenance => keys::COST_MAINTENANCE,
            CostCategory::Utilities => keys::COST_UTILITIES,
        }
    }
}

/// 연간 비용 구성 항목 (도넛 차트용).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownItem {
    pub category: CostCategory,
    /// 연간 금액 [원]
    pub value: f64,
    pub color: &'static str,
}

/// 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_investment: f64,
    pub security_deposit: f64,
    /// 보증금 제외 투자금
    pub investment_ex_deposit: f64,
    pub annual_gross_revenue: f64,
    pub annual_total_expenses: f64,
    pub annual_net_profit: f64,
    /// 연 순이익 / 12 (비운영 월 포함 평균)
    pub monthly_net_profit: f64,
    /// 총수익률 [%]
    pub gross_yield: f64,
    /// 순수익률 [%]
    pub net_yield: f64,
    /// 투자금 회수기간 [개월]. 순이익이 0 이하면 무한대.
    pub payback_period_months: f64,
    pub gross_yield_ex_deposit: f64,
    pub net_yield_ex_deposit: f64,
    pub payback_period_months_ex_deposit: f64,
    /// 항상 12개
    pub monthly_breakdown: Vec<MonthlyBreakdown>,
    /// 0원 항목은 빠진다.
    pub cost_breakdown: Vec<CostBreakdownItem>,
}
