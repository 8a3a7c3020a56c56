//! 수익률 계산 엔진.
//!
//! 입력 하나를 받아 결과 하나를 돌려주는 순수 함수다. 실패하지 않으며
//! 0으로 나누는 경우는 모두 정해진 값(0 또는 무한대)으로 대체한다.
//! 음수 입력도 거르지 않고 그대로 계산에 반영한다.

use crate::input::{CalculatorInput, RentalType};
use crate::result::{CalculationResult, CostBreakdownItem, CostCategory, MonthlyBreakdown};

/// 운영 중인 한 달의 정상 상태 수치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFigures {
    pub gross_revenue: f64,
    /// 에어비앤비 + 대행 수수료, 또는 단기임대 플랫폼 수수료
    pub platform_fees: f64,
    pub cleaning: f64,
    pub tax: f64,
    pub rent: f64,
    pub management_fee: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub utilities: f64,
    pub total_expenses: f64,
}

impl MonthlyFigures {
    pub fn net_profit(&self) -> f64 {
        self.gross_revenue - self.total_expenses
    }

    fn category(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Rent => self.rent,
            CostCategory::PlatformFees => self.platform_fees,
            CostCategory::Cleaning => self.cleaning,
            CostCategory::ManagementFee => self.management_fee,
            CostCategory::Tax => self.tax,
            CostCategory::Insurance => self.insurance,
            CostCategory::Maintenance => self.maintenance,
            CostCategory::Utilities => self.utilities,
        }
    }
}

/// 인원 추가 기대 수익. 에어비앤비는 입실 1일, 단기임대는 계약 1건(7일) 기준이다.
pub fn extra_guest_unit(input: &CalculatorInput) -> f64 {
    let r = &input.revenue;
    r.extra_guest_fee * r.average_extra_guests * r.extra_guest_frequency
}

/// 월 총수익을 계산한다.
pub fn monthly_gross_revenue(input: &CalculatorInput) -> f64 {
    let r = &input.revenue;
    let extra = extra_guest_unit(input);
    match input.rental_type {
        RentalType::Airbnb => {
            let occupancy_days = r.weekday_occupancy + r.weekend_occupancy;
            r.weekday_rate * r.weekday_occupancy
                + r.weekend_rate * r.weekend_occupancy
                + extra * occupancy_days
        }
        RentalType::ShortTerm => (r.rate_per_unit + extra) * r.expected_occupancy_per_month,
    }
}

/// 운영 중인 한 달의 매출과 비용 항목을 계산한다.
pub fn monthly_figures(input: &CalculatorInput) -> MonthlyFigures {
    let fees = &input.platform_fees;
    let costs = &input.operating_costs;

    let gross_revenue = monthly_gross_revenue(input);
    let platform_fees = match input.rental_type {
        RentalType::Airbnb => gross_revenue * (fees.airbnb_fee_rate + fees.management_fee_rate),
        RentalType::ShortTerm => gross_revenue * fees.short_term_fee_rate,
    };
    let cleaning = costs.cleaning_cost * costs.cleaning_frequency_per_month;
    // 고정비는 과세표준에서 빼지 않는다.
    let tax = (gross_revenue - platform_fees) * costs.tax_rate;

    let fixed = costs.monthly_rent
        + costs.monthly_management_fee
        + costs.monthly_insurance
        + costs.monthly_maintenance
        + costs.monthly_utilities;

    MonthlyFigures {
        gross_revenue,
        platform_fees,
        cleaning,
        tax,
        rent: costs.monthly_rent,
        management_fee: costs.monthly_management_fee,
        insurance: costs.monthly_insurance,
        maintenance: costs.monthly_maintenance,
        utilities: costs.monthly_utilities,
        total_expenses: platform_fees + cleaning + tax + fixed,
    }
}

/// 수익률 지표 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Yields {
    gross: f64,
    net: f64,
    payback_months: f64,
}

fn yields(base: f64, annual_gross: f64, annual_net: f64) -> Yields {
    let (gross, net) = if base > 0.0 {
        (annual_gross / base * 100.0, annual_net / base * 100.0)
    } else {
        (0.0, 0.0)
    };
    let payback_months = if annual_net > 0.0 {
        base / annual_net * 12.0
    } else {
        f64::INFINITY
    };
    Yields {
        gross,
        net,
        payback_months,
    }
}

/// 입력으로부터 연간 지표, 월별 분석, 비용 구성을 모두 계산한다.
pub fn calculate(input: &CalculatorInput) -> CalculationResult {
    let inv = &input.investment;
    let total_investment = inv.security_deposit + inv.key_money + inv.interior_cost;
    let investment_ex_deposit = total_investment - inv.security_deposit;

    let month = monthly_figures(input);

    let operating_months = input.revenue.operating_months_per_year;
    let annual_gross_revenue = month.gross_revenue * operating_months;
    let annual_total_expenses = month.total_expenses * operating_months;
    let annual_net_profit = annual_gross_revenue - annual_total_expenses;
    // 비운영 월까지 포함한 평균이라 운영 개월수가 아니라 12로 나눈다.
    let monthly_net_profit = if operating_months > 0.0 {
        annual_net_profit / 12.0
    } else {
        0.0
    };

    let with_deposit = yields(total_investment, annual_gross_revenue, annual_net_profit);
    let ex_deposit = yields(investment_ex_deposit, annual_gross_revenue, annual_net_profit);

    let monthly_breakdown = (1..=12u8)
        .map(|m| {
            if f64::from(m - 1) < operating_months {
                MonthlyBreakdown {
                    month: m,
                    gross_revenue: month.gross_revenue,
                    rent: month.rent,
                    platform_fee_amount: month.platform_fees,
                    cleaning_cost_total: month.cleaning,
                    management_fee: month.management_fee,
                    tax_amount: month.tax,
                    insurance: month.insurance,
                    maintenance: month.maintenance,
                    utilities: month.utilities,
                    total_expenses: month.total_expenses,
                    net_profit: month.net_profit(),
                }
            } else {
                MonthlyBreakdown::idle(m)
            }
        })
        .collect();

    let cost_breakdown = CostCategory::ALL
        .iter()
        .map(|&category| CostBreakdownItem {
            category,
            value: month.category(category) * operating_months,
            color: category.color(),
        })
        .filter(|item| item.value > 0.0)
        .collect();

    CalculationResult {
        total_investment,
        security_deposit: inv.security_deposit,
        investment_ex_deposit,
        annual_gross_revenue,
        annual_total_expenses,
        annual_net_profit,
        monthly_net_profit,
        gross_yield: with_deposit.gross,
        net_yield: with_deposit.net,
        payback_period_months: with_deposit.payback_months,
        gross_yield_ex_deposit: ex_deposit.gross,
        net_yield_ex_deposit: ex_deposit.net,
        payback_period_months_ex_deposit: ex_deposit.payback_months,
        monthly_breakdown,
        cost_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::DEFAULT_INPUT;

    #[test]
    fn yields_are_zero_without_investment() {
        let y = yields(0.0, 1_000.0, 500.0);
        assert_eq!(y.gross, 0.0);
        assert_eq!(y.net, 0.0);
        assert_eq!(y.payback_months, 0.0);
    }

    #[test]
    fn payback_is_infinite_on_loss() {
        let y = yields(1_000.0, 100.0, -1.0);
        assert!(y.payback_months.is_infinite() && y.payback_months > 0.0);
        assert!((y.net - -0.1).abs() < 1e-12);
    }

    #[test]
    fn tax_base_excludes_fixed_costs() {
        let mut input = DEFAULT_INPUT;
        input.operating_costs.tax_rate = 0.1;
        let m = monthly_figures(&input);
        let expected = (m.gross_revenue - m.platform_fees) * 0.1;
        assert!((m.tax - expected).abs() < 1e-6);
    }

    #[test]
    fn management_fee_rate_adds_to_airbnb_fee() {
        let mut input = DEFAULT_INPUT;
        input.platform_fees.management_fee_rate = 0.05;
        let m = monthly_figures(&input);
        assert!((m.platform_fees - m.gross_revenue * 0.08).abs() < 1e-6);
    }

    #[test]
    fn short_term_ignores_airbnb_fee_rates() {
        let mut input = DEFAULT_INPUT;
        input.rental_type = RentalType::ShortTerm;
        input.platform_fees.management_fee_rate = 0.5;
        let m = monthly_figures(&input);
        assert!((m.platform_fees - m.gross_revenue * 0.033).abs() < 1e-6);
    }
}
