//! 계산 엔진 회귀 테스트.
use rental_yield::presets::SHORT_TERM_DEFAULT_INPUT;
use rental_yield::{calculate, CostCategory, RentalType, DEFAULT_INPUT};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6 * b.abs().max(1.0)
}

#[test]
fn airbnb_default_scenario() {
    let res = calculate(&DEFAULT_INPUT);
    let first = &res.monthly_breakdown[0];
    // 90,000×16 + 180,000×8 + (30,000×2×0.6)×24
    assert!(close(first.gross_revenue, 3_744_000.0), "gross={}", first.gross_revenue);
    assert!(close(first.platform_fee_amount, 112_320.0));
    assert!(close(first.cleaning_cost_total, 600_000.0));
    assert!(close(res.annual_gross_revenue, first.gross_revenue * 12.0));

    let monthly_expenses = 112_320.0 + 600_000.0 + 800_000.0 + 100_000.0 + 20_000.0 + 100_000.0;
    assert!(close(first.total_expenses, monthly_expenses));
    assert!(close(res.annual_total_expenses, monthly_expenses * 12.0));
    assert!(close(res.total_investment, 25_000_000.0));
    assert!(close(res.investment_ex_deposit, 15_000_000.0));
    assert!(close(res.gross_yield, res.annual_gross_revenue / 25_000_000.0 * 100.0));
    assert!(close(
        res.payback_period_months_ex_deposit,
        15_000_000.0 / res.annual_net_profit * 12.0
    ));
}

#[test]
fn short_term_extra_guest_term_vanishes_at_zero_frequency() {
    let mut input = DEFAULT_INPUT;
    input.rental_type = RentalType::ShortTerm;
    input.revenue.rate_per_unit = 390_000.0;
    input.revenue.expected_occupancy_per_month = 4.0;
    input.revenue.extra_guest_fee = 100_000.0;
    input.revenue.average_extra_guests = 2.0;
    input.revenue.extra_guest_frequency = 0.0;
    let res = calculate(&input);
    assert!(close(res.monthly_breakdown[0].gross_revenue, 1_560_000.0));
    assert!(close(res.monthly_breakdown[0].platform_fee_amount, 1_560_000.0 * 0.033));
}

#[test]
fn short_term_extra_guest_fee_is_per_lease() {
    let mut input = SHORT_TERM_DEFAULT_INPUT;
    input.revenue.extra_guest_frequency = 0.5;
    let res = calculate(&input);
    // (390,000 + 100,000×2×0.5) × 4
    assert!(close(res.monthly_breakdown[0].gross_revenue, 1_960_000.0));
}

#[test]
fn results_are_deterministic() {
    let a = calculate(&DEFAULT_INPUT);
    let b = calculate(&DEFAULT_INPUT);
    assert_eq!(a, b);
    assert_eq!(a.annual_net_profit.to_bits(), b.annual_net_profit.to_bits());
}

#[test]
fn structural_sums_hold() {
    let mut input = SHORT_TERM_DEFAULT_INPUT;
    input.investment.key_money = 7_000_000.0;
    input.operating_costs.tax_rate = 0.033;
    for input in [DEFAULT_INPUT, input] {
        let res = calculate(&input);
        let inv = input.investment;
        assert_eq!(
            res.total_investment,
            inv.security_deposit + inv.key_money + inv.interior_cost
        );
        assert_eq!(
            res.annual_net_profit,
            res.annual_gross_revenue - res.annual_total_expenses
        );
        assert_eq!(res.security_deposit, inv.security_deposit);
    }
}

#[test]
fn loss_making_input_never_pays_back() {
    let mut input = DEFAULT_INPUT;
    input.operating_costs.monthly_rent = 5_000_000.0;
    let res = calculate(&input);
    assert!(res.annual_net_profit < 0.0);
    assert_eq!(res.payback_period_months, f64::INFINITY);
    assert_eq!(res.payback_period_months_ex_deposit, f64::INFINITY);
    assert!(res.net_yield < 0.0);
}

#[test]
fn zero_investment_yields_zero() {
    let mut input = DEFAULT_INPUT;
    input.investment.security_deposit = 0.0;
    input.investment.interior_cost = 0.0;
    let res = calculate(&input);
    assert_eq!(res.gross_yield, 0.0);
    assert_eq!(res.net_yield, 0.0);
    assert_eq!(res.gross_yield_ex_deposit, 0.0);
    assert_eq!(res.payback_period_months, 0.0);
}

#[test]
fn deposit_only_investment_has_no_ex_deposit_yield() {
    let mut input = DEFAULT_INPUT;
    input.investment.interior_cost = 0.0;
    let res = calculate(&input);
    assert_eq!(res.investment_ex_deposit, 0.0);
    assert_eq!(res.gross_yield_ex_deposit, 0.0);
    assert_eq!(res.net_yield_ex_deposit, 0.0);
    assert!(res.gross_yield > 0.0);
}

#[test]
fn monthly_breakdown_has_twelve_entries_and_idle_months_are_zero() {
    for months in [0.0, 1.0, 6.0, 7.5, 12.0] {
        let mut input = DEFAULT_INPUT;
        input.revenue.operating_months_per_year = months;
        let res = calculate(&input);
        assert_eq!(res.monthly_breakdown.len(), 12);
        for (i, m) in res.monthly_breakdown.iter().enumerate() {
            assert_eq!(m.month as usize, i + 1);
            if (i as f64) >= months {
                assert_eq!(m.gross_revenue, 0.0);
                assert_eq!(m.rent, 0.0);
                assert_eq!(m.platform_fee_amount, 0.0);
                assert_eq!(m.cleaning_cost_total, 0.0);
                assert_eq!(m.management_fee, 0.0);
                assert_eq!(m.tax_amount, 0.0);
                assert_eq!(m.insurance, 0.0);
                assert_eq!(m.maintenance, 0.0);
                assert_eq!(m.utilities, 0.0);
                assert_eq!(m.total_expenses, 0.0);
                assert_eq!(m.net_profit, 0.0);
            } else {
                assert!(m.gross_revenue > 0.0);
            }
        }
    }
}

#[test]
fn monthly_net_profit_is_averaged_over_twelve_months() {
    let mut input = DEFAULT_INPUT;
    input.revenue.operating_months_per_year = 6.0;
    let res = calculate(&input);
    assert!(close(res.monthly_net_profit, res.annual_net_profit / 12.0));
    assert!(close(
        res.annual_net_profit,
        res.monthly_breakdown[0].net_profit * 6.0
    ));

    input.revenue.operating_months_per_year = 0.0;
    let res = calculate(&input);
    assert_eq!(res.monthly_net_profit, 0.0);
}

#[test]
fn cost_breakdown_keeps_order_and_drops_zero_categories() {
    let res = calculate(&DEFAULT_INPUT);
    let categories: Vec<_> = res.cost_breakdown.iter().map(|c| c.category).collect();
    // 세금(세율 0)과 보험(0원)은 빠진다.
    assert_eq!(
        categories,
        vec![
            CostCategory::Rent,
            CostCategory::PlatformFees,
            CostCategory::Cleaning,
            CostCategory::ManagementFee,
            CostCategory::Maintenance,
            CostCategory::Utilities,
        ]
    );
    let rent = &res.cost_breakdown[0];
    assert!(close(rent.value, 800_000.0 * 12.0));
    assert_eq!(rent.color, "#FF8C42");
}

#[test]
fn cost_breakdown_lists_all_eight_when_nonzero() {
    let mut input = DEFAULT_INPUT;
    input.operating_costs.tax_rate = 0.033;
    input.operating_costs.monthly_insurance = 30_000.0;
    let res = calculate(&input);
    let categories: Vec<_> = res.cost_breakdown.iter().map(|c| c.category).collect();
    assert_eq!(categories, CostCategory::ALL.to_vec());
    for item in &res.cost_breakdown {
        assert_eq!(item.color, item.category.color());
    }
}

#[test]
fn idle_year_has_empty_cost_breakdown() {
    let mut input = DEFAULT_INPUT;
    input.revenue.operating_months_per_year = 0.0;
    let res = calculate(&input);
    assert!(res.cost_breakdown.is_empty());
    assert_eq!(res.annual_gross_revenue, 0.0);
}

#[test]
fn negative_inputs_propagate() {
    let mut input = DEFAULT_INPUT;
    input.investment.key_money = -5_000_000.0;
    let res = calculate(&input);
    assert!(close(res.total_investment, 20_000_000.0));
}
