//! 수익 항목별 상세 (평일/주말/인원 추가 등).

use crate::calculator::extra_guest_unit;
use crate::i18n::keys;
use crate::input::{CalculatorInput, RentalType};

/// 상세 보기 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownView {
    Monthly,
    Annual,
}

/// 수익 항목 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueLine {
    /// 번역 키
    pub label_key: &'static str,
    /// 단가 [원]
    pub unit_price: f64,
    /// 월 수량 (입실일수 또는 계약 건수)
    pub quantity: f64,
    /// 기간 합계 [원]
    pub value: f64,
}

/// 연간 보기에서 곱하는 실제 운영 개월수(0~12).
pub fn operating_month_count(input: &CalculatorInput) -> f64 {
    input.revenue.operating_months_per_year.ceil().clamp(0.0, 12.0)
}

/// 임대 유형에 맞는 수익 항목을 나열한다. 인원 추가 항목은 금액이 있을 때만 넣는다.
pub fn revenue_lines(input: &CalculatorInput, view: BreakdownView) -> Vec<RevenueLine> {
    let r = &input.revenue;
    let multiplier = match view {
        BreakdownView::Monthly => 1.0,
        BreakdownView::Annual => operating_month_count(input),
    };
    let extra = extra_guest_unit(input);
    let line = |label_key: &'static str, unit_price: f64, quantity: f64| RevenueLine {
        label_key,
        unit_price,
        quantity,
        value: unit_price * quantity * multiplier,
    };

    let mut lines = Vec::with_capacity(3);
    match input.rental_type {
        RentalType::Airbnb => {
            lines.push(line(keys::REVENUE_WEEKDAY, r.weekday_rate, r.weekday_occupancy));
            lines.push(line(keys::REVENUE_WEEKEND, r.weekend_rate, r.weekend_occupancy));
            let days = r.weekday_occupancy + r.weekend_occupancy;
            if extra * days > 0.0 {
                lines.push(line(keys::REVENUE_EXTRA_GUESTS, extra, days));
            }
        }
        RentalType::ShortTerm => {
            lines.push(line(
                keys::REVENUE_SHORT_TERM,
                r.rate_per_unit,
                r.expected_occupancy_per_month,
            ));
            if extra > 0.0 {
                lines.push(line(
                    keys::REVENUE_EXTRA_GUESTS,
                    extra,
                    r.expected_occupancy_per_month,
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::monthly_gross_revenue;
    use crate::presets::{DEFAULT_INPUT, SHORT_TERM_DEFAULT_INPUT};

    #[test]
    fn airbnb_lines_sum_to_monthly_gross() {
        let lines = revenue_lines(&DEFAULT_INPUT, BreakdownView::Monthly);
        assert_eq!(lines.len(), 3);
        let sum: f64 = lines.iter().map(|l| l.value).sum();
        assert!((sum - monthly_gross_revenue(&DEFAULT_INPUT)).abs() < 1e-6);
    }

    #[test]
    fn short_term_without_extra_guests_has_single_line() {
        let lines = revenue_lines(&SHORT_TERM_DEFAULT_INPUT, BreakdownView::Annual);
        assert_eq!(lines.len(), 1);
        assert!((lines[0].value - 390_000.0 * 4.0 * 12.0).abs() < 1e-6);
    }

    #[test]
    fn annual_view_uses_operating_months() {
        let mut input = DEFAULT_INPUT;
        input.revenue.operating_months_per_year = 6.0;
        let monthly: f64 = revenue_lines(&input, BreakdownView::Monthly)
            .iter()
            .map(|l| l.value)
            .sum();
        let annual: f64 = revenue_lines(&input, BreakdownView::Annual)
            .iter()
            .map(|l| l.value)
            .sum();
        assert!((annual - monthly * 6.0).abs() < 1e-6);
    }
}
