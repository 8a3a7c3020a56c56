//! 계산 결과를 텍스트 보고서로 만든다.

use std::fmt;

use crate::format::{format_payback_period, format_percent, format_won};
use crate::i18n::{keys, Translator};
use crate::input::{CalculatorInput, RentalType};
use crate::result::CalculationResult;
use crate::revenue::{revenue_lines, BreakdownView};

pub fn rental_type_label(rental_type: RentalType, tr: &Translator) -> &str {
    match rental_type {
        RentalType::Airbnb => tr.t(keys::RENTAL_AIRBNB),
        RentalType::ShortTerm => tr.t(keys::RENTAL_SHORT_TERM),
    }
}

/// 요약 지표, 수익 구성, 월별 분석, 비용 구성을 담은 보고서.
/// 수익 구성은 `view`에 따라 월 기준 또는 연 기준으로 보여준다.
pub struct Report<'a> {
    pub input: &'a CalculatorInput,
    pub result: &'a CalculationResult,
    pub view: BreakdownView,
    pub tr: &'a Translator,
}

/// 보고서를 문자열로 만든다.
pub fn render_report(
    input: &CalculatorInput,
    result: &CalculationResult,
    view: BreakdownView,
    tr: &Translator,
) -> String {
    Report {
        input,
        result,
        view,
        tr,
    }
    .to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            input,
            result,
            view,
            tr,
        } = *self;
        let won = |v: f64| format_won(v, tr);

        writeln!(out, "{}", tr.t(keys::REPORT_TITLE))?;
        writeln!(
            out,
            "{}: {}",
            tr.t(keys::REPORT_RENTAL_TYPE),
            rental_type_label(input.rental_type, tr)
        )?;
        writeln!(out, "{}: {}", tr.t(keys::REPORT_TOTAL_INVESTMENT), won(result.total_investment))?;
        writeln!(
            out,
            "{}: {}",
            tr.t(keys::REPORT_INVESTMENT_EX_DEPOSIT),
            won(result.investment_ex_deposit)
        )?;
        writeln!(out, "{}: {}", tr.t(keys::REPORT_ANNUAL_GROSS), won(result.annual_gross_revenue))?;
        writeln!(
            out,
            "{}: {}",
            tr.t(keys::REPORT_ANNUAL_EXPENSES),
            won(result.annual_total_expenses)
        )?;
        writeln!(out, "{}: {}", tr.t(keys::REPORT_ANNUAL_NET), won(result.annual_net_profit))?;
        writeln!(out, "{}: {}", tr.t(keys::REPORT_MONTHLY_NET), won(result.monthly_net_profit))?;

        let variants = [
            (
                keys::REPORT_WITH_DEPOSIT,
                result.gross_yield,
                result.net_yield,
                result.payback_period_months,
            ),
            (
                keys::REPORT_EX_DEPOSIT,
                result.gross_yield_ex_deposit,
                result.net_yield_ex_deposit,
                result.payback_period_months_ex_deposit,
            ),
        ];
        for (heading, gross, net, payback) in variants {
            writeln!(out, "{}", tr.t(heading))?;
            writeln!(out, "  {}: {}", tr.t(keys::REPORT_GROSS_YIELD), format_percent(gross, 1))?;
            writeln!(out, "  {}: {}", tr.t(keys::REPORT_NET_YIELD), format_percent(net, 1))?;
            writeln!(
                out,
                "  {}: {}",
                tr.t(keys::REPORT_PAYBACK),
                format_payback_period(payback, tr)
            )?;
        }

        let revenue_heading = match view {
            BreakdownView::Monthly => keys::REPORT_REVENUE_HEADING,
            BreakdownView::Annual => keys::REPORT_REVENUE_HEADING_ANNUAL,
        };
        writeln!(out, "{}", tr.t(revenue_heading))?;
        for line in revenue_lines(input, view) {
            writeln!(
                out,
                "{:<16} {} × {} = {}",
                tr.t(line.label_key),
                won(line.unit_price),
                line.quantity,
                won(line.value)
            )?;
        }

        writeln!(out, "{}", tr.t(keys::REPORT_MONTHLY_HEADING))?;
        writeln!(
            out,
            "{:>5} {:>16} {:>16} {:>16}",
            tr.t(keys::REPORT_COL_MONTH),
            tr.t(keys::REPORT_COL_REVENUE),
            tr.t(keys::REPORT_COL_EXPENSES),
            tr.t(keys::REPORT_COL_NET)
        )?;
        for m in &result.monthly_breakdown {
            writeln!(
                out,
                "{:>5} {:>16} {:>16} {:>16}",
                m.month,
                won(m.gross_revenue),
                won(m.total_expenses),
                won(m.net_profit)
            )?;
        }

        writeln!(out, "{}", tr.t(keys::REPORT_COST_HEADING))?;
        let total: f64 = result.cost_breakdown.iter().map(|c| c.value).sum();
        for item in &result.cost_breakdown {
            let share = if total > 0.0 { item.value / total * 100.0 } else { 0.0 };
            writeln!(
                out,
                "{:<16} {:>16} ({})",
                tr.t(item.category.label_key()),
                won(item.value),
                format_percent(share, 1)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::presets::DEFAULT_INPUT;

    #[test]
    fn report_lists_metrics_and_costs() {
        let tr = Translator::new("ko");
        let result = calculate(&DEFAULT_INPUT);
        let text = render_report(&DEFAULT_INPUT, &result, BreakdownView::Monthly, &tr);
        assert!(text.contains("에어비앤비"));
        assert!(text.contains("25,000,000원"));
        assert!(text.contains("월세"));
        // 보험료가 0원이라 비용 구성에 나오지 않는다.
        assert!(!text.contains("보험"));
    }

    #[test]
    fn loss_making_input_reports_never() {
        let tr = Translator::new("en");
        let mut input = DEFAULT_INPUT;
        input.operating_costs.monthly_rent = 10_000_000.0;
        let result = calculate(&input);
        let text = render_report(&input, &result, BreakdownView::Monthly, &tr);
        assert!(text.contains("Payback period: Never"));
    }

    #[test]
    fn annual_view_scales_revenue_lines() {
        let tr = Translator::new("en");
        let mut input = DEFAULT_INPUT;
        input.revenue.operating_months_per_year = 6.0;
        let result = calculate(&input);
        let text = render_report(&input, &result, BreakdownView::Annual, &tr);
        assert!(text.contains("-- Annual revenue --"));
        // 평일 90,000 × 16 × 6개월
        assert!(text.contains("8,640,000 KRW"));
        assert!(!text.contains("-- Monthly revenue --"));
    }
}
