//! 표시용 숫자 포맷.
//!
//! 계산 결과는 반올림하지 않은 값이므로 화면에 내보낼 때만 여기서 다듬는다.

use crate::i18n::{keys, Translator};

/// 천 단위 구분 기호를 넣어 금액을 표시한다. 소수는 최대 3자리까지 남긴다.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// 원 단위로 반올림한 금액에 통화 표기를 붙인다.
pub fn format_won(value: f64, tr: &Translator) -> String {
    format!("{}{}", format_currency(value.round()), tr.t(keys::CURRENCY_SUFFIX))
}

/// 백분율 값을 고정 소수 자리로 표시한다.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// 회수기간[개월]을 "N년 M개월" 형태로 표시한다. 무한대나 0 이하는 회수 불가다.
pub fn format_payback_period(months: f64, tr: &Translator) -> String {
    if !months.is_finite() || months <= 0.0 {
        return tr.t(keys::PAYBACK_NEVER).to_string();
    }
    let mut years = (months / 12.0).floor();
    let mut remaining = (months % 12.0).round();
    if remaining >= 12.0 {
        years += 1.0;
        remaining = 0.0;
    }
    let years = years.to_string();
    let remaining = remaining.to_string();
    if years == "0" {
        tr.tf(keys::PAYBACK_MONTHS, &[("months", &remaining)])
    } else if remaining == "0" {
        tr.tf(keys::PAYBACK_YEARS, &[("years", &years)])
    } else {
        tr.tf(
            keys::PAYBACK_YEARS_MONTHS,
            &[("years", &years), ("months", &remaining)],
        )
    }
}

/// 금액 입력 문자열에서 숫자만 골라 읽는다. 숫자가 없으면 0이다.
pub fn parse_currency_input(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(999.0), "999");
        assert_eq!(format_currency(1_000.0), "1,000");
        assert_eq!(format_currency(3_744_000.0), "3,744,000");
        assert_eq!(format_currency(-112_320.0), "-112,320");
        assert_eq!(format_currency(1_234.5), "1,234.5");
        assert_eq!(format_currency(1_234.56789), "1,234.568");
        assert_eq!(format_currency(-0.0001), "0");
        assert_eq!(format_currency(f64::INFINITY), "∞");
    }

    #[test]
    fn won_rounds_to_whole_units() {
        let tr = Translator::new("ko");
        assert_eq!(format_won(1_234.6, &tr), "1,235원");
    }

    #[test]
    fn percent_uses_fixed_decimals() {
        assert_eq!(format_percent(12.345, 1), "12.3%");
        assert_eq!(format_percent(0.0, 2), "0.00%");
    }

    #[test]
    fn payback_period_in_years_and_months() {
        let tr = Translator::new("ko");
        assert_eq!(format_payback_period(f64::INFINITY, &tr), "회수 불가");
        assert_eq!(format_payback_period(0.0, &tr), "회수 불가");
        assert_eq!(format_payback_period(7.4, &tr), "7개월");
        assert_eq!(format_payback_period(24.0, &tr), "2년");
        assert_eq!(format_payback_period(27.0, &tr), "2년 3개월");
        assert_eq!(format_payback_period(23.7, &tr), "2년");
    }

    #[test]
    fn payback_period_english() {
        let tr = Translator::new("en");
        assert_eq!(format_payback_period(15.0, &tr), "1 yr 3 mo");
        assert_eq!(format_payback_period(-3.0, &tr), "Never");
    }

    #[test]
    fn currency_input_keeps_digits_only() {
        assert_eq!(parse_currency_input("1,500,000원"), 1_500_000.0);
        assert_eq!(parse_currency_input(""), 0.0);
        assert_eq!(parse_currency_input("abc"), 0.0);
    }
}
