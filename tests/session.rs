//! 세션 상태(유형 전환 캐시, 플랫폼 프리셋) 테스트.
use rental_yield::presets::SHORT_TERM_DEFAULT_INPUT;
use rental_yield::session::CalculatorSession;
use rental_yield::{calculate, ManagementPlatform, RentalType, DEFAULT_INPUT};

#[test]
fn first_switch_to_short_term_uses_its_defaults() {
    let mut session = CalculatorSession::default();
    session.set_rental_type(RentalType::ShortTerm);
    assert_eq!(*session.input(), SHORT_TERM_DEFAULT_INPUT);
}

#[test]
fn switching_back_restores_edits_of_each_type() {
    let mut session = CalculatorSession::default();
    session.update_operating_costs(|c| c.monthly_rent = 1_100_000.0);
    session.set_rental_type(RentalType::ShortTerm);
    session.update_revenue(|r| r.rate_per_unit = 420_000.0);

    session.set_rental_type(RentalType::Airbnb);
    assert_eq!(session.input().rental_type, RentalType::Airbnb);
    assert_eq!(session.input().operating_costs.monthly_rent, 1_100_000.0);

    session.set_rental_type(RentalType::ShortTerm);
    assert_eq!(session.input().rental_type, RentalType::ShortTerm);
    assert_eq!(session.input().revenue.rate_per_unit, 420_000.0);
    assert_eq!(session.input().operating_costs.monthly_rent, 700_000.0);
}

#[test]
fn session_from_query_restores_shared_input() {
    let mut input = SHORT_TERM_DEFAULT_INPUT;
    input.operating_costs.monthly_rent = 650_000.0;
    let query = rental_yield::share::encode(&input);

    let session = CalculatorSession::from_query(&query);
    assert_eq!(*session.input(), input);
    assert_eq!(session.share_query(), query);
    assert_eq!(session.result(), calculate(&input));
}

#[test]
fn empty_query_starts_from_default() {
    let session = CalculatorSession::from_query("");
    assert_eq!(*session.input(), DEFAULT_INPUT);
    assert_eq!(session.share_query(), "");
}

#[test]
fn platform_selection_applies_preset_rates() {
    let mut session = CalculatorSession::default();
    session.select_management_platform(ManagementPlatform::MrMention);
    assert_eq!(session.input().platform_fees.management_fee_rate, 0.05);
    session.select_management_platform(ManagementPlatform::Wehome);
    assert_eq!(session.input().platform_fees.management_fee_rate, 0.03);

    // 직접 입력은 현재 수수료율을 유지한다.
    session.select_management_platform(ManagementPlatform::Custom);
    assert_eq!(session.input().platform_fees.management_fee_rate, 0.03);
    session.update_platform_fees(|f| f.management_fee_rate = 0.08);

    session.select_management_platform(ManagementPlatform::None);
    assert_eq!(session.input().platform_fees.management_fee_rate, 0.0);
}

#[test]
fn operating_months_are_clamped_in_session() {
    let mut session = CalculatorSession::default();
    session.set_operating_months(15.0);
    assert_eq!(session.input().revenue.operating_months_per_year, 12.0);
    session.set_operating_months(0.0);
    assert_eq!(session.input().revenue.operating_months_per_year, 1.0);
    session.set_operating_months(6.5);
    assert_eq!(session.input().revenue.operating_months_per_year, 6.5);
}
