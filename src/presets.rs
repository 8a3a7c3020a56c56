//! 기본 입력값과 프리셋.

use crate::i18n::keys;
use crate::input::{
    CalculatorInput, InitialInvestment, ManagementPlatform, OperatingCosts, PlatformFees,
    RentalType, RevenueInput,
};

/// 기본 입력(에어비앤비). 공유 링크는 이 값과 다른 필드만 싣는다.
pub const DEFAULT_INPUT: CalculatorInput = CalculatorInput {
    rental_type: RentalType::Airbnb,
    investment: InitialInvestment {
        security_deposit: 10_000_000.0,
        key_money: 0.0,
        interior_cost: 15_000_000.0,
    },
    revenue: RevenueInput {
        weekday_rate: 90_000.0,
        weekday_occupancy: 16.0,
        weekend_rate: 180_000.0,
        weekend_occupancy: 8.0,
        rate_per_unit: 350_000.0,
        expected_occupancy_per_month: 3.0,
        extra_guest_fee: 30_000.0,
        average_extra_guests: 2.0,
        extra_guest_frequency: 0.6,
        operating_months_per_year: 12.0,
    },
    platform_fees: PlatformFees {
        airbnb_fee_rate: 0.03,
        management_platform: ManagementPlatform::None,
        management_fee_rate: 0.0,
        short_term_fee_rate: 0.033,
    },
    operating_costs: OperatingCosts {
        monthly_rent: 800_000.0,
        monthly_management_fee: 100_000.0,
        cleaning_cost: 30_000.0,
        cleaning_frequency_per_month: 20.0,
        tax_rate: 0.0,
        monthly_insurance: 0.0,
        monthly_maintenance: 20_000.0,
        monthly_utilities: 100_000.0,
    },
};

/// 단기임대로 처음 전환할 때 적용하는 기본 입력.
pub const SHORT_TERM_DEFAULT_INPUT: CalculatorInput = CalculatorInput {
    rental_type: RentalType::ShortTerm,
    investment: InitialInvestment {
        security_deposit: 10_000_000.0,
        key_money: 0.0,
        interior_cost: 3_000_000.0,
    },
    revenue: RevenueInput {
        weekday_rate: 90_000.0,
        weekday_occupancy: 15.0,
        weekend_rate: 180_000.0,
        weekend_occupancy: 8.0,
        rate_per_unit: 390_000.0,
        expected_occupancy_per_month: 4.0,
        extra_guest_fee: 100_000.0,
        average_extra_guests: 2.0,
        extra_guest_frequency: 0.0,
        operating_months_per_year: 12.0,
    },
    platform_fees: DEFAULT_INPUT.platform_fees,
    operating_costs: OperatingCosts {
        monthly_rent: 700_000.0,
        monthly_management_fee: 0.0,
        cleaning_cost: 30_000.0,
        cleaning_frequency_per_month: 3.0,
        tax_rate: 0.0,
        monthly_insurance: 0.0,
        monthly_maintenance: 20_000.0,
        monthly_utilities: 150_000.0,
    },
};

/// 캐시된 입력이 없는 유형으로 전환할 때 쓰는 기본 입력을 돌려준다.
pub fn type_defaults(rental_type: RentalType) -> CalculatorInput {
    match rental_type {
        RentalType::Airbnb => DEFAULT_INPUT,
        RentalType::ShortTerm => SHORT_TERM_DEFAULT_INPUT,
    }
}

/// 대행 플랫폼 프리셋.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPreset {
    pub platform: ManagementPlatform,
    /// 번역 키
    pub label_key: &'static str,
    /// 기본 수수료율. `Custom`은 사용자가 입력한 값을 유지한다.
    pub rate: f64,
}

pub const PLATFORM_PRESETS: [PlatformPreset; 4] = [
    PlatformPreset {
        platform: ManagementPlatform::None,
        label_key: keys::PLATFORM_NONE,
        rate: 0.0,
    },
    PlatformPreset {
        platform: ManagementPlatform::MrMention,
        label_key: keys::PLATFORM_MR_MENTION,
        rate: 0.05,
    },
    PlatformPreset {
        platform: ManagementPlatform::Wehome,
        label_key: keys::PLATFORM_WEHOME,
        rate: 0.03,
    },
    PlatformPreset {
        platform: ManagementPlatform::Custom,
        label_key: keys::PLATFORM_CUSTOM,
        rate: 0.0,
    },
];

/// 플랫폼에 해당하는 프리셋을 찾는다.
pub fn platform_preset(platform: ManagementPlatform) -> &'static PlatformPreset {
    match platform {
        ManagementPlatform::None => &PLATFORM_PRESETS[0],
        ManagementPlatform::MrMention => &PLATFORM_PRESETS[1],
        ManagementPlatform::Wehome => &PLATFORM_PRESETS[2],
        ManagementPlatform::Custom => &PLATFORM_PRESETS[3],
    }
}
