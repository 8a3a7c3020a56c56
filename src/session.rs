//! 화면 쪽이 들고 있는 계산기 상태.
//!
//! 계산 엔진과 공유 링크 코덱은 상태가 없다. 현재 입력과 임대 유형별 마지막
//! 입력 스냅샷은 여기서만 관리한다.

use std::collections::HashMap;

use tracing::debug;

use crate::calculator::calculate;
use crate::input::{
    CalculatorInput, InitialInvestment, ManagementPlatform, OperatingCosts, PlatformFees,
    RentalType, RevenueInput,
};
use crate::presets::{platform_preset, type_defaults, DEFAULT_INPUT};
use crate::result::CalculationResult;
use crate::share;

/// 임대 유형별 마지막 입력 캐시. 탭을 바꿔도 사용자 입력을 잃지 않게 한다.
#[derive(Debug, Clone, PartialEq)]
pub struct InputCache {
    snapshots: HashMap<RentalType, CalculatorInput>,
}

impl Default for InputCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCache {
    /// 에어비앤비 기본 입력 하나만 담은 캐시를 만든다.
    pub fn new() -> Self {
        let mut snapshots = HashMap::new();
        snapshots.insert(RentalType::Airbnb, DEFAULT_INPUT);
        Self { snapshots }
    }

    pub fn get(&self, rental_type: RentalType) -> Option<&CalculatorInput> {
        self.snapshots.get(&rental_type)
    }

    /// `current`를 자기 유형 칸에 저장하고 `target` 유형의 입력을 돌려준다.
    /// 캐시가 없으면 해당 유형의 기본 입력을 쓴다.
    pub fn switch(&mut self, current: &CalculatorInput, target: RentalType) -> CalculatorInput {
        self.snapshots.insert(current.rental_type, *current);
        match self.snapshots.get(&target) {
            Some(cached) => CalculatorInput {
                rental_type: target,
                ..*cached
            },
            None => type_defaults(target),
        }
    }
}

/// 현재 입력과 유형별 캐시를 묶은 계산기 세션.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    input: CalculatorInput,
    cache: InputCache,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl CalculatorSession {
    pub fn new(input: CalculatorInput) -> Self {
        Self {
            input,
            cache: InputCache::new(),
        }
    }

    /// 공유 링크 쿼리로 세션을 연다. 복원할 값이 없으면 기본 입력으로 시작한다.
    pub fn from_query(query: &str) -> Self {
        match share::decode(query) {
            Some(input) => {
                debug!(rental_type = ?input.rental_type, "공유 링크에서 입력 복원");
                Self::new(input)
            }
            None => Self::default(),
        }
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    /// 현재 입력으로 결과를 새로 계산한다. 캐시하지 않는다.
    pub fn result(&self) -> CalculationResult {
        calculate(&self.input)
    }

    /// 현재 입력의 공유 쿼리 문자열.
    pub fn share_query(&self) -> String {
        share::encode(&self.input)
    }

    /// 임대 유형을 바꾼다. 이전 유형 입력은 캐시에 남는다.
    pub fn set_rental_type(&mut self, rental_type: RentalType) {
        let from = self.input.rental_type;
        self.input = self.cache.switch(&self.input, rental_type);
        debug!(?from, to = ?rental_type, "임대 유형 전환");
    }

    pub fn update_investment(&mut self, f: impl FnOnce(&mut InitialInvestment)) {
        f(&mut self.input.investment);
    }

    pub fn update_revenue(&mut self, f: impl FnOnce(&mut RevenueInput)) {
        f(&mut self.input.revenue);
    }

    pub fn update_platform_fees(&mut self, f: impl FnOnce(&mut PlatformFees)) {
        f(&mut self.input.platform_fees);
    }

    pub fn update_operating_costs(&mut self, f: impl FnOnce(&mut OperatingCosts)) {
        f(&mut self.input.operating_costs);
    }

    /// 대행 플랫폼을 고른다. 직접 입력이 아니면 프리셋 수수료율로 덮어쓴다.
    pub fn select_management_platform(&mut self, platform: ManagementPlatform) {
        let fees = &mut self.input.platform_fees;
        fees.management_platform = platform;
        if platform != ManagementPlatform::Custom {
            fees.management_fee_rate = platform_preset(platform).rate;
        }
    }

    /// 연간 운영 개월수를 1~12로 제한해서 넣는다.
    pub fn set_operating_months(&mut self, months: f64) {
        self.input.revenue.operating_months_per_year = months.clamp(1.0, 12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_holds_only_airbnb_default() {
        let cache = InputCache::new();
        assert_eq!(cache.get(RentalType::Airbnb), Some(&DEFAULT_INPUT));
        assert_eq!(cache.get(RentalType::ShortTerm), None);
    }

    #[test]
    fn switching_to_same_type_keeps_input() {
        let mut session = CalculatorSession::default();
        session.update_investment(|inv| inv.key_money = 5_000_000.0);
        let before = *session.input();
        session.set_rental_type(RentalType::Airbnb);
        assert_eq!(session.input(), &before);
    }

    #[test]
    fn custom_platform_keeps_user_rate() {
        let mut session = CalculatorSession::default();
        session.update_platform_fees(|f| f.management_fee_rate = 0.07);
        session.select_management_platform(ManagementPlatform::Custom);
        assert_eq!(session.input().platform_fees.management_fee_rate, 0.07);
        session.select_management_platform(ManagementPlatform::MrMention);
        assert_eq!(session.input().platform_fees.management_fee_rate, 0.05);
    }

    #[test]
    fn operating_months_are_clamped() {
        let mut session = CalculatorSession::default();
        session.set_operating_months(0.0);
        assert_eq!(session.input().revenue.operating_months_per_year, 1.0);
        session.set_operating_months(20.0);
        assert_eq!(session.input().revenue.operating_months_per_year, 12.0);
    }
}
