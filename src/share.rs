//! 공유 링크 코덱.
//!
//! `CalculatorInput`을 짧은 키의 쿼리 문자열로 바꾸고 되돌린다. 기본값과 같은
//! 필드는 싣지 않으므로 기본 입력은 빈 문자열이 된다. 디코딩은 실패하지 않으며
//! 없거나 읽을 수 없는 필드는 기본값으로 채운다.
//!
//! 키와 enum 코드는 이미 공유된 링크와의 호환 계약이다. 바꾸면 기존 링크가 깨진다.

use std::collections::HashMap;

use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use crate::input::{CalculatorInput, ManagementPlatform, RentalType};
use crate::presets::DEFAULT_INPUT;

/// 필드 값의 인코딩 방식.
#[derive(Clone, Copy)]
enum FieldKind {
    Number {
        get: fn(&CalculatorInput) -> f64,
        set: fn(&mut CalculatorInput, f64),
    },
    RentalType,
    Platform,
}

/// 쿼리 키 하나와 그 키가 가리키는 입력 필드.
#[derive(Clone, Copy)]
struct ShareField {
    key: &'static str,
    kind: FieldKind,
}

macro_rules! number_field {
    ($key:literal, $section:ident . $field:ident) => {
        ShareField {
            key: $key,
            kind: FieldKind::Number {
                get: |input| input.$section.$field,
                set: |input, v| input.$section.$field = v,
            },
        }
    };
}

/// 모든 잎 필드의 키 표. 인코딩 순서도 이 순서를 따른다.
static SHARE_FIELDS: [ShareField; 26] = [
    ShareField {
        key: "t",
        kind: FieldKind::RentalType,
    },
    number_field!("sd", investment.security_deposit),
    number_field!("km", investment.key_money),
    number_field!("ic", investment.interior_cost),
    number_field!("wr", revenue.weekday_rate),
    number_field!("wo", revenue.weekday_occupancy),
    number_field!("er", revenue.weekend_rate),
    number_field!("eo", revenue.weekend_occupancy),
    number_field!("ru", revenue.rate_per_unit),
    number_field!("em", revenue.expected_occupancy_per_month),
    number_field!("gf", revenue.extra_guest_fee),
    number_field!("ag", revenue.average_extra_guests),
    number_field!("gq", revenue.extra_guest_frequency),
    number_field!("om", revenue.operating_months_per_year),
    number_field!("af", platform_fees.airbnb_fee_rate),
    ShareField {
        key: "mp",
        kind: FieldKind::Platform,
    },
    number_field!("mf", platform_fees.management_fee_rate),
    number_field!("sf", platform_fees.short_term_fee_rate),
    number_field!("mr", operating_costs.monthly_rent),
    number_field!("mm", operating_costs.monthly_management_fee),
    number_field!("cc", operating_costs.cleaning_cost),
    number_field!("cf", operating_costs.cleaning_frequency_per_month),
    number_field!("tr", operating_costs.tax_rate),
    number_field!("mi", operating_costs.monthly_insurance),
    number_field!("mt", operating_costs.monthly_maintenance),
    number_field!("mu", operating_costs.monthly_utilities),
];

const RENTAL_TYPE_CODES: [(RentalType, &str); 2] =
    [(RentalType::Airbnb, "a"), (RentalType::ShortTerm, "s")];

const PLATFORM_CODES: [(ManagementPlatform, &str); 4] = [
    (ManagementPlatform::None, "n"),
    (ManagementPlatform::MrMention, "m"),
    (ManagementPlatform::Wehome, "w"),
    (ManagementPlatform::Custom, "c"),
];

fn short_code<T: PartialEq + Copy>(table: &[(T, &'static str)], value: T) -> &'static str {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, code)| *code)
        .unwrap_or_default()
}

fn from_short_code<T: Copy>(table: &[(T, &'static str)], code: &str) -> Option<T> {
    table.iter().find(|(_, c)| *c == code).map(|(v, _)| *v)
}

impl ShareField {
    fn same(&self, a: &CalculatorInput, b: &CalculatorInput) -> bool {
        match self.kind {
            FieldKind::Number { get, .. } => get(a) == get(b),
            FieldKind::RentalType => a.rental_type == b.rental_type,
            FieldKind::Platform => {
                a.platform_fees.management_platform == b.platform_fees.management_platform
            }
        }
    }

    fn encode(&self, input: &CalculatorInput) -> String {
        match self.kind {
            FieldKind::Number { get, .. } => get(input).to_string(),
            FieldKind::RentalType => short_code(&RENTAL_TYPE_CODES, input.rental_type).to_string(),
            FieldKind::Platform => {
                short_code(&PLATFORM_CODES, input.platform_fees.management_platform).to_string()
            }
        }
    }

    /// 원시 값을 입력에 반영한다. 읽을 수 없으면 입력을 건드리지 않고 false를 돌려준다.
    fn apply(&self, input: &mut CalculatorInput, raw: &str) -> bool {
        match self.kind {
            FieldKind::Number { set, .. } => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    set(input, v);
                    true
                }
                _ => false,
            },
            FieldKind::RentalType => match from_short_code(&RENTAL_TYPE_CODES, raw) {
                Some(t) => {
                    input.rental_type = t;
                    true
                }
                None => false,
            },
            FieldKind::Platform => match from_short_code(&PLATFORM_CODES, raw) {
                Some(p) => {
                    input.platform_fees.management_platform = p;
                    true
                }
                None => false,
            },
        }
    }
}

/// `defaults`와 다른 필드만 담은 쿼리 문자열을 만든다(`?` 없음).
pub fn encode_with(input: &CalculatorInput, defaults: &CalculatorInput) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    for field in SHARE_FIELDS.iter().filter(|f| !f.same(input, defaults)) {
        out.append_pair(field.key, &field.encode(input));
    }
    out.finish()
}

/// 쿼리 문자열을 입력으로 되돌린다.
///
/// 파라미터가 하나도 없으면 `None`("복원할 것 없음")을 돌려준다. 그 외에는
/// 빠졌거나 읽을 수 없는 필드를 `defaults` 값으로 채운 입력을 돌려준다.
/// 모르는 키는 무시한다. 같은 키가 여러 번 나오면 첫 번째 값을 쓴다.
pub fn decode_with(query: &str, defaults: &CalculatorInput) -> Option<CalculatorInput> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = HashMap::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(k).or_insert(v);
    }
    if params.is_empty() {
        return None;
    }

    let mut input = *defaults;
    for field in &SHARE_FIELDS {
        if let Some(raw) = params.get(field.key) {
            if !field.apply(&mut input, raw) {
                warn!(key = field.key, value = %raw, "공유 링크 값을 읽을 수 없어 기본값을 사용합니다");
            }
        }
    }
    debug!(params = params.len(), "공유 링크 복원");
    Some(input)
}

/// 기본 입력 대비 차이만 담은 쿼리 문자열을 만든다.
pub fn encode(input: &CalculatorInput) -> String {
    encode_with(input, &DEFAULT_INPUT)
}

/// 기본 입력을 기준으로 쿼리 문자열을 디코딩한다.
pub fn decode(query: &str) -> Option<CalculatorInput> {
    decode_with(query, &DEFAULT_INPUT)
}

/// `base`의 쿼리를 입력으로 교체한 공유 URL을 만든다. 기본 입력이면 쿼리를 비운다.
pub fn share_url(base: &Url, input: &CalculatorInput) -> Url {
    let mut url = base.clone();
    let query = encode(input);
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }
    url
}

/// URL의 쿼리에서 입력을 복원한다.
pub fn decode_url(url: &Url) -> Option<CalculatorInput> {
    decode(url.query().unwrap_or_default())
}

/// 키 표에 등록된 모든 쿼리 키.
pub fn share_keys() -> impl Iterator<Item = &'static str> {
    SHARE_FIELDS.iter().map(|f| f.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_short_and_unique() {
        let keys: Vec<_> = share_keys().collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert!(keys.iter().all(|k| (1..=2).contains(&k.len())));
    }

    #[test]
    fn enum_codes_roundtrip() {
        for t in RentalType::ALL {
            let code = short_code(&RENTAL_TYPE_CODES, t);
            assert_eq!(code.len(), 1);
            assert_eq!(from_short_code(&RENTAL_TYPE_CODES, code), Some(t));
        }
        for p in ManagementPlatform::ALL {
            let code = short_code(&PLATFORM_CODES, p);
            assert_eq!(code.len(), 1);
            assert_eq!(from_short_code(&PLATFORM_CODES, code), Some(p));
        }
    }

    #[test]
    fn every_number_field_is_wired_to_its_own_slot() {
        // 모든 숫자 필드에 서로 다른 값을 넣고 get 으로 다시 읽는다.
        let mut input = DEFAULT_INPUT;
        for (i, field) in SHARE_FIELDS.iter().enumerate() {
            if let FieldKind::Number { set, .. } = field.kind {
                set(&mut input, 1_000.0 + i as f64);
            }
        }
        for (i, field) in SHARE_FIELDS.iter().enumerate() {
            if let FieldKind::Number { get, .. } = field.kind {
                assert_eq!(get(&input), 1_000.0 + i as f64, "key {}", field.key);
            }
        }
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        let decoded = decode("?t=s").unwrap();
        assert_eq!(decoded.rental_type, RentalType::ShortTerm);
    }
}
