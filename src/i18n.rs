use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const CURRENCY_SUFFIX: &str = "general.currency_suffix";

    pub const RENTAL_AIRBNB: &str = "rental_type.airbnb";
    pub const RENTAL_SHORT_TERM: &str = "rental_type.short_term";

    pub const PLATFORM_NONE: &str = "platform.none";
    pub const PLATFORM_MR_MENTION: &str = "platform.mr_mention";
    pub const PLATFORM_WEHOME: &str = "platform.wehome";
    pub const PLATFORM_CUSTOM: &str = "platform.custom";

    pub const COST_RENT: &str = "cost.rent";
    pub const COST_PLATFORM_FEES: &str = "cost.platform_fees";
    pub const COST_CLEANING: &str = "cost.cleaning";
    pub const COST_MANAGEMENT_FEE: &str = "cost.management_fee";
    pub const COST_TAX: &str = "cost.tax";
    pub const COST_INSURANCE: &str = "cost.insurance";
    pub const COST_MAINTENANCE: &str = "cost.maintenance";
    pub const COST_UTILITIES: &str = "cost.utilities";

    pub const REVENUE_WEEKDAY: &str = "revenue.weekday";
    pub const REVENUE_WEEKEND: &str = "revenue.weekend";
    pub const REVENUE_SHORT_TERM: &str = "revenue.short_term";
    pub const REVENUE_EXTRA_GUESTS: &str = "revenue.extra_guests";

    pub const PAYBACK_NEVER: &str = "payback.never";
    pub const PAYBACK_YEARS: &str = "payback.years";
    pub const PAYBACK_MONTHS: &str = "payback.months";
    pub const PAYBACK_YEARS_MONTHS: &str = "payback.years_months";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_RENTAL_TYPE: &str = "report.rental_type";
    pub const REPORT_TOTAL_INVESTMENT: &str = "report.total_investment";
    pub const REPORT_INVESTMENT_EX_DEPOSIT: &str = "report.investment_ex_deposit";
    pub const REPORT_ANNUAL_GROSS: &str = "report.annual_gross";
    pub const REPORT_ANNUAL_EXPENSES: &str = "report.annual_expenses";
    pub const REPORT_ANNUAL_NET: &str = "report.annual_net";
    pub const REPORT_MONTHLY_NET: &str = "report.monthly_net";
    pub const REPORT_WITH_DEPOSIT: &str = "report.with_deposit";
    pub const REPORT_EX_DEPOSIT: &str = "report.ex_deposit";
    pub const REPORT_GROSS_YIELD: &str = "report.gross_yield";
    pub const REPORT_NET_YIELD: &str = "report.net_yield";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_REVENUE_HEADING: &str = "report.revenue_heading";
    pub const REPORT_REVENUE_HEADING_ANNUAL: &str = "report.revenue_heading_annual";
    pub const REPORT_MONTHLY_HEADING: &str = "report.monthly_heading";
    pub const REPORT_COL_MONTH: &str = "report.col_month";
    pub const REPORT_COL_REVENUE: &str = "report.col_revenue";
    pub const REPORT_COL_EXPENSES: &str = "report.col_expenses";
    pub const REPORT_COL_NET: &str = "report.col_net";
    pub const REPORT_COST_HEADING: &str = "report.cost_heading";
    pub const REPORT_SHARE_LINK: &str = "report.share_link";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RENTAL_TYPE: &str = "main_menu.rental_type";
    pub const MAIN_MENU_INVESTMENT: &str = "main_menu.investment";
    pub const MAIN_MENU_REVENUE: &str = "main_menu.revenue";
    pub const MAIN_MENU_PLATFORM_FEES: &str = "main_menu.platform_fees";
    pub const MAIN_MENU_OPERATING_COSTS: &str = "main_menu.operating_costs";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_SHARE: &str = "main_menu.share";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const PROMPT_RENTAL_TYPE: &str = "prompt.rental_type";
    pub const PROMPT_PLATFORM: &str = "prompt.platform";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FIELD_SECURITY_DEPOSIT: &str = "field.security_deposit";
    pub const FIELD_KEY_MONEY: &str = "field.key_money";
    pub const FIELD_INTERIOR_COST: &str = "field.interior_cost";
    pub const FIELD_WEEKDAY_RATE: &str = "field.weekday_rate";
    pub const FIELD_WEEKDAY_OCCUPANCY: &str = "field.weekday_occupancy";
    pub const FIELD_WEEKEND_RATE: &str = "field.weekend_rate";
    pub const FIELD_WEEKEND_OCCUPANCY: &str = "field.weekend_occupancy";
    pub const FIELD_RATE_PER_UNIT: &str = "field.rate_per_unit";
    pub const FIELD_EXPECTED_OCCUPANCY: &str = "field.expected_occupancy";
    pub const FIELD_EXTRA_GUEST_FEE_DAY: &str = "field.extra_guest_fee_day";
    pub const FIELD_EXTRA_GUEST_FEE_WEEK: &str = "field.extra_guest_fee_week";
    pub const FIELD_AVERAGE_EXTRA_GUESTS: &str = "field.average_extra_guests";
    pub const FIELD_EXTRA_GUEST_FREQUENCY: &str = "field.extra_guest_frequency";
    pub const FIELD_OPERATING_MONTHS: &str = "field.operating_months";
    pub const FIELD_AIRBNB_FEE_RATE: &str = "field.airbnb_fee_rate";
    pub const FIELD_MANAGEMENT_FEE_RATE: &str = "field.management_fee_rate";
    pub const FIELD_SHORT_TERM_FEE_RATE: &str = "field.short_term_fee_rate";
    pub const FIELD_MONTHLY_RENT: &str = "field.monthly_rent";
    pub const FIELD_MONTHLY_MANAGEMENT_FEE: &str = "field.monthly_management_fee";
    pub const FIELD_CLEANING_COST: &str = "field.cleaning_cost";
    pub const FIELD_CLEANING_FREQUENCY: &str = "field.cleaning_frequency";
    pub const FIELD_TAX_RATE: &str = "field.tax_rate";
    pub const FIELD_MONTHLY_INSURANCE: &str = "field.monthly_insurance";
    pub const FIELD_MONTHLY_MAINTENANCE: &str = "field.monthly_maintenance";
    pub const FIELD_MONTHLY_UTILITIES: &str = "field.monthly_utilities";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("ko")
    }
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if pack_dir.is_some() && overrides.is_none() {
            warn!(lang = lang_code, "언어팩을 찾지 못해 내장 문자열을 사용합니다");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        debug!(path = %path.display(), "언어팩 로드");
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        CURRENCY_SUFFIX => "원",
        RENTAL_AIRBNB => "에어비앤비",
        RENTAL_SHORT_TERM => "단기임대",
        PLATFORM_NONE => "직접 운영",
        PLATFORM_MR_MENTION => "미스터멘션",
        PLATFORM_WEHOME => "위홈",
        PLATFORM_CUSTOM => "직접 입력",
        COST_RENT => "월세",
        COST_PLATFORM_FEES => "플랫폼 수수료",
        COST_CLEANING => "청소비",
        COST_MANAGEMENT_FEE => "관리비",
        COST_TAX => "세금",
        COST_INSURANCE => "보험",
        COST_MAINTENANCE => "수선유지비",
        COST_UTILITIES => "공과금",
        REVENUE_WEEKDAY => "평일 숙박",
        REVENUE_WEEKEND => "주말 숙박",
        REVENUE_SHORT_TERM => "단기임대",
        REVENUE_EXTRA_GUESTS => "인원 추가",
        PAYBACK_NEVER => "회수 불가",
        PAYBACK_YEARS => "{years}년",
        PAYBACK_MONTHS => "{months}개월",
        PAYBACK_YEARS_MONTHS => "{years}년 {months}개월",
        REPORT_TITLE => "\n=== 수익률 계산 결과 ===",
        REPORT_RENTAL_TYPE => "임대 유형",
        REPORT_TOTAL_INVESTMENT => "총 투자금",
        REPORT_INVESTMENT_EX_DEPOSIT => "보증금 제외 투자금",
        REPORT_ANNUAL_GROSS => "연 총수익",
        REPORT_ANNUAL_EXPENSES => "연 총비용",
        REPORT_ANNUAL_NET => "연 순이익",
        REPORT_MONTHLY_NET => "월 평균 순이익",
        REPORT_WITH_DEPOSIT => "[보증금 포함]",
        REPORT_EX_DEPOSIT => "[보증금 제외]",
        REPORT_GROSS_YIELD => "총수익률",
        REPORT_NET_YIELD => "순수익률",
        REPORT_PAYBACK => "투자금 회수기간",
        REPORT_REVENUE_HEADING => "\n-- 월 수익 구성 --",
        REPORT_REVENUE_HEADING_ANNUAL => "\n-- 연 수익 구성 --",
        REPORT_MONTHLY_HEADING => "\n-- 월별 분석 --",
        REPORT_COL_MONTH => "월",
        REPORT_COL_REVENUE => "수익",
        REPORT_COL_EXPENSES => "비용",
        REPORT_COL_NET => "순이익",
        REPORT_COST_HEADING => "\n-- 연간 비용 구성 --",
        REPORT_SHARE_LINK => "공유 링크",
        MAIN_MENU_TITLE => "\n=== 단기임대 수익률 계산기 ===",
        MAIN_MENU_RENTAL_TYPE => "1) 임대 유형 전환",
        MAIN_MENU_INVESTMENT => "2) 초기 투자비용",
        MAIN_MENU_REVENUE => "3) 수익 설정",
        MAIN_MENU_PLATFORM_FEES => "4) 플랫폼 수수료",
        MAIN_MENU_OPERATING_COSTS => "5) 월 운영비용",
        MAIN_MENU_RESULTS => "6) 결과 보기",
        MAIN_MENU_SHARE => "7) 공유 링크",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_KEEP_HINT => "(엔터를 누르면 현재값 유지, 비율은 % 단위로 입력)",
        PROMPT_RENTAL_TYPE => "임대 유형 (1=에어비앤비, 2=단기임대): ",
        PROMPT_PLATFORM => "대행 플랫폼 (1=직접 운영, 2=미스터멘션 5%, 3=위홈 3%, 4=직접 입력): ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        FIELD_SECURITY_DEPOSIT => "보증금 [원]",
        FIELD_KEY_MONEY => "권리금 [원]",
        FIELD_INTERIOR_COST => "인테리어비 [원]",
        FIELD_WEEKDAY_RATE => "평일 1일 요금 [원]",
        FIELD_WEEKDAY_OCCUPANCY => "월 평일 입실일수 [일]",
        FIELD_WEEKEND_RATE => "주말 1일 요금 [원]",
        FIELD_WEEKEND_OCCUPANCY => "월 주말 입실일수 [일]",
        FIELD_RATE_PER_UNIT => "7일 요금 [원]",
        FIELD_EXPECTED_OCCUPANCY => "월 입실 건수 [건]",
        FIELD_EXTRA_GUEST_FEE_DAY => "인당 추가 요금 (1일) [원]",
        FIELD_EXTRA_GUEST_FEE_WEEK => "인당 추가 요금 (1주) [원]",
        FIELD_AVERAGE_EXTRA_GUESTS => "평균 추가 인원 [명]",
        FIELD_EXTRA_GUEST_FREQUENCY => "인원 추가 발생 비율 [%]",
        FIELD_OPERATING_MONTHS => "연간 운영 개월수 [개월]",
        FIELD_AIRBNB_FEE_RATE => "에어비앤비 수수료 [%]",
        FIELD_MANAGEMENT_FEE_RATE => "대행 수수료율 [%]",
        FIELD_SHORT_TERM_FEE_RATE => "계약 수수료 [%]",
        FIELD_MONTHLY_RENT => "월세 [원]",
        FIELD_MONTHLY_MANAGEMENT_FEE => "월 관리비 [원]",
        FIELD_CLEANING_COST => "청소비 (1회) [원]",
        FIELD_CLEANING_FREQUENCY => "월 청소 횟수 [회]",
        FIELD_TAX_RATE => "세율 [%]",
        FIELD_MONTHLY_INSURANCE => "월 보험료 [원]",
        FIELD_MONTHLY_MAINTENANCE => "월 수선유지비 [원]",
        FIELD_MONTHLY_UTILITIES => "월 공과금 [원]",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        CURRENCY_SUFFIX => " KRW",
        RENTAL_AIRBNB => "Airbnb",
        RENTAL_SHORT_TERM => "Short-term lease",
        PLATFORM_NONE => "Self-managed",
        PLATFORM_MR_MENTION => "Mr. Mention",
        PLATFORM_WEHOME => "Wehome",
        PLATFORM_CUSTOM => "Custom",
        COST_RENT => "Rent",
        COST_PLATFORM_FEES => "Platform fees",
        COST_CLEANING => "Cleaning",
        COST_MANAGEMENT_FEE => "Management fee",
        COST_TAX => "Tax",
        COST_INSURANCE => "Insurance",
        COST_MAINTENANCE => "Maintenance",
        COST_UTILITIES => "Utilities",
        REVENUE_WEEKDAY => "Weekday stays",
        REVENUE_WEEKEND => "Weekend stays",
        REVENUE_SHORT_TERM => "Short-term leases",
        REVENUE_EXTRA_GUESTS => "Extra guests",
        PAYBACK_NEVER => "Never",
        PAYBACK_YEARS => "{years} yr",
        PAYBACK_MONTHS => "{months} mo",
        PAYBACK_YEARS_MONTHS => "{years} yr {months} mo",
        REPORT_TITLE => "\n=== Yield Results ===",
        REPORT_RENTAL_TYPE => "Rental type",
        REPORT_TOTAL_INVESTMENT => "Total investment",
        REPORT_INVESTMENT_EX_DEPOSIT => "Investment excl. deposit",
        REPORT_ANNUAL_GROSS => "Annual gross revenue",
        REPORT_ANNUAL_EXPENSES => "Annual expenses",
        REPORT_ANNUAL_NET => "Annual net profit",
        REPORT_MONTHLY_NET => "Average monthly net profit",
        REPORT_WITH_DEPOSIT => "[Including deposit]",
        REPORT_EX_DEPOSIT => "[Excluding deposit]",
        REPORT_GROSS_YIELD => "Gross yield",
        REPORT_NET_YIELD => "Net yield",
        REPORT_PAYBACK => "Payback period",
        REPORT_REVENUE_HEADING => "\n-- Monthly revenue --",
        REPORT_REVENUE_HEADING_ANNUAL => "\n-- Annual revenue --",
        REPORT_MONTHLY_HEADING => "\n-- Monthly breakdown --",
        REPORT_COL_MONTH => "Month",
        REPORT_COL_REVENUE => "Revenue",
        REPORT_COL_EXPENSES => "Expenses",
        REPORT_COL_NET => "Net",
        REPORT_COST_HEADING => "\n-- Annual cost breakdown --",
        REPORT_SHARE_LINK => "Share link",
        MAIN_MENU_TITLE => "\n=== Short-term Rental Yield Calculator ===",
        MAIN_MENU_RENTAL_TYPE => "1) Switch rental type",
        MAIN_MENU_INVESTMENT => "2) Initial investment",
        MAIN_MENU_REVENUE => "3) Revenue",
        MAIN_MENU_PLATFORM_FEES => "4) Platform fees",
        MAIN_MENU_OPERATING_COSTS => "5) Operating costs",
        MAIN_MENU_RESULTS => "6) Show results",
        MAIN_MENU_SHARE => "7) Share link",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_KEEP_HINT => "(press Enter to keep the current value; rates are in %)",
        PROMPT_RENTAL_TYPE => "Rental type (1=Airbnb, 2=Short-term): ",
        PROMPT_PLATFORM => "Platform (1=Self, 2=Mr. Mention 5%, 3=Wehome 3%, 4=Custom): ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FIELD_SECURITY_DEPOSIT => "Security deposit [KRW]",
        FIELD_KEY_MONEY => "Key money [KRW]",
        FIELD_INTERIOR_COST => "Interior cost [KRW]",
        FIELD_WEEKDAY_RATE => "Weekday nightly rate [KRW]",
        FIELD_WEEKDAY_OCCUPANCY => "Weekday nights booked per month",
        FIELD_WEEKEND_RATE => "Weekend nightly rate [KRW]",
        FIELD_WEEKEND_OCCUPANCY => "Weekend nights booked per month",
        FIELD_RATE_PER_UNIT => "7-day rate [KRW]",
        FIELD_EXPECTED_OCCUPANCY => "Leases per month",
        FIELD_EXTRA_GUEST_FEE_DAY => "Extra guest fee per night [KRW]",
        FIELD_EXTRA_GUEST_FEE_WEEK => "Extra guest fee per week [KRW]",
        FIELD_AVERAGE_EXTRA_GUESTS => "Average extra guests",
        FIELD_EXTRA_GUEST_FREQUENCY => "Extra guest frequency [%]",
        FIELD_OPERATING_MONTHS => "Operating months per year",
        FIELD_AIRBNB_FEE_RATE => "Airbnb host fee [%]",
        FIELD_MANAGEMENT_FEE_RATE => "Management fee rate [%]",
        FIELD_SHORT_TERM_FEE_RATE => "Lease platform fee [%]",
        FIELD_MONTHLY_RENT => "Monthly rent [KRW]",
        FIELD_MONTHLY_MANAGEMENT_FEE => "Monthly management fee [KRW]",
        FIELD_CLEANING_COST => "Cleaning cost per visit [KRW]",
        FIELD_CLEANING_FREQUENCY => "Cleanings per month",
        FIELD_TAX_RATE => "Tax rate [%]",
        FIELD_MONTHLY_INSURANCE => "Monthly insurance [KRW]",
        FIELD_MONTHLY_MAINTENANCE => "Monthly maintenance [KRW]",
        FIELD_MONTHLY_UTILITIES => "Monthly utilities [KRW]",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_korean() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::COST_RENT), "월세");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en-US", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn placeholders_are_filled() {
        let tr = Translator::new("ko");
        let s = tr.tf(keys::PAYBACK_YEARS_MONTHS, &[("years", "2"), ("months", "3")]);
        assert_eq!(s, "2년 3개월");
    }

    #[test]
    fn nested_toml_pack_flattens_to_dotted_keys() {
        let map = parse_toml_to_map("[cost]\nrent = \"Loyer\"\n").unwrap();
        assert_eq!(map.get(keys::COST_RENT).map(String::as_str), Some("Loyer"));
    }

    #[test]
    fn pack_directory_overrides_built_in_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.toml"), "[cost]\nrent = \"Monthly rent\"\n").unwrap();
        let tr = Translator::new_with_pack("en-us", dir.path().to_str());
        assert_eq!(tr.t(keys::COST_RENT), "Monthly rent");
        assert_eq!(tr.t(keys::COST_TAX), "Tax");
    }
}
