use std::io::{self, BufRead, Write};

use url::Url;

use crate::app::AppError;
use crate::format::parse_currency_input;
use crate::i18n::{keys, Translator};
use crate::input::{ManagementPlatform, RentalType};
use crate::report::{self, rental_type_label};
use crate::revenue::BreakdownView;
use crate::session::CalculatorSession;
use crate::share;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RentalType,
    Investment,
    Revenue,
    PlatformFees,
    OperatingCosts,
    Results,
    Share,
    Exit,
}

/// 대화형 입출력. 표준 입출력 대신 버퍼를 넣어 테스트할 수 있다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// 값을 하나 읽는다. 빈 입력이나 입력 종료는 현재값을 유지하고,
    /// `parse`가 거부한 입력은 다시 묻는다.
    fn read_value_or(
        &mut self,
        tr: &Translator,
        label_key: &str,
        current: f64,
        parse: fn(&str) -> Option<f64>,
    ) -> Result<f64, AppError> {
        let prompt = format!("{} [{current}]: ", tr.t(label_key));
        loop {
            let Some(s) = self.read_line(&prompt)? else {
                return Ok(current);
            };
            if s.is_empty() {
                return Ok(current);
            }
            match parse(&s) {
                Some(v) => return Ok(v),
                None => self.say(tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    /// 개수나 비율처럼 소수와 음수를 허용하는 숫자를 읽는다.
    fn read_f64_or(
        &mut self,
        tr: &Translator,
        label_key: &str,
        current: f64,
    ) -> Result<f64, AppError> {
        self.read_value_or(tr, label_key, current, parse_plain_number)
    }

    /// 원 단위 금액을 읽는다. `1,500,000원`처럼 구분 기호와 단위가 섞여도 된다.
    fn read_won_or(
        &mut self,
        tr: &Translator,
        label_key: &str,
        current: f64,
    ) -> Result<f64, AppError> {
        self.read_value_or(tr, label_key, current, parse_won)
    }
}

fn parse_plain_number(s: &str) -> Option<f64> {
    s.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 숫자가 하나도 없으면 금액으로 보지 않는다.
fn parse_won(s: &str) -> Option<f64> {
    s.chars()
        .any(|c| c.is_ascii_digit())
        .then(|| parse_currency_input(s))
}

/// 화면에는 % 값으로 묻고 내부에는 소수 비율로 돌려준다.
fn read_percent_or<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    label_key: &str,
    current: f64,
) -> Result<f64, AppError> {
    let shown = current * 100.0;
    let percent = console.read_f64_or(tr, label_key, shown)?;
    // 그대로 두면 원래 비율을 돌려줘서 부동소수 왕복 오차를 피한다.
    if percent == shown {
        return Ok(current);
    }
    Ok(percent / 100.0)
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_RENTAL_TYPE,
        keys::MAIN_MENU_INVESTMENT,
        keys::MAIN_MENU_REVENUE,
        keys::MAIN_MENU_PLATFORM_FEES,
        keys::MAIN_MENU_OPERATING_COSTS,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_SHARE,
        keys::MAIN_MENU_EXIT,
    ] {
        console.say(tr.t(key))?;
    }
    loop {
        let Some(sel) = console.read_line(tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::RentalType),
            "2" => return Ok(MenuChoice::Investment),
            "3" => return Ok(MenuChoice::Revenue),
            "4" => return Ok(MenuChoice::PlatformFees),
            "5" => return Ok(MenuChoice::OperatingCosts),
            "6" => return Ok(MenuChoice::Results),
            "7" => return Ok(MenuChoice::Share),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 임대 유형 전환 메뉴를 처리한다.
pub fn handle_rental_type<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &mut CalculatorSession,
) -> Result<(), AppError> {
    let sel = console.read_line(tr.t(keys::PROMPT_RENTAL_TYPE))?;
    let target = match sel.as_deref() {
        Some("1") => RentalType::Airbnb,
        Some("2") => RentalType::ShortTerm,
        _ => {
            console.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
            return Ok(());
        }
    };
    session.set_rental_type(target);
    console.say(&format!(
        "{}: {}",
        tr.t(keys::REPORT_RENTAL_TYPE),
        rental_type_label(target, tr)
    ))?;
    Ok(())
}

/// 초기 투자비용 메뉴를 처리한다.
pub fn handle_investment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &mut CalculatorSession,
) -> Result<(), AppError> {
    console.say(tr.t(keys::PROMPT_KEEP_HINT))?;
    let mut inv = session.input().investment;
    inv.security_deposit =
        console.read_won_or(tr, keys::FIELD_SECURITY_DEPOSIT, inv.security_deposit)?;
    inv.key_money = console.read_won_or(tr, keys::FIELD_KEY_MONEY, inv.key_money)?;
    inv.interior_cost = console.read_won_or(tr, keys::FIELD_INTERIOR_COST, inv.interior_cost)?;
    session.update_investment(|i| *i = inv);
    Ok(())
}

/// 수익 설정 메뉴를 처리한다. 임대 유형에 맞는 항목만 묻는다.
pub fn handle_revenue<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &mut CalculatorSession,
) -> Result<(), AppError> {
    console.say(tr.t(keys::PROMPT_KEEP_HINT))?;
    let rental_type = session.input().rental_type;
    let mut rev = session.input().revenue;
    let fee_label = match rental_type {
        RentalType::Airbnb => {
            rev.weekday_rate = console.read_won_or(tr, keys::FIELD_WEEKDAY_RATE, rev.weekday_rate)?;
            rev.weekday_occupancy =
                console.read_f64_or(tr, keys::FIELD_WEEKDAY_OCCUPANCY, rev.weekday_occupancy)?;
            rev.weekend_rate = console.read_won_or(tr, keys::FIELD_WEEKEND_RATE, rev.weekend_rate)?;
            rev.weekend_occupancy =
                console.read_f64_or(tr, keys::FIELD_WEEKEND_OCCUPANCY, rev.weekend_occupancy)?;
            keys::FIELD_EXTRA_GUEST_FEE_DAY
        }
        RentalType::ShortTerm => {
            rev.rate_per_unit =
                console.read_won_or(tr, keys::FIELD_RATE_PER_UNIT, rev.rate_per_unit)?;
            rev.expected_occupancy_per_month = console.read_f64_or(
                tr,
                keys::FIELD_EXPECTED_OCCUPANCY,
                rev.expected_occupancy_per_month,
            )?;
            keys::FIELD_EXTRA_GUEST_FEE_WEEK
        }
    };
    rev.extra_guest_fee = console.read_won_or(tr, fee_label, rev.extra_guest_fee)?;
    rev.average_extra_guests =
        console.read_f64_or(tr, keys::FIELD_AVERAGE_EXTRA_GUESTS, rev.average_extra_guests)?;
    rev.extra_guest_frequency = read_percent_or(
        console,
        tr,
        keys::FIELD_EXTRA_GUEST_FREQUENCY,
        rev.extra_guest_frequency,
    )?;
    let months =
        console.read_f64_or(tr, keys::FIELD_OPERATING_MONTHS, rev.operating_months_per_year)?;
    session.update_revenue(|r| *r = rev);
    session.set_operating_months(months);
    Ok(())
}

/// 플랫폼 수수료 메뉴를 처리한다.
pub fn handle_platform_fees<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &mut CalculatorSession,
) -> Result<(), AppError> {
    console.say(tr.t(keys::PROMPT_KEEP_HINT))?;
    let fees = session.input().platform_fees;
    match session.input().rental_type {
        RentalType::ShortTerm => {
            let rate = read_percent_or(
                console,
                tr,
                keys::FIELD_SHORT_TERM_FEE_RATE,
                fees.short_term_fee_rate,
            )?;
            session.update_platform_fees(|f| f.short_term_fee_rate = rate);
        }
        RentalType::Airbnb => {
            let rate =
                read_percent_or(console, tr, keys::FIELD_AIRBNB_FEE_RATE, fees.airbnb_fee_rate)?;
            session.update_platform_fees(|f| f.airbnb_fee_rate = rate);
            // 고르지 않으면 플랫폼과 수수료율을 그대로 둔다.
            let picked = match console.read_line(tr.t(keys::PROMPT_PLATFORM))?.as_deref() {
                Some("1") => Some(ManagementPlatform::None),
                Some("2") => Some(ManagementPlatform::MrMention),
                Some("3") => Some(ManagementPlatform::Wehome),
                Some("4") => Some(ManagementPlatform::Custom),
                _ => None,
            };
            if let Some(platform) = picked {
                session.select_management_platform(platform);
            }
            if session.input().platform_fees.management_platform == ManagementPlatform::Custom {
                let rate = read_percent_or(
                    console,
                    tr,
                    keys::FIELD_MANAGEMENT_FEE_RATE,
                    session.input().platform_fees.management_fee_rate,
                )?;
                session.update_platform_fees(|f| f.management_fee_rate = rate);
            }
        }
    }
    Ok(())
}

/// 월 운영비용 메뉴를 처리한다.
pub fn handle_operating_costs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &mut CalculatorSession,
) -> Result<(), AppError> {
    console.say(tr.t(keys::PROMPT_KEEP_HINT))?;
    let mut c = session.input().operating_costs;
    c.monthly_rent = console.read_won_or(tr, keys::FIELD_MONTHLY_RENT, c.monthly_rent)?;
    c.monthly_management_fee =
        console.read_won_or(tr, keys::FIELD_MONTHLY_MANAGEMENT_FEE, c.monthly_management_fee)?;
    c.cleaning_cost = console.read_won_or(tr, keys::FIELD_CLEANING_COST, c.cleaning_cost)?;
    if session.input().rental_type == RentalType::Airbnb {
        c.cleaning_frequency_per_month = console.read_f64_or(
            tr,
            keys::FIELD_CLEANING_FREQUENCY,
            c.cleaning_frequency_per_month,
        )?;
    }
    c.tax_rate = read_percent_or(console, tr, keys::FIELD_TAX_RATE, c.tax_rate)?;
    c.monthly_insurance =
        console.read_won_or(tr, keys::FIELD_MONTHLY_INSURANCE, c.monthly_insurance)?;
    c.monthly_maintenance =
        console.read_won_or(tr, keys::FIELD_MONTHLY_MAINTENANCE, c.monthly_maintenance)?;
    c.monthly_utilities =
        console.read_won_or(tr, keys::FIELD_MONTHLY_UTILITIES, c.monthly_utilities)?;
    session.update_operating_costs(|o| *o = c);
    Ok(())
}

/// 결과 보고서를 출력한다.
pub fn handle_results<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &CalculatorSession,
) -> Result<(), AppError> {
    let result = session.result();
    let report = report::Report {
        input: session.input(),
        result: &result,
        view: BreakdownView::Monthly,
        tr,
    };
    write!(console.output, "{report}")?;
    Ok(())
}

/// 공유 링크를 출력한다.
pub fn handle_share<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    session: &CalculatorSession,
    share_base: &Url,
) -> Result<(), AppError> {
    let url = share::share_url(share_base, session.input());
    console.say(&format!("{}: {url}", tr.t(keys::REPORT_SHARE_LINK)))?;
    Ok(())
}
