use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ConfigError;
use crate::i18n::{self, Translator};
use crate::input::{CalculatorInput, RentalType};
use crate::input_file::{self, InputFileError};
use crate::session::CalculatorSession;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 파일 오류: {0}")]
    InputFile(#[from] InputFileError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 입력 출처. 파일이 쿼리보다 우선한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSource<'a> {
    pub query: Option<&'a str>,
    pub input_path: Option<&'a Path>,
    pub rental_type: Option<RentalType>,
}

/// 입력 출처에서 세션을 만든다. 임대 유형을 지정하면 탭 전환과 같은 규칙으로 바꾼다.
pub fn open_session(source: InputSource<'_>) -> Result<CalculatorSession, AppError> {
    let mut session = match (source.input_path, source.query) {
        (Some(path), _) => CalculatorSession::new(input_file::load_input(path)?),
        (None, Some(query)) => CalculatorSession::from_query(query),
        (None, None) => CalculatorSession::default(),
    };
    if let Some(rental_type) = source.rental_type {
        session.set_rental_type(rental_type);
    }
    debug!(input = ?session.input(), "세션 준비");
    Ok(session)
}

/// 입력 출처에서 계산기 입력만 꺼낸다.
pub fn resolve_input(source: InputSource<'_>) -> Result<CalculatorInput, AppError> {
    Ok(*open_session(source)?.input())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut CalculatorSession,
    tr: &Translator,
    share_base: &Url,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(console, tr)? {
            MenuChoice::RentalType => ui_cli::handle_rental_type(console, tr, session)?,
            MenuChoice::Investment => ui_cli::handle_investment(console, tr, session)?,
            MenuChoice::Revenue => ui_cli::handle_revenue(console, tr, session)?,
            MenuChoice::PlatformFees => ui_cli::handle_platform_fees(console, tr, session)?,
            MenuChoice::OperatingCosts => ui_cli::handle_operating_costs(console, tr, session)?,
            MenuChoice::Results => ui_cli::handle_results(console, tr, session)?,
            MenuChoice::Share => ui_cli::handle_share(console, tr, session, share_base)?,
            MenuChoice::Exit => {
                writeln!(console.output_mut(), "{}", tr.t(i18n::keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}
