use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rental_yield::app::{self, AppError, InputSource};
use rental_yield::i18n::{self, keys, Translator};
use rental_yield::revenue::BreakdownView;
use rental_yield::ui_cli::Console;
use rental_yield::{calculate, config, logging, report, share, RentalType};
use url::Url;

/// 단기임대 투자 수익률 계산기.
#[derive(Debug, Parser)]
#[command(name = "rental_yield", version, about)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// 공유 링크 쿼리 또는 전체 URL
    #[arg(long, short)]
    query: Option<String>,
    /// 시나리오 파일 (.toml / .json)
    #[arg(long, short, conflicts_with = "query")]
    input: Option<PathBuf>,
    /// 임대 유형 탭 전환 (이전에 입력이 없으면 해당 유형 기본값)
    #[arg(long = "type", value_enum)]
    rental_type: Option<RentalType>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 결과 보고서를 출력한다
    Calc {
        #[command(flatten)]
        source: SourceArgs,
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
        /// 수익 구성을 연 기준(운영 개월수 반영)으로 출력
        #[arg(long, conflicts_with = "json")]
        annual: bool,
    },
    /// 공유 링크를 출력한다
    Share {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// 대화형 메뉴 (기본)
    Interactive {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            tracing::debug!(error = ?err, "실행 실패");
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(language = ?tr.language(), "표시 언어");
    let share_base = cfg.share_base()?;

    match &cli.command {
        Some(Command::Calc {
            source,
            json,
            annual,
        }) => {
            let query = source.query.as_deref().map(query_part);
            let input = app::resolve_input(input_source(source, query.as_deref()))?;
            let result = calculate(&input);
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let view = if *annual {
                    BreakdownView::Annual
                } else {
                    BreakdownView::Monthly
                };
                print!("{}", report::render_report(&input, &result, view, &tr));
            }
        }
        Some(Command::Share { source }) => {
            let query = source.query.as_deref().map(query_part);
            let input = app::resolve_input(input_source(source, query.as_deref()))?;
            println!("{}", share::share_url(&share_base, &input));
        }
        Some(Command::Interactive { source }) => {
            let query = source.query.as_deref().map(query_part);
            let mut session = app::open_session(input_source(source, query.as_deref()))?;
            app::run(&mut Console::stdio(), &mut session, &tr, &share_base)?;
        }
        None => {
            let mut session = app::open_session(InputSource::default())?;
            app::run(&mut Console::stdio(), &mut session, &tr, &share_base)?;
        }
    }
    Ok(())
}

fn input_source<'a>(args: &'a SourceArgs, query: Option<&'a str>) -> InputSource<'a> {
    InputSource {
        query,
        input_path: args.input.as_deref(),
        rental_type: args.rental_type,
    }
}

/// 전체 URL이 들어오면 쿼리 부분만 꺼낸다.
fn query_part(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => raw.to_string(),
    }
}
