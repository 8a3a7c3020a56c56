use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI용 로거를 설치한다. 보고서와 링크가 stdout으로 나가므로 로그는 stderr로 보낸다.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "rental_yield=debug"
    } else {
        "rental_yield=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
