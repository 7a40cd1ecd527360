use {
    clap::Parser,
    relative_candles::{Cli, run_cli},
    std::{panic, process::ExitCode},
};

#[tokio::main]
async fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    // RUST_LOG, when set, wins over the defaults above.
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("relative_candles"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    match run_cli(args).await {
        Ok((text, ok)) => {
            println!("{}", text);
            if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
