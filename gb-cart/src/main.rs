use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgEnum, Parser};
use lib_gb_cart::{load, Cartridge};
use simplelog::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, arg_enum, default_value_t = LogLevel::Info)]
    file_log_level: LogLevel,

    #[clap(short, long, arg_enum, default_value_t = LogLevel::Info)]
    console_log_level: LogLevel,

    #[clap(long, parse(from_os_str), default_value = "gb_cart.log")]
    log_file: PathBuf,

    #[clap(parse(from_os_str))]
    path: PathBuf,
}

#[derive(ArgEnum, Copy, Clone, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Status {
    Success = 0,
    BadUsage = 1,
    LoadFailed = 2,
    ReportFailed = 3,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                Status::BadUsage.into()
            } else {
                Status::Success.into()
            };
        }
    };

    init_logging(&args);

    run(&args.path).into()
}

fn init_logging(args: &Args) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        args.console_log_level.as_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let file_error = match File::create(&args.log_file) {
        Ok(file) => {
            loggers.push(WriteLogger::new(
                args.file_log_level.as_level_filter(),
                Config::default(),
                file,
            ));
            None
        }
        Err(e) => Some(e),
    };
    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(e) = file_error {
        log::warn!(
            "Logging to terminal only, failed to create {}: {}",
            args.log_file.display(),
            e
        );
    }
}

fn run(path: &Path) -> Status {
    log::info!("Loading from path: {}", path.display());
    let cartridge = match load(path) {
        Ok(cartridge) => cartridge,
        Err(e) => {
            log::error!("Failed to load ROM file: {}", e);
            return Status::LoadFailed;
        }
    };
    log::info!("Cart loaded..");

    match print_report(&cartridge) {
        Ok(()) => Status::Success,
        Err(e) => {
            log::error!("Failed to write report: {}", e);
            Status::ReportFailed
        }
    }
}

fn print_report(cartridge: &Cartridge) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Cartridge Loaded:")?;
    writeln!(out, "{}", cartridge.info())?;
    out.flush()
}
