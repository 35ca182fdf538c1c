use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::io::Write;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock, Mutex, TryLockResult};
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use country_quiz::api::{RestCountries, DEFAULT_BASE_URL};
use country_quiz::model::{QuizMode, RegionFilter};
use futures::FutureExt;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod console;
mod worker;

#[derive(Parser, Debug, Clone)]
#[command(about = "Look up countries and quiz yourself on flags and capitals")]
struct Args {
    /// Base URL of the country information service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_base: String,

    /// Timeout in seconds for each request to the country service
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Region the quiz starts with: all, africa, americas, asia, europe or oceania
    #[arg(long, default_value = "all")]
    region: RegionFilter,

    /// What the quiz starts out showing: flags or capitals
    #[arg(long, default_value = "flags")]
    mode: QuizMode,

    /// Seed for the random country picks, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// How verbose the output should be, can be set up to 3 times. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to output log to
    #[arg(short, long)]
    log_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let old_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        old_hook(panic_info);
        error!("Backtrace: {:#?}", backtrace);
    }));

    let args = Args::parse();

    tracing_init(&args)?;

    debug!(?args);

    let config = console::Config {
        region: args.region,
        mode: args.mode,
        seed: args.seed,
    };
    let api = Arc::new(RestCountries::new(args.api_base.as_str(), Duration::from_secs(args.timeout)));

    // AssertUnwindSafe is justified as all we do is write a crash log before ending the program
    match AssertUnwindSafe(console::run(api, config)).catch_unwind().await {
        Ok(result) => result?,
        Err(payload) => {
            error!("the application panicked, this is a bug");
            write_crashlog(payload);
        }
    }

    if let Some(log_path) = args.log_path {
        info!("wrote logs to {}", log_path.display());
    }

    Ok(())
}

fn write_crashlog(payload: Box<dyn std::any::Any + Send>) {
    let file_name = Local::now().format("crashlog-%Y-%m-%dT%H-%M-%S.txt").to_string();
    let Ok(mut file) = File::create(&file_name) else {
        error!("could not create {file_name}");
        return;
    };

    let mut contents = match LOG_BUFFER.try_lock() {
        TryLockResult::Ok(buffer) => buffer.iter().map(String::as_str).collect::<Vec<_>>().join("\n"),
        _ => "failed to lock log buffer".to_string(),
    };
    contents.push_str("\n\n");
    if let Some(s) = payload.downcast_ref::<&str>() {
        contents.push_str(s);
    } else if let Some(s) = payload.downcast_ref::<String>() {
        contents.push_str(s);
    } else {
        contents.push_str("panic: unknown payload type");
    }

    match file.write_all(contents.as_bytes()) {
        Ok(()) => info!("wrote crashlog to {file_name}"),
        Err(e) => error!("failed to write {file_name}: {e}"),
    }
}

struct VecWriter;

/// Most recent log lines kept for the crash log.
const LOG_BUFFER_LINES: usize = 2000;

pub static LOG_BUFFER: LazyLock<Mutex<VecDeque<String>>> = LazyLock::new(|| Mutex::new(VecDeque::new()));

fn push_capped(buffer: &mut VecDeque<String>, lines: impl IntoIterator<Item = String>, cap: usize) {
    for line in lines {
        if buffer.len() == cap {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

impl io::Write for VecWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let str = String::from_utf8_lossy(buf);
        let lines = str.lines().map(|s| s.to_string());
        if let Ok(mut buffer) = LOG_BUFFER.lock() {
            push_capped(&mut buffer, lines, LOG_BUFFER_LINES);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes every log line to both the crash log buffer and stderr.
struct DualWriter<A: io::Write, B: io::Write> {
    m: Arc<Mutex<(A, B)>>,
}

impl<A: io::Write, B: io::Write> DualWriter<A, B> {
    fn new(a: A, b: B) -> Self {
        Self {
            m: Arc::new(Mutex::new((a, b))),
        }
    }
}

impl<A: io::Write, B: io::Write> io::Write for DualWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut m = self.m.lock().map_err(|_| io::Error::other("log writer poisoned"))?;
        m.0.write(buf)?;
        m.1.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut m = self.m.lock().map_err(|_| io::Error::other("log writer poisoned"))?;
        m.0.flush()?;
        m.1.flush()
    }
}

impl<'a, A: io::Write, B: io::Write> MakeWriter<'a> for DualWriter<A, B> {
    type Writer = DualWriter<A, B>;

    fn make_writer(&'a self) -> Self::Writer {
        DualWriter { m: self.m.clone() }
    }
}

fn tracing_init(args: &Args) -> color_eyre::Result<()> {
    tracing_log::LogTracer::init()?;

    fn env_filter(args: &Args) -> color_eyre::Result<EnvFilter> {
        Ok(EnvFilter::builder()
            .with_default_directive(
                match args.verbose {
                    0 => "country_quiz=warn",
                    1 => "country_quiz=info",
                    2 => "debug",
                    _ => "trace",
                }
                .parse()?,
            )
            .from_env_lossy())
    }

    let console_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(DualWriter::new(VecWriter, io::stderr()))
        .with_filter(env_filter(args)?);

    let file_log = if let Some(log_path) = &args.log_path {
        let log_file = File::create(log_path).wrap_err_with(|| format!("could not create {}", log_path.display()))?;
        let file_log = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(Mutex::new(log_file))
            .with_filter(tracing::level_filters::LevelFilter::TRACE);
        Some(file_log)
    } else {
        None
    };

    let subscriber = tracing_subscriber::registry().with(console_log).with(file_log);
    tracing::subscriber::set_global_default(subscriber).wrap_err("unable to set up logging")?;

    Ok(())
}
