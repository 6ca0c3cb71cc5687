use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[derive(Parser)]
#[command(
    name = "belforms",
    version,
    about = "Belarusian wordform lists from GrammarDB (Rust)"
)]
struct Cli {
    /// Выключить цветной вывод
    #[arg(long)]
    no_color: bool,

    /// Подробный лог на stderr, включая пропущенные формы
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Собрать три списка словоформ из XML базы
    Build {
        #[arg(long, default_value = "GrammarDB/data")]
        data_dir: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// Проверить файлы базы, не собирая списков
    Check {
        #[arg(long, default_value = "GrammarDB/data")]
        data_dir: PathBuf,
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Посчитать статистику по базе
    Stats {
        #[arg(long, default_value = "GrammarDB/data")]
        data_dir: PathBuf,
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
        #[arg(long)]
        out_json: Option<PathBuf>,
    },
}

trait Runnable {
    fn run(self, use_color: bool) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, use_color: bool) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        info!("▶ Starting command: {}", cmd_name);

        let result = match self {
            Commands::Build {
                data_dir,
                out_dir,
                dry_run,
            } => commands::build::run_build(data_dir, out_dir, dry_run, use_color),

            Commands::Check {
                data_dir,
                format,
                strict,
            } => commands::check::run_check(data_dir, format, strict, use_color),

            Commands::Stats {
                data_dir,
                format,
                out_json,
            } => commands::stats::run_stats(data_dir, format, out_json),
        };

        match &result {
            Ok(_) => info!("✔ Finished command: {}", cmd_name),
            Err(e) => error!("✖ Command {} failed: {:?}", cmd_name, e),
        }

        result
    }
}

fn init_tracing(verbose: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "belforms.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = if verbose { "debug" } else { "info" };
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        );

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    cli.cmd.run(use_color)
}
