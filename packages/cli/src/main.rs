use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dvmn_backend_rust::config::Config;
use dvmn_backend_rust::services::history::HistoryClient;
use dvmn_stats::{
    build_module_stats, collect_history, first_review_durations, split_by_lesson, summarize,
    PairingMode,
};

mod report;

/// Review-time statistics for a dvmn.org learner.
#[derive(Parser)]
#[command(name = "dvmn-stats", about = "Parse and report dvmn.org history stats", version)]
struct Cli {
    /// dvmn.org username
    username: String,

    /// Do not write the CSV report
    #[arg(long)]
    skip_csv: bool,

    /// Pair the first submission with the first review after it
    #[arg(long)]
    skip_unreviewed: bool,

    /// CSV output path, defaults to {username}_stats.csv
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let client = HistoryClient::new(config.dvmn_base_url.clone(), config.http_timeout);

    let html = client.fetch_history(&cli.username).await.context(
        "Ошибка получения истории действий. Проверьте имя пользователя и доступ в интернет.",
    )?;

    let events = collect_history(&html).context("Не удалось разобрать страницу истории")?;

    let mode = if cli.skip_unreviewed {
        PairingMode::SkipUnreviewed
    } else {
        PairingMode::FirstTwo
    };
    let durations = first_review_durations(split_by_lesson(&events), mode);

    let summary = summarize(&durations)
        .map_err(|_| anyhow::anyhow!("Первых проверок не найдено, в истории пусто"))?;
    let modules = build_module_stats(&durations);

    report::print_summary(&mut io::stdout().lock(), &summary, &modules)?;

    if !cli.skip_csv {
        let path = cli
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}_stats.csv", cli.username)));
        report::write_csv(&path, &durations)
            .with_context(|| format!("Не удалось записать отчёт в {}", path.display()))?;
        tracing::debug!(path = %path.display(), "CSV report written");
    }

    Ok(())
}
