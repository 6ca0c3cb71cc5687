use std::path::PathBuf;

use belforms_services::check_database;
use serde::Serialize;

use super::ensure_database;

pub fn run_check(
    data_dir: PathBuf,
    format: String,
    strict: bool,
    use_color: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "check_args", data_dir = ?data_dir, format = %format, strict = strict);

    ensure_database(&data_dir);
    let report = check_database(&data_dir)?;

    if format == "json" {
        #[derive(Serialize)]
        struct IssueOut<'a> {
            path: &'a str,
            category: &'static str,
            detail: &'a str,
        }
        #[derive(Serialize)]
        struct Out<'a> {
            checked: usize,
            issues: Vec<IssueOut<'a>>,
        }
        let out = Out {
            checked: report.checked,
            issues: report
                .issues
                .iter()
                .map(|i| IssueOut {
                    path: &i.path,
                    category: i.category,
                    detail: &i.detail,
                })
                .collect(),
        };
        serde_json::to_writer(std::io::stdout().lock(), &out)?;
        if strict && !report.issues.is_empty() {
            color_eyre::eyre::bail!("проверка базы нашла {} проблем(ы)", report.issues.len());
        }
        return Ok(());
    }

    if report.issues.is_empty() {
        println!("✔ Проверено файлов: {}, проблем не найдено", report.checked);
        return Ok(());
    }

    for issue in &report.issues {
        if use_color {
            use owo_colors::OwoColorize;
            println!(
                "[{}] {}: {}",
                issue.category.yellow(),
                issue.path,
                issue.detail
            );
        } else {
            println!("[{}] {}: {}", issue.category, issue.path, issue.detail);
        }
    }
    println!(
        "Проверено файлов: {}, проблем: {}",
        report.checked,
        report.issues.len()
    );

    if strict {
        color_eyre::eyre::bail!("проверка базы нашла {} проблем(ы)", report.issues.len());
    }
    Ok(())
}
