use std::path::PathBuf;

use belforms_services::collect_stats;

use super::ensure_database;

pub fn run_stats(
    data_dir: PathBuf,
    format: String,
    out_json: Option<PathBuf>,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "stats_args", data_dir = ?data_dir, format = %format, out_json = ?out_json);

    ensure_database(&data_dir);
    let stats = collect_stats(&data_dir)?;

    match format.as_str() {
        "text" => {
            if out_json.is_some() {
                return Err(color_eyre::eyre::eyre!(
                    "--out-json is only supported when --format json"
                ));
            }
            println!("Файлов базы: {}", stats.files);
            println!("Парадигм: {}", stats.paradigms);
            println!("Вариантов: {} (пропущено {})", stats.variants, stats.skipped_variants);
            println!("Форм: {} (пропущено {})", stats.forms, stats.skipped_forms);
            println!("Лемм (2008): {}", stats.modern_lemmas);
            println!("Лемм (все): {}", stats.all_lemmas);
            println!("Альтернативных пар: {}", stats.alt_pairs);
        }
        "json" => {
            if let Some(path) = out_json {
                let file = std::fs::File::create(&path)?;
                serde_json::to_writer_pretty(file, &stats)?;
                println!("✔ JSON сохранён в {}", path.display());
            } else {
                serde_json::to_writer(std::io::stdout().lock(), &stats)?;
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}
