use std::path::PathBuf;

use belforms_services::{build_wordlists, plan_wordlists};

use super::ensure_database;

pub fn run_build(
    data_dir: PathBuf,
    out_dir: PathBuf,
    dry_run: bool,
    use_color: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "build_args", data_dir = ?data_dir, out_dir = ?out_dir, dry_run = dry_run);

    ensure_database(&data_dir);

    if dry_run {
        let plan = plan_wordlists(&data_dir, &out_dir)?;
        println!("DRY-RUN план:");
        for (path, lines) in &plan.files {
            println!("  {}  ({} строк)", path.display(), lines);
        }
        println!("ИТОГО: {} строк(и)", plan.total_lines());
        return Ok(());
    }

    let summary = build_wordlists(&data_dir, &out_dir)?;

    if use_color {
        use owo_colors::OwoColorize;
        println!(
            "{} Готово: файлов {}, лемм {} (2008) / {} (все), альтернативных пар {}",
            "✔".green(),
            summary.files,
            summary.modern_lemmas,
            summary.all_lemmas,
            summary.alt_pairs
        );
    } else {
        println!(
            "✔ Готово: файлов {}, лемм {} (2008) / {} (все), альтернативных пар {}",
            summary.files, summary.modern_lemmas, summary.all_lemmas, summary.alt_pairs
        );
    }
    println!(
        "  парадигм {}, вариантов {} (пропущено {}), форм {} (пропущено {})",
        summary.stats.paradigms,
        summary.stats.variants,
        summary.stats.skipped_variants,
        summary.stats.forms,
        summary.stats.skipped_forms
    );
    for path in &summary.outputs {
        println!("  {}", path.display());
    }

    Ok(())
}
