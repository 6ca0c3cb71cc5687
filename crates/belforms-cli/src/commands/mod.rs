use std::path::Path;

use belforms_services::GRAMMAR_DB_TAG;

pub mod build;
pub mod check;
pub mod stats;

/// База не выкачивается автоматически. Без неё подсказываем команду
/// и выходим, не трогая выходные файлы.
pub(crate) fn ensure_database(data_dir: &Path) {
    if !data_dir.is_dir() {
        eprintln!(
            "Please run 'git clone -b {GRAMMAR_DB_TAG} https://github.com/Belarus/GrammarDB.git'"
        );
        std::process::exit(1);
    }
}
