//! Запись готовых списков в текстовые файлы.
//!
//! Формат нарочно примитивный: строки `#` комментария в начале, дальше
//! по одной записи на строку с разделителем `|`. Такие файлы читаются
//! и spellchecker-ами, и обычным grep-ом.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use belforms_core::Result;

/// Пишет список словоформ: сначала заголовок, затем по строке на лемму.
///
/// Строка начинается с леммы, дальше через `|` идут её формы в
/// отсортированном порядке. Сама лемма в списке форм не повторяется,
/// поэтому лемма без форм даёт строку из одного слова.
pub fn write_wordforms<W: Write>(
    mut w: W,
    header: &str,
    entries: &BTreeMap<String, BTreeSet<String>>,
) -> Result<()> {
    write!(w, "{header}")?;
    for (lemma, forms) in entries {
        let mut line = String::with_capacity(64);
        line.push_str(lemma);
        for form in forms {
            if form == lemma {
                continue;
            }
            line.push('|');
            line.push_str(form);
        }
        writeln!(w, "{line}")?;
    }
    w.flush()?;
    Ok(())
}

/// Пишет список альтернативных написаний, по паре на строку.
pub fn write_alt_pairs<W: Write>(mut w: W, header: &str, pairs: &[(String, String)]) -> Result<()> {
    write!(w, "{header}")?;
    for (left, right) in pairs {
        writeln!(w, "{left}|{right}")?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_wordforms_file(
    path: &Path,
    header: &str,
    entries: &BTreeMap<String, BTreeSet<String>>,
) -> Result<()> {
    let file = File::create(path)?;
    write_wordforms(BufWriter::new(file), header, entries)
}

pub fn write_alt_pairs_file(path: &Path, header: &str, pairs: &[(String, String)]) -> Result<()> {
    let file = File::create(path)?;
    write_alt_pairs(BufWriter::new(file), header, pairs)
}
