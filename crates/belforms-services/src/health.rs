//! Pre-flight checks over a GrammarDB checkout.
//!
//! The converter aborts on the first structural problem, which is
//! inconvenient when a checkout has several. This scan walks every XML
//! file, collects everything suspicious and never fails the run itself.

use std::path::Path;
use std::sync::OnceLock;

use belforms_core::text::normalize;
use regex::Regex;
use roxmltree::Document;
use walkdir::WalkDir;

use crate::pipeline::SOURCE_FILES;

#[derive(Debug, Clone)]
pub struct HealthIssue {
    pub path: String,
    pub category: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub checked: usize,
    pub issues: Vec<HealthIssue>,
}

static XML_DECL_RE: OnceLock<Regex> = OnceLock::new();

fn xml_decl_re() -> &'static Regex {
    XML_DECL_RE.get_or_init(|| {
        Regex::new(r#"(?i)<\?xml[^>]*encoding\s*=\s*['"]([^'"]+)['"][^>]*\?>"#).unwrap()
    })
}

/// Scans `root` and collects encoding, well-formedness and structure
/// issues. Files outside the fixed build set are checked too.
pub fn check_database(root: &Path) -> crate::Result<HealthReport> {
    let mut issues: Vec<HealthIssue> = Vec::new();
    let mut checked = 0usize;

    for name in SOURCE_FILES {
        if !root.join(name).is_file() {
            issues.push(HealthIssue {
                path: root.join(name).display().to_string(),
                category: "missing-file",
                detail: "file from the database build set is absent".into(),
            });
        }
    }

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        if p.extension()
            .and_then(|e| e.to_str())
            .map_or(true, |ext| !ext.eq_ignore_ascii_case("xml"))
        {
            continue;
        }

        checked += 1;
        let content = match std::fs::read_to_string(p) {
            Ok(s) => s,
            Err(e) => {
                issues.push(HealthIssue {
                    path: p.display().to_string(),
                    category: "encoding",
                    detail: format!("{e}"),
                });
                continue;
            }
        };

        // Объявление кодировки смотрим только в начале файла; срез
        // отводим назад до границы символа, чтобы не разрезать букву.
        let mut cut = content.len().min(512);
        while !content.is_char_boundary(cut) {
            cut -= 1;
        }
        let head = &content[..cut];
        if let Some(caps) = xml_decl_re().captures(head) {
            let enc = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let enc_norm = enc.to_ascii_lowercase().replace('_', "-");
            if enc_norm != "utf-8" && enc_norm != "utf8" {
                issues.push(HealthIssue {
                    path: p.display().to_string(),
                    category: "encoding-detected",
                    detail: format!("XML declares encoding={enc}; expected UTF-8"),
                });
            }
        }
        if head.to_ascii_lowercase().contains("<!doctype") {
            issues.push(HealthIssue {
                path: p.display().to_string(),
                category: "unexpected-doctype",
                detail: "DOCTYPE present (not expected in GrammarDB data)".into(),
            });
        }

        if let Some(ch) = content.chars().find(|ch| {
            let c = *ch as u32;
            c < 0x20 && c != 0x09 && c != 0x0A && c != 0x0D
        }) {
            issues.push(HealthIssue {
                path: p.display().to_string(),
                category: "invalid-char",
                detail: format!("control character U+{:04X}", ch as u32),
            });
        }

        match stream_error(&content) {
            Some(e) => {
                issues.push(HealthIssue {
                    path: p.display().to_string(),
                    category: categorize(&e),
                    detail: format!("{e}"),
                });
            }
            // Структуру смотрим только в файлах, прошедших проверку
            // на синтаксис.
            None => match Document::parse(&content) {
                Ok(doc) => structure_issues(&doc, p, &mut issues),
                Err(e) => issues.push(HealthIssue {
                    path: p.display().to_string(),
                    category: "parse",
                    detail: format!("{e}"),
                }),
            },
        }
    }

    Ok(HealthReport { checked, issues })
}

fn stream_error(content: &str) -> Option<quick_xml::Error> {
    let mut reader = quick_xml::Reader::from_str(content);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Eof) => return None,
            Ok(_) => {}
            Err(e) => return Some(e),
        }
        buf.clear();
    }
}

fn categorize(err: &quick_xml::Error) -> &'static str {
    use quick_xml::errors::IllFormedError;
    match err {
        quick_xml::Error::IllFormed(
            IllFormedError::MismatchedEndTag { .. } | IllFormedError::UnmatchedEndTag(_),
        ) => "tag-mismatch",
        quick_xml::Error::IllFormed(_) => "ill-formed",
        quick_xml::Error::Escape(_) => "invalid-entity",
        _ => "parse",
    }
}

/// То же, что ищет конвертер, но без остановки на первой находке.
fn structure_issues(doc: &Document, path: &Path, issues: &mut Vec<HealthIssue>) {
    let root = doc.root_element();
    if root.tag_name().name() != "Wordlist" {
        issues.push(HealthIssue {
            path: path.display().to_string(),
            category: "root-tag",
            detail: format!(
                "root element is <{}>, expected <Wordlist>",
                root.tag_name().name()
            ),
        });
    }

    for paradigm in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Paradigm")
    {
        let Some(raw) = paradigm.attribute("lemma") else {
            issues.push(HealthIssue {
                path: path.display().to_string(),
                category: "paradigm-lemma",
                detail: "paradigm without a lemma attribute".into(),
            });
            continue;
        };
        let paradigm_lemma = normalize(raw);

        for variant in paradigm
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "Variant")
        {
            match variant.attribute("lemma") {
                None => issues.push(HealthIssue {
                    path: path.display().to_string(),
                    category: "variant-lemma",
                    detail: format!("variant without a lemma attribute under '{paradigm_lemma}'"),
                }),
                Some(raw_lemma) => {
                    let lemma = normalize(raw_lemma);
                    if lemma.contains('|') {
                        issues.push(HealthIssue {
                            path: path.display().to_string(),
                            category: "pipe-in-lemma",
                            detail: format!("variant lemma '{lemma}' contains the list delimiter"),
                        });
                    }
                }
            }
        }
    }
}
