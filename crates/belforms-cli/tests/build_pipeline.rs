use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn bin_cmd() -> Command {
    Command::cargo_bin("belforms-cli").expect("belforms-cli built")
}

const SOURCE_FILES: [&str; 18] = [
    "A1.xml", "A2.xml", "C.xml", "E.xml", "I.xml", "K.xml", "M.xml", "N1.xml", "N2.xml", "N3.xml",
    "NP.xml", "P.xml", "R.xml", "S.xml", "V.xml", "W.xml", "Y.xml", "Z.xml",
];

const MODERN_HEADER: &str = "\
# This file was automatically generated from the https://github.com/Belarus/GrammarDB\n\
# data (Grammar Database of Belarusian language) using the RELEASE-202309 tag.\n\
# Creative Commons Attribution-ShareAlike 4.0 International License.\n\
#\n\
# Uses UTF-8 format with U+0301 stress marks and U+2BC apostrophes. Each line starts\n\
# with a single lemma, followed by the '|' delimited list of all its possible forms.\n\
# The ў/у variants and different apostrophe types are also present in the list.\n\
#\n\
# Official Belarusian orthography (be-1959acad) adhering to the latest 2008 reform.\n\
# Intended to be used by spellcheckers, which need to be strict.\n\
#\n";

fn write_db(dir: &Path) {
    for name in SOURCE_FILES {
        fs::write(dir.join(name), "<Wordlist/>\n").expect("write fixture");
    }
    fs::write(
        dir.join("N1.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Wordlist>
  <Paradigm lemma="дом" tag="NCMI">
    <Variant id="1" lemma="дом" pravapis="A1957,A2008">
      <Form tag="NS">дом</Form>
      <Form tag="GS">до+ма</Form>
      <Form tag="NP">дамы+</Form>
    </Variant>
  </Paradigm>
</Wordlist>
"#,
    )
    .expect("write fixture");
    fs::write(
        dir.join("A1.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Wordlist>
  <Paradigm lemma="снег">
    <Variant id="a" lemma="снег" pravapis="A1957,A2008">
      <Form tag="NS">снег</Form>
    </Variant>
    <Variant id="b" lemma="сьнег" pravapis="A1933">
      <Form tag="NS">сьнег</Form>
    </Variant>
  </Paradigm>
</Wordlist>
"#,
    )
    .expect("write fixture");
    fs::write(
        dir.join("K.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Wordlist>
  <Paradigm lemma="уз'езд">
    <Variant id="1" lemma="уз'езд" pravapis="A2008">
      <Form tag="NS">уз'езд</Form>
    </Variant>
  </Paradigm>
</Wordlist>
"#,
    )
    .expect("write fixture");
}

#[test]
fn build_generates_the_three_wordlists() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    let out = tmp.path().join("out");
    fs::create_dir(&data).expect("mkdir");
    fs::create_dir(&out).expect("mkdir");
    write_db(&data);

    bin_cmd()
        .current_dir(tmp.path())
        .args(["build", "--data-dir"])
        .arg(&data)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ Готово"))
        .stdout(predicate::str::contains("лемм 3 (2008) / 4 (все)"))
        .stdout(predicate::str::contains("альтернативных пар 1"))
        .stdout(predicate::str::contains(
            "парадигм 3, вариантов 4 (пропущено 0), форм 6 (пропущено 0)",
        ));

    let modern = fs::read_to_string(out.join("wordforms-be-2008.txt")).expect("modern list");
    assert!(modern.starts_with(MODERN_HEADER));
    assert!(modern.contains("\nдом|дамы\u{301}|до\u{301}ма\n"));
    assert!(modern.contains("\nуз\u{2bc}езд|"));
    assert!(modern.contains("уз'езд"));
    assert!(modern.contains("ўз\u{2bc}езд"));
    assert!(!modern.contains("сьнег"));

    let all = fs::read_to_string(out.join("wordforms-be-all.txt")).expect("full list");
    assert!(all.contains("Narkamaŭka"));
    assert!(all.contains("\nснег\n") || all.contains("\nснег|"));
    assert!(all.contains("\nсьнег\n") || all.contains("\nсьнег|"));

    let alt = fs::read_to_string(out.join("wordforms-be-altpairs.txt")).expect("alt pairs");
    assert!(alt.ends_with("\nснег|сьнег\n"));
}

#[test]
fn build_dry_run_writes_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    let out = tmp.path().join("out");
    fs::create_dir(&data).expect("mkdir");
    fs::create_dir(&out).expect("mkdir");
    write_db(&data);

    bin_cmd()
        .current_dir(tmp.path())
        .args(["build", "--dry-run", "--data-dir"])
        .arg(&data)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY-RUN"))
        .stdout(predicate::str::contains("wordforms-be-2008.txt"));

    assert!(!out.join("wordforms-be-2008.txt").exists());
    assert!(!out.join("wordforms-be-all.txt").exists());
    assert!(!out.join("wordforms-be-altpairs.txt").exists());
}

#[test]
fn pipe_in_lemma_aborts_without_outputs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    let out = tmp.path().join("out");
    fs::create_dir(&data).expect("mkdir");
    fs::create_dir(&out).expect("mkdir");
    write_db(&data);
    fs::write(
        data.join("S.xml"),
        r#"<Wordlist><Paradigm lemma="а"><Variant id="1" lemma="а|б"/></Paradigm></Wordlist>"#,
    )
    .expect("break fixture");

    bin_cmd()
        .current_dir(tmp.path())
        .args(["build", "--data-dir"])
        .arg(&data)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pipe character in variant lemma"));

    assert!(!out.join("wordforms-be-2008.txt").exists());
    assert!(!out.join("wordforms-be-all.txt").exists());
    assert!(!out.join("wordforms-be-altpairs.txt").exists());
}

#[test]
fn progress_is_logged_to_stderr() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    let out = tmp.path().join("out");
    fs::create_dir(&data).expect("mkdir");
    fs::create_dir(&out).expect("mkdir");
    write_db(&data);

    bin_cmd()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .args(["build", "--data-dir"])
        .arg(&data)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing: A1.xml"))
        .stderr(predicate::str::contains("Generating: wordforms-be-2008.txt"));
}

#[test]
fn verbose_logs_skipped_forms() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    let out = tmp.path().join("out");
    fs::create_dir(&data).expect("mkdir");
    fs::create_dir(&out).expect("mkdir");
    write_db(&data);
    fs::write(
        data.join("Y.xml"),
        r#"<Wordlist>
  <Paradigm lemma="сям-там">
    <Variant id="1" lemma="сям-там" pravapis="A2008">
      <Form tag="NS">сям-там</Form>
    </Variant>
  </Paradigm>
  <Paradigm lemma="там">
    <Variant id="1" lemma="там" pravapis="A2008">
      <Form tag="NS">там-сям</Form>
    </Variant>
  </Paradigm>
</Wordlist>
"#,
    )
    .expect("write fixture");

    bin_cmd()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .args(["--verbose", "build", "--data-dir"])
        .arg(&data)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("variant_skipped"))
        .stderr(predicate::str::contains("form_skipped"));
}
