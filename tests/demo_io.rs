//! End-to-end runs of the three demos against temp files and in-memory stdin.

use std::fs;

use tokencheck::{
    config::Config,
    demo::{self, DemoError, Verdict},
};

fn verdicts(pairs: &[(&str, bool)]) -> Vec<Verdict> {
    pairs
        .iter()
        .map(|&(input, accepted)| Verdict {
            input: input.to_string(),
            accepted,
        })
        .collect()
}

#[test]
fn tokens_file_trims_and_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.txt");
    fs::write(&path, "[+123]\n  [+ABC]  \n\n[123]\r\n[+1A]\n[-Z]").unwrap();

    let mut out = Vec::new();
    let got = demo::check_tokens_file(&path, &mut out).unwrap();
    assert_eq!(
        got,
        verdicts(&[
            ("[+123]", true),
            ("[+ABC]", true),
            ("[123]", false),
            ("[+1A]", false),
            ("[-Z]", true),
        ])
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("'[+ABC]' -> matches"), "{text}");
    assert!(text.contains("'[123]' -> does not match"), "{text}");
}

#[test]
fn text_file_splits_on_delimiter_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.txt");
    fs::write(&path, "$A1#, $A1 $ABC$.. $G#").unwrap();

    let mut out = Vec::new();
    let got = demo::check_text_file(&path, &mut out).unwrap();
    // '#' and '$' are kept inside words; only ' ', ',' and '.' split.
    assert_eq!(
        got,
        verdicts(&[
            ("$A1#", true),
            ("$A1", false),
            ("$ABC$", true),
            ("$G#", false),
        ])
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("$A1#, $A1 $ABC$.. $G#"), "file is echoed: {text}");
    assert!(text.contains("'$G#' -> INVALID"), "{text}");
}

#[test]
fn run_all_continues_past_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("text.txt");
    fs::write(&text_path, "AB.12, CD").unwrap();

    let cfg = Config {
        tokens_file: dir.path().join("missing.txt"),
        text_file: text_path,
    };
    let mut stdin = "$F9%\n".as_bytes();
    let mut out = Vec::new();
    let report = demo::run_all(&cfg, &mut stdin, &mut out).unwrap();

    assert_eq!(report.tokens, None);
    assert_eq!(
        report.words,
        Some(verdicts(&[("AB", false), ("12", false), ("CD", false)]))
    );
    assert_eq!(report.line, verdicts(&[("$F9%", true)])[0]);

    let text = String::from_utf8(out).unwrap();
    let l1 = text.find("--- Level 1 ---").unwrap();
    let l3 = text.find("--- Level 3 ---").unwrap();
    let l2 = text.find("--- Level 2 ---").unwrap();
    assert!(l1 < l3 && l3 < l2, "levels run 1, 3, 2:\n{text}");
    assert!(text.contains("missing.txt' not found"), "{text}");
}

#[test]
fn run_all_stops_on_unreadable_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_path = dir.path().join("tokens.txt");
    let text_path = dir.path().join("text.txt");
    fs::write(&tokens_path, "[+1]\n").unwrap();
    fs::write(&text_path, [b'$', 0xff, 0xfe, b'#']).unwrap();

    let cfg = Config {
        tokens_file: tokens_path,
        text_file: text_path.clone(),
    };
    let mut stdin = "$1#\n".as_bytes();
    let mut out = Vec::new();
    match demo::run_all(&cfg, &mut stdin, &mut out) {
        Err(DemoError::Io { path, source }) => {
            assert_eq!(path, text_path);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected an Io error, got {other:?}"),
    }

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("--- Level 2 ---"), "{text}");
}
