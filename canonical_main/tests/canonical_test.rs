// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Run the canonical binary on the files in test_data.

use pretty_trace::*;
use std::fs::{read_to_string, remove_file};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use string_utils::strme;

const RULES: &str = "RULES=test_data/chothia.dat";

fn canonical(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_canonical"))
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("failed to execute canonical {}", args.join(" ")))
}

fn check_ok(args: &[&str], expected: &str) {
    let new = canonical(args);
    if new.status.code() != Some(0) {
        panic!(
            "canonical {} failed, stderr =\n{}",
            args.join(" "),
            strme(&new.stderr)
        );
    }
    assert_eq!(strme(&new.stdout), expected, "canonical {}", args.join(" "));
}

#[test]
fn test_match() {
    PrettyTrace::new().on();
    check_ok(
        &[RULES, "IN=test_data/h3_match.seq"],
        "CDR L1  Missing Residues\n\
         CDR L2  Class 1  \n\
         CDR L3  Missing Residues\n\
         CDR H1  Missing Residues\n\
         CDR H2  Missing Residues\n\
         CDR H3  Class h3a\n",
    );
    check_ok(
        &[RULES, "IN=test_data/h3_match.seq", "VERBOSE"],
        "CDR L1  Missing Residues\n\
         CDR L2  Class 1   Chothia et al. (1989)\n\
         CDR L3  Missing Residues\n\
         CDR H1  Missing Residues\n\
         CDR H2  Missing Residues\n\
         CDR H3  Class h3a\n",
    );
}

#[test]
fn test_mismatch() {
    PrettyTrace::new().on();
    check_ok(
        &[RULES, "IN=test_data/h3_mismatch.seq", "VERBOSE"],
        "CDR L1  Missing Residues\n\
         CDR L2  Class 1   Chothia et al. (1989)\n\
         CDR L3  Missing Residues\n\
         CDR H1  Missing Residues\n\
         CDR H2  Missing Residues\n\
         CDR H3  Class ?  \n\
         ! Similar to class h3a, but:\n\
         !    H101 = K (allows: AG)\n",
    );
}

#[test]
fn test_chothia_input() {
    PrettyTrace::new().on();

    // The rules use Kabat numbering, the sequence Chothia numbering.

    check_ok(
        &[RULES, "IN=test_data/h1_chothia.seq", "CHOTHIA_INPUT"],
        "CDR L1  Missing Residues\n\
         CDR L2  Missing Residues\n\
         CDR L3  Missing Residues\n\
         CDR H1  Class 1  \n\
         CDR H2  Missing Residues\n\
         CDR H3  Class h3a\n",
    );

    // Read as Kabat, H35A and H33 land on the wrong residues.

    check_ok(
        &[RULES, "IN=test_data/h1_chothia.seq", "VERBOSE"],
        "CDR L1  Missing Residues\n\
         CDR L2  Missing Residues\n\
         CDR L3  Missing Residues\n\
         CDR H1  Class ?  \n\
         ! Similar to class 1, but:\n\
         !    H35A = S (allows: W)\n\
         !    H33 = M (allows: Y)\n\
         CDR H2  Missing Residues\n\
         CDR H3  Class h3a\n",
    );
}

#[test]
fn test_unknown_cdr1_warning() {
    PrettyTrace::new().on();
    let run = |extra: &[&str]| {
        let mut args = vec![RULES, "IN=test_data/h3_match.seq"];
        args.extend_from_slice(extra);
        Command::new(env!("CARGO_BIN_EXE_canonical"))
            .args(&args)
            .env("RUST_LOG", "warn")
            .output()
            .unwrap()
    };

    // Both CDR1s are missing, so with differing numbering schemes the classified loops L2 and
    // H3 are looked up untranslated, and the user is told so once per loop.

    let new = run(&["CHOTHIA_INPUT"]);
    assert_eq!(new.status.code(), Some(0));
    let err = strme(&new.stderr);
    assert!(err.contains(
        "CDR L1 length unknown, so Kabat labels are used untranslated for CDR L2"
    ));
    assert!(err.contains(
        "CDR H1 length unknown, so Kabat labels are used untranslated for CDR H3"
    ));
    assert_eq!(err.matches("untranslated").count(), 2);

    let new = run(&[]);
    assert_eq!(new.status.code(), Some(0));
    assert!(!strme(&new.stderr).contains("untranslated"));
}

#[test]
fn test_multiple_inputs() {
    PrettyTrace::new().on();
    let new = canonical(&[
        RULES,
        "IN=test_data/h3_mismatch.seq,test_data/h3_match.seq",
    ]);
    assert_eq!(new.status.code(), Some(0));
    let out = strme(&new.stdout);
    let lines = out.lines().collect::<Vec<&str>>();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "# test_data/h3_mismatch.seq");
    assert_eq!(lines[6], "CDR H3  Class ?  ");
    assert_eq!(lines[7], "# test_data/h3_match.seq");
    assert_eq!(lines[13], "CDR H3  Class h3a");
}

#[test]
fn test_stdin_and_out() {
    PrettyTrace::new().on();
    let out_file = format!("{}/stdin_test.out", env!("CARGO_TARGET_TMPDIR"));
    let out_arg = format!("OUT={}", out_file);
    let mut child = Command::new(env!("CARGO_BIN_EXE_canonical"))
        .args(&[RULES, &out_arg])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let seq = read_to_string("test_data/h3_match.seq").unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(seq.as_bytes())
        .unwrap();
    let new = child.wait_with_output().unwrap();
    assert_eq!(new.status.code(), Some(0), "{}", strme(&new.stderr));
    assert!(new.stdout.is_empty());
    let out = read_to_string(&out_file).unwrap();
    assert!(out.ends_with("CDR H3  Class h3a\n"));
    remove_file(&out_file).unwrap();
}

#[test]
fn test_failures() {
    PrettyTrace::new().on();
    let new = canonical(&["RULES=test_data/bad_reference.dat", "IN=test_data/h3_match.seq"]);
    assert_eq!(new.status.code(), Some(1));
    assert!(new.stdout.is_empty());
    assert!(strme(&new.stderr).contains("matches no class"));

    let new = canonical(&[RULES, "IN=test_data/bad_residue.seq"]);
    assert_eq!(new.status.code(), Some(1));
    assert!(strme(&new.stderr).contains("Error in input data, line 2"));

    let new = canonical(&["RULES=test_data/no_such_file.dat"]);
    assert_eq!(new.status.code(), Some(1));

    let new = canonical(&[RULES, "FROB"]);
    assert_eq!(new.status.code(), Some(1));
    assert!(strme(&new.stderr).contains("Unrecognized argument FROB"));
}
