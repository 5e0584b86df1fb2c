// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Read a canonical class data file.  The format is:
//
// ! comment
// CHOTHIANUMBERING
// LOOP loopid class length
// SOURCE free text
// PRIORITY class
// SUBORDINATE class
// resid types
// resid types
// ...
//
// Blank lines and lines starting with ! or # are ignored.  Keywords are case insensitive and
// matched on line prefix.  CHOTHIANUMBERING, which may appear anywhere, says that the resids use
// Chothia rather than Kabat numbering.  SOURCE, PRIORITY and SUBORDINATE apply to the preceding
// LOOP.

use canonical_core::defs::{KeyPosition, LoopId, RuleRecord, MAX_KEY_RESIDUES, MAX_LABEL_LEN};
use canonical_core::errors::RulesError;
use io_utils::path_exists;
use log::info;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub const KABATDIR: &str = "KABATDIR";

fn has_keyword(line: &str, keyword: &str) -> bool {
    let (b, k) = (line.as_bytes(), keyword.as_bytes());
    b.len() >= k.len() && b[..k.len()].eq_ignore_ascii_case(k)
}

// Text after the first word of a line.

fn rest_of_line(line: &str) -> &str {
    match line.find(char::is_whitespace) {
        Some(p) => line[p..].trim(),
        None => "",
    }
}

pub fn parse_rules<R: BufRead>(r: R) -> Result<Vec<RuleRecord>, RulesError> {
    let mut recs = Vec::<RuleRecord>::new();
    let mut keys = 0;
    let mut current: Option<(LoopId, String)> = None;
    for (i, line) in r.lines().enumerate() {
        let lnum = i + 1;
        let line = line.map_err(|e| RulesError::Syntax {
            line: lnum,
            msg: e.to_string(),
        })?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('!') || s.starts_with('#') {
            continue;
        }
        let fields = s.split_whitespace().collect::<Vec<&str>>();
        let syntax = |msg: String| RulesError::Syntax { line: lnum, msg };
        if has_keyword(s, "SOURCE") {
            recs.push(RuleRecord::Source(rest_of_line(s).to_string()));
        } else if has_keyword(s, "CHOTHIANUM") {
            recs.push(RuleRecord::ChothiaNumbering);
        } else if has_keyword(s, "PRIORITY") || has_keyword(s, "SUBORDINATE") {
            if fields.len() != 2 {
                return Err(syntax(format!("expected one class name after {}", fields[0])));
            }
            let target = fields[1].to_string();
            if has_keyword(s, "PRIORITY") {
                recs.push(RuleRecord::Priority(target));
            } else {
                recs.push(RuleRecord::Subordinate(target));
            }
        } else if has_keyword(s, "LOOP") {
            if fields.len() < 4 {
                return Err(syntax("expected LOOP loopid class length".to_string()));
            }
            let loop_id = LoopId::parse(fields[1])
                .ok_or_else(|| syntax(format!("unknown loop {}", fields[1])))?;
            let length = fields[3]
                .parse::<i32>()
                .map_err(|_| syntax(format!("loop length {} is not an integer", fields[3])))?;
            keys = 0;
            current = Some((loop_id, fields[2].to_string()));
            recs.push(RuleRecord::Loop {
                loop_id,
                class_name: fields[2].to_string(),
                length,
            });
        } else {
            if fields.len() < 2 {
                return Err(syntax(format!("no allowed residues given for {}", fields[0])));
            }
            if fields[0].len() > MAX_LABEL_LEN {
                return Err(syntax(format!(
                    "residue label {} is longer than {} characters",
                    fields[0], MAX_LABEL_LEN
                )));
            }
            if let Some((loop_id, class_name)) = current.as_ref() {
                keys += 1;
                if keys > MAX_KEY_RESIDUES {
                    return Err(RulesError::TooManyKeyResidues {
                        loop_id: *loop_id,
                        class_name: class_name.clone(),
                        max: MAX_KEY_RESIDUES,
                        line: lnum,
                    });
                }
            }
            recs.push(RuleRecord::Key(KeyPosition::new(fields[0], fields[1])));
        }
    }
    Ok(recs)
}

// Locate a data file: as given, or else in the directory named by KABATDIR.

pub fn find_rules_file(name: &str) -> Option<String> {
    if path_exists(name) {
        return Some(name.to_string());
    }
    if let Ok(dir) = env::var(KABATDIR) {
        let f = format!("{}/{}", dir, name);
        if path_exists(&f) {
            return Some(f);
        }
    }
    None
}

pub fn read_rules(name: &str) -> Result<Vec<RuleRecord>, RulesError> {
    let path = find_rules_file(name).ok_or_else(|| RulesError::Io {
        path: name.to_string(),
        msg: format!("not found here or in ${}", KABATDIR),
    })?;
    info!("reading canonical data from {}", path);
    let f = File::open(&path).map_err(|e| RulesError::Io {
        path: path.clone(),
        msg: e.to_string(),
    })?;
    parse_rules(BufReader::new(f))
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
