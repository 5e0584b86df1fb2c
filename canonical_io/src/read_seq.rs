// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Read a numbered antibody sequence.  Residue lines look like
//
// L24 R
// H35A SER
//
// i.e. a position label starting with L or H and a digit, followed by a one- or three-letter
// amino acid code.  Other lines are ignored.  A residue starting with - marks a position that is
// absent from the sequence.

use crate::amino3::aa3_to_aa1;
use canonical_core::defs::{Numbering, MAX_LABEL_LEN};
use canonical_core::errors::SequenceError;
use canonical_core::residue_index::ResidueIndex;
use std::fs::File;
use std::io::{BufRead, BufReader};

fn is_residue_line(line: &str) -> bool {
    let b = line.as_bytes();
    b.len() >= 2 && (b[0] == b'L' || b[0] == b'H') && b[1].is_ascii_digit()
}

pub fn parse_sequence<R: BufRead>(
    r: R,
    numbering: Numbering,
) -> Result<ResidueIndex, SequenceError> {
    let mut residues = Vec::<(String, u8)>::new();
    for (i, line) in r.lines().enumerate() {
        let lnum = i + 1;
        let line = line.map_err(|e| SequenceError::Syntax {
            line: lnum,
            msg: e.to_string(),
        })?;
        if !is_residue_line(&line) {
            continue;
        }
        let syntax = |msg: String| SequenceError::Syntax { line: lnum, msg };
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        let label = fields[0];
        if label.len() > MAX_LABEL_LEN {
            return Err(syntax(format!(
                "residue label {} is longer than {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if fields.len() < 2 {
            return Err(syntax(format!("no residue given for {}", label)));
        }
        let res = fields[1];
        if res.starts_with('-') {
            continue;
        }
        let aa = match res.len() {
            1 => res.as_bytes()[0].to_ascii_uppercase(),
            3 => aa3_to_aa1(res)
                .ok_or_else(|| syntax(format!("unknown amino acid {} at {}", res, label)))?,
            _ => {
                return Err(syntax(format!(
                    "amino acid {} at {} is not a one- or three-letter code",
                    res, label
                )))
            }
        };
        if !aa.is_ascii_alphabetic() {
            return Err(syntax(format!("unknown amino acid {} at {}", res, label)));
        }
        residues.push((label.to_string(), aa));
    }
    if residues.is_empty() {
        return Err(SequenceError::Empty);
    }
    Ok(ResidueIndex::new(residues, numbering))
}

pub fn read_sequence(path: &str, numbering: Numbering) -> Result<ResidueIndex, SequenceError> {
    let f = File::open(path).map_err(|e| SequenceError::Io {
        path: path.to_string(),
        msg: e.to_string(),
    })?;
    parse_sequence(BufReader::new(f), numbering)
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
