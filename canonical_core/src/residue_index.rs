// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// A numbered sequence, as an ordered list of (position label, residue) pairs, for example
// ("H35A", b'S').  Labels start with the chain identifier (L or H), then the position number,
// then an optional insertion letter.

use crate::defs::{Numbering, DELETED_LABEL};
use string_utils::strme;

#[derive(Clone, Debug, Default)]
pub struct ResidueIndex {
    residues: Vec<(String, u8)>,
    numbering: Numbering, // numbering scheme of the labels
}

// Truncate a label at its insertion letter, if it has one.  The first character is the chain
// identifier and is never treated as an insertion letter.

fn strip_insertion(label: &[u8]) -> &[u8] {
    match insertion_pos(label) {
        Some(p) => &label[..p],
        None => label,
    }
}

fn insertion_pos(label: &[u8]) -> Option<usize> {
    (1..label.len()).find(|&i| label[i].is_ascii_alphabetic())
}

impl ResidueIndex {
    pub fn new(residues: Vec<(String, u8)>, numbering: Numbering) -> ResidueIndex {
        ResidueIndex {
            residues,
            numbering,
        }
    }

    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn label(&self, i: usize) -> &str {
        &self.residues[i].0
    }

    pub fn residue(&self, i: usize) -> u8 {
        self.residues[i].1
    }

    fn exact(&self, label: &str) -> Option<usize> {
        self.residues.iter().position(|(l, _)| l == label)
    }

    // Find the index of the residue having a given label.  If there is no exact match and the
    // label has an insertion letter, step the letter down (xxC, xxB, xxA) and retry, on the
    // assumption that a missing inserted residue is represented by an earlier one.  Failing
    // that, match the label without its insertion letter against sequence labels without theirs.
    // Labels starting with "---" denote deleted positions and are never found.

    pub fn locate(&self, label: &str) -> Option<usize> {
        if label.starts_with(DELETED_LABEL) {
            return None;
        }
        if let Some(i) = self.exact(label) {
            return Some(i);
        }
        let b = label.as_bytes();
        let ins = insertion_pos(b)?;
        let floor = if b[ins].is_ascii_lowercase() {
            b'a'
        } else {
            b'A'
        };
        let mut x = b.to_vec();
        while x[ins] > floor {
            x[ins] -= 1;
            if let Some(i) = self.exact(strme(&x)) {
                return Some(i);
            }
        }
        let stem = &b[..ins];
        self.residues
            .iter()
            .position(|(l, _)| strip_insertion(l.as_bytes()) == stem)
    }

    pub fn residue_at(&self, label: &str) -> Option<u8> {
        self.locate(label).map(|i| self.residue(i))
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
