// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Translation of position labels between Kabat and Chothia numbering.
//
// The two schemes agree everywhere except in CDR1, where they put insertions at different
// places:
//
//         Kabat insertions   Chothia insertions
// L1      after L27          after L30
// H1      after H35          after H31
//
// So translating a label requires the length of CDR1 on the same chain.  Within the affected
// range, residues are numbered consecutively in both schemes, so the kth residue of the range
// in one scheme is the kth residue in the other.  A label in the range that does not exist for
// the given loop length translates to "---", which marks a deleted position.

use crate::defs::{LoopId, DELETED_LABEL};
use string_utils::strme;

pub trait NumberingTranslator: Send + Sync {
    fn kabat_to_chothia(&self, cdr1: LoopId, cdr1_len: i32, label: &str) -> String;
    fn chothia_to_kabat(&self, cdr1: LoopId, cdr1_len: i32, label: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StandardNumbering;

impl NumberingTranslator for StandardNumbering {
    fn kabat_to_chothia(&self, cdr1: LoopId, cdr1_len: i32, label: &str) -> String {
        match Cdr1Segment::new(cdr1, cdr1_len) {
            Some(seg) => seg.translate(label, seg.kabat_ins, seg.chothia_ins),
            None => label.to_string(),
        }
    }

    fn chothia_to_kabat(&self, cdr1: LoopId, cdr1_len: i32, label: &str) -> String {
        match Cdr1Segment::new(cdr1, cdr1_len) {
            Some(seg) => seg.translate(label, seg.chothia_ins, seg.kabat_ins),
            None => label.to_string(),
        }
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// The CDR1 range of a chain, with k insertions placed after position kabat_ins in Kabat
// numbering and after chothia_ins in Chothia numbering.  Residue i of the range (from 0) is
//
//   first + i              if i <= ins - first
//   ins followed by letter if ins - first < i <= ins - first + k  (A, B, ...)
//   first + i - k          otherwise.

struct Cdr1Segment {
    chain: u8,
    first: usize,
    last: usize,
    k: usize,
    kabat_ins: usize,
    chothia_ins: usize,
}

impl Cdr1Segment {
    fn new(cdr1: LoopId, cdr1_len: i32) -> Option<Cdr1Segment> {
        // (first, last, unlettered length, Kabat insertion point, Chothia insertion point)
        let (first, last, base, kabat_ins, chothia_ins) = match cdr1 {
            LoopId::L1 => (24, 34, 11, 27, 30),
            LoopId::H1 => (26, 35, 10, 35, 31),
            _ => return None,
        };
        let k = cdr1_len - base;
        if k <= 0 || k > 26 {
            return None;
        }
        Some(Cdr1Segment {
            chain: cdr1.chain(),
            first,
            last,
            k: k as usize,
            kabat_ins,
            chothia_ins,
        })
    }

    // Index in the range of position pos with an optional insertion letter, or None if no such
    // residue exists for this loop length.

    fn index_of(&self, pos: usize, letter: Option<u8>, ins: usize) -> Option<usize> {
        match letter {
            None if pos <= ins => Some(pos - self.first),
            None => Some(pos - self.first + self.k),
            Some(c) if pos == ins && c >= b'A' && ((c - b'A') as usize) < self.k => {
                Some(ins - self.first + 1 + (c - b'A') as usize)
            }
            Some(_) => None,
        }
    }

    fn label_at(&self, i: usize, ins: usize) -> String {
        let chain = self.chain as char;
        let n = ins - self.first;
        if i <= n {
            format!("{}{}", chain, self.first + i)
        } else if i <= n + self.k {
            format!("{}{}{}", chain, ins, (b'A' + (i - n - 1) as u8) as char)
        } else {
            format!("{}{}", chain, self.first + i - self.k)
        }
    }

    fn translate(&self, label: &str, from_ins: usize, to_ins: usize) -> String {
        let b = label.as_bytes();
        if b.is_empty() || b[0] != self.chain {
            return label.to_string();
        }
        let mut n = 1;
        while n < b.len() && b[n].is_ascii_digit() {
            n += 1;
        }
        let pos = match strme(&b[1..n]).parse::<usize>() {
            Ok(pos) => pos,
            Err(_) => return label.to_string(),
        };
        if pos < self.first || pos > self.last {
            return label.to_string();
        }
        let letter = match b.len() - n {
            0 => None,
            1 => Some(b[n]),
            _ => return DELETED_LABEL.to_string(),
        };
        if b[1] == b'0' {
            return DELETED_LABEL.to_string();
        }
        match self.index_of(pos, letter, from_ins) {
            Some(i) => self.label_at(i, to_ins),
            None => DELETED_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1() {
        let t = StandardNumbering;
        let k2c = |l: &str| t.kabat_to_chothia(LoopId::L1, 13, l);
        assert_eq!(k2c("L26"), "L26");
        assert_eq!(k2c("L27A"), "L28");
        assert_eq!(k2c("L28"), "L30");
        assert_eq!(k2c("L29"), "L30A");
        assert_eq!(k2c("L30"), "L30B");
        assert_eq!(k2c("L31"), "L31");
        assert_eq!(k2c("L27C"), "---");
        assert_eq!(k2c("L2"), "L2");
        assert_eq!(k2c("L90"), "L90");
        assert_eq!(k2c("H32"), "H32");
        let c2k = |l: &str| t.chothia_to_kabat(LoopId::L1, 13, l);
        assert_eq!(c2k("L30B"), "L30");
        assert_eq!(c2k("L30A"), "L29");
        assert_eq!(c2k("L28"), "L27A");
    }

    #[test]
    fn test_h1() {
        let t = StandardNumbering;
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 12, "H32"), "H31A");
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 12, "H35B"), "H35");
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 12, "H35"), "H33");
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 12, "H52A"), "H52A");
        assert_eq!(t.chothia_to_kabat(LoopId::H1, 12, "H31B"), "H33");
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 11, "H35B"), "---");
    }

    #[test]
    fn test_round_trip() {
        let t = StandardNumbering;
        let segments = [(LoopId::L1, 24, 34, 11), (LoopId::H1, 26, 35, 10)];
        for (cdr1, first, last, base) in segments.iter() {
            for len in base + 1..=base + 6 {
                let mut chothia = Vec::<String>::new();
                for p in *first..=*last {
                    for suffix in ["", "A", "B", "C", "D", "E", "F"].iter() {
                        let label = format!("{}{}{}", cdr1.chain() as char, p, suffix);
                        let c = t.kabat_to_chothia(*cdr1, len, &label);
                        if c != "---" {
                            assert_eq!(t.chothia_to_kabat(*cdr1, len, &c), label);
                            chothia.push(c);
                        }
                    }
                }

                // Every residue of the loop range is accounted for exactly once.

                assert_eq!(chothia.len() as i32, len + (*last - *first + 1) as i32 - base);
                chothia.sort();
                chothia.dedup();
                assert_eq!(chothia.len() as i32, len + (*last - *first + 1) as i32 - base);
            }
        }
    }

    #[test]
    fn test_no_insertions_is_identity() {
        let t = StandardNumbering;
        assert_eq!(t.kabat_to_chothia(LoopId::H1, 10, "H35B"), "H35B");
        assert_eq!(t.kabat_to_chothia(LoopId::L1, 9, "L27"), "L27");
        assert_eq!(t.chothia_to_kabat(LoopId::L2, 13, "L30"), "L30");
    }
}
