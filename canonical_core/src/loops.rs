// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

use crate::defs::{loop_boundary, LoopBoundary, LoopId};
use crate::residue_index::ResidueIndex;

// Outcome of measuring a loop: its length, or the first boundary label that could not be found.
// The length is 1 + stop - start and is not checked; a nonpositive length simply matches no
// class.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoopLength {
    Length(i32),
    MissingResidue(&'static str),
}

pub fn loop_length(b: &LoopBoundary, index: &ResidueIndex) -> LoopLength {
    let start = match index.locate(b.start) {
        Some(i) => i as i32,
        None => return LoopLength::MissingResidue(b.start),
    };
    let stop = match index.locate(b.stop) {
        Some(i) => i as i32,
        None => return LoopLength::MissingResidue(b.stop),
    };
    LoopLength::Length(1 + stop - start)
}

pub fn loop_length_of(loop_id: LoopId, index: &ResidueIndex) -> LoopLength {
    loop_length(loop_boundary(loop_id), index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::Numbering;

    fn index(labels: &[&str]) -> ResidueIndex {
        ResidueIndex::new(
            labels.iter().map(|l| (l.to_string(), b'A')).collect(),
            Numbering::Kabat,
        )
    }

    #[test]
    fn test_loop_length() {
        let x = index(&[
            "H25", "H26", "H27", "H28", "H29", "H30", "H31", "H32", "H33", "H34", "H35", "H35A",
            "H36",
        ]);
        assert_eq!(loop_length_of(LoopId::H1, &x), LoopLength::Length(11));
        let y = index(&["H27", "H28", "H35"]);
        assert_eq!(
            loop_length_of(LoopId::H1, &y),
            LoopLength::MissingResidue("H26")
        );
        assert_eq!(
            loop_length_of(LoopId::L2, &y),
            LoopLength::MissingResidue("L50")
        );
    }

    // Chothia numbering has no H35B; the H1 stop falls back to H35, so the two insertions
    // after H31 are counted.

    #[test]
    fn test_h1_length_in_chothia_numbering() {
        let x = ResidueIndex::new(
            [
                "H25", "H26", "H27", "H28", "H29", "H30", "H31", "H31A", "H31B", "H32", "H33",
                "H34", "H35", "H36",
            ]
            .iter()
            .map(|l| (l.to_string(), b'A'))
            .collect(),
            Numbering::Chothia,
        );
        assert_eq!(loop_length_of(LoopId::H1, &x), LoopLength::Length(12));
    }

    #[test]
    fn test_reversed_boundaries_pass_through() {
        let x = index(&["H102", "H100", "H95"]);
        assert_eq!(loop_length_of(LoopId::H3, &x), LoopLength::Length(-1));
    }
}
