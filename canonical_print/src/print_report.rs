// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Print canonical class assignments, one line per loop, e.g.
//
// CDR L1  Class 2   Chothia et al. (1989)
// CDR L2  Class 1
// CDR L3  Class ?
// ! Similar to class 1, but:
// !    L90 = W (allows: QNH)
// CDR H1  Missing Residues
//
// The "!" lines and source notes appear only in verbose mode.

use canonical_core::assign::{LoopOutcome, LoopReport};
use canonical_core::classify::{Classification, MismatchDetail};
use io_utils::*;
use std::io::Write;

pub fn mismatch_text(d: &MismatchDetail) -> String {
    match d {
        MismatchDetail::Disallowed {
            label,
            observed,
            allowed,
        } => format!("{} = {} (allows: {})", label, *observed as char, allowed),
        MismatchDetail::Deleted {
            label,
            lookup_label,
            numbering,
        } => {
            if label == lookup_label {
                format!("{} is deleted ({} numbering)", label, numbering)
            } else {
                format!(
                    "{} is deleted ({} numbering, looked up as {})",
                    label, numbering, lookup_label
                )
            }
        }
    }
}

pub fn print_report(log: &mut Vec<u8>, reports: &[LoopReport], verbose: bool) {
    for r in reports.iter() {
        match &r.outcome {
            LoopOutcome::MissingResidues { .. } => {
                fwriteln!(log, "CDR {}  Missing Residues", r.loop_id);
            }
            LoopOutcome::Classified {
                classification: Classification::Matched {
                    class_name, source, ..
                },
                ..
            } => {
                fwrite!(log, "CDR {}  Class {:<3}", r.loop_id, class_name);
                if verbose && !source.is_empty() {
                    fwrite!(log, " {}", source);
                }
                fwriteln!(log, "");
            }
            LoopOutcome::Classified {
                classification: Classification::Unmatched { best },
                ..
            } => {
                fwriteln!(log, "CDR {}  Class ?  ", r.loop_id);
                if !verbose {
                    continue;
                }
                match best {
                    None => {
                        fwriteln!(log, "! Length mismatch");
                    }
                    Some(b) => {
                        fwriteln!(log, "! Similar to class {}, but:", b.class_name);
                        for d in b.details.iter() {
                            fwriteln!(log, "!    {}", mismatch_text(d));
                        }
                    }
                }
            }
        }
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

#[cfg(test)]
mod tests {
    use super::*;
    use canonical_core::classify::BestCandidate;
    use canonical_core::defs::{ClassId, LoopId, Numbering};
    use pretty_trace::*;
    use string_utils::strme;

    fn reports() -> Vec<LoopReport> {
        vec![
            LoopReport {
                loop_id: LoopId::L1,
                outcome: LoopOutcome::Classified {
                    length: 11,
                    classification: Classification::Matched {
                        class: ClassId(0),
                        class_name: "2".to_string(),
                        source: "Chothia et al. (1989)".to_string(),
                    },
                },
            },
            LoopReport {
                loop_id: LoopId::L2,
                outcome: LoopOutcome::Classified {
                    length: 8,
                    classification: Classification::Unmatched { best: None },
                },
            },
            LoopReport {
                loop_id: LoopId::H1,
                outcome: LoopOutcome::MissingResidues { label: "H26" },
            },
            LoopReport {
                loop_id: LoopId::H3,
                outcome: LoopOutcome::Classified {
                    length: 5,
                    classification: Classification::Unmatched {
                        best: Some(BestCandidate {
                            class: ClassId(3),
                            class_name: "h3a".to_string(),
                            mismatches: 2,
                            details: vec![
                                MismatchDetail::Disallowed {
                                    label: "H101".to_string(),
                                    observed: b'K',
                                    allowed: "AG".to_string(),
                                },
                                MismatchDetail::Deleted {
                                    label: "H31A".to_string(),
                                    lookup_label: "H32".to_string(),
                                    numbering: Numbering::Kabat,
                                },
                            ],
                        }),
                    },
                },
            },
        ]
    }

    #[test]
    fn test_print_report() {
        PrettyTrace::new().on();
        let mut log = Vec::<u8>::new();
        print_report(&mut log, &reports(), false);
        assert_eq!(
            strme(&log),
            "CDR L1  Class 2  \n\
             CDR L2  Class ?  \n\
             CDR H1  Missing Residues\n\
             CDR H3  Class ?  \n"
        );
        let mut log = Vec::<u8>::new();
        print_report(&mut log, &reports(), true);
        assert_eq!(
            strme(&log),
            "CDR L1  Class 2   Chothia et al. (1989)\n\
             CDR L2  Class ?  \n\
             ! Length mismatch\n\
             CDR H1  Missing Residues\n\
             CDR H3  Class ?  \n\
             ! Similar to class h3a, but:\n\
             !    H101 = K (allows: AG)\n\
             !    H31A is deleted (Kabat numbering, looked up as H32)\n"
        );
    }
}
