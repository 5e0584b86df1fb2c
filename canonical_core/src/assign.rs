// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Assign canonical classes to all six loops of a sequence.

use crate::class_db::ClassDatabase;
use crate::classify::{Classification, Classifier};
use crate::defs::{Cdr1Context, LoopId, LOOP_BOUNDARIES};
use crate::loops::{loop_length, LoopLength};
use crate::numbering::NumberingTranslator;
use crate::residue_index::ResidueIndex;
use log::warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    // A boundary residue of the loop is missing, so the loop was not classified.
    MissingResidues { label: &'static str },
    Classified {
        length: i32,
        classification: Classification,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopReport {
    pub loop_id: LoopId,
    pub outcome: LoopOutcome,
}

pub fn assign_canonicals(
    db: &ClassDatabase,
    index: &ResidueIndex,
    translator: &dyn NumberingTranslator,
) -> Vec<LoopReport> {
    let lengths = LOOP_BOUNDARIES
        .iter()
        .map(|b| (b.loop_id, loop_length(b, index)))
        .collect::<Vec<_>>();
    let cdr1_context = |loop_id: LoopId| {
        let cdr1 = loop_id.cdr1();
        lengths.iter().find_map(|(l, len)| match len {
            LoopLength::Length(n) if *l == cdr1 => Some(Cdr1Context {
                loop_id: cdr1,
                length: *n,
            }),
            _ => None,
        })
    };
    let classifier = Classifier::new(db, index, translator);
    let mut reports = Vec::<LoopReport>::new();
    for (loop_id, len) in lengths.iter() {
        let outcome = match len {
            LoopLength::MissingResidue(label) => {
                warn!("Unable to find residue {} in input", label);
                LoopOutcome::MissingResidues { label: *label }
            }
            LoopLength::Length(n) => {
                let cdr1 = cdr1_context(*loop_id);
                if cdr1.is_none() && db.rule_numbering() != index.numbering() {
                    warn!(
                        "CDR {} length unknown, so {} labels are used untranslated for CDR {}",
                        loop_id.cdr1(),
                        db.rule_numbering(),
                        loop_id
                    );
                }
                LoopOutcome::Classified {
                    length: *n,
                    classification: classifier.classify(*loop_id, *n, cdr1),
                }
            }
        };
        reports.push(LoopReport {
            loop_id: *loop_id,
            outcome,
        });
    }
    reports
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
