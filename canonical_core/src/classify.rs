// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Assignment of a canonical class to one loop.
//
// Candidates are the definitions for the loop, taken in rule file order.  The first one whose
// length equals the observed length and whose key positions are all satisfied wins.  Failing
// that, the applicable candidate with the fewest mismatches is reported, first seen winning ties.
//
// Priority chains.  If class A is SUBORDINATE to B (and B has PRIORITY over A), then when both
// match, B is reported.  Only the low end of a chain, a definition that is subordinate to
// something but has priority over nothing, starts chain evaluation: we climb to the top of the
// chain, then walk down it, and the first exact match wins.  If nothing in the chain matches,
// the low end is the candidate.  Definitions having priority over something are never tested
// on their own.  In particular a chain member that is not reachable from a low end is never
// tested.

use crate::class_db::ClassDatabase;
use crate::defs::{Cdr1Context, ClassId, LoopId, Numbering, NOT_APPLICABLE};
use crate::numbering::NumberingTranslator;
use crate::residue_index::ResidueIndex;
use log::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MismatchDetail {
    // The position could not be found in the sequence.
    Deleted {
        label: String,        // as given in the rule data
        lookup_label: String, // as looked up in the sequence
        numbering: Numbering, // numbering of lookup_label
    },
    // The residue at the position is not allowed.
    Disallowed {
        label: String,
        observed: u8,
        allowed: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestCandidate {
    pub class: ClassId,
    pub class_name: String,
    pub mismatches: usize,
    pub details: Vec<MismatchDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Matched {
        class: ClassId,
        class_name: String,
        source: String,
    },
    // best is None if no definition of the observed length exists for the loop
    Unmatched { best: Option<BestCandidate> },
}

impl Classification {
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Classification::Matched { class_name, .. } => Some(class_name),
            Classification::Unmatched { .. } => None,
        }
    }
}

pub struct Classifier<'a> {
    db: &'a ClassDatabase,
    index: &'a ResidueIndex,
    translator: &'a dyn NumberingTranslator,
}

impl<'a> Classifier<'a> {
    pub fn new(
        db: &'a ClassDatabase,
        index: &'a ResidueIndex,
        translator: &'a dyn NumberingTranslator,
    ) -> Classifier<'a> {
        Classifier {
            db,
            index,
            translator,
        }
    }

    // Convert a rule label to the numbering of the sequence.

    pub fn lookup_label(&self, label: &str, cdr1: Option<Cdr1Context>) -> String {
        let rule = self.db.rule_numbering();
        if rule == self.index.numbering() {
            return label.to_string();
        }
        let c = match cdr1 {
            Some(c) => c,
            None => {
                debug!("CDR1 length unknown, using {} label {} untranslated", rule, label);
                return label.to_string();
            }
        };
        match rule {
            Numbering::Kabat => self.translator.kabat_to_chothia(c.loop_id, c.length, label),
            Numbering::Chothia => self.translator.chothia_to_kabat(c.loop_id, c.length, label),
        }
    }

    // Count the key positions of a definition that are not satisfied by the sequence.  A position
    // that cannot be found counts the same as one holding a disallowed residue.  The count starts
    // at NOT_APPLICABLE unless the definition is for this loop and length.

    pub fn test_candidate(
        &self,
        id: ClassId,
        loop_id: LoopId,
        observed_len: i32,
        cdr1: Option<Cdr1Context>,
    ) -> usize {
        let d = &self.db[id];
        let mut mismatches = if d.loop_id == loop_id && d.length == observed_len {
            0
        } else {
            NOT_APPLICABLE
        };
        for kp in d.key_positions.iter() {
            let label = self.lookup_label(&kp.label, cdr1);
            match self.index.residue_at(&label) {
                Some(aa) if kp.allows(aa) => {}
                _ => mismatches += 1,
            }
        }
        mismatches
    }

    // Evaluate the chain whose low end is start.  Returns the definition to report and its
    // mismatch count.

    fn resolve_chain(
        &self,
        start: ClassId,
        loop_id: LoopId,
        observed_len: i32,
        cdr1: Option<Cdr1Context>,
    ) -> (ClassId, usize) {
        let mut top = start;
        while let Some(up) = self.db[top].subordinate_to {
            top = up;
        }
        let mut start_mismatches = None;
        let mut p = Some(top);
        while let Some(id) = p {
            let n = self.test_candidate(id, loop_id, observed_len, cdr1);
            if n == 0 {
                return (id, 0);
            }
            if id == start {
                start_mismatches = Some(n);
            }
            p = self.db[id].priority_over;
        }
        let n = match start_mismatches {
            Some(n) => n,
            None => self.test_candidate(start, loop_id, observed_len, cdr1),
        };
        (start, n)
    }

    pub fn classify(
        &self,
        loop_id: LoopId,
        observed_len: i32,
        cdr1: Option<Cdr1Context>,
    ) -> Classification {
        let mut best: Option<(ClassId, usize)> = None;
        let mut min_mismatches = NOT_APPLICABLE;
        for id in self.db.candidates_for(loop_id) {
            let d = &self.db[id];
            if d.priority_over.is_some() {
                continue;
            }
            let (tested, n) = if d.subordinate_to.is_some() {
                self.resolve_chain(id, loop_id, observed_len, cdr1)
            } else {
                (id, self.test_candidate(id, loop_id, observed_len, cdr1))
            };
            if n == 0 {
                let t = &self.db[tested];
                return Classification::Matched {
                    class: tested,
                    class_name: t.class_name.clone(),
                    source: t.source.clone(),
                };
            }
            if n < min_mismatches {
                min_mismatches = n;
                best = Some((tested, n));
            }
        }
        let best = best.map(|(id, n)| BestCandidate {
            class: id,
            class_name: self.db[id].class_name.clone(),
            mismatches: n,
            details: self.mismatch_details(id, cdr1),
        });
        Classification::Unmatched { best }
    }

    // The unsatisfied key positions of a definition, in rule file order.

    pub fn mismatch_details(&self, id: ClassId, cdr1: Option<Cdr1Context>) -> Vec<MismatchDetail> {
        let mut details = Vec::<MismatchDetail>::new();
        for kp in self.db[id].key_positions.iter() {
            let lookup_label = self.lookup_label(&kp.label, cdr1);
            match self.index.residue_at(&lookup_label) {
                None => details.push(MismatchDetail::Deleted {
                    label: kp.label.clone(),
                    lookup_label,
                    numbering: self.index.numbering(),
                }),
                Some(aa) if !kp.allows(aa) => details.push(MismatchDetail::Disallowed {
                    label: kp.label.clone(),
                    observed: aa,
                    allowed: kp.allowed.clone(),
                }),
                Some(_) => {}
            }
        }
        details
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
