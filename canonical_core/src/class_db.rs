// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// The database of canonical class definitions.  Definitions live in an arena and refer to each
// other by ClassId.  Priority and subordinate links are given by class name in the rule data and
// are resolved once, after every definition has been read.  The database is immutable after
// loading, so one instance may be shared by any number of classification runs.

use crate::defs::{ClassDefinition, ClassId, LoopId, Numbering, RuleRecord};
use crate::errors::RulesError;
use itertools::Itertools;
use log::{debug, warn};
use std::ops::Index;
use vector_utils::{next_diff, unique_sort};

#[derive(Clone, Copy, PartialEq)]
enum LinkKind {
    Priority,
    Subordinate,
}

impl LinkKind {
    fn name(&self) -> &'static str {
        match self {
            LinkKind::Priority => "priority",
            LinkKind::Subordinate => "subordinate",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClassDatabase {
    defs: Vec<ClassDefinition>,
    rule_numbering: Numbering,
}

impl ClassDatabase {
    // Build the database from parsed rule records.  Records before the first LOOP that belong to
    // a definition are ignored.  Reference errors are fatal.

    pub fn load(records: &[RuleRecord]) -> Result<ClassDatabase, RulesError> {
        let mut db = ClassDatabase::default();
        let mut links = Vec::<(ClassId, LinkKind, String)>::new();
        for r in records.iter() {
            match r {
                RuleRecord::ChothiaNumbering => {
                    db.rule_numbering = Numbering::Chothia;
                    continue;
                }
                RuleRecord::Loop {
                    loop_id,
                    class_name,
                    length,
                } => {
                    db.defs.push(ClassDefinition {
                        loop_id: *loop_id,
                        class_name: class_name.clone(),
                        length: *length,
                        key_positions: Vec::new(),
                        source: String::new(),
                        priority_over: None,
                        subordinate_to: None,
                    });
                    continue;
                }
                _ => {}
            }
            if db.defs.is_empty() {
                warn!("ignoring canonical data record before first LOOP: {:?}", r);
                continue;
            }
            let id = ClassId(db.defs.len() - 1);
            let (kind, target) = match r {
                RuleRecord::Source(s) => {
                    db.defs[id.0].source = s.clone();
                    continue;
                }
                RuleRecord::Key(kp) => {
                    db.defs[id.0].key_positions.push(kp.clone());
                    continue;
                }
                RuleRecord::Priority(target) => (LinkKind::Priority, target),
                RuleRecord::Subordinate(target) => (LinkKind::Subordinate, target),
                RuleRecord::ChothiaNumbering | RuleRecord::Loop { .. } => continue,
            };
            if links.iter().any(|(i, k, _)| *i == id && *k == kind) {
                let d = &db.defs[id.0];
                return Err(RulesError::DuplicateReference {
                    kind: kind.name(),
                    loop_id: d.loop_id,
                    class_name: d.class_name.clone(),
                });
            }
            links.push((id, kind, target.clone()));
        }
        for (id, kind, target) in links.iter() {
            let to = db.resolve(*id, *kind, target)?;
            match kind {
                LinkKind::Priority => db.defs[id.0].priority_over = Some(to),
                LinkKind::Subordinate => db.defs[id.0].subordinate_to = Some(to),
            }
        }
        db.check_acyclic()?;
        db.warn_duplicate_names();
        debug!(
            "loaded {} canonical definitions ({} numbering): {}",
            db.defs.len(),
            db.rule_numbering,
            db.defs
                .iter()
                .map(|d| format!("{}/{}", d.loop_id, d.class_name))
                .format(" ")
        );
        Ok(db)
    }

    // Find the unique other definition of the same loop with the given class name, and check
    // that it has the same length.

    fn resolve(&self, id: ClassId, kind: LinkKind, target: &str) -> Result<ClassId, RulesError> {
        let from = &self[id];
        let hits = (0..self.defs.len())
            .filter(|&j| {
                j != id.0 && self.defs[j].loop_id == from.loop_id && self.defs[j].class_name == target
            })
            .collect::<Vec<usize>>();
        if hits.is_empty() {
            return Err(RulesError::UnresolvedReference {
                kind: kind.name(),
                loop_id: from.loop_id,
                class_name: from.class_name.clone(),
                target: target.to_string(),
            });
        }
        if hits.len() > 1 {
            return Err(RulesError::AmbiguousReference {
                kind: kind.name(),
                loop_id: from.loop_id,
                class_name: from.class_name.clone(),
                target: target.to_string(),
                count: hits.len(),
            });
        }
        let to = &self.defs[hits[0]];
        if to.length != from.length {
            return Err(RulesError::LengthMismatch {
                kind: kind.name(),
                loop_id: from.loop_id,
                class_name: from.class_name.clone(),
                length: from.length,
                target: target.to_string(),
                target_length: to.length,
            });
        }
        Ok(ClassId(hits[0]))
    }

    // Chains are walked to their ends during classification, so a cycle would never terminate.

    fn check_acyclic(&self) -> Result<(), RulesError> {
        let n = self.defs.len();
        let steps: [fn(&ClassDefinition) -> Option<ClassId>; 2] =
            [|d| d.subordinate_to, |d| d.priority_over];
        for i in 0..n {
            for step in steps.iter() {
                let mut p = ClassId(i);
                let mut count = 0;
                while let Some(next) = step(&self[p]) {
                    count += 1;
                    if count > n {
                        return Err(RulesError::CyclicChain {
                            loop_id: self.defs[i].loop_id,
                            class_name: self.defs[i].class_name.clone(),
                        });
                    }
                    p = next;
                }
            }
        }
        Ok(())
    }

    // Class names are expected to be unique for a given loop and length, but nothing depends on
    // it, so duplicates only draw a warning.

    fn warn_duplicate_names(&self) {
        let mut names = self
            .defs
            .iter()
            .map(|d| (d.loop_id, d.length, d.class_name.clone()))
            .collect::<Vec<_>>();
        names.sort();
        let mut i = 0;
        while i < names.len() {
            let j = next_diff(&names, i);
            if j - i > 1 {
                warn!(
                    "canonical class {} {} (length {}) is defined {} times",
                    names[i].0,
                    names[i].2,
                    names[i].1,
                    j - i
                );
            }
            i = j;
        }
    }

    pub fn rule_numbering(&self) -> Numbering {
        self.rule_numbering
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.defs.get(id.0)
    }

    // Definitions for a loop, in rule file order.  Length is not filtered here: the
    // classifier tests the length of whichever definition it reaches, including chain members.

    pub fn candidates_for(&self, loop_id: LoopId) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.defs.len())
            .filter(move |&i| self.defs[i].loop_id == loop_id)
            .map(ClassId)
    }

    pub fn find(&self, loop_id: LoopId, class_name: &str) -> Option<ClassId> {
        self.candidates_for(loop_id)
            .find(|&id| self[id].class_name == class_name)
    }

    // Distinct loop lengths defined for a loop.

    pub fn lengths_for(&self, loop_id: LoopId) -> Vec<i32> {
        let mut lens = self
            .candidates_for(loop_id)
            .map(|id| self[id].length)
            .collect::<Vec<i32>>();
        unique_sort(&mut lens);
        lens
    }
}

impl Index<ClassId> for ClassDatabase {
    type Output = ClassDefinition;

    fn index(&self, id: ClassId) -> &ClassDefinition {
        &self.defs[id.0]
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
