// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

use crate::defs::LoopId;
use thiserror::Error;

// Errors in the canonical rule data.  All of these are fatal: nothing is classified against a
// database that failed to load.

#[derive(Debug, Error, PartialEq)]
pub enum RulesError {
    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error(
        "class {loop_id} {class_name} has more than {max} key residues (line {line})"
    )]
    TooManyKeyResidues {
        loop_id: LoopId,
        class_name: String,
        max: usize,
        line: usize,
    },

    #[error("{kind} reference from class {loop_id} {class_name} to {target} matches no class")]
    UnresolvedReference {
        kind: &'static str,
        loop_id: LoopId,
        class_name: String,
        target: String,
    },

    #[error(
        "{kind} reference from class {loop_id} {class_name} to {target} is ambiguous, \
         {count} classes have that name"
    )]
    AmbiguousReference {
        kind: &'static str,
        loop_id: LoopId,
        class_name: String,
        target: String,
        count: usize,
    },

    #[error(
        "{kind} reference from class {loop_id} {class_name} (length {length}) to {target} \
         (length {target_length}): lengths differ"
    )]
    LengthMismatch {
        kind: &'static str,
        loop_id: LoopId,
        class_name: String,
        length: i32,
        target: String,
        target_length: i32,
    },

    #[error("class {loop_id} {class_name} has more than one {kind} reference")]
    DuplicateReference {
        kind: &'static str,
        loop_id: LoopId,
        class_name: String,
    },

    #[error("priority chain through class {loop_id} {class_name} is cyclic")]
    CyclicChain { loop_id: LoopId, class_name: String },

    #[error("unable to read canonical data file {path}: {msg}")]
    Io { path: String, msg: String },
}

// Errors in an input sequence.

#[derive(Debug, Error, PartialEq)]
pub enum SequenceError {
    #[error("Error in input data, line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("Error in input data: no residues found")]
    Empty,

    #[error("unable to read sequence {path}: {msg}")]
    Io { path: String, msg: String },
}
