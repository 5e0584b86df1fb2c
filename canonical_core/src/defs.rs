// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

use std::fmt;

// Mismatch count assigned to a definition whose loop or length does not apply.  Any count at or
// above this value means "not a candidate".

pub const NOT_APPLICABLE: usize = 10_000;

// Limits on rule and sequence data.  These were fixed buffer sizes once; now exceeding them is
// reported as an error rather than truncated.

pub const MAX_KEY_RESIDUES: usize = 80;
pub const MAX_LABEL_LEN: usize = 7;

// Label prefix marking a position that does not exist, e.g. the output of a numbering
// translation for an insertion that this loop length does not have.

pub const DELETED_LABEL: &str = "---";

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoopId {
    L1,
    L2,
    L3,
    H1,
    H2,
    H3,
}

impl LoopId {
    pub const ALL: [LoopId; 6] = [
        LoopId::L1,
        LoopId::L2,
        LoopId::L3,
        LoopId::H1,
        LoopId::H2,
        LoopId::H3,
    ];

    pub fn parse(s: &str) -> Option<LoopId> {
        match s.to_ascii_uppercase().as_str() {
            "L1" => Some(LoopId::L1),
            "L2" => Some(LoopId::L2),
            "L3" => Some(LoopId::L3),
            "H1" => Some(LoopId::H1),
            "H2" => Some(LoopId::H2),
            "H3" => Some(LoopId::H3),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoopId::L1 => "L1",
            LoopId::L2 => "L2",
            LoopId::L3 => "L3",
            LoopId::H1 => "H1",
            LoopId::H2 => "H2",
            LoopId::H3 => "H3",
        }
    }

    // Chain identifier, which is also the first character of every position label on the chain.

    pub fn chain(&self) -> u8 {
        match self {
            LoopId::L1 | LoopId::L2 | LoopId::L3 => b'L',
            LoopId::H1 | LoopId::H2 | LoopId::H3 => b'H',
        }
    }

    // The first CDR of the same chain.

    pub fn cdr1(&self) -> LoopId {
        match self.chain() {
            b'L' => LoopId::L1,
            _ => LoopId::H1,
        }
    }
}

impl fmt::Display for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Numbering {
    Kabat,
    Chothia,
}

impl Default for Numbering {
    fn default() -> Self {
        Numbering::Kabat
    }
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Numbering::Kabat => write!(f, "Kabat"),
            Numbering::Chothia => write!(f, "Chothia"),
        }
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// Boundary labels of the six loops, in Kabat numbering.  All but H35B sit outside the regions
// where Kabat and Chothia numbering differ.  H35B is a Kabat insertion inside CDR-H1 and does
// not exist in Chothia numbering; for Chothia input it is found through the insertion
// fallbacks of ResidueIndex::locate, which land on H35, the last residue of the loop in that
// scheme.

pub struct LoopBoundary {
    pub loop_id: LoopId,
    pub start: &'static str,
    pub stop: &'static str,
}

pub const LOOP_BOUNDARIES: [LoopBoundary; 6] = [
    LoopBoundary {
        loop_id: LoopId::L1,
        start: "L24",
        stop: "L34",
    },
    LoopBoundary {
        loop_id: LoopId::L2,
        start: "L50",
        stop: "L56",
    },
    LoopBoundary {
        loop_id: LoopId::L3,
        start: "L89",
        stop: "L97",
    },
    LoopBoundary {
        loop_id: LoopId::H1,
        start: "H26",
        stop: "H35B",
    },
    LoopBoundary {
        loop_id: LoopId::H2,
        start: "H50",
        stop: "H58",
    },
    LoopBoundary {
        loop_id: LoopId::H3,
        start: "H95",
        stop: "H102",
    },
];

pub fn loop_boundary(loop_id: LoopId) -> &'static LoopBoundary {
    let i = match loop_id {
        LoopId::L1 => 0,
        LoopId::L2 => 1,
        LoopId::L3 => 2,
        LoopId::H1 => 3,
        LoopId::H2 => 4,
        LoopId::H3 => 5,
    };
    &LOOP_BOUNDARIES[i]
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// A key position and the residues allowed there, e.g. ("H101", "AG").  The allowed set is kept
// as written in the rule file so that it can be echoed back in explanations.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPosition {
    pub label: String,
    pub allowed: String,
}

impl KeyPosition {
    pub fn new(label: &str, allowed: &str) -> KeyPosition {
        KeyPosition {
            label: label.to_string(),
            allowed: allowed.to_string(),
        }
    }

    pub fn allows(&self, aa: u8) -> bool {
        self.allowed.as_bytes().contains(&aa)
    }
}

// Index of a definition in the database arena.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDefinition {
    pub loop_id: LoopId,
    pub class_name: String,
    pub length: i32,
    pub key_positions: Vec<KeyPosition>, // in rule file order
    pub source: String,                  // provenance note, may be empty
    pub priority_over: Option<ClassId>,  // outranks this one when both match
    pub subordinate_to: Option<ClassId>, // is outranked by this one
}

// One parsed line of a rule file, in file order.

#[derive(Clone, Debug, PartialEq)]
pub enum RuleRecord {
    ChothiaNumbering,
    Loop {
        loop_id: LoopId,
        class_name: String,
        length: i32,
    },
    Source(String),
    Priority(String),
    Subordinate(String),
    Key(KeyPosition),
}

// Length of the first CDR on a chain, needed to translate labels between numbering schemes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cdr1Context {
    pub loop_id: LoopId,
    pub length: i32,
}
