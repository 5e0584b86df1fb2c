// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Assignment of antibody CDR loops to canonical structural classes.

pub mod assign;
pub mod class_db;
pub mod classify;
pub mod defs;
pub mod errors;
pub mod loops;
pub mod numbering;
pub mod residue_index;
