// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Load the canonical class data, then classify the loops of each input sequence.  Inputs are
// processed in parallel but reported in the order given.

use crate::proc_args::{proc_args, CanonicalControl, USAGE};
use canonical_core::assign::assign_canonicals;
use canonical_core::class_db::ClassDatabase;
use canonical_core::defs::LoopId;
use canonical_core::numbering::StandardNumbering;
use canonical_core::residue_index::ResidueIndex;
use canonical_io::read_rules::read_rules;
use canonical_io::read_seq::{parse_sequence, read_sequence};
use canonical_print::print_report::print_report;
use io_utils::*;
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};

fn classify_one(ctl: &CanonicalControl, db: &ClassDatabase, index: &ResidueIndex) -> Vec<u8> {
    let reports = assign_canonicals(db, index, &StandardNumbering);
    let mut log = Vec::<u8>::new();
    print_report(&mut log, &reports, ctl.verbose);
    log
}

fn write_output(ctl: &CanonicalControl, logs: &[Vec<u8>]) -> Result<(), String> {
    let res = match &ctl.output {
        Some(f) => File::create(f).and_then(|mut out| {
            for log in logs.iter() {
                out.write_all(log)?;
            }
            Ok(())
        }),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            logs.iter().try_for_each(|log| out.write_all(log))
        }
    };
    res.map_err(|e| {
        format!(
            "\nUnable to write output to {}: {}.\n",
            ctl.output.as_deref().unwrap_or("standard output"),
            e
        )
    })
}

pub fn main_canonical(args: &[String]) -> Result<(), String> {
    let mut ctl = CanonicalControl::default();
    proc_args(&mut ctl, args)?;
    if ctl.help {
        print!("{}", USAGE);
        return Ok(());
    }
    if ctl.version {
        println!("canonical {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load the class data.  Any problem here stops the run before anything is classified.

    let records =
        read_rules(&ctl.rules_file).map_err(|e| format!("\n{}: {}.\n", ctl.rules_file, e))?;
    let db = ClassDatabase::load(&records)
        .map_err(|e| format!("\nMalformed canonical data in {}: {}.\n", ctl.rules_file, e))?;
    info!(
        "{} canonical definitions, loop lengths {}",
        db.len(),
        LoopId::ALL
            .iter()
            .map(|l| format!("{}:{}", l, db.lengths_for(*l).iter().format("/")))
            .format(" ")
    );

    // Classify.

    let mut logs = Vec::<Vec<u8>>::new();
    if ctl.inputs.is_empty() {
        let stdin = io::stdin();
        let index = parse_sequence(stdin.lock(), ctl.input_numbering)
            .map_err(|e| format!("\nstandard input: {}.\n", e))?;
        logs.push(classify_one(&ctl, &db, &index));
    } else {
        let results = ctl
            .inputs
            .par_iter()
            .map(|f| {
                let index = read_sequence(f, ctl.input_numbering)
                    .map_err(|e| format!("\n{}: {}.\n", f, e))?;
                let mut log = Vec::<u8>::new();
                if ctl.inputs.len() > 1 {
                    fwriteln!(log, "# {}", f);
                }
                log.append(&mut classify_one(&ctl, &db, &index));
                Ok(log)
            })
            .collect::<Vec<Result<Vec<u8>, String>>>();
        for r in results {
            logs.push(r?);
        }
    }
    write_output(&ctl, &logs)
}
