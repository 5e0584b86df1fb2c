// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Process command-line arguments.  Arguments are of the form KEY=value or KEY, e.g.
//
// canonical RULES=chothia.dat IN=a.seq,b.seq VERBOSE

use canonical_core::defs::Numbering;
use string_utils::TextUtils;

pub const DEFAULT_RULES: &str = "chothia.dat";

pub const USAGE: &str = "\
usage: canonical [RULES=file] [IN=file1,...] [OUT=file] [VERBOSE] [CHOTHIA_INPUT]

RULES=file     canonical class data (default chothia.dat, also looked for in $KABATDIR)
IN=f1,f2,...   numbered sequence files (default: standard input)
OUT=file       write the report here (default: standard output)
VERBOSE        explain why loops are unassigned and print class sources
CHOTHIA_INPUT  the input sequences use Chothia rather than Kabat numbering
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalControl {
    pub rules_file: String,         // canonical class data file
    pub inputs: Vec<String>,        // sequence files, empty for standard input
    pub output: Option<String>,     // report file, None for standard output
    pub verbose: bool,              // explain mismatches
    pub input_numbering: Numbering, // numbering scheme of the sequences
    pub help: bool,
    pub version: bool,
}

impl Default for CanonicalControl {
    fn default() -> Self {
        CanonicalControl {
            rules_file: DEFAULT_RULES.to_string(),
            inputs: Vec::new(),
            output: None,
            verbose: false,
            input_numbering: Numbering::Kabat,
            help: false,
            version: false,
        }
    }
}

fn nonempty_value(arg: &str, key: &str) -> Result<String, String> {
    let v = arg.after(key);
    if v.is_empty() {
        return Err(format!("\nThe argument {} requires a value.\n", arg));
    }
    Ok(v.to_string())
}

// The first argument is the program name and is skipped.

pub fn proc_args(ctl: &mut CanonicalControl, args: &[String]) -> Result<(), String> {
    for arg in args.iter().skip(1) {
        let arg = arg.as_str();
        if arg == "VERBOSE" {
            ctl.verbose = true;
        } else if arg == "CHOTHIA_INPUT" {
            ctl.input_numbering = Numbering::Chothia;
        } else if arg == "help" || arg == "--help" || arg == "-h" {
            ctl.help = true;
        } else if arg == "version" || arg == "--version" {
            ctl.version = true;
        } else if arg.starts_with("RULES=") {
            ctl.rules_file = nonempty_value(arg, "RULES=")?;
        } else if arg.starts_with("OUT=") {
            ctl.output = Some(nonempty_value(arg, "OUT=")?);
        } else if arg.starts_with("IN=") {
            let v = nonempty_value(arg, "IN=")?;
            for f in v.split(',') {
                if f.is_empty() {
                    return Err(format!("\nThe argument {} contains an empty file name.\n", arg));
                }
                ctl.inputs.push(f.to_string());
            }
        } else {
            return Err(format!("\nUnrecognized argument {}.\n", arg));
        }
    }
    Ok(())
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓
