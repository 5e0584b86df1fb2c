// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

use canonical_main::main_canonical::main_canonical;
use pretty_trace::*;
use std::env;

fn main() {
    PrettyTrace::new().on();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = env::args().collect();
    if let Err(e) = main_canonical(&args) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}
