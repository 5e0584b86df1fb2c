// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

pub mod amino3;
pub mod read_rules;
pub mod read_seq;
