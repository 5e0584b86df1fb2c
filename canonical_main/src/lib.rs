// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

pub mod main_canonical;
pub mod proc_args;
