// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

pub mod print_report;
