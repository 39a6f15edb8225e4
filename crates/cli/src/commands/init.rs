// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::init_work_dir;
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&target_path)?;

    let work_dir = init_work_dir(&target_path)?;

    println!("Initialized board at {}", work_dir.display());
    Ok(())
}
