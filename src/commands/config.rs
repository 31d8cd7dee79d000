// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::config::{self, Config};
use anyhow::{Context, Result};

/// `path` and `init` never parse the file; only `show` does.
pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("path", _)) => println!("{}", path.display()),
        Some(("show", _)) => {
            let current = config::load_from(path)?;
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Some(("init", _)) => {
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                config::save_to(path, &Config::default())
                    .with_context(|| format!("Write config to {}", path.display()))?;
                println!("Config initialized at {}", path.display());
            }
        }
        _ => {}
    }
    Ok(())
}
