// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use finboard::commands::{self, Session};
use finboard::{cli, config, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_flag("verbose"));

    let config_path = match matches.get_one::<String>("config") {
        Some(p) => PathBuf::from(p),
        None => config::config_path()?,
    };
    // `config` must work even when the file itself is broken
    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&config_path, sub);
    }
    let cfg = config::load_from(&config_path)?;

    let mut session = Session::from_matches(cfg, &matches)?;

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("assets", sub)) => commands::assets::handle(&session, sub)?,
        Some(("goals", sub)) => commands::goals::handle(&session, sub)?,
        Some(("chart", sub)) => commands::chart::handle(&session, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
