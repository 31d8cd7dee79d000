// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .short('r')
        .help("week | month | quarter | year | all (defaults to the configured range)")
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .version(clap::crate_version!())
        .about("Personal-finance dashboard over generated demo data")
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for reproducible demo data"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Reference date YYYY-MM-DD (defaults to the local date)"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .global(true)
                .help("vibrant | neutral"),
        )
        .arg(
            Arg::new("theme-file")
                .long("theme-file")
                .global(true)
                .help("Load a full theme from a JSON file"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .help("Currency code used for display, e.g. USD"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to config.json (overrides FINBOARD_CONFIG)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
        .subcommand(Command::new("summary").about("Headline figures").args(json_args()))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .about("List transactions matching the filter")
                        .arg(range_arg())
                        .arg(Arg::new("search").long("search").short('s'))
                        .arg(Arg::new("status").long("status").help("paid | due | late"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Spending per category, largest first")
                        .arg(range_arg())
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(usize))
                                .default_value("5"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("assets")
                .about("Assets")
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(Command::new("by-category").args(json_args())),
        )
        .subcommand(
            Command::new("goals").about("Savings goals").subcommand(
                Command::new("list")
                    .arg(
                        Arg::new("completed")
                            .long("completed")
                            .action(ArgAction::SetTrue)
                            .help("Only goals that reached their target"),
                    )
                    .args(json_args()),
            ),
        )
        .subcommand(
            Command::new("chart")
                .about("Income vs. expenses over time")
                .arg(range_arg())
                .arg(
                    Arg::new("bucket")
                        .long("bucket")
                        .short('b')
                        .default_value("day")
                        .help("day | week | month"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("theme")
                .about("Design tokens")
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("show")
                        .arg(Arg::new("name").help("vibrant | neutral (defaults to active)"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("validate").arg(Arg::new("file").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Consistency checks over the data"))
        .subcommand(
            Command::new("config")
                .about("Configuration file")
                .subcommand(Command::new("path"))
                .subcommand(Command::new("show"))
                .subcommand(Command::new("init").about("Write the default config")),
        )
}
