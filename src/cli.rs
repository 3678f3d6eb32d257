// Copyright (c) 2025 Offertory Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn code_arg() -> Arg {
    Arg::new("code")
        .long("code")
        .help("Access code guarding this operation")
}

fn date_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

pub fn build_cli() -> Command {
    Command::new("offertory")
        .about("Single-ledger congregation bookkeeping: entries, roster, balances, weekly reports")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Initialize the ledger database"))
        .subcommand(
            Command::new("people")
                .about("Manage the roster")
                .subcommand(
                    Command::new("add")
                        .about("Add a person to the roster")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("position")
                                .long("position")
                                .required(true)
                                .help("Roster position (pastor, evangelist, elder, deacon, member)"),
                        )
                        .arg(code_arg()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change a person's name or position")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("position").long("position"))
                        .arg(code_arg()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a person; their entries stay on the ledger")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(code_arg()),
                )
                .subcommand(json_flags(Command::new("list").about("List the roster"))),
        )
        .subcommand(
            Command::new("entry")
                .about("Record and inspect ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense entry")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Entry date, YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive whole currency units"),
                        )
                        .arg(
                            Arg::new("person")
                                .long("person")
                                .value_parser(value_parser!(i64))
                                .help("Person id; required for income"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm").about("Delete an entry").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    json_flags(
                        Command::new("feed")
                            .about("Display feed with running balances, newest first"),
                    )
                    .arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .help("Show at most this many lines"),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category vocabularies")
                .subcommand(
                    Command::new("add")
                        .about("Add an expense category (income categories are fixed)")
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List income and expense categories"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Balance and period reports")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Previous/today balances plus weekly and yearly totals")
                        .arg(date_arg("date", "Report date, YYYY-MM-DD (default today)")),
                ))
                .subcommand(json_flags(
                    Command::new("weekly")
                        .about("Week-to-date giving by recurring category")
                        .arg(date_arg("date", "Report date, YYYY-MM-DD (default today)")),
                ))
                .subcommand(json_flags(
                    Command::new("today")
                        .about("Income and expense totals for one day")
                        .arg(date_arg("date", "Report date, YYYY-MM-DD (default today)")),
                )),
        )
        .subcommand(
            Command::new("search")
                .about("Find entries and their totals")
                .subcommand(
                    json_flags(
                        Command::new("person").about("Income given by one person in a date range"),
                    )
                    .arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    )
                    .arg(date_arg("from", "Range start, YYYY-MM-DD").required(true))
                    .arg(date_arg("to", "Range end, YYYY-MM-DD").required(true)),
                )
                .subcommand(
                    json_flags(
                        Command::new("category")
                            .about("Entries of one kind and category in a date range"),
                    )
                    .arg(
                        Arg::new("kind")
                            .long("kind")
                            .required(true)
                            .value_parser(["income", "expense"]),
                    )
                    .arg(Arg::new("name").long("name").required(true))
                    .arg(date_arg("from", "Range start, YYYY-MM-DD").required(true))
                    .arg(date_arg("to", "Range end, YYYY-MM-DD").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the ledger out (gated)")
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .value_parser(["json", "csv"])
                        .help("json = full snapshot (round-trips), csv = flat entries"),
                )
                .arg(code_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the whole ledger from a JSON snapshot")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("code").about("Access code").subcommand(
                Command::new("set")
                    .about("Change the access code (4-6 digits)")
                    .arg(Arg::new("new").long("new").required(true))
                    .arg(
                        Arg::new("current")
                            .long("current")
                            .help("Current access code"),
                    ),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan the ledger for integrity issues"))
}
