// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use const_format::formatcp;

use crate::config::Config;

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_FORCE: char = 'f';
pub const A_L_FORCE: &str = "force";
pub const A_S_DRY_RUN: char = 'n';
pub const A_L_DRY_RUN: &str = "dry-run";
pub const A_L_VALIDATE: &str = "validate";
pub const A_S_HEADER: char = 'H';
pub const A_L_HEADER: &str = "header";
pub const A_S_ONLY: char = 'o';
pub const A_L_ONLY: &str = "only";
pub const A_S_OUT_DIR: char = 'O';
pub const A_L_OUT_DIR: &str = "output-directory";
pub const A_L_IN_FILE: &str = "ontology-file";

/// A boolean `--flag`, with a short alias.
fn flag(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .short(short)
        .long(name)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    flag(
        A_L_VERSION,
        A_S_VERSION,
        formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ),
    )
}

fn arg_quiet() -> Arg {
    flag(A_L_QUIET, A_S_QUIET, "Only log warnings and errors")
        .long_help("Only log warnings and errors to stderr; generated code is only ever written to files.")
        .conflicts_with(A_L_VERBOSE)
}

fn arg_header() -> Arg {
    Arg::new(A_L_HEADER)
        .help("The text to insert on top of all output files, instead of the default 'generated' notice")
        .short(A_S_HEADER)
        .long(A_L_HEADER)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_only() -> Arg {
    Arg::new(A_L_ONLY)
        .help("Only generate code for the ontology with this subject; may be given multiple times")
        .short(A_S_ONLY)
        .long(A_L_ONLY)
        .action(ArgAction::Append)
        .value_hint(ValueHint::Url)
        .value_name("SUBJECT")
}

fn arg_out_dir() -> Arg {
    Arg::new(A_L_OUT_DIR)
        .help("The directory the generated TypeScript files get written to")
        .short(A_S_OUT_DIR)
        .long(A_L_OUT_DIR)
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::DirPath)
        .value_name("OUT_DIR")
        .required_unless_present(A_L_VERSION)
}

fn arg_in_file() -> Arg {
    Arg::new(A_L_IN_FILE)
        .help("The input file(s): JSON-AD (*.json, *.jsonad) or RDF (e.g. *.ttl, *.nt), containing ontologies and their properties")
        .action(ArgAction::Set)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("ONTOLOGY_FILE")
        .required_unless_present(A_L_VERSION)
        .num_args(1..)
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(flag(
            A_L_VERBOSE,
            A_S_VERBOSE,
            "more verbose output (useful for debugging)",
        ))
        .arg(flag(
            A_L_FORCE,
            A_S_FORCE,
            "forces overwriting potentially already existing output files",
        ))
        .arg(flag(
            A_L_DRY_RUN,
            A_S_DRY_RUN,
            "generate everything, but do not write any files",
        ))
        .arg(
            Arg::new(A_L_VALIDATE)
                .help("validate the input data first, and fail if it is invalid")
                .long(A_L_VALIDATE)
                .action(ArgAction::SetTrue),
        )
        .arg(arg_header())
        .arg(arg_only())
        .arg(arg_out_dir())
        .arg(arg_in_file())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

fn config_from(args: &ArgMatches) -> Config {
    Config {
        ontologies: args
            .get_many::<PathBuf>(A_L_IN_FILE)
            .expect("At least one ontology input file (JSON-AD or RDF) is required")
            .cloned()
            .collect(),
        out_dir: args
            .get_one::<PathBuf>(A_L_OUT_DIR)
            .cloned()
            .expect("The output directory is required"),
        header: args.get_one::<String>(A_L_HEADER).cloned(),
        only: args
            .get_many::<String>(A_L_ONLY)
            .map(|subjects| subjects.cloned().collect())
            .unwrap_or_default(),
        force: args.get_flag(A_L_FORCE),
        dry_run: args.get_flag(A_L_DRY_RUN),
        validate: args.get_flag(A_L_VALIDATE),
    }
}

/// Parses the command line arguments,
/// including verification.
///
/// # Panics
///
/// - The output directory was not supplied
/// - No input file was supplied
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    if args.get_flag(A_L_VERSION) {
        print_version_and_exit(quiet);
    }

    Args {
        quiet,
        verbose: args.get_flag(A_L_VERBOSE),
        config: config_from(&args),
    }
}
