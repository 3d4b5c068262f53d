#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;
use sieve_lib::{
    builder::ParserInfo,
    context::Context,
    reports::Verdict,
    types::err::ErrorKind,
};

mod args;
use args::{config_from_args, Args, CliOptions, ValuationStyle};

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let (config, cli_options) = config_from_args(args);

    #[cfg(feature = "log")]
    init_logger(cli_options.log_level);

    let mut the_context = Context::from_config(config);

    let parse_report = match &cli_options.formula_file {
        Some(path) => {
            println!("c Reading DIMACS file from {path:?}");
            let file = match std::fs::File::open(path) {
                Ok(file) => file,
                Err(_) => {
                    println!("c Failed to open CNF file");
                    std::process::exit(1);
                }
            };
            the_context.read_dimacs(BufReader::new(file))
        }

        None => {
            println!("c Reading DIMACS from stdin");
            the_context.read_dimacs(std::io::stdin().lock())
        }
    };

    examine_parser_report(parse_report);

    the_context.solve();

    if cli_options.stats {
        println!("{}", the_context.counters);
    }

    let verdict = match the_context.verdict() {
        Ok(verdict) => verdict,
        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(1);
        }
    };

    println!("{}", verdict.message());

    match verdict {
        Verdict::Unsatisfiable => {
            if cli_options.reason {
                if let Some(contradiction) = the_context.contradiction() {
                    println!("c Contradiction: {contradiction}");
                }
            }
            std::process::exit(20)
        }

        Verdict::Satisfiable(assignment) => {
            display_assignment(&assignment, &cli_options);
            std::process::exit(10)
        }
    }
}

fn examine_parser_report(parse_report: Result<ParserInfo, ErrorKind>) {
    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected {count} atoms."),

                None => println!("c No preamble was found."),
            }

            println!("c Added    {} atoms.", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected {count} clauses.")
            }

            println!("c Added    {} clauses.", info.added_clauses);
        }

        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    }
}

fn display_assignment(assignment: &sieve_lib::reports::Assignment, cli_options: &CliOptions) {
    match cli_options.valuation_style {
        ValuationStyle::Sets => {
            for line in assignment.as_lines(&cli_options.prefix) {
                println!("{line}");
            }
        }

        ValuationStyle::Dimacs => println!("v {}", assignment.as_dimacs()),
    }
}

#[cfg(feature = "log")]
fn init_logger(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} {t} - {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if log4rs::init_config(config).is_err() {
                println!("c Failed to initialise logs");
            }
        }
        Err(e) => println!("c Log configuration error: {e}"),
    }
}
