use std::path::{Path, PathBuf};

use clap::ArgMatches;

pub(crate) struct Options {
    input: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            input: matches.value_of("input").map(PathBuf::from),
        }
    }

    /// The puzzle file to read, or `None` to solve the built-in puzzle
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Cagey")
        .about("Solve KenKen puzzles")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read a KenKen puzzle from a file"),
        )
}
