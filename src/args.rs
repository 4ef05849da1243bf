use clap::{App, Arg, ArgMatches};

fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
}

pub struct Arguments {
    pub verbosity: usize,
}

impl Arguments {
    pub fn parse_args() -> Self {
        let matches = args().get_matches();
        return Self::parse(&matches);
    }

    fn parse(matches: &ArgMatches) -> Self {
        Self {
            verbosity: matches.occurrences_of("verbosity") as usize,
        }
    }
}
