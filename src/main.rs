mod args;
mod devices;
mod report;
mod route;

use log::error;

pub fn init_log(verbosity: usize) {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 1)
        .init()
        .unwrap();
}

fn main() {
    let args = args::Arguments::parse_args();
    init_log(args.verbosity);

    if let Err(err) = report::main(args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
