use log::debug;
use nithumb::cli;
use nithumb::pipeline::{self, ConversionJob};
use nithumb::{logger, ProcessError};

fn main() {
    let args = cli::parse_args();
    logger::init(args.verbose);

    let job = ConversionJob::from(&args);
    debug!("{job:?}");

    match pipeline::convert(&job) {
        Ok(report) => {
            if args.verbose {
                nithumb::print_report(&report);
            }
        }
        Err(ProcessError::NotANiftiFile) => {
            println!("{}", ProcessError::NotANiftiFile);
            std::process::exit(ProcessError::NotANiftiFile.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
