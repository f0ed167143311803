pub mod book;
pub mod cli;
pub mod error;
pub mod inventory;
pub mod logger;
pub mod records;
pub mod report;
pub mod search;

fn main() {
    let args = cli::parse();
    if let Err(e) = logger::init(logger::level_for(args.verbose)) {
        eprintln!("{}", e);
    }
    match cli::run(&args) {
        Ok(_) => (),
        Err(e) => {
            e.report();
            std::process::exit(1);
        }
    }
}
