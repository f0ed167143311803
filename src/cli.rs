use {
    crate::{
        error::FatalError,
        inventory::{Inventory, OutputFormat},
        report::RunReport,
    },
    clap::{error::ErrorKind, Parser},
    log::debug,
    std::path::PathBuf,
};

pub const USAGE: &str = "usage: inFile updateFile outFile";

#[derive(Parser, Debug)]
#[command(version, about = "Apply a delivery file to a bookstore inventory")]
pub struct Cli {
    /// Inventory file of `<isbn> <quantity>` pairs
    #[arg(allow_hyphen_values = true)]
    pub inventory: PathBuf,
    /// Deliveries to add to the inventory
    #[arg(allow_hyphen_values = true)]
    pub deliveries: PathBuf,
    /// Where the updated inventory is written
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,
    /// Anything after the three files is ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub extra: Vec<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses the arguments. Help and version exit through clap; any other
/// failure prints the usage line and exits with status 1.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        },
    }
}

/// Load, update and persist, in that order. The first fatal error ends the run.
pub fn run(args: &Cli) -> Result<RunReport, FatalError> {
    if !args.extra.is_empty() {
        debug!("Ignoring {} extra arguments", args.extra.len());
    }
    let mut inventory = Inventory::new();

    let load = inventory.load_from(&args.inventory)?;
    let books_after_load = inventory.books.len();
    println!("Number of books in inventory {}", books_after_load);

    let update = inventory.update_from(&args.deliveries)?;
    let books_after_update = inventory.books.len();
    println!("Number of books in inventory after update {}", books_after_update);

    inventory.save_as(&args.output, args.format)?;

    let report = RunReport::new(
        (&args.inventory, &args.deliveries, &args.output),
        args.format,
        load,
        books_after_load,
        update,
        books_after_update,
    );
    if let Some(path) = &args.report {
        report.save_as(path)?;
    }
    Ok(report)
}
