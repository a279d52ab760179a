use anyhow::Result;
use clap::{Parser, Subcommand};

use salidas_cli::cli::{ExportArgs, SummaryArgs};
use salidas_cli::{DirectorySink, JsonFileStore, logging, run_export, run_summary};

#[derive(Parser)]
#[command(
    name = "salidas",
    version,
    about = "Material-exit reports as Excel workbooks",
    long_about = "Filters material exits by date window, splits them into ERSA and UNBW \
                  and writes one single-sheet .xlsx report per category."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts and a preview of the exits in the window
    Summary(SummaryArgs),
    /// Write one spreadsheet per requested category
    Export(ExportArgs),
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Summary(args) => {
            let window = args.window.resolve_window(today)?;
            let store = JsonFileStore::new(&args.window.input);
            let (_, c_text) = run_summary(&store, &window)?;
            println!("{c_text}");
        }
        Commands::Export(args) => {
            let window = args.window.resolve_window(today)?;
            let store = JsonFileStore::new(&args.window.input);
            let sink = DirectorySink::new(&args.out_dir);
            let outcome = run_export(
                &store,
                &sink,
                &window,
                &args.resolve_categories(),
                args.workers,
            )?;
            for (category, path_file) in &outcome.written {
                println!("{category}\t{}", path_file.display());
            }
        }
    }

    Ok(())
}
