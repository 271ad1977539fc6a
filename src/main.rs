use clap::Parser;
use log::debug;

use proptable::parse::parse;
use proptable::table::TruthTable;

#[derive(Parser)]
#[command(version, about = "Print the truth table of a propositional formula")]
struct Cli {
    /// Formula to tabulate, e.g. `(A /\ B) -> C /\ A`.
    #[arg(default_value = r"(A /\ B) -> C /\ A")]
    formula: String,

    /// Log parser and table tracing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    debug!("formula = {:?}", cli.formula);
    let expr = parse(&cli.formula)?;
    println!("{}", expr);

    let table = TruthTable::build(&expr)?;
    print!("{}", table);

    Ok(())
}
