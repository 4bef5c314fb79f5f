use clap::Parser;
use miette::Result;
use hues::cli::{Cli, Commands, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Groups(args) => hues::cli::groups::run(args, &ctx)?,
        Commands::Percentiles(args) => hues::cli::percentiles::run(args, &ctx)?,
        Commands::Scan(args) => hues::cli::scan::run(args, &ctx)?,
        Commands::Init(args) => hues::cli::init::run(args, &ctx.printer)?,
        Commands::Completions(args) => hues::cli::completions::run(args)?,
    }

    Ok(())
}
