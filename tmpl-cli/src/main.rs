//! tmpl CLI: render templates from a directory with request context processors. Config from env and CLI args.

use anyhow::Result;
use clap::Parser;
use tmpl_cli::{build_engine, load_config, parse_context, render, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.template_dir)?;
    tmpl_core::init_tracing(config.log_file.as_deref())?;

    let engine = build_engine(config)?;

    match cli.command {
        Commands::Render {
            name,
            path,
            context,
            status,
        } => {
            let context = parse_context(context.as_deref())?;
            let response = render(&engine, &name, &path, context, status).await?;
            println!("{}", response.body);
        }
        Commands::List => {
            let names = engine.template_names();
            if names.is_empty() {
                println!("No templates (glob: {}).", engine.config().template_dir);
                return Ok(());
            }
            for name in names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
