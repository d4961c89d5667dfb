use clap::Parser;
use doc2md::{Entity, RenderOptions, module_to_md, render_docstring};
use std::fs;
use std::path::PathBuf;

/// Convert docstrings to markdown.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Entity description file produced by a language introspector
    file: PathBuf,

    /// Convert only the docstring of this member of the module
    #[arg(conflicts_with = "all")]
    entry: Option<String>,

    /// Create an API section with the contents of the module's export list
    #[arg(short, long)]
    all: bool,

    /// Document title (default is the entity name)
    #[arg(short, long)]
    title: Option<String>,

    /// Do not automatically generate the TOC
    #[arg(long = "no-toc", action = clap::ArgAction::SetFalse)]
    toc: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(md) => println!("{md}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(&cli.file)?;
    let entity: Entity = serde_json::from_str(&raw)?;
    tracing::debug!(file = %cli.file.display(), all = cli.all, "loaded entity description");

    let title = cli.title.clone().unwrap_or_else(|| entity.name.clone());
    let opts = RenderOptions::new().toc(cli.toc);

    if cli.all {
        Ok(module_to_md(&entity, &title, opts)?)
    } else if let Some(entry) = &cli.entry {
        let member = entity
            .members
            .iter()
            .find(|member| &member.name == entry)
            .ok_or_else(|| format!("no member named {entry:?} in {}", entity.name))?;
        Ok(render_docstring(member.docstring_text(), entry, opts)?)
    } else {
        Ok(render_docstring(entity.docstring_text(), &title, opts)?)
    }
}
