use clap::{Parser, Subcommand};
use docshell::{config, generate, output, page, pages, style};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docshell")]
#[command(about = "Renders a project website's pages inside a shared page shell")]
#[command(long_about = "\
Renders a project website's pages inside a shared page shell

Every page gets the same head, sidebar menu (documentation links, release
box, dependency box) and footer, all driven by site.toml. Page bodies are
plain HTML fragments or markdown files and are inserted as-is.

Site structure:

  site/
  ├── site.toml               # Project metadata, palette, releases, deps, docs
  ├── images/                 # Copied to the output directory
  └── pages/
      ├── 010-index.html      # Home page → index.html
      ├── 020-license.html    # → license.html
      └── 030-news.md         # Markdown → news.html

Run 'docshell gen-config' to print a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site directory containing site.toml and pages/
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build,
    /// Validate site.toml and list the pages without writing anything
    Check,
    /// Render a single page to stdout
    Render {
        /// Page title (empty for the home page)
        #[arg(long, default_value = "")]
        title: String,
        /// File holding the body fragment; read from stdin when omitted
        #[arg(long)]
        body: Option<PathBuf>,
    },
    /// Print the generated stylesheet
    Css,
    /// Print a documented example site.toml
    GenConfig,
    /// Print the resolved configuration as JSON
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Site written to {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let pages = pages::discover_pages(&cli.source.join(generate::PAGES_DIR))?;
            generate::render_all(&config, &pages)?;
            output::print_check_output(&config, &pages);
            println!("==> Site is valid");
        }
        Command::Render { title, body } => {
            let config = config::load_config(&cli.source)?;
            let body = match body {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print!("{}", page::render(&config, &title, &body)?);
        }
        Command::Css => {
            let config = config::load_config(&cli.source)?;
            print!("{}", style::generate_css(&config.css));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Config => {
            let config = config::load_config(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
