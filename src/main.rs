use clap::{Parser, Subcommand};
use simple_folio::{assets, content, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for single-page personal portfolios")]
#[command(long_about = "\
Static site generator for single-page personal portfolios

Hand-authored content files become one animated page: hero with a typed
name, about blurb, a scroll-scrubbed experience timeline, and contact
links, wrapped in smooth-scroll and cursor-glow effects. The output is
plain HTML with embedded CSS and vanilla JavaScript.

Content structure:

  content/
  ├── config.toml                  # Presentation config (optional)
  ├── site.toml                    # Identity, contact links, experience
  ├── about.md                     # About section markdown
  └── assets/                      # Portrait + company logos
      ├── portrait.jpeg
      └── logos/
          └── acme.jpeg

Missing or unreadable images never fail the build: the page renders an
initials placeholder in their place.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest, staged assets)
    #[arg(long, default_value = ".simple-folio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content files into a manifest
    Scan,
    /// Verify and stage image assets under content-hashed names
    Assets,
    /// Produce the final HTML page from staged assets
    Generate,
    /// Run the full pipeline: scan → assets → generate
    Build,
    /// Validate content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = content::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Assets => {
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let staged_dir = cli.temp_dir.join("staged");
            let result = assets::stage(&scan_manifest_path, &cli.source, &staged_dir)?;
            let json = serde_json::to_string_pretty(&result.manifest)?;
            std::fs::write(staged_dir.join("manifest.json"), json)?;
            output::print_assets_output(&result.events);
        }
        Command::Generate => {
            let staged_dir = cli.temp_dir.join("staged");
            let staged_manifest_path = staged_dir.join("manifest.json");
            generate::generate(&staged_manifest_path, &staged_dir, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&staged_manifest_path)?;
            let manifest: simple_folio::types::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = content::scan(&cli.source)?;
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&scan_manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Staging assets");
            let staged_dir = cli.temp_dir.join("staged");
            let result = assets::stage(&scan_manifest_path, &cli.source, &staged_dir)?;
            let staged_manifest_path = staged_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&result.manifest)?;
            std::fs::write(&staged_manifest_path, json)?;
            output::print_assets_output(&result.events);

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            generate::generate(&staged_manifest_path, &staged_dir, &cli.output)?;
            output::print_generate_output(&result.manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = content::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", simple_folio::config::stock_config_toml());
        }
    }

    Ok(())
}
