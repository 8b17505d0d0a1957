use clap::{Parser, Subcommand, ValueEnum};
use responsive_sets::imaging::{DiskSource, Quality};
use responsive_sets::resolver::Resolver;
use responsive_sets::{config, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "responsive-sets")]
#[command(about = "Resolve responsive image sets into <picture> markup")]
#[command(long_about = "\
Resolve responsive image sets into <picture> markup

A responsive set is a named, ordered list of (media query -> resize
arguments) entries plus one fallback image, declared in a TOML file:

  [sets.hero]
  method = \"fill\"
  default_arguments = [400, 200]

  [sets.hero.sizes]
  \"(min-width: 800px)\" = [800, 400]
  \"(min-width: 1200px)\" = [1200, 600]

'render' resizes a source image once per entry (plus the fallback), writes
the variants as AVIF files, and prints the markup. Set names are
case-insensitive. Run 'gen-config' for a documented starter config.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "responsive.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Rendered markup
    Html,
    /// The resolved view model as JSON
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a set against a source image and print the markup
    Render {
        /// Source image (JPEG, PNG, TIFF, or WebP)
        image: PathBuf,
        /// Set name (case-insensitive)
        set: String,
        /// Override arguments for the fallback image
        args: Vec<u32>,
        /// Directory for the resized variants
        #[arg(long, default_value = "resized")]
        output: PathBuf,
        /// AVIF encoding quality (1-100)
        #[arg(long, default_value_t = 90)]
        quality: u32,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Validate the configuration file
    Check,
    /// List configured sets
    List,
    /// Print a stock responsive.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            image,
            set,
            args,
            output,
            quality,
            format,
        } => {
            let sets_config = config::load_config(&cli.config)?;
            let resolver = Resolver::new(&sets_config);
            let source = DiskSource::open(&image, &output, Quality::new(quality))?;

            let Some(resolved) = resolver.resolve_set(&source, &set, &args)? else {
                return Err(format!(
                    "no responsive set named '{}' in {} (run 'list' to see configured sets)",
                    set,
                    cli.config.display()
                )
                .into());
            };

            match format {
                Format::Html => println!("{}", render::render_set(&resolved).into_string()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
            }
            eprintln!(
                "Wrote {} variant(s) + fallback to {}",
                resolved.variants.len(),
                output.display()
            );
        }
        Command::Check => {
            let sets_config = config::load_config(&cli.config)?;
            for (name, set) in &sets_config.sets {
                let plan = set.plan(name, &sets_config.defaults)?;
                println!(
                    "{}: {} size(s), method {}, template {}",
                    name,
                    set.sizes.len(),
                    plan.method.name(),
                    plan.template.name()
                );
            }
            println!("{} is valid", cli.config.display());
        }
        Command::List => {
            let sets_config = config::load_config(&cli.config)?;
            if sets_config.sets.is_empty() {
                println!("No sets configured in {}", cli.config.display());
            }
            for (name, set) in &sets_config.sets {
                println!("{} ({} size entries)", name, set.sizes.len());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
