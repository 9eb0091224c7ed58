use clap::{Args, Parser, Subcommand};
use hu::config::{self, ToolConfig};
use hu::links::{self, ResolveContext};
use hu::output;
use hu::social::{self, FrontmatterReader, SvgStyle};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("HU_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("HU_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once: clap needs a 'static version string
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "hu")]
#[command(about = "Hugo utilities - automate tasks for Hugo static site projects")]
#[command(long_about = "\
Hugo utilities - automate tasks for Hugo static site projects

Pages are leaf bundles: a folder with index.md (or _index.md for a section),
addressed by its clean URL.

Content structure:

  content/
  ├── _index.md                    # Home section        → /
  └── blog/
      ├── _index.md                # Section             → /blog/
      └── first-post/
          ├── index.md             # Page                → /blog/first-post/
          └── cover.png            # Bundle asset

Optional settings live in hu.toml at the project root.
Run 'hu gen-config' to print a documented hu.toml.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find broken internal links in markdown content
    #[command(name = "404-links")]
    Links(LinksArgs),
    /// Generate SVG social preview images from page frontmatter
    Svg(SvgArgs),
    /// Print a stock hu.toml with all options documented
    GenConfig,
}

#[derive(Args)]
struct LinksArgs {
    /// Path to Hugo content directory, relative to the Hugo root [default: content]
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Path to Hugo project root
    #[arg(long, default_value = ".")]
    hugo_root: PathBuf,

    /// Print broken links as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SvgArgs {
    /// Path to Hugo content directory [default: content]
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Image width in px [default: 1200]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Image height in px [default: 630]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Background color [default: #f3f4f6]
    #[arg(long)]
    bg: Option<String>,

    /// Foreground color [default: #0b1220]
    #[arg(long)]
    fg: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            output::print_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Command::Links(args) => check_links(args),
        Command::Svg(args) => generate_svgs(args),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check_links(args: LinksArgs) -> Result<ExitCode, Box<dyn Error>> {
    if !args.hugo_root.is_dir() {
        output::print_error(format!(
            "Hugo root not found: {}",
            args.hugo_root.display()
        ));
        return Ok(ExitCode::FAILURE);
    }
    let config = config::load_config(&args.hugo_root)?;
    let content_dir = resolve_content_dir(args.content_dir, &config, &args.hugo_root);
    if !content_dir.is_dir() {
        output::print_error(format!(
            "Content directory not found: {}",
            content_dir.display()
        ));
        return Ok(ExitCode::FAILURE);
    }

    if !args.json {
        output::print_links_banner(&content_dir);
    }

    let ctx = ResolveContext::new(content_dir.canonicalize()?, args.hugo_root.canonicalize()?);
    let broken = links::find_broken_links(&ctx)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&broken)?);
    } else {
        output::print_links_report(&broken);
    }

    Ok(if broken.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn generate_svgs(args: SvgArgs) -> Result<ExitCode, Box<dyn Error>> {
    let config = config::load_config(Path::new("."))?;
    let content_dir = resolve_content_dir(args.content_dir, &config, Path::new("."));
    if !content_dir.is_dir() {
        output::print_error(format!(
            "Content directory not found: {}",
            content_dir.display()
        ));
        return Ok(ExitCode::FAILURE);
    }
    let content_dir = content_dir.canonicalize()?;

    let style = SvgStyle {
        width: args.width.unwrap_or(config.svg.width),
        height: args.height.unwrap_or(config.svg.height),
        background: args.bg.unwrap_or(config.svg.background),
        foreground: args.fg.unwrap_or(config.svg.foreground),
    };
    let reader = FrontmatterReader::for_mode(config.svg.frontmatter);

    output::print_svg_banner(&content_dir);
    let report = social::generate_images(&content_dir, &style, &reader, output::print_svg_event)?;
    output::print_svg_summary(&report);

    Ok(ExitCode::SUCCESS)
}

/// CLI flag, else `content_dir` from config, resolved against `root` when relative.
fn resolve_content_dir(flag: Option<PathBuf>, config: &ToolConfig, root: &Path) -> PathBuf {
    let dir = flag.unwrap_or_else(|| PathBuf::from(&config.content_dir));
    root.join(dir)
}
