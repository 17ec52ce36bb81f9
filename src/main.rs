use clap::{Parser, Subcommand};
use sharekit::compose::LinkRequest;
use sharekit::{components, config, output};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sharekit")]
#[command(about = "Share links and post components for a static blog")]
#[command(long_about = "\
Share links and post components for a static blog

Site metadata lives in config.toml in the site directory. The share link
endpoint is derived from user_twitter:

  user_twitter = \"@rgp4ss\"
  → https://twitter.com/compose/tweet?text=@rgp4ss

A message is appended with a leading space, percent-encoded:

  sharekit share --message \"Check this out!\"
  → https://twitter.com/compose/tweet?text=@rgp4ss%20Check%20this%20out%21

Run 'sharekit gen-config' to generate a documented config.toml.")]
#[command(version = env!("SHAREKIT_VERSION"))]
struct Cli {
    /// Site directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a share link
    Share {
        /// Message appended to the share endpoint
        #[arg(short, long)]
        message: Option<String>,
        /// Link label (defaults to share.label from config)
        #[arg(short, long)]
        text: Option<String>,
        /// Print the rendered <a> element instead of the URL
        #[arg(long)]
        html: bool,
    },
    /// Print the post footer HTML
    Footer,
    /// Validate config.toml without rendering anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Share {
            message,
            text,
            html,
        } => {
            let site_config = config::load_config(&cli.site)?;
            let composer = site_config.link_composer().ok_or_else(|| {
                config::ConfigError::Validation(
                    "sharing is disabled: set user_twitter or share.base_endpoint".into(),
                )
            })?;
            let request = LinkRequest {
                message,
                text: text.or(Some(site_config.share.label.clone())),
            };
            let link = composer.compose_request(&request)?;
            info!(endpoint = composer.base_endpoint(), "share link composed");
            if html {
                println!("{}", components::tweet_text(&link).into_string());
            } else {
                output::print_link(&link);
            }
        }
        Command::Footer => {
            let site_config = config::load_config(&cli.site)?;
            println!(
                "{}",
                components::post_footer(&site_config.footer).into_string()
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.display());
            let site_config = config::load_config(&cli.site)?;
            output::print_check_output(&site_config, &cli.site);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
