mod cli;

use clap::Parser;
use taglog::config::{Settings, DEFAULT_CONFIG_FILE};
use taglog::logging::{Level, TracingSink};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Log tag formatting and tag-gated logging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Build a log tag from a class name
    Tag {
        class_name: String,
        #[arg(long, help = "Tag prefix, at most 5 characters")]
        prefix: Option<String>,
    },
    /// Check whether a value is blank
    Blank {
        value: Option<String>,
    },
    /// Compare two values, treating blank values as equal
    Equals {
        #[arg(long)]
        a: Option<String>,
        #[arg(long)]
        b: Option<String>,
    },
    /// Send one line through the tag-gated logger
    Log {
        level: Level,
        tag: String,
        message: String,
        #[arg(long, help = "Treat the build as debuggable")]
        debuggable: bool,
        #[arg(long = "signer", help = "Signer certificate subject (repeatable)")]
        signers: Vec<String>,
    },
    /// Write the default configuration
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taglog=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tag { class_name, prefix } => {
            match cli::tag(prefix.as_deref(), &class_name, cli.json) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    if cli.json {
                        println!("{}", serde_json::json!({"error": e.to_string()}));
                    } else {
                        eprintln!("❌ {}", e);
                    }
                    return Err(e);
                }
            }
        }
        Commands::Blank { value } => {
            println!("{}", cli::blank(value.as_deref(), cli.json));
        }
        Commands::Equals { a, b } => {
            println!("{}", cli::equals(a.as_deref(), b.as_deref(), cli.json));
        }
        Commands::Log { level, tag, message, debuggable, signers } => {
            let settings = Settings::load_or_default(cli.config.as_deref())?;
            let request = cli::LogRequest {
                level,
                tag: &tag,
                message: &message,
                debuggable,
                signers: &signers,
            };
            let written = cli::log(&settings, &request, TracingSink);
            if cli.json {
                println!("{}", serde_json::json!({"written": written}));
            } else {
                println!("{}", written);
            }
        }
        Commands::GenerateConfig { output } => {
            Settings::default().save(&output)?;
            if cli.json {
                println!("{}", serde_json::json!({"config": output}));
            } else {
                println!("✅ Wrote default config to {}", output);
            }
        }
    }

    Ok(())
}
