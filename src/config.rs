use crate::models::Rgb;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::num::NonZeroUsize;

pub const DEFAULT_STEPS: NonZeroUsize = NonZeroUsize::new(8).unwrap();
pub const MAX_STEPS: usize = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Brace delimited array literal, ready to paste into a sketch
    #[default]
    Array,
    /// JSON array with the hex value and channels of every step
    Json,
}

/// Generate the code for a gradient of colours to use as an LED animation.
#[derive(Parser, Debug)]
#[command(name = "gradgen", version)]
#[command(about = "Gradient Code Generator")]
pub struct Cli {
    /// Starting color (in HTML format like ff0000)
    pub start: String,

    /// Ending color (in HTML format like 00ff00)
    pub end: String,

    /// Number of animation steps to be generated
    #[arg(short, long, default_value_t = DEFAULT_STEPS, value_parser = parse_steps)]
    pub steps: NonZeroUsize,

    /// Output format of the generated gradient
    #[arg(long, value_enum, default_value_t = OutputFormat::Array)]
    pub format: OutputFormat,

    /// Print only the gradient, without banner or instructions
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a table previewing every colour in the terminal
    #[arg(short, long)]
    pub preview: bool,
}

fn parse_steps(s: &str) -> Result<NonZeroUsize, String> {
    let steps: usize = s
        .parse()
        .map_err(|e| format!("Invalid step count: {}", e))?;
    if steps > MAX_STEPS {
        return Err(format!("Step count must be at most {}", MAX_STEPS));
    }
    NonZeroUsize::new(steps).ok_or_else(|| "Step count must be at least 1".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start: Rgb,
    pub end: Rgb,
    pub steps: NonZeroUsize,
    pub format: OutputFormat,
    pub quiet: bool,
    pub preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(255, 255, 255),
            steps: DEFAULT_STEPS,
            format: OutputFormat::Array,
            quiet: false,
            preview: false,
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> anyhow::Result<Self> {
        let start = Rgb::from_hex(&cli.start)
            .with_context(|| format!("Invalid start color '{}'", cli.start))?;
        let end = Rgb::from_hex(&cli.end)
            .with_context(|| format!("Invalid end color '{}'", cli.end))?;

        Ok(Config {
            start,
            end,
            steps: cli.steps,
            format: cli.format,
            quiet: cli.quiet,
            preview: cli.preview,
        })
    }
}
