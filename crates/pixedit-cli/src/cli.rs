//! Command line arguments and the run configuration derived from them.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use pixedit_core::encode::DEFAULT_JPEG_QUALITY;
use pixedit_core::{BlurEdgePolicy, PixelStyle};

use crate::operation::Operation;

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "output.jpg";

#[derive(Parser, Debug)]
#[command(
    name = "pixedit",
    author,
    version,
    about = "Apply pixel transformations to an image",
    long_about = "Apply pixel transformations to an image.\n\n\
                  Run without a command to enter interactive mode."
)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_OUTPUT,
        help = "Where to save the result; the format follows the extension (jpg, png, bmp)"
    )]
    pub output: PathBuf,

    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "JPEG quality (1-100)"
    )]
    pub quality: u8,

    #[arg(
        long,
        global = true,
        default_value_t = LogLevel::Warn,
        value_enum,
        help = "Log verbosity; RUST_LOG overrides it"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every pixel value, one image row per line
    Print {
        input: PathBuf,
        #[arg(long, help = "Print (r,g,b) triples instead of packed integers")]
        channels: bool,
    },
    /// Convert to grayscale
    Grayscale { input: PathBuf },
    /// Scale brightness by a percentage (negative darkens)
    Brightness {
        input: PathBuf,
        #[arg(allow_negative_numbers = true)]
        percentage: i32,
    },
    /// Rotate 90 degrees clockwise
    RotateRight { input: PathBuf },
    /// Rotate 90 degrees counter-clockwise
    RotateLeft { input: PathBuf },
    /// Mirror left-to-right
    FlipHorizontal { input: PathBuf },
    /// Mirror top-to-bottom
    FlipVertical { input: PathBuf },
    /// Block-average blur
    Blur {
        input: PathBuf,
        block_size: u32,
        #[arg(
            long,
            default_value_t = EdgeArg::Shrink,
            value_enum,
            help = "How to treat pixels outside complete blocks"
        )]
        edge: EdgeArg,
    },
}

impl Command {
    /// Split into the input path and the operation to run on it.
    pub fn into_parts(self) -> (PathBuf, Operation) {
        match self {
            Command::Print { input, channels } => {
                let style = if channels {
                    PixelStyle::Channels
                } else {
                    PixelStyle::Packed
                };
                (input, Operation::PrintPixels(style))
            }
            Command::Grayscale { input } => (input, Operation::Grayscale),
            Command::Brightness { input, percentage } => (input, Operation::Brightness(percentage)),
            Command::RotateRight { input } => (input, Operation::RotateRight),
            Command::RotateLeft { input } => (input, Operation::RotateLeft),
            Command::FlipHorizontal { input } => (input, Operation::FlipHorizontal),
            Command::FlipVertical { input } => (input, Operation::FlipVertical),
            Command::Blur {
                input,
                block_size,
                edge,
            } => (
                input,
                Operation::Blur {
                    block_size,
                    policy: edge.into(),
                },
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    Shrink,
    Preserve,
    Reject,
}

impl From<EdgeArg> for BlurEdgePolicy {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Shrink => BlurEdgePolicy::Shrink,
            EdgeArg::Preserve => BlurEdgePolicy::Preserve,
            EdgeArg::Reject => BlurEdgePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Settings shared by every run, whichever front end collected them.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub output: PathBuf,
    pub quality: u8,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            quality: DEFAULT_JPEG_QUALITY,
            log_level: LevelFilter::Warn,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            quality: cli.quality,
            log_level: cli.log_level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pixedit"]).unwrap();
        assert!(cli.command.is_none());

        let config = RunConfig::from(&cli);
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.output, PathBuf::from("output.jpg"));
        assert_eq!(config.quality, 90);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pixedit",
            "grayscale",
            "in.png",
            "--output",
            "gray.png",
            "-q",
            "75",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = RunConfig::from(&cli);
        assert_eq!(config.output, PathBuf::from("gray.png"));
        assert_eq!(config.quality, 75);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(
            cli.command.unwrap().into_parts(),
            (PathBuf::from("in.png"), Operation::Grayscale)
        );
    }

    #[test]
    fn test_negative_brightness() {
        let cli = Cli::try_parse_from(["pixedit", "brightness", "in.jpg", "-40"]).unwrap();
        assert_eq!(
            cli.command.unwrap().into_parts().1,
            Operation::Brightness(-40)
        );
    }

    #[test]
    fn test_blur_edge_policy() {
        let cli = Cli::try_parse_from(["pixedit", "blur", "in.jpg", "5", "--edge", "preserve"])
            .unwrap();
        assert_eq!(
            cli.command.unwrap().into_parts().1,
            Operation::Blur {
                block_size: 5,
                policy: BlurEdgePolicy::Preserve
            }
        );

        let cli = Cli::try_parse_from(["pixedit", "blur", "in.jpg", "3"]).unwrap();
        assert_eq!(
            cli.command.unwrap().into_parts().1,
            Operation::Blur {
                block_size: 3,
                policy: BlurEdgePolicy::Shrink
            }
        );
    }

    #[test]
    fn test_negative_block_size_rejected() {
        assert!(Cli::try_parse_from(["pixedit", "blur", "in.jpg", "-2"]).is_err());
    }

    #[test]
    fn test_quality_range_enforced() {
        assert!(Cli::try_parse_from(["pixedit", "-q", "0"]).is_err());
        assert!(Cli::try_parse_from(["pixedit", "-q", "101"]).is_err());
    }

    #[test]
    fn test_print_styles() {
        let cli = Cli::try_parse_from(["pixedit", "print", "in.png", "--channels"]).unwrap();
        assert_eq!(
            cli.command.unwrap().into_parts().1,
            Operation::PrintPixels(PixelStyle::Channels)
        );
    }
}
