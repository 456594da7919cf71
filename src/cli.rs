use crate::app::view::View;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments accepted by the `statedeck` binary.
#[derive(Parser, Debug)]
#[command(name = "statedeck", version, about = "Three stateful widgets in one terminal deck")]
pub struct CliArgs {
    /// Read configuration from FILE instead of the default location.
    #[arg(short, long, value_name = "FILE", env = "STATEDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Widget to show first.
    #[arg(short, long, value_enum)]
    pub view: Option<View>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    pub write_default_config: bool,
}
