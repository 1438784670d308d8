use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "beach volleyball ladder backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the ladder server
    Serve {
        /// Port number (optional, defaults to $PORT or 3000)
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
}
