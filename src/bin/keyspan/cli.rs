use clap::{Parser, Subcommand};

/// Отладочный CLI для реестра no-split спанов
#[derive(Parser, Debug)]
#[command(
    name = "keyspan",
    version,
    about = "Inspect reserved no-split key spans",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print LocalMax and Meta2KeyMax
    Bounds {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the spans of one set (or both sets if --set is omitted)
    Dump {
        /// default | without-meta2-splits
        #[arg(long)]
        set: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Is the key inside any protected span? ([start, end))
    ///
    /// Ключ: "hex:04006c69": сырые байты, "-" или "": пустой ключ, иначе UTF-8 литерал.
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        key: String,
        /// default | without-meta2-splits (falls back to KEYSPAN_META2_SPLITS)
        #[arg(long)]
        set: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// May the range be split at this key? Exit code 2 if the key is protected.
    SplitCheck {
        #[arg(long, allow_hyphen_values = true)]
        key: String,
        #[arg(long)]
        set: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Protected spans intersecting [start, end)
    Overlaps {
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        #[arg(long, allow_hyphen_values = true)]
        end: String,
        #[arg(long)]
        set: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check table invariants and compare tables with the schema regeneration
    Verify {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
