use clap::{ArgAction, Args};

/// Options shared by every command
#[derive(Debug, Args)]
pub struct CommonOptions {
    /// Log at debug level
    #[arg(long,
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
        num_args = 0..=1,)]
    pub verbose: bool,
}
