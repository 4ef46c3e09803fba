use clap::Parser;

/// Environment variable that fixes the auto-move seed.
pub const SEED_ENV: &str = "OTHELLO_SEED";

#[derive(Parser, Debug)]
#[command(version, about = "Othello on the terminal", long_about = None, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Let random moves play both sides
    #[arg(long)]
    pub debug_auto: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub debug_auto: bool,
    pub seed: u64,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let env_seed = std::env::var(SEED_ENV).ok();
        Self {
            debug_auto: args.debug_auto,
            seed: seed_or_random(env_seed.as_deref()),
        }
    }
}

fn seed_or_random(value: Option<&str>) -> u64 {
    match value.map(str::parse::<u64>) {
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            log::warn!("ignoring {SEED_ENV}: {err}");
            rand::random()
        }
        None => rand::random(),
    }
}
