//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// certbot manual hooks for dns-01 validation against GleSYS DNS
///
/// Use as `certbot certonly --manual --preferred-challenges dns
/// --manual-auth-hook "dns01 perform" --manual-cleanup-hook "dns01 cleanup"`.
#[derive(Parser, Debug)]
#[command(name = "dns01")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Credentials TOML file with `user` and `password`
    #[arg(short, long, env = "DNS01_CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the validation TXT record (certbot auth hook)
    Perform(PerformArgs),

    /// Remove the validation TXT record (certbot cleanup hook)
    Cleanup(HookArgs),

    /// List the zones the credentials can manage
    Zones,

    /// Show which zone and record name a hostname maps to
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
pub struct HookArgs {
    /// Domain being validated
    #[arg(long, env = "CERTBOT_DOMAIN")]
    pub domain: String,

    /// Validation string to publish
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: String,
}

#[derive(Args, Debug)]
pub struct PerformArgs {
    #[command(flatten)]
    pub hook: HookArgs,

    /// TTL of the created record, in seconds
    #[arg(long, default_value_t = 60)]
    pub ttl: u32,

    /// Seconds to wait for DNS propagation before returning
    #[arg(long, default_value_t = 90)]
    pub propagation_seconds: u64,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Fully qualified hostname, e.g. `_acme-challenge.example.org`
    pub hostname: String,
}
