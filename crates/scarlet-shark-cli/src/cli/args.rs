//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use scarlet_shark::IpContext;

use crate::output::OutputFormat;

/// Command-line interface for the Scarlet Shark threat intelligence API
///
/// Look up domains, IPs, hashes, URLs, email addresses, threat actors and
/// threat tools.
#[derive(Parser, Debug)]
#[command(name = "sshark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Scarlet Shark API key (or set SCARLET_SHARK_API_KEY env var)
    #[arg(
        short = 'k',
        long,
        env = "SCARLET_SHARK_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// API version to use (see `sshark versions`)
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "SCARLET_SHARK_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Known hostname and IP associations
    Dns(DnsArgs),

    /// Information on a domain
    Domain(DomainArgs),

    /// Threat information for email addresses
    Email(EmailArgs),

    /// Information on a SHA256 or MD5 hash
    Hash(HashArgs),

    /// IP information and threat intel
    Ip(IpArgs),

    /// Network information for an IP
    Network(NetworkArgs),

    /// Threat actors by alias, id or targeted vertical
    ThreatActors(ThreatActorsArgs),

    /// Threat tools (malware or legitimate tools) by alias or id
    ThreatTools(ThreatToolsArgs),

    /// Threat information for URLs
    Url(UrlArgs),

    /// List supported API versions
    Versions,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Lookup commands
// ============================================================================

#[derive(Args, Debug)]
pub struct DnsArgs {
    /// IP address to find hostnames for
    #[arg(long)]
    pub ip: Option<String>,

    /// Hostname to find IPs for
    #[arg(long)]
    pub hostname: Option<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct DomainArgs {
    /// Domain to look up (Unicode domains are converted to punycode)
    pub domain: String,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Email addresses (comma-separated or multiple args)
    #[arg(required = true)]
    pub emails: Vec<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// SHA256 digest
    #[arg(long)]
    pub sha256: Option<String>,

    /// MD5 digest
    #[arg(long)]
    pub md5: Option<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct IpArgs {
    /// IPv4 or IPv6 addresses (comma-separated or multiple args)
    #[arg(required = true)]
    pub ips: Vec<String>,

    /// Lookup context: user_activity or none
    #[arg(long)]
    pub context: Option<IpContext>,

    /// Number of days to show security issues for
    #[arg(long)]
    pub time_period: Option<u32>,

    /// PHP time zone name for returned timestamps (e.g. Europe/Paris)
    #[arg(long)]
    pub time_zone: Option<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// IPv4 or IPv6 address
    pub ip: String,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ThreatActorsArgs {
    /// Search string matched against actor aliases
    #[arg(short, long)]
    pub query: Option<String>,

    /// Scarlet Shark threat actor id
    #[arg(long)]
    pub id: Option<i64>,

    /// Targeted vertical
    #[arg(long)]
    pub vertical: Option<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct ThreatToolsArgs {
    /// Search string matched against tool aliases
    #[arg(short, long)]
    pub query: Option<String>,

    /// Scarlet Shark id to search by
    #[arg(long)]
    pub id: Option<i64>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// URLs (multiple args)
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Value echoed back in the response
    #[arg(long)]
    pub nonce: Option<i64>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_key, api_version, output_format, timeout_secs)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ip_command() {
        let cli = Cli::try_parse_from([
            "sshark",
            "ip",
            "1.2.3.4,5.6.7.8",
            "--context",
            "user_activity",
            "--time-period",
            "7",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        let Commands::Ip(args) = cli.command else {
            panic!("expected ip command");
        };
        assert_eq!(args.ips, vec!["1.2.3.4,5.6.7.8".to_string()]);
        assert_eq!(args.context, Some(IpContext::UserActivity));
        assert_eq!(args.time_period, Some(7));
    }

    #[test]
    fn test_invalid_context_is_rejected() {
        let result = Cli::try_parse_from(["sshark", "ip", "1.2.3.4", "--context", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sshark",
            "threat-actors",
            "--vertical",
            "finance",
            "--api-version",
            "v0.4",
            "-k",
            "key",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("key"));
        assert_eq!(cli.api_version.as_deref(), Some("v0.4"));
        assert!(matches!(cli.command, Commands::ThreatActors(_)));
    }
}
