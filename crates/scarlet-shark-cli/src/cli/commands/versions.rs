//! `sshark versions` - list supported API versions.

use anyhow::Result;
use colored::Colorize;
use scarlet_shark::{ClientFactory, DEFAULT_API_VERSION};

use super::Context;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context) -> Result<()> {
    let versions = ClientFactory::get_supported_versions();

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&versions)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&versions)?),
        OutputFormat::Pretty => {
            for version in versions {
                if version == DEFAULT_API_VERSION {
                    println!("{} {}", version.green(), "(default)".dimmed());
                } else {
                    println!("{version}");
                }
            }
        }
    }

    Ok(())
}
