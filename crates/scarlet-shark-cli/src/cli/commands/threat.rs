//! `sshark threat-actors|threat-tools` - threat intelligence lookups.

use anyhow::Result;
use scarlet_shark::{ThreatActorQuery, ThreatToolQuery};

use super::Context;
use crate::cli::args::{ThreatActorsArgs, ThreatToolsArgs};

pub async fn actors(ctx: Context, args: ThreatActorsArgs) -> Result<()> {
    let query = ThreatActorQuery {
        query: args.query,
        threat_actor_id: args.id,
        vertical: args.vertical,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_threat_actors(query).await?;
    ctx.print_result(result)
}

pub async fn tools(ctx: Context, args: ThreatToolsArgs) -> Result<()> {
    let query = ThreatToolQuery {
        query: args.query,
        threat_actor_id: args.id,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_threat_tools(query).await?;
    ctx.print_result(result)
}
