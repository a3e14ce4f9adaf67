//! `sshark email|hash` - indicator lookups.

use anyhow::Result;
use scarlet_shark::{EmailQuery, HashQuery};

use super::{split_list, Context};
use crate::cli::args::{EmailArgs, HashArgs};

pub async fn email(ctx: Context, args: EmailArgs) -> Result<()> {
    let query = EmailQuery {
        emails: split_list(&args.emails),
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_email(query).await?;
    ctx.print_result(result)
}

pub async fn hash(ctx: Context, args: HashArgs) -> Result<()> {
    let query = HashQuery {
        sha256: args.sha256,
        md5: args.md5,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_hash(query).await?;
    ctx.print_result(result)
}
