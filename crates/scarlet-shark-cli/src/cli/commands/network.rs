//! `sshark dns|domain|ip|network|url` - host and address lookups.

use anyhow::Result;
use scarlet_shark::{DnsQuery, DomainQuery, IpQuery, NetworkQuery, UrlQuery};

use super::{split_list, Context};
use crate::cli::args::{DnsArgs, DomainArgs, IpArgs, NetworkArgs, UrlArgs};

pub async fn dns(ctx: Context, args: DnsArgs) -> Result<()> {
    let query = DnsQuery {
        ip: args.ip,
        hostname: args.hostname,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_dns(query).await?;
    ctx.print_result(result)
}

pub async fn domain(ctx: Context, args: DomainArgs) -> Result<()> {
    let query = DomainQuery {
        domain: args.domain,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_domain(query).await?;
    ctx.print_result(result)
}

pub async fn ip(ctx: Context, args: IpArgs) -> Result<()> {
    let query = IpQuery {
        ips: split_list(&args.ips),
        context: args.context,
        time_period: args.time_period,
        time_zone: args.time_zone,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_ip(query).await?;
    ctx.print_result(result)
}

pub async fn network(ctx: Context, args: NetworkArgs) -> Result<()> {
    let query = NetworkQuery {
        ip: args.ip,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_network(query).await?;
    ctx.print_result(result)
}

// URLs may legitimately contain commas, so they are not split
pub async fn url(ctx: Context, args: UrlArgs) -> Result<()> {
    let query = UrlQuery {
        urls: args.urls,
        nonce: args.nonce,
    };

    let result = ctx.client()?.search_url(query).await?;
    ctx.print_result(result)
}
