use anyhow::Result;
use clap::Args;

use super::Context;
use crate::summary::print_site_details;

#[derive(Args)]
pub struct InfoArgs {
    /// Site id (see `heritage list`)
    pub site_id: String,
}

pub fn run(ctx: &Context, args: &InfoArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let site = catalog.get(&args.site_id)?;
    print_site_details(site);
    Ok(())
}
