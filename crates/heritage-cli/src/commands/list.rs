use anyhow::Result;
use clap::Args;
use heritage_core::catalog::SiteFilter;

use super::Context;
use crate::summary::{print_festivals, print_site_list};

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, description and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only sites in this district (e.g. "East Sikkim")
    #[arg(short, long)]
    pub district: Option<String>,

    /// Only sites of this tradition (e.g. "Nyingma")
    #[arg(short, long)]
    pub tradition: Option<String>,
}

pub fn run(ctx: &Context, args: &ListArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter = SiteFilter {
        search: args.search.clone(),
        district: args.district.clone(),
        tradition: args.tradition.clone(),
    };
    print_site_list(&catalog.filter(&filter));
    Ok(())
}

pub fn run_festivals(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    print_festivals(&catalog.festivals());
    Ok(())
}

pub fn run_districts(ctx: &Context) -> Result<()> {
    for district in ctx.catalog()?.districts() {
        println!("{district}");
    }
    Ok(())
}

pub fn run_traditions(ctx: &Context) -> Result<()> {
    for tradition in ctx.catalog()?.traditions() {
        println!("{tradition}");
    }
    Ok(())
}
