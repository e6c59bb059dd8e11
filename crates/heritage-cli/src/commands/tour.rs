use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use heritage_core::viewer::{Flow, KeyboardHub, TourEvent, TourNavigator};

use super::Context;
use crate::summary::print_tour_step;

#[derive(Args)]
pub struct TourArgs {
    /// Site id (see `heritage list`)
    pub site_id: String,

    /// File with one event per line; `#` starts a comment
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Events applied after the script, e.g. `select:interior next enter zoom:0.2 key:esc`
    pub events: Vec<String>,
}

pub fn run(ctx: &Context, args: &TourArgs) -> Result<()> {
    let catalog = ctx.catalog()?;
    let site = catalog.get(&args.site_id)?;

    let mut lines = Vec::new();
    if let Some(ref path) = args.script {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tour script {}", path.display()))?;
        lines.extend(
            content
                .lines()
                .map(|l| l.split('#').next().unwrap_or("").trim().to_string())
                .filter(|l| !l.is_empty()),
        );
    }
    lines.extend(args.events.iter().cloned());

    let events = lines
        .iter()
        .map(|l| {
            l.parse::<TourEvent>()
                .with_context(|| format!("Invalid tour event '{l}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let keyboard = KeyboardHub::new();
    let mut nav = TourNavigator::new(&site.id, site.tour_points(), site.panorama(), &keyboard)
        .with_context(|| format!("Failed to start tour of {}", site.id))?;

    println!("Touring {} ({} tour points)", site.name, nav.tour_points().len());
    for (step, event) in events.iter().enumerate() {
        let flow = nav.apply(event);
        print_tour_step(step + 1, event, &nav);
        if flow == Flow::Close {
            break;
        }
    }

    let ended = nav.close();
    println!(
        "Tour of {} ended (keyboard listeners: {})",
        ended.site_id,
        keyboard.listener_count()
    );
    Ok(())
}
