use anyhow::{Context as _, Result};
use clap::Args;
use heritage_core::catalog::Catalog;
use heritage_core::chat::{ChatSession, HttpGuideChat, SessionId};

use super::Context;

#[derive(Args)]
pub struct ChatArgs {
    /// Site id the question is about
    pub site_id: String,

    /// Question for the guide
    pub message: String,

    /// Reuse an existing session id instead of generating one
    #[arg(long)]
    pub session: Option<String>,
}

pub fn run(ctx: &Context, args: &ChatArgs) -> Result<()> {
    let config = ctx.config()?;
    let catalog = Catalog::load(&config.catalog)
        .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?;
    let site = catalog.get(&args.site_id)?;

    let guide = HttpGuideChat::new(&config.chat.endpoint, config.chat.timeout())
        .context("Failed to build guide chat client")?;
    let session_id = match args.session {
        Some(ref id) => SessionId::new(id.clone()),
        None => SessionId::generate(),
    };
    let mut session = ChatSession::new(session_id, Some(site.id.clone()));

    println!("Asking the guide about {} via {}", site.name, guide.url());
    if let Some(reply) = session.ask(&guide, &args.message) {
        println!();
        println!("{}", reply.text);
    }
    println!();
    println!("Session: {}", session.session_id());
    Ok(())
}
