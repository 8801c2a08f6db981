use crate::controllers::TaskController;
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print the counts as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs, tasks: &TaskController) -> Result<()> {
    let stats = tasks.get_stats()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats);
    Ok(())
}
