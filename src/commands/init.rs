use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the current configuration instead of running the wizard
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.show {
        let config = Config::read()?;
        msg_print!(serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}

pub fn categories() -> Result<()> {
    let config = Config::read()?;
    msg_print!(Message::CategoriesHeader, true);
    View::categories(&config.categories);
    Ok(())
}
