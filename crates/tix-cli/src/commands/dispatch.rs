use tix_config::TixConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &TixConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Boards => commands::boards::handle(config, flags).await,
        Commands::Cards(args) => commands::cards::handle(&args, config, flags).await,
        Commands::Export(args) => commands::export::handle(&args, config, flags).await,
        Commands::Fetch(args) => commands::fetch::handle(&args, config, flags).await,
    }
}
