mod render;

use crate::Cli;
use crate::CommandResult;
use render::RenderCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphb")]
pub(crate) enum CommandEnum {
    /// Render operation descriptions (JSON) into GraphQL or Dgraph documents.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await
        }
    }
}
