pub(crate) mod generate;
mod inspect;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-skeleton")]
pub(crate) enum CommandEnum {
    /// Generate skeleton query and mutation documents for every object type
    /// in an introspection result.
    Generate(Box<GenerateCmd>),

    /// Print the top-level keys and type names of an introspection result.
    Inspect(Box<InspectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Inspect(cmd) => cmd.run(cli).await,
        }
    }
}
