use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_skeleton::schema::IntrospectionDocument;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Path to a JSON file containing the result of a GraphQL \
             introspection query.",
        name="SCHEMA_FILE",
    )]
    schema_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let document = match IntrospectionDocument::from_file(&self.schema_file) {
            Ok(document) => document,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors loading introspection result: {e}",
                output_utils::RED_X,
            )),
        };

        let schema = match document.build_schema() {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors loading introspection result: {e}",
                output_utils::RED_X,
            )),
        };

        CommandResult::success(format_args!(
            concat!(
                "{} Loaded {} types from {}:\n",
                "Introspection keys: {:?}\n",
                "Schema types: {:?}\n",
                "Object-like types: {:?}\n",
                "Root types: query={}, mutation={}, subscription={}",
            ),
            output_utils::GREEN_CHECK,
            schema.len(),
            self.schema_file.display(),
            document.data_keys(),
            document.type_names(),
            schema.object_like_type_names(),
            schema.query_type_name().unwrap_or("-"),
            schema.mutation_type_name().unwrap_or("-"),
            schema.subscription_type_name().unwrap_or("-"),
        ))
    }
}
