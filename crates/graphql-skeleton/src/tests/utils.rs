use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use serde_json::Value;
use serde_json::json;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

pub fn exited_successfully(result: &CommandResult) -> bool {
    format!("{:?}", result.exit_code) == format!("{:?}", ExitCode::SUCCESS)
}

/// Parses `args` (excluding the binary name) and runs the resulting command.
pub async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(
        std::iter::once("graphql-skeleton").chain(args.iter().copied()),
    ).unwrap();
    let command = cli.cmd.take().expect("a subcommand was parsed");
    command.run(cli).await
}

pub fn write_schema_file(dir: &Path, types: &[(&str, &[&str])]) -> PathBuf {
    let types: Vec<Value> =
        types.iter()
            .map(|(name, fields)| json!({
                "kind": "OBJECT",
                "name": name,
                "fields": fields.iter()
                    .map(|field| json!({ "name": field, "args": [] }))
                    .collect::<Vec<_>>(),
            }))
            .collect();

    let path = dir.join("schema.json");
    std::fs::write(&path, json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "types": types,
            },
        },
    }).to_string()).unwrap();
    path
}
