use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_skeleton::GenerateError;
use libgraphql_skeleton::Generator;
use libgraphql_skeleton::GeneratorConfig;
use libgraphql_skeleton::MutationStyle;
use libgraphql_skeleton::OutputLayout;
use libgraphql_skeleton::Strictness;
use libgraphql_skeleton::schema::SchemaLoadError;
use std::path::Path;
use std::path::PathBuf;

pub(crate) const USAGE: &str = "Usage: graphql-skeleton generate <SCHEMA_FILE>";

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum LayoutArg {
    /// One `all_queries_mutations.graphql` file for every type.
    Combined,

    /// A `<Type>_query.graphql` and `<Type>_mutation.graphql` file per type.
    PerType,
}
impl std::convert::From<LayoutArg> for OutputLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Combined => OutputLayout::Combined,
            LayoutArg::PerType => OutputLayout::PerType,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum MutationsArg {
    /// Write an empty placeholder instead of a mutation.
    Placeholder,

    /// Select the type's own fields under a `mutation` operation.
    ReuseFields,
}
impl std::convert::From<MutationsArg> for MutationStyle {
    fn from(value: MutationsArg) -> Self {
        match value {
            MutationsArg::Placeholder => MutationStyle::Placeholder,
            MutationsArg::ReuseFields => MutationStyle::ReuseFields,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub(crate) enum StrictnessArg {
    /// Report known failures with a short message and exit normally.
    Lenient,

    /// Report failures with full diagnostics and exit with a failure status.
    Strict,
}
impl std::convert::From<StrictnessArg> for Strictness {
    fn from(value: StrictnessArg) -> Self {
        match value {
            StrictnessArg::Lenient => Strictness::Lenient,
            StrictnessArg::Strict => Strictness::Strict,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value_t=LayoutArg::PerType,
        help="How generated documents are laid out on disk.",
        long,
        value_enum,
    )]
    layout: LayoutArg,

    #[arg(
        help="What to write for each type's mutation. Defaults to \
             `reuse-fields` for the `per-type` layout and `placeholder` for \
             the `combined` layout.",
        long,
        value_enum,
    )]
    mutations: Option<MutationsArg>,

    #[arg(
        default_value=".",
        help="Directory to write generated documents into.",
        long,
    )]
    out_dir: PathBuf,

    #[arg(
        help="Path to a JSON file containing the result of a GraphQL \
             introspection query.",
        name="SCHEMA_FILE",
    )]
    schema_file: PathBuf,

    #[arg(
        help="How failures are reported. Defaults to `strict` for the \
             `per-type` layout and `lenient` for the `combined` layout.",
        long,
        value_enum,
    )]
    strictness: Option<StrictnessArg>,

    // Accepted so that lenient runs can ignore them rather than fail.
    #[arg(hide=true, name="EXTRA_ARGS")]
    extra_args: Vec<String>,
}
impl GenerateCmd {
    pub(crate) fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::for_layout(self.layout.into())
            .with_output_dir(self.out_dir.to_owned());
        if let Some(mutations) = self.mutations {
            config = config.with_mutation_style(mutations.into());
        }
        if let Some(strictness) = self.strictness {
            config = config.with_strictness(strictness.into());
        }
        config
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = self.generator_config();
        let strictness = config.strictness();

        if !self.extra_args.is_empty() {
            match strictness {
                Strictness::Strict => {
                    return CommandResult::stdout(format_args!("{USAGE}"));
                },
                Strictness::Lenient => log::warn!(
                    "Ignoring {} extra argument(s): {:?}",
                    self.extra_args.len(),
                    self.extra_args,
                ),
            }
        }

        log::debug!(
            "Generating documents from {:#?} into {:#?} ({:?} layout, {:?} \
            mutations, {:?}).",
            self.schema_file,
            config.output_dir(),
            config.layout(),
            config.mutation_style(),
            strictness,
        );

        match Generator::new(config).generate_from_file(&self.schema_file) {
            Ok(summary) => {
                for path in summary.written_paths() {
                    log::debug!("Wrote {path:#?}.");
                }
                CommandResult::success(format_args!(
                    "{}",
                    output_utils::SUCCESS_MESSAGE,
                ))
            },

            Err(err) => match strictness {
                Strictness::Lenient => CommandResult::success(format_args!(
                    "{}",
                    lenient_error_message(&self.schema_file, &err),
                )),

                Strictness::Strict => CommandResult::stderr(format_args!(
                    "{} Errors generating documents: {err}\n{err:#?}",
                    output_utils::RED_X,
                )),
            },
        }
    }
}

/// A short, user-facing description of `err` for lenient runs.
pub(crate) fn lenient_error_message(
    schema_file: &Path,
    err: &GenerateError,
) -> String {
    match err {
        GenerateError::Load(SchemaLoadError::FileNotFound(_)) => format!(
            "Schema file '{}' not found.",
            schema_file.display(),
        ),

        GenerateError::Load(SchemaLoadError::MalformedInput { .. }) => format!(
            "Schema file '{}' is not a valid JSON file.",
            schema_file.display(),
        ),

        GenerateError::Load(err @ SchemaLoadError::Validation { .. }) => {
            format!("An error occurred: {err}.")
        },

        other => format!("An unexpected error occurred: {other}"),
    }
}
