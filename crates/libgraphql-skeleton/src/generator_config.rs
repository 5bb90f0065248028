use std::path::Path;
use std::path::PathBuf;

/// How generated documents are laid out on disk.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputLayout {
    /// A single `all_queries_mutations.graphql` file with a commented section
    /// per document.
    Combined,

    /// A `<TypeName>_query.graphql` and `<TypeName>_mutation.graphql` file
    /// per type.
    #[default]
    PerType,
}
impl OutputLayout {
    /// The [`MutationStyle`] used with this layout unless one is chosen
    /// explicitly.
    pub fn default_mutation_style(&self) -> MutationStyle {
        match self {
            Self::Combined => MutationStyle::Placeholder,
            Self::PerType => MutationStyle::ReuseFields,
        }
    }

    /// The [`Strictness`] used with this layout unless one is chosen
    /// explicitly.
    pub fn default_strictness(&self) -> Strictness {
        match self {
            Self::Combined => Strictness::Lenient,
            Self::PerType => Strictness::Strict,
        }
    }
}

/// What goes in the body of a generated mutation document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MutationStyle {
    /// Mutations are not generated; an empty placeholder is written instead.
    Placeholder,

    /// The mutation selects the same fields as the type's query, under a
    /// `mutation` keyword. Such documents are rarely valid against the schema
    /// since a type's own fields are not mutation fields.
    #[default]
    ReuseFields,
}

/// How failures are reported by callers which run a generator.
///
/// The [`Generator`](crate::Generator) itself never reads this setting; it
/// always returns a [`GenerateError`](crate::GenerateError) on failure. It
/// travels in [`GeneratorConfig`] so that a caller can resolve it alongside
/// the layout defaults and then decide how to present that error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strictness {
    /// Known failures are reported with a short message and treated as a
    /// normal exit.
    Lenient,

    /// Failures are reported with full diagnostics and a failing exit status.
    #[default]
    Strict,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub(crate) layout: OutputLayout,
    pub(crate) mutation_style: MutationStyle,
    pub(crate) output_dir: PathBuf,
    pub(crate) strictness: Strictness,
}
impl GeneratorConfig {
    /// A config using `layout` along with the layout's default
    /// [`MutationStyle`] and [`Strictness`]. Output goes to the current
    /// working directory.
    pub fn for_layout(layout: OutputLayout) -> Self {
        Self {
            layout,
            mutation_style: layout.default_mutation_style(),
            output_dir: PathBuf::from("."),
            strictness: layout.default_strictness(),
        }
    }

    pub fn layout(&self) -> OutputLayout {
        self.layout
    }

    pub fn mutation_style(&self) -> MutationStyle {
        self.mutation_style
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    /// How the caller should report a failed run. Not consulted by
    /// [`Generator`](crate::Generator).
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn with_mutation_style(mut self, mutation_style: MutationStyle) -> Self {
        self.mutation_style = mutation_style;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}
impl std::default::Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_layout(OutputLayout::default())
    }
}
