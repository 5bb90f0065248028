/// The kinds of operation document this crate renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// The GraphQL keyword which introduces an operation of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
