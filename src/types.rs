use serde::Deserialize;

/// What to pass to a tool when a glob matches nothing.
///
/// - `Literal`: pass the pattern through verbatim, the way a shell without
///   `nullglob` does. The tool then reports the missing path itself.
/// - `Drop`: contribute no paths for that pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedGlobBehaviour {
    #[default]
    Literal,
    Drop,
}
