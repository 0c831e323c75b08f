//! Clang module map generation for a header directory.

pub mod generator;
pub mod scan;

use std::fmt::Write as _;

/// A single-module clang module map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMap {
    /// Module identifier, used verbatim.
    pub name: String,
    /// Header entries in emission order.
    pub headers: Vec<String>,
}

impl ModuleMap {
    /// Builds a module map from discovered headers followed by extra entries.
    #[must_use]
    pub fn new(name: impl Into<String>, discovered: Vec<String>, extra: &[String]) -> Self {
        let mut headers = discovered;
        headers.extend(extra.iter().cloned());
        Self {
            name: name.into(),
            headers,
        }
    }

    /// Renders the module map text.
    ///
    /// Every map ends with `requires cplusplus`, `export *` and the closing
    /// brace, each exactly once.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("module {} {{\n", self.name);
        for header in &self.headers {
            let _ = writeln!(out, "    header \"{header}\"");
        }
        out.push_str("    requires cplusplus\n");
        out.push_str("    export *\n");
        out.push_str("}\n");
        out
    }
}
