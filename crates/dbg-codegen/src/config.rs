/// Path of the runtime crate used when none is configured.
pub const DEFAULT_RUNTIME: &str = "dbg_runtime";

/// Code generation options.
///
/// ```
/// let config = dbg_codegen::Config::new()
///     .runtime("crate::runtime")
///     .config_line("pub const DATABASE: &str = \"app.db\";")
///     .import("Sex", "models");
///
/// assert_eq!(config.runtime_path(), "crate::runtime");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    runtime: String,

    /// Lines inserted verbatim into the `config` module
    lines: Vec<String>,

    imports: Vec<Import>,
}

/// `import NAME from MODULE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub module: String,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Set the path the generated code uses to reach the runtime crate.
    pub fn runtime(mut self, path: impl Into<String>) -> Config {
        self.runtime = path.into();
        self
    }

    pub fn config_line(mut self, line: impl Into<String>) -> Config {
        self.lines.push(line.into());
        self
    }

    pub fn config_lines<I>(mut self, lines: I) -> Config
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Bring `name` from `module` into scope of the generated code. Modules
    /// may be written with `.` separators (`app.models`).
    pub fn import(mut self, name: impl Into<String>, module: impl Into<String>) -> Config {
        self.imports.push(Import {
            name: name.into(),
            module: module.into(),
        });
        self
    }

    pub fn runtime_path(&self) -> &str {
        &self.runtime
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            runtime: DEFAULT_RUNTIME.to_string(),
            lines: vec![],
            imports: vec![],
        }
    }
}

impl Import {
    /// Module path with `.` separators normalized to `::`.
    pub fn module_path(&self) -> String {
        self.module.replace('.', "::")
    }
}
