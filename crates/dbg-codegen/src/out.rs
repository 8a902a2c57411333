use proc_macro2::TokenStream;

/// Generated code, split into sections.
#[derive(Debug)]
pub struct Output {
    /// One `use` item per import
    pub imports: Vec<TokenStream>,

    /// The `config` module
    pub config: TokenStream,

    /// Per-table output, in model order
    pub tables: Vec<TableOutput>,

    /// Delete support types, entity-delete procedures, then relation-delete
    /// procedures
    pub procedures: Vec<TokenStream>,

    /// The `lookup` module
    pub lookup: TokenStream,
}

/// Generated code for a single table
#[derive(Debug)]
pub struct TableOutput {
    /// Symbol of the table the output is associated with
    pub name: String,

    /// Struct, trait impls and relation accessors
    pub body: TokenStream,
}

impl Output {
    /// Concatenate every section into one source file.
    ///
    /// The text is not formatted; each item is rendered on one line.
    pub fn render(&self) -> String {
        let items = self
            .imports
            .iter()
            .chain([&self.config])
            .chain(self.tables.iter().map(|table| &table.body))
            .chain(&self.procedures)
            .chain([&self.lookup]);

        let mut out = String::new();

        for item in items {
            out.push_str(&item.to_string());
            out.push_str("\n\n");
        }

        out
    }

    pub fn table(&self, name: &str) -> Option<&TableOutput> {
        self.tables.iter().find(|table| table.name == name)
    }
}
