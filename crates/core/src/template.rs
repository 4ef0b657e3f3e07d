// crates/core/src/template.rs
//! The textual skeleton around generated blocks.

/// Static layout for one entity kind's output: header, per-block shape,
/// separator, footer. The generator owns how these pieces are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Text before the first block. Ends with the newline the first block
    /// continues from.
    pub header: String,
    /// Opening of every block, through the line the first field starts on.
    pub block_open: String,
    /// Indent prefixed to each `Name = value` field line.
    pub field_indent: &'static str,
    /// Closing of every block, starting with the newline after the last field.
    pub block_close: String,
    /// Inserted strictly between consecutive blocks.
    pub separator: String,
    /// Appended after the final block (and only when at least one block
    /// was emitted).
    pub terminator: String,
    /// Text after the last block.
    pub footer: String,
}

impl Template {
    /// The EF Core `modelBuilder.Entity<X>().HasData( ... );` wrapper.
    pub fn has_data(entity_name: &str) -> Self {
        Self {
            header: format!("modelBuilder.Entity<{entity_name}>().HasData(\n"),
            block_open: format!("    new {entity_name}\n    {{\n"),
            field_indent: "        ",
            block_close: "\n    }".to_string(),
            separator: ",\n".to_string(),
            terminator: "\n".to_string(),
            footer: ");".to_string(),
        }
    }

    /// Assemble one block from already-formatted `(column, literal)` pairs.
    pub fn render_block(&self, fields: &[(&str, String)]) -> String {
        let body = fields
            .iter()
            .map(|(column, literal)| format!("{}{} = {}", self.field_indent, column, literal))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{}{}{}", self.block_open, body, self.block_close)
    }
}
