//! Export command handler.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the export command.
///
/// Without `output` the document goes to stdout so it can be piped.
pub async fn execute(ctx: &CliContext, output: Option<&Path>, with_metadata: bool) -> Result<()> {
    let export = ctx.app().export();
    match output {
        Some(path) => {
            export.export_to_file(path, with_metadata).await?;
            eprintln!("Exported configuration to {}", path.display());
        }
        None => {
            let text = export.export(with_metadata).await?;
            println!("{text}");
        }
    }
    Ok(())
}
