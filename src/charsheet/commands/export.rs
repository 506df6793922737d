use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CharsheetError, Result};
use crate::format::{self, Artifact, ExportFormat, MarkdownOptions};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render `doc` in `format`. With `out_dir` the artifact is also written there under
/// its suggested filename, replacing any previous export.
pub fn run(
    doc: &Document,
    format: ExportFormat,
    options: &MarkdownOptions,
    out_dir: Option<&Path>,
) -> Result<CmdResult> {
    let artifact = format::export(doc, format, options);
    let mut result = CmdResult::default();

    if let Some(dir) = out_dir {
        let path = write_artifact(&artifact, dir)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} to {}",
            format,
            path.display()
        )));
        result.written_to = Some(path);
    }

    Ok(result.with_artifact(artifact))
}

fn write_artifact(artifact: &Artifact, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(CharsheetError::Io)?;
    }
    let path = dir.join(artifact.filename);
    fs::write(&path, &artifact.content).map_err(CharsheetError::Io)?;
    debug!(path = %path.display(), mime = artifact.mime, "wrote export");
    Ok(path)
}
