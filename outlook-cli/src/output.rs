//! JSON output shared by every subcommand.

use std::io::Write;

use camino::Utf8Path;
use log::info;
use serde::Serialize;

use crate::CliError;

/// Serialise `value` as pretty JSON and send it to `destination`, or to
/// `writer` when no destination file is configured.
pub(crate) fn emit_json<T>(
    value: &T,
    destination: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    payload.push('\n');
    match destination {
        Some(path) => {
            outlook_fs::write_utf8_file(path, payload.as_bytes()).map_err(|source| {
                CliError::WriteOutputFile {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!("wrote {} bytes to {path}", payload.len());
            Ok(())
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}
