use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::Stdio,
};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::{PropertyError, PropertyQuery};

/// Property queries answered by spawning the `getprop` tool.
///
/// Each query runs `<path> <name> <default>` and captures stdout. The
/// child is killed if the query future is dropped, so callers can bound
/// it with a timeout.
#[derive(Debug, Clone)]
pub struct GetpropQuery {
    path: PathBuf,
}

impl GetpropQuery {
    /// Creates a query backed by the tool at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing tool.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PropertyQuery for GetpropQuery {
    fn is_available(&self) -> bool {
        is_executable(&self.path)
    }

    #[instrument(skip(self), fields(tool = %self.path.display()))]
    async fn get(&self, name: &str, default: &str) -> Result<String, PropertyError> {
        let output = Command::new(&self.path)
            .arg(name)
            .arg(default)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| PropertyError::SpawnFailed {
                path: self.path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PropertyError::QueryFailed {
                name: name.to_string(),
                status: output.status.to_string(),
            });
        }

        let value = String::from_utf8(output.stdout).map_err(|e| PropertyError::InvalidOutput {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        debug!("{name} = {:?}", value.trim());

        Ok(value)
    }
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
