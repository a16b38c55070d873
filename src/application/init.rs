//! Initialize snippet box use case

use crate::error::Result;
use crate::infrastructure::Workspace;
use std::path::Path;
use tracing::info;

/// Initialize a new snippet box at the specified path.
pub fn init(path: &Path) -> Result<Workspace> {
    let workspace = Workspace::create(path)?;
    info!(root = %path.display(), "initialized snippet box");
    Ok(workspace)
}
