/// Workspace-wide result alias so crates do not spell out anyhow everywhere.
pub type Result<T> = anyhow::Result<T>;
