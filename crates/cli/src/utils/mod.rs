pub mod workspace;

pub use workspace::{find_workspace_root, resolve_workspace_root};
