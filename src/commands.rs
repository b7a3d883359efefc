//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

/// Side effects requested by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Lay out and repaint the workspace
    Redraw,
    /// Tool placement changed; store the layout snapshot
    PersistLayout,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw plus persistence, for changes to where tools are docked
    pub fn redraw_and_persist() -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::PersistLayout])
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::PersistLayout => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    pub fn needs_persist(&self) -> bool {
        match self {
            Cmd::PersistLayout => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_persist()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flags() {
        let cmd = Cmd::redraw_and_persist();
        assert!(cmd.needs_redraw());
        assert!(cmd.needs_persist());
        assert!(!Cmd::Redraw.needs_persist());
        assert!(!Cmd::batch(vec![Cmd::None]).needs_redraw());
    }
}
