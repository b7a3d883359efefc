//! Store: owns the workspace and publishes layout changes
//!
//! Every dispatch runs [`update`] and then compares the layout snapshot with
//! the last published one. Subscribers are called only when it changed.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::snapshot::LayoutSnapshot;
use crate::update::update;
use crate::workspace::Workspace;

pub type Subscriber = Box<dyn FnMut(&LayoutSnapshot)>;

pub struct Store {
    workspace: Workspace,
    published: LayoutSnapshot,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(workspace: Workspace) -> Self {
        let published = LayoutSnapshot::capture(&workspace);
        Self {
            workspace,
            published,
            subscribers: Vec::new(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Last published snapshot
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.published
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&LayoutSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        tracing::trace!(?msg, "dispatch");
        let cmd = update(&mut self.workspace, msg);
        self.publish();
        cmd
    }

    /// Run `f` against the workspace directly (e.g. a modal resize), then
    /// publish like a dispatch
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut Workspace) -> R) -> R {
        let result = f(&mut self.workspace);
        self.publish();
        result
    }

    pub fn into_workspace(self) -> Workspace {
        self.workspace
    }

    fn publish(&mut self) {
        let snapshot = LayoutSnapshot::capture(&self.workspace);
        if snapshot == self.published {
            return;
        }

        if let Some(change) = crate::tracing::describe_change(&self.published, &snapshot) {
            tracing::debug!(%change, "layout changed");
        }

        self.published = snapshot;
        for subscriber in &mut self.subscribers {
            subscriber(&self.published);
        }
    }
}
