//! Grouping bookkeeping: one group per distinct indicator name.

use std::collections::HashMap;

/// Handle to a task group, issued in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupHandle(usize);

impl GroupHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Run-scoped registry mapping indicator names to group handles.
#[derive(Debug, Default)]
pub struct TaskGroupRegistry {
    names: Vec<String>,
    by_name: HashMap<String, GroupHandle>,
}

impl TaskGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `name`, creating it on first sight.
    pub fn ensure(&mut self, name: &str) -> GroupHandle {
        if let Some(handle) = self.by_name.get(name) {
            return *handle;
        }

        let handle = GroupHandle(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    pub fn get(&self, name: &str) -> Option<GroupHandle> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, handle: GroupHandle) -> &str {
        &self.names[handle.0]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Group names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
