use crate::geometry::Rect;

/// Whether a snapshot's entries are known to be topmost-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackingOrder {
    /// Entries are ordered front to back; the first entry is topmost
    FrontToBack,
    /// The source makes no ordering promise
    Unspecified,
}

/// One on-screen window as reported by the window server
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshotEntry {
    owner_name: Option<String>,
    owner_pid: Option<i32>,
    /// `None` when the reported bounds could not be read as a rectangle
    bounds: Option<Rect>,
    layer: i32,
}

impl WindowSnapshotEntry {
    pub fn new(
        owner_name: Option<String>,
        owner_pid: Option<i32>,
        bounds: Option<Rect>,
        layer: i32,
    ) -> Self {
        Self {
            owner_name,
            owner_pid,
            bounds,
            layer,
        }
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    pub fn owner_pid(&self) -> Option<i32> {
        self.owner_pid
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }
}

/// Point-in-time list of on-screen windows.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    entries: Vec<WindowSnapshotEntry>,
    stacking: StackingOrder,
}

impl WindowSnapshot {
    pub fn new(entries: Vec<WindowSnapshotEntry>, stacking: StackingOrder) -> Self {
        Self { entries, stacking }
    }

    /// Snapshot whose entries are topmost-first.
    pub fn front_to_back(entries: Vec<WindowSnapshotEntry>) -> Self {
        Self::new(entries, StackingOrder::FrontToBack)
    }

    pub fn entries(&self) -> &[WindowSnapshotEntry] {
        &self.entries
    }

    pub fn stacking(&self) -> StackingOrder {
        self.stacking
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
