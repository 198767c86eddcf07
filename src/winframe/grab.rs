use crate::input::Grip;

/// A pointer-driven operation the frame asks the window manager to start.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GrabOp {
    Moving,
    Resizing(Grip),
}

/// The window manager's current pointer operation, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragState {
    None,
    Moving,
    Resizing(Grip),
    Other,
}

impl DragState {
    #[inline]
    pub fn is_active(&self) -> bool {
        *self != DragState::None
    }
}

impl Default for DragState {
    fn default() -> Self {
        DragState::None
    }
}

impl From<GrabOp> for DragState {
    fn from(op: GrabOp) -> Self {
        match op {
            GrabOp::Moving => DragState::Moving,
            GrabOp::Resizing(grip) => DragState::Resizing(grip),
        }
    }
}
