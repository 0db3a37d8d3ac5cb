use std::collections::HashMap;

/// Narrowest width a column can be dragged to, in pixels.
pub const MIN_COLUMN_WIDTH: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        field: String,
        start_x: f32,
        start_width: f32,
    },
}

/// Pointer-drag state machine for header resize handles.
///
/// Pointer tracking is held only while a drag is active; `end` releases it.
#[derive(Debug, Clone, Default)]
pub struct ColumnResizeController {
    state: ResizeState,
    widths: HashMap<String, f32>,
}

impl ColumnResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag on `field`. `current_width` is the rendered width of the
    /// header at the moment the handle is grabbed.
    pub fn begin(&mut self, field: &str, pointer_x: f32, current_width: f32) {
        if self.is_resizing() {
            log::debug!("Resize of '{}' replaces an unfinished drag", field);
        }

        self.state = ResizeState::Resizing {
            field: field.to_string(),
            start_x: pointer_x,
            start_width: current_width,
        };
    }

    /// Returns the new width, or `None` when no drag is active.
    pub fn drag_to(&mut self, pointer_x: f32) -> Option<f32> {
        let ResizeState::Resizing {
            field,
            start_x,
            start_width,
        } = &self.state
        else {
            return None;
        };

        let width = (start_width + (pointer_x - start_x)).max(MIN_COLUMN_WIDTH);
        self.widths.insert(field.clone(), width);
        Some(width)
    }

    pub fn end(&mut self) {
        self.state = ResizeState::Idle;
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    /// Whether document-level move/release listeners would be attached.
    pub fn is_tracking_pointer(&self) -> bool {
        self.is_resizing()
    }

    pub fn width(&self, field: &str) -> Option<f32> {
        self.widths.get(field).copied()
    }

    pub fn widths(&self) -> &HashMap<String, f32> {
        &self.widths
    }

    pub fn has_custom_widths(&self) -> bool {
        !self.widths.is_empty()
    }

    /// Drop every custom width.
    pub fn reset(&mut self) {
        self.widths.clear();
    }
}
