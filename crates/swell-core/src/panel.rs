use glam::Vec2;

/// Transient state of the draggable, collapsible overlay panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    /// Top-left within the stage once the user has moved it; `None` keeps
    /// the stylesheet's placement.
    pub position: Option<Vec2>,
    pub collapsed: bool,
    pub drag: DragState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Pointer position relative to the panel's top-left at grab time.
    pub grab_offset: Vec2,
}

impl PanelState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            ..Self::default()
        }
    }

    pub fn begin_drag(&mut self, pointer: Vec2, panel_top_left: Vec2) {
        self.drag = DragState {
            active: true,
            grab_offset: pointer - panel_top_left,
        };
    }

    /// Move under the pointer, kept fully inside the stage. Returns the new
    /// top-left (stage-relative), or `None` when no drag is in progress.
    pub fn drag_to(
        &mut self,
        pointer: Vec2,
        stage_top_left: Vec2,
        stage_size: Vec2,
        panel_size: Vec2,
    ) -> Option<Vec2> {
        if !self.drag.active {
            return None;
        }
        let max = (stage_size - panel_size).max(Vec2::ZERO);
        let pos = (pointer - stage_top_left - self.drag.grab_offset).clamp(Vec2::ZERO, max);
        self.position = Some(pos);
        Some(pos)
    }

    /// Returns whether a drag was actually in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.drag.active, false)
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Toggle button glyph for the current state.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.collapsed {
            "+"
        } else {
            "−"
        }
    }
}
