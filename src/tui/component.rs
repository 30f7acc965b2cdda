use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as struct fields ("props") and render into
/// a `Frame` within a given `Rect`. Some hold `&mut` references to state
/// that persists across frames (scroll offsets, list selections).
///
/// `render` takes `&mut self` so components can update cached layout data
/// during the render pass, matching ratatui's `StatefulWidget` shape.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
