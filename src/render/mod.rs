//! Render surface abstraction.
//!
//! The tracker drives a pen-plotter style surface: move the marker, lift or
//! lower the pen, make the marker visible. What "drawing" means is up to the
//! implementation; the tracker only decides the command sequence.

use log::debug;

/// Pen-plotter style drawing surface for one tracked marker.
///
/// The caller holding the single tracker handle owns the surface, which is how
/// the one-marker-per-surface rule is enforced.
pub trait Surface {
    /// Moves the marker to map coordinates (x, y), drawing a line from the
    /// previous position when the pen is down.
    fn move_to(&mut self, x: f64, y: f64);

    /// Lifts the pen; subsequent moves reposition without drawing.
    fn pen_up(&mut self);

    /// Lowers the pen; subsequent moves draw a trail.
    fn pen_down(&mut self);

    /// Makes the marker visible. Called once after the first placement.
    fn show(&mut self);
}

/// A click event dispatched by the host to the tracking loop.
///
/// Pointer dispatch is the host's concern; the loop only sees which target
/// was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    /// The tracked-object marker was clicked: report its current state.
    Marker,
    /// The observer pin was clicked: report upcoming overhead passes.
    Pin,
}

/// Surface that logs pen commands instead of drawing.
///
/// Stands in for a graphical canvas when running headless; the command stream
/// is exactly what a real surface would receive.
#[derive(Debug, Default)]
pub struct TraceSurface {
    inking: bool,
}

impl TraceSurface {
    /// Creates the surface with the pen up.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TraceSurface {
    fn move_to(&mut self, x: f64, y: f64) {
        if self.inking {
            debug!("draw to ({x:.4}, {y:.4})");
        } else {
            debug!("jump to ({x:.4}, {y:.4})");
        }
    }

    fn pen_up(&mut self) {
        self.inking = false;
    }

    fn pen_down(&mut self) {
        self.inking = true;
    }

    fn show(&mut self) {
        debug!("marker visible");
    }
}
