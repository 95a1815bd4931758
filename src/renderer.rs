use crate::color::{BLACK, Rgb};
use crate::effect::{AnimationPhase, blank, fill};
use crate::mode::Scene;

/// Frame renderer
///
/// Owns the pixel buffer and the phase accumulators. Animated scenes are
/// rendered every call; solid and off scenes only when their color differs
/// from what was committed last.
pub struct Renderer<const N: usize> {
    phases: AnimationPhase,
    frame_buffer: [Rgb; N],
    /// Color of the last solid frame, reset by every animated frame
    committed_solid: Option<Rgb>,
}

impl<const N: usize> Default for Renderer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Renderer<N> {
    pub const fn new() -> Self {
        Self {
            phases: AnimationPhase::new(),
            frame_buffer: [BLACK; N],
            committed_solid: None,
        }
    }

    /// Render one tick of `scene`
    ///
    /// Returns the frame to commit, or `None` when the strip already shows
    /// it. Only the accumulators of the rendered effect advance.
    pub fn render(&mut self, scene: Scene) -> Option<&[Rgb]> {
        let color = match scene {
            Scene::Animated(id) => {
                self.phases.render(id, &mut self.frame_buffer);
                self.phases.advance(id);
                self.committed_solid = None;
                return Some(self.frame_buffer.as_slice());
            }
            Scene::Solid(color) => color,
            Scene::Off => BLACK,
        };

        if self.committed_solid == Some(color) {
            return None;
        }
        if color == BLACK {
            blank(&mut self.frame_buffer);
        } else {
            fill(color, &mut self.frame_buffer);
        }
        self.committed_solid = Some(color);
        Some(self.frame_buffer.as_slice())
    }

    pub fn phases(&self) -> &AnimationPhase {
        &self.phases
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }
}
