//! Falling confetti overlay.
//!
//! Opaque to the rest of the crate: it is mounted for a viewport, ticked, and
//! dropped. It paints over whatever is already in the buffer.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const GLYPHS: [char; 6] = ['*', '+', '•', '◆', '▪', '~'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];
const GRAVITY: f32 = 0.05;
const MAX_FALL_SPEED: f32 = 1.2;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
}

/// A burst of confetti sized to a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    viewport: Rect,
    particles: Vec<Particle>,
}

impl Confetti {
    /// Scatters `count` particles over and above `viewport`.
    pub fn mount<R: Rng + ?Sized>(viewport: Rect, count: usize, rng: &mut R) -> Self {
        let width = f32::from(viewport.width.max(1));
        let height = f32::from(viewport.height.max(1));
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(-height..height / 2.0),
                vx: rng.random_range(-0.3..0.3),
                vy: rng.random_range(0.1..0.6),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();
        Self {
            viewport,
            particles,
        }
    }

    /// The viewport the confetti falls through.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Adopts a new viewport size.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Number of particles in flight.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advances every particle one frame; particles leaving the bottom
    /// re-enter at the top.
    pub fn tick(&mut self) {
        let width = f32::from(self.viewport.width.max(1));
        let height = f32::from(self.viewport.height.max(1));
        for p in &mut self.particles {
            p.x = (p.x + p.vx).rem_euclid(width);
            if p.x >= width {
                p.x = 0.0;
            }
            p.y += p.vy;
            p.vy = (p.vy + GRAVITY).min(MAX_FALL_SPEED);
            if p.y >= height {
                p.y -= height;
                p.vy = GRAVITY;
            }
        }
    }

    fn visible(&self) -> impl Iterator<Item = (u16, u16, &Particle)> {
        self.particles.iter().filter_map(|p| {
            if p.x < 0.0 || p.y < 0.0 {
                return None;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            (x < self.viewport.width && y < self.viewport.height).then_some((x, y, p))
        })
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (dx, dy, p) in self.visible() {
            let (x, y) = (area.x.saturating_add(dx), area.y.saturating_add(dy));
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_mount_fills_viewport() {
        let mut rng = StdRng::seed_from_u64(7);
        let viewport = Rect::new(0, 0, 40, 20);
        let confetti = Confetti::mount(viewport, 50, &mut rng);
        assert_eq!(confetti.len(), 50);
        assert!(confetti.particles.iter().all(|p| p.x >= 0.0 && p.x < 40.0));
    }

    #[test]
    fn test_particles_stay_in_bounds_while_ticking() {
        let mut rng = StdRng::seed_from_u64(42);
        let viewport = Rect::new(0, 0, 30, 10);
        let mut confetti = Confetti::mount(viewport, 80, &mut rng);
        for _ in 0..500 {
            confetti.tick();
        }
        assert!(confetti.particles.iter().all(|p| p.y < 10.0 && p.x < 30.0));
        assert_eq!(confetti.visible().count(), confetti.len());
    }

    #[test]
    fn test_render_only_touches_visible_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let viewport = Rect::new(0, 0, 20, 8);
        let mut confetti = Confetti::mount(viewport, 30, &mut rng);
        for _ in 0..20 {
            confetti.tick();
        }
        let mut buf = Buffer::empty(viewport);
        (&confetti).render(viewport, &mut buf);
        let painted = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert!(painted > 0);
        assert!(painted <= confetti.visible().count());
    }

    #[test]
    fn test_zero_sized_viewport_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::mount(Rect::default(), 5, &mut rng);
        confetti.tick();
        let mut buf = Buffer::empty(Rect::default());
        (&confetti).render(Rect::default(), &mut buf);
    }
}
