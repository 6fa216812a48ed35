//! Road geometry: a centered strip split into equal lanes

use super::level::LevelConfig;
use super::rect::Rect;
use crate::consts::ROAD_PADDING;

/// Horizontal extent of the road for a given viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub left: f32,
    pub width: f32,
    pub lanes: u32,
}

impl Road {
    pub fn new(cfg: &LevelConfig, viewport_width: i32) -> Self {
        Self {
            left: (viewport_width as f32 - cfg.road_width) * 0.5,
            width: cfg.road_width,
            lanes: cfg.lanes.max(1),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.width / self.lanes as f32
    }

    pub fn lane_center(&self, lane: u32) -> f32 {
        self.left + self.lane_width() * (lane as f32 + 0.5)
    }

    /// Smallest allowed left edge for something on the road
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.left + ROAD_PADDING
    }

    /// Largest allowed left edge for something `w` wide
    #[inline]
    pub fn max_x(&self, w: f32) -> f32 {
        self.right() - ROAD_PADDING - w
    }

    /// Pull `rect` back inside the padded road
    pub fn clamp(&self, rect: &mut Rect) {
        rect.clamp_x(self.min_x(), self.max_x(rect.w));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::level_config;

    #[test]
    fn test_road_is_centered() {
        let road = Road::new(&level_config(1), 960);
        assert_eq!(road.left, 200.0);
        assert_eq!(road.right(), 760.0);
    }

    #[test]
    fn test_lane_centers() {
        let road = Road::new(&level_config(1), 960);
        let lw = 560.0 / 3.0;
        assert!((road.lane_center(0) - (200.0 + lw * 0.5)).abs() < 1e-3);
        assert!((road.lane_center(2) - (200.0 + lw * 2.5)).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_respects_padding() {
        let road = Road::new(&level_config(1), 960);
        let mut r = Rect::new(0.0, 0.0, 52.0, 82.0);
        road.clamp(&mut r);
        assert_eq!(r.x, 210.0);
        r.x = 10_000.0;
        road.clamp(&mut r);
        assert_eq!(r.x, 760.0 - 10.0 - 52.0);
    }
}
