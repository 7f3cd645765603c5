use std::time::Duration;

/// Minimal time wanted between two images
pub const FRAME_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 30);

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Window and view configuration of one exercise.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// World units spanned by the shorter side of the window
    pub view_size: f32,
    pub frame_period: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: String::from("gl-td"),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            view_size: 2.0,
            frame_period: FRAME_PERIOD,
        }
    }
}

impl Settings {
    pub fn new(title: &str) -> Self {
        Settings {
            title: title.to_owned(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn with_view_size(mut self, view_size: f32) -> Self {
        self.view_size = view_size;
        self
    }

    #[inline]
    pub fn with_frame_period(mut self, frame_period: Duration) -> Self {
        self.frame_period = frame_period;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::new("TD2");
        assert_eq!(s.title, "TD2");
        assert_eq!((s.width, s.height), (800, 800));
        assert_eq!(s.view_size, 2.0);
        assert_eq!(s.frame_period.as_millis(), 33);
    }

    #[test]
    fn test_builder() {
        let s = Settings::new("x")
            .with_inner_size(640, 480)
            .with_view_size(6.0)
            .with_frame_period(Duration::from_millis(16));
        assert_eq!((s.width, s.height), (640, 480));
        assert_eq!(s.view_size, 6.0);
        assert_eq!(s.frame_period, Duration::from_millis(16));
    }
}
