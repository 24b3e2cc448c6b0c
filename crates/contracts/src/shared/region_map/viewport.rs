//! Zoom / pan / pinch transform for the rendered map.
//!
//! Pure math over a container and a content box; knows nothing about
//! regions. The web client renders [`Transform::css`] on a wrapper element
//! with `transform-origin: 0 0`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Exponent applied per zoom-in / zoom-out button press
    pub zoom_step: f64,
    /// Exponent applied per wheel notch
    pub wheel_step: f64,
    pub limit_to_bounds: bool,
    pub center_on_init: bool,
    /// Off so double clicks stay free for region selection
    pub double_click_zoom: bool,
    pub pinch: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            min_scale: 0.3,
            max_scale: 8.0,
            zoom_step: 0.3,
            wheel_step: 0.2,
            limit_to_bounds: true,
            center_on_init: true,
            double_click_zoom: false,
            pinch: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchStart {
    distance: f64,
    scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    config: ViewportConfig,
    container: Size,
    content: Size,
    initial: Transform,
    transform: Transform,
    pinch: Option<PinchStart>,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        let scale = config
            .initial_scale
            .clamp(config.min_scale, config.max_scale);
        let initial = Transform {
            scale,
            x: 0.0,
            y: 0.0,
        };
        Self {
            config,
            container: Size::default(),
            content: Size::default(),
            initial,
            transform: initial,
            pinch: None,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn initial(&self) -> Transform {
        self.initial
    }

    /// Measure container and unscaled content. Recomputes the initial
    /// transform; an untouched viewport follows it, a moved one is re-clamped.
    pub fn set_bounds(&mut self, container: Size, content: Size) {
        let untouched = self.transform == self.initial;
        self.container = container;
        self.content = content;

        let scale = self.initial.scale;
        let (x, y) = if self.config.center_on_init {
            (
                (container.width - content.width * scale) / 2.0,
                (container.height - content.height * scale) / 2.0,
            )
        } else {
            (0.0, 0.0)
        };
        self.initial = Transform { scale, x, y };

        if untouched {
            self.transform = self.initial;
        } else {
            self.clamp_pan();
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_step, self.container.center());
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.config.zoom_step, self.container.center());
    }

    /// One wheel notch at `cursor` (container coordinates). Negative
    /// `delta_y` (scrolling up) zooms in.
    pub fn wheel(&mut self, delta_y: f64, cursor: (f64, f64)) {
        if delta_y == 0.0 {
            return;
        }
        let step = if delta_y < 0.0 {
            self.config.wheel_step
        } else {
            -self.config.wheel_step
        };
        self.zoom_by(step, cursor);
    }

    /// Multiply the scale by `e^delta`, keeping `focal` fixed on screen.
    pub fn zoom_by(&mut self, delta: f64, focal: (f64, f64)) {
        let scale = self.transform.scale * delta.exp();
        self.zoom_to(scale, focal);
    }

    pub fn zoom_to(&mut self, scale: f64, focal: (f64, f64)) {
        let new_scale = self.clamp_scale(scale);
        let (x, y) = zoom_pan_at_cursor(
            focal,
            self.transform.scale,
            new_scale,
            (self.transform.x, self.transform.y),
        );
        self.transform = Transform {
            scale: new_scale,
            x,
            y,
        };
        self.clamp_pan();
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.x += dx;
        self.transform.y += dy;
        self.clamp_pan();
    }

    pub fn begin_pinch(&mut self, distance: f64) {
        if !self.config.pinch || distance <= 0.0 {
            return;
        }
        self.pinch = Some(PinchStart {
            distance,
            scale: self.transform.scale,
        });
    }

    /// Update an active pinch with the current finger distance and midpoint.
    pub fn pinch(&mut self, distance: f64, center: (f64, f64)) -> bool {
        let Some(start) = self.pinch else {
            return false;
        };
        if distance <= 0.0 {
            return false;
        }
        self.zoom_to(start.scale * distance / start.distance, center);
        true
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns false and leaves the transform alone when double-click zoom is
    /// disabled.
    pub fn double_click(&mut self, point: (f64, f64)) -> bool {
        if !self.config.double_click_zoom {
            return false;
        }
        self.zoom_by(self.config.zoom_step, point);
        true
    }

    pub fn reset(&mut self) {
        self.pinch = None;
        self.transform = self.initial;
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    fn clamp_pan(&mut self) {
        if !self.config.limit_to_bounds {
            return;
        }
        let scale = self.transform.scale;
        self.transform.x = clamp_axis(
            self.transform.x,
            self.container.width,
            self.content.width * scale,
        );
        self.transform.y = clamp_axis(
            self.transform.y,
            self.container.height,
            self.content.height * scale,
        );
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

/// New pan offsets so the content point under `cursor` stays under it when
/// the scale changes from `old_scale` to `new_scale`.
fn zoom_pan_at_cursor(
    cursor: (f64, f64),
    old_scale: f64,
    new_scale: f64,
    old_pan: (f64, f64),
) -> (f64, f64) {
    let content_x = (cursor.0 - old_pan.0) / old_scale;
    let content_y = (cursor.1 - old_pan.1) / old_scale;
    (
        cursor.0 - content_x * new_scale,
        cursor.1 - content_y * new_scale,
    )
}

/// Content larger than the container may not expose empty space; smaller
/// content may not leave the container.
fn clamp_axis(offset: f64, container: f64, content: f64) -> f64 {
    let slack = container - content;
    offset.clamp(slack.min(0.0), slack.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(config: ViewportConfig) -> Viewport {
        let mut viewport = Viewport::new(config);
        viewport.set_bounds(Size::new(800.0, 500.0), Size::new(800.0, 500.0));
        viewport
    }

    #[test]
    fn test_default_config_is_consistent() {
        let config = ViewportConfig::default();
        assert!(config.min_scale > 0.0);
        assert!(config.min_scale <= config.initial_scale);
        assert!(config.initial_scale <= config.max_scale);
        assert!(!config.double_click_zoom);
    }

    #[test]
    fn test_zoom_in_never_exceeds_max() {
        let mut viewport = measured(ViewportConfig {
            max_scale: 2.0,
            ..ViewportConfig::default()
        });
        for _ in 0..5 {
            viewport.zoom_in();
            assert!(viewport.transform().scale <= 2.0);
        }
        assert_eq!(viewport.transform().scale, 2.0);

        let mut viewport = measured(ViewportConfig::default());
        for _ in 0..5 {
            viewport.zoom_in();
        }
        assert!(viewport.transform().scale <= viewport.config().max_scale);
    }

    #[test]
    fn test_zoom_out_never_below_min() {
        let mut viewport = measured(ViewportConfig::default());
        for _ in 0..20 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.transform().scale, 0.3);
    }

    #[test]
    fn test_reset_restores_initial_exactly() {
        let mut viewport = measured(ViewportConfig::default());
        let initial = viewport.transform();

        viewport.zoom_in();
        viewport.zoom_in();
        viewport.pan_by(-123.4, 56.7);
        viewport.wheel(-1.0, (10.0, 20.0));
        viewport.begin_pinch(100.0);
        viewport.pinch(180.0, (300.0, 200.0));
        viewport.zoom_out();
        assert_ne!(viewport.transform(), initial);

        viewport.reset();
        assert_eq!(viewport.transform(), initial);
        assert!(!viewport.is_pinching());
    }

    #[test]
    fn test_zoom_keeps_focal_point() {
        let mut viewport = measured(ViewportConfig::default());
        let focal = (200.0, 100.0);
        let before = viewport.transform();
        let content_point = (
            (focal.0 - before.x) / before.scale,
            (focal.1 - before.y) / before.scale,
        );

        viewport.zoom_by(0.5, focal);
        let after = viewport.transform();
        assert!((after.x + content_point.0 * after.scale - focal.0).abs() < 1e-9);
        assert!((after.y + content_point.1 * after.scale - focal.1).abs() < 1e-9);
    }

    #[test]
    fn test_pan_is_bounded() {
        let mut viewport = measured(ViewportConfig::default());

        // At initial scale the content fills the container exactly
        viewport.pan_by(50.0, 50.0);
        assert_eq!((viewport.transform().x, viewport.transform().y), (0.0, 0.0));

        viewport.zoom_to(2.0, (0.0, 0.0));
        viewport.pan_by(-10_000.0, -10_000.0);
        let t = viewport.transform();
        assert_eq!(t.x, 800.0 - 1600.0);
        assert_eq!(t.y, 500.0 - 1000.0);

        viewport.pan_by(10_000.0, 10_000.0);
        assert_eq!((viewport.transform().x, viewport.transform().y), (0.0, 0.0));
    }

    #[test]
    fn test_centered_on_init() {
        let mut viewport = Viewport::new(ViewportConfig::default());
        viewport.set_bounds(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        let t = viewport.transform();
        assert_eq!((t.scale, t.x, t.y), (1.0, 200.0, 150.0));
    }

    #[test]
    fn test_double_click_is_ignored() {
        let mut viewport = measured(ViewportConfig::default());
        let before = viewport.transform();
        assert!(!viewport.double_click((100.0, 100.0)));
        assert_eq!(viewport.transform(), before);
    }

    #[test]
    fn test_wheel_direction() {
        let mut viewport = measured(ViewportConfig::default());
        viewport.wheel(-120.0, (400.0, 250.0));
        assert!(viewport.transform().scale > 1.0);

        viewport.reset();
        viewport.wheel(120.0, (400.0, 250.0));
        assert!(viewport.transform().scale < 1.0);

        viewport.reset();
        viewport.wheel(0.0, (400.0, 250.0));
        assert_eq!(viewport.transform().scale, 1.0);
    }

    #[test]
    fn test_pinch_scales_by_distance_ratio() {
        let mut viewport = measured(ViewportConfig::default());
        assert!(!viewport.pinch(200.0, (0.0, 0.0)));

        viewport.begin_pinch(100.0);
        assert!(viewport.pinch(250.0, (400.0, 250.0)));
        assert!((viewport.transform().scale - 2.5).abs() < 1e-12);

        viewport.end_pinch();
        assert!(!viewport.pinch(500.0, (400.0, 250.0)));
    }

    #[test]
    fn test_css_transform() {
        let t = Transform {
            scale: 1.5,
            x: -10.0,
            y: 4.0,
        };
        assert_eq!(t.css(), "translate(-10px, 4px) scale(1.5)");
    }
}
