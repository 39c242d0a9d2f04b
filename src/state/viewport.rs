// Zoom/pan transform state for the fullscreen lightbox.

/// Lower bound on the magnification factor.
pub const MIN_SCALE: f64 = 0.05;
/// Upper bound on the magnification factor.
pub const MAX_SCALE: f64 = 20.0;
/// Scale change per wheel delta unit; wheel-up (negative delta) zooms in.
pub const WHEEL_SENSITIVITY: f64 = 0.001;
/// Pixels kept free on each side of the image by the initial fit.
pub const FIT_MARGIN: f64 = 40.0;

/// Pointer position and pan offset captured at drag start. Pan deltas are
/// computed against this anchor, so only the first mousedown and the latest
/// move matter regardless of how many moves arrive in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

/// The authoritative transform state of the one open lightbox. Plain data,
/// no DOM handles: the component layer feeds it events and reads
/// [`ViewportState::css_transform`] back out.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    /// Translation in device pixels, applied after scaling, measured from the
    /// viewport center.
    pub pan_x: f64,
    pub pan_y: f64,
    /// Fit-to-viewport scale computed at open time; the reset target.
    pub initial_scale: f64,
    drag: Option<DragAnchor>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            initial_scale: 1.0,
            drag: None,
        }
    }
}

/// Scale at which content of `natural_w x natural_h` fits a
/// `viewport_w x viewport_h` box with `margin` pixels kept free on each side,
/// capped at 1.0: the fit never upscales past native resolution.
///
/// All inputs must be positive; the caller only invokes this after the overlay
/// is mounted and the image has decoded, so the geometry is known valid.
pub fn compute_fit_scale(
    natural_w: f64,
    natural_h: f64,
    viewport_w: f64,
    viewport_h: f64,
    margin: f64,
) -> f64 {
    debug_assert!(natural_w > 0.0 && natural_h > 0.0);
    debug_assert!(viewport_w > 0.0 && viewport_h > 0.0);
    let fit_x = (viewport_w - 2.0 * margin) / natural_w;
    let fit_y = (viewport_h - 2.0 * margin) / natural_h;
    fit_x.min(fit_y).min(1.0)
}

impl ViewportState {
    /// Seed scale and reset baseline from the decoded image and the mounted
    /// overlay geometry. Called exactly once per asset, at decode-complete.
    pub fn fit(&mut self, natural_w: f64, natural_h: f64, viewport_w: f64, viewport_h: f64) {
        let fit = compute_fit_scale(natural_w, natural_h, viewport_w, viewport_h, FIT_MARGIN)
            .clamp(MIN_SCALE, MAX_SCALE);
        self.scale = fit;
        self.initial_scale = fit;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Wheel zoom, anchored at the viewport center. Pan is untouched.
    pub fn wheel(&mut self, delta_y: f64) {
        self.scale = (self.scale + delta_y * -WHEEL_SENSITIVITY).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Begin a drag at the given pointer position.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor {
            pointer_x: x,
            pointer_y: y,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
        });
    }

    /// Pan relative to the drag anchor. No-op unless a drag is active.
    /// Pan is deliberately unclamped; reset() is the recovery path.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(anchor) = self.drag {
            self.pan_x = anchor.pan_x + (x - anchor.pointer_x);
            self.pan_y = anchor.pan_y + (y - anchor.pointer_y);
        }
    }

    /// End the drag. Scale and pan keep their current values.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Back to the fit baseline: initial scale, centered. Drag state is
    /// unaffected.
    pub fn reset(&mut self) {
        self.scale = self.initial_scale;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The affine transform the overlay's image wrapper should carry.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_1200x800_3000x2000() -> ViewportState {
        let mut vp = ViewportState::default();
        vp.fit(3000.0, 2000.0, 1200.0, 800.0);
        vp
    }

    #[test]
    fn fit_scale_never_exceeds_native() {
        // Smaller than the viewport minus margins on both axes: shown 1:1.
        let s = compute_fit_scale(400.0, 300.0, 1200.0, 800.0, FIT_MARGIN);
        assert_eq!(s, 1.0);
        // Larger: downscaled to the tighter axis.
        let s = compute_fit_scale(3000.0, 2000.0, 1200.0, 800.0, FIT_MARGIN);
        assert!((s - 0.36).abs() < 1e-12);
        assert!(s <= 1.0);
    }

    #[test]
    fn fit_picks_the_tighter_axis() {
        // Tall image: height constrains.
        let s = compute_fit_scale(1000.0, 4000.0, 1200.0, 800.0, FIT_MARGIN);
        assert!((s - 720.0 / 4000.0).abs() < 1e-12);
        // Wide image: width constrains.
        let s = compute_fit_scale(4000.0, 1000.0, 1200.0, 800.0, FIT_MARGIN);
        assert!((s - 1120.0 / 4000.0).abs() < 1e-12);
    }

    #[test]
    fn fit_seeds_scale_baseline_and_centers() {
        let vp = fitted_1200x800_3000x2000();
        assert!((vp.scale - 0.36).abs() < 1e-12);
        assert_eq!(vp.scale, vp.initial_scale);
        assert_eq!((vp.pan_x, vp.pan_y), (0.0, 0.0));
    }

    #[test]
    fn wheel_scale_stays_clamped_across_any_sequence() {
        let mut vp = fitted_1200x800_3000x2000();
        let deltas = [
            -100.0, -100_000.0, 53.0, -1.0, 99999.0, -3.0, 40_000.0, -250_000.0,
        ];
        for d in deltas {
            vp.wheel(d);
            assert!(vp.scale >= MIN_SCALE && vp.scale <= MAX_SCALE);
        }
    }

    #[test]
    fn wheel_does_not_touch_pan() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.pointer_down(10.0, 10.0);
        vp.pointer_move(60.0, -20.0);
        vp.pointer_up();
        vp.wheel(-300.0);
        assert_eq!((vp.pan_x, vp.pan_y), (50.0, -30.0));
    }

    #[test]
    fn drag_is_path_independent() {
        let mut direct = fitted_1200x800_3000x2000();
        direct.pointer_down(500.0, 400.0);
        direct.pointer_move(520.0, 430.0);

        let mut meandering = fitted_1200x800_3000x2000();
        meandering.pointer_down(500.0, 400.0);
        for (x, y) in [(100.0, 900.0), (-40.0, 12.0), (503.0, 398.0)] {
            meandering.pointer_move(x, y);
        }
        meandering.pointer_move(520.0, 430.0);

        assert_eq!((direct.pan_x, direct.pan_y), (20.0, 30.0));
        assert_eq!(
            (meandering.pan_x, meandering.pan_y),
            (direct.pan_x, direct.pan_y)
        );
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.pointer_move(640.0, 480.0);
        assert_eq!((vp.pan_x, vp.pan_y), (0.0, 0.0));
        // ...including after a completed drag.
        vp.pointer_down(0.0, 0.0);
        vp.pointer_move(5.0, 5.0);
        vp.pointer_up();
        vp.pointer_move(900.0, 900.0);
        assert_eq!((vp.pan_x, vp.pan_y), (5.0, 5.0));
    }

    #[test]
    fn pointer_up_keeps_scale_and_pan() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.wheel(-100.0);
        vp.pointer_down(0.0, 0.0);
        vp.pointer_move(13.0, -7.0);
        vp.pointer_up();
        assert!(!vp.is_dragging());
        assert!((vp.scale - 0.46).abs() < 1e-12);
        assert_eq!((vp.pan_x, vp.pan_y), (13.0, -7.0));
    }

    #[test]
    fn reset_restores_baseline_and_is_idempotent() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.wheel(-2000.0);
        vp.pointer_down(100.0, 100.0);
        vp.pointer_move(300.0, 50.0);
        vp.pointer_up();
        vp.reset();
        assert_eq!(
            (vp.scale, vp.pan_x, vp.pan_y),
            (vp.initial_scale, 0.0, 0.0)
        );
        let after_first = vp.clone();
        vp.reset();
        assert_eq!(vp, after_first);
    }

    #[test]
    fn reset_does_not_end_a_live_drag() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.pointer_down(200.0, 200.0);
        vp.reset();
        assert!(vp.is_dragging());
        // The anchor still references pre-reset pan, so the next move keeps
        // the drag algebra: pan = anchor.pan + delta.
        vp.pointer_move(210.0, 220.0);
        assert_eq!((vp.pan_x, vp.pan_y), (10.0, 20.0));
    }

    #[test]
    fn end_to_end_gesture_scenario() {
        let mut vp = ViewportState::default();
        vp.fit(3000.0, 2000.0, 1200.0, 800.0);
        assert!((vp.scale - 0.36).abs() < 1e-12);

        vp.wheel(-100.0);
        assert!((vp.scale - 0.46).abs() < 1e-12);

        vp.pointer_down(500.0, 400.0);
        vp.pointer_move(520.0, 430.0);
        assert_eq!((vp.pan_x, vp.pan_y), (20.0, 30.0));

        vp.reset();
        assert!((vp.scale - 0.36).abs() < 1e-12);
        assert_eq!((vp.pan_x, vp.pan_y), (0.0, 0.0));
    }

    #[test]
    fn css_transform_orders_translate_before_scale() {
        let mut vp = fitted_1200x800_3000x2000();
        vp.pointer_down(0.0, 0.0);
        vp.pointer_move(20.0, 30.0);
        assert_eq!(vp.css_transform(), "translate(20px, 30px) scale(0.36)");
    }
}
