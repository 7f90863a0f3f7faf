//! Visual scale resolver.
//!
//! The caption overlay stores geometry in design space (the video's
//! native resolution) while pointer events arrive in client space
//! (on-screen CSS pixels). Responsive layout renders the container at a
//! uniform scale of its intrinsic size; this module tracks that factor
//! so client-space deltas can be mapped into design space.

/// Ratio between an element's rendered size and its intrinsic size.
///
/// Defaults to 1.0 until the container has been measured; a zero-sized
/// measurement is ignored so the last known scale stays in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualScale {
    factor: f64,
    measured: bool,
}

impl Default for VisualScale {
    fn default() -> Self {
        Self {
            factor: 1.0,
            measured: false,
        }
    }
}

impl VisualScale {
    /// Update from a fresh measurement of the container. Axes are
    /// averaged the way the layout scales them (uniformly in practice).
    pub fn measure(
        &mut self,
        rendered_width: f64,
        rendered_height: f64,
        intrinsic_width: f64,
        intrinsic_height: f64,
    ) {
        if rendered_width <= 0.0
            || rendered_height <= 0.0
            || intrinsic_width <= 0.0
            || intrinsic_height <= 0.0
        {
            return;
        }
        let scale_x = rendered_width / intrinsic_width;
        let scale_y = rendered_height / intrinsic_height;
        self.factor = (scale_x + scale_y) / 2.0;
        self.measured = true;
    }

    /// The current scale factor (1.0 before the first measurement)
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Whether a real measurement has been taken yet
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Convert a client-space length into design space
    pub fn to_design(&self, client_px: f64) -> f64 {
        client_px / self.factor
    }

    /// Convert a client-space point (relative to the container origin)
    /// into design space
    pub fn point_to_design(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x / self.factor, client_y / self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_unity_before_measurement() {
        let scale = VisualScale::default();
        assert_eq!(scale.factor(), 1.0);
        assert!(!scale.is_measured());
        assert_eq!(scale.to_design(42.0), 42.0);
    }

    #[test]
    fn test_measure_averages_axes() {
        let mut scale = VisualScale::default();
        scale.measure(720.0, 540.0, 1440.0, 1080.0);
        assert_eq!(scale.factor(), 0.5);
        assert_eq!(scale.to_design(10.0), 20.0);
    }

    #[test]
    fn test_zero_sized_measurement_is_ignored() {
        let mut scale = VisualScale::default();
        scale.measure(720.0, 540.0, 1440.0, 1080.0);
        scale.measure(0.0, 0.0, 1440.0, 1080.0);
        assert_eq!(scale.factor(), 0.5);
        assert!(scale.is_measured());
    }

    #[test]
    fn test_point_conversion() {
        let mut scale = VisualScale::default();
        scale.measure(360.0, 270.0, 1440.0, 1080.0);
        assert_eq!(scale.point_to_design(90.0, 45.0), (360.0, 180.0));
    }
}
