//! Mouse input handling

/// Convert a viewport mouse Y into field coordinates.
///
/// The canvas top comes from its bounding client rect; the core clamps the
/// result into paddle bounds, so no range check happens here.
pub fn pointer_field_y(client_y: f64, canvas_top: f64) -> f32 {
    (client_y - canvas_top) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_relative_to_canvas() {
        assert_eq!(pointer_field_y(250.0, 50.0), 200.0);
    }

    #[test]
    fn test_pointer_above_canvas_goes_negative() {
        assert_eq!(pointer_field_y(10.0, 50.0), -40.0);
    }
}
