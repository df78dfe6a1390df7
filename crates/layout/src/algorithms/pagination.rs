use geo_report_types::Rect;

// Small tolerance for floating point accumulation in the cursor.
const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check of whether a unit of content fits in the remaining space.
///
/// * `cursor_y`: the current Y position relative to the top of `bounds`.
/// * `child_height`: the height the unit will consume.
/// * `bounds`: the flowing content area of the page.
///
/// A cursor already at (or beyond) the bottom reports zero remaining height, never a
/// negative one.
pub fn check_child_fit(cursor_y: f32, child_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Whether a unit can be placed whole on a fresh page of `bounds`.
pub fn fits_on_empty_page(child_height: f32, bounds: Rect) -> bool {
    !check_child_fit(0.0, child_height, bounds).should_break
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Rect {
        Rect::new(50.0, 80.0, 512.0, 660.0)
    }

    #[test]
    fn fits_when_space_remains() {
        let analysis = check_child_fit(600.0, 60.0, body());
        assert!(!analysis.should_break);
        assert_eq!(analysis.remaining_height, 60.0);
    }

    #[test]
    fn breaks_when_unit_overflows() {
        assert!(check_child_fit(600.0, 60.5, body()).should_break);
    }

    #[test]
    fn tolerates_rounding_noise() {
        assert!(!check_child_fit(600.0, 60.005, body()).should_break);
    }

    #[test]
    fn remaining_height_is_never_negative() {
        let analysis = check_child_fit(700.0, 10.0, body());
        assert_eq!(analysis.remaining_height, 0.0);
        assert!(analysis.should_break);
    }

    #[test]
    fn oversize_units_do_not_fit_empty_page() {
        assert!(fits_on_empty_page(660.0, body()));
        assert!(!fits_on_empty_page(661.0, body()));
    }
}
