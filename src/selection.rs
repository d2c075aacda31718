// ---------------------------------------------------------------------------
// Selected points – the ordered click log
// ---------------------------------------------------------------------------

/// A point the operator picked from the plot.
///
/// Coordinates are rounded to 6 decimal places at construction, so equality
/// (and the duplicate check in [`SelectionLog`]) compares rounded values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl SelectedPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        SelectedPoint {
            latitude: round6(latitude),
            longitude: round6(longitude),
        }
    }
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

// ---------------------------------------------------------------------------
// SelectionLog – accumulator owned by the application state
// ---------------------------------------------------------------------------

/// Ordered accumulator of picked points. Owned by `AppState` and appended to
/// by the plot's click handler; the mission writer reads it once, after the
/// interactive phase ends.
#[derive(Debug, Clone, Default)]
pub struct SelectionLog {
    points: Vec<SelectedPoint>,
}

impl SelectionLog {
    /// Append a point unless it is already present (by rounded value).
    /// Returns whether the point was appended.
    pub fn push(&mut self, point: SelectedPoint) -> bool {
        if self.points.contains(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Remove the most recently selected point.
    pub fn undo(&mut self) -> Option<SelectedPoint> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[SelectedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_to_six_decimals() {
        let point = SelectedPoint::new(47.6414321987, -122.1401239876);
        assert_eq!(point.latitude, 47.641432);
        assert_eq!(point.longitude, -122.140124);
    }

    #[test]
    fn push_preserves_selection_order() {
        let mut log = SelectionLog::default();
        log.push(SelectedPoint::new(3.0, 4.0));
        log.push(SelectedPoint::new(1.0, 2.0));

        let points = log.points();
        assert_eq!(points[0], SelectedPoint::new(3.0, 4.0));
        assert_eq!(points[1], SelectedPoint::new(1.0, 2.0));
    }

    #[test]
    fn push_refuses_duplicates() {
        let mut log = SelectionLog::default();
        assert!(log.push(SelectedPoint::new(47.641, -122.14)));
        assert!(!log.push(SelectedPoint::new(47.641, -122.14)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn points_equal_after_rounding_count_as_duplicates() {
        let mut log = SelectionLog::default();
        assert!(log.push(SelectedPoint::new(47.64100004, -122.14)));
        // Differs only past the 6th decimal, rounds to the same point.
        assert!(!log.push(SelectedPoint::new(47.6410001, -122.14)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn undo_removes_last_point() {
        let mut log = SelectionLog::default();
        log.push(SelectedPoint::new(1.0, 2.0));
        log.push(SelectedPoint::new(3.0, 4.0));

        assert_eq!(log.undo(), Some(SelectedPoint::new(3.0, 4.0)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.undo(), Some(SelectedPoint::new(1.0, 2.0)));
        assert_eq!(log.undo(), None);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = SelectionLog::default();
        log.push(SelectedPoint::new(1.0, 2.0));
        log.clear();
        assert!(log.is_empty());
    }
}
