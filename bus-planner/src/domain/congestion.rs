//! Heuristic congestion estimate.

use std::fmt;

/// A crowding estimate for one run, derived from its departure hour.
///
/// The bands follow the commuter peaks around the university: morning
/// and evening rush hours are congested, the shoulders before each
/// rush slightly so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Congestion {
    /// Rush hour.
    Congested,
    /// Shoulder of a rush hour.
    SlightlyCongested,
    /// Everything else.
    Normal,
}

impl Congestion {
    /// Classify by departure hour.
    ///
    /// Hours 7–9 and 17–19 are congested; hours 6 and 16 are slightly
    /// congested. The congested check runs first, so the boundary
    /// hours 7 and 17 land in the congested band.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_planner::domain::Congestion;
    ///
    /// assert_eq!(Congestion::for_departure_hour(8), Congestion::Congested);
    /// assert_eq!(Congestion::for_departure_hour(6), Congestion::SlightlyCongested);
    /// assert_eq!(Congestion::for_departure_hour(12), Congestion::Normal);
    ///
    /// // Boundary hours belong to the congested band
    /// assert_eq!(Congestion::for_departure_hour(7), Congestion::Congested);
    /// assert_eq!(Congestion::for_departure_hour(17), Congestion::Congested);
    /// ```
    pub fn for_departure_hour(hour: u16) -> Self {
        if (7..=9).contains(&hour) || (17..=19).contains(&hour) {
            Congestion::Congested
        } else if hour == 6 || hour == 16 {
            Congestion::SlightlyCongested
        } else {
            Congestion::Normal
        }
    }

    /// The user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Congestion::Congested => "混雑",
            Congestion::SlightlyCongested => "少し混雑",
            Congestion::Normal => "普通",
        }
    }
}

impl fmt::Display for Congestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rush_hours_congested() {
        for hour in [7, 8, 9, 17, 18, 19] {
            assert_eq!(
                Congestion::for_departure_hour(hour),
                Congestion::Congested,
                "hour {hour}"
            );
        }
    }

    #[test]
    fn shoulders_slightly_congested() {
        assert_eq!(
            Congestion::for_departure_hour(6),
            Congestion::SlightlyCongested
        );
        assert_eq!(
            Congestion::for_departure_hour(16),
            Congestion::SlightlyCongested
        );
    }

    #[test]
    fn off_peak_normal() {
        for hour in [0, 5, 10, 12, 15, 20, 23] {
            assert_eq!(
                Congestion::for_departure_hour(hour),
                Congestion::Normal,
                "hour {hour}"
            );
        }
    }

    #[test]
    fn boundary_hours_claimed_by_congested() {
        // 7 and 16..=17 overlap in the original banding; the congested
        // check runs first so 7 and 17 must not be slightly-congested.
        assert_eq!(Congestion::for_departure_hour(7), Congestion::Congested);
        assert_eq!(Congestion::for_departure_hour(17), Congestion::Congested);
    }

    #[test]
    fn labels() {
        assert_eq!(Congestion::Congested.label(), "混雑");
        assert_eq!(Congestion::SlightlyCongested.label(), "少し混雑");
        assert_eq!(Congestion::Normal.label(), "普通");
        assert_eq!(Congestion::Normal.to_string(), "普通");
    }
}
