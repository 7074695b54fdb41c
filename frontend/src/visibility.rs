use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

// Browsers round the reported ratio; a crossing report can land a hair under.
const RATIO_EPSILON: f64 = 1e-6;

/// One-shot "has entered the viewport" flag. Starts hidden and latches
/// visible on the first qualifying intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityFlag {
    visible: bool,
}

impl VisibilityFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns true only for the report that
    /// flips the flag, so the caller knows when to stop observing.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.visible || !intersecting || ratio + RATIO_EPSILON < threshold {
            return false;
        }
        self.visible = true;
        true
    }

    /// Used when the platform can't report intersections at all.
    pub fn force_visible(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!VisibilityFlag::new().is_visible());
    }

    #[test]
    fn flips_once_and_never_reverts() {
        let mut flag = VisibilityFlag::new();
        let reports = [
            (false, 0.0),
            (true, 0.05),
            (true, 0.2),
            (true, 0.9),
            (false, 0.0),
            (true, 0.0),
        ];
        let mut transitions = 0;
        let mut seen_visible = false;
        for (intersecting, ratio) in reports {
            if flag.observe(intersecting, ratio, 0.1) {
                transitions += 1;
            }
            if seen_visible {
                assert!(flag.is_visible(), "flag reverted after becoming visible");
            }
            seen_visible = flag.is_visible();
        }
        assert_eq!(transitions, 1);
        assert!(flag.is_visible());
    }

    #[test]
    fn below_threshold_does_not_count() {
        let mut flag = VisibilityFlag::new();
        assert!(!flag.observe(true, 0.09, 0.1));
        assert!(!flag.is_visible());
        assert!(flag.observe(true, 0.1, 0.1));
    }

    #[test]
    fn rounding_just_under_threshold_still_counts() {
        let mut flag = VisibilityFlag::new();
        assert!(flag.observe(true, 0.1 - 1e-9, 0.1));

        let mut flag = VisibilityFlag::new();
        assert!(!flag.observe(true, 0.1 - 1e-3, 0.1));
    }

    #[test]
    fn fallback_forces_visible_once() {
        let mut flag = VisibilityFlag::new();
        assert!(flag.force_visible());
        assert!(!flag.force_visible());
        assert!(!flag.observe(true, 1.0, 0.1));
        assert!(flag.is_visible());
    }

    #[test]
    fn default_options_come_from_config() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, config::REVEAL_THRESHOLD);
        assert_eq!(options.root_margin, config::REVEAL_ROOT_MARGIN);
    }
}
