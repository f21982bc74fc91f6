/// Class that hides an element until it is revealed.
pub const REVEAL_CLASS: &str = "fade-in";
/// Class that plays the entrance transition.
pub const VISIBLE_CLASS: &str = "visible";

/// One-shot entrance flag. Once played it never resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    played: bool,
}

impl RevealLatch {
    /// Returns true only for the first visible report.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        if self.played || !visible {
            return false;
        }
        self.played = true;
        true
    }

    #[cfg(test)]
    pub fn has_played(&self) -> bool {
        self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once_across_reentries() {
        let mut latch = RevealLatch::default();
        let reports = [false, true, false, true, true, false, true];
        let fired = reports
            .iter()
            .filter(|&&visible| latch.on_visibility(visible))
            .count();
        assert_eq!(fired, 1);
        assert!(latch.has_played());
    }

    #[test]
    fn test_hidden_reports_do_not_play() {
        let mut latch = RevealLatch::default();
        assert!(!latch.on_visibility(false));
        assert!(!latch.has_played());
    }
}
