//! One-shot reveal latches for viewport-triggered entry animations

use std::collections::HashMap;

/// Identifies one animated block: a group name plus an index within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey {
    pub group: &'static str,
    pub index: u32,
}

impl RevealKey {
    /// Key for a block that appears once per page
    pub const fn group(group: &'static str) -> Self {
        Self { group, index: 0 }
    }

    /// Key for the `index`-th block of a repeated group
    pub const fn item(group: &'static str, index: u32) -> Self {
        Self { group, index }
    }
}

/// Records when each animated block first entered the viewport.
/// A latch never resets once fired.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    fired: HashMap<RevealKey, f64>,
}

impl RevealRegistry {
    /// Feed one visibility sample; returns the fire time once latched
    pub fn observe(&mut self, key: RevealKey, visible: bool, now: f64) -> Option<f64> {
        if let Some(&at) = self.fired.get(&key) {
            return Some(at);
        }
        if visible {
            self.fired.insert(key, now);
            return Some(now);
        }
        None
    }

    /// Observe and return seconds since the latch fired in one step
    pub fn sample(&mut self, key: RevealKey, visible: bool, now: f64) -> Option<f32> {
        self.observe(key, visible, now)
            .map(|at| (now - at).max(0.0) as f32)
    }

    /// Seconds since the latch fired, None while unfired
    pub fn elapsed(&self, key: RevealKey, now: f64) -> Option<f32> {
        self.fired
            .get(&key)
            .map(|&at| (now - at).max(0.0) as f32)
    }

    pub fn has_fired(&self, key: RevealKey) -> bool {
        self.fired.contains_key(&key)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_on_first_visible_sample() {
        let mut reveals = RevealRegistry::default();
        let key = RevealKey::group("projects.header");
        assert_eq!(reveals.observe(key, false, 1.0), None);
        assert!(!reveals.has_fired(key));
        assert_eq!(reveals.observe(key, true, 2.0), Some(2.0));
        assert!(reveals.has_fired(key));
    }

    #[test]
    fn test_latch_never_resets() {
        let mut reveals = RevealRegistry::default();
        let key = RevealKey::item("projects.item", 1);
        reveals.observe(key, true, 5.0);
        // Scrolled back out of view: the fire time must not move.
        assert_eq!(reveals.observe(key, false, 9.0), Some(5.0));
        assert_eq!(reveals.observe(key, true, 12.0), Some(5.0));
    }

    #[test]
    fn test_elapsed_tracks_fire_time() {
        let mut reveals = RevealRegistry::default();
        let key = RevealKey::group("skills.header");
        assert_eq!(reveals.elapsed(key, 4.0), None);
        reveals.observe(key, true, 4.0);
        assert_eq!(reveals.elapsed(key, 4.5), Some(0.5));
        assert_eq!(reveals.sample(key, false, 6.0), Some(2.0));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut reveals = RevealRegistry::default();
        reveals.observe(RevealKey::item("about.card", 0), true, 1.0);
        assert!(!reveals.has_fired(RevealKey::item("about.card", 1)));
        assert!(!reveals.has_fired(RevealKey::group("about.card")));
        assert_eq!(reveals.fired_count(), 1);
    }
}
