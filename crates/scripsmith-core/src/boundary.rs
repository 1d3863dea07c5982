//! Failure isolation for decorative subtrees

/// Whether a guarded subtree still renders or has been replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Intact,
    Failed,
}

/// Default fallback card copy
pub const FALLBACK_TITLE: &str = "3D content unavailable";
pub const FALLBACK_DETAIL: &str = "Fallback mode active";

/// Isolates one optional decoration. The first observed failure switches the
/// boundary to its fallback for the rest of its lifetime; siblings are
/// unaffected and the failure is logged rather than surfaced.
#[derive(Debug)]
pub struct DecorBoundary {
    label: &'static str,
    state: BoundaryState,
}

impl DecorBoundary {
    pub const fn new(label: &'static str) -> Self {
        Self { label, state: BoundaryState::Intact }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    /// Record a failure; only the first one is logged
    pub fn fail(&mut self, error: &dyn std::fmt::Display) {
        if self.state == BoundaryState::Intact {
            tracing::warn!("{} decoration failed, showing fallback: {}", self.label, error);
            self.state = BoundaryState::Failed;
        }
    }

    /// Pass a result through the boundary. An error trips it; once tripped,
    /// later successes are discarded so the fallback stays up.
    pub fn observe<T, E: std::fmt::Display>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => {
                if self.is_failed() {
                    None
                } else {
                    Some(value)
                }
            }
            Err(error) => {
                self.fail(&error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_intact() {
        let boundary = DecorBoundary::new("hero");
        assert_eq!(boundary.state(), BoundaryState::Intact);
        assert!(!boundary.is_failed());
    }

    #[test]
    fn test_failure_is_permanent() {
        let mut boundary = DecorBoundary::new("contact");
        boundary.fail(&"context lost");
        assert!(boundary.is_failed());
        // A later success must not restore the subtree.
        assert_eq!(boundary.observe::<u32, &str>(Ok(7)), None);
        assert!(boundary.is_failed());
    }

    #[test]
    fn test_observe_passes_values_while_intact() {
        let mut boundary = DecorBoundary::new("skills");
        assert_eq!(boundary.observe::<u32, &str>(Ok(7)), Some(7));
        assert_eq!(boundary.observe::<u32, &str>(Err("bad mesh")), None);
        assert!(boundary.is_failed());
    }

    #[test]
    fn test_boundaries_fail_independently() {
        let mut hero = DecorBoundary::new("hero");
        let orbit = DecorBoundary::new("orbit");
        hero.fail(&"boom");
        assert!(hero.is_failed());
        assert!(!orbit.is_failed());
    }
}
