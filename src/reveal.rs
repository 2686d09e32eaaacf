//! One-shot entrance latches for sections revealed on scroll.
//!
//! A single page-level intersection observer reports `(id, intersecting)`
//! pairs; each id latches to [`Visibility::Seen`] the first time it
//! intersects and never goes back.

use std::collections::HashMap;

/// Attribute carrying the latch id on observed elements.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unseen,
    Seen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchChange {
    Latched,
    Unchanged,
}

/// Updates fed to the latches by the page-level observer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Observe { id: String, intersecting: bool },
    /// Observation is impossible on this host, so every section is shown at once.
    RevealAll,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealLatches {
    sections: HashMap<String, Visibility>,
}

impl RevealLatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str) {
        self.sections.entry(id.to_string()).or_default();
    }

    pub fn observe(&mut self, id: &str, intersecting: bool) -> LatchChange {
        let visibility = self.sections.entry(id.to_string()).or_default();
        if !intersecting || *visibility == Visibility::Seen {
            return LatchChange::Unchanged;
        }

        *visibility = Visibility::Seen;
        LatchChange::Latched
    }

    /// Latches every registered section; the fallback when no observer can run.
    pub fn reveal_all(&mut self) -> LatchChange {
        let mut change = LatchChange::Unchanged;
        for visibility in self.sections.values_mut() {
            if *visibility == Visibility::Unseen {
                *visibility = Visibility::Seen;
                change = LatchChange::Latched;
            }
        }
        change
    }

    pub fn apply(&mut self, action: RevealAction) -> LatchChange {
        match action {
            RevealAction::Observe { id, intersecting } => self.observe(&id, intersecting),
            RevealAction::RevealAll => self.reveal_all(),
        }
    }

    pub fn state(&self, id: &str) -> Visibility {
        self.sections.get(id).copied().unwrap_or_default()
    }

    pub fn is_seen(&self, id: &str) -> bool {
        self.state(id) == Visibility::Seen
    }
}

/// `rootMargin` value for the observer; negative values shrink the viewport
/// so an element has to be that far inside before it counts.
pub fn root_margin(margin_px: i32) -> String {
    format!("{margin_px}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn registered_sections_start_unseen() {
        let mut latches = RevealLatches::new();
        latches.register("about");
        assert_eq!(latches.state("about"), Visibility::Unseen);
        assert!(!latches.is_seen("about"));
    }

    #[test]
    fn first_intersection_latches() {
        let mut latches = RevealLatches::new();
        latches.register("projects");
        assert_eq!(latches.observe("projects", false), LatchChange::Unchanged);
        assert!(!latches.is_seen("projects"));
        assert_eq!(latches.observe("projects", true), LatchChange::Latched);
        assert!(latches.is_seen("projects"));
    }

    #[test]
    fn leaving_and_reentering_keeps_seen() {
        let mut latches = RevealLatches::new();
        latches.observe("contact", true);
        assert_eq!(latches.observe("contact", false), LatchChange::Unchanged);
        assert_eq!(latches.observe("contact", true), LatchChange::Unchanged);
        assert!(latches.is_seen("contact"));
    }

    #[test]
    fn sections_latch_independently() {
        let mut latches = RevealLatches::new();
        latches.register("about");
        latches.register("experience");
        latches.observe("experience", true);
        assert!(!latches.is_seen("about"));
        assert!(latches.is_seen("experience"));
    }

    #[test]
    fn unknown_ids_read_as_unseen() {
        let latches = RevealLatches::new();
        assert_eq!(latches.state("missing"), Visibility::Unseen);
    }

    #[test]
    fn failed_observer_reveals_every_page_section() {
        let mut latches = RevealLatches::new();
        for id in crate::content::reveal_ids() {
            latches.register(id);
        }
        latches.observe("about-heading", true);

        assert_eq!(latches.apply(RevealAction::RevealAll), LatchChange::Latched);
        for id in crate::content::reveal_ids() {
            assert!(latches.is_seen(id), "{id} stayed hidden");
        }
        assert_eq!(latches.apply(RevealAction::RevealAll), LatchChange::Unchanged);
    }

    #[test]
    fn observe_action_matches_direct_observe() {
        let mut latches = RevealLatches::new();
        latches.register("projects");
        let action = RevealAction::Observe {
            id: "projects".to_string(),
            intersecting: true,
        };
        assert_eq!(latches.apply(action.clone()), LatchChange::Latched);
        assert_eq!(latches.apply(action), LatchChange::Unchanged);
        assert!(latches.is_seen("projects"));
    }

    #[test]
    fn root_margin_is_pixels() {
        assert_eq!(root_margin(-50), "-50px");
        assert_eq!(root_margin(0), "0px");
    }

    proptest! {
        #[test]
        fn seen_is_never_lost(signals in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut latches = RevealLatches::new();
            let mut was_seen = false;
            for intersecting in signals {
                latches.observe("about", intersecting);
                let seen = latches.is_seen("about");
                prop_assert!(!was_seen || seen);
                prop_assert_eq!(seen, was_seen || intersecting);
                was_seen = seen;
            }
        }
    }
}
