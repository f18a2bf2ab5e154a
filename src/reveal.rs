//! Reveal-on-visibility bookkeeping shared by every section.
//!
//! The browser side feeds intersection events into one [`ScrollReveal`]
//! provided as context; this module only decides what each event means.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::anchor::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPolicy {
    /// Stay visible after the first reveal instead of hiding again when the
    /// section leaves the viewport.
    pub trigger_once: bool,
    /// Pixels added to the viewport edge before a section counts as visible.
    /// Negative values shrink the viewport.
    pub viewport_margin: i32,
    /// Delay between consecutive children of a revealed section.
    pub stagger: Duration,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            trigger_once: true,
            viewport_margin: -100,
            stagger: Duration::from_millis(150),
        }
    }
}

impl RevealPolicy {
    pub fn repeatable(self) -> Self {
        Self {
            trigger_once: false,
            ..self
        }
    }

    /// `rootMargin` string for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.viewport_margin)
    }

    pub fn stagger_delay(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    policy: RevealPolicy,
    revealed: bool,
}

impl RevealState {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Apply one visibility report. Returns the new state when it changed.
    pub fn observe(&mut self, intersecting: bool) -> Option<bool> {
        let next = if self.policy.trigger_once {
            self.revealed || intersecting
        } else {
            intersecting
        };
        if next == self.revealed {
            return None;
        }
        self.revealed = next;
        Some(next)
    }
}

/// The single shared controller. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    default_policy: RevealPolicy,
    sections: Arc<Mutex<HashMap<Anchor, RevealState>>>,
}

impl ScrollReveal {
    pub fn new(default_policy: RevealPolicy) -> Self {
        Self {
            default_policy,
            sections: Arc::default(),
        }
    }

    pub fn policy(&self) -> RevealPolicy {
        self.default_policy
    }

    pub fn register(&self, anchor: Anchor) -> RevealPolicy {
        self.register_with(anchor, self.default_policy)
    }

    /// Registering an anchor twice keeps the first registration, so a
    /// remounted section does not lose a latched reveal.
    pub fn register_with(&self, anchor: Anchor, policy: RevealPolicy) -> RevealPolicy {
        let mut sections = self
            .sections
            .lock()
            .expect("should be able to acquire reveal lock");
        sections
            .entry(anchor)
            .or_insert_with(|| RevealState::new(policy))
            .policy
    }

    pub fn observe(&self, anchor: Anchor, intersecting: bool) -> Option<bool> {
        let mut sections = self
            .sections
            .lock()
            .expect("should be able to acquire reveal lock");
        let changed = sections.get_mut(&anchor)?.observe(intersecting);
        if let Some(visible) = changed {
            log::debug!("section #{anchor} revealed={visible}");
        }
        changed
    }

    pub fn is_revealed(&self, anchor: Anchor) -> bool {
        self.sections
            .lock()
            .expect("should be able to acquire reveal lock")
            .get(&anchor)
            .is_some_and(RevealState::is_revealed)
    }

    pub fn stagger_delay(&self, anchor: Anchor, index: usize) -> Duration {
        let policy = self
            .sections
            .lock()
            .expect("should be able to acquire reveal lock")
            .get(&anchor)
            .map(|s| s.policy)
            .unwrap_or(self.default_policy);
        policy.stagger_delay(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_once_latches() {
        let mut state = RevealState::new(RevealPolicy::default());
        assert!(!state.is_revealed());
        assert_eq!(state.observe(false), None);
        assert_eq!(state.observe(true), Some(true));
        assert_eq!(state.observe(false), None);
        assert_eq!(state.observe(true), None);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_repeatable_follows_boundary() {
        let mut state = RevealState::new(RevealPolicy::default().repeatable());
        assert_eq!(state.observe(true), Some(true));
        assert_eq!(state.observe(true), None);
        assert_eq!(state.observe(false), Some(false));
        assert_eq!(state.observe(true), Some(true));
    }

    #[test]
    fn test_sections_are_independent() {
        let reveal = ScrollReveal::new(RevealPolicy::default());
        reveal.register(Anchor::About);
        reveal.register(Anchor::Skills);

        assert_eq!(reveal.observe(Anchor::Skills, true), Some(true));
        assert!(reveal.is_revealed(Anchor::Skills));
        assert!(!reveal.is_revealed(Anchor::About));
    }

    #[test]
    fn test_unregistered_anchor_is_ignored() {
        let reveal = ScrollReveal::default();
        assert_eq!(reveal.observe(Anchor::Contact, true), None);
        assert!(!reveal.is_revealed(Anchor::Contact));
    }

    #[test]
    fn test_register_is_idempotent() {
        let reveal = ScrollReveal::new(RevealPolicy::default());
        reveal.register(Anchor::Projects);
        reveal.observe(Anchor::Projects, true);

        let clone = reveal.clone();
        let policy = clone.register_with(Anchor::Projects, RevealPolicy::default().repeatable());
        assert!(policy.trigger_once);
        assert!(clone.is_revealed(Anchor::Projects));
    }

    #[test]
    fn test_per_section_policy() {
        let reveal = ScrollReveal::new(RevealPolicy::default());
        reveal.register_with(Anchor::Home, RevealPolicy::default().repeatable());
        reveal.register(Anchor::About);

        reveal.observe(Anchor::Home, true);
        reveal.observe(Anchor::About, true);
        assert_eq!(reveal.observe(Anchor::Home, false), Some(false));
        assert_eq!(reveal.observe(Anchor::About, false), None);
    }

    #[test]
    fn test_margin_and_stagger() {
        let policy = RevealPolicy::default();
        assert_eq!(policy.root_margin(), "-100px");
        assert_eq!(policy.stagger_delay(0), Duration::ZERO);
        assert_eq!(policy.stagger_delay(3), Duration::from_millis(450));

        let reveal = ScrollReveal::new(RevealPolicy {
            stagger: Duration::from_millis(100),
            ..policy
        });
        assert_eq!(
            reveal.stagger_delay(Anchor::Design, 2),
            Duration::from_millis(200)
        );
    }
}
