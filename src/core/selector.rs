//! core/selector.rs
//! Which section is on screen.

use super::types::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSelector {
    active: SectionId,
}

impl SectionSelector {
    pub fn new(initial: SectionId) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns true when the selection actually moved.
    pub fn set_active(&mut self, id: SectionId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips_every_section() {
        let mut selector = SectionSelector::new(SectionId::Overview);
        for id in SectionId::ALL {
            selector.set_active(id);
            assert_eq!(selector.active(), id);
            assert!(selector.is_active(id));
        }
    }

    #[test]
    fn reselecting_reports_no_change() {
        let mut selector = SectionSelector::new(SectionId::Overview);
        assert!(!selector.set_active(SectionId::Overview));
        assert!(selector.set_active(SectionId::History));
        assert!(!selector.set_active(SectionId::History));
    }
}
