//! Scroll-driven detection of the section currently in view.

/// Distance above a section's top edge at which it already counts as active.
pub const LOOKAHEAD_BIAS: f64 = 100.0;

/// Layout of one `section[id]` as read from the live document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - LOOKAHEAD_BIAS;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Last section in traversal order whose range contains `scroll_y`.
pub fn last_match<'a, I>(scroll_y: f64, sections: I) -> Option<&'a SectionBounds>
where
    I: IntoIterator<Item = &'a SectionBounds>,
{
    sections
        .into_iter()
        .filter(|section| section.contains(scroll_y))
        .last()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSection {
    id: String,
}

impl ActiveSection {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { id: initial.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Re-scans every section for `scroll_y`. Returns the new id when it
    /// changed; with no match the previous value is kept.
    pub fn observe<'a, I>(&mut self, scroll_y: f64, sections: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a SectionBounds>,
    {
        let matched = last_match(scroll_y, sections)?;
        if matched.id == self.id {
            return None;
        }

        self.id.clone_from(&matched.id);
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 900.0),
            SectionBounds::new("skills", 1700.0, 700.0),
        ]
    }

    #[test]
    fn offset_at_biased_top_activates_section() {
        let sections = page();
        let mut active = ActiveSection::new("hero");

        assert_eq!(active.observe(700.0, &sections), Some("about"));
        assert_eq!(active.id(), "about");
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let about = SectionBounds::new("about", 800.0, 900.0);

        assert!(about.contains(700.0));
        assert!(about.contains(1599.9));
        assert!(!about.contains(1600.0));
    }

    #[test]
    fn hero_is_active_near_top_of_page() {
        let sections = page();
        let mut active = ActiveSection::new("contact");

        assert_eq!(active.observe(0.0, &sections), Some("hero"));
    }

    #[test]
    fn no_match_keeps_previous_value() {
        let sections = page();
        let mut active = ActiveSection::new("about");

        assert_eq!(active.observe(10_000.0, &sections), None);
        assert_eq!(active.id(), "about");
        assert_eq!(active.observe(-500.0, &sections), None);
        assert_eq!(active.id(), "about");
    }

    #[test]
    fn overlapping_ranges_resolve_to_last_in_document_order() {
        let sections = vec![
            SectionBounds::new("projects", 2000.0, 1200.0),
            SectionBounds::new("resume", 2500.0, 600.0),
        ];
        let mut active = ActiveSection::new("hero");

        assert_eq!(active.observe(2450.0, &sections), Some("resume"));
        assert_eq!(active.observe(2300.0, &sections), Some("projects"));
    }

    #[test]
    fn unchanged_match_reports_nothing() {
        let sections = page();
        let mut active = ActiveSection::new("hero");

        assert_eq!(active.observe(120.0, &sections), None);
        assert_eq!(active.id(), "hero");
    }

    #[test]
    fn empty_section_list_matches_nothing() {
        let sections: Vec<SectionBounds> = Vec::new();
        assert!(last_match(0.0, &sections).is_none());
    }
}
