//! Read-only lookup of known customer segments.

use engage_core::types::Segment;

/// View over the segment collection of a state document. The automation
/// engine never creates or deletes segments; this is a lookup surface only.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRegistry<'a> {
    segments: &'a [Segment],
}

impl<'a> SegmentRegistry<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self { segments }
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&'a Segment> {
        self.segments.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Segments in stored order.
    pub fn list(&self) -> &'a [Segment] {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<Segment> {
        vec![
            Segment {
                name: "New Leads".to_string(),
                criteria: vec!["Created < 30 days".to_string()],
                size: 34,
            },
            Segment {
                name: "Dormant Accounts".to_string(),
                criteria: vec!["No activity > 30 days".to_string()],
                size: 12,
            },
        ]
    }

    #[test]
    fn get_is_exact_match() {
        let segments = segments();
        let registry = SegmentRegistry::new(&segments);
        assert!(registry.get("New Leads").is_some());
        assert!(registry.get("new leads").is_none());
        assert!(registry.get("VP Sales").is_none());
    }

    #[test]
    fn list_preserves_stored_order() {
        let segments = segments();
        let registry = SegmentRegistry::new(&segments);
        let names: Vec<&str> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["New Leads", "Dormant Accounts"]);
    }
}
