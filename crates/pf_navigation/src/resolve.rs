use crate::section::Section;

/// Live extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    pub fn new(top: f32, height: f32) -> Self {
        SectionExtent { top, height }
    }

    /// Containment is half-open: [top, top + height).
    pub fn contains(&self, probe: f32) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Live geometry lookup. Layout can change at any time, so extents are
/// queried fresh on every resolution instead of being stored. A section that
/// is not currently rendered has no extent.
pub trait SectionGeometry {
    fn extent(&self, section: Section) -> Option<SectionExtent>;
}

/// The first section in registry order whose extent contains the probe, or
/// None when nothing does (probe outside all extents, or the extents are
/// unavailable). Should two extents overlap during a transient layout, the
/// earlier section wins.
pub fn resolve_active(probe: f32, geometry: &dyn SectionGeometry) -> Option<Section> {
    for section in Section::ALL {
        if let Some(extent) = geometry.extent(section) {
            if extent.contains(probe) {
                return Some(section);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {

    use proptest::prelude::*;

    use crate::resolve as sut;
    use crate::resolve::{SectionExtent, SectionGeometry};
    use crate::section::Section;

    struct StackedGeometry {
        extents: Vec<(Section, SectionExtent)>,
    }

    impl SectionGeometry for StackedGeometry {
        fn extent(&self, section: Section) -> Option<SectionExtent> {
            self.extents
                .iter()
                .find(|(candidate, _)| *candidate == section)
                .map(|(_, extent)| *extent)
        }
    }

    fn three_sections() -> StackedGeometry {
        StackedGeometry {
            extents: vec![
                (Section::Home, SectionExtent::new(0.0, 800.0)),
                (Section::About, SectionExtent::new(800.0, 800.0)),
                (Section::Skills, SectionExtent::new(1600.0, 800.0)),
            ],
        }
    }

    #[test]
    fn probe_inside_a_section_resolves_it() {
        let resolved = sut::resolve_active(1300.0, &three_sections());

        assert_eq!(resolved, Some(Section::About));
    }

    #[test]
    fn probe_above_all_sections_is_no_match() {
        assert_eq!(sut::resolve_active(-50.0, &three_sections()), None);
    }

    #[test]
    fn probe_below_all_sections_is_no_match() {
        assert_eq!(sut::resolve_active(2400.0, &three_sections()), None);
    }

    #[test]
    fn extent_boundary_belongs_to_the_lower_section() {
        // 800.0 is the exclusive end of home and the inclusive start of about
        assert_eq!(
            sut::resolve_active(800.0, &three_sections()),
            Some(Section::About)
        );
    }

    #[test]
    fn overlapping_extents_resolve_in_registry_order() {
        let geometry = StackedGeometry {
            extents: vec![
                (Section::About, SectionExtent::new(800.0, 1000.0)),
                (Section::Skills, SectionExtent::new(1600.0, 800.0)),
            ],
        };

        // 1700.0 is inside both extents, about comes first in the registry
        assert_eq!(
            sut::resolve_active(1700.0, &geometry),
            Some(Section::About)
        );
    }

    #[test]
    fn unavailable_extents_are_skipped() {
        // Only the mounted section has geometry
        let geometry = StackedGeometry {
            extents: vec![(Section::Projects, SectionExtent::new(0.0, 800.0))],
        };

        assert_eq!(
            sut::resolve_active(400.0, &geometry),
            Some(Section::Projects)
        );
        assert_eq!(sut::resolve_active(900.0, &geometry), None);
    }

    proptest! {
        #[test]
        fn resolved_section_contains_the_probe(probe in -5000.0f32..5000.0) {
            let geometry = three_sections();

            if let Some(section) = sut::resolve_active(probe, &geometry) {
                let extent = geometry.extent(section).unwrap();
                prop_assert!(extent.contains(probe));
            }
        }

        #[test]
        fn no_earlier_section_contains_the_probe(probe in -5000.0f32..5000.0) {
            let geometry = three_sections();

            if let Some(section) = sut::resolve_active(probe, &geometry) {
                for earlier in Section::ALL {
                    if earlier == section {
                        break;
                    }

                    if let Some(extent) = geometry.extent(earlier) {
                        prop_assert!(!extent.contains(probe));
                    }
                }
            }
        }
    }
}
