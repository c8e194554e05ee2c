use std::collections::HashMap;

use pf_navigation::resolve::{SectionExtent, SectionGeometry};
use pf_navigation::section::Section;

/// Extents recorded while laying out the page, in document coordinates.
/// Only sections that were actually rendered this frame have an entry, so
/// lookups for unmounted sections come back empty.
#[derive(Default)]
pub struct FrameGeometry {
    extents: HashMap<Section, SectionExtent>,
}

impl FrameGeometry {
    pub fn new() -> Self {
        FrameGeometry {
            extents: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.extents.clear();
    }

    pub fn record(&mut self, section: Section, extent: SectionExtent) {
        self.extents.insert(section, extent);
    }
}

impl SectionGeometry for FrameGeometry {
    fn extent(&self, section: Section) -> Option<SectionExtent> {
        self.extents.get(&section).copied()
    }
}

#[cfg(test)]
mod tests {

    use pf_navigation::resolve::{SectionExtent, SectionGeometry};
    use pf_navigation::section::Section;

    use crate::geometry::FrameGeometry;

    #[test]
    fn only_recorded_sections_have_extents() {
        let mut geometry = FrameGeometry::new();

        geometry.record(Section::About, SectionExtent::new(0.0, 600.0));

        assert_eq!(
            geometry.extent(Section::About),
            Some(SectionExtent::new(0.0, 600.0))
        );
        assert_eq!(geometry.extent(Section::Home), None);
    }

    #[test]
    fn clear_drops_every_extent() {
        let mut geometry = FrameGeometry::new();

        geometry.record(Section::About, SectionExtent::new(0.0, 600.0));
        geometry.clear();

        assert_eq!(geometry.extent(Section::About), None);
    }
}
