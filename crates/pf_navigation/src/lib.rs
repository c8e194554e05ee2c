use tracing::trace;

pub mod controller;
pub mod resolve;
pub mod scroll;
pub mod section;
pub mod transition;

/// Drain pending scroll samples and feed the resolved section into the
/// controller. One call per frame covers however many samples arrived; each
/// sample runs the full probe -> resolve -> controller pipeline, there is no
/// rate limiting.
pub fn process_scroll_samples(
    controller: &mut controller::NavigationController,
    tracker: &scroll::ScrollTracker,
    geometry: &dyn resolve::SectionGeometry,
) {
    while let Some(viewport) = tracker.poll() {
        let probe = viewport.probe();
        let resolved = resolve::resolve_active(probe, geometry);

        trace!("Scroll probe {} resolved to {:?}", probe, resolved);

        controller.on_scroll_probe(resolved);
    }
}

#[cfg(test)]
mod tests {

    use crate::controller::{nav_command_channel, NavigationController};
    use crate::resolve::{SectionExtent, SectionGeometry};
    use crate::scroll::{scroll_channel, Viewport};
    use crate::section::Section;

    struct SinglePage;

    impl SectionGeometry for SinglePage {
        fn extent(&self, section: Section) -> Option<SectionExtent> {
            let index = Section::ALL.iter().position(|s| *s == section)?;
            Some(SectionExtent::new(index as f32 * 800.0, 800.0))
        }
    }

    #[test]
    fn scroll_samples_drive_the_active_section() {
        let (nav_sender, _nav_receiver) = nav_command_channel();
        let mut controller = NavigationController::new(nav_sender);
        let (scroll_sender, tracker) = scroll_channel();

        scroll_sender.send(Viewport {
            scroll_y: 850.0,
            height: 900.0,
        });

        crate::process_scroll_samples(&mut controller, &tracker, &SinglePage);

        assert_eq!(controller.active_section(), Section::About);
    }

    #[test]
    fn samples_sent_after_release_never_reach_the_state() {
        let (nav_sender, _nav_receiver) = nav_command_channel();
        let mut controller = NavigationController::new(nav_sender);
        let (scroll_sender, tracker) = scroll_channel();

        scroll_sender.send(Viewport {
            scroll_y: 850.0,
            height: 900.0,
        });
        crate::process_scroll_samples(&mut controller, &tracker, &SinglePage);

        // Tear down the subscription, then keep scrolling
        drop(tracker);
        scroll_sender.send(Viewport {
            scroll_y: 2000.0,
            height: 900.0,
        });

        assert_eq!(controller.active_section(), Section::About);
    }

    #[test]
    fn a_probe_with_no_geometry_retains_the_active_section() {
        let (nav_sender, _nav_receiver) = nav_command_channel();
        let mut controller = NavigationController::new(nav_sender);
        let (scroll_sender, tracker) = scroll_channel();

        // Way below the last section
        scroll_sender.send(Viewport {
            scroll_y: 10_000.0,
            height: 900.0,
        });

        crate::process_scroll_samples(&mut controller, &tracker, &SinglePage);

        assert_eq!(controller.active_section(), Section::Home);
    }
}
