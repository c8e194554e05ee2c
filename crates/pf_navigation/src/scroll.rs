/// One sample of the viewport, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f32,
    pub height: f32,
}

impl Viewport {
    /// The probe is the vertical midpoint of the visible viewport. A section
    /// counts as active when its content occupies the center of the screen,
    /// not merely when any pixel of it is visible.
    pub fn probe(&self) -> f32 {
        self.scroll_y + self.height / 2.0
    }
}

pub struct ScrollSender {
    sample_sender: std::sync::mpsc::Sender<Viewport>,
}

impl ScrollSender {
    /// Samples sent after the tracker has been dropped are discarded.
    pub fn send(&self, viewport: Viewport) {
        self.sample_sender.send(viewport).ok();
    }
}

pub struct ScrollTracker {
    sample_receiver: std::sync::mpsc::Receiver<Viewport>,
}

impl ScrollTracker {
    pub fn poll(&self) -> Option<Viewport> {
        self.sample_receiver.try_recv().ok()
    }
}

/// The scroll subscription. The sender side lives with the event source, the
/// tracker with the consumer; dropping the tracker releases the subscription.
/// Every sample is delivered, there is no throttling.
pub fn scroll_channel() -> (ScrollSender, ScrollTracker) {
    let (sample_sender, sample_receiver) = std::sync::mpsc::channel();
    (ScrollSender { sample_sender }, ScrollTracker { sample_receiver })
}

#[cfg(test)]
mod tests {

    use crate::scroll as sut;
    use crate::scroll::Viewport;

    #[test]
    fn probe_is_the_viewport_midpoint() {
        let viewport = Viewport {
            scroll_y: 850.0,
            height: 900.0,
        };

        assert_eq!(viewport.probe(), 1300.0);
    }

    #[test]
    fn samples_arrive_in_order() {
        let (sender, tracker) = sut::scroll_channel();

        sender.send(Viewport {
            scroll_y: 0.0,
            height: 900.0,
        });
        sender.send(Viewport {
            scroll_y: 120.0,
            height: 900.0,
        });

        assert_eq!(tracker.poll().map(|v| v.scroll_y), Some(0.0));
        assert_eq!(tracker.poll().map(|v| v.scroll_y), Some(120.0));
        assert_eq!(tracker.poll(), None);
    }

    #[test]
    fn send_after_release_is_discarded() {
        let (sender, tracker) = sut::scroll_channel();

        drop(tracker);

        // Must not panic, the sample just goes nowhere
        sender.send(Viewport {
            scroll_y: 10.0,
            height: 900.0,
        });
    }
}
