use std::time::Instant;

use eframe::egui;
use tracing::debug;

use pf_content::contact::{Acknowledgement, ContactForm, ValidationError};
use pf_content::content::Profile;
use pf_navigation::controller::{
    nav_command_channel, NavCommand, NavCommandReceiver, NavigationController,
};
use pf_navigation::resolve::SectionGeometry;
use pf_navigation::scroll::{scroll_channel, ScrollSender, ScrollTracker, Viewport};
use pf_navigation::section::Section;
use pf_navigation::transition::ViewTransition;

use crate::geometry::FrameGeometry;
use crate::smooth_scroll::SmoothScroll;

/// Window width below which the nav entries collapse behind the burger.
const MOBILE_BREAKPOINT: f32 = 700.0;

pub struct App {
    pub profile: Profile,

    // Contact form
    pub form: ContactForm,
    pub form_ack: Option<Acknowledgement>,
    pub form_error: Option<ValidationError>,

    // Navigation core; the controller owns the navigation state, everything
    // here goes through its operations
    pub controller: NavigationController,
    nav_commands: NavCommandReceiver,

    // Scroll stream; the tracker is released on teardown
    scroll_sender: ScrollSender,
    scroll_tracker: Option<ScrollTracker>,

    // Page geometry recorded during layout, queried live by the resolver
    pub geometry: FrameGeometry,

    pub transition: ViewTransition,
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub smooth_scroll: Option<SmoothScroll>,
}

impl App {
    pub fn new() -> Self {
        let profile = Profile::load(std::path::Path::new("./data/profile.json"));

        let (nav_sender, nav_commands) = nav_command_channel();
        let (scroll_sender, scroll_tracker) = scroll_channel();

        App {
            profile,
            form: ContactForm::new(),
            form_ack: None,
            form_error: None,
            controller: NavigationController::new(nav_sender),
            nav_commands,
            scroll_sender,
            scroll_tracker: Some(scroll_tracker),
            geometry: FrameGeometry::new(),
            transition: ViewTransition::new(Section::Home, Instant::now()),
            scroll_offset: 0.0,
            viewport_height: 0.0,
            smooth_scroll: None,
        }
    }

    pub fn mobile_layout(&self, ctx: &egui::Context) -> bool {
        ctx.screen_rect().width() < MOBILE_BREAKPOINT
    }

    fn publish_scroll_sample(&self) {
        self.scroll_sender.send(Viewport {
            scroll_y: self.scroll_offset,
            height: self.viewport_height,
        });
    }

    fn process_scroll_samples(&mut self) {
        if let Some(tracker) = &self.scroll_tracker {
            pf_navigation::process_scroll_samples(&mut self.controller, tracker, &self.geometry);
        }
    }

    fn run_pending_nav_commands(&mut self, now: Instant) {
        while let Some(command) = self.nav_commands.receive_nav() {
            match command {
                NavCommand::ScrollTo { target } => self.start_smooth_scroll(target, now),
            }
        }
    }

    fn start_smooth_scroll(&mut self, target: Section, now: Instant) {
        match self.geometry.extent(target) {
            Some(extent) => {
                self.smooth_scroll = Some(SmoothScroll::new(self.scroll_offset, extent.top, now));
            }
            // An unmounted target has no geometry, there is nothing to
            // scroll to
            None => debug!("No geometry for {}, scroll request dropped", target),
        }
    }

    /// Release the scroll subscription. Samples sent afterwards can no
    /// longer reach the navigation state.
    pub fn release_scroll_subscription(&mut self) {
        self.scroll_tracker = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        crate::ui::top_panel(ctx, self);

        crate::ui::bottom_panel(ctx, self);

        crate::ui::central_page(ctx, self, now);

        // Ambient path: every scroll sample recorded this frame runs the
        // full probe -> resolve -> controller pipeline
        self.publish_scroll_sample();
        self.process_scroll_samples();

        // Explicit path effects queued by select_section
        self.run_pending_nav_commands(now);

        self.transition.request(self.controller.active_section(), now);
        self.transition.advance(now);

        if !self.transition.settled() || self.smooth_scroll.is_some() {
            // Keep repainting to draw the animations
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.release_scroll_subscription();
    }
}
