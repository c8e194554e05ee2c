use tracing::{debug, info};

use crate::section::Section;

/// Effects for the rendering layer, drained at the end of the frame.
pub enum NavCommand {
    ScrollTo { target: Section },
}

pub struct NavCommandSender {
    nav_sender: std::sync::mpsc::Sender<NavCommand>,
}

impl NavCommandSender {
    pub fn send_nav(&self, command: NavCommand) {
        self.nav_sender.send(command).ok();
    }
}

pub struct NavCommandReceiver {
    nav_receiver: std::sync::mpsc::Receiver<NavCommand>,
}

impl NavCommandReceiver {
    pub fn receive_nav(&self) -> Option<NavCommand> {
        self.nav_receiver.try_recv().ok()
    }
}

pub fn nav_command_channel() -> (NavCommandSender, NavCommandReceiver) {
    let (nav_sender, nav_receiver) = std::sync::mpsc::channel();
    (
        NavCommandSender { nav_sender },
        NavCommandReceiver { nav_receiver },
    )
}

/// The single authoritative piece of navigation state.
#[derive(Debug, PartialEq)]
pub struct NavigationState {
    pub active_section: Section,
    pub mobile_menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        NavigationState {
            active_section: Section::Home,
            mobile_menu_open: false,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the NavigationState. Consumers read through `state()`; all mutation
/// goes through the operations below.
pub struct NavigationController {
    state: NavigationState,
    command_sender: NavCommandSender,
}

impl NavigationController {
    pub fn new(command_sender: NavCommandSender) -> Self {
        NavigationController {
            state: NavigationState::new(),
            command_sender,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    /// Explicit intent (a nav click). Optimistic: the state changes before
    /// the requested scroll settles, so a scroll sample computed from the
    /// pre-scroll position can still overwrite it.
    pub fn select_section(&mut self, section: Section) {
        info!("Select section: {}", section);

        self.state.active_section = section;
        self.state.mobile_menu_open = false;

        self.command_sender
            .send_nav(NavCommand::ScrollTo { target: section });
    }

    /// Entry point for call sites holding raw section keys. Unknown keys are
    /// ignored.
    pub fn select_section_key(&mut self, key: &str) {
        match Section::from_key(key) {
            Some(section) => self.select_section(section),
            None => debug!("Ignored unknown section key: {}", key),
        }
    }

    /// Ambient intent, fed by the resolver on every scroll sample. Only a
    /// definite match changes the active section; no-match retains it.
    pub fn on_scroll_probe(&mut self, resolved: Option<Section>) {
        if let Some(section) = resolved {
            self.state.active_section = section;
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }
}
