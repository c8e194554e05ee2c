/// The page sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Registry order. Menus iterate it, and the resolver uses it for
    /// first-match-wins tie-breaking.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Unknown keys resolve to None.
    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.key() == key)
    }

    pub fn title(&self) -> String {
        match self {
            Section::Home => "Home".to_string(),
            Section::About => "About".to_string(),
            Section::Skills => "Skills".to_string(),
            Section::Projects => "Projects".to_string(),
            Section::Contact => "Contact".to_string(),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
