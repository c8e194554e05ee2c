pub mod bottom_panel;
pub mod sections;
pub mod top_panel;

pub(crate) use {
    self::bottom_panel::bottom_panel, self::sections::central_page, self::top_panel::top_panel,
};
