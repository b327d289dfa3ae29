pub mod page;
pub mod registry;
pub mod tab_labels;
pub mod tabs;

pub use tab_labels::tab_label_for_key;
pub use tabs::Tabs;
