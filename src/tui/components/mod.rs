// Components module - UI building blocks
//
// Rendered top to bottom every frame:
// - Title bar: app name, topic source, visible count
// - Tab bar: sort tabs and the category filter
// - Topic list: one card per topic in the derived view
// - Status bar: key hints and the newest log line
// Toasts overlay everything in the bottom corner.

pub mod formatters;
pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
pub mod toast;
pub mod topic_list;

pub use toast::Toast;
