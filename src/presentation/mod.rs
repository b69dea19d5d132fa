pub mod dispatch;
pub mod format;
pub mod leptos_views;
pub mod view_model;

pub use dispatch::dispatch;
pub use leptos_views::LeptosViews;
