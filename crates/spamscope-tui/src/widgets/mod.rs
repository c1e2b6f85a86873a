//! Widget components for the Spamscope TUI

mod about;
mod classify_form;
mod header;
mod home;
mod loading;
mod result_panel;
mod toast;

pub use about::AboutSection;
pub use classify_form::ClassifyForm;
pub use header::MainHeader;
pub use home::HomeSection;
pub use loading::LoadingPanel;
pub use result_panel::ResultPanelWidget;
pub use toast::Toast;
