//! Cross-frontend primitives for presenting the dashboard.
//!
//! Houses the panel view-models, the notification log, change scopes and the
//! [`Dashboard`] host that terminal, headless or graphical clients share.
pub mod config;
pub mod dashboard;
pub mod event;
pub mod format;
pub mod frontend;
pub mod intent;
pub mod message;
pub mod scope;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, PanelConfig};
pub use dashboard::{Dashboard, RenderedPanel};
pub use event::Notifier;
pub use frontend::Frontend;
pub use intent::{LayoutCommand, PanelIntent};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use scope::UpdateScope;
pub use view_model::{PanelContext, PanelView};
