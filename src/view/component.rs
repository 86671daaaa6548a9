//! View components.

use std::sync::Arc;

/// A lazily loaded unit of UI presentation.
pub trait View: Send + Sync {
    /// Stable identifier, unique within the catalog.
    fn id(&self) -> &str;

    /// Human-readable title for the hosting chrome.
    fn title(&self) -> String;

    /// Render the view to its markup representation.
    fn render(&self) -> String;
}

/// Shared handle to a loaded view.
pub type ViewComponent = Arc<dyn View>;

impl std::fmt::Debug for dyn View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View").field("id", &self.id()).finish()
    }
}

/// The application's main (home) view.
pub struct AppView;

impl View for AppView {
    fn id(&self) -> &str {
        "app"
    }

    fn title(&self) -> String {
        "FramaSpace".to_string()
    }

    fn render(&self) -> String {
        concat!(
            "<main id=\"framaspace\">\n",
            "  <h1>FramaSpace</h1>\n",
            "  <section class=\"space-list\"></section>\n",
            "</main>\n"
        )
        .to_string()
    }
}

/// The about view.
pub struct AboutView;

impl View for AboutView {
    fn id(&self) -> &str {
        "about"
    }

    fn title(&self) -> String {
        "About FramaSpace".to_string()
    }

    fn render(&self) -> String {
        concat!(
            "<main id=\"framaspace-about\">\n",
            "  <h1>About</h1>\n",
            "  <p>FramaSpace: collaborative spaces by Framasoft.</p>\n",
            "</main>\n"
        )
        .to_string()
    }
}
