//! Collapsible page panels and navigation highlighting.
//!
//! The layout has two slide-out panels, the sidebar and the profile panel.
//! Each toggles on its button and closes when it loses focus. The close is
//! delayed by [`FOCUS_OUT_DELAY`] so that a click inside the panel lands
//! before it disappears; the delay itself is applied by the page.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delay between a panel losing focus and it closing.
pub const FOCUS_OUT_DELAY: Duration = Duration::from_millis(130);

/// A collapsible panel on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Sidebar,
    ProfilePanel,
}

impl PanelId {
    pub const ALL: [Self; 2] = [Self::Sidebar, Self::ProfilePanel];

    /// Element id of the panel in the page markup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::ProfilePanel => "profile_panel",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a panel id the layout does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unknown panel: {0}")]
    Unknown(String),
}

impl FromStr for PanelId {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidebar" => Ok(Self::Sidebar),
            "profile_panel" => Ok(Self::ProfilePanel),
            _ => Err(PanelError::Unknown(s.to_string())),
        }
    }
}

/// Open/closed state of every panel. All panels start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PanelSet {
    sidebar: bool,
    profile_panel: bool,
}

impl PanelSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub const fn is_active(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Sidebar => self.sidebar,
            PanelId::ProfilePanel => self.profile_panel,
        }
    }

    /// Flip a panel open or closed and return its new state.
    pub fn toggle_panel(&mut self, panel: PanelId) -> bool {
        let slot = self.slot(panel);
        *slot = !*slot;
        tracing::debug!(panel = %panel, active = *slot, "Panel toggled");
        *slot
    }

    /// Close a panel after it lost focus.
    pub fn focus_out(&mut self, panel: PanelId) {
        *self.slot(panel) = false;
    }

    /// Panels currently open, in layout order.
    #[must_use]
    pub fn active_panels(&self) -> Vec<PanelId> {
        PanelId::ALL
            .into_iter()
            .filter(|panel| self.is_active(*panel))
            .collect()
    }

    const fn slot(&mut self, panel: PanelId) -> &mut bool {
        match panel {
            PanelId::Sidebar => &mut self.sidebar,
            PanelId::ProfilePanel => &mut self.profile_panel,
        }
    }
}

/// Navigation link to highlight for the current path.
///
/// Only the first path segment counts, so `/products/12/edit` highlights the
/// `/products` entry and the site root yields `/`.
#[must_use]
pub fn active_nav_href(path: &str) -> String {
    let first = path
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    format!("/{first}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_panel() {
        let mut panels = PanelSet::new();
        assert!(panels.toggle_panel(PanelId::Sidebar));
        assert!(panels.is_active(PanelId::Sidebar));
        assert!(!panels.is_active(PanelId::ProfilePanel));
        assert!(!panels.toggle_panel(PanelId::Sidebar));
        assert!(panels.active_panels().is_empty());
    }

    #[test]
    fn test_focus_out_closes() {
        let mut panels = PanelSet::new();
        panels.toggle_panel(PanelId::ProfilePanel);
        panels.toggle_panel(PanelId::Sidebar);
        panels.focus_out(PanelId::ProfilePanel);
        assert_eq!(panels.active_panels(), vec![PanelId::Sidebar]);
        panels.focus_out(PanelId::ProfilePanel);
        assert!(!panels.is_active(PanelId::ProfilePanel));
    }

    #[test]
    fn test_panel_id_from_str() {
        assert_eq!("sidebar".parse::<PanelId>().unwrap(), PanelId::Sidebar);
        assert_eq!(
            "profile_panel".parse::<PanelId>().unwrap(),
            PanelId::ProfilePanel
        );
        assert_eq!(
            "footer".parse::<PanelId>(),
            Err(PanelError::Unknown("footer".to_string()))
        );
    }

    #[test]
    fn test_active_nav_href() {
        assert_eq!(active_nav_href("/products/12/edit"), "/products");
        assert_eq!(active_nav_href("/cart"), "/cart");
        assert_eq!(active_nav_href("/cart?step=2"), "/cart");
        assert_eq!(active_nav_href("/"), "/");
        assert_eq!(active_nav_href(""), "/");
    }
}
