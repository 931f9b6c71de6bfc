use serde::Serialize;

use crate::config::{ClassNames, SidebarConfig};
use crate::dom::{ClassList, SidebarElements};
use crate::error::ShellError;
use crate::storage::{CollapsedState, FlagStore};

/// Which listeners the host should install, derived from which elements exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub mobile_toggle: bool,
    pub overlay: bool,
    pub desktop_toggle: bool,
    /// Logo expand rides on the desktop toggle; without it the logo is inert.
    pub logo_area: bool,
    /// Class observer on the sidebar, mirrored onto main content.
    pub observe_sidebar: bool,
}

/// Flag snapshot for hosts. Absent elements report `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SidebarState {
    pub mobile_open: bool,
    pub collapsed: bool,
    pub overlay_active: bool,
    pub hamburger_hidden: bool,
    pub close_hidden: bool,
    pub content_collapsed: bool,
}

/// Owns the sidebar element handles and the collapsed-flag store. All
/// transitions are plain class edits; the host decides when to call them.
pub struct SidebarController<E, S> {
    elements: SidebarElements<E>,
    store: S,
    classes: ClassNames,
    storage_key: String,
}

fn has<E: ClassList>(el: &Option<E>, class: &str) -> bool {
    el.as_ref().map(|e| e.contains(class)).unwrap_or(false)
}

impl<E: ClassList, S: FlagStore> SidebarController<E, S> {
    pub fn new(elements: SidebarElements<E>, store: S, config: &SidebarConfig) -> Self {
        Self {
            elements,
            store,
            classes: config.classes.clone(),
            storage_key: config.storage_key.clone(),
        }
    }

    pub fn elements(&self) -> &SidebarElements<E> {
        &self.elements
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bindings(&self) -> Bindings {
        let els = &self.elements;
        let desktop = els.desktop_toggle.is_some();
        Bindings {
            mobile_toggle: els.mobile_toggle.is_some(),
            overlay: els.overlay.is_some(),
            desktop_toggle: desktop,
            logo_area: desktop && els.logo_area.is_some(),
            observe_sidebar: els.sidebar.is_some() && els.main_content.is_some(),
        }
    }

    /// Page-ready setup: restore the persisted flag, then align main content.
    pub fn initialize(&mut self) {
        let bindings = self.bindings();
        if bindings.desktop_toggle {
            self.restore_collapsed_state();
        }
        if bindings.observe_sidebar {
            self.sync_content_margin();
        }
    }

    pub fn toggle_mobile(&self) {
        let c = &self.classes;
        let els = &self.elements;
        if let Some(sidebar) = &els.sidebar {
            sidebar.toggle(&c.mobile_open);
        }
        if let Some(overlay) = &els.overlay {
            overlay.toggle(&c.active);
        }
        if let Some(icon) = &els.hamburger_icon {
            icon.toggle(&c.hidden);
        }
        if let Some(icon) = &els.close_icon {
            icon.toggle(&c.hidden);
        }
    }

    /// Force the mobile panel shut. Safe to call when already closed.
    pub fn close_mobile(&self) {
        let c = &self.classes;
        let els = &self.elements;
        if let Some(sidebar) = &els.sidebar {
            sidebar.remove(&c.mobile_open);
        }
        if let Some(overlay) = &els.overlay {
            overlay.remove(&c.active);
        }
        if let Some(icon) = &els.hamburger_icon {
            icon.remove(&c.hidden);
        }
        if let Some(icon) = &els.close_icon {
            icon.add(&c.hidden);
        }
    }

    /// Apply a persisted `"true"`. Never clears classes already present.
    pub fn restore_collapsed_state(&self) {
        let Some(sidebar) = &self.elements.sidebar else {
            return;
        };
        if !CollapsedState::load(&self.store, &self.storage_key).0 {
            return;
        }
        sidebar.add(&self.classes.collapsed);
        if let Some(main) = &self.elements.main_content {
            main.add(&self.classes.sidebar_collapsed);
        }
    }

    /// Flip collapsed on sidebar and main content, then persist the
    /// sidebar's resulting membership.
    pub fn toggle_desktop_collapse(&mut self) -> Result<(), ShellError> {
        let Some(sidebar) = &self.elements.sidebar else {
            return Ok(());
        };
        sidebar.toggle(&self.classes.collapsed);
        if let Some(main) = &self.elements.main_content {
            main.toggle(&self.classes.sidebar_collapsed);
        }
        let state = CollapsedState(sidebar.contains(&self.classes.collapsed));
        state.save(&mut self.store, &self.storage_key)
    }

    /// Expand-only: a logo click never collapses.
    pub fn expand_on_logo_click(&mut self) -> Result<(), ShellError> {
        if self.is_collapsed() {
            self.toggle_desktop_collapse()
        } else {
            Ok(())
        }
    }

    /// Mirror sidebar `collapsed` onto main content `sidebar-collapsed`.
    pub fn sync_content_margin(&self) {
        if let (Some(sidebar), Some(main)) = (&self.elements.sidebar, &self.elements.main_content) {
            main.set(
                &self.classes.sidebar_collapsed,
                sidebar.contains(&self.classes.collapsed),
            );
        }
    }

    pub fn is_collapsed(&self) -> bool {
        has(&self.elements.sidebar, &self.classes.collapsed)
    }

    pub fn snapshot(&self) -> SidebarState {
        let c = &self.classes;
        let els = &self.elements;
        SidebarState {
            mobile_open: has(&els.sidebar, &c.mobile_open),
            collapsed: has(&els.sidebar, &c.collapsed),
            overlay_active: has(&els.overlay, &c.active),
            hamburger_hidden: has(&els.hamburger_icon, &c.hidden),
            close_hidden: has(&els.close_icon, &c.hidden),
            content_collapsed: has(&els.main_content, &c.sidebar_collapsed),
        }
    }
}
