use crate::config::ElementIds;

/// Class-list access on one element handle. Implementations mutate through
/// a shared handle (the DOM node), hence `&self`.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&self, class: &str);
    fn remove(&self, class: &str);

    /// Flip membership and return the new state.
    fn toggle(&self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }

    fn set(&self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}

/// Every element the sidebar touches, each optional. An absent element
/// disables only the behavior that needs it.
#[derive(Debug, Clone)]
pub struct SidebarElements<E> {
    pub sidebar: Option<E>,
    pub mobile_toggle: Option<E>,
    pub desktop_toggle: Option<E>,
    pub overlay: Option<E>,
    pub hamburger_icon: Option<E>,
    pub close_icon: Option<E>,
    pub main_content: Option<E>,
    pub logo_area: Option<E>,
}

impl<E> Default for SidebarElements<E> {
    fn default() -> Self {
        Self {
            sidebar: None,
            mobile_toggle: None,
            desktop_toggle: None,
            overlay: None,
            hamburger_icon: None,
            close_icon: None,
            main_content: None,
            logo_area: None,
        }
    }
}

impl<E> SidebarElements<E> {
    /// Resolve every id through `find` (typically `getElementById`).
    pub fn lookup<F>(ids: &ElementIds, mut find: F) -> Self
    where
        F: FnMut(&str) -> Option<E>,
    {
        Self {
            sidebar: find(&ids.sidebar),
            mobile_toggle: find(&ids.mobile_toggle),
            desktop_toggle: find(&ids.desktop_toggle),
            overlay: find(&ids.overlay),
            hamburger_icon: find(&ids.hamburger_icon),
            close_icon: find(&ids.close_icon),
            main_content: find(&ids.main_content),
            logo_area: find(&ids.logo_area),
        }
    }
}
