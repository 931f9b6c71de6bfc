use serde::{Deserialize, Serialize};

use crate::error::ShellError;

pub const DEFAULT_STORAGE_KEY: &str = "sidebarCollapsed";

/// DOM ids the controller looks up once the document is ready.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub sidebar: String,
    pub mobile_toggle: String,
    pub desktop_toggle: String,
    pub overlay: String,
    pub hamburger_icon: String,
    pub close_icon: String,
    pub main_content: String,
    pub logo_area: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            sidebar: "sidebar".into(),
            mobile_toggle: "sidebar-toggle".into(),
            desktop_toggle: "sidebar-toggle-desktop".into(),
            overlay: "sidebar-overlay".into(),
            hamburger_icon: "hamburger-icon".into(),
            close_icon: "close-icon".into(),
            main_content: "main-content".into(),
            logo_area: "sidebar-logo-area".into(),
        }
    }
}

/// Presentation classes shared with the stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassNames {
    pub mobile_open: String,
    pub active: String,
    pub hidden: String,
    pub collapsed: String,
    pub sidebar_collapsed: String,
}

impl ClassNames {
    /// `DOMTokenList` throws on empty tokens and tokens with whitespace.
    pub fn validate(&self) -> Result<(), ShellError> {
        let fields = [
            ("mobile_open", &self.mobile_open),
            ("active", &self.active),
            ("hidden", &self.hidden),
            ("collapsed", &self.collapsed),
            ("sidebar_collapsed", &self.sidebar_collapsed),
        ];
        for (field, value) in fields {
            if value.is_empty() || value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(ShellError::InvalidClassName {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            mobile_open: "mobile-open".into(),
            active: "active".into(),
            hidden: "hidden".into(),
            collapsed: "collapsed".into(),
            sidebar_collapsed: "sidebar-collapsed".into(),
        }
    }
}

/// Everything a host page can override. Missing fields fall back to the
/// stock markup contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
    pub storage_key: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl SidebarConfig {
    /// Parse a host-supplied JSON object. Empty input means defaults.
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.classes.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_contract() {
        let cfg = SidebarConfig::default();
        assert_eq!(cfg.ids.desktop_toggle, "sidebar-toggle-desktop");
        assert_eq!(cfg.ids.logo_area, "sidebar-logo-area");
        assert_eq!(cfg.classes.sidebar_collapsed, "sidebar-collapsed");
        assert_eq!(cfg.storage_key, "sidebarCollapsed");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = SidebarConfig::from_json(
            r#"{"storage_key":"navCollapsed","ids":{"sidebar":"nav"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.storage_key, "navCollapsed");
        assert_eq!(cfg.ids.sidebar, "nav");
        assert_eq!(cfg.ids.overlay, "sidebar-overlay");
        assert_eq!(cfg.classes, ClassNames::default());
    }

    #[test]
    fn blank_json_is_default() {
        assert_eq!(SidebarConfig::from_json("  ").unwrap(), SidebarConfig::default());
    }

    #[test]
    fn rejects_blank_or_spaced_class_names() {
        let err = SidebarConfig::from_json(r#"{"classes":{"hidden":""}}"#).unwrap_err();
        assert!(matches!(err, ShellError::InvalidClassName { field: "hidden", .. }));

        let err = SidebarConfig::from_json(r#"{"classes":{"collapsed":"is collapsed"}}"#)
            .unwrap_err();
        match err {
            ShellError::InvalidClassName { field, value } => {
                assert_eq!(field, "collapsed");
                assert_eq!(value, "is collapsed");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(ClassNames::default().validate().is_ok());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SidebarConfig::from_json("{ids:").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }
}
