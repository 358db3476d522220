//! Server-rendered dashboard shell: a navigation sidebar next to a content
//! region. The only state is whether the sidebar is collapsed.

/// Sidebar links as `(href, label, icon)`.
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "Dashboard", "&#9776;"),
    ("/api/docs", "Documentation", "&#128214;"),
    ("/api/mobile/members/test", "Members", "&#128101;"),
];

/// Sidebar state as carried in the `sidebar` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    /// Parse the query value. Anything other than `collapsed` is expanded.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("collapsed") => SidebarState::Collapsed,
            _ => SidebarState::Expanded,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub sidebar_collapsed: bool,
}

impl DashboardLayout {
    pub fn new(state: SidebarState) -> Self {
        Self {
            sidebar_collapsed: state == SidebarState::Collapsed,
        }
    }

    pub fn state(&self) -> SidebarState {
        if self.sidebar_collapsed {
            SidebarState::Collapsed
        } else {
            SidebarState::Expanded
        }
    }

    pub fn toggle(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Render the full page around `content`, which must already be HTML.
    pub fn render(&self, content: &str) -> String {
        let mut flipped = *self;
        flipped.toggle();

        let root_class = if self.sidebar_collapsed {
            "layout sidebar-collapsed"
        } else {
            "layout"
        };
        let toggle_label = if self.sidebar_collapsed {
            "&raquo;"
        } else {
            "&laquo; Collapse"
        };

        let mut nav = String::new();
        for (href, label, icon) in NAV_ITEMS {
            nav.push_str(&format!("<li><a href=\"{href}\" title=\"{label}\">{icon}"));
            if !self.sidebar_collapsed {
                nav.push_str(&format!(" <span class=\"label\">{label}</span>"));
            }
            nav.push_str("</a></li>");
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<title>Roster Dashboard</title>
<style>
body {{ margin: 0; font-family: sans-serif; }}
.layout {{ display: flex; min-height: 100vh; }}
.sidebar {{ width: 220px; background: #1f2933; color: #f5f7fa; transition: width 0.2s; }}
.sidebar-collapsed .sidebar {{ width: 56px; }}
.sidebar a {{ color: inherit; text-decoration: none; display: block; padding: 12px 16px; }}
.sidebar ul {{ list-style: none; margin: 0; padding: 0; }}
.content {{ flex: 1; padding: 24px; }}
</style>
</head>
<body>
<div class="{root_class}" data-sidebar="{state}">
<aside class="sidebar">
<a class="toggle" href="/dashboard?sidebar={next}">{toggle_label}</a>
<nav><ul>{nav}</ul></nav>
</aside>
<main class="content">{content}</main>
</div>
</body>
</html>"#,
            state = self.state().as_str(),
            next = flipped.state().as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded() {
        let layout = DashboardLayout::default();
        assert!(!layout.sidebar_collapsed);
        assert_eq!(layout.state(), SidebarState::Expanded);
    }

    #[test]
    fn unknown_param_falls_back_to_expanded() {
        assert_eq!(SidebarState::from_param(Some("collapsed")), SidebarState::Collapsed);
        assert_eq!(SidebarState::from_param(Some("expanded")), SidebarState::Expanded);
        assert_eq!(SidebarState::from_param(Some("foo")), SidebarState::Expanded);
        assert_eq!(SidebarState::from_param(None), SidebarState::Expanded);
    }

    #[test]
    fn toggle_flips_state() {
        let mut layout = DashboardLayout::new(SidebarState::Expanded);
        layout.toggle();
        assert!(layout.sidebar_collapsed);
        layout.toggle();
        assert!(!layout.sidebar_collapsed);
    }

    #[test]
    fn expanded_render_shows_labels_and_collapse_link() {
        let html = DashboardLayout::new(SidebarState::Expanded).render("<p>hi</p>");
        assert!(html.contains(r#"class="layout""#));
        assert!(html.contains("<span class=\"label\">Members</span>"));
        assert!(html.contains("/dashboard?sidebar=collapsed"));
        assert!(html.contains("<main class=\"content\"><p>hi</p></main>"));
    }

    #[test]
    fn collapsed_render_hides_labels() {
        let html = DashboardLayout::new(SidebarState::Collapsed).render("");
        assert!(html.contains("layout sidebar-collapsed"));
        assert!(!html.contains("class=\"label\""));
        assert!(html.contains("/dashboard?sidebar=expanded"));
    }
}
