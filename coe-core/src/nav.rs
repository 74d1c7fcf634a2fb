//! Dashboard tabs and the path table the router is built from.

/// One top-level page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Seasonality,
    Analysis,
    Premium,
}

impl Tab {
    /// Tabs in navigation order.
    pub const ALL: [Tab; 3] = [Tab::Seasonality, Tab::Analysis, Tab::Premium];

    /// Where unmatched paths are sent.
    pub const DEFAULT: Tab = Tab::Seasonality;

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Seasonality => "Seasonality",
            Tab::Analysis => "Analysis",
            Tab::Premium => "Premium",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Tab::Seasonality => "/",
            Tab::Analysis => "/analysis",
            Tab::Premium => "/premium",
        }
    }

    /// One-line description shown under the tab bar.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Tab::Seasonality => {
                "Compare quota and premium patterns by vehicle category and time range."
            }
            Tab::Analysis => "Switch between histogram and scatter to inspect pricing dynamics.",
            Tab::Premium => "Follow premium smoothing by month or year.",
        }
    }

    /// Chart card heading. Analysis swaps this per view, see
    /// [`crate::domain::AnalysisView::heading`].
    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Seasonality => "Monthly Pattern",
            Tab::Analysis => "Price Distribution",
            Tab::Premium => "Moving Average Tracker",
        }
    }

    /// Exact match on a literal path. Query strings, fragments and a trailing
    /// slash are ignored.
    pub fn lookup(path: &str) -> Option<Tab> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Tab::ALL.into_iter().find(|tab| tab.path() == normalized)
    }

    /// Route a path, falling back to [`Tab::DEFAULT`] for anything unknown.
    pub fn resolve(path: &str) -> Tab {
        Tab::lookup(path).unwrap_or(Tab::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_map_to_tabs() {
        assert_eq!(Tab::resolve("/"), Tab::Seasonality);
        assert_eq!(Tab::resolve("/analysis"), Tab::Analysis);
        assert_eq!(Tab::resolve("/premium"), Tab::Premium);
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Tab::lookup("/premium/"), Some(Tab::Premium));
        assert_eq!(Tab::lookup("/analysis?view=scatter"), Some(Tab::Analysis));
        assert_eq!(Tab::lookup(""), Some(Tab::Seasonality));
    }

    #[test]
    fn unknown_paths_redirect_to_default() {
        assert_eq!(Tab::lookup("/nope"), None);
        assert_eq!(Tab::resolve("/nope"), Tab::Seasonality);
        assert_eq!(Tab::resolve("/analysis/extra"), Tab::Seasonality);
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
