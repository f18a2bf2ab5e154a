use std::fmt;

use serde::{Deserialize, Serialize};

/// In-page navigation targets. Every section renders exactly one element
/// whose `id` is [`Anchor::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Design,
    Contact,
}

impl Anchor {
    /// Page order, top to bottom.
    pub const ALL: [Anchor; 7] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Design,
        Anchor::Contact,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Design => "design",
            Anchor::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Experience => "Experience",
            Anchor::Projects => "Projects",
            Anchor::Design => "Design",
            Anchor::Contact => "Contact",
        }
    }

    /// `#about`, for plain `<a href>` navigation.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// 1-based position used by the numbered headings ("02.").
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Number shown in front of the label, in the nav and in section headings.
    pub fn number(self) -> String {
        format!("{:02}.", self.ordinal())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TryFrom<&str> for Anchor {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|a| a.id() == value)
            .ok_or_else(|| format!("unknown section anchor: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_vocabulary_is_fixed() {
        let ids = Anchor::ALL.iter().map(|a| a.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "skills", "experience", "projects", "design", "contact"]
        );
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_parse_and_href() {
        assert_eq!(Anchor::try_from("#design"), Ok(Anchor::Design));
        assert_eq!(Anchor::try_from("contact"), Ok(Anchor::Contact));
        assert!(Anchor::try_from("blog").is_err());
        assert_eq!(Anchor::Skills.href(), "#skills");
    }

    #[test]
    fn test_ordinal_follows_page_order() {
        assert_eq!(Anchor::Home.ordinal(), 1);
        assert_eq!(Anchor::Contact.ordinal(), 7);
        assert_eq!(Anchor::About.number(), "02.");
        assert_eq!(Anchor::Contact.number(), "07.");
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Anchor::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
    }
}
