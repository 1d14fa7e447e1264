//! In-page anchor ids. Nav links and the scroll tracker both read from here,
//! so a rename only ever happens in one place.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Services,
    Work,
    About,
    Technologies,
    Contact,
}

impl SectionId {
    /// Page order, which is also the tracker's tie-break order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Services,
        SectionId::Work,
        SectionId::About,
        SectionId::Technologies,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Services => "services",
            SectionId::Work => "work",
            SectionId::About => "about",
            SectionId::Technologies => "technologies",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Label shown in the nav bar. The hero has no link of its own.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            SectionId::Services => Some("Services"),
            SectionId::Work => Some("Work"),
            SectionId::About => Some("About"),
            SectionId::Technologies => Some("Technologies"),
            SectionId::Contact => Some("Contact"),
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_their_anchor() {
        for id in SectionId::ALL {
            assert_eq!(id.href(), format!("#{}", id));
        }
        let labelled: Vec<&str> = SectionId::ALL.iter().filter_map(|id| id.nav_label()).collect();
        assert_eq!(labelled, vec!["Services", "Work", "About", "Technologies", "Contact"]);
    }

    #[test]
    fn anchor_ids_match_page_contract() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["hero", "services", "work", "about", "technologies", "contact"]
        );
    }
}
