//! Portfolio items and the category filter over them.

pub const ALL_CATEGORY: &str = "all";

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterCategory {
    pub id: &'static str,
    pub name: &'static str,
}

pub const FILTER_CATEGORIES: [FilterCategory; 5] = [
    FilterCategory { id: ALL_CATEGORY, name: "All Projects" },
    FilterCategory { id: "ai", name: "AI Solutions" },
    FilterCategory { id: "web3", name: "Web3" },
    FilterCategory { id: "web", name: "Web Applications" },
    FilterCategory { id: "software", name: "Software" },
];

/// Badge text for a category id, with the "Projects" suffix dropped.
pub fn category_label(id: &str) -> Option<&'static str> {
    FILTER_CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.trim_end_matches(" Projects"))
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI-Powered Analytics Dashboard",
        category: "ai",
        description: "A comprehensive analytics dashboard with AI-driven insights and predictive analytics for business intelligence.",
        image: "/images/projects/project1.jpg",
        technologies: &["React", "TensorFlow.js", "Node.js", "D3.js"],
    },
    Project {
        id: 2,
        title: "Decentralized Finance Platform",
        category: "web3",
        description: "A DeFi platform enabling users to lend, borrow, and stake cryptocurrencies in a decentralized manner.",
        image: "/images/projects/project2.jpg",
        technologies: &["Solidity", "Ethereum", "Web3.js", "React"],
    },
    Project {
        id: 3,
        title: "E-commerce Web Application",
        category: "web",
        description: "A modern e-commerce platform with real-time inventory management, payment processing, and customer analytics.",
        image: "/images/projects/project3.jpg",
        technologies: &["Next.js", "Stripe", "MongoDB", "Tailwind CSS"],
    },
    Project {
        id: 4,
        title: "Smart City Management System",
        category: "software",
        description: "An integrated system for managing urban infrastructure, including traffic, utilities, and public services.",
        image: "/images/projects/project4.jpg",
        technologies: &["Python", "IoT", "AWS", "React"],
    },
    Project {
        id: 5,
        title: "NFT Marketplace",
        category: "web3",
        description: "A platform for creating, buying, selling, and trading non-fungible tokens with advanced search and filtering.",
        image: "/images/projects/project5.jpg",
        technologies: &["Ethereum", "IPFS", "Next.js", "GraphQL"],
    },
    Project {
        id: 6,
        title: "Natural Language Processing API",
        category: "ai",
        description: "An API service providing sentiment analysis, entity recognition, and text classification capabilities.",
        image: "/images/projects/project6.jpg",
        technologies: &["Python", "Hugging Face", "FastAPI", "Docker"],
    },
];

/// Stable filter. `all` keeps everything, an unknown tag keeps nothing.
pub fn filter_projects<'a>(items: &'a [Project], category: &str) -> Vec<&'a Project> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORY || item.category == category)
        .collect()
}

/// Active filter over a fixed item list. The visible list is always derived
/// from `items`, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioFilter<'a> {
    items: &'a [Project],
    active: String,
}

impl<'a> PortfolioFilter<'a> {
    pub fn new(items: &'a [Project]) -> Self {
        Self {
            items,
            active: ALL_CATEGORY.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn select_category(&mut self, category: &str) -> Vec<&'a Project> {
        if self.active != category {
            log::debug!("portfolio filter: {} -> {}", self.active, category);
            self.active = category.to_string();
        }
        self.visible()
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        filter_projects(self.items, &self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &'static str) -> Project {
        Project {
            id,
            title: "",
            category,
            description: "",
            image: "",
            technologies: &[],
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn selects_matching_items_in_list_order() {
        let items = vec![item(1, "ai"), item(2, "web3"), item(3, "ai")];
        let mut filter = PortfolioFilter::new(&items);

        assert_eq!(ids(&filter.select_category("ai")), vec![1, 3]);
        assert_eq!(ids(&filter.select_category("web3")), vec![2]);
        assert_eq!(filter.active(), "web3");
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let items = vec![item(1, "ai"), item(2, "web3"), item(3, "ai")];
        let mut filter = PortfolioFilter::new(&items);

        assert!(filter.select_category("web").is_empty());
        assert!(filter.select_category("").is_empty());
    }

    #[test]
    fn all_restores_full_list_after_any_filter() {
        let items = vec![item(1, "ai"), item(2, "web3"), item(3, "ai")];
        let mut filter = PortfolioFilter::new(&items);
        assert_eq!(ids(&filter.visible()), vec![1, 2, 3]);

        filter.select_category("nope");
        assert_eq!(ids(&filter.select_category(ALL_CATEGORY)), vec![1, 2, 3]);
    }

    #[test]
    fn every_project_category_has_a_filter_button() {
        for project in PROJECTS {
            assert!(
                category_label(project.category).is_some(),
                "{} has no filter",
                project.category
            );
        }
        assert_eq!(category_label("all"), Some("All"));
        assert_eq!(category_label("ai"), Some("AI Solutions"));
        assert_eq!(category_label("design"), None);
    }

    #[test]
    fn shipped_projects_filter_by_category() {
        assert_eq!(ids(&filter_projects(PROJECTS, "web3")), vec![2, 5]);
        assert_eq!(filter_projects(PROJECTS, ALL_CATEGORY).len(), PROJECTS.len());
    }
}
