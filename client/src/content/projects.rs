//! Project portfolio.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::filter::Categorized;

/// Tabs shown above the project grid.
pub const PROJECT_FILTERS: &[&str] = &["All", "Residential", "Commercial", "Public"];

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub thumbnail: &'static str,
    pub summary: &'static str,
    pub detail: Option<ProjectDetail>,
}

/// Case-study material, only written up for a subset of projects.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub client: &'static str,
    pub area: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub images: &'static [&'static str],
    pub features: &'static [&'static str],
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

impl Project {
    pub fn href(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "modern-villa",
        title: "Modern Villa",
        category: "Residential",
        location: "Mumbai, India",
        year: "2023",
        thumbnail: "/assets/images/project1.jpg",
        summary: "A contemporary residential villa with clean lines and open spaces.",
        detail: Some(ProjectDetail {
            client: "Private Owner",
            area: "5,200 sq ft",
            description: "A contemporary residential villa with clean lines and open spaces, designed to maximize natural light and ventilation while providing privacy in a dense urban setting.",
            challenge: "The site had significant constraints with limited space and strict local building codes. We needed to create a spacious feeling home while working within these limitations.",
            solution: "By employing a vertical design strategy with multiple levels and strategically placed windows and skylights, we were able to create a sense of spaciousness and connection to the outdoors.",
            images: &[
                "/assets/images/project1-detail1.jpg",
                "/assets/images/project1-detail2.jpg",
                "/assets/images/project1-detail3.jpg",
                "/assets/images/project1-detail4.jpg",
            ],
            features: &[
                "Passive cooling system",
                "Rooftop garden",
                "Natural stone finishes",
                "Floor-to-ceiling windows",
                "Custom furniture",
                "Indoor-outdoor living spaces",
            ],
        }),
    },
    Project {
        id: "urban-office",
        title: "Urban Office Complex",
        category: "Commercial",
        location: "Delhi, India",
        year: "2022",
        thumbnail: "/assets/images/project2.jpg",
        summary: "Sustainable office complex designed to maximize natural light and energy efficiency.",
        detail: Some(ProjectDetail {
            client: "TechSphere Inc.",
            area: "25,000 sq ft",
            description: "Sustainable office complex designed to maximize natural light and energy efficiency while providing a collaborative and inspiring workspace for a growing technology company.",
            challenge: "Creating a flexible office space that could accommodate rapid company growth while maintaining energy efficiency and promoting employee wellness.",
            solution: "We designed modular office layouts with movable partitions and integrated smart building systems to optimize energy usage based on occupancy patterns.",
            images: &[
                "/assets/images/project2-detail1.jpg",
                "/assets/images/project2-detail2.jpg",
                "/assets/images/project2-detail3.jpg",
                "/assets/images/project2-detail4.jpg",
            ],
            features: &[
                "Smart building systems",
                "Green roof",
                "Flexible workspace configurations",
                "Rainwater harvesting",
                "EV charging stations",
                "Wellness areas",
            ],
        }),
    },
    Project {
        id: "cultural-center",
        title: "Cultural Center",
        category: "Public",
        location: "Jaipur, India",
        year: "2021",
        thumbnail: "/assets/images/project3.jpg",
        summary: "A vibrant cultural center that blends traditional Indian architecture with modern design.",
        detail: Some(ProjectDetail {
            client: "Rajasthan Arts Foundation",
            area: "45,000 sq ft",
            description: "A vibrant cultural center that blends traditional Indian architecture with modern design, creating spaces for exhibitions, performances, and community gatherings.",
            challenge: "Balancing respect for traditional architectural elements with contemporary functionality while creating a landmark public building.",
            solution: "Our design incorporates traditional Rajasthani motifs and materials in a contemporary framework, with flexible spaces that can be reconfigured for various events.",
            images: &[
                "/assets/images/project3-detail1.jpg",
                "/assets/images/project3-detail2.jpg",
                "/assets/images/project3-detail3.jpg",
                "/assets/images/project3-detail4.jpg",
            ],
            features: &[
                "Multipurpose auditorium",
                "Exhibition galleries",
                "Traditional courtyard",
                "Interactive learning spaces",
                "Artisan workshops",
                "Outdoor amphitheater",
            ],
        }),
    },
    Project {
        id: "luxury-apartments",
        title: "Luxury Apartments",
        category: "Residential",
        location: "Bangalore, India",
        year: "2022",
        thumbnail: "/assets/images/project4.jpg",
        summary: "Premium residential apartments featuring modern amenities and elegant design.",
        detail: None,
    },
    Project {
        id: "retail-plaza",
        title: "Retail Plaza",
        category: "Commercial",
        location: "Hyderabad, India",
        year: "2021",
        thumbnail: "/assets/images/project5.jpg",
        summary: "A multi-level retail plaza with dynamic spaces and striking architectural elements.",
        detail: None,
    },
    Project {
        id: "public-library",
        title: "Public Library",
        category: "Public",
        location: "Chennai, India",
        year: "2020",
        thumbnail: "/assets/images/project6.jpg",
        summary: "A modern public library designed to encourage learning and community engagement.",
        detail: None,
    },
    Project {
        id: "seaside-villa",
        title: "Seaside Villa",
        category: "Residential",
        location: "Goa, India",
        year: "2023",
        thumbnail: "/assets/images/project7.jpg",
        summary: "Luxurious seaside villa with panoramic ocean views and sustainable design features.",
        detail: None,
    },
    Project {
        id: "corporate-headquarters",
        title: "Corporate Headquarters",
        category: "Commercial",
        location: "Pune, India",
        year: "2022",
        thumbnail: "/assets/images/project8.jpg",
        summary: "Innovative corporate headquarters with collaborative workspaces and modern aesthetics.",
        detail: None,
    },
    Project {
        id: "art-museum",
        title: "Art Museum",
        category: "Public",
        location: "Kolkata, India",
        year: "2021",
        thumbnail: "/assets/images/project9.jpg",
        summary: "Contemporary art museum designed to showcase exhibitions with optimal lighting and flow.",
        detail: None,
    },
];

pub const FEATURED_COUNT: usize = 3;
pub const RELATED_LIMIT: usize = 3;

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Leading projects shown on the home page.
pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..FEATURED_COUNT.min(PROJECTS.len())]
}

/// Same-category projects other than `project`, capped at `limit`.
pub fn related_projects(project: &Project, limit: usize) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.category == project.category && p.id != project.id)
        .take(limit)
        .collect()
}
