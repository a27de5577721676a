//! Service catalogue and the design process.

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub process: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub image: &'static str,
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Services highlighted on the home page.
pub const HIGHLIGHT_COUNT: usize = 6;

pub const SERVICES: &[Service] = &[
    Service {
        id: "architectural-design",
        title: "Architectural Design",
        short_description: "Innovative design solutions tailored to your vision and requirements.",
        description: "Our architectural design services focus on creating spaces that are not just aesthetically pleasing but also functional and sustainable. We work closely with clients to understand their needs, vision, and constraints, and carry every project from concept sketches to detailed construction drawings.",
        process: &[
            "Initial consultation and requirement gathering",
            "Site analysis and feasibility studies",
            "Concept design and visualization",
            "Design development and refinement",
            "Construction documentation",
            "Permit acquisition assistance",
            "Construction administration",
        ],
        projects: &["Modern Villa, Mumbai", "Cultural Center, Jaipur", "Beach House, Goa"],
        image: "/assets/images/service-architectural.jpg",
    },
    Service {
        id: "interior-design",
        title: "Interior Design",
        short_description: "Transforming interior spaces with thoughtful design that balances aesthetics, functionality, and your personal style.",
        description: "Our interior design services transform spaces into environments that reflect your personality, lifestyle, and functional needs. We combine colors, textures, lighting, and materials into cohesive interiors.",
        process: &[
            "Space planning and layout",
            "Material and finish selection",
            "Lighting design",
            "Furniture selection and custom design",
            "Installation supervision",
        ],
        projects: &["Luxury Apartments, Bangalore", "Urban Office Complex, Delhi"],
        image: "/assets/images/service-interior.jpg",
    },
    Service {
        id: "urban-planning",
        title: "Urban Planning",
        short_description: "Creating sustainable urban environments that enhance quality of life while addressing complex social and environmental challenges.",
        description: "Our urban planning services focus on creating vibrant, sustainable, and inclusive communities. We analyze existing urban conditions, identify opportunities for improvement, and develop plans that balance growth with livability.",
        process: &[
            "Urban context analysis",
            "Stakeholder engagement",
            "Master plan development",
            "Zoning and regulatory review",
            "Implementation strategy",
        ],
        projects: &["Riverside District Plan, Ahmedabad", "Transit Corridor, Pune"],
        image: "/assets/images/service-urban.jpg",
    },
    Service {
        id: "landscape-design",
        title: "Landscape Design",
        short_description: "Crafting outdoor spaces that complement architecture and create harmonious connections between buildings and nature.",
        description: "Our landscape design services create outdoor spaces that enhance the built environment and provide sustainable, functional, and beautiful settings for living, working, and recreation.",
        process: &[
            "Site survey and analysis",
            "Planting and hardscape design",
            "Water management planning",
            "Lighting and irrigation design",
            "Planting supervision",
        ],
        projects: &["Urban Park, Chandigarh", "Seaside Villa, Goa"],
        image: "/assets/images/service-landscape.jpg",
    },
    Service {
        id: "project-management",
        title: "Project Management",
        short_description: "Comprehensive project management services ensuring your project is delivered on time, within budget, and to the highest standards.",
        description: "Our project management services ensure that architectural projects are completed efficiently, on schedule, and within budget while maintaining the highest quality standards.",
        process: &[
            "Budget planning and cost control",
            "Contractor selection and tendering",
            "Schedule management",
            "Quality assurance",
            "Handover and closeout",
        ],
        projects: &["Corporate Headquarters, Pune", "Retail Plaza, Hyderabad"],
        image: "/assets/images/service-project.jpg",
    },
    Service {
        id: "3d-visualization",
        title: "3D Visualization",
        short_description: "Bringing designs to life with photorealistic 3D visualizations that help you experience your space before construction begins.",
        description: "Our 3D visualization services provide realistic representations of architectural designs before construction begins, through detailed renderings, animations, and virtual walkthroughs.",
        process: &[
            "3D modeling",
            "Material and lighting studies",
            "Photorealistic rendering",
            "Animated walkthroughs",
            "Virtual reality presentations",
        ],
        projects: &["Art Museum, Kolkata", "Public Library, Chennai"],
        image: "/assets/images/service-3d.jpg",
    },
    Service {
        id: "sustainable-design",
        title: "Sustainable Design",
        short_description: "Environmentally responsible design solutions that minimize ecological footprint while maximizing efficiency and comfort.",
        description: "Our sustainable design services integrate environmental considerations into every aspect of the architectural process. We employ passive design strategies, energy-efficient systems, and responsible materials.",
        process: &[
            "Energy modeling",
            "Passive design strategies",
            "Renewable energy integration",
            "Sustainable material selection",
            "Green building certification support",
        ],
        projects: &["Urban Office Complex, Delhi", "Seaside Villa, Goa"],
        image: "/assets/images/service-sustainable.jpg",
    },
    Service {
        id: "consultation",
        title: "Architectural Consultation",
        short_description: "Expert advice on architectural feasibility, regulations, and design possibilities for your project.",
        description: "Our architectural consultation services provide expert advice on a wide range of architectural matters, whether you're exploring the feasibility of a project or navigating complex regulations.",
        process: &[
            "Feasibility assessment",
            "Regulatory guidance",
            "Design review",
            "Property evaluation",
            "Renovation planning",
        ],
        projects: &["Heritage Haveli Restoration, Jaipur"],
        image: "/assets/images/service-consultation.jpg",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { number: "01", title: "Discovery", description: "We begin by understanding your vision, requirements, and constraints through in-depth consultations and site visits." },
    ProcessStep { number: "02", title: "Concept Design", description: "Our team develops initial design concepts that align with your goals, presenting multiple options for discussion and refinement." },
    ProcessStep { number: "03", title: "Design Development", description: "The selected concept is further refined with detailed drawings, material selections, and technical specifications." },
    ProcessStep { number: "04", title: "Documentation", description: "We prepare comprehensive construction documents, ensuring all technical details are accurately specified for execution." },
    ProcessStep { number: "05", title: "Implementation", description: "During construction, we provide regular site visits and coordination to ensure the design vision is properly executed." },
    ProcessStep { number: "06", title: "Completion", description: "We conduct final inspections and ensure all elements are finished according to specifications before project handover." },
];

pub fn highlighted_services() -> &'static [Service] {
    &SERVICES[..HIGHLIGHT_COUNT.min(SERVICES.len())]
}
