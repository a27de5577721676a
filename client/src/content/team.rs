//! Studio people, history and values for the About page.

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Vikram Bhardwaj",
        role: "Principal Architect & Founder",
        image: "/assets/images/team1.jpg",
        bio: "With over 20 years of experience, Vikram founded Bhardwaj Architect with a vision to create meaningful spaces that inspire and endure.",
    },
    TeamMember {
        name: "Priya Sharma",
        role: "Senior Architect",
        image: "/assets/images/team2.jpg",
        bio: "Priya specializes in sustainable design and has led some of our most innovative eco-friendly projects over the past 10 years.",
    },
    TeamMember {
        name: "Rahul Verma",
        role: "Design Director",
        image: "/assets/images/team3.jpg",
        bio: "Rahul brings creative vision and technical expertise to every project, with a particular focus on blending traditional elements with modern design.",
    },
    TeamMember {
        name: "Ananya Patel",
        role: "Interior Design Lead",
        image: "/assets/images/team4.jpg",
        bio: "Ananya's approach to interior spaces creates harmonious environments that complement architectural designs while exceeding client expectations.",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone { year: "2008", title: "Foundation", description: "Bhardwaj Architect was founded with a mission to create exceptional architectural experiences." },
    Milestone { year: "2012", title: "First Major Project", description: "Completed the award-winning Cultural Center in Jaipur, establishing our reputation for innovative design." },
    Milestone { year: "2015", title: "Expansion", description: "Expanded our team and opened a second office in Mumbai to better serve our growing client base." },
    Milestone { year: "2018", title: "International Recognition", description: "Received international acclaim with our first global award for sustainable architectural design." },
    Milestone { year: "2021", title: "Innovation Hub", description: "Launched our innovation lab focused on sustainable building technologies and smart architecture." },
    Milestone { year: "Present", title: "Continued Excellence", description: "Continuing our journey of creating architectural masterpieces that transform spaces and lives." },
];

pub const VALUES: &[Value] = &[
    Value { title: "Excellence", description: "We pursue excellence in every aspect of our work, from conceptual design to final execution." },
    Value { title: "Collaboration", description: "We believe in the power of collaboration, working closely with clients to bring their vision to life." },
    Value { title: "Sustainability", description: "We are committed to sustainable practices that minimize environmental impact and promote well-being." },
    Value { title: "Innovation", description: "We continuously push boundaries to discover innovative solutions to architectural challenges." },
];
