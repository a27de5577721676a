//! Client testimonials for the home page carousel.

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Bhardwaj Architect transformed our vision into a stunning reality. Their attention to detail and innovative approach exceeded our expectations.",
        author: "Rajesh Sharma",
        position: "CEO, Sharma Properties",
        image: "/assets/images/testimonial1.jpg",
    },
    Testimonial {
        quote: "Working with the team at Bhardwaj Architect was a seamless experience from concept to completion. Their ability to blend aesthetics with functionality is unmatched.",
        author: "Priya Patel",
        position: "Homeowner",
        image: "/assets/images/testimonial2.jpg",
    },
    Testimonial {
        quote: "The creativity and professionalism displayed by Bhardwaj Architect made our commercial space not just beautiful but highly functional. A truly collaborative experience.",
        author: "Amit Verma",
        position: "Director, Horizon Developers",
        image: "/assets/images/testimonial3.jpg",
    },
    Testimonial {
        quote: "Our cultural center project required a delicate balance between modern design and traditional elements. Bhardwaj Architect delivered beyond our imagination.",
        author: "Sunita Singh",
        position: "Chairperson, Cultural Foundation",
        image: "/assets/images/testimonial4.jpg",
    },
];
