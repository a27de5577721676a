//! Gallery images.

use super::filter::Categorized;

pub const GALLERY_FILTERS: &[&str] = &["All", "Interior", "Commercial", "Public", "Residential", "Landscape"];

#[derive(Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl Categorized for GalleryImage {
    fn category(&self) -> &str {
        self.category
    }
}

macro_rules! image {
    ($id:expr, $src:expr, $alt:expr, $category:expr, $description:expr) => {
        GalleryImage { id: $id, src: $src, alt: $alt, category: $category, description: $description }
    };
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    image!(1, "/assets/images/gallery1.jpg", "Modern Villa Interior", "Interior", "Elegant living room with panoramic views"),
    image!(2, "/assets/images/gallery2.jpg", "Contemporary Office Space", "Commercial", "Open plan office with collaborative spaces"),
    image!(3, "/assets/images/gallery3.jpg", "Cultural Center Exterior", "Public", "Award-winning cultural center with innovative facade"),
    image!(4, "/assets/images/gallery4.jpg", "Luxury Apartment", "Residential", "Penthouse apartment with custom fixtures"),
    image!(5, "/assets/images/gallery5.jpg", "Office Building Exterior", "Commercial", "Sustainable office building with green roof"),
    image!(6, "/assets/images/gallery6.jpg", "Garden Design", "Landscape", "Contemporary garden with water features"),
    image!(7, "/assets/images/gallery7.jpg", "Modern Home Interior", "Interior", "Minimalist dining space with natural light"),
    image!(8, "/assets/images/gallery8.jpg", "Public Library", "Public", "Community library with reading pavilion"),
    image!(9, "/assets/images/gallery9.jpg", "Beach House", "Residential", "Oceanfront residence with sustainable materials"),
    image!(10, "/assets/images/gallery10.jpg", "Urban Park", "Landscape", "Urban park design with native plants"),
    image!(11, "/assets/images/gallery11.jpg", "Retail Interior", "Commercial", "Boutique retail space with custom displays"),
    image!(12, "/assets/images/gallery12.jpg", "Museum Interior", "Public", "Art gallery with optimal lighting design"),
];

pub fn find_image(id: u32) -> Option<&'static GalleryImage> {
    GALLERY_IMAGES.iter().find(|img| img.id == id)
}
