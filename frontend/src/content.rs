//! Literal page copy. Everything here is fixed at compile time.

use crate::assets::Asset;

/// Scroll anchors, in the order the sections are mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Top,
    About,
    Products,
    WhyUs,
    Shipping,
    Testimonials,
    Faqs,
    Contact,
}

impl SectionId {
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::WhyUs => "why-us",
            SectionId::Shipping => "shipping",
            SectionId::Testimonials => "testimonials",
            SectionId::Faqs => "faqs",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub const PAGE_SECTIONS: [SectionId; 8] = [
    SectionId::Top,
    SectionId::About,
    SectionId::Products,
    SectionId::WhyUs,
    SectionId::Shipping,
    SectionId::Testimonials,
    SectionId::Faqs,
    SectionId::Contact,
];

pub const NAV_LINKS: [(&str, SectionId); 7] = [
    ("About", SectionId::About),
    ("Products", SectionId::Products),
    ("Why Us", SectionId::WhyUs),
    ("Shipping", SectionId::Shipping),
    ("Testimonials", SectionId::Testimonials),
    ("FAQs", SectionId::Faqs),
    ("Contact", SectionId::Contact),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub size: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub image: Asset,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        size: "1 kg",
        description: "Perfect for kitchen gardens, houseplants & terrace gardens.",
        cta: "Order on WhatsApp",
        image: Asset::OneKg,
    },
    Product {
        size: "5 kg",
        description: "Great for small farms, nurseries & bulk gardening.",
        cta: "Order on WhatsApp",
        image: Asset::FiveKg,
    },
    Product {
        size: "10 kg",
        description: "Ideal for large-scale farming & commercial use.",
        cta: "Order on WhatsApp",
        image: Asset::TenKg,
    },
    Product {
        size: "Earthworms",
        description: "Live earthworms for starting your own composting system.",
        cta: "Enquire on WhatsApp",
        image: Asset::Earthworm,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Switched from chemicals to Farm Fresh Vermicompost — soil feels alive, and yields improved!",
        author: "Guru Nanak nursery",
    },
    Testimonial {
        quote: "Perfect for my terrace garden. Plants are healthier and greener than ever.",
        author: "Golden Nursery",
    },
    Testimonial {
        quote: "Timely delivery and great quality. Highly recommended for nurseries.",
        author: "Khan Nursery",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "What is Vermicompost?",
        answer: "Vermicompost is an organic fertilizer produced using earthworms that convert waste into nutrient-rich manure.",
    },
    FaqEntry {
        question: "Is it safe for all types of plants?",
        answer: "Yes! Suitable for crops, vegetables, fruits, flowers and potted plants.",
    },
    FaqEntry {
        question: "Do you deliver across India?",
        answer: "Yes, we ship to all states of India within a few working days.",
    },
    FaqEntry {
        question: "What payment options do you provide?",
        answer: "We accept UPI, Bank Transfer, and Cash on Delivery (for select locations).",
    },
];

pub const MISSION: [&str; 4] = [
    "Support sustainable agriculture",
    "Reduce dependency on harmful chemicals",
    "Provide affordable organic alternatives",
    "Contribute to a greener, healthier future",
];

pub const BENEFITS: [&str; 5] = [
    "Boosts soil fertility & microbial activity",
    "Increases water-holding capacity",
    "Enhances root growth & plant strength",
    "Improves crop yield and quality",
    "Eco-friendly, safe for plants & people",
];

/// (feature, vermicompost, chemical)
pub const COMPARISON: [(&str, &str, &str); 4] = [
    ("Soil Health", "Improves continuously", "Degrades over time"),
    ("Yield", "Sustainable long-term growth", "Only short-term boost"),
    ("Safety", "100% Natural", "Harmful chemicals"),
    ("Cost", "Affordable & lasting", "High recurring"),
];

pub const SHIPPING_POINTS: [&str; 4] = [
    "Eco-friendly packaging that preserves freshness",
    "Orders delivered within a few working days (location dependent)",
    "Order updates shared directly on WhatsApp",
    "Bulk orders available for farmers, nurseries & agri-suppliers",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_mounted_sections() {
        assert_eq!(NAV_LINKS.len(), 7);
        for (label, target) in NAV_LINKS {
            assert!(
                PAGE_SECTIONS.contains(&target),
                "{} links to a section that is not on the page",
                label
            );
            assert_ne!(target, SectionId::Top);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in PAGE_SECTIONS.iter().enumerate() {
            for b in &PAGE_SECTIONS[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn hrefs_are_fragment_anchors() {
        let hrefs: Vec<String> = PAGE_SECTIONS.iter().map(|s| s.href()).collect();
        assert_eq!(
            hrefs,
            vec!["#top", "#about", "#products", "#why-us", "#shipping", "#testimonials", "#faqs", "#contact"]
        );
    }

    #[test]
    fn every_product_has_its_own_image() {
        for (i, a) in PRODUCTS.iter().enumerate() {
            for b in &PRODUCTS[i + 1..] {
                assert_ne!(a.image, b.image);
                assert_ne!(a.size, b.size);
            }
        }
    }
}
