#![forbid(unsafe_code)]

//! Static site content.
//!
//! Read-only catalogs the page shell mounts its controllers over. Nothing
//! here carries behavior beyond lookups; the controllers in `bliss-widgets`
//! own all state.

use bliss_widgets::{Category, GalleryItem, PanelId};

/// One entry in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Link text.
    pub label: &'static str,
    /// Route path.
    pub href: &'static str,
}

/// Header navigation, in display order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Menu", href: "/menu" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Gallery", href: "/gallery" },
    NavItem { label: "Contact", href: "/contact" },
    NavItem { label: "FAQ", href: "/faq" },
];

/// Contact channel behind a [`ContactLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactChannel {
    /// `wa.me` deep link.
    WhatsApp,
    /// `tel:` link.
    Phone,
    /// `mailto:` link.
    Email,
}

/// A plain outbound contact link. Inquiries go through these; the site
/// has no form submission of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    /// Channel the link opens.
    pub channel: ContactChannel,
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
}

/// Every contact channel the site advertises.
pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        channel: ContactChannel::WhatsApp,
        label: "Chat on WhatsApp",
        href: "https://wa.me/916362395980",
    },
    ContactLink {
        channel: ContactChannel::Phone,
        label: "+91 63623 95980",
        href: "tel:+916362395980",
    },
    ContactLink {
        channel: ContactChannel::Email,
        label: "blissfulbites291@gmail.com",
        href: "mailto:blissfulbites291@gmail.com",
    },
];

/// Look up the link for `channel`.
#[must_use]
pub fn contact_link(channel: ContactChannel) -> Option<&'static ContactLink> {
    CONTACT_LINKS.iter().find(|link| link.channel == channel)
}

/// One question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    /// Panel header.
    pub question: &'static str,
    /// Panel body.
    pub answer: &'static str,
}

/// A titled group of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqSection {
    /// Section heading.
    pub title: &'static str,
    /// Questions in display order.
    pub items: &'static [FaqItem],
}

/// FAQ page content. Panel ids are `"{section}-{item}"` over this order.
pub const FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        title: "Ordering & Delivery",
        items: &[
            FaqItem {
                question: "How do I place an order?",
                answer: "Orders can be placed via call or WhatsApp. Share your requirements, occasion, and preferred pickup date. We'll get back to you with details and confirmation.",
            },
            FaqItem {
                question: "What is the minimum advance notice for orders?",
                answer: "We require at least 48 hours advance notice for all orders to ensure freshness and quality. This allows us to source the best ingredients and prepare everything fresh.",
            },
            FaqItem {
                question: "Do you offer delivery?",
                answer: "Currently, we operate on a pickup-only basis. Exact pickup location in Bangalore will be shared upon order confirmation.",
            },
            FaqItem {
                question: "Can I order for same-day pickup?",
                answer: "Unfortunately, we cannot accommodate same-day orders as we prepare everything fresh to order. The 48-hour advance notice ensures the best quality.",
            },
        ],
    },
    FaqSection {
        title: "Pricing & Payment",
        items: &[
            FaqItem {
                question: "How much do your products cost?",
                answer: "Prices vary by product and quantity. Please contact us with your specific requirements for a detailed quote.",
            },
            FaqItem {
                question: "Do you offer discounts for bulk orders?",
                answer: "Yes! Bulk order pricing is available. Reach out to us with your quantity needs for a customized quote.",
            },
            FaqItem {
                question: "What payment methods do you accept?",
                answer: "We accept UPI, bank transfers, and cash on pickup. Payment details will be shared upon order confirmation.",
            },
        ],
    },
    FaqSection {
        title: "Products & Customization",
        items: &[
            FaqItem {
                question: "Can I customize my order?",
                answer: "We love creating customized items. Share your preferences, dietary needs, or special requests, and we'll do our best to accommodate.",
            },
            FaqItem {
                question: "Do you make eggless options?",
                answer: "Yes, we offer a wide range of eggless items including our special Eggless Blondies collection. Just mention your preference when ordering.",
            },
            FaqItem {
                question: "Are your products suitable for people with dietary restrictions?",
                answer: "We offer whole grain, millet-based, and healthier alternatives. Please inform us of any allergies or dietary needs when ordering so we can assist you better.",
            },
            FaqItem {
                question: "How fresh are the products?",
                answer: "Everything is baked fresh to order. We don't maintain pre-made inventory to ensure maximum freshness and quality.",
            },
        ],
    },
    FaqSection {
        title: "Food Safety & Certification",
        items: &[
            FaqItem {
                question: "Is Blissful Bites licensed?",
                answer: "Yes, we are an FSSAI-approved home bakery, adhering to all food safety and hygiene standards.",
            },
            FaqItem {
                question: "What ingredients do you use?",
                answer: "We use premium quality ingredients and bake in small batches to maintain quality and taste. We're happy to discuss specific ingredients upon request.",
            },
        ],
    },
    FaqSection {
        title: "Cancellations & Changes",
        items: &[
            FaqItem {
                question: "Can I modify my order after placing it?",
                answer: "Changes can be accommodated if requested at least 24 hours before pickup. Contact us as soon as possible if you need to make changes.",
            },
            FaqItem {
                question: "What is your cancellation policy?",
                answer: "Cancellations made 48 hours before pickup are fully refundable. Cancellations within 48 hours may incur charges depending on preparation status.",
            },
        ],
    },
];

/// Item count per FAQ section, for [`bliss_widgets::DisclosureGroup::from_section_sizes`].
#[must_use]
pub fn faq_section_sizes() -> Vec<usize> {
    FAQ_SECTIONS.iter().map(|section| section.items.len()).collect()
}

/// Resolve a panel id to its question.
#[must_use]
pub fn faq_item(id: PanelId) -> Option<&'static FaqItem> {
    FAQ_SECTIONS
        .get(usize::from(id.section))?
        .items
        .get(usize::from(id.item))
}

/// Gallery catalog, in display order.
#[rustfmt::skip]
pub const GALLERY: &[GalleryItem] = &[
    GalleryItem::new(1, Category::Cookies, "Chunky filled cookies", "/Images/chunky filled cookies.JPG"),
    GalleryItem::new(2, Category::Cookies, "Choco chip cookie", "/Images/chocochip cookie.JPG"),
    GalleryItem::new(3, Category::Cookies, "Cookies box", "/Images/cookies.jpg"),
    GalleryItem::new(10, Category::Cakes, "Custom black forest cake", "/Images/custom black forest.jpg"),
    GalleryItem::new(11, Category::Cakes, "Custom cake", "/Images/custom cake.JPG"),
    GalleryItem::new(12, Category::Cakes, "Custom cake 7", "/Images/custom cake 7.jpg"),
    GalleryItem::new(13, Category::Cakes, "Fruit cake", "/Images/fruit cake.JPG"),
    GalleryItem::new(14, Category::Cakes, "Plum cake", "/Images/plum cake.jpg"),
    GalleryItem::new(15, Category::Pastries, "Tiramisu pastry", "/Images/tiramisu pastry.JPG"),
    GalleryItem::new(16, Category::Pastries, "White forest pastry", "/Images/white forest pastry.JPG"),
    GalleryItem::new(17, Category::Pastries, "Blueberry cream cheese pastry", "/Images/blueberry cream cheese pastry.JPG"),
    GalleryItem::new(18, Category::Pastries, "Blueberry pastry", "/Images/blueberry pastry.jpg"),
    GalleryItem::new(19, Category::Pastries, "Custom vanilla pastry", "/Images/custom vanilla pastry.JPEG"),
    GalleryItem::new(20, Category::Pastries, "Ferrero rocher pastry", "/Images/ferrero rocher pastry.JPG"),
    GalleryItem::new(21, Category::Pastries, "Butterscotch pastry", "/Images/butterscotch pastry.JPG"),
    GalleryItem::new(22, Category::Pastries, "Pineapple lychee pastry", "/Images/pineapple lychee pastry.JPG"),
    GalleryItem::new(23, Category::Pastries, "Custom lychee pastry", "/Images/custom lychee pastry.JPG"),
    GalleryItem::new(24, Category::Pastries, "Tiramisu", "/Images/tiramisu.JPG"),
    GalleryItem::new(30, Category::Brownies, "Custom brownies", "/Images/custom brownies.JPG"),
    GalleryItem::new(31, Category::Brownies, "Red velvet brownie", "/Images/red velvet brownie.JPG"),
    GalleryItem::new(32, Category::Brownies, "Hazelnut brownie", "/Images/hazelnut brownie.jpg"),
    GalleryItem::new(33, Category::Brownies, "Redvelvet brownie", "/Images/redvelvet brownie.JPG"),
    GalleryItem::new(40, Category::Cupcakes, "Red velvet cupcakes", "/Images/red velvet cream cheese cupcakes.JPG"),
    GalleryItem::new(41, Category::Cupcakes, "Red velvet cupcake", "/Images/redvelvet cupcake.jpg"),
    GalleryItem::new(42, Category::Cupcakes, "Chocolate & vanilla cupcakes", "/Images/chocolate & vanilla cupcake.JPG"),
    GalleryItem::new(43, Category::Cupcakes, "Cupcake", "/Images/cupcake.JPG"),
    GalleryItem::new(50, Category::Donuts, "Bomboloni", "/Images/bomboloni.JPG"),
    GalleryItem::new(51, Category::Donuts, "Chocolate bombolonis", "/Images/chocolate bombolonis.JPG"),
    GalleryItem::new(60, Category::Macarons, "Creme de citron macaron", "/Images/Creme de citron macaron.heic"),
    GalleryItem::new(70, Category::Specialty, "Madeleines", "/Images/madeleines.jpg"),
    GalleryItem::new(71, Category::Specialty, "Peanut financiers", "/Images/peanut financiers.jpg"),
    GalleryItem::new(72, Category::Specialty, "Pista financiers", "/Images/pista financiers.jpg"),
    GalleryItem::new(80, Category::Cakes, "Chocolate cheesecake", "/Images/chocolate cheesecake.JPG"),
    GalleryItem::new(81, Category::Cakes, "Oreo cheesecake", "/Images/oreo cheesecake.HEIC"),
    GalleryItem::new(90, Category::Cakes, "Vanilla noir de madagascar", "/Images/vanilla noir de madagascar.heic"),
];
