/// Hand-authored showcase content
///
/// Used when discovery finds nothing for a seeded category, and for the
/// UI/UX item which never comes from disk.

use super::data::AssetRecord;

/// Cover used by the brand item when no brand asset exists
pub const BRAND_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1609921212029-bb5a28e60960?w=1080";

/// Cover used by the freelance item when no freelance asset exists
pub const FREELANCE_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=1080";

pub const UI_UX_COVER: &str = "https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=1080";

/// Caption attached to every discovered brand asset
pub const BRAND_DESCRIPTION: &str = "Branding project showcase.";

pub const BRAND_DETAILS: &str = "Part of the Working on Living brand. Designed assets, layouts, \
     and compositions to express identity.";

pub fn brand_samples() -> Vec<AssetRecord> {
    vec![
        AssetRecord::sample(
            "Tech Startup Branding",
            BRAND_PLACEHOLDER,
            "Created a complete brand identity for an innovative tech startup, focusing on \
             modern aesthetics and digital-first design principles.",
            "Developed a comprehensive brand identity system including logo design, color \
             palette, typography guidelines, and brand voice. Deliverables included a 50-page \
             brand guidelines document, social media templates, and presentation deck designs.",
        ),
        AssetRecord::sample(
            "Creative Agency Logo",
            "https://images.unsplash.com/photo-1634729020084-106e70838c97?w=1080",
            "Bold and creative logo design for a creative agency that pushes boundaries and \
             thinks outside the box.",
            "Designed a distinctive logo and visual identity system with a bold wordmark, \
             custom letterforms, multiple logo variations, a vibrant color system, and \
             geometric patterns used across branded materials.",
        ),
        AssetRecord::sample(
            "Corporate Brand Guide",
            "https://images.unsplash.com/photo-1548094990-c16ca90f1f0d?w=1080",
            "Comprehensive brand guidelines developed for a Fortune 500 company to ensure \
             consistency across all touchpoints.",
            "Established standards for logo usage, color applications, typography, photography \
             style, and brand voice, with specifications for digital and print applications \
             and guidelines for co-branding partnerships.",
        ),
        AssetRecord::sample(
            "E-commerce Brand",
            "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?w=1080",
            "Fresh and vibrant branding for an online retail brand targeting millennial and \
             Gen-Z consumers.",
            "Designed a youthful brand identity for an e-commerce fashion retailer: logo, \
             packaging, website visual identity, social media assets, and brand photography \
             guidelines.",
        ),
    ]
}

pub fn ui_ux_samples() -> Vec<AssetRecord> {
    vec![
        AssetRecord::sample(
            "Dashboard Interface",
            UI_UX_COVER,
            "Clean and intuitive dashboard design for a SaaS analytics platform serving \
             enterprise clients.",
            "Data visualization components, navigation systems, and customizable widgets with \
             dark and light modes, real-time updates, and responsive layouts for desktop and \
             tablet.",
        ),
        AssetRecord::sample(
            "Mobile App UI",
            "https://images.unsplash.com/photo-1618761714954-0b8cd0026356?w=1080",
            "Modern mobile application interface design for a social networking platform with \
             over 50 unique screens.",
            "Custom components for posts, stories, messaging, and profile management with \
             gesture-based interactions and platform-specific adaptations for iOS and Android.",
        ),
        AssetRecord::sample(
            "Design System Components",
            "https://images.unsplash.com/photo-1622117515670-fcb02499491f?w=1080",
            "Comprehensive design system with reusable components, patterns, and documentation \
             for scalable product development.",
            "Atomic components, complex patterns, and usage guidelines documented with \
             accessibility standards, responsive behaviors, and code snippets for developers.",
        ),
        AssetRecord::sample(
            "Web Application Flow",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1080",
            "Complete user flow and experience design for a project management web platform \
             used by creative teams.",
            "Wireframes, user flow diagrams, interactive prototypes, and high-fidelity designs \
             for over 80 screens covering task creation, collaboration, and file sharing.",
        ),
    ]
}
