/// Translated strings for the site chrome (metadata, header, switcher)
#[derive(Debug, Clone)]
pub struct SiteStrings {
    // ==================== Site Metadata ====================
    /// Site name, shared across languages
    pub site_name: &'static str,

    /// Short tagline shown next to the logo and in page titles
    pub tagline: &'static str,

    /// Default meta description
    pub description: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_case_studies: &'static str,
    pub nav_contact: &'static str,

    // ==================== Language Switcher ====================
    /// Visible label of the switcher button
    pub language_label: &'static str,

    /// Accessible name of the switcher menu
    pub select_language: &'static str,
}

// ==================== English Strings ====================

/// English site strings (default language)
pub const ENGLISH_STRINGS: SiteStrings = SiteStrings {
    site_name: "Jerna Digital",
    tagline: "Engineering Excellence, Delivered",
    description: "Software Development and Engineering Management Consulting. \
Helping startups and scale-ups build exceptional engineering teams and products.",

    nav_home: "Home",
    nav_about: "About",
    nav_services: "Services",
    nav_case_studies: "Case Studies",
    nav_contact: "Contact",

    language_label: "Language",
    select_language: "Select language",
};

// ==================== Spanish Strings ====================

/// Spanish site strings
pub const SPANISH_STRINGS: SiteStrings = SiteStrings {
    site_name: "Jerna Digital",
    tagline: "Excelencia en Ingeniería, Entregada",
    description: "Consultoría de Desarrollo de Software y Gestión de Ingeniería. \
Ayudando a startups y scale-ups a construir equipos de ingeniería y productos excepcionales.",

    nav_home: "Inicio",
    nav_about: "Sobre mí",
    nav_services: "Servicios",
    nav_case_studies: "Casos de Éxito",
    nav_contact: "Contacto",

    language_label: "Idioma",
    select_language: "Seleccionar idioma",
};
