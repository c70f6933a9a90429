use once_cell::sync::Lazy;

// Site-wide color scheme. Swap the primary hue here to retheme every
// component; any Tailwind hue name works (sky, blue, emerald, ...).
pub const PRIMARY_HUE: &str = "emerald";
pub const ACCENT: &str = "amber-500";

fn primary(step: u16) -> String {
    format!("{}-{}", PRIMARY_HUE, step)
}

#[derive(Clone)]
pub struct ComponentStyles {
    pub button_primary: String,
    pub button_secondary: String,
    pub button_accent: String,
    pub section_light: String,
    pub section_dark: String,
    pub section_gradient: String,
    pub text_heading: String,
    pub text_body: String,
    pub form_input: String,
    pub form_label: String,
    pub card: String,
    pub card_highlight: String,
}

pub static COMPONENT_STYLES: Lazy<ComponentStyles> = Lazy::new(|| ComponentStyles {
    button_primary: format!(
        "bg-{} hover:bg-{} text-white shadow-md hover:shadow-lg transition-all duration-300",
        primary(600),
        primary(700)
    ),
    button_secondary: format!(
        "bg-white border-2 border-{} text-{} hover:bg-{} shadow-sm hover:shadow-md transition-all duration-300",
        primary(300),
        primary(600),
        primary(50)
    ),
    button_accent: format!(
        "bg-{} hover:bg-amber-600 text-white shadow-md hover:shadow-lg transition-all duration-300",
        ACCENT
    ),
    section_light: format!("bg-{}", primary(50)),
    section_dark: format!("bg-{}", primary(900)),
    section_gradient: format!(
        "bg-gradient-to-br from-{} to-{}",
        primary(50),
        primary(100)
    ),
    text_heading: format!("text-{}", primary(900)),
    text_body: format!("text-{}", primary(700)),
    form_input: format!(
        "border-{} focus:ring-{} focus:border-{} transition-all duration-300",
        primary(300),
        primary(200),
        primary(400)
    ),
    form_label: format!("text-{} font-medium", primary(700)),
    card: format!(
        "bg-white border border-{} rounded-lg shadow-md hover:shadow-lg transition-all duration-300",
        primary(200)
    ),
    card_highlight: format!(
        "bg-white border-2 border-{} rounded-lg shadow-md hover:shadow-lg transition-all duration-300",
        primary(300)
    ),
});

pub fn primary_button(additional: &str) -> String {
    compose(
        &COMPONENT_STYLES.button_primary,
        "px-6 py-3 rounded-lg font-semibold",
        additional,
    )
}

pub fn secondary_button(additional: &str) -> String {
    compose(
        &COMPONENT_STYLES.button_secondary,
        "px-6 py-3 rounded-lg font-semibold",
        additional,
    )
}

pub fn accent_button(additional: &str) -> String {
    compose(
        &COMPONENT_STYLES.button_accent,
        "px-6 py-3 rounded-lg font-semibold",
        additional,
    )
}

pub fn heading(additional: &str) -> String {
    compose(&COMPONENT_STYLES.text_heading, "font-bold", additional)
}

pub fn card(additional: &str) -> String {
    compose(&COMPONENT_STYLES.card, "p-6", additional)
}

fn compose(base: &str, fixed: &str, additional: &str) -> String {
    let mut class = format!("{} {}", base, fixed);
    if !additional.is_empty() {
        class.push(' ');
        class.push_str(additional);
    }
    class
}
