//! Named component presets.

pub const RECIPE_NAMES: [&str; 4] = ["auth", "dashboard", "form", "landing"];

const RECIPES: [(&str, &[&str]); 4] = [
    ("auth", &["button", "card", "input", "label", "form", "checkbox", "sonner"]),
    (
        "dashboard",
        &["card", "table", "badge", "avatar", "dropdown-menu", "button", "select"],
    ),
    (
        "form",
        &["form", "input", "label", "textarea", "select", "checkbox", "radio-group", "switch", "slider", "button"],
    ),
    ("landing", &["button", "card", "badge", "avatar", "dialog", "alert"]),
];

/// Components of a recipe, in install order. Names are case-insensitive.
pub fn get(name: &str) -> Option<&'static [&'static str]> {
    let name = name.trim().to_lowercase();
    RECIPES
        .iter()
        .find(|(recipe, _)| *recipe == name)
        .map(|(_, components)| *components)
}
