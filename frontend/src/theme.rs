// Brand palette and the gradient tags slides use to pick their backgrounds.

pub const PRIMARY: &str = "#ff6b9d";
pub const ACCENT: &str = "#a855f7";
pub const SECONDARY: &str = "#ffc857";

pub const BACKGROUND: &str = "#fff8fb";
pub const FOREGROUND: &str = "#1f1235";
pub const MUTED: &str = "#fce7f0";
pub const MUTED_FOREGROUND: &str = "#6b5b7b";
pub const BORDER: &str = "#f3d4e2";

pub fn color(name: &str) -> Option<&'static str> {
    match name {
        "primary" => Some(PRIMARY),
        "accent" => Some(ACCENT),
        "secondary" => Some(SECONDARY),
        _ => None,
    }
}

/// Resolves a tag such as `"from-secondary via-primary to-accent"` into a
/// diagonal CSS gradient. Stops keep from/via/to order whatever order they are
/// written in; unknown stops are skipped.
pub fn gradient(tag: &str) -> String {
    let mut from = None;
    let mut via = Vec::new();
    let mut to = None;

    for token in tag.split_whitespace() {
        if let Some(name) = token.strip_prefix("from-") {
            from = color(name).or(from);
        } else if let Some(name) = token.strip_prefix("via-") {
            via.extend(color(name));
        } else if let Some(name) = token.strip_prefix("to-") {
            to = color(name).or(to);
        }
    }

    let mut stops: Vec<&str> = from.into_iter().chain(via).chain(to).collect();
    match stops.len() {
        0 => stops = vec![PRIMARY, PRIMARY],
        1 => stops.push(stops[0]),
        _ => {}
    }

    format!("linear-gradient(to bottom right, {})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_tag() {
        assert_eq!(
            gradient("from-primary to-accent"),
            format!("linear-gradient(to bottom right, {}, {})", PRIMARY, ACCENT)
        );
    }

    #[test]
    fn via_stops_sit_between_from_and_to() {
        assert_eq!(
            gradient("to-accent via-primary from-secondary"),
            format!(
                "linear-gradient(to bottom right, {}, {}, {})",
                SECONDARY, PRIMARY, ACCENT
            )
        );
    }

    #[test]
    fn unknown_stops_are_skipped() {
        assert_eq!(
            gradient("from-teal-500 to-accent"),
            format!("linear-gradient(to bottom right, {}, {})", ACCENT, ACCENT)
        );
    }

    #[test]
    fn empty_tag_falls_back_to_primary() {
        assert_eq!(
            gradient(""),
            format!("linear-gradient(to bottom right, {}, {})", PRIMARY, PRIMARY)
        );
    }
}
