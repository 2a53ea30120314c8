use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

/// Formats a dollar amount compactly for axis ticks.
/// - `$1.25B`, `$340.0M`, `$12.5K`, `$950`
pub fn format_currency_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1e9 {
        format!("{}${:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}${:.1}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}${:.1}K", sign, abs / 1e3)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

/// Formats a dollar amount in full, with thousands separators.
/// Used in the hover tooltip where precision matters.
pub fn format_currency_full(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let mut whole = abs.trunc() as u64;
    let mut cents = ((abs - whole as f64) * 100.0).round() as u64;
    if cents == 100 {
        // Fractional part rounded up to a full dollar
        whole += 1;
        cents = 0;
    }

    // Group the integer part into thousands
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents > 0 {
        format!("{}${}.{:02}", sign, grouped, cents)
    } else {
        format!("{}${}", sign, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_currency_picks_the_right_unit() {
        assert_eq!(format_currency_compact(1_250_000_000.0), "$1.25B");
        assert_eq!(format_currency_compact(340_000_000.0), "$340.0M");
        assert_eq!(format_currency_compact(12_500.0), "$12.5K");
        assert_eq!(format_currency_compact(950.0), "$950");
        assert_eq!(format_currency_compact(0.0), "$0");
    }

    #[test]
    fn compact_currency_keeps_the_sign() {
        assert_eq!(format_currency_compact(-2_000_000.0), "-$2.0M");
    }

    #[test]
    fn full_currency_groups_thousands() {
        assert_eq!(format_currency_full(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency_full(1_234_567.89), "$1,234,567.89");
        assert_eq!(format_currency_full(999.5), "$999.50");
        assert_eq!(format_currency_full(-1_000.0), "-$1,000");
        assert_eq!(format_currency_full(999.999), "$1,000");
    }
}
