//! Terminal materialization of the resolved dashboard.
//!
//! The resolver hands over ordered sequences of render items and buttons;
//! nothing here feeds back into resolution.

use console::{Color, Style};
use identity::UserProfile;
use resolver::contrast::decode_hex;
use shared::{ButtonEntry, RenderItem};

/// Paint the dashboard to stdout with console styling
pub fn print_dashboard(profile: &UserProfile, items: &[RenderItem], buttons: &[ButtonEntry]) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{}", bold.apply_to(&profile.username));
    println!("{}", dim.apply_to(format!("ID: {}", profile.id)));
    println!();

    for item in items {
        match item {
            RenderItem::Category { name } => {
                println!("{}", Style::new().bold().underlined().apply_to(name));
            }
            RenderItem::RoleBadge {
                name,
                background_color,
                text_color,
            } => {
                println!("  {}", badge_style(background_color, text_color).apply_to(format!(" {name} ")));
            }
        }
    }

    if !buttons.is_empty() {
        println!();
        println!("{}", Style::new().bold().underlined().apply_to("Dashboard"));
        for button in buttons {
            println!(
                "  {} {}",
                Style::new().cyan().bold().apply_to(&button.text),
                dim.apply_to(format!("({})", button.link))
            );
        }
    }
}

/// Emit the resolved dashboard as JSON for other rendering collaborators
pub fn print_json(
    profile: &UserProfile,
    items: &[RenderItem],
    buttons: &[ButtonEntry],
) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "user": profile,
        "roles": items,
        "buttons": buttons,
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn badge_style(background: &str, text: &str) -> Style {
    let mut style = Style::new();

    if let Ok((r, g, b)) = decode_hex(background) {
        style = style.bg(Color::Color256(ansi256(r, g, b)));
    }
    // The resolver only ever emits black or white text
    style = match text {
        "#000000" => style.fg(Color::Black),
        _ => style.fg(Color::White),
    };

    style
}

/// Approximate an RGB color on the 6x6x6 ANSI color cube (cells 16..=231)
fn ansi256(r: u8, g: u8, b: u8) -> u8 {
    let scale = |channel: u8| (u16::from(channel) * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}
