use colored::*;

use crate::confirm::FixSummary;

pub fn front_page_ui() {
    // colors definition
    let shackle_color = Color::BrightBlue;
    let body_color = Color::BrightGreen;
    let label_color = Color::BrightYellow;
    let keyhole_color = Color::White;
    let menu_color = Color::BrightYellow;

    // Left padding to roughly center the banner
    let pad = "                   ";

    // Padlock shackle
    println!("{}{}", pad, "      ________      ".color(shackle_color));
    println!("{}{}", pad, "     /  ____  \\     ".color(shackle_color));
    println!("{}{}", pad, "    |  |    |  |    ".color(shackle_color));
    println!("{}{}", pad, "    |  |    |  |    ".color(shackle_color));

    // Padlock body
    println!("{}{}", pad, " ___|__|____|__|___ ".color(body_color));
    println!(
        "{}{}{}{}",
        pad,
        "|".color(body_color),
        "   AUTH OPS KIT   ".color(label_color).bold(),
        "|".color(body_color)
    );
    println!(
        "{}{}{}{}",
        pad,
        "|".color(body_color),
        "        __        ".color(keyhole_color),
        "|".color(body_color)
    );
    println!(
        "{}{}{}{}",
        pad,
        "|".color(body_color),
        "       (__)       ".color(keyhole_color),
        "|".color(body_color)
    );
    println!(
        "{}{}{}{}",
        pad,
        "|".color(body_color),
        "        ||        ".color(keyhole_color),
        "|".color(body_color)
    );
    println!("{}{}", pad, "|__________________|".color(body_color));

    // Menu section
    println!();
    println!(
        "{}{}",
        "  ",
        "[1] Fix Email Confirmations   [2] Reset User Password   [3] Test Login"
            .color(menu_color)
            .bold()
    );
    println!(
        "{}{}",
        "  ",
        "[4] About Toolkit             [5] Exit".color(menu_color).bold()
    );
    println!();
    print!("{}", "Select an option [1-5]: ".bold().color(Color::Cyan));
}

fn tool_header(title: &str, bar_color: Color) {
    let spacing = " ".repeat(11);
    let bar = "=".repeat(46);
    let centering = " ".repeat((46usize.saturating_sub(title.len())) / 2);
    println!("{}{}", spacing, bar.color(bar_color));
    println!("{}{}{}", spacing, centering, title.color(Color::BrightYellow).bold());
    println!("{}{}", spacing, bar.color(bar_color));
}

pub fn fix_users_ui() {
    tool_header("EMAIL CONFIRMATION FIXER", Color::BrightGreen);
}

pub fn reset_password_ui() {
    tool_header("PASSWORD RESET TOOL", Color::Magenta);
}

pub fn login_test_ui() {
    tool_header("LOGIN SMOKE TEST", Color::BrightBlue);
}

pub fn fix_summary_ui(summary: &FixSummary) {
    let bar_color = Color::BrightBlue;
    let value_color = Color::BrightGreen;
    let bar = "=".repeat(50);

    println!("\n{}", bar.color(bar_color));
    println!("{}", "Summary:".bold());
    println!(
        "  Fixed: {} users",
        summary.fixed.to_string().color(value_color)
    );
    println!(
        "  Already confirmed: {} users",
        summary.already_confirmed.to_string().color(value_color)
    );
    if summary.errors > 0 {
        println!("  Errors: {}", summary.errors.to_string().color(Color::Red));
    }
    if summary.skipped > 0 {
        println!(
            "  Skipped: {}",
            summary.skipped.to_string().color(Color::Yellow)
        );
    }
    println!("{}", bar.color(bar_color));
}

pub fn about_ui() {
    let border_color = Color::BrightBlue;
    let title_color = Color::BrightYellow;
    let label_color = Color::BrightCyan;
    let text_color = Color::White;

    let bar = "=".repeat(56);
    let pad = " ".repeat(7);

    println!("\n{}{}", pad, bar.color(border_color));
    println!("{}{}", " ".repeat(24), "AUTH OPS TOOLKIT".bold().color(title_color));
    println!("{}{}", pad, bar.color(border_color));
    println!("{}{} {}", pad, "     Version:".color(label_color).bold(), "0.1.0".color(text_color));
    println!("{}{}", pad, " Description:".color(label_color).bold());
    println!("{}{}", pad, "   Operator console for a hosted auth service.".color(text_color));
    println!("{}{}", pad, "   Bulk-confirms user emails, resets passwords,".color(text_color));
    println!("{}{}", pad, "   and smoke-tests the login flow over the".color(text_color));
    println!("{}{}", pad, "   vendor's admin and token APIs.".color(text_color));
    println!("{}{}", pad, bar.color(border_color));
    println!();
}
