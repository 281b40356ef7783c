use anyhow::{Context, Result};
use rpassword::read_password;
use std::io::{self, Write};
use zeroize::Zeroize;

/// ==============================================
/// Helper: Read one menu choice from stdin
/// ==============================================
pub fn prompt_input() -> Option<String> {
    if io::stdout().flush().is_err() {
        eprintln!("Error flushing stdout.");
        return None;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None, // EOF
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            eprintln!("Error reading input: {e}");
            None
        }
    }
}

/// ==============================================
/// Helper: Prompt for a labeled field
/// ==============================================
pub fn prompt_field(label: &str) -> Option<String> {
    print!("{label}: ");
    if io::stdout().flush().is_err() {
        eprintln!("Error flushing stdout.");
        return None;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            eprintln!("Error reading input: {e}");
            None
        }
    }
}

/// ==============================================
/// Helper: Hidden single prompt (login test)
/// ==============================================
pub fn prompt_hidden(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout()
        .flush()
        .context("Failed to flush stdout while asking for a password")?;
    read_password().context("Failed to read password input")
}

/// ==============================================
/// Helper: Hidden prompt with confirm-retype
/// ==============================================
/// Both buffers are wiped when the entries do not match; the caller owns
/// wiping the returned value once it is done with it.
pub fn prompt_new_password() -> Result<Option<String>> {
    let password = prompt_hidden("New password")?;
    if password.is_empty() {
        println!("Password cannot be empty.");
        return Ok(None);
    }

    let mut confirm = prompt_hidden("Confirm password")?;
    if confirm != password {
        println!("Passwords do not match.");
        let mut p = password;
        p.zeroize();
        confirm.zeroize();
        return Ok(None);
    }
    confirm.zeroize();

    Ok(Some(password))
}

/// ==============================================
/// Helper: Pause until user presses ENTER
/// ==============================================
pub fn wait_for_enter() {
    print!("Press ENTER to continue...");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    let _ = io::stdin().read_line(&mut buf);
}
