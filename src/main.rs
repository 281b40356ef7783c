use anyhow::Result;
use zeroize::Zeroize;

use authops::client::AuthClient;
use authops::config::ServiceConfig;
use authops::function::{prompt_field, prompt_hidden, prompt_input, prompt_new_password, wait_for_enter};
use authops::{confirm, login, reset, ui};

fn main() -> Result<()> {
    // Resolve credentials once; every tool shares the same client.
    let config = ServiceConfig::from_env()?;
    let client = AuthClient::new(config)?;

    ui::front_page_ui();

    // Main program loop
    loop {
        match prompt_input() {
            Some(choice) => match choice.trim() {
                // === [1] FIX EMAIL CONFIRMATIONS ===
                "1" => {
                    ui::fix_users_ui();
                    if let Err(e) = confirm::fix_unconfirmed_emails(&client) {
                        eprintln!("[ERROR] {e:#}");
                    }
                    wait_for_enter();
                    ui::front_page_ui();
                }

                // === [2] RESET USER PASSWORD ===
                "2" => {
                    ui::reset_password_ui();
                    run_password_reset(&client);
                    wait_for_enter();
                    ui::front_page_ui();
                }

                // === [3] TEST LOGIN ===
                "3" => {
                    ui::login_test_ui();
                    run_login_test(&client);
                    wait_for_enter();
                    ui::front_page_ui();
                }

                // === [4] ABOUT ===
                "4" => {
                    ui::about_ui();
                    wait_for_enter();
                    ui::front_page_ui();
                }

                // === [5] EXIT ===
                "5" => {
                    println!("Goodbye!");
                    break;
                }

                _ => println!("Invalid choice. Please enter 1-5.\n"),
            },
            None => {
                println!("End of input detected. Exiting...");
                break;
            }
        }
    }

    Ok(())
}

fn run_password_reset(client: &AuthClient) {
    let Some(email) = prompt_field("Email") else {
        println!("End of input detected.");
        return;
    };

    match prompt_new_password() {
        Ok(Some(mut new_password)) => {
            if let Err(e) = reset::reset_password(client, &email, &new_password) {
                eprintln!("[ERROR] {e:#}");
            }
            new_password.zeroize();
        }
        Ok(None) => {} // mismatch or empty entry, already reported
        Err(e) => eprintln!("[ERROR] {e:#}"),
    }
}

fn run_login_test(client: &AuthClient) {
    let Some(email) = prompt_field("Email") else {
        println!("End of input detected.");
        return;
    };

    match prompt_hidden("Password") {
        Ok(mut password) => {
            match login::test_login(client, &email, &password) {
                Ok(true) => {}
                Ok(false) => println!("Login check finished with a failure."),
                Err(e) => eprintln!("[ERROR] {e:#}"),
            }
            password.zeroize();
        }
        Err(e) => eprintln!("[ERROR] {e:#}"),
    }
}
