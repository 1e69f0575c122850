//! Account registration and login.
//!
//! Login persists the bearer credential and the user's profile locally;
//! every later command picks the credential up automatically. Logout just
//! deletes both - the cart and wishlist stay on disk.

use clap::Subcommand;

use harbor_core::Email;

use harbor_client::Result;
use harbor_client::api::RegisterRequest;
use harbor_client::storage::{Storage, keys};

use super::Session;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account
    Register {
        /// First name
        #[arg(short = 'f', long)]
        first_name: String,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: Email,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Also register as a seller
        #[arg(long)]
        seller: bool,
    },
    /// Log in and store the credential
    Login {
        /// Email address
        #[arg(short, long)]
        email: Email,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored credential and profile
    Logout,
    /// Show the logged-in user
    Whoami,
}

pub async fn run(session: &Session, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Register {
            first_name,
            last_name,
            email,
            password,
            seller,
        } => {
            let password = password_or_prompt(password)?;
            let roles = seller.then(|| vec!["customer".to_owned(), "seller".to_owned()]);

            let registered = session
                .api()
                .register(&RegisterRequest {
                    first_name,
                    last_name,
                    email,
                    password,
                    roles,
                })
                .await?;

            println!("{}", registered.message);
        }
        AuthAction::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let auth = session.api().login(&email, &password).await?;

            session.storage().set(keys::AUTH_TOKEN, &auth.token)?;
            let profile = serde_json::to_string(&auth.profile())
                .map_err(harbor_client::StorageError::from)?;
            session.storage().set(keys::USER, &profile)?;

            println!("Logged in as {} {} <{}>", auth.first_name, auth.last_name, auth.email);
        }
        AuthAction::Logout => {
            session.storage().remove(keys::AUTH_TOKEN)?;
            session.storage().remove(keys::USER)?;
            println!("Logged out.");
        }
        AuthAction::Whoami => match session.profile() {
            Some(profile) => {
                println!(
                    "{} {} <{}> (roles: {})",
                    profile.first_name,
                    profile.last_name,
                    profile.email,
                    profile.roles.join(", ")
                );
            }
            None => println!("Not logged in."),
        },
    }
    Ok(())
}

/// Use the flag value, or read the password from stdin without echo being a
/// concern (piped input is the common automation path).
fn password_or_prompt(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    println!("Password: ");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(harbor_client::StorageError::from)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).to_owned();
    if trimmed.is_empty() {
        return Err(harbor_client::ClientError::BadRequest(
            "Password cannot be empty.".to_string(),
        ));
    }
    Ok(trimmed)
}
