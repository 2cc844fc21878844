use anyhow::Context;
use clap::{Parser, Subcommand};
use langify::{
    client::{AuthClient, ClientApp, FileStore, OAuthProvider, Page, DEFAULT_SERVER_URL},
    config::ServerConfig,
    db,
    models::plan::Plan,
    repositories::user_repository::{SqliteUserRepository, UserRepository},
    services::{auth_service::AuthService, validation::RegisterRequest},
};
use std::{path::PathBuf, sync::Arc};

#[derive(Parser)]
#[command(name = "langify-cli")]
#[command(about = "CLI tool for managing Langify users and driving the client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands (direct database access)
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Client commands run against a running server
    App {
        /// Server base URL
        #[arg(long, env = "LANGIFY_SERVER", default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// File holding the persisted session keys
        #[arg(long, env = "LANGIFY_STATE", default_value = "langify-session.json")]
        state: PathBuf,

        #[command(subcommand)]
        command: AppCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register a new user
    Create {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long)]
        full_name: Option<String>,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },

    /// Report whether anyone has registered
    Status,
}

#[derive(Subcommand)]
enum AppCommands {
    /// Show the page the client opens on
    Start,
    /// Ask the server whether any user is registered
    Status,
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: Option<String>,
    },
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: Option<String>,
    },
    Logout,
    /// Choose a subscription plan and open the dashboard
    Plan { plan: Plan },
    /// Open the dashboard and list feature controls
    Dashboard,
    /// Select a feature by name (first matching control)
    Open { feature: String },
    /// Send a password reset link
    Reset,
    /// Print the third-party sign-in URL
    Oauth {
        #[arg(value_parser = ["google", "apple"])]
        provider: String,
    },
}

fn get_password(prompt: &str) -> anyhow::Result<String> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    match password {
        Some(pw) => Ok(pw),
        None => get_password("Password"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => run_user_command(command).await,
        Commands::App {
            server,
            state,
            command,
        } => run_app_command(&server, state, command).await,
    }
}

async fn run_user_command(command: UserCommands) -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let pool = db::create_pool(&config)
        .await
        .context("Failed to open database")?;
    db::run_migrations(&pool).await?;

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let auth_service = AuthService::new(user_repository.clone());

    match command {
        UserCommands::Create {
            username,
            email,
            password,
            full_name,
        } => {
            let password = password_or_prompt(password)?;
            let request = RegisterRequest {
                username: Some(username),
                email: Some(email.clone()),
                password: Some(password),
                full_name,
            };

            match auth_service.register(request).await {
                Ok(()) => println!("✅ User '{}' registered", email.trim()),
                Err(err) => {
                    eprintln!("❌ Failed to create user: {}", err);
                    std::process::exit(1);
                }
            }
        }

        UserCommands::List { limit, offset } => {
            let users = user_repository.list_users(Some(limit), Some(offset)).await?;
            if users.is_empty() {
                println!("No users found.");
            } else {
                println!(
                    "{:<5} {:<20} {:<32} {:<6} {:<7} {:<20}",
                    "ID", "Username", "Email", "Role", "Active", "Created"
                );
                println!("{}", "-".repeat(95));
                for user in users {
                    println!(
                        "{:<5} {:<20} {:<32} {:<6} {:<7} {:<20}",
                        user.id,
                        user.username,
                        user.email,
                        user.role.as_str(),
                        if user.is_active { "Yes" } else { "No" },
                        user.created_at
                    );
                }
            }
        }

        UserCommands::Status => {
            let registered = auth_service.is_registered().await?;
            println!("registered: {}", registered);
        }
    }

    Ok(())
}

async fn run_app_command(
    server: &str,
    state: PathBuf,
    command: AppCommands,
) -> anyhow::Result<()> {
    let store = FileStore::open(&state)
        .with_context(|| format!("Failed to open session file {}", state.display()))?;
    let mut app = ClientApp::with_defaults(store, AuthClient::new(server));
    app.start();

    match command {
        AppCommands::Start => {}
        AppCommands::Status => {
            let registered = AuthClient::new(server).status().await?;
            println!("registered: {}", registered);
        }
        AppCommands::Register {
            username,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            app.go_register();
            app.register(&username, &email, &password).await;
        }
        AppCommands::Login { email, password } => {
            let password = password_or_prompt(password)?;
            app.go_login();
            app.login(&email, &password).await?;
        }
        AppCommands::Logout => app.logout()?,
        AppCommands::Plan { plan } => app.choose_plan(plan)?,
        AppCommands::Dashboard => app.go_dashboard(),
        AppCommands::Open { feature } => {
            app.go_dashboard();
            match app.layout().find_by_feature(&feature).map(|a| a.id.clone()) {
                Some(control_id) => app.select_feature(&control_id),
                None => {
                    eprintln!("❌ Unknown feature '{}'", feature);
                    std::process::exit(1);
                }
            }
        }
        AppCommands::Reset => {
            app.open_forgot();
            app.send_reset();
        }
        AppCommands::Oauth { provider } => {
            let provider = match provider.as_str() {
                "apple" => OAuthProvider::Apple,
                _ => OAuthProvider::Google,
            };
            println!("{}", app.oauth_url(provider));
        }
    }

    render(&mut app);
    Ok(())
}

fn render(app: &mut ClientApp<FileStore>) {
    for notice in app.take_notices() {
        println!("⚠️  {}", notice);
    }

    println!("page: {}", app.current_page());
    match app.session().user_email() {
        Some(email) => println!("user: {} (plan: {})", email, app.session().plan()),
        None => println!("user: -"),
    }

    if app.current_page() == Page::Dashboard {
        println!("dashboard: {}", app.dashboard().user_email);
        for control in app.layout().iter() {
            println!(
                "  {} {:<22} {}",
                if control.locked { "🔒" } else { "  " },
                control.id,
                if control.active { "(active)" } else { "" }
            );
        }
    }

    if let Some(title) = &app.pane().title {
        println!("\n{}", title);
        if let Some(body) = &app.pane().body {
            println!("{}", body);
        }
    }
}
