//! Global Bites CLI - drive the site's pages from a terminal.
//!
//! Cart state persists between runs in `GLOBAL_BITES_DATA_DIR`, the same way
//! the site keeps it in the browser's local storage.
//!
//! # Usage
//!
//! ```bash
//! # Add a dish from the homepage
//! gb-cli home add butter-chicken "Butter Chicken" 15.99
//!
//! # Review and adjust the cart
//! gb-cli cart show
//! gb-cli cart increase butter-chicken
//! gb-cli cart set butter-chicken 3
//!
//! # Place the order and see the confirmation
//! gb-cli checkout --address "12 Spice Lane"
//!
//! # Browse the food wall
//! gb-cli wall --filter chef
//! gb-cli wall --search curry
//! ```
//!
//! # Commands
//!
//! - `home` - Homepage add-to-cart buttons and navbar state
//! - `cart` - Cart page actions
//! - `checkout` - Place the order, then show the thank-you page
//! - `thank-you` - Show the thank-you page again
//! - `share` - Share buttons on the thank-you page
//! - `wall` - Food wall with filters, search and post details
//! - `contact` - Submit the contact form

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use global_bites_storefront::StorefrontConfig;
use global_bites_storefront::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Session;

#[derive(Parser)]
#[command(name = "gb-cli")]
#[command(author, version, about = "Global Bites from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Homepage actions
    Home {
        #[command(subcommand)]
        action: HomeAction,
    },
    /// Cart page actions
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place the order
    Checkout {
        /// Delivery address
        #[arg(short, long, default_value = "")]
        address: String,
    },
    /// Show the order confirmation
    ThankYou,
    /// Share the order on a social network
    Share {
        /// facebook, twitter or instagram
        platform: String,
    },
    /// Browse the food wall
    Wall {
        /// all, customer, chef or featured
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Search posts by text, author or dish
        #[arg(short, long)]
        search: Option<String>,

        /// Open a single post
        #[arg(short, long)]
        detail: Option<u32>,
    },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum HomeAction {
    /// Click an add-to-cart button
    Add {
        id: String,
        name: String,
        /// Price as written on the button
        price: String,
    },
    /// Report the navbar style at a scroll offset
    Scroll {
        /// Scroll offset in pixels
        offset: f64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and order summary
    Show,
    /// Add an item directly
    Add {
        id: String,
        name: String,
        price: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set an item's quantity; zero or less removes it
    Update {
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Type a value into an item's quantity field
    Set { id: String, value: String },
    /// Press an item's plus button
    Increase { id: String },
    /// Press an item's minus button
    Decrease { id: String },
    /// Remove an item
    Remove { id: String },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "gb_cli=info,global_bites_storefront=info,global_bites_core=info".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        if !e.is_internal() {
            tracing::warn!("{}", e.user_message());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let mut session = Session::open(config);

    match cli.command {
        Commands::Home { action } => match action {
            HomeAction::Add { id, name, price } => {
                commands::home::add_to_cart(&mut session, id, name, price)?;
            }
            HomeAction::Scroll { offset } => commands::home::scroll(offset),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&mut session),
            CartAction::Add {
                id,
                name,
                price,
                quantity,
            } => commands::cart::add(&mut session, &id, &name, &price, quantity)?,
            CartAction::Update { id, quantity } => {
                commands::cart::update(&mut session, &id, quantity);
            }
            CartAction::Set { id, value } => commands::cart::set(&mut session, &id, &value)?,
            CartAction::Increase { id } => commands::cart::increase(&mut session, &id),
            CartAction::Decrease { id } => commands::cart::decrease(&mut session, &id),
            CartAction::Remove { id } => commands::cart::remove(&mut session, &id),
            CartAction::Clear => commands::cart::clear(&mut session),
        },
        Commands::Checkout { address } => commands::order::checkout(&mut session, &address).await?,
        Commands::ThankYou => commands::order::thank_you(&session),
        Commands::Share { platform } => commands::order::share(&session, &platform)?,
        Commands::Wall {
            filter,
            search,
            detail,
        } => commands::wall::browse(&session, &filter, search.as_deref(), detail)?,
        Commands::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => commands::contact::submit(&global_bites_storefront::pages::ContactForm {
            name,
            email,
            phone,
            subject,
            message,
        })?,
    }

    Ok(())
}
