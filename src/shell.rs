//! Interactive Shell
//!
//! The view dispatcher of the storefront: a command grammar for one session,
//! and the application root that owns the API client and the cart. Commands
//! run one at a time; every fetch is awaited before its view renders, so
//! there is exactly one logical writer of cart state and a superseded fetch
//! can never overwrite a newer view.

use tracing::debug;

use crate::api::StoreApi;
use crate::cart::Cart;
use crate::catalog::{Criteria, SortKey};
use crate::router::{Route, UnknownRoute};
use crate::views::{self, CartView, CatalogView, DetailView, HomeView, OrderConfirmation};

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Navigate to a route and render its view
    Open(Route),
    /// Open the catalog with full criteria (price and sort filters have no
    /// route representation; they are sidebar state)
    OpenCatalog(Criteria),
    /// Shortcut for the navigation search box: opens the catalog pre-filtered
    Search(String),
    /// Fetch a product and add `quantity` units to the cart
    Add { id: u32, quantity: u32 },
    /// Same as `Add`, then navigate straight to the cart
    Buy { id: u32, quantity: u32 },
    /// Set a line item's quantity; 0 removes the line
    SetQuantity { id: u32, quantity: u32 },
    /// Remove a line item
    Remove(u32),
    /// Run the mock checkout
    Checkout,
    Help,
    Quit,
}

/// A line that could not be parsed into a [`Command`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for the list")]
    Unknown(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Route(#[from] UnknownRoute),
}

impl Command {
    /// Parses one non-empty input line.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (&head, rest) = words
            .split_first()
            .ok_or(CommandError::Usage("type `help` for the list of commands"))?;

        match head {
            "home" => Ok(Command::Open(Route::Home)),
            "cart" => Ok(Command::Open(Route::Cart)),
            "products" => Ok(Command::OpenCatalog(parse_filter_flags(rest)?)),
            "show" => {
                let id = parse_id(rest.first())?;
                Ok(Command::Open(Route::ProductDetail(id)))
            }
            "open" => {
                let target = rest
                    .first()
                    .ok_or(CommandError::Usage("usage: open <route>"))?;
                Ok(Command::Open(Route::parse(target)?))
            }
            "search" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("usage: search <term>"));
                }
                Ok(Command::Search(rest.join(" ")))
            }
            "add" => {
                let (id, quantity) = parse_id_and_quantity(rest)?;
                Ok(Command::Add { id, quantity })
            }
            "buy" => {
                let (id, quantity) = parse_id_and_quantity(rest)?;
                Ok(Command::Buy { id, quantity })
            }
            "qty" => {
                let id = parse_id(rest.first())?;
                let quantity = rest
                    .get(1)
                    .and_then(|q| q.parse::<u32>().ok())
                    .ok_or(CommandError::Usage("usage: qty <id> <quantity>"))?;
                Ok(Command::SetQuantity { id, quantity })
            }
            "remove" => Ok(Command::Remove(parse_id(rest.first())?)),
            "checkout" => Ok(Command::Checkout),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn parse_id(word: Option<&&str>) -> Result<u32, CommandError> {
    word.and_then(|w| w.parse::<u32>().ok())
        .ok_or(CommandError::Usage("expected a numeric product id"))
}

fn parse_id_and_quantity(rest: &[&str]) -> Result<(u32, u32), CommandError> {
    let id = parse_id(rest.first())?;
    let quantity = match rest.get(1) {
        Some(word) => word
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CommandError::Usage("quantity must be a positive integer"))?,
        None => 1,
    };
    Ok((id, quantity))
}

/// Parses `--search`, `--category`, `--min`, `--max` and `--sort` flags.
/// Values run until the next flag, so multi-word categories work unquoted.
fn parse_filter_flags(args: &[&str]) -> Result<Criteria, CommandError> {
    let mut criteria = Criteria::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i];
        i += 1;
        let mut value = Vec::new();
        while i < args.len() && !args[i].starts_with("--") {
            value.push(args[i]);
            i += 1;
        }
        let value = value.join(" ");
        match flag {
            "--search" => criteria.search = Some(value),
            "--category" => criteria.category = Some(value),
            "--min" => criteria.price_min = Some(parse_price(&value)?),
            "--max" => criteria.price_max = Some(parse_price(&value)?),
            "--sort" => {
                criteria.sort = SortKey::parse(&value).ok_or(CommandError::Usage(
                    "sort is one of: default, price-low, price-high, rating, name",
                ))?;
            }
            _ => {
                return Err(CommandError::Usage(
                    "products flags: --search, --category, --min, --max, --sort",
                ))
            }
        }
    }
    Ok(criteria)
}

fn parse_price(value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|price| *price >= 0.0)
        .ok_or(CommandError::Usage("price bounds must be non-negative numbers"))
}

const HELP: &str = "\
Commands:
  home                       featured products and category tiles
  products [flags]           browse the catalog
                             flags: --search <term> --category <name>
                                    --min <price> --max <price>
                                    --sort default|price-low|price-high|rating|name
  search <term>              search the catalog by title or description
  show <id>                  product detail page
  add <id> [qty]             add a product to the cart
  buy <id> [qty]             add a product and jump to the cart
  cart                       cart contents and order summary
  qty <id> <n>               change a line item's quantity (0 removes it)
  remove <id>                remove a line item
  checkout                   place the mock order
  open <route>               navigate by route, e.g. /products?category=jewelery
  quit                       end the session
";

/// Application root: owns the API client and the session cart, and executes
/// parsed commands against them. The cart lives exactly as long as the
/// session; nothing is persisted.
pub struct App {
    api: StoreApi,
    cart: Cart,
}

impl App {
    pub fn new(api: StoreApi) -> Self {
        Self {
            api,
            cart: Cart::new(),
        }
    }

    /// Read access to the session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The badge count shown in the shell prompt, mirroring the navigation
    /// cart badge.
    pub fn badge(&self) -> u32 {
        self.cart.item_count()
    }

    /// Executes one command and returns the text to print.
    pub async fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Open(route) => self.open(route).await,
            Command::OpenCatalog(criteria) => self.open_catalog(criteria).await,
            Command::Search(term) => {
                self.open(Route::Products {
                    search: Some(term),
                    category: None,
                })
                .await
            }
            Command::Add { id, quantity } => self.add(id, quantity, false).await,
            Command::Buy { id, quantity } => self.add(id, quantity, true).await,
            Command::SetQuantity { id, quantity } => {
                self.cart.set_quantity(id, quantity);
                CartView::new(&self.cart).render()
            }
            Command::Remove(id) => {
                self.cart.remove(id);
                CartView::new(&self.cart).render()
            }
            Command::Checkout => self.checkout(),
            Command::Help => HELP.to_string(),
            Command::Quit => "Bye!\n".to_string(),
        }
    }

    /// Navigates to a route and renders its view. Fetch failures render a
    /// localized retry message instead of ending the session.
    pub async fn open(&mut self, route: Route) -> String {
        debug!(%route, "navigate");
        match route {
            Route::Home => match HomeView::load(&self.api).await {
                Ok(view) => view.render(),
                Err(err) => views::render_fetch_error("featured products", &err),
            },
            Route::Products { search, category } => {
                self.open_catalog(Criteria {
                    search,
                    category,
                    ..Criteria::default()
                })
                .await
            }
            Route::ProductDetail(id) => match DetailView::load(&self.api, id).await {
                Ok(view) => view.render(),
                Err(err) => views::render_fetch_error("product", &err),
            },
            Route::Cart => CartView::new(&self.cart).render(),
            Route::Checkout => self.checkout(),
            Route::OrderSuccess => {
                "No recent order. Fill the cart and run `checkout` first.\n".to_string()
            }
        }
    }

    async fn open_catalog(&mut self, criteria: Criteria) -> String {
        match CatalogView::load(&self.api, criteria).await {
            Ok(view) => view.render(),
            Err(err) => views::render_fetch_error("products", &err),
        }
    }

    async fn add(&mut self, id: u32, quantity: u32, buy_now: bool) -> String {
        let mut view = match DetailView::load(&self.api, id).await {
            Ok(view) => view,
            Err(err) => return views::render_fetch_error("product", &err),
        };

        // The selector starts at 1; dial it up to the requested quantity.
        for _ in 1..quantity {
            view.increment();
        }
        let title = view.product().title.clone();

        if buy_now {
            let next = view.buy_now(&mut self.cart);
            format!(
                "Added {quantity}x {title} to the cart.\n\n{}",
                self.open(next).await
            )
        } else {
            view.add_to_cart(&mut self.cart);
            format!(
                "Added {quantity}x {title} to the cart. ({} item{} total)\n",
                self.cart.item_count(),
                if self.cart.item_count() == 1 { "" } else { "s" }
            )
        }
    }

    fn checkout(&mut self) -> String {
        if self.cart.is_empty() {
            return "Your cart is empty\nAdd some products to get started\n".to_string();
        }
        OrderConfirmation::place_order(&mut self.cart).render()
    }
}
