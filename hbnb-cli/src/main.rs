use std::process;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use hbnb_client::filter::{ALL, FilterState};
use hbnb_client::pages::{
    ListingsPage, LoginOutcome, LoginPage, PlacePage, ReviewForm, ReviewOutcome, ReviewPage,
};
use hbnb_client::{ApiConfig, CredentialStore, Page, PageContext};

mod http;
mod logging;
mod settings;
mod terminal;
mod token_store;

use http::ReqwestTransport;
use logging::init_logging;
use settings::Settings;
use terminal::{TerminalBrowser, TerminalSurface};
use token_store::FileCredentialStore;

#[derive(Debug, Parser)]
#[command(name = "hbnb-cli", version, about = "CLI клиент для HBnB API")]
struct Cli {
    /// Адрес API (по умолчанию HBNB_API_URL или http://127.0.0.1:5000).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Вход по email и паролю; токен сохраняется в файл.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Удаление сохранённого токена.
    Logout,
    /// Список объявлений (требует токен).
    Places {
        /// Точное совпадение страны.
        #[arg(long)]
        country: Option<String>,
        /// Максимальная цена за ночь.
        #[arg(long)]
        max_price: Option<f64>,
    },
    /// Объявление и отзывы к нему.
    Place {
        #[arg(long)]
        id: String,
    },
    /// Новый отзыв (требует токен).
    Review {
        #[arg(long)]
        id: String,
        #[arg(long)]
        rating: String,
        #[arg(long)]
        comment: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?.with_server(cli.server);

    init_logging(&settings.log_level)?;

    let session = Rc::new(FileCredentialStore::new(settings.token_file.clone()));
    let browser = Rc::new(TerminalBrowser::default());
    let transport = Rc::new(
        ReqwestTransport::new(settings.request_timeout_secs)
            .context("не удалось создать HTTP-клиент")?,
    );
    let ctx = PageContext::new(
        ApiConfig::new(settings.api_url.clone()),
        session.clone(),
        transport,
        browser.clone(),
        Rc::new(TerminalSurface),
    );

    match cli.command {
        Command::Login { email, password } => {
            match LoginPage::new(ctx).submit(&email, &password).await {
                LoginOutcome::SignedIn => println!("Вход выполнен"),
                LoginOutcome::Rejected(_) | LoginOutcome::Failed(_) => {
                    bail!("вход не выполнен")
                }
            }
        }
        Command::Logout => {
            session.clear().context("не удалось удалить токен")?;
            println!("Выход выполнен");
        }
        Command::Places { country, max_price } => {
            let price = max_price.map(|price| price.to_string());
            let filter = FilterState::from_controls(
                country.as_deref().unwrap_or(ALL),
                price.as_deref().unwrap_or(ALL),
            );
            if ListingsPage::new(ctx).open(|| filter.clone()).await.is_none() {
                ensure_not_redirected(&browser)?;
                bail!("не удалось загрузить объявления");
            }
        }
        Command::Place { id } => {
            PlacePage::new(ctx, Some(id)).open().await;
            ensure_not_redirected(&browser)?;
        }
        Command::Review {
            id,
            rating,
            comment,
        } => {
            let page = ReviewPage::new(ctx, Some(id));
            if !page.open() {
                ensure_not_redirected(&browser)?;
            }
            match page.submit(&ReviewForm { rating, comment }).await {
                ReviewOutcome::Posted => println!("Отзыв отправлен"),
                ReviewOutcome::Redirected => ensure_not_redirected(&browser)?,
                ReviewOutcome::Rejected(_) | ReviewOutcome::Failed(_) => {
                    bail!("отзыв не отправлен")
                }
            }
        }
    }

    Ok(())
}

/// Редирект на логин или список в CLI означает «нужна сессия».
fn ensure_not_redirected(browser: &TerminalBrowser) -> Result<()> {
    match browser.last_page() {
        Some(Page::Login) | Some(Page::Index) => Err(anyhow!(
            "требуется авторизация: выполните `hbnb-cli login --email ... --password ...`"
        )),
        _ => Ok(()),
    }
}
