//! Greeter: a toy greeting/time page backed by the Authjar session store.
//!
//! Runs both halves of the subsystem in one process for easy demoing:
//! the session store service on `--auth-port`, and this front-end on
//! `--port`. In a real deployment they are separate processes on
//! separate hosts; nothing in the front-end below knows the difference —
//! it only ever talks to the store through `SessionClient`.
//!
//!   http://localhost:8080/        greeting + time, or redirect to login
//!   http://localhost:8080/login   enter a name
//!   http://localhost:8080/logout  expire the cookie, release the session

use std::sync::Arc;
use std::time::Duration;

use authjar::prelude::*;
use axum::Router;
use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use chrono::Local;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser)]
#[command(about = "Greeting/time demo page with a separate session store")]
struct Args {
    /// Port for the front-end page.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Port for the session store service.
    #[arg(long, default_value_t = 9090)]
    auth_port: u16,

    /// Deadline for each store call, in milliseconds.
    #[arg(long, default_value_t = 500)]
    auth_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // The store half. Loopback: the protocol is unauthenticated, so the
    // store must not be reachable from the outside world.
    let store = AuthServer::builder()
        .bind(&format!("127.0.0.1:{}", args.auth_port))
        .build()
        .await?;
    tokio::spawn(async move {
        if let Err(e) = store.run().await {
            tracing::error!(error = %e, "session store exited");
        }
    });

    // The front-end half.
    let sessions = Arc::new(
        SessionClient::new(format!("http://127.0.0.1:{}", args.auth_port))
            .timeout(Duration::from_millis(args.auth_timeout_ms)),
    );

    let app = Router::new()
        .route("/", get(index))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .with_state(sessions);

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "greeter listening");
    axum::serve(listener, app).await?;
    Ok(())
}

type Sessions = Arc<SessionClient>;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /` — greet the visitor, or send them to the login form.
///
/// The token travels only in the request's cookie. There is no
/// process-wide "current session": two visitors hitting this handler
/// concurrently each resolve their own cookie.
async fn index(State(sessions): State<Sessions>, headers: HeaderMap) -> Response {
    let token = extract_token(&headers).unwrap_or_default();
    match sessions.resolve(&token).await {
        Some(name) => {
            let name = escape_html(&name);
            let time = Local::now().format("%-I:%M:%S %p");
            Html(page(
                "Greetings",
                &format!("<p>Greetings, {name}. The time is {time}.</p>\
                          <p><a href=\"/logout\">Log out</a></p>"),
            ))
            .into_response()
        }
        None => Redirect::to("/login").into_response(),
    }
}

#[derive(Deserialize)]
struct LoginForm {
    name: String,
}

/// `GET /login` — the form.
async fn login_form() -> Html<String> {
    Html(page(
        "Log in",
        "<form method=\"post\" action=\"/login\">\
           What is your name? <input type=\"text\" name=\"name\">\
           <input type=\"submit\" value=\"Submit\">\
         </form>",
    ))
}

/// `POST /login` — establish a session and hand the token to the browser.
///
/// The cookie is issued only after the store acknowledged the bind; on
/// any failure the visitor gets an error page and no cookie.
async fn login(
    State(sessions): State<Sessions>,
    Form(form): Form<LoginForm>,
) -> Response {
    let name = form.name.trim();
    if name.is_empty() {
        return Html(page(
            "Log in",
            "<p>C'mon, I need a name.</p><p><a href=\"/login\">Try again</a></p>",
        ))
        .into_response();
    }

    let token = match sessions.establish(name).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            return error_page().into_response();
        }
    };
    let cookie = match issue(&token) {
        Ok(cookie) => cookie,
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            return error_page().into_response();
        }
    };

    ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

/// `GET /logout` — release the session and expire the cookie.
///
/// The release is best-effort; the expired cookie is what actually logs
/// the browser out, so it is written even when the store call failed.
async fn logout(State(sessions): State<Sessions>, headers: HeaderMap) -> Response {
    let Some(token) = extract_token(&headers) else {
        return Redirect::to("/login").into_response();
    };

    sessions.release(&token).await;

    let goodbye = Html(page(
        "Good-bye",
        "<p>Good-bye.</p><p><a href=\"/login\">Log in again</a></p>",
    ));
    match expire(&token) {
        Ok(cookie) => ([(SET_COOKIE, cookie)], goodbye).into_response(),
        // A token that can't be a cookie value was never ours; there is
        // nothing to expire.
        Err(_) => goodbye.into_response(),
    }
}

// ---------------------------------------------------------------------------
// Rendering (trivial glue — a real front-end would use a template engine)
// ---------------------------------------------------------------------------

/// Names are visitor input; a template engine would escape for us.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><title>{title}</title></head>\
         <body>{body}</body></html>"
    )
}

fn error_page() -> (axum::http::StatusCode, Html<String>) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Html(page(
            "Error",
            "<p>Something went wrong logging you in. Please try again.</p>",
        )),
    )
}
