//! Server-rendered pages. These are fixed markup; the forms post back to
//! their own page and no handler consumes the submission.

use axum::{Router, response::Html, routing::get};

pub const APP_TITLE: &str = "My ToDo App";

const HEADER_STYLE: &str = ".header{display:flex;justify-content:space-between;align-items:center;\
padding:1rem 2rem;border-bottom:1px solid #dee2e6}.header .logo{font-weight:700;font-size:1.25rem;\
text-decoration:none;color:inherit}";

pub fn page_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login/", get(login))
        .route("/register/", get(register))
}

pub fn header() -> String {
    format!(
        r#"<div class="header">
    <a class="logo" href="/">{APP_TITLE}</a>
    <a href="/login/" class="text-decoration-none">Login</a>
</div>"#
    )
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<style>{HEADER_STYLE}</style>
</head>
<body>
{header}
{body}
</body>
</html>"#,
        header = header(),
    ))
}

fn floating_input(kind: &str, name: &str, placeholder: &str, label: &str) -> String {
    format!(
        r#"<div class="form-floating mb-3">
    <input type="{kind}" class="form-control" id="{name}" name="{name}" placeholder="{placeholder}"/>
    <label for="{name}">{label}</label>
</div>"#
    )
}

fn card(inner: &str) -> String {
    format!(
        r#"<div class="d-flex justify-content-center align-items-center">
<div class="card p-3 py-4 col-md-8 col-sm-11 my-5">
<form method="POST">
{inner}
</form>
</div>
</div>"#
    )
}

pub fn login_form() -> String {
    let fields = [
        floating_input("email", "email", "name@example.com", "Email address"),
        floating_input("password", "password", "Password", "Password"),
    ]
    .join("\n");
    card(&format!(
        r#"<div class="fw-bolder fs-2">{APP_TITLE}</div>
<div class="text-muted mb-4">Login to your account to manage your tasks.</div>
{fields}
<div>
    <button class="btn btn-primary" type="submit">Login</button>
    <p class="small mt-3">Dont have an account ?? <a href="/register/" class="text-decoration-none">Register</a></p>
</div>"#
    ))
}

pub fn register_form() -> String {
    let fields = [
        floating_input("text", "name", "Name", "Name"),
        floating_input("email", "email", "name@example.com", "Email address"),
        floating_input("password", "password", "Password", "Password"),
    ]
    .join("\n");
    card(&format!(
        r#"<div>Register to</div>
<div class="fw-bolder fs-2">{APP_TITLE}</div>
<div class="text-muted mb-4">Register to create your account to manage your tasks.</div>
{fields}
<div>
    <button class="btn btn-primary" type="submit">Signup</button>
    <p class="small mt-3">Having an account ?? <a href="/login/" class="text-decoration-none">Login</a></p>
</div>"#
    ))
}

async fn home() -> Html<String> {
    layout(APP_TITLE, r#"<main class="container my-5"></main>"#)
}

async fn login() -> Html<String> {
    layout(&format!("Login | {APP_TITLE}"), &login_form())
}

async fn register() -> Html<String> {
    layout(&format!("Register | {APP_TITLE}"), &register_form())
}
