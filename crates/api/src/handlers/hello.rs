use axum::extract::Path;

pub async fn give_hint() -> &'static str {
    "Try /hello/{name}"
}

pub async fn say_hello(Path(name): Path<String>) -> String {
    format!("Hello {name}")
}
