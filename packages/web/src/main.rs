use dioxus::prelude::*;

use store::PostId;
use views::{About, AppLayout, CreatePost, EditPost, Home, NotFound, PostDetail, Posts};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/posts")]
        Posts {},
        #[route("/posts/:id")]
        PostDetail { id: PostId },
        #[route("/posts/:id/edit")]
        EditPost { id: PostId },
        #[route("/create")]
        CreatePost {},
        #[route("/about")]
        About {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting alphaBlog web v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "alphaBlog" }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }

        ui::BlogProvider {
            config: ui::load_config(),
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_routes_parse() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::from_str("/create").unwrap(), Route::CreatePost {});
        assert_eq!(Route::from_str("/posts/42").unwrap(), Route::PostDetail { id: 42 });
        assert_eq!(
            Route::from_str("/missing").unwrap(),
            Route::NotFound {
                segments: vec!["missing".to_string()]
            }
        );
    }
}
