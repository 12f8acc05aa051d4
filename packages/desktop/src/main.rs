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
    tracing::info!("Blog data lives in {}", ui::data_dir().display());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
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
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/nope/here").unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["nope".to_string(), "here".to_string()]
            }
        );
        assert_eq!(Route::from_str("/posts/7").unwrap(), Route::PostDetail { id: 7 });
        assert_eq!(Route::from_str("/posts/7/edit").unwrap(), Route::EditPost { id: 7 });
    }
}
