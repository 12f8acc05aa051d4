mod app_layout;
pub use app_layout::AppLayout;

mod pages;
pub use pages::{CreatePost, EditPost, Home, NotFound, PostDetail, Posts};

pub use ui::views::AboutView as About;
