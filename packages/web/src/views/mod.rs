mod app_layout;
pub use app_layout::AppLayout;

mod home;
pub use home::Home;

mod posts;
pub use posts::Posts;

mod post_detail;
pub use post_detail::PostDetail;

mod editor;
pub use editor::{CreatePost, EditPost};

mod not_found;
pub use not_found::NotFound;

pub use ui::views::AboutView as About;
