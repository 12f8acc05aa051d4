mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod home;
pub use home::HomeView;

mod post_list;
pub use post_list::PostListView;

mod post_detail;
pub use post_detail::PostDetailView;

mod post_editor;
pub use post_editor::PostEditorView;

mod about;
pub use about::AboutView;
