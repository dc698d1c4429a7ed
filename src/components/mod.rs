pub mod app;
pub mod bookmarks_page;
pub mod company_card;
pub mod company_list;
pub mod header;
pub mod login_dialog;
pub mod search_bar;

pub use app::App;
pub use bookmarks_page::BookmarksPage;
pub use company_card::CompanyCard;
pub use company_list::CompanyList;
pub use header::{Header, Page};
pub use login_dialog::LoginDialog;
pub use search_bar::SearchBar;
