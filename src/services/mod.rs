pub mod frontend;
pub mod listing;
pub mod redirect;
pub mod shorten;

pub use frontend::FrontendService;
pub use listing::ListingService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;
