// spaceeye-api: Async Rust client for the SpaceEye favorites endpoints

pub mod error;
pub mod favorites;
pub mod models;
pub mod transport;

pub use error::Error;
pub use favorites::{Endpoints, FavoritesClient};
pub use models::{AddFavoriteBody, FavoriteAck, RemoveFavoriteBody, ToggleReply};
pub use transport::{TlsMode, TransportConfig};
