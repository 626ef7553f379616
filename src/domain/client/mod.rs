pub mod acquisition;
pub mod cache;
pub mod slot;

pub use acquisition::{acquire, app_for};
pub use cache::{shared_client, SharedClient};
pub use slot::{ClientHandle, ClientSlot};
