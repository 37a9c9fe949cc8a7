pub mod filesystem_inventory;

pub use filesystem_inventory::FileSystemInventory;
