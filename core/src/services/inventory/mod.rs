//! Inventory lookup service

mod service;


pub use service::InventoryService;
