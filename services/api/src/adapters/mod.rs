pub mod id_generator;
pub mod memory_store;

pub use id_generator::UuidV4Generator;
pub use memory_store::InMemoryReceiptStore;
