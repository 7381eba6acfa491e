pub mod simple_queue;

pub use simple_queue::SimpleQueue;
