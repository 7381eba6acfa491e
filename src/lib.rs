//! # Amortized Collections
//!
//! Small educational collection types built on `Vec`.  Most of them are thin
//! wrappers; the interesting one is [`AmortizedDeque`].
//!
//! ## Key Features
//!
//! * **Amortized front operations:** [`AmortizedDeque`] moves a head index instead of
//!   shifting elements, so `pop_front` and `push_front` are O(1) amortized.
//! * **Bounded waste:** leading empty slots are reclaimed once they exceed a
//!   configurable share of the buffer (see [`DequeConfig`]).
//! * **Baselines:** [`SimpleDeque`] and [`SimpleQueue`] do the naive O(n) shifting so
//!   the difference can be measured (`cargo bench`).
//! * **Interoperability:** [`AnyDeque`] is implemented by both deques and by
//!   `std::collections::VecDeque`.
//!
//! ## Types
//!
//! | Type | Backing | Notes |
//! |------|---------|-------|
//! | [`AmortizedDeque`] | `Vec<Option<T>>` + head index | O(1) amortized at both ends |
//! | [`SimpleDeque`] | `Vec<T>` | O(n) front operations |
//! | [`SimpleQueue`] | `Vec<T>` | O(n) `dequeue` |
//! | [`Stack`] | `Vec<T>` | LIFO |
//! | [`Array2D`] | `Vec<T>`, row-major | panics on out-of-range `[(row, col)]` |
//! | [`LinkedList`] | slot arena | index links, generation-checked handles |
//!
//! Popping from an empty collection returns `None`; it is never an error.
//!
//! ## Examples
//!
//! ### AmortizedDeque
//!
//! ```rust
//! use amortized_collections::AmortizedDeque;
//!
//! let mut d = AmortizedDeque::from_vec(vec![1, 2, 3]);
//! d.push_front(0);
//! assert_eq!(d.len(), 4);
//!
//! d.pop_back();
//! d.pop_back();
//! d.pop_back();
//! assert_eq!(d.pop_back(), Some(0));
//! assert_eq!(d.len(), 0);
//! assert_eq!(d.pop_back(), None);
//! ```
//!
//! ### Custom thresholds
//!
//! ```rust
//! use amortized_collections::{AmortizedDeque, DequeConfig};
//!
//! let config = DequeConfig::builder()
//!     .with_min_trim_len(16)
//!     .with_max_slack_ratio(0.5)
//!     .build()
//!     .unwrap();
//! let mut d: AmortizedDeque<u32> = AmortizedDeque::with_config(config);
//! d.extend(0..32);
//! for _ in 0..17 {
//!     d.pop_front();
//! }
//! // More than half of the 32 slots were empty, so the buffer was compacted.
//! assert_eq!(d.buffer_len(), d.len());
//! ```
//!
//! ### Array2D
//!
//! ```rust
//! use amortized_collections::Array2D;
//!
//! let grid = Array2D::from_rows(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]).unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.cols(), 3);
//! assert_eq!(grid[(1, 2)], "f");
//! ```

// --- Module Declarations ---

pub mod config;
pub mod deques;
pub mod error;
pub mod grid;
pub mod linked_list;
pub mod queues;
pub mod stack;

// --- Re-exports ---

pub use config::{DequeConfig, DequeConfigBuilder};
pub use deques::{AmortizedDeque, AnyDeque, SimpleDeque};
pub use error::CollectionError;
pub use grid::Array2D;
pub use linked_list::{LinkedList, NodeId};
pub use queues::SimpleQueue;
pub use stack::Stack;
