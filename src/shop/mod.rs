//! The shop core: monitor, queues and rendezvous state
//!
//! This is the synchronization heart of the simulator. Everything here is
//! driven through [`Shop`], one monitor guarding:
//!
//! - the [`WaitingArea`] (bounded FIFO of waiting customers),
//! - the [`BarberReadyQueue`] (FIFO of idle barbers),
//! - per-barber chair state and rendezvous signals.
//!
//! Customer threads call [`Shop::arrive`] and [`Shop::depart`]; barber
//! threads cycle [`Shop::summon`] and [`Shop::dismiss`]. See the
//! [`monitor`] module for the coordination rules.

pub mod error;
pub mod monitor;
pub mod ready_queue;
mod rendezvous;
pub mod waiting_area;

pub use error::ShopError;
pub use monitor::{ArrivalOutcome, Shop, SummonOutcome};
pub use ready_queue::BarberReadyQueue;
pub use waiting_area::WaitingArea;
