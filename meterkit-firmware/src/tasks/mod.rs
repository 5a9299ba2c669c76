//! Embassy async tasks

pub mod data_ready;
pub mod flush;
pub mod heartbeat;
pub mod host_uart;

pub use data_ready::data_ready_task;
pub use flush::flush_task;
pub use heartbeat::heartbeat_task;
pub use host_uart::host_uart_task;
