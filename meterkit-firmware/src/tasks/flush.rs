//! Message flush tick
//!
//! Hands the active message slot to the host UART whenever the previous
//! transfer has finished. Runs at `flush_interval_ms` from board.toml.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::MESSAGES;
use crate::config::LINK;

#[embassy_executor::task]
pub async fn flush_task() {
    info!("Flush task started ({} ms)", LINK.flush_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(LINK.flush_interval_ms as u64));

    loop {
        ticker.next().await;

        // Pending just means there is more to send on a later tick
        let _ = MESSAGES.flush();
    }
}
