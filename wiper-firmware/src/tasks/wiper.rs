//! Wiper control task
//!
//! Runs the control tick on a fixed period: sample the switch, advance
//! the controller, write the relay. The ticker is only a throttle; all
//! timing decisions use the clock reading taken each tick.

use defmt::*;
use embassy_time::{Duration, Ticker};

use wiper_core::{Timestamp, WiperController};
use wiper_drivers::{RelayOutput, SwitchInput};
use wiper_hal_rp2040::{Clock, EmbassyClock, RpInput, RpOutput};

use crate::channels::EVENT_CHANNEL;

/// Wiper control task
#[embassy_executor::task]
pub async fn wiper_task(
    switch: SwitchInput<RpInput<'static>>,
    mut relay: RelayOutput<RpOutput<'static>>,
    clock: EmbassyClock,
    mut controller: WiperController,
) {
    info!("Wiper task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(controller.config().tick_ms)));

    loop {
        let now = Timestamp::from_millis(clock.now_ms());
        let out = controller.tick(switch.is_on(), now);
        relay.set(out.relay);

        for event in out.events.iter() {
            if EVENT_CHANNEL.try_send(*event).is_err() {
                warn!("Event channel full, dropping {:?}", event);
            }
        }

        ticker.next().await;
    }
}
