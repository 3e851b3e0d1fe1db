//! BDD step definitions for mock device setup

use cucumber::{given, then};
use neonrift_dash::device::HealthBehavior;

use crate::world::{DashWorld, MockDevice};

#[given("a running mock device")]
async fn running_device(world: &mut DashWorld) {
    world.device = Some(MockDevice::start("0000A1B2C3D4E5F6").await);
}

#[given(expr = "a running mock device with chip id {string}")]
async fn running_device_with_chip(world: &mut DashWorld, chip_id: String) {
    world.device = Some(MockDevice::start(&chip_id).await);
}

#[given(expr = "a running mock device that fails health with status {int} and reason {string}")]
async fn failing_device(world: &mut DashWorld, status: u16, reason: String) {
    let device = MockDevice::start("0000A1B2C3D4E5F6").await;
    device
        .state
        .set_health(HealthBehavior::Failing { status, reason })
        .await;
    world.device = Some(device);
}

#[given(expr = "a running mock device that answers health with status {int} and text {string}")]
async fn plain_text_device(world: &mut DashWorld, status: u16, body: String) {
    let device = MockDevice::start("0000A1B2C3D4E5F6").await;
    device
        .state
        .set_health(HealthBehavior::PlainText { status, body })
        .await;
    world.device = Some(device);
}

#[given("an unreachable device")]
fn unreachable_device(world: &mut DashWorld) {
    // Port 1 is reserved and unbound
    world.base_url = Some("http://127.0.0.1:1".to_string());
}

#[then(expr = "the device has served {int} info request(s)")]
fn device_served_info(world: &mut DashWorld, expected: u64) {
    assert_eq!(world.device().state.info_requests(), expected);
}
